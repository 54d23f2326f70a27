//! # peno_core - Web Penetration Calculation Engine
//!
//! `peno_core` checks rectangular openings in the webs of steel beams and
//! computes the plastic neutral axis of the composite section through the
//! opening. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use peno_core::calculations::penetration::{check_penetration_dimensions, PenetrationLimits};
//!
//! let check = check_penetration_dimensions(
//!     400.0, 300.0, 300.0, 60.0, 40.0, true, &PenetrationLimits::default(),
//! ).unwrap();
//! assert_eq!(check.first_failure(), Some("Penetration is too deep"));
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Project container, metadata, and design settings
//! - [`calculations`] - Penetration checks and composite section analysis
//! - [`equations`] - Force model, depth formulas and the equation registry
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic project and report files

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod project;

pub use calculations::composite_case::{get_composite_case, get_d_h, CompositeCase};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project, save_report};
pub use project::{DesignSettings, Project, ProjectMetadata, ProjectReport};
