//! # Composite Section Equations
//!
//! All formulas used by the calculations live here, one function per equation,
//! so each can be checked against its reference in isolation.
//!
//! ## Modules
//!
//! - [`forces`] - Concrete, shear connector and steel force model
//! - [`depth`] - Neutral axis depth for each of the six composite cases
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Conventions
//!
//! - **Depths**: Measured downward from the top of the slab
//! - **Forces**: Positive magnitudes; slab compression balances steel tension
//! - **Units**: Any consistent set, nothing is converted

pub mod depth;
pub mod forces;
pub mod registry;

pub use depth::{
    bottom_bar_case_depth,
    bottom_web_case_depth,
    slab_case_depth,
    top_bar_case_depth,
    top_flange_case_depth,
    top_web_case_depth,
};

pub use forces::{
    concrete_above_rib,
    concrete_total,
    concrete_within_rib,
    connector_capacity,
    connector_design_strength,
    effective_top_flange_area,
    full_connection_compression,
    governing_compression,
    group_reduction_factor,
    segment_yield_force,
    shear_connection_degree,
    steel_tension,
    stress_block_depth,
    CONCRETE_STRESS_BLOCK_FACTOR,
    DEFAULT_CONNECTOR_PHI,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
