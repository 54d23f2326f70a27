//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, ..) -> CalcResult<*Result>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`penetration`] - Geometric limits for a rectangular web opening
//! - [`composite`] - Force set, neutral-axis case and depth for a composite section
//! - [`composite_case`] - Case classifier and per-case depth dispatch

pub mod composite;
pub mod composite_case;
pub mod penetration;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::project::DesignSettings;

pub use composite::{CompositeResult, CompositeSectionInput, ForceSet};
pub use composite_case::{get_composite_case, get_d_h, CaseBands, CompositeCase, DepthCase};
pub use penetration::{
    check_penetration_dimensions, check_penetration_position, LimitCheck, LimitViolation, PenetrationInput,
    PenetrationLimits, PenetrationResult,
};

/// Enum wrapper for all calculation types.
///
/// Lets a project store heterogeneous calculations in one map while keeping
/// a clean tagged serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Web opening geometry check
    Penetration(PenetrationInput),
    /// Composite section neutral-axis calculation
    CompositeSection(CompositeSectionInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Penetration(p) => &p.label,
            CalculationItem::CompositeSection(c) => &c.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Penetration(_) => "Penetration",
            CalculationItem::CompositeSection(_) => "CompositeSection",
        }
    }

    /// Run the calculation with the project's settings.
    pub fn evaluate(&self, settings: &DesignSettings) -> CalcResult<ItemResult> {
        match self {
            CalculationItem::Penetration(input) => {
                penetration::calculate(input, &settings.penetration_limits).map(ItemResult::Penetration)
            }
            CalculationItem::CompositeSection(input) => {
                composite::calculate(input, settings).map(ItemResult::CompositeSection)
            }
        }
    }
}

/// Result of evaluating one [`CalculationItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ItemResult {
    Penetration(PenetrationResult),
    CompositeSection(CompositeResult),
}

impl ItemResult {
    /// One-line summary for listings
    pub fn summary(&self) -> String {
        match self {
            ItemResult::Penetration(r) => {
                let count = r.violations().count();
                if count == 0 {
                    "all geometric limits satisfied".to_string()
                } else {
                    format!("{} limit(s) violated", count)
                }
            }
            ItemResult::CompositeSection(r) => {
                format!("{}, d_h = {:.1}, beta = {:.3}", r.case, r.d_h, r.forces.beta)
            }
        }
    }

    /// False when a penetration violates any limit
    pub fn passes(&self) -> bool {
        match self {
            ItemResult::Penetration(r) => r.passes(),
            ItemResult::CompositeSection(_) => true,
        }
    }
}
