//! # Web Penetration Geometry Checks
//!
//! Checks a rectangular web opening against the geometric limits of the web
//! penetration design guide. The limits are independent threshold
//! comparisons; every violated limit is reported, in the order below.
//!
//! ## Dimension limits (beam depth D)
//!
//! - Opening height h_0 <= 0.7 D
//! - Top tee depth s_t >= 0.15 D
//! - Bottom tee depth s_b >= 0.12 D (composite) or 0.15 D (steel only)
//! - a_0 / s_t <= 12 and a_0 / s_b <= 12
//! - a_0 / h_0 + 6 h_0 / D <= 6
//!
//! ## Position limits
//!
//! - Distance to each support minus the opening length >= D
//!
//! ## Example
//!
//! ```rust
//! use peno_core::calculations::penetration::{check_penetration_dimensions, PenetrationLimits};
//!
//! let check = check_penetration_dimensions(
//!     400.0, 200.0, 400.0, 100.0, 100.0, true, &PenetrationLimits::default(),
//! ).unwrap();
//! assert!(check.passes());
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{CalcError, CalcResult};

/// Configurable geometric limits, defaulting to the design guide values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenetrationLimits {
    /// Maximum h_0 / D
    pub max_height_ratio: f64,
    /// Minimum s_t / D
    pub min_top_gap_ratio: f64,
    /// Minimum s_b / D for composite beams
    pub min_bottom_gap_ratio_composite: f64,
    /// Minimum s_b / D for steel-only beams
    pub min_bottom_gap_ratio_steel: f64,
    /// Maximum a_0 / s for either tee
    pub max_length_to_gap: f64,
    /// Maximum a_0 / h_0 + 6 h_0 / D
    pub max_combined_size: f64,
    /// Minimum (support distance - a_0) / D
    pub min_edge_clearance_ratio: f64,
}

impl Default for PenetrationLimits {
    fn default() -> Self {
        PenetrationLimits {
            max_height_ratio: 0.7,
            min_top_gap_ratio: 0.15,
            min_bottom_gap_ratio_composite: 0.12,
            min_bottom_gap_ratio_steel: 0.15,
            max_length_to_gap: 12.0,
            max_combined_size: 6.0,
            min_edge_clearance_ratio: 1.0,
        }
    }
}

/// A violated geometric limit, with the actual value and the limit it broke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "limit")]
pub enum LimitViolation {
    TooDeep { height: f64, max: f64 },
    TooCloseToTop { top_gap: f64, min: f64 },
    TooCloseToBottom { bottom_gap: f64, min: f64 },
    TooLongForGaps { ratio: f64, max: f64 },
    TooLargeForBeam { value: f64, max: f64 },
    TooCloseToLeft { clearance: f64, min: f64 },
    TooCloseToRight { clearance: f64, min: f64 },
}

impl LimitViolation {
    /// Message shown to the engineer
    pub fn message(&self) -> &'static str {
        match self {
            LimitViolation::TooDeep { .. } => "Penetration is too deep",
            LimitViolation::TooCloseToTop { .. } => "Penetration is too close to top of beam",
            LimitViolation::TooCloseToBottom { .. } => "Penetration is too close to bottom of beam",
            LimitViolation::TooLongForGaps { .. } => {
                "Penetration is too long given how close it is to top or bottom of the beam"
            }
            LimitViolation::TooLargeForBeam { .. } => {
                "Penetration dimensions are too large relative to the beam depth"
            }
            LimitViolation::TooCloseToLeft { .. } => "Left distance to the penetration is too small",
            LimitViolation::TooCloseToRight { .. } => "Right distance to the penetration is too small",
        }
    }

    /// Registry entry for the limit
    pub fn equation(&self) -> Equation {
        match self {
            LimitViolation::TooDeep { .. } => Equation::OpeningHeightLimit,
            LimitViolation::TooCloseToTop { .. } => Equation::TopGapLimit,
            LimitViolation::TooCloseToBottom { .. } => Equation::BottomGapLimit,
            LimitViolation::TooLongForGaps { .. } => Equation::GapAspectLimit,
            LimitViolation::TooLargeForBeam { .. } => Equation::CombinedSizeLimit,
            LimitViolation::TooCloseToLeft { .. } | LimitViolation::TooCloseToRight { .. } => {
                Equation::EdgeDistanceLimit
            }
        }
    }
}

impl std::fmt::Display for LimitViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            LimitViolation::TooDeep { height, max } => {
                write!(f, "{} (h_0 = {:.1} > {:.1})", self.message(), height, max)
            }
            LimitViolation::TooCloseToTop { top_gap, min } => {
                write!(f, "{} (s_t = {:.1} < {:.1})", self.message(), top_gap, min)
            }
            LimitViolation::TooCloseToBottom { bottom_gap, min } => {
                write!(f, "{} (s_b = {:.1} < {:.1})", self.message(), bottom_gap, min)
            }
            LimitViolation::TooLongForGaps { ratio, max } => {
                write!(f, "{} (a_0/s = {:.2} > {:.2})", self.message(), ratio, max)
            }
            LimitViolation::TooLargeForBeam { value, max } => {
                write!(f, "{} ({:.2} > {:.2})", self.message(), value, max)
            }
            LimitViolation::TooCloseToLeft { clearance, min } | LimitViolation::TooCloseToRight { clearance, min } => {
                write!(f, "{} (clearance {:.1} < {:.1})", self.message(), clearance, min)
            }
        }
    }
}

/// Outcome of one group of limit checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LimitCheck {
    pub violations: Vec<LimitViolation>,
}

impl LimitCheck {
    pub fn passes(&self) -> bool {
        self.violations.is_empty()
    }

    /// Message of the first violated limit, if any
    pub fn first_failure(&self) -> Option<&'static str> {
        self.violations.first().map(|v| v.message())
    }
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be a finite positive number"));
    }
    Ok(())
}

/// Check opening dimensions against the beam depth.
///
/// # Arguments
///
/// * `depth_of_beam` - Overall steel depth D
/// * `height` - Opening height h_0
/// * `length` - Opening length a_0
/// * `top_gap` - Depth of steel above the opening s_t
/// * `bottom_gap` - Depth of steel below the opening s_b
/// * `composite` - Whether the beam acts compositely with a slab
/// * `limits` - Limit values
///
/// # Returns
///
/// * `Ok(LimitCheck)` - Every violated limit (empty when the opening is admissible)
/// * `Err(CalcError::InvalidInput)` - A dimension is not positive
pub fn check_penetration_dimensions(
    depth_of_beam: f64,
    height: f64,
    length: f64,
    top_gap: f64,
    bottom_gap: f64,
    composite: bool,
    limits: &PenetrationLimits,
) -> CalcResult<LimitCheck> {
    require_positive("depth_of_beam", depth_of_beam)?;
    require_positive("height", height)?;
    require_positive("length", length)?;
    require_positive("top_gap", top_gap)?;
    require_positive("bottom_gap", bottom_gap)?;

    let d = depth_of_beam;
    let mut violations = Vec::new();

    let max_height = limits.max_height_ratio * d;
    if height > max_height {
        violations.push(LimitViolation::TooDeep { height, max: max_height });
    }

    let min_top = limits.min_top_gap_ratio * d;
    if top_gap < min_top {
        violations.push(LimitViolation::TooCloseToTop { top_gap, min: min_top });
    }

    let bottom_ratio = if composite {
        limits.min_bottom_gap_ratio_composite
    } else {
        limits.min_bottom_gap_ratio_steel
    };
    let min_bottom = bottom_ratio * d;
    if bottom_gap < min_bottom {
        violations.push(LimitViolation::TooCloseToBottom { bottom_gap, min: min_bottom });
    }

    let worst_ratio = (length / top_gap).max(length / bottom_gap);
    if worst_ratio > limits.max_length_to_gap {
        violations.push(LimitViolation::TooLongForGaps {
            ratio: worst_ratio,
            max: limits.max_length_to_gap,
        });
    }

    let combined = length / height + 6.0 * height / d;
    if combined > limits.max_combined_size {
        violations.push(LimitViolation::TooLargeForBeam {
            value: combined,
            max: limits.max_combined_size,
        });
    }

    Ok(LimitCheck { violations })
}

/// Check that the opening is far enough from both supports.
///
/// # Returns
///
/// * `Ok(LimitCheck)` - Every violated limit
/// * `Err(CalcError::InvalidInput)` - Depth or length not positive, or a distance negative
pub fn check_penetration_position(
    depth_of_beam: f64,
    left_distance: f64,
    right_distance: f64,
    length: f64,
    limits: &PenetrationLimits,
) -> CalcResult<LimitCheck> {
    require_positive("depth_of_beam", depth_of_beam)?;
    require_positive("length", length)?;
    for (field, value) in [("left_distance", left_distance), ("right_distance", right_distance)] {
        if !value.is_finite() || value < 0.0 {
            return Err(CalcError::invalid_input(field, value.to_string(), "Distance cannot be negative"));
        }
    }

    let min = limits.min_edge_clearance_ratio * depth_of_beam;
    let mut violations = Vec::new();

    let left = left_distance - length;
    if left < min {
        violations.push(LimitViolation::TooCloseToLeft { clearance: left, min });
    }
    let right = right_distance - length;
    if right < min {
        violations.push(LimitViolation::TooCloseToRight { clearance: right, min });
    }

    Ok(LimitCheck { violations })
}

/// A rectangular web opening and its position along the span.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-1",
///   "depth_of_beam": 400.0,
///   "height": 200.0,
///   "length": 400.0,
///   "top_gap": 100.0,
///   "bottom_gap": 100.0,
///   "left_distance": 1500.0,
///   "right_distance": 3000.0,
///   "composite": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenetrationInput {
    /// User label (e.g., "P-1", "Duct at grid 3")
    pub label: String,
    /// Overall steel depth D
    pub depth_of_beam: f64,
    /// Opening height h_0
    pub height: f64,
    /// Opening length a_0
    pub length: f64,
    /// Steel depth above the opening s_t
    pub top_gap: f64,
    /// Steel depth below the opening s_b
    pub bottom_gap: f64,
    /// Distance from the left support to the opening
    pub left_distance: f64,
    /// Distance from the right support to the opening
    pub right_distance: f64,
    /// Beam acts compositely with a slab
    #[serde(default = "default_composite")]
    pub composite: bool,
}

fn default_composite() -> bool {
    true
}

/// Results of both checks for one opening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenetrationResult {
    pub dimensions: LimitCheck,
    pub position: LimitCheck,
    pub equations: EquationTracker,
}

impl PenetrationResult {
    pub fn passes(&self) -> bool {
        self.dimensions.passes() && self.position.passes()
    }

    /// All violations, dimensions first
    pub fn violations(&self) -> impl Iterator<Item = &LimitViolation> {
        self.dimensions.violations.iter().chain(self.position.violations.iter())
    }
}

/// Run the dimension and position checks for one opening.
pub fn calculate(input: &PenetrationInput, limits: &PenetrationLimits) -> CalcResult<PenetrationResult> {
    let dimensions = check_penetration_dimensions(
        input.depth_of_beam,
        input.height,
        input.length,
        input.top_gap,
        input.bottom_gap,
        input.composite,
        limits,
    )?;
    let position = check_penetration_position(
        input.depth_of_beam,
        input.left_distance,
        input.right_distance,
        input.length,
        limits,
    )?;

    let mut equations = EquationTracker::new();
    equations.record_all(
        &[
            Equation::OpeningHeightLimit,
            Equation::TopGapLimit,
            Equation::BottomGapLimit,
            Equation::GapAspectLimit,
            Equation::CombinedSizeLimit,
            Equation::EdgeDistanceLimit,
        ],
        &input.label,
    );

    let result = PenetrationResult {
        dimensions,
        position,
        equations,
    };
    for violation in result.violations() {
        warn!(label = %input.label, "{}", violation);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> PenetrationLimits {
        PenetrationLimits::default()
    }

    fn test_opening() -> PenetrationInput {
        PenetrationInput {
            label: "P-1".to_string(),
            depth_of_beam: 400.0,
            height: 200.0,
            length: 400.0,
            top_gap: 100.0,
            bottom_gap: 100.0,
            left_distance: 1500.0,
            right_distance: 3000.0,
            composite: true,
        }
    }

    #[test]
    fn test_admissible_opening_passes() {
        // 400/200 + 6 * 200/400 = 5.0 <= 6
        let result = calculate(&test_opening(), &limits()).unwrap();
        assert!(result.passes());
        assert_eq!(result.violations().count(), 0);
    }

    #[test]
    fn test_too_deep() {
        let check = check_penetration_dimensions(400.0, 300.0, 300.0, 60.0, 60.0, true, &limits()).unwrap();
        assert_eq!(check.first_failure(), Some("Penetration is too deep"));
    }

    #[test]
    fn test_too_close_to_top() {
        // 0.15 * 400 = 60
        let check = check_penetration_dimensions(400.0, 200.0, 300.0, 55.0, 145.0, true, &limits()).unwrap();
        assert_eq!(check.violations.len(), 1);
        assert_eq!(check.first_failure(), Some("Penetration is too close to top of beam"));
    }

    #[test]
    fn test_bottom_gap_depends_on_composite_action() {
        // 0.12 * 400 = 48 (composite), 0.15 * 400 = 60 (steel)
        let composite = check_penetration_dimensions(400.0, 200.0, 300.0, 150.0, 50.0, true, &limits()).unwrap();
        assert!(composite.passes());

        let steel = check_penetration_dimensions(400.0, 200.0, 300.0, 150.0, 50.0, false, &limits()).unwrap();
        assert_eq!(
            steel.violations,
            vec![LimitViolation::TooCloseToBottom { bottom_gap: 50.0, min: 60.0 }]
        );
    }

    #[test]
    fn test_too_long_for_gaps() {
        // 900 / 70 = 12.86 > 12; combined 900/100 + 6*100/400 = 10.5 > 6
        let check = check_penetration_dimensions(400.0, 100.0, 900.0, 70.0, 230.0, true, &limits()).unwrap();
        assert_eq!(check.violations.len(), 2);
        assert!(matches!(check.violations[0], LimitViolation::TooLongForGaps { .. }));
        assert!(matches!(check.violations[1], LimitViolation::TooLargeForBeam { .. }));
    }

    #[test]
    fn test_combined_size_limit() {
        // 500/250 + 6 * 250/400 = 5.75 passes, 600/250 + 3.75 = 6.15 fails
        let ok = check_penetration_dimensions(400.0, 250.0, 500.0, 75.0, 75.0, true, &limits()).unwrap();
        assert!(ok.passes());
        let bad = check_penetration_dimensions(400.0, 250.0, 600.0, 75.0, 75.0, true, &limits()).unwrap();
        assert_eq!(
            bad.first_failure(),
            Some("Penetration dimensions are too large relative to the beam depth")
        );
    }

    #[test]
    fn test_limits_are_inclusive() {
        // h_0 = 0.7 D exactly, s_t = 0.15 D exactly
        let check = check_penetration_dimensions(1000.0, 700.0, 300.0, 150.0, 150.0, true, &limits()).unwrap();
        assert!(check.violations.iter().all(|v| !matches!(v, LimitViolation::TooDeep { .. })));
        assert!(check.violations.iter().all(|v| !matches!(v, LimitViolation::TooCloseToTop { .. })));
    }

    #[test]
    fn test_position_limits() {
        let check = check_penetration_position(400.0, 700.0, 900.0, 400.0, &limits()).unwrap();
        assert_eq!(
            check.violations,
            vec![LimitViolation::TooCloseToLeft { clearance: 300.0, min: 400.0 }]
        );

        let both = check_penetration_position(400.0, 500.0, 500.0, 400.0, &limits()).unwrap();
        assert_eq!(both.violations.len(), 2);
        assert_eq!(both.first_failure(), Some("Left distance to the penetration is too small"));

        let edge = check_penetration_position(400.0, 800.0, 800.0, 400.0, &limits()).unwrap();
        assert!(edge.passes());
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        let err = check_penetration_dimensions(400.0, 0.0, 300.0, 100.0, 100.0, true, &limits()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "height"));

        assert!(check_penetration_dimensions(400.0, 200.0, 300.0, -1.0, 100.0, true, &limits()).is_err());
        assert!(check_penetration_position(400.0, -5.0, 100.0, 300.0, &limits()).is_err());
        assert!(check_penetration_position(0.0, 500.0, 500.0, 300.0, &limits()).is_err());
    }

    #[test]
    fn test_custom_limits() {
        let strict = PenetrationLimits {
            max_height_ratio: 0.4,
            ..PenetrationLimits::default()
        };
        let result = calculate(&test_opening(), &strict).unwrap();
        assert!(!result.passes());
        assert_eq!(result.dimensions.first_failure(), Some("Penetration is too deep"));
    }

    #[test]
    fn test_violation_display() {
        let v = LimitViolation::TooDeep { height: 300.0, max: 280.0 };
        assert_eq!(v.to_string(), "Penetration is too deep (h_0 = 300.0 > 280.0)");
        assert_eq!(v.equation(), Equation::OpeningHeightLimit);
    }

    #[test]
    fn test_serialization() {
        let json = r#"{
            "label": "P-2",
            "depth_of_beam": 400.0,
            "height": 200.0,
            "length": 400.0,
            "top_gap": 100.0,
            "bottom_gap": 100.0,
            "left_distance": 1500.0,
            "right_distance": 3000.0
        }"#;
        let input: PenetrationInput = serde_json::from_str(json).unwrap();
        assert!(input.composite);

        let limits: PenetrationLimits = serde_json::from_str(r#"{ "max_height_ratio": 0.5 }"#).unwrap();
        assert_eq!(limits.max_height_ratio, 0.5);
        assert_eq!(limits.max_length_to_gap, 12.0);
    }
}
