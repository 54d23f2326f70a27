//! # Equation Registry
//!
//! Central registry of every equation used by the penetration checks and the
//! composite section calculation. Each equation carries its formula, source
//! reference, variables and the function implementing it, so a calculation
//! can report exactly which formulas produced its numbers.
//!
//! ## Usage
//!
//! ```rust
//! use peno_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::GoverningCompression, "Section S-1");
//!
//! let meta = Equation::GoverningCompression.metadata();
//! assert_eq!(meta.formula_plain, "F_cH = min(F_c, n_H * f_ds, F_s)");
//! assert_eq!(tracker.unique_equations().len(), 1);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Source of an equation, cited in generated documentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Composite steel-concrete beam design standard
    CompositeDesign { topic: &'static str },
    /// Design guide for web penetrations in steel and composite beams
    PenetrationGuide { topic: &'static str },
    /// Plastic equilibrium of the section at the opening
    PlasticEquilibrium { region: &'static str },
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::CompositeDesign { topic } => format!("Composite beam design, {}", topic),
            CodeReference::PenetrationGuide { topic } => format!("Web penetration design guide, {}", topic),
            CodeReference::PlasticEquilibrium { region } => {
                format!("Plastic equilibrium, neutral axis in {}", region)
            }
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Concrete slab compression
    ConcreteForces,
    /// Shear connector strength and degree of connection
    ShearConnection,
    /// Steel section and segment yield forces
    SteelForces,
    /// Selection of the governing neutral-axis case
    CaseClassification,
    /// Per-case neutral axis depth
    NeutralAxisDepth,
    /// Geometric admissibility of the opening
    GeometricLimits,
}

impl EquationCategory {
    /// All categories in documentation order
    pub const ALL: [EquationCategory; 6] = [
        EquationCategory::GeometricLimits,
        EquationCategory::ConcreteForces,
        EquationCategory::ShearConnection,
        EquationCategory::SteelForces,
        EquationCategory::CaseClassification,
        EquationCategory::NeutralAxisDepth,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::ConcreteForces => "Concrete Forces",
            EquationCategory::ShearConnection => "Shear Connection",
            EquationCategory::SteelForces => "Steel Forces",
            EquationCategory::CaseClassification => "Case Classification",
            EquationCategory::NeutralAxisDepth => "Neutral Axis Depth",
            EquationCategory::GeometricLimits => "Geometric Limits",
        }
    }

    /// Sort order for documentation (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::GeometricLimits => 1,
            EquationCategory::ConcreteForces => 2,
            EquationCategory::ShearConnection => 3,
            EquationCategory::SteelForces => 4,
            EquationCategory::CaseClassification => 5,
            EquationCategory::NeutralAxisDepth => 6,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// What the equation calculates
    pub description: &'static str,
    /// Plain-text formula
    pub formula_plain: &'static str,
    /// Source reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source file implementing the equation
    pub source_module: &'static str,
    /// Function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every equation used by Webpen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // Geometric limits
    /// h_0 <= 0.7 D
    OpeningHeightLimit,
    /// s_t >= 0.15 D
    TopGapLimit,
    /// s_b >= 0.12 D (composite) or 0.15 D
    BottomGapLimit,
    /// a_0 / s <= 12
    GapAspectLimit,
    /// a_0/h_0 + 6 h_0/D <= 6
    CombinedSizeLimit,
    /// Edge distance minus opening length >= D
    EdgeDistanceLimit,

    // Concrete
    /// F_c1 = 0.85 f_c b_cf (D_c - h_r)
    ConcreteAboveRib,
    /// F_c2 = 0.85 f_c b_cf λ h_r
    ConcreteWithinRib,
    /// F_c = F_c1 + F_c2
    ConcreteTotal,
    /// d_c = F_cH / (0.85 b_cf f_c)
    StressBlockDepth,

    // Shear connection
    /// k_n = 1.18 - 0.18 √n
    GroupReductionFactor,
    /// f_ds = φ k_n f_vs
    ConnectorDesignStrength,
    /// β = min(n_H f_ds / F_cc, 1)
    ShearConnectionDegree,

    // Steel
    /// F_s = A_s f_y
    SteelTension,
    /// F = A f_y for flange, web and bar segments
    SegmentYieldForce,
    /// F_cH = min(F_c, n_H f_ds, F_s)
    GoverningCompression,
    /// F_cc = min(F_c, F_s)
    FullConnectionCompression,

    // Case classification
    /// First band containing F_cH
    CompositeCaseBands,

    // Neutral axis depth
    /// Case 1
    SlabCaseDepth,
    /// Case 2
    TopFlangeCaseDepth,
    /// Case 3
    TopWebCaseDepth,
    /// Case 4
    TopBarCaseDepth,
    /// Case 5
    BottomBarCaseDepth,
    /// Case 6
    BottomWebCaseDepth,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        let d = Variable::new("D", "Depth of the steel beam", "mm");
        let f_ch = Variable::new("F_cH", "Governing compressive force", "N");
        match self {
            Equation::OpeningHeightLimit => EquationMetadata {
                name: "Opening Height Limit",
                description: "Maximum opening height relative to beam depth",
                formula_plain: "h_0 <= 0.7 * D",
                reference: CodeReference::PenetrationGuide { topic: "opening size" },
                variables: vec![Variable::new("h_0", "Opening height", "mm"), d],
                assumptions: vec!["Rectangular opening centred in the web region"],
                category: EquationCategory::GeometricLimits,
                source_module: "calculations/penetration.rs",
                source_function: "check_penetration_dimensions",
            },
            Equation::TopGapLimit => EquationMetadata {
                name: "Top Tee Depth Limit",
                description: "Minimum depth of steel above the opening",
                formula_plain: "s_t >= 0.15 * D",
                reference: CodeReference::PenetrationGuide { topic: "tee depths" },
                variables: vec![Variable::new("s_t", "Depth from top of beam to opening", "mm"), d],
                assumptions: vec![],
                category: EquationCategory::GeometricLimits,
                source_module: "calculations/penetration.rs",
                source_function: "check_penetration_dimensions",
            },
            Equation::BottomGapLimit => EquationMetadata {
                name: "Bottom Tee Depth Limit",
                description: "Minimum depth of steel below the opening",
                formula_plain: "s_b >= 0.12 * D (composite), s_b >= 0.15 * D (steel only)",
                reference: CodeReference::PenetrationGuide { topic: "tee depths" },
                variables: vec![Variable::new("s_b", "Depth from opening to bottom of beam", "mm"), d],
                assumptions: vec!["The slab stiffens the top tee of a composite beam"],
                category: EquationCategory::GeometricLimits,
                source_module: "calculations/penetration.rs",
                source_function: "check_penetration_dimensions",
            },
            Equation::GapAspectLimit => EquationMetadata {
                name: "Tee Slenderness Limit",
                description: "Maximum opening length relative to the depth of each tee",
                formula_plain: "a_0 / s_t <= 12 and a_0 / s_b <= 12",
                reference: CodeReference::PenetrationGuide { topic: "tee slenderness" },
                variables: vec![Variable::new("a_0", "Opening length", "mm")],
                assumptions: vec![],
                category: EquationCategory::GeometricLimits,
                source_module: "calculations/penetration.rs",
                source_function: "check_penetration_dimensions",
            },
            Equation::CombinedSizeLimit => EquationMetadata {
                name: "Combined Opening Size Limit",
                description: "Interaction of opening aspect ratio and relative height",
                formula_plain: "a_0 / h_0 + 6 * h_0 / D <= 6.0",
                reference: CodeReference::PenetrationGuide { topic: "opening size" },
                variables: vec![
                    Variable::new("a_0", "Opening length", "mm"),
                    Variable::new("h_0", "Opening height", "mm"),
                    d,
                ],
                assumptions: vec![],
                category: EquationCategory::GeometricLimits,
                source_module: "calculations/penetration.rs",
                source_function: "check_penetration_dimensions",
            },
            Equation::EdgeDistanceLimit => EquationMetadata {
                name: "Opening Position Limit",
                description: "Minimum clear distance from the opening to each support",
                formula_plain: "x_left - a_0 >= D and x_right - a_0 >= D",
                reference: CodeReference::PenetrationGuide { topic: "opening position" },
                variables: vec![
                    Variable::new("x_left", "Distance from left support", "mm"),
                    Variable::new("x_right", "Distance from right support", "mm"),
                    Variable::new("a_0", "Opening length", "mm"),
                    d,
                ],
                assumptions: vec![],
                category: EquationCategory::GeometricLimits,
                source_module: "calculations/penetration.rs",
                source_function: "check_penetration_position",
            },
            Equation::ConcreteAboveRib => EquationMetadata {
                name: "Concrete Above Ribs",
                description: "Compression capacity of the slab above the deck ribs",
                formula_plain: "F_c1 = 0.85 * f_c * b_cf * (D_c - h_r)",
                reference: CodeReference::CompositeDesign { topic: "concrete compression" },
                variables: vec![
                    Variable::new("f_c", "Concrete compressive strength", "MPa"),
                    Variable::new("b_cf", "Effective concrete flange width", "mm"),
                    Variable::new("D_c", "Slab depth", "mm"),
                    Variable::new("h_r", "Rib height", "mm"),
                ],
                assumptions: vec!["Rectangular stress block of 0.85 f_c"],
                category: EquationCategory::ConcreteForces,
                source_module: "equations/forces.rs",
                source_function: "concrete_above_rib",
            },
            Equation::ConcreteWithinRib => EquationMetadata {
                name: "Concrete Within Ribs",
                description: "Compression capacity of the concrete filling the deck ribs",
                formula_plain: "F_c2 = 0.85 * f_c * b_cf * lambda * h_r",
                reference: CodeReference::CompositeDesign { topic: "concrete compression" },
                variables: vec![Variable::new("lambda", "Rib fill factor", "-")],
                assumptions: vec!["0 <= lambda <= 1"],
                category: EquationCategory::ConcreteForces,
                source_module: "equations/forces.rs",
                source_function: "concrete_within_rib",
            },
            Equation::ConcreteTotal => EquationMetadata {
                name: "Total Concrete Compression",
                description: "Compression capacity of the whole slab",
                formula_plain: "F_c = F_c1 + F_c2",
                reference: CodeReference::CompositeDesign { topic: "concrete compression" },
                variables: vec![],
                assumptions: vec![],
                category: EquationCategory::ConcreteForces,
                source_module: "equations/forces.rs",
                source_function: "concrete_total",
            },
            Equation::StressBlockDepth => EquationMetadata {
                name: "Stress Block Depth",
                description: "Depth of concrete needed to carry the governing compression",
                formula_plain: "d_c = F_cH / (0.85 * b_cf * f_c)",
                reference: CodeReference::CompositeDesign { topic: "concrete compression" },
                variables: vec![f_ch],
                assumptions: vec![],
                category: EquationCategory::ConcreteForces,
                source_module: "equations/forces.rs",
                source_function: "stress_block_depth",
            },
            Equation::GroupReductionFactor => EquationMetadata {
                name: "Connector Group Factor",
                description: "Reduction for connectors acting in a group",
                formula_plain: "k_n = 1.18 - 0.18 * sqrt(n)",
                reference: CodeReference::CompositeDesign { topic: "shear connectors" },
                variables: vec![Variable::new("n", "Connectors in the group", "-")],
                assumptions: vec!["k_n must remain positive"],
                category: EquationCategory::ShearConnection,
                source_module: "equations/forces.rs",
                source_function: "group_reduction_factor",
            },
            Equation::ConnectorDesignStrength => EquationMetadata {
                name: "Connector Design Strength",
                description: "Design strength of one shear connector",
                formula_plain: "f_ds = phi * k_n * f_vs",
                reference: CodeReference::CompositeDesign { topic: "shear connectors" },
                variables: vec![
                    Variable::new("phi", "Capacity reduction factor", "-"),
                    Variable::new("f_vs", "Nominal connector strength", "N"),
                ],
                assumptions: vec![],
                category: EquationCategory::ShearConnection,
                source_module: "equations/forces.rs",
                source_function: "connector_design_strength",
            },
            Equation::ShearConnectionDegree => EquationMetadata {
                name: "Degree of Shear Connection",
                description: "Fraction of full composite action provided by the connectors",
                formula_plain: "beta = min(n_H * f_ds / F_cc, 1)",
                reference: CodeReference::CompositeDesign { topic: "shear connection" },
                variables: vec![Variable::new("n_H", "Connectors between opening and zero moment", "-")],
                assumptions: vec![],
                category: EquationCategory::ShearConnection,
                source_module: "equations/forces.rs",
                source_function: "shear_connection_degree",
            },
            Equation::SteelTension => EquationMetadata {
                name: "Steel Section Tension",
                description: "Nominal tensile capacity of the steel section",
                formula_plain: "F_s = A_s * f_y",
                reference: CodeReference::CompositeDesign { topic: "steel section" },
                variables: vec![
                    Variable::new("A_s", "Area of the steel section", "mm^2"),
                    Variable::new("f_y", "Yield strength of the section", "MPa"),
                ],
                assumptions: vec![],
                category: EquationCategory::SteelForces,
                source_module: "equations/forces.rs",
                source_function: "steel_tension",
            },
            Equation::SegmentYieldForce => EquationMetadata {
                name: "Segment Yield Force",
                description: "Yield force of a flange, tee web or reinforcement bar",
                formula_plain: "F_tf = b_eff * t_f * f_yf, F_tw = A_tw * f_yw, F_r = A_r * f_yr, F_bw = A_bw * f_yw, F_bf = A_f * f_yf",
                reference: CodeReference::CompositeDesign { topic: "steel section" },
                variables: vec![Variable::new("b_eff", "Effective top flange width", "mm")],
                assumptions: vec!["Top and bottom bars are identical"],
                category: EquationCategory::SteelForces,
                source_module: "equations/forces.rs",
                source_function: "segment_yield_force",
            },
            Equation::GoverningCompression => EquationMetadata {
                name: "Governing Compression",
                description: "Compressive force limited by concrete, connectors and steel",
                formula_plain: "F_cH = min(F_c, n_H * f_ds, F_s)",
                reference: CodeReference::CompositeDesign { topic: "shear connection" },
                variables: vec![f_ch],
                assumptions: vec![],
                category: EquationCategory::SteelForces,
                source_module: "equations/forces.rs",
                source_function: "governing_compression",
            },
            Equation::FullConnectionCompression => EquationMetadata {
                name: "Full Connection Compression",
                description: "Compressive force assuming full shear connection",
                formula_plain: "F_cc = min(F_c, F_s)",
                reference: CodeReference::CompositeDesign { topic: "shear connection" },
                variables: vec![],
                assumptions: vec![],
                category: EquationCategory::SteelForces,
                source_module: "equations/forces.rs",
                source_function: "full_connection_compression",
            },
            Equation::CompositeCaseBands => EquationMetadata {
                name: "Composite Case Bands",
                description: "Selects the first neutral-axis band containing F_cH",
                formula_plain: "case 1: F_s <= F_cH <= F_c; case k: F_s - 2*sum(k) < F_cH <= F_s - 2*sum(k-1)",
                reference: CodeReference::PlasticEquilibrium { region: "each section segment" },
                variables: vec![f_ch],
                assumptions: vec!["Bands are contiguous and do not overlap", "Upper bounds are inclusive"],
                category: EquationCategory::CaseClassification,
                source_module: "calculations/composite_case.rs",
                source_function: "get_composite_case",
            },
            Equation::SlabCaseDepth => EquationMetadata {
                name: "Case 1 Depth",
                description: "Neutral axis within the concrete slab",
                formula_plain: "d_h = (D_c - h_r) * F_cH / F_c1",
                reference: CodeReference::PlasticEquilibrium { region: "the slab" },
                variables: vec![],
                assumptions: vec![],
                category: EquationCategory::NeutralAxisDepth,
                source_module: "equations/depth.rs",
                source_function: "slab_case_depth",
            },
            Equation::TopFlangeCaseDepth => EquationMetadata {
                name: "Case 2 Depth",
                description: "Neutral axis within the top flange",
                formula_plain: "d_h = D_c + (t_f*b_eff*f_yf + F_tw + 2*F_r + F_bw + F_bf - F_cH) / (2*b_eff*f_yf)",
                reference: CodeReference::PlasticEquilibrium { region: "the top flange" },
                variables: vec![],
                assumptions: vec![],
                category: EquationCategory::NeutralAxisDepth,
                source_module: "equations/depth.rs",
                source_function: "top_flange_case_depth",
            },
            Equation::TopWebCaseDepth => EquationMetadata {
                name: "Case 3 Depth",
                description: "Neutral axis within the web of the top tee",
                formula_plain: "d_h = (f_yw*t_w*(2*D_c + s_t + t_f) + 2*F_r + F_bw + F_bf - F_tf - F_cH) / (2*f_yw*t_w)",
                reference: CodeReference::PlasticEquilibrium { region: "the top tee web" },
                variables: vec![],
                assumptions: vec![],
                category: EquationCategory::NeutralAxisDepth,
                source_module: "equations/depth.rs",
                source_function: "top_web_case_depth",
            },
            Equation::TopBarCaseDepth => EquationMetadata {
                name: "Case 4 Depth",
                description: "Neutral axis within the top reinforcement bar",
                formula_plain: "d_h = (f_yr*b_r*(2*D_c + 2*s_t - t_r) + F_r + F_bw + F_bf - F_cH - F_tw - F_tf) / (2*f_yr*b_r)",
                reference: CodeReference::PlasticEquilibrium { region: "the top bar" },
                variables: vec![],
                assumptions: vec![],
                category: EquationCategory::NeutralAxisDepth,
                source_module: "equations/depth.rs",
                source_function: "top_bar_case_depth",
            },
            Equation::BottomBarCaseDepth => EquationMetadata {
                name: "Case 5 Depth",
                description: "Neutral axis within the bottom reinforcement bar",
                formula_plain: "d_h = (f_yr*b_r*(2*(D_c + D_s - s_b) + t_r) + F_bw + F_bf - F_cH - F_tw - F_r - F_tf) / (2*f_yr*b_r)",
                reference: CodeReference::PlasticEquilibrium { region: "the bottom bar" },
                variables: vec![],
                assumptions: vec![],
                category: EquationCategory::NeutralAxisDepth,
                source_module: "equations/depth.rs",
                source_function: "bottom_bar_case_depth",
            },
            Equation::BottomWebCaseDepth => EquationMetadata {
                name: "Case 6 Depth",
                description: "Neutral axis within the web of the bottom tee",
                formula_plain: "d_h = (f_yw*t_w*(2*D_c + 2*D_s - s_b + t_f) + F_bf - 2*F_r - F_tw - F_tf - F_cH) / (2*f_yw*t_w)",
                reference: CodeReference::PlasticEquilibrium { region: "the bottom tee web" },
                variables: vec![],
                assumptions: vec![],
                category: EquationCategory::NeutralAxisDepth,
                source_module: "equations/depth.rs",
                source_function: "bottom_web_case_depth",
            },
        }
    }

    /// All equations in a category, in registry order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .copied()
            .filter(|eq| eq.metadata().category == category)
            .collect()
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::OpeningHeightLimit,
    Equation::TopGapLimit,
    Equation::BottomGapLimit,
    Equation::GapAspectLimit,
    Equation::CombinedSizeLimit,
    Equation::EdgeDistanceLimit,
    Equation::ConcreteAboveRib,
    Equation::ConcreteWithinRib,
    Equation::ConcreteTotal,
    Equation::StressBlockDepth,
    Equation::GroupReductionFactor,
    Equation::ConnectorDesignStrength,
    Equation::ShearConnectionDegree,
    Equation::SteelTension,
    Equation::SegmentYieldForce,
    Equation::GoverningCompression,
    Equation::FullConnectionCompression,
    Equation::CompositeCaseBands,
    Equation::SlabCaseDepth,
    Equation::TopFlangeCaseDepth,
    Equation::TopWebCaseDepth,
    Equation::TopBarCaseDepth,
    Equation::BottomBarCaseDepth,
    Equation::BottomWebCaseDepth,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    pub equation: Equation,
    /// Where/why it was used (e.g., "S-1 governing compression")
    pub context: String,
}

impl EquationUsage {
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Record several equations sharing one context
    pub fn record_all(&mut self, equations: &[Equation], context: &str) {
        for eq in equations {
            self.record(*eq, context);
        }
    }

    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Unique equations in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category, sorted for display
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the equations reference document (EQUATIONS.md).
///
/// ```rust
/// let markdown = peno_core::equations::generate_equations_markdown();
/// assert!(markdown.contains("## Shear Connection"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Webpen Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Every formula used by the web penetration checks and the composite section
calculation, with its reference, source location and assumptions.

## Conventions

| Quantity | Convention |
|----------|------------|
| Depths | Measured downward from the top of the slab |
| Forces | Positive magnitudes; compression in the slab balances tension in the steel |
| Units | Any consistent set (N, mm, MPa typical) |

---

"#,
    );

    for category in EquationCategory::ALL {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();
            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        EquationCategory::ALL.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_equation_listed_once() {
        let unique: HashSet<_> = ALL_EQUATIONS.iter().collect();
        assert_eq!(unique.len(), ALL_EQUATIONS.len());
        assert_eq!(ALL_EQUATIONS.len(), 24);
    }

    #[test]
    fn test_every_category_has_equations() {
        for cat in EquationCategory::ALL {
            assert!(!Equation::in_category(cat).is_empty(), "Empty category {:?}", cat);
        }
    }

    #[test]
    fn test_equation_metadata_has_source_info() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} missing formula_plain", eq);
        }
    }

    #[test]
    fn test_tracker_deduplicates_and_groups() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::SlabCaseDepth, "S-1");
        tracker.record(Equation::ConcreteAboveRib, "S-1");
        tracker.record(Equation::ConcreteAboveRib, "S-2");
        tracker.record(Equation::OpeningHeightLimit, "P-1");

        assert_eq!(tracker.usages().len(), 4);
        assert_eq!(tracker.unique_equations().len(), 3);

        let grouped = tracker.by_category();
        assert_eq!(grouped[0].0, EquationCategory::GeometricLimits);
        assert_eq!(grouped.last().unwrap().0, EquationCategory::NeutralAxisDepth);
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();
        assert!(markdown.contains("# Webpen Equations Reference"));
        assert!(markdown.contains("## Geometric Limits"));
        assert!(markdown.contains("## Neutral Axis Depth"));
        assert!(markdown.contains("`F_cH = min(F_c, n_H * f_ds, F_s)`"));
        assert!(markdown.contains("equations/depth.rs"));
        assert!(markdown.contains("**Total Equations:** 24"));
        assert!(markdown.contains("**Categories:** 6"));
    }
}
