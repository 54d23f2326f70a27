//! # Composite Section at a Web Opening
//!
//! Plastic capacity model of a composite steel-concrete section through a web
//! penetration, under partial or full shear connection.
//!
//! The calculation runs in three steps:
//!
//! 1. Validate the section ([`CompositeSectionInput::validate`])
//! 2. Evaluate the force model once ([`ForceSet::compute`])
//! 3. Classify the governing case and evaluate its depth `d_h`
//!    ([`super::composite_case`])
//!
//! ## Assumptions
//!
//! - Rectangular 0.85 f_c concrete stress block
//! - Identical reinforcement bars above and below the opening
//! - Units are the caller's (N, mm, MPa is typical); nothing is converted
//!
//! ## Example
//!
//! ```rust
//! use peno_core::calculations::composite::{
//!     calculate, CompositeSectionInput, MaterialProperties, SectionAreas, SectionGeometry,
//!     ShearConnection,
//! };
//! use peno_core::project::DesignSettings;
//!
//! let input = CompositeSectionInput {
//!     label: "S-1".to_string(),
//!     geometry: SectionGeometry {
//!         slab_depth: 120.0,
//!         overall_depth: 520.0,
//!         rib_height: 55.0,
//!         flange_thickness: 10.0,
//!         web_thickness: 8.0,
//!         bar_thickness: 10.0,
//!         concrete_flange_width: 2000.0,
//!         effective_flange_width: 180.0,
//!         bar_width: 60.0,
//!         top_offset: 80.0,
//!         bottom_offset: 80.0,
//!     },
//!     areas: SectionAreas {
//!         steel_section: 6890.0,
//!         top_web: 640.0,
//!         bar: 600.0,
//!         bottom_web: 640.0,
//!         bottom_flange: 1800.0,
//!     },
//!     materials: MaterialProperties {
//!         concrete_fc: 30.0,
//!         flange_fy: 300.0,
//!         web_fy: 320.0,
//!         bar_fy: 300.0,
//!         section_fy: 300.0,
//!         connector_fvs: 100_000.0,
//!     },
//!     connection: ShearConnection {
//!         connectors_per_group: 1,
//!         connectors_to_zero_moment: 30,
//!         phi: None,
//!     },
//!     rib_fill_factor: 0.6,
//! };
//!
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! assert_eq!(result.case.index(), 1);
//! assert!(result.full_shear_connection());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::composite_case::{CaseBands, CompositeCase, DepthCase};
use crate::equations::forces;
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{CalcError, CalcResult};
use crate::project::DesignSettings;

/// Cross-section dimensions at the opening.
///
/// Depths are measured down from the top of the slab unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// D_c: overall slab depth
    pub slab_depth: f64,
    /// D_s: depth from the top of the slab to the bottom reference of the steel
    pub overall_depth: f64,
    /// h_r: deck rib height (0 for a solid slab)
    ///
    /// Zero is accepted on purpose; every other length must be strictly positive.
    pub rib_height: f64,
    /// t_f: flange thickness
    pub flange_thickness: f64,
    /// t_w: web thickness
    pub web_thickness: f64,
    /// t_r: reinforcement bar thickness
    pub bar_thickness: f64,
    /// b_cf: effective width of the concrete flange
    pub concrete_flange_width: f64,
    /// b_eff: effective width of the top steel flange in tension
    pub effective_flange_width: f64,
    /// b_r: reinforcement bar width
    pub bar_width: f64,
    /// s_t: offset of the top edge of the opening below the steel
    pub top_offset: f64,
    /// s_b: offset of the bottom edge of the opening above the bottom reference
    pub bottom_offset: f64,
}

/// Areas of the steel segments around the opening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionAreas {
    /// A_s: steel section
    pub steel_section: f64,
    /// A_tw: web of the top tee
    pub top_web: f64,
    /// A_r: one reinforcement bar
    pub bar: f64,
    /// A_bw: web of the bottom tee
    pub bottom_web: f64,
    /// A_f: bottom flange
    pub bottom_flange: f64,
}

/// Material strengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// f_c: concrete compressive strength
    pub concrete_fc: f64,
    /// f_yf: flange yield strength
    pub flange_fy: f64,
    /// f_yw: web yield strength
    pub web_fy: f64,
    /// f_yr: reinforcement yield strength
    pub bar_fy: f64,
    /// f_y: yield strength used for the whole section
    pub section_fy: f64,
    /// f_vs: nominal shear connector strength
    pub connector_fvs: f64,
}

/// Shear connectors between the slab and the steel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearConnection {
    /// n: connectors in one group
    pub connectors_per_group: u32,
    /// n_H: connectors between the opening and the point of zero moment
    pub connectors_to_zero_moment: u32,
    /// φ: overrides `DesignSettings::connector_phi` when set
    #[serde(default)]
    pub phi: Option<f64>,
}

/// Input for one composite section check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeSectionInput {
    /// User label (e.g., "S-1", "Grid B opening")
    pub label: String,
    pub geometry: SectionGeometry,
    pub areas: SectionAreas,
    pub materials: MaterialProperties,
    pub connection: ShearConnection,
    /// λ: fraction of the rib volume filled with concrete
    pub rib_fill_factor: f64,
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a finite positive number",
        ));
    }
    Ok(())
}

fn require_fraction(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

/// Validate a connector capacity reduction factor.
pub fn validate_phi(phi: f64) -> CalcResult<()> {
    if !(phi > 0.0 && phi <= 1.0) {
        return Err(CalcError::invalid_input(
            "phi",
            phi.to_string(),
            "Capacity reduction factor must be in (0, 1]",
        ));
    }
    Ok(())
}

impl CompositeSectionInput {
    /// Validate input parameters.
    ///
    /// Rejects everything that would make a formula divide by zero or
    /// produce NaN, so [`ForceSet::compute`] can run unguarded.
    pub fn validate(&self) -> CalcResult<()> {
        let g = &self.geometry;
        for (field, value) in [
            ("slab_depth", g.slab_depth),
            ("overall_depth", g.overall_depth),
            ("flange_thickness", g.flange_thickness),
            ("web_thickness", g.web_thickness),
            ("bar_thickness", g.bar_thickness),
            ("concrete_flange_width", g.concrete_flange_width),
            ("effective_flange_width", g.effective_flange_width),
            ("bar_width", g.bar_width),
            ("top_offset", g.top_offset),
            ("bottom_offset", g.bottom_offset),
        ] {
            require_positive(field, value)?;
        }
        if !g.rib_height.is_finite() || g.rib_height < 0.0 {
            return Err(CalcError::invalid_input(
                "rib_height",
                g.rib_height.to_string(),
                "Rib height cannot be negative",
            ));
        }
        if g.rib_height >= g.slab_depth {
            return Err(CalcError::invalid_input(
                "rib_height",
                g.rib_height.to_string(),
                "Rib height must be less than the slab depth (F_c1 would be zero)",
            ));
        }
        if g.overall_depth < g.slab_depth {
            return Err(CalcError::invalid_input(
                "overall_depth",
                g.overall_depth.to_string(),
                "Overall depth cannot be less than the slab depth",
            ));
        }

        let a = &self.areas;
        for (field, value) in [
            ("steel_section", a.steel_section),
            ("top_web", a.top_web),
            ("bar", a.bar),
            ("bottom_web", a.bottom_web),
            ("bottom_flange", a.bottom_flange),
        ] {
            require_positive(field, value)?;
        }

        let m = &self.materials;
        for (field, value) in [
            ("concrete_fc", m.concrete_fc),
            ("flange_fy", m.flange_fy),
            ("web_fy", m.web_fy),
            ("bar_fy", m.bar_fy),
            ("section_fy", m.section_fy),
            ("connector_fvs", m.connector_fvs),
        ] {
            require_positive(field, value)?;
        }

        require_fraction(
            "rib_fill_factor",
            self.rib_fill_factor,
            "Rib fill factor must be within [0, 1]",
        )?;

        if let Some(phi) = self.connection.phi {
            validate_phi(phi)?;
        }

        let k_n = forces::group_reduction_factor(f64::from(self.connection.connectors_per_group));
        if k_n <= 0.0 {
            return Err(CalcError::invalid_input(
                "connectors_per_group",
                self.connection.connectors_per_group.to_string(),
                format!("Group reduction factor k_n = {:.3} is not positive", k_n),
            ));
        }

        Ok(())
    }
}

/// Every force of the model, evaluated once per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceSet {
    /// Concrete above the ribs
    pub f_c1: f64,
    /// Concrete within the ribs
    pub f_c2: f64,
    /// Total concrete capacity
    pub f_c: f64,
    /// Connector group factor
    pub k_n: f64,
    /// Design strength of one connector
    pub f_ds: f64,
    /// Steel section tension
    pub f_s: f64,
    /// Governing compression
    pub f_ch: f64,
    /// Compression with full shear connection
    pub f_cc: f64,
    /// Degree of shear connection, 0 to 1
    pub beta: f64,
    /// Depth of the concrete stress block carrying F_cH
    pub stress_block_depth: f64,
    /// Top flange (effective width)
    pub f_tf: f64,
    /// Top tee web
    pub f_tw: f64,
    /// One reinforcement bar
    pub f_r: f64,
    /// Bottom tee web
    pub f_bw: f64,
    /// Bottom flange
    pub f_bf: f64,
}

impl ForceSet {
    /// Evaluate the force model. `input` must already be validated.
    pub fn compute(input: &CompositeSectionInput, phi: f64) -> Self {
        let g = &input.geometry;
        let a = &input.areas;
        let m = &input.materials;
        let n_h = f64::from(input.connection.connectors_to_zero_moment);

        let f_c1 = forces::concrete_above_rib(m.concrete_fc, g.concrete_flange_width, g.slab_depth, g.rib_height);
        let f_c2 = forces::concrete_within_rib(
            m.concrete_fc,
            g.concrete_flange_width,
            input.rib_fill_factor,
            g.rib_height,
        );
        let f_c = forces::concrete_total(f_c1, f_c2);

        let k_n = forces::group_reduction_factor(f64::from(input.connection.connectors_per_group));
        let f_ds = forces::connector_design_strength(phi, k_n, m.connector_fvs);

        let f_s = forces::steel_tension(a.steel_section, m.section_fy);
        let f_ch = forces::governing_compression(f_c, n_h, f_ds, f_s);
        let f_cc = forces::full_connection_compression(f_c, f_s);
        let beta = forces::shear_connection_degree(n_h, f_ds, f_cc);

        let a_tf_eff = forces::effective_top_flange_area(g.effective_flange_width, g.flange_thickness);

        ForceSet {
            f_c1,
            f_c2,
            f_c,
            k_n,
            f_ds,
            f_s,
            f_ch,
            f_cc,
            beta,
            stress_block_depth: forces::stress_block_depth(f_ch, g.concrete_flange_width, m.concrete_fc),
            f_tf: forces::segment_yield_force(a_tf_eff, m.flange_fy),
            f_tw: forces::segment_yield_force(a.top_web, m.web_fy),
            f_r: forces::segment_yield_force(a.bar, m.bar_fy),
            f_bw: forces::segment_yield_force(a.bottom_web, m.web_fy),
            f_bf: forces::segment_yield_force(a.bottom_flange, m.flange_fy),
        }
    }

    /// Which limit sets F_cH: "concrete", "shear connectors" or "steel"
    pub fn governing_limit(&self) -> &'static str {
        if self.f_ch == self.f_s {
            "steel"
        } else if self.f_ch == self.f_c {
            "concrete"
        } else {
            "shear connectors"
        }
    }
}

/// Results from a composite section calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeResult {
    /// Forces the classification was based on
    pub forces: ForceSet,
    /// Connector reduction factor actually used
    pub phi: f64,
    /// Governing neutral-axis case
    pub case: CompositeCase,
    /// Neutral axis depth below the top of the slab
    pub d_h: f64,
    /// Equations applied, in order
    pub equations: EquationTracker,
}

impl CompositeResult {
    /// True when the connectors develop the full composite force (β = 1)
    pub fn full_shear_connection(&self) -> bool {
        self.forces.beta >= 1.0
    }
}

/// Calculate the governing case and neutral axis depth of a composite section.
///
/// # Arguments
///
/// * `input` - Section geometry, areas, materials and shear connection
/// * `settings` - Supplies φ when the input does not override it
///
/// # Returns
///
/// * `Ok(CompositeResult)` - Forces, case and depth
/// * `Err(CalcError::InvalidInput)` - Input fails validation
/// * `Err(CalcError::UnclassifiableCase)` - F_cH lies outside every band
pub fn calculate(input: &CompositeSectionInput, settings: &DesignSettings) -> CalcResult<CompositeResult> {
    input.validate()?;
    let phi = input.connection.phi.unwrap_or(settings.connector_phi);
    validate_phi(phi)?;

    let forces = ForceSet::compute(input, phi);
    debug!(
        label = %input.label,
        f_c = forces.f_c,
        f_s = forces.f_s,
        f_ch = forces.f_ch,
        beta = forces.beta,
        governed_by = forces.governing_limit(),
        "composite force set"
    );

    let case = CaseBands::from_forces(&forces).classify(forces.f_ch)?;
    let d_h = DepthCase::from_section(case, &input.geometry, &input.materials, &forces).d_h();
    debug!(label = %input.label, case = case.index(), d_h, "composite case selected");

    let mut equations = EquationTracker::new();
    equations.record_all(
        &[
            Equation::ConcreteAboveRib,
            Equation::ConcreteWithinRib,
            Equation::ConcreteTotal,
            Equation::GroupReductionFactor,
            Equation::ConnectorDesignStrength,
            Equation::SteelTension,
            Equation::GoverningCompression,
            Equation::FullConnectionCompression,
            Equation::ShearConnectionDegree,
            Equation::StressBlockDepth,
            Equation::SegmentYieldForce,
            Equation::CompositeCaseBands,
        ],
        &input.label,
    );
    equations.record(case.depth_equation(), format!("{} {}", input.label, case));

    Ok(CompositeResult {
        forces,
        phi,
        case,
        d_h,
        equations,
    })
}
