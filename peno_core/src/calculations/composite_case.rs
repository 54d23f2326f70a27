//! # Composite Case Classification
//!
//! Selects which of six plastic neutral-axis regimes governs a composite
//! section at a web opening, then evaluates that regime's depth formula.
//!
//! The governing compression `F_cH` is compared against bands built from the
//! steel tension `F_s`, reduced by twice the cumulative yield force of each
//! segment from the top flange downward:
//!
//! | Case | Band |
//! |------|------|
//! | 1 | `F_s <= F_cH <= F_c1 + F_c2` |
//! | 2 | `F_s - 2F_tf < F_cH <= F_s` |
//! | 3 | `F_s - 2(F_tf+F_tw) < F_cH <= F_s - 2F_tf` |
//! | 4 | `F_s - 2(F_tf+F_tw+F_tr) < F_cH <= F_s - 2(F_tf+F_tw)` |
//! | 5 | `F_s - 2(F_tf+F_tw+F_tr+F_br) < F_cH <= F_s - 2(F_tf+F_tw+F_tr)` |
//! | 6 | `F_s - 2(F_tf+F_tw+F_tr+F_br+F_bw) < F_cH <= F_s - 2(F_tf+F_tw+F_tr+F_br)` |
//!
//! Bands are checked in order and the first match wins. Bands 2 to 6 share
//! their end points exactly, so every `F_cH` between the lowest bound and
//! `F_s` lands in exactly one of them.
//!
//! ## Example
//!
//! ```rust
//! use peno_core::calculations::composite_case::{get_composite_case, CompositeCase};
//!
//! // F_cH == F_s sits on the case 1/2 boundary and resolves to case 1
//! let case = get_composite_case(
//!     2_000_000.0, 3_000_000.0, 1_000_000.0, 2_000_000.0,
//!     500_000.0, 200_000.0, 150_000.0, 150_000.0, 200_000.0,
//! ).unwrap();
//! assert_eq!(case, CompositeCase::Slab);
//! assert_eq!(case.index(), 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calculations::composite::{ForceSet, MaterialProperties, SectionGeometry};
use crate::equations::depth;
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};

/// Location of the plastic neutral axis, cases 1 to 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompositeCase {
    /// Case 1: within the concrete slab
    Slab,
    /// Case 2: within the top flange
    TopFlange,
    /// Case 3: within the web of the top tee
    TopWeb,
    /// Case 4: within the top reinforcement bar
    TopBar,
    /// Case 5: within the bottom reinforcement bar
    BottomBar,
    /// Case 6: within the web of the bottom tee
    BottomWeb,
}

impl CompositeCase {
    /// All cases in classification order
    pub const ALL: [CompositeCase; 6] = [
        CompositeCase::Slab,
        CompositeCase::TopFlange,
        CompositeCase::TopWeb,
        CompositeCase::TopBar,
        CompositeCase::BottomBar,
        CompositeCase::BottomWeb,
    ];

    /// Case number, 1 to 6
    pub fn index(self) -> u8 {
        match self {
            CompositeCase::Slab => 1,
            CompositeCase::TopFlange => 2,
            CompositeCase::TopWeb => 3,
            CompositeCase::TopBar => 4,
            CompositeCase::BottomBar => 5,
            CompositeCase::BottomWeb => 6,
        }
    }

    /// Convert a case number to a case.
    ///
    /// Returns `CalcError::UnknownCaseIndex` for anything outside 1..=6.
    pub fn from_index(index: i64) -> CalcResult<Self> {
        match index {
            1 => Ok(CompositeCase::Slab),
            2 => Ok(CompositeCase::TopFlange),
            3 => Ok(CompositeCase::TopWeb),
            4 => Ok(CompositeCase::TopBar),
            5 => Ok(CompositeCase::BottomBar),
            6 => Ok(CompositeCase::BottomWeb),
            other => Err(CalcError::unknown_case_index(other)),
        }
    }

    /// Where the neutral axis sits
    pub fn description(&self) -> &'static str {
        match self {
            CompositeCase::Slab => "Neutral axis in concrete slab",
            CompositeCase::TopFlange => "Neutral axis in top flange",
            CompositeCase::TopWeb => "Neutral axis in top tee web",
            CompositeCase::TopBar => "Neutral axis in top reinforcement",
            CompositeCase::BottomBar => "Neutral axis in bottom reinforcement",
            CompositeCase::BottomWeb => "Neutral axis in bottom tee web",
        }
    }

    /// Registry entry for this case's depth formula
    pub fn depth_equation(&self) -> Equation {
        match self {
            CompositeCase::Slab => Equation::SlabCaseDepth,
            CompositeCase::TopFlange => Equation::TopFlangeCaseDepth,
            CompositeCase::TopWeb => Equation::TopWebCaseDepth,
            CompositeCase::TopBar => Equation::TopBarCaseDepth,
            CompositeCase::BottomBar => Equation::BottomBarCaseDepth,
            CompositeCase::BottomWeb => Equation::BottomWebCaseDepth,
        }
    }
}

impl TryFrom<u8> for CompositeCase {
    type Error = CalcError;

    fn try_from(index: u8) -> CalcResult<Self> {
        CompositeCase::from_index(i64::from(index))
    }
}

impl std::fmt::Display for CompositeCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Case {} ({})", self.index(), self.description())
    }
}

// ============================================================================
// Bands
// ============================================================================

/// One interval of `F_cH`. The upper bound is always inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CaseBand {
    pub lower: f64,
    pub upper: f64,
    /// Only the slab band includes its lower bound
    pub lower_inclusive: bool,
}

impl CaseBand {
    pub fn contains(&self, f_ch: f64) -> bool {
        let above_lower = if self.lower_inclusive {
            f_ch >= self.lower
        } else {
            f_ch > self.lower
        };
        above_lower && f_ch <= self.upper
    }
}

/// The six classification bands for one force set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaseBands {
    bands: [CaseBand; 6],
}

impl CaseBands {
    /// Build the bands from the concrete, steel and segment forces.
    #[allow(clippy::too_many_arguments)]
    pub fn new(f_c1: f64, f_c2: f64, f_s: f64, f_tf: f64, f_tw: f64, f_tr: f64, f_br: f64, f_bw: f64) -> Self {
        let mut bands = [CaseBand::default(); 6];
        bands[0] = CaseBand {
            lower: f_s,
            upper: f_c1 + f_c2,
            lower_inclusive: true,
        };

        // Each band's upper bound is the previous band's lower bound, bit for bit.
        let mut upper = f_s;
        let mut tension = 0.0;
        for (band, segment) in bands[1..].iter_mut().zip([f_tf, f_tw, f_tr, f_br, f_bw]) {
            tension += segment;
            let lower = f_s - 2.0 * tension;
            *band = CaseBand {
                lower,
                upper,
                lower_inclusive: false,
            };
            upper = lower;
        }

        CaseBands { bands }
    }

    /// Build the bands for a composite section; the same bar sits above and
    /// below the opening.
    pub fn from_forces(forces: &ForceSet) -> Self {
        CaseBands::new(
            forces.f_c1,
            forces.f_c2,
            forces.f_s,
            forces.f_tf,
            forces.f_tw,
            forces.f_r,
            forces.f_r,
            forces.f_bw,
        )
    }

    /// Band for one case
    pub fn band(&self, case: CompositeCase) -> CaseBand {
        self.bands[usize::from(case.index() - 1)]
    }

    /// Exclusive lower limit of the lowest band
    pub fn global_lower(&self) -> f64 {
        self.bands[5].lower
    }

    /// Inclusive upper limit of the highest non-empty band
    pub fn global_upper(&self) -> f64 {
        self.bands[0].upper.max(self.bands[1].upper)
    }

    /// First band containing `f_ch`.
    pub fn classify(&self, f_ch: f64) -> CalcResult<CompositeCase> {
        for case in CompositeCase::ALL {
            let band = self.band(case);
            let hit = band.contains(f_ch);
            trace!(case = case.index(), lower = band.lower, upper = band.upper, hit, "composite case band");
            if hit {
                return Ok(case);
            }
        }
        Err(CalcError::unclassifiable_case(f_ch, self.global_lower(), self.global_upper()))
    }
}

/// Select the governing composite case for `F_cH`.
///
/// # Returns
///
/// * `Ok(CompositeCase)` - First band (1 to 6) containing `f_ch`
/// * `Err(CalcError::UnclassifiableCase)` - `f_ch` lies in no band
#[allow(clippy::too_many_arguments)]
pub fn get_composite_case(
    f_ch: f64,
    f_c1: f64,
    f_c2: f64,
    f_s: f64,
    f_tf: f64,
    f_tw: f64,
    f_tr: f64,
    f_br: f64,
    f_bw: f64,
) -> CalcResult<CompositeCase> {
    CaseBands::new(f_c1, f_c2, f_s, f_tf, f_tw, f_tr, f_br, f_bw).classify(f_ch)
}

// ============================================================================
// Depth dispatch
// ============================================================================

/// A composite case together with exactly the values its depth formula reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DepthCase {
    Slab {
        slab_depth: f64,
        h_r: f64,
        f_ch: f64,
        f_c1: f64,
    },
    TopFlange {
        slab_depth: f64,
        t_f: f64,
        b_eff: f64,
        f_yf: f64,
        f_tw: f64,
        f_r: f64,
        f_bw: f64,
        f_bf: f64,
        f_ch: f64,
    },
    TopWeb {
        slab_depth: f64,
        s_t: f64,
        t_f: f64,
        t_w: f64,
        f_yw: f64,
        f_r: f64,
        f_bw: f64,
        f_bf: f64,
        f_tf: f64,
        f_ch: f64,
    },
    TopBar {
        slab_depth: f64,
        s_t: f64,
        t_r: f64,
        b_r: f64,
        f_yr: f64,
        f_r: f64,
        f_bw: f64,
        f_bf: f64,
        f_tw: f64,
        f_tf: f64,
        f_ch: f64,
    },
    BottomBar {
        slab_depth: f64,
        overall_depth: f64,
        s_b: f64,
        t_r: f64,
        b_r: f64,
        f_yr: f64,
        f_r: f64,
        f_bw: f64,
        f_bf: f64,
        f_tw: f64,
        f_tf: f64,
        f_ch: f64,
    },
    BottomWeb {
        slab_depth: f64,
        overall_depth: f64,
        s_b: f64,
        t_f: f64,
        t_w: f64,
        f_yw: f64,
        f_r: f64,
        f_bf: f64,
        f_tw: f64,
        f_tf: f64,
        f_ch: f64,
    },
}

impl DepthCase {
    /// Pick the fields `case` needs out of the section and its force set.
    pub fn from_section(
        case: CompositeCase,
        geometry: &SectionGeometry,
        materials: &MaterialProperties,
        forces: &ForceSet,
    ) -> Self {
        let g = geometry;
        let m = materials;
        let f = forces;
        match case {
            CompositeCase::Slab => DepthCase::Slab {
                slab_depth: g.slab_depth,
                h_r: g.rib_height,
                f_ch: f.f_ch,
                f_c1: f.f_c1,
            },
            CompositeCase::TopFlange => DepthCase::TopFlange {
                slab_depth: g.slab_depth,
                t_f: g.flange_thickness,
                b_eff: g.effective_flange_width,
                f_yf: m.flange_fy,
                f_tw: f.f_tw,
                f_r: f.f_r,
                f_bw: f.f_bw,
                f_bf: f.f_bf,
                f_ch: f.f_ch,
            },
            CompositeCase::TopWeb => DepthCase::TopWeb {
                slab_depth: g.slab_depth,
                s_t: g.top_offset,
                t_f: g.flange_thickness,
                t_w: g.web_thickness,
                f_yw: m.web_fy,
                f_r: f.f_r,
                f_bw: f.f_bw,
                f_bf: f.f_bf,
                f_tf: f.f_tf,
                f_ch: f.f_ch,
            },
            CompositeCase::TopBar => DepthCase::TopBar {
                slab_depth: g.slab_depth,
                s_t: g.top_offset,
                t_r: g.bar_thickness,
                b_r: g.bar_width,
                f_yr: m.bar_fy,
                f_r: f.f_r,
                f_bw: f.f_bw,
                f_bf: f.f_bf,
                f_tw: f.f_tw,
                f_tf: f.f_tf,
                f_ch: f.f_ch,
            },
            CompositeCase::BottomBar => DepthCase::BottomBar {
                slab_depth: g.slab_depth,
                overall_depth: g.overall_depth,
                s_b: g.bottom_offset,
                t_r: g.bar_thickness,
                b_r: g.bar_width,
                f_yr: m.bar_fy,
                f_r: f.f_r,
                f_bw: f.f_bw,
                f_bf: f.f_bf,
                f_tw: f.f_tw,
                f_tf: f.f_tf,
                f_ch: f.f_ch,
            },
            CompositeCase::BottomWeb => DepthCase::BottomWeb {
                slab_depth: g.slab_depth,
                overall_depth: g.overall_depth,
                s_b: g.bottom_offset,
                t_f: g.flange_thickness,
                t_w: g.web_thickness,
                f_yw: m.web_fy,
                f_r: f.f_r,
                f_bf: f.f_bf,
                f_tw: f.f_tw,
                f_tf: f.f_tf,
                f_ch: f.f_ch,
            },
        }
    }

    pub fn case(&self) -> CompositeCase {
        match self {
            DepthCase::Slab { .. } => CompositeCase::Slab,
            DepthCase::TopFlange { .. } => CompositeCase::TopFlange,
            DepthCase::TopWeb { .. } => CompositeCase::TopWeb,
            DepthCase::TopBar { .. } => CompositeCase::TopBar,
            DepthCase::BottomBar { .. } => CompositeCase::BottomBar,
            DepthCase::BottomWeb { .. } => CompositeCase::BottomWeb,
        }
    }

    /// Neutral axis depth d_h below the top of the slab
    pub fn d_h(&self) -> f64 {
        match *self {
            DepthCase::Slab { slab_depth, h_r, f_ch, f_c1 } => {
                depth::slab_case_depth(slab_depth, h_r, f_ch, f_c1)
            }
            DepthCase::TopFlange { slab_depth, t_f, b_eff, f_yf, f_tw, f_r, f_bw, f_bf, f_ch } => {
                depth::top_flange_case_depth(slab_depth, t_f, b_eff, f_yf, f_tw, f_r, f_bw, f_bf, f_ch)
            }
            DepthCase::TopWeb { slab_depth, s_t, t_f, t_w, f_yw, f_r, f_bw, f_bf, f_tf, f_ch } => {
                depth::top_web_case_depth(slab_depth, s_t, t_f, t_w, f_yw, f_r, f_bw, f_bf, f_tf, f_ch)
            }
            DepthCase::TopBar { slab_depth, s_t, t_r, b_r, f_yr, f_r, f_bw, f_bf, f_tw, f_tf, f_ch } => {
                depth::top_bar_case_depth(slab_depth, s_t, t_r, b_r, f_yr, f_r, f_bw, f_bf, f_tw, f_tf, f_ch)
            }
            DepthCase::BottomBar {
                slab_depth,
                overall_depth,
                s_b,
                t_r,
                b_r,
                f_yr,
                f_r,
                f_bw,
                f_bf,
                f_tw,
                f_tf,
                f_ch,
            } => depth::bottom_bar_case_depth(
                slab_depth, overall_depth, s_b, t_r, b_r, f_yr, f_r, f_bw, f_bf, f_tw, f_tf, f_ch,
            ),
            DepthCase::BottomWeb {
                slab_depth,
                overall_depth,
                s_b,
                t_f,
                t_w,
                f_yw,
                f_r,
                f_bf,
                f_tw,
                f_tf,
                f_ch,
            } => depth::bottom_web_case_depth(
                slab_depth, overall_depth, s_b, t_f, t_w, f_yw, f_r, f_bf, f_tw, f_tf, f_ch,
            ),
        }
    }
}

/// Evaluate the depth formula for a case given by number.
///
/// # Returns
///
/// * `Ok(d_h)` - Depth for case `case_index`
/// * `Err(CalcError::UnknownCaseIndex)` - `case_index` is not 1 to 6
pub fn get_d_h(
    case_index: i64,
    geometry: &SectionGeometry,
    materials: &MaterialProperties,
    forces: &ForceSet,
) -> CalcResult<f64> {
    let case = CompositeCase::from_index(case_index)?;
    Ok(DepthCase::from_section(case, geometry, materials, forces).d_h())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::composite::tests::test_section;
    use proptest::prelude::*;

    // F_s = 2.0e6, F_tf = 5e5, F_tw = 2e5, F_tr = F_br = 1.5e5, F_bw = 2e5
    // Band limits: 2.0e6 | 1.0e6 | 6.0e5 | 3.0e5 | 0.0 | -4.0e5
    fn bands() -> CaseBands {
        CaseBands::new(3.0e6, 1.0e6, 2.0e6, 5.0e5, 2.0e5, 1.5e5, 1.5e5, 2.0e5)
    }

    #[test]
    fn test_case_index_roundtrip() {
        for (i, case) in CompositeCase::ALL.iter().enumerate() {
            assert_eq!(usize::from(case.index()), i + 1);
            assert_eq!(CompositeCase::from_index(i as i64 + 1).unwrap(), *case);
            assert_eq!(CompositeCase::try_from(case.index()).unwrap(), *case);
        }
    }

    #[test]
    fn test_unknown_case_index() {
        for bad in [0_i64, 7, -1, 100] {
            let err = CompositeCase::from_index(bad).unwrap_err();
            assert_eq!(err, CalcError::UnknownCaseIndex { index: bad });
        }
        assert!(CompositeCase::try_from(0_u8).is_err());
    }

    #[test]
    fn test_slab_boundary_resolves_to_case_one() {
        // F_cH == F_s: inclusive lower bound of case 1 beats inclusive upper of case 2
        assert_eq!(bands().classify(2.0e6).unwrap(), CompositeCase::Slab);
    }

    #[test]
    fn test_shared_bounds_belong_to_deeper_band() {
        // Upper bounds are inclusive, so each shared limit goes to the band below it
        let b = bands();
        assert_eq!(b.classify(1.0e6).unwrap(), CompositeCase::TopWeb);
        assert_eq!(b.classify(6.0e5).unwrap(), CompositeCase::TopBar);
        assert_eq!(b.classify(3.0e5).unwrap(), CompositeCase::BottomBar);
        assert_eq!(b.classify(0.0).unwrap(), CompositeCase::BottomWeb);
    }

    #[test]
    fn test_band_interiors() {
        let b = bands();
        assert_eq!(b.classify(3.5e6).unwrap(), CompositeCase::Slab);
        assert_eq!(b.classify(1.5e6).unwrap(), CompositeCase::TopFlange);
        assert_eq!(b.classify(8.0e5).unwrap(), CompositeCase::TopWeb);
        assert_eq!(b.classify(4.0e5).unwrap(), CompositeCase::TopBar);
        assert_eq!(b.classify(1.0e5).unwrap(), CompositeCase::BottomBar);
        assert_eq!(b.classify(-1.0e5).unwrap(), CompositeCase::BottomWeb);
    }

    #[test]
    fn test_bottom_web_band_is_contiguous_with_bottom_bar() {
        let b = bands();
        assert_eq!(
            b.band(CompositeCase::BottomWeb).upper,
            b.band(CompositeCase::BottomBar).lower
        );
        assert_eq!(b.band(CompositeCase::BottomWeb).upper, 0.0);
    }

    #[test]
    fn test_unclassifiable_above_concrete_capacity() {
        let err = bands().classify(4.5e6).unwrap_err();
        assert_eq!(
            err,
            CalcError::UnclassifiableCase {
                f_ch: 4.5e6,
                lower: -4.0e5,
                upper: 4.0e6
            }
        );
    }

    #[test]
    fn test_unclassifiable_at_or_below_lowest_bound() {
        assert!(bands().classify(-4.0e5).is_err());
        assert!(bands().classify(-1.0e6).is_err());
        assert!(bands().classify(f64::NAN).is_err());
    }

    #[test]
    fn test_slab_band_empty_when_concrete_weaker_than_steel() {
        // F_c = 1.5e6 < F_s = 2.0e6: case 1 cannot occur
        let b = CaseBands::new(1.0e6, 5.0e5, 2.0e6, 5.0e5, 2.0e5, 1.5e5, 1.5e5, 2.0e5);
        assert_eq!(b.classify(1.5e6).unwrap(), CompositeCase::TopFlange);
        assert_eq!(b.global_upper(), 2.0e6);
    }

    #[test]
    fn test_get_composite_case_matches_bands() {
        let case = get_composite_case(8.0e5, 3.0e6, 1.0e6, 2.0e6, 5.0e5, 2.0e5, 1.5e5, 1.5e5, 2.0e5).unwrap();
        assert_eq!(case, CompositeCase::TopWeb);
    }

    #[test]
    fn test_get_d_h_rejects_unknown_index() {
        let (input, forces) = test_section();
        let err = get_d_h(7, &input.geometry, &input.materials, &forces).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CASE_INDEX");
    }

    #[test]
    fn test_get_d_h_reads_the_right_fields_for_each_case() {
        // F_cH = F_s = 2,067,000. Offsets and bar strength differ from their
        // neighbours so a swapped field changes the result.
        let (mut input, forces) = test_section();
        input.geometry.top_offset = 70.0;
        input.geometry.bottom_offset = 90.0;
        input.materials.bar_fy = 350.0;

        let expected = [
            // (120 - 55) * 2,067,000 / 3,315,000
            (CompositeCase::Slab, 65.0 * 2_067_000.0 / 3_315_000.0),
            // 120 + (540,000 + 204,800 + 360,000 + 204,800 + 540,000 - 2,067,000) / (2 * 180 * 300)
            (CompositeCase::TopFlange, 120.0 - 217_400.0 / 108_000.0),
            // (2560 * (240 + 70 + 10) - 1,502,200) / 5120
            (CompositeCase::TopWeb, (2560.0 * 320.0 - 1_502_200.0) / 5120.0),
            // bar = 350 * 60 = 21,000: (21,000 * (240 + 140 - 10) - 1,887,000) / 42,000
            (CompositeCase::TopBar, (21_000.0 * 370.0 - 1_887_000.0) / 42_000.0),
            // (21,000 * (2 * (120 + 520 - 90) + 10) - 2,247,000) / 42,000
            (CompositeCase::BottomBar, (21_000.0 * 1110.0 - 2_247_000.0) / 42_000.0),
            // (2560 * (240 + 1040 - 90 + 10) - 2,631,800) / 5120
            (CompositeCase::BottomWeb, (2560.0 * 1200.0 - 2_631_800.0) / 5120.0),
        ];

        for (case, d_h) in expected {
            let actual = get_d_h(i64::from(case.index()), &input.geometry, &input.materials, &forces).unwrap();
            assert!((actual - d_h).abs() < 1e-9, "{}: got {}, expected {}", case, actual, d_h);
            let depth_case = DepthCase::from_section(case, &input.geometry, &input.materials, &forces);
            assert_eq!(depth_case.case(), case);
        }
    }

    #[test]
    fn test_slab_depth_case_value() {
        let (input, forces) = test_section();
        let d_h = get_d_h(1, &input.geometry, &input.materials, &forces).unwrap();
        let expected = (input.geometry.slab_depth - input.geometry.rib_height) * forces.f_ch / forces.f_c1;
        assert!((d_h - expected).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn classification_is_total_between_global_bounds(
            f_c1 in 1.0e5_f64..5.0e6,
            f_c2 in 0.0_f64..2.0e6,
            f_s in 1.0e5_f64..5.0e6,
            f_tf in 1.0e3_f64..1.0e6,
            f_tw in 1.0e3_f64..1.0e6,
            f_r in 1.0e3_f64..1.0e6,
            f_bw in 1.0e3_f64..1.0e6,
            t in 0.0_f64..1.0,
        ) {
            let b = CaseBands::new(f_c1, f_c2, f_s, f_tf, f_tw, f_r, f_r, f_bw);
            let lower = b.global_lower();
            let upper = b.global_upper();
            let f_ch = (lower + t * (upper - lower)).min(upper);
            prop_assume!(f_ch > lower);

            let matches: Vec<_> = CompositeCase::ALL
                .iter()
                .filter(|c| b.band(**c).contains(f_ch))
                .collect();
            // Only the case 1/2 boundary at exactly F_s may sit in two bands
            prop_assert!(!matches.is_empty());
            prop_assert!(matches.len() == 1 || f_ch == f_s);

            let case = b.classify(f_ch).unwrap();
            prop_assert_eq!(case, *matches[0]);
        }
    }
}
