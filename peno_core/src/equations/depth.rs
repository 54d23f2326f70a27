//! # Neutral Axis Depth Formulas
//!
//! Closed-form depth `d_h` of the plastic neutral axis for each of the six
//! composite cases, measured from the top of the slab. Each case assumes a
//! different location of the neutral axis relative to the opening:
//!
//! ```text
//!   ┌──────────────────────────────┐  ─┬─ top of slab
//!   │  concrete slab      case 1   │   │ D_c
//!   └──────┬───────────────┬───────┘  ─┴─
//!          ├═══════════════┤  top flange        case 2
//!          │   top tee web │                    case 3
//!          ├───────────────┤  top bar (s_t)     case 4
//!          │    opening    │
//!          ├───────────────┤  bottom bar (s_b)  case 5
//!          │ bottom tee web│                    case 6
//!          ├═══════════════┤  bottom flange
//! ```
//!
//! Formulas assume the force bundle comes from the same section geometry.
//! They do not guard divisors.

/// Case 1: neutral axis in the concrete slab
///
/// # Formula
/// d_h = (D_c - h_r) × F_cH / F_c1
#[inline]
pub fn slab_case_depth(d_c: f64, h_r: f64, f_ch: f64, f_c1: f64) -> f64 {
    (d_c - h_r) * f_ch / f_c1
}

/// Case 2: neutral axis in the top flange
///
/// # Formula
/// d_h = D_c + (t_f·b_eff·f_yf + F_tw + 2F_r + F_bw + F_bf - F_cH) / (2·b_eff·f_yf)
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn top_flange_case_depth(
    d_c: f64,
    t_f: f64,
    b_eff: f64,
    f_yf: f64,
    f_tw: f64,
    f_r: f64,
    f_bw: f64,
    f_bf: f64,
    f_ch: f64,
) -> f64 {
    d_c + (t_f * b_eff * f_yf + f_tw + 2.0 * f_r + f_bw + f_bf - f_ch) / (2.0 * b_eff * f_yf)
}

/// Case 3: neutral axis in the web of the top tee
///
/// # Formula
/// d_h = (f_yw·t_w·(2D_c + s_t + t_f) + 2F_r + F_bw + F_bf - F_tf - F_cH) / (2·f_yw·t_w)
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn top_web_case_depth(
    d_c: f64,
    s_t: f64,
    t_f: f64,
    t_w: f64,
    f_yw: f64,
    f_r: f64,
    f_bw: f64,
    f_bf: f64,
    f_tf: f64,
    f_ch: f64,
) -> f64 {
    let web = f_yw * t_w;
    (web * (2.0 * d_c + s_t + t_f) + 2.0 * f_r + f_bw + f_bf - f_tf - f_ch) / (2.0 * web)
}

/// Case 4: neutral axis in the top reinforcement bar
///
/// # Formula
/// d_h = (f_yr·b_r·(2D_c + 2s_t - t_r) + F_r + F_bw + F_bf - F_cH - F_tw - F_tf) / (2·f_yr·b_r)
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn top_bar_case_depth(
    d_c: f64,
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
) -> f64 {
    let bar = f_yr * b_r;
    (bar * (2.0 * d_c + 2.0 * s_t - t_r) + f_r + f_bw + f_bf - f_ch - f_tw - f_tf) / (2.0 * bar)
}

/// Case 5: neutral axis in the bottom reinforcement bar
///
/// # Formula
/// d_h = (f_yr·b_r·(2(D_c + D_s - s_b) + t_r) + F_bw + F_bf - F_cH - F_tw - F_r - F_tf) / (2·f_yr·b_r)
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn bottom_bar_case_depth(
    d_c: f64,
    d_s: f64,
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
) -> f64 {
    let bar = f_yr * b_r;
    (bar * (2.0 * (d_c + d_s - s_b) + t_r) + f_bw + f_bf - f_ch - f_tw - f_r - f_tf) / (2.0 * bar)
}

/// Case 6: neutral axis in the web of the bottom tee
///
/// # Formula
/// d_h = (f_yw·t_w·(2D_c + 2D_s - s_b + t_f) + F_bf - 2F_r - F_tw - F_tf - F_cH) / (2·f_yw·t_w)
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn bottom_web_case_depth(
    d_c: f64,
    d_s: f64,
    s_b: f64,
    t_f: f64,
    t_w: f64,
    f_yw: f64,
    f_r: f64,
    f_bf: f64,
    f_tw: f64,
    f_tf: f64,
    f_ch: f64,
) -> f64 {
    let web = f_yw * t_w;
    (web * (2.0 * d_c + 2.0 * d_s - s_b + t_f) + f_bf - 2.0 * f_r - f_tw - f_tf - f_ch) / (2.0 * web)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slab_case_depth() {
        // Full F_c1 mobilised puts the axis at the rib top
        assert!((slab_case_depth(120.0, 55.0, 3_315_000.0, 3_315_000.0) - 65.0).abs() < 1e-12);
        assert!((slab_case_depth(120.0, 55.0, 1_657_500.0, 3_315_000.0) - 32.5).abs() < 1e-12);
    }

    #[test]
    fn test_top_flange_case_depth() {
        // D_c + (10*200*300 + 1e5 + 2*5e4 + 1e5 + 6e5 - 1.2e6) / (2*200*300)
        // = 120 + (600000 + 100000 + 100000 + 100000 + 600000 - 1200000) / 120000
        // = 120 + 2.5
        let d = top_flange_case_depth(120.0, 10.0, 200.0, 300.0, 1e5, 5e4, 1e5, 6e5, 1.2e6);
        assert!((d - 122.5).abs() < 1e-9);
    }

    #[test]
    fn test_top_web_case_depth() {
        // web = 300 * 8 = 2400
        // (2400 * (240 + 40 + 10) + 1e5 + 1e5 + 6e5 - 6e5 - 1e5) / 4800
        // = (696000 + 100000) / 4800 = 165.8333...
        let d = top_web_case_depth(120.0, 40.0, 10.0, 8.0, 300.0, 5e4, 1e5, 6e5, 6e5, 1e5);
        assert!((d - 796_000.0 / 4800.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_bar_case_depth() {
        // bar = 300 * 60 = 18000
        // (18000 * (240 + 80 - 10) + 5e4 + 1e5 + 6e5 - 1e5 - 1e5 - 6e5) / 36000
        // = (5580000 - 50000) / 36000
        let d = top_bar_case_depth(120.0, 40.0, 10.0, 60.0, 300.0, 5e4, 1e5, 6e5, 1e5, 6e5, 1e5);
        assert!((d - 5_530_000.0 / 36_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_bottom_bar_case_depth() {
        // bar = 18000
        // (18000 * (2 * (120 + 400 - 40) + 10) + 1e5 + 6e5 - 1e5 - 1e5 - 5e4 - 6e5) / 36000
        // = (18000 * 970 - 150000) / 36000
        let d = bottom_bar_case_depth(
            120.0, 400.0, 40.0, 10.0, 60.0, 300.0, 5e4, 1e5, 6e5, 1e5, 6e5, 1e5,
        );
        assert!((d - (18_000.0 * 970.0 - 150_000.0) / 36_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_bottom_web_case_depth_uses_arithmetic_sum() {
        // web = 2400
        // (2400 * (240 + 800 - 40 + 10) + 6e5 - 1e5 - 1e5 - 6e5 - 1e5) / 4800
        // = (2400 * 1010 - 300000) / 4800
        let d = bottom_web_case_depth(120.0, 400.0, 40.0, 10.0, 8.0, 300.0, 5e4, 6e5, 1e5, 6e5, 1e5);
        assert!((d - (2400.0 * 1010.0 - 300_000.0) / 4800.0).abs() < 1e-9);
    }

    #[test]
    fn test_depth_formulas_are_deterministic() {
        let a = bottom_web_case_depth(120.0, 400.0, 40.0, 10.0, 8.0, 300.0, 5e4, 6e5, 1e5, 6e5, 1e5);
        let b = bottom_web_case_depth(120.0, 400.0, 40.0, 10.0, 8.0, 300.0, 5e4, 6e5, 1e5, 6e5, 1e5);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
