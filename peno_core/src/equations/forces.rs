//! # Composite Section Force Model
//!
//! Plastic force contributions of a composite steel-concrete section at a web
//! opening. Every function is a direct transcription of one design equation and
//! trusts its arguments: positivity and divisor checks live in
//! [`crate::calculations::composite`].
//!
//! ## Notation
//!
//! - `f_c` = Concrete compressive strength
//! - `b_cf` = Effective width of the concrete flange
//! - `D_c` = Overall slab depth
//! - `h_r` = Height of the profiled deck ribs
//! - `λ` = Rib fill factor (fraction of rib volume filled with concrete)
//! - `n` = Number of shear connectors in a group
//! - `n_H` = Number of shear connectors between the opening and zero moment
//! - `f_vs` = Nominal shear connector strength
//! - `φ` = Connector capacity reduction factor
//!
//! ## Units
//!
//! Any consistent set (N, mm, MPa is typical). Nothing here converts units.

/// Rectangular stress block intensity factor for concrete (0.85 f_c)
pub const CONCRETE_STRESS_BLOCK_FACTOR: f64 = 0.85;

/// Default capacity reduction factor for shear connectors
pub const DEFAULT_CONNECTOR_PHI: f64 = 0.85;

// =============================================================================
// CONCRETE COMPRESSION
// =============================================================================

/// Concrete compression above the deck ribs
///
/// # Formula
/// F_c1 = 0.85 × f_c × b_cf × (D_c - h_r)
///
/// # Example
/// ```rust
/// use peno_core::equations::forces::concrete_above_rib;
///
/// let f_c1 = concrete_above_rib(30.0, 2000.0, 120.0, 55.0);
/// assert!((f_c1 - 3_315_000.0).abs() < 1e-6);
/// ```
#[inline]
pub fn concrete_above_rib(f_c: f64, b_cf: f64, d_c: f64, h_r: f64) -> f64 {
    CONCRETE_STRESS_BLOCK_FACTOR * f_c * b_cf * (d_c - h_r)
}

/// Concrete compression within the deck ribs, scaled by the rib fill factor
///
/// # Formula
/// F_c2 = 0.85 × f_c × b_cf × λ × h_r
#[inline]
pub fn concrete_within_rib(f_c: f64, b_cf: f64, lambda: f64, h_r: f64) -> f64 {
    CONCRETE_STRESS_BLOCK_FACTOR * f_c * b_cf * lambda * h_r
}

/// Total concrete compressive capacity F_c = F_c1 + F_c2
#[inline]
pub fn concrete_total(f_c1: f64, f_c2: f64) -> f64 {
    f_c1 + f_c2
}

/// Depth of the concrete compressive stress block carrying F_cH
///
/// # Formula
/// d_c = F_cH / (0.85 × b_cf × f_c)
#[inline]
pub fn stress_block_depth(f_ch: f64, b_cf: f64, f_c: f64) -> f64 {
    f_ch / (CONCRETE_STRESS_BLOCK_FACTOR * b_cf * f_c)
}

// =============================================================================
// SHEAR CONNECTION
// =============================================================================

/// Group reduction factor for `n` connectors in a group
///
/// # Formula
/// k_n = 1.18 - 0.18 × √n
///
/// Goes non-positive once n exceeds 42; callers must reject that.
///
/// # Example
/// ```rust
/// use peno_core::equations::forces::group_reduction_factor;
///
/// assert!((group_reduction_factor(4.0) - 0.82).abs() < 1e-12);
/// ```
#[inline]
pub fn group_reduction_factor(n: f64) -> f64 {
    1.18 - 0.18 * n.sqrt()
}

/// Design strength of one shear connector
///
/// # Formula
/// f_ds = φ × k_n × f_vs
#[inline]
pub fn connector_design_strength(phi: f64, k_n: f64, f_vs: f64) -> f64 {
    phi * k_n * f_vs
}

/// Total capacity of the connectors between the opening and zero moment, n_H × f_ds
#[inline]
pub fn connector_capacity(n_h: f64, f_ds: f64) -> f64 {
    n_h * f_ds
}

// =============================================================================
// STEEL AND GOVERNING FORCES
// =============================================================================

/// Nominal tensile capacity of the steel section F_s = A_s × f_y
#[inline]
pub fn steel_tension(a_s: f64, f_y: f64) -> f64 {
    a_s * f_y
}

/// Governing compressive force in the slab
///
/// # Formula
/// F_cH = min(F_c, n_H × f_ds, F_s)
#[inline]
pub fn governing_compression(f_c: f64, n_h: f64, f_ds: f64, f_s: f64) -> f64 {
    f_c.min(connector_capacity(n_h, f_ds)).min(f_s)
}

/// Compressive force with full shear connection, F_cc = min(F_c, F_s)
#[inline]
pub fn full_connection_compression(f_c: f64, f_s: f64) -> f64 {
    f_c.min(f_s)
}

/// Degree of shear connection, clamped to full connection
///
/// # Formula
/// β = min(n_H × f_ds / F_cc, 1)
#[inline]
pub fn shear_connection_degree(n_h: f64, f_ds: f64, f_cc: f64) -> f64 {
    (connector_capacity(n_h, f_ds) / f_cc).min(1.0)
}

// =============================================================================
// STEEL SEGMENT CAPACITIES
// =============================================================================

/// Effective area of the top flange, A_tf_eff = b_eff × t_f
#[inline]
pub fn effective_top_flange_area(b_eff: f64, t_f: f64) -> f64 {
    b_eff * t_f
}

/// Yield force of a steel segment, F = A × f_y
///
/// Used for F_tf, F_tw, F_r, F_bw and F_bf with the matching area and yield
/// strength.
#[inline]
pub fn segment_yield_force(area: f64, f_y: f64) -> f64 {
    area * f_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_forces_worked_example() {
        let f_c1 = concrete_above_rib(30.0, 2000.0, 120.0, 55.0);
        let f_c2 = concrete_within_rib(30.0, 2000.0, 0.6, 55.0);
        assert!((f_c1 - 3_315_000.0).abs() < 1e-6);
        assert!((f_c2 - 1_683_000.0).abs() < 1e-6);
        assert!((concrete_total(f_c1, f_c2) - 4_998_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_connector_strength_worked_example() {
        let k_n = group_reduction_factor(4.0);
        assert!((k_n - 0.82).abs() < 1e-12);

        let f_ds = connector_design_strength(DEFAULT_CONNECTOR_PHI, k_n, 100.0);
        assert!((f_ds - 69.7).abs() < 1e-9);
    }

    #[test]
    fn test_governing_compression_worked_example() {
        // n_H * f_ds = 50 * 69.7 = 3485 governs
        let f_ch = governing_compression(4_998_000.0, 50.0, 69.7, 3_000_000.0);
        assert!((f_ch - 3485.0).abs() < 1e-9);
    }

    #[test]
    fn test_group_reduction_goes_negative_for_large_groups() {
        assert!(group_reduction_factor(1.0) > 0.99);
        assert!(group_reduction_factor(49.0) < 0.0);
        // Last positive group size is 42
        assert!(group_reduction_factor(42.0) > 0.0);
        assert!(group_reduction_factor(43.0) < 0.0);
    }

    #[test]
    fn test_shear_connection_degree_clamped() {
        assert_eq!(shear_connection_degree(100.0, 1000.0, 50_000.0), 1.0);
        assert!((shear_connection_degree(10.0, 1000.0, 50_000.0) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_stress_block_depth() {
        // 3485 / (0.85 * 2000 * 30) = 0.06833...
        let d = stress_block_depth(3485.0, 2000.0, 30.0);
        assert!((d - 3485.0 / 51_000.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_forces() {
        let a_tf = effective_top_flange_area(180.0, 10.0);
        assert_eq!(a_tf, 1800.0);
        assert_eq!(segment_yield_force(a_tf, 300.0), 540_000.0);
    }
}
