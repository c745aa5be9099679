//! # Uniformly Loaded Beam Formulas
//!
//! Maximum moment and shear for a stiffener idealised as a beam carrying a
//! uniform line load. Only the load cases the scantling checks need are here.
//!
//! ## Notation
//!
//! - `w` = Uniform load intensity (force per unit length)
//! - `L` = Span length
//! - `M` = Bending moment
//! - `V` = Shear force
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

/// Maximum moment for a simply-supported span under uniform load
///
/// ```text
///    w w w w w w w w
///    ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓
///    ────────────────
///    △              △
///    ←──────L──────→
/// ```
///
/// # Formula (Roark's Table 8.1, Case 2e)
/// M_max = wL²/8 at midspan
///
/// # Example
/// ```rust
/// use scant_core::equations::beam::simply_supported_uniform_moment;
///
/// // 2 N/mm over 1000 mm
/// let m = simply_supported_uniform_moment(2.0, 1000.0);
/// assert!((m - 250_000.0).abs() < 1e-6);
/// ```
#[inline]
pub fn simply_supported_uniform_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// End moment for a fixed-fixed span under uniform load
///
/// # Formula (Roark's Table 8.1, Case 2e fixed ends)
/// M_end = wL²/12
#[inline]
pub fn fixed_fixed_uniform_end_moment(w: f64, l: f64) -> f64 {
    w * l * l / 12.0
}

/// End shear (reaction) for a uniformly loaded span, any symmetric support
///
/// # Formula
/// V_max = wL/2
#[inline]
pub fn uniform_load_end_shear(w: f64, l: f64) -> f64 {
    w * l / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simply_supported_moment() {
        assert!((simply_supported_uniform_moment(1.0, 8.0) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_fixed_moment_is_two_thirds_of_simple() {
        let simple = simply_supported_uniform_moment(3.0, 1200.0);
        let fixed = fixed_fixed_uniform_end_moment(3.0, 1200.0);
        assert!((fixed / simple - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_end_shear() {
        assert!((uniform_load_end_shear(2.0, 500.0) - 500.0).abs() < 1e-12);
    }
}
