//! # Stiffener Bending Stress
//!
//! Actual bending stress in a stiffener acting together with a strip of its
//! attached plating.
//!
//! ## Assumptions
//!
//! - Simply-supported span under the uniform line load P·s
//! - Effective plate width be = min(60·tp, s)
//! - Plate strip, web and flange are treated as stacked rectangles
//! - Stress is taken at c = max(hw + tp, hw + tf)
//!
//! ## Example
//!
//! ```rust
//! use scant_core::calculations::stress::{calculate, StiffenerStressInput};
//! use scant_core::catalog::ProfileGeometry;
//!
//! let input = StiffenerStressInput {
//!     geometry: ProfileGeometry::flat_bar(40.0, 5.0),
//!     plate_thickness_mm: 4.0,
//!     spacing_mm: 250.0,
//!     span_mm: 1000.0,
//!     pressure_kpa: 30.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.effective_width_mm, 240.0);
//! println!("σ = {:.1} N/mm²", result.stress_mpa);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::ProfileGeometry;
use crate::equations::beam::simply_supported_uniform_moment;
use crate::equations::section::{composite_properties, RectElement};
use crate::errors::{require_positive, ScantError, ScantResult};

/// Effective plate width limit as a multiple of plate thickness
pub const EFFECTIVE_WIDTH_FACTOR: f64 = 60.0;

/// Effective width of attached plating be = min(60·tp, s) (mm)
pub fn effective_plate_width(plate_thickness_mm: f64, spacing_mm: f64) -> f64 {
    (EFFECTIVE_WIDTH_FACTOR * plate_thickness_mm).min(spacing_mm)
}

/// Input for the stiffener stress check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "geometry": {
///     "shape": "T-shaped",
///     "web_height_mm": 40.0,
///     "web_thickness_mm": 4.0,
///     "flange_width_mm": 40.0,
///     "flange_thickness_mm": 4.0
///   },
///   "plate_thickness_mm": 5.0,
///   "spacing_mm": 333.3,
///   "span_mm": 1000.0,
///   "pressure_kpa": 28.4
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StiffenerStressInput {
    pub geometry: ProfileGeometry,
    /// Attached plate thickness tp (mm)
    pub plate_thickness_mm: f64,
    /// Stiffener spacing s (mm)
    pub spacing_mm: f64,
    /// Span L (mm)
    pub span_mm: f64,
    /// Design pressure P (kN/m²)
    pub pressure_kpa: f64,
}

impl StiffenerStressInput {
    pub fn validate(&self) -> ScantResult<()> {
        self.geometry.validate()?;
        require_positive("plate_thickness_mm", self.plate_thickness_mm)?;
        require_positive("spacing_mm", self.spacing_mm)?;
        require_positive("span_mm", self.span_mm)?;
        require_positive("pressure_kpa", self.pressure_kpa)?;
        Ok(())
    }
}

/// Stress check results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StiffenerStressResult {
    // === Section ===
    /// Effective attached plate width be (mm)
    pub effective_width_mm: f64,
    /// Neutral axis above the plate's outer face (mm)
    pub neutral_axis_mm: f64,
    /// Moment of inertia of plate strip + profile (mm⁴)
    pub moment_of_inertia_mm4: f64,
    /// Fibre distance used for the stress (mm)
    pub fibre_distance_mm: f64,

    // === Demand ===
    /// Line load w = P·s (N/mm)
    pub line_load_n_per_mm: f64,
    /// Maximum moment M = wL²/8 (N·mm)
    pub moment_nmm: f64,

    /// Bending stress σ = M·c/I (N/mm²)
    pub stress_mpa: f64,
}

/// Calculate the bending stress of a plated stiffener.
pub fn calculate(input: &StiffenerStressInput) -> ScantResult<StiffenerStressResult> {
    input.validate()?;

    let g = &input.geometry;
    let tp = input.plate_thickness_mm;
    let be = effective_plate_width(tp, input.spacing_mm);

    let mut elements = vec![RectElement::stacked(be, tp, 0.0)];
    elements.extend(g.elements(tp));
    let props = composite_properties(&elements).ok_or_else(|| ScantError::Internal {
        message: "plated stiffener section has no area".to_string(),
    })?;

    let w = input.pressure_kpa * 1e-3 * input.spacing_mm;
    let moment_nmm = simply_supported_uniform_moment(w, input.span_mm);
    let c = (g.web_height_mm + tp).max(g.web_height_mm + g.flange_thickness_mm);

    Ok(StiffenerStressResult {
        effective_width_mm: be,
        neutral_axis_mm: props.neutral_axis,
        moment_of_inertia_mm4: props.moment_of_inertia,
        fibre_distance_mm: c,
        line_load_n_per_mm: w,
        moment_nmm,
        stress_mpa: moment_nmm * c / props.moment_of_inertia,
    })
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShapeType;

    fn input(geometry: ProfileGeometry) -> StiffenerStressInput {
        StiffenerStressInput {
            geometry,
            plate_thickness_mm: 5.0,
            spacing_mm: 250.0,
            span_mm: 1000.0,
            pressure_kpa: 30.0,
        }
    }

    #[test]
    fn test_effective_width() {
        assert_eq!(effective_plate_width(3.0, 500.0), 180.0);
        assert_eq!(effective_plate_width(10.0, 500.0), 500.0);
    }

    #[test]
    fn test_flat_bar_stress() {
        let r = calculate(&input(ProfileGeometry::flat_bar(40.0, 5.0))).unwrap();
        assert_eq!(r.effective_width_mm, 250.0);
        assert!((r.line_load_n_per_mm - 7.5).abs() < 1e-12);
        assert!((r.moment_nmm - 937_500.0).abs() < 1e-6);
        assert_eq!(r.fibre_distance_mm, 45.0);

        // Plate 250 x 5 at 2.5, web 5 x 40 at 25
        let a: [f64; 2] = [1250.0, 200.0];
        let y = [2.5, 25.0];
        let na = (a[0] * y[0] + a[1] * y[1]) / (a[0] + a[1]);
        let i = 250.0 * 125.0 / 12.0
            + a[0] * (y[0] - na).powi(2)
            + 5.0 * 64_000.0 / 12.0
            + a[1] * (y[1] - na).powi(2);
        assert!((r.neutral_axis_mm - na).abs() < 1e-9);
        assert!((r.moment_of_inertia_mm4 - i).abs() / i < 1e-12);
        assert!((r.stress_mpa - 937_500.0 * 45.0 / i).abs() < 1e-9);
    }

    #[test]
    fn test_flange_reduces_stress() {
        let flat = calculate(&input(ProfileGeometry::flat_bar(40.0, 4.0))).unwrap();
        let tee = calculate(&input(ProfileGeometry::flanged(
            ShapeType::TShape,
            40.0,
            4.0,
            40.0,
            4.0,
        )))
        .unwrap();
        assert!(tee.stress_mpa < flat.stress_mpa);
    }

    #[test]
    fn test_thick_flange_sets_fibre_distance() {
        let mut inp = input(ProfileGeometry::flanged(ShapeType::LShape, 50.0, 6.0, 50.0, 8.0));
        inp.plate_thickness_mm = 4.0;
        let r = calculate(&inp).unwrap();
        assert_eq!(r.fibre_distance_mm, 58.0);
    }

    #[test]
    fn test_rejects_zero_pressure() {
        let mut inp = input(ProfileGeometry::flat_bar(40.0, 5.0));
        inp.pressure_kpa = 0.0;
        assert!(calculate(&inp).unwrap_err().is_validation());
    }
}
