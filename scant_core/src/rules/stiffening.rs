//! Stiffener requirement: minimum web area and section modulus.
//!
//! ```text
//! AW = kSA·P·s·lu·1e-3 / τd      (cm²)   kSA = 5,     τd = 0.4·σy
//! SM = 83.33·kCS·P·s·lu²·1e-3 / σd (cm³)   kCS = 1,   σd = 0.7·σy
//! ```
//!
//! P in kN/m², s in mm, lu in m. The constants correspond to a member fixed
//! at both ends: AW carries the end shear wL/2 and SM the end moment wL²/12.

use serde::{Deserialize, Serialize};

use crate::catalog::Material;

/// Shear area coefficient for stiffeners attached to plating
pub const K_SA: f64 = 5.0;
/// Curvature correction for straight stiffeners
pub const K_CS: f64 = 1.0;

/// Stiffener design shear stress τd = 0.4·σy
pub fn stiffener_shear_stress(material: &Material) -> f64 {
    0.4 * material.yield_mpa
}

/// Stiffener design bending stress σd = 0.7·σy
pub fn stiffener_bending_stress(material: &Material) -> f64 {
    0.7 * material.yield_mpa
}

/// Minimum web area and section modulus of one stiffener
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StiffenerRequirement {
    /// τd (N/mm²)
    pub design_shear_stress_mpa: f64,
    /// σd (N/mm²)
    pub design_bending_stress_mpa: f64,
    /// Required web area AW (cm²)
    pub web_area_cm2: f64,
    /// Required section modulus SM (cm³)
    pub section_modulus_cm3: f64,
}

impl StiffenerRequirement {
    pub fn compute(material: &Material, pressure_kpa: f64, spacing_mm: f64, span_mm: f64) -> Self {
        let lu = span_mm / 1000.0;
        let tau = stiffener_shear_stress(material);
        let sigma = stiffener_bending_stress(material);
        StiffenerRequirement {
            design_shear_stress_mpa: tau,
            design_bending_stress_mpa: sigma,
            web_area_cm2: K_SA * pressure_kpa * spacing_mm * lu * 1e-3 / tau,
            section_modulus_cm3: 83.33 * K_CS * pressure_kpa * spacing_mm * lu * lu * 1e-3 / sigma,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::equations::beam::{fixed_fixed_uniform_end_moment, uniform_load_end_shear};

    fn alloy() -> Material {
        Catalogs::standard().materials.lookup("AL_5083_O").unwrap().clone()
    }

    #[test]
    fn test_design_stresses() {
        let m = alloy();
        assert_eq!(stiffener_shear_stress(&m), 50.0);
        assert_eq!(stiffener_bending_stress(&m), 87.5);
    }

    #[test]
    fn test_requirement_values() {
        // P = 40, s = 250, lu = 1.0
        let r = StiffenerRequirement::compute(&alloy(), 40.0, 250.0, 1000.0);
        assert!((r.web_area_cm2 - 1.0).abs() < 1e-12);
        assert!((r.section_modulus_cm3 - 83.33 * 10.0 / 87.5).abs() < 1e-9);
    }

    #[test]
    fn test_requirement_matches_fixed_beam() {
        let m = alloy();
        let (p, s, l) = (32.0, 300.0, 1200.0);
        let r = StiffenerRequirement::compute(&m, p, s, l);

        // Line load w = P·s (N/mm)
        let w = p * 1e-3 * s;
        let sm_mm3 = fixed_fixed_uniform_end_moment(w, l) / r.design_bending_stress_mpa;
        assert!((r.section_modulus_cm3 - sm_mm3 / 1000.0).abs() / r.section_modulus_cm3 < 1e-4);

        let aw_mm2 = uniform_load_end_shear(w, l) / r.design_shear_stress_mpa;
        assert!((r.web_area_cm2 - aw_mm2 / 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_scales_with_span_squared() {
        let m = alloy();
        let a = StiffenerRequirement::compute(&m, 30.0, 250.0, 1000.0);
        let b = StiffenerRequirement::compute(&m, 30.0, 250.0, 2000.0);
        assert!((b.section_modulus_cm3 / a.section_modulus_cm3 - 4.0).abs() < 1e-12);
        assert!((b.web_area_cm2 / a.web_area_cm2 - 2.0).abs() < 1e-12);
    }
}
