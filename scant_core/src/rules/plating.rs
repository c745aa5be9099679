//! Plating requirement: aspect ratio coefficients, design shear force and
//! bending moment, required and minimum thickness.

use serde::{Deserialize, Serialize};

use crate::catalog::Material;
use crate::structure::Location;
use crate::vessel::Vessel;

/// Coefficients (A, k7, k8) of the minimum thickness formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumThicknessCoefficients {
    pub a: f64,
    pub k7: f64,
    pub k8: f64,
}

pub const BOTTOM_MINIMUM: MinimumThicknessCoefficients = MinimumThicknessCoefficients {
    a: 1.5,
    k7: 0.03,
    k8: 0.15,
};

pub const OTHER_MINIMUM: MinimumThicknessCoefficients = MinimumThicknessCoefficients {
    a: 1.0,
    k7: 0.02,
    k8: 0.10,
};

/// Panel bending coefficient k2, 0.308..0.5, 0.5 from AR = 2
pub fn bending_coefficient_k2(aspect_ratio: f64) -> f64 {
    if aspect_ratio >= 2.0 {
        return 0.5;
    }
    let ar = aspect_ratio;
    let raw = (0.271 * ar * ar + 0.910 * ar - 0.554) / (ar * ar - 0.313 * ar + 1.351);
    raw.clamp(0.308, 0.5)
}

/// Panel stiffness coefficient k3, 0.014..0.028
pub fn stiffness_coefficient_k3(aspect_ratio: f64) -> f64 {
    let ar = aspect_ratio;
    let raw = (0.027 * ar * ar - 0.029 * ar + 0.011) / (ar * ar - 1.463 * ar + 1.108);
    raw.clamp(0.014, 0.028)
}

/// Shear force coefficient kSHC.
///
/// Quadratic below AR = 2, blended linearly to 0.5 between 2 and 4, then
/// constant.
pub fn shear_coefficient_k_shc(aspect_ratio: f64) -> f64 {
    let quadratic = |ar: f64| 0.31 + 0.152 * ar - 0.031 * ar * ar;
    if aspect_ratio < 2.0 {
        quadratic(aspect_ratio)
    } else if aspect_ratio <= 4.0 {
        let at_two = quadratic(2.0);
        at_two + (0.5 - at_two) * (aspect_ratio - 2.0) / 2.0
    } else {
        0.5
    }
}

/// Plating design stress σd = min(0.6·σu, 0.9·σy) (N/mm²)
pub fn plating_design_stress(material: &Material) -> f64 {
    (0.6 * material.tensile_mpa).min(0.9 * material.yield_mpa)
}

/// Required thickness t = b·√(P·k2/(1000·σd)) (mm)
pub fn required_thickness(short_side_mm: f64, pressure_kpa: f64, k2: f64, design_stress_mpa: f64) -> f64 {
    short_side_mm * (pressure_kpa * k2 / (1000.0 * design_stress_mpa)).sqrt()
}

/// Minimum thickness tMin = k5·(A + k7·V + k8·m^0.33), k5 = √(125/σy) (mm)
pub fn minimum_thickness(vessel: &Vessel, material: &Material, location: Location) -> f64 {
    let c = if location.uses_bottom_minimum() {
        BOTTOM_MINIMUM
    } else {
        OTHER_MINIMUM
    };
    let k5 = (125.0 / material.yield_mpa).sqrt();
    k5 * (c.a + c.k7 * vessel.speed_kn() + c.k8 * vessel.mass_kg().powf(0.33))
}

/// Scantling requirement of one plate panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelRequirement {
    /// Long side over short side
    pub aspect_ratio: f64,
    pub k2: f64,
    pub k3: f64,
    pub k_shc: f64,
    /// Design shear force per unit edge length (N/mm)
    pub shear_force_n_per_mm: f64,
    /// Design bending moment per unit width (N·mm/mm)
    pub bending_moment_nmm_per_mm: f64,
    /// σd (N/mm²)
    pub design_stress_mpa: f64,
    /// Thickness from pressure (mm)
    pub required_thickness_mm: f64,
    /// Rule minimum thickness (mm)
    pub minimum_thickness_mm: f64,
}

impl PanelRequirement {
    /// Compute the requirement for a `width_mm` × `length_mm` panel.
    ///
    /// # Example
    /// ```rust
    /// use scant_core::catalog::Catalogs;
    /// use scant_core::rules::plating::PanelRequirement;
    /// use scant_core::structure::Location;
    /// use scant_core::vessel::{Vessel, VesselInput};
    ///
    /// let vessel = Vessel::new(VesselInput {
    ///     lwl_m: 6.851, beam_chine_m: 2.4, mass_kg: 1800.0, deadrise_deg: 16.0,
    ///     speed_kn: 12.0, superstructure_height_m: 0.0, canoe_draft_m: 0.35,
    ///     freeboard_m: 0.9,
    /// }).unwrap();
    /// let cats = Catalogs::standard();
    /// let alloy = cats.materials.lookup("AL_5083_O").unwrap();
    ///
    /// let req = PanelRequirement::compute(&vessel, alloy, Location::Bottom, 500.0, 1000.0, 30.0);
    /// assert_eq!(req.aspect_ratio, 2.0);
    /// assert_eq!(req.k2, 0.5);
    /// assert!(req.governing_thickness_mm() >= req.minimum_thickness_mm);
    /// ```
    pub fn compute(
        vessel: &Vessel,
        material: &Material,
        location: Location,
        width_mm: f64,
        length_mm: f64,
        pressure_kpa: f64,
    ) -> Self {
        let b = width_mm.min(length_mm);
        let l = width_mm.max(length_mm);
        let aspect_ratio = l / b;
        let k2 = bending_coefficient_k2(aspect_ratio);
        let k3 = stiffness_coefficient_k3(aspect_ratio);
        let k_shc = shear_coefficient_k_shc(aspect_ratio);
        let design_stress_mpa = plating_design_stress(material);

        PanelRequirement {
            aspect_ratio,
            k2,
            k3,
            k_shc,
            shear_force_n_per_mm: k_shc * pressure_kpa * b * 1e-3,
            bending_moment_nmm_per_mm: k2 * pressure_kpa * b * b / 6000.0,
            design_stress_mpa,
            required_thickness_mm: required_thickness(b, pressure_kpa, k2, design_stress_mpa),
            minimum_thickness_mm: minimum_thickness(vessel, material, location),
        }
    }

    /// Thickness a plate must reach: the larger of required and minimum
    pub fn governing_thickness_mm(&self) -> f64 {
        self.required_thickness_mm.max(self.minimum_thickness_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::vessel::tests::test_input;

    fn alloy() -> Material {
        Catalogs::standard().materials.lookup("AL_5083_O").unwrap().clone()
    }

    #[test]
    fn test_k2_bounds() {
        assert_eq!(bending_coefficient_k2(2.0), 0.5);
        assert_eq!(bending_coefficient_k2(3.5), 0.5);
        // AR = 1: 0.627 / 2.038 falls just under the lower bound
        assert_eq!(bending_coefficient_k2(1.0), 0.308);
        for ar in [1.0, 1.2, 1.5, 1.9] {
            let k = bending_coefficient_k2(ar);
            assert!((0.308..=0.5).contains(&k));
        }
    }

    #[test]
    fn test_k3_bounds() {
        for ar in [1.0, 1.5, 2.0, 4.0, 10.0] {
            let k = stiffness_coefficient_k3(ar);
            assert!((0.014..=0.028).contains(&k), "AR {} -> {}", ar, k);
        }
        assert_eq!(stiffness_coefficient_k3(1.0), 0.014);
    }

    #[test]
    fn test_k_shc_continuous() {
        let below = shear_coefficient_k_shc(2.0 - 1e-9);
        let at = shear_coefficient_k_shc(2.0);
        assert!((below - at).abs() < 1e-6);
        assert!((shear_coefficient_k_shc(4.0) - 0.5).abs() < 1e-12);
        assert_eq!(shear_coefficient_k_shc(6.0), 0.5);
        // Midpoint of the blend
        let mid = shear_coefficient_k_shc(3.0);
        assert!((mid - (at + 0.5) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_design_stress() {
        // 5083-O: min(162, 112.5)
        assert_eq!(plating_design_stress(&alloy()), 112.5);
    }

    #[test]
    fn test_required_thickness_formula() {
        // 500 · √(30·0.5/112500)
        let t = required_thickness(500.0, 30.0, 0.5, 112.5);
        assert!((t - 500.0 * (15.0f64 / 112_500.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_minimum_thickness_bottom_vs_side() {
        let v = Vessel::new(test_input()).unwrap();
        let m = alloy();
        let bottom = minimum_thickness(&v, &m, Location::Bottom);
        let side = minimum_thickness(&v, &m, Location::Side);
        let expected = 1.5 + 0.03 * 12.0 + 0.15 * 1800f64.powf(0.33);
        assert!((bottom - expected).abs() < 1e-12);
        assert!(bottom > side);
        assert_eq!(minimum_thickness(&v, &m, Location::BottomAndSide), bottom);
    }

    #[test]
    fn test_requirement_uses_short_side() {
        let v = Vessel::new(test_input()).unwrap();
        let m = alloy();
        let a = PanelRequirement::compute(&v, &m, Location::Side, 400.0, 1000.0, 25.0);
        let b = PanelRequirement::compute(&v, &m, Location::Side, 1000.0, 400.0, 25.0);
        assert_eq!(a.required_thickness_mm, b.required_thickness_mm);
        assert_eq!(a.aspect_ratio, 2.5);
        assert!((a.shear_force_n_per_mm - a.k_shc * 25.0 * 0.4).abs() < 1e-12);
        // t = √(6M/σd)
        let t = (6.0 * a.bending_moment_nmm_per_mm / a.design_stress_mpa).sqrt();
        assert!((t - a.required_thickness_mm).abs() < 1e-9);
    }
}
