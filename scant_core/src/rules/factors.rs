//! Member-level pressure adjusting factors: longitudinal distribution kL,
//! area reduction kAR (with its kR term) and height kZ.

use serde::{Deserialize, Serialize};

use super::global::GlobalFactors;
use crate::structure::{Location, Position};
use crate::vessel::Vessel;

/// mm² per m²
const MM2_PER_M2: f64 = 1e6;

/// Bounds applied to kAR
pub const K_AR_RANGE: (f64, f64) = (0.25, 1.0);

/// Forward of this fraction of LWL the longitudinal factor is 1
pub const K_L_FULL_LOAD_RATIO: f64 = 0.6;

/// Loaded dimensions of a member, used for the design area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "member")]
pub enum LoadedArea {
    /// Plate panel: short side `width_mm`, long side `length_mm`
    Panel { width_mm: f64, length_mm: f64 },
    /// Stiffener: unsupported span and spacing
    Stiffener { span_mm: f64, spacing_mm: f64 },
}

impl LoadedArea {
    /// Design area AD (m²).
    ///
    /// Panels: l·b, not more than 2.5·b². Stiffeners: lu·s, not less than
    /// 0.33·lu².
    pub fn design_area_m2(&self) -> f64 {
        match *self {
            LoadedArea::Panel { width_mm, length_mm } => {
                let raw = length_mm * width_mm / MM2_PER_M2;
                raw.min(2.5 * width_mm * width_mm / MM2_PER_M2)
            }
            LoadedArea::Stiffener { span_mm, spacing_mm } => {
                let raw = span_mm * spacing_mm / MM2_PER_M2;
                raw.max(0.33 * span_mm * span_mm / MM2_PER_M2)
            }
        }
    }

    /// Displacement-mode kR: 1.5 − 3e-4·b for panels, 1 − 2e-4·lu for
    /// stiffeners
    pub fn k_r_displacement(&self) -> f64 {
        match *self {
            LoadedArea::Panel { width_mm, .. } => 1.5 - 3e-4 * width_mm,
            LoadedArea::Stiffener { span_mm, .. } => 1.0 - 2e-4 * span_mm,
        }
    }

    /// Planing-mode kR
    pub fn k_r_planing(&self) -> f64 {
        1.0
    }
}

/// Longitudinal pressure distribution factor kL.
///
/// `n_cg` is limited to 3..6 inside the formula. Members forward of 0.6·LWL
/// take kL = 1.
pub fn longitudinal_factor(x_m: f64, lwl_m: f64, n_cg: f64) -> f64 {
    let ratio = (x_m / lwl_m).max(0.0);
    if ratio > K_L_FULL_LOAD_RATIO {
        return 1.0;
    }
    let n = n_cg.clamp(3.0, 6.0);
    ((1.0 - 0.167 * n) / K_L_FULL_LOAD_RATIO * ratio + 0.167 * n).min(1.0)
}

/// Area pressure reduction factor kAR = kR·0.1·m^0.15/AD^0.3, in 0.25..1
pub fn area_factor(k_r: f64, mass_kg: f64, design_area_m2: f64) -> f64 {
    let raw = k_r * 0.1 * mass_kg.powf(0.15) / design_area_m2.powf(0.3);
    raw.clamp(K_AR_RANGE.0, K_AR_RANGE.1)
}

/// Height factor kZ = (Z − h)/Z with h the height above the canoe draft.
///
/// Members at or below the draft take 1; members above the reference
/// height take 0.
pub fn height_factor(z_m: f64, canoe_draft_m: f64, reference_height_m: f64) -> f64 {
    let h = z_m - canoe_draft_m;
    if h <= 0.0 {
        return 1.0;
    }
    ((reference_height_m - h) / reference_height_m).max(0.0)
}

/// Adjusting factors for one member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureFactors {
    /// Longitudinal distribution factor kL
    pub k_l: f64,
    /// Design area AD (m²)
    pub design_area_m2: f64,
    pub k_r_displacement: f64,
    pub k_r_planing: f64,
    /// Area reduction factor with displacement kR
    pub k_ar_displacement: f64,
    /// Area reduction factor with planing kR
    pub k_ar_planing: f64,
    /// Height factor kZ
    pub k_z: f64,
}

impl PressureFactors {
    /// Compute all factors for a member at `position`.
    ///
    /// The kZ reference height is the freeboard, plus the superstructure
    /// height for superstructure members.
    pub fn compute(
        vessel: &Vessel,
        global: &GlobalFactors,
        location: Location,
        position: Position,
        area: LoadedArea,
    ) -> Self {
        let design_area_m2 = area.design_area_m2();
        let k_r_displacement = area.k_r_displacement();
        let k_r_planing = area.k_r_planing();
        let reference_height_m = if location.is_superstructure() {
            vessel.freeboard_m() + vessel.superstructure_height_m()
        } else {
            vessel.freeboard_m()
        };

        PressureFactors {
            k_l: longitudinal_factor(position.x_m, vessel.lwl_m(), global.n_cg),
            design_area_m2,
            k_r_displacement,
            k_r_planing,
            k_ar_displacement: area_factor(k_r_displacement, vessel.mass_kg(), design_area_m2),
            k_ar_planing: area_factor(k_r_planing, vessel.mass_kg(), design_area_m2),
            k_z: height_factor(position.z_m, vessel.canoe_draft_m(), reference_height_m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisories::AdvisoryLog;
    use crate::rules::global::compute_global_factors;
    use crate::vessel::tests::test_input;
    use crate::vessel::DesignCategory;

    #[test]
    fn test_k_l_forward_is_one() {
        assert_eq!(longitudinal_factor(5.0, 6.851, 2.0), 1.0);
    }

    #[test]
    fn test_k_l_at_transom() {
        // x = 0 gives 0.167·n with n clamped to 3
        assert!((longitudinal_factor(0.0, 6.851, 1.2) - 0.501).abs() < 1e-12);
        assert!((longitudinal_factor(0.0, 6.851, 9.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_k_l_linear_and_bounded() {
        let lwl = 10.0;
        let a = longitudinal_factor(1.0, lwl, 3.0);
        let b = longitudinal_factor(2.0, lwl, 3.0);
        let c = longitudinal_factor(3.0, lwl, 3.0);
        assert!((b - a - (c - b)).abs() < 1e-12);
        for x in [0.0, 1.5, 3.0, 5.9, 6.0] {
            let k = longitudinal_factor(x, lwl, 4.5);
            assert!(k > 0.0 && k <= 1.0);
        }
        // Continuous at 0.6·LWL
        assert!((longitudinal_factor(6.0, lwl, 3.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_panel_design_area_cap() {
        let square = LoadedArea::Panel { width_mm: 500.0, length_mm: 1000.0 };
        assert!((square.design_area_m2() - 0.5).abs() < 1e-12);
        // 3000 x 500: l·b = 1.5 capped at 2.5·0.25 = 0.625
        let long = LoadedArea::Panel { width_mm: 500.0, length_mm: 3000.0 };
        assert!((long.design_area_m2() - 0.625).abs() < 1e-12);
    }

    #[test]
    fn test_stiffener_design_area_floor() {
        // 1000 x 100: lu·s = 0.1 raised to 0.33·1.0
        let s = LoadedArea::Stiffener { span_mm: 1000.0, spacing_mm: 100.0 };
        assert!((s.design_area_m2() - 0.33).abs() < 1e-12);
        let wide = LoadedArea::Stiffener { span_mm: 1000.0, spacing_mm: 500.0 };
        assert!((wide.design_area_m2() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_k_r_values() {
        let p = LoadedArea::Panel { width_mm: 500.0, length_mm: 1000.0 };
        assert!((p.k_r_displacement() - 1.35).abs() < 1e-12);
        let s = LoadedArea::Stiffener { span_mm: 1000.0, spacing_mm: 250.0 };
        assert!((s.k_r_displacement() - 0.8).abs() < 1e-12);
        assert_eq!(s.k_r_planing(), 1.0);
    }

    #[test]
    fn test_area_factor_clamped() {
        assert_eq!(area_factor(1.0, 1800.0, 1e-4), 1.0);
        assert_eq!(area_factor(0.1, 1800.0, 100.0), 0.25);
        let mid = area_factor(1.0, 1800.0, 0.5);
        let expected = 0.1 * 1800f64.powf(0.15) / 0.5f64.powf(0.3);
        assert!((mid - expected.clamp(0.25, 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_height_factor() {
        assert_eq!(height_factor(0.1, 0.35, 0.9), 1.0);
        assert!((height_factor(0.8, 0.35, 0.9) - 0.5).abs() < 1e-12);
        assert_eq!(height_factor(2.0, 0.35, 0.9), 0.0);
    }

    #[test]
    fn test_superstructure_reference_height() {
        let vessel = Vessel::new(test_input()).unwrap();
        let mut log = AdvisoryLog::new();
        let global = compute_global_factors(&vessel, DesignCategory::C, &mut log);
        let area = LoadedArea::Panel { width_mm: 500.0, length_mm: 1000.0 };
        let pos = Position::new(3.0, 0.5, 1.5);
        let side = PressureFactors::compute(&vessel, &global, Location::Side, pos, area);
        let sup = PressureFactors::compute(&vessel, &global, Location::Superstructure, pos, area);
        assert_eq!(side.k_z, 0.0);
        // h = 1.15 over Z = 0.9 + 1.2
        assert!((sup.k_z - (2.1 - 1.15) / 2.1).abs() < 1e-12);
        assert_eq!(side.k_l, sup.k_l);
    }
}
