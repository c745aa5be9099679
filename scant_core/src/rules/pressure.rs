//! Design pressures (kN/m²) for bottom, side and deck members.
//!
//! Each member gets a displacement candidate, a planing candidate and a
//! minimum; the design pressure is the largest of the three.

use serde::{Deserialize, Serialize};

use super::factors::PressureFactors;
use super::global::GlobalFactors;
use crate::structure::PressureZone;
use crate::vessel::Vessel;

/// Deck and roof pressure floor (kN/m²)
pub const DECK_MINIMUM_KPA: f64 = 5.0;

/// Base bottom pressure, displacement mode: 2.4·m^0.33 + 20
pub fn bottom_displacement_base(vessel: &Vessel) -> f64 {
    2.4 * vessel.mass_kg().powf(0.33) + 20.0
}

/// Base bottom pressure, planing mode: 0.1·m/(LWL·BC)·(1 + √kDC·nCG)
pub fn bottom_planing_base(vessel: &Vessel, global: &GlobalFactors) -> f64 {
    0.1 * vessel.mass_kg() / (vessel.lwl_m() * vessel.beam_chine_m())
        * (1.0 + global.k_dc.sqrt() * global.n_cg)
}

/// Base deck pressure: 0.35·LWL + 14.6
pub fn deck_base(vessel: &Vessel) -> f64 {
    0.35 * vessel.lwl_m() + 14.6
}

/// Design pressure for one member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignPressure {
    pub zone: PressureZone,
    /// Displacement-mode candidate (kN/m²)
    pub displacement_kpa: f64,
    /// Planing-mode candidate (kN/m²)
    pub planing_kpa: f64,
    /// Rule minimum (kN/m²)
    pub minimum_kpa: f64,
    /// Governing design pressure (kN/m²)
    pub design_kpa: f64,
}

impl DesignPressure {
    fn governed(zone: PressureZone, displacement_kpa: f64, planing_kpa: f64, minimum_kpa: f64) -> Self {
        DesignPressure {
            zone,
            displacement_kpa,
            planing_kpa,
            minimum_kpa,
            design_kpa: displacement_kpa.max(planing_kpa).max(minimum_kpa),
        }
    }

    /// Which candidate set the design pressure
    pub fn governing_case(&self) -> &'static str {
        if self.design_kpa == self.minimum_kpa {
            "minimum"
        } else if self.design_kpa == self.planing_kpa {
            "planing"
        } else {
            "displacement"
        }
    }
}

/// Compute the design pressure of a member in `zone`.
pub fn design_pressure(
    vessel: &Vessel,
    global: &GlobalFactors,
    factors: &PressureFactors,
    zone: PressureZone,
) -> DesignPressure {
    let k_dc = global.k_dc;
    let k_l = factors.k_l;
    let pbmd = bottom_displacement_base(vessel);
    let pbmp = bottom_planing_base(vessel, global);
    let pdm = deck_base(vessel);

    match zone {
        PressureZone::Bottom => DesignPressure::governed(
            zone,
            pbmd * factors.k_ar_displacement * k_dc * k_l,
            pbmp * factors.k_ar_planing * k_l,
            0.45 * vessel.mass_kg().powf(0.33) + 0.9 * vessel.lwl_m() * k_dc,
        ),
        PressureZone::Side => {
            let k_z = factors.k_z;
            DesignPressure::governed(
                zone,
                (pdm + k_z * (pbmd - pdm)) * factors.k_ar_displacement * k_dc * k_l,
                (pdm + k_z * (0.25 * pbmp - pdm)) * factors.k_ar_planing * k_l,
                0.9 * vessel.lwl_m() * k_dc,
            )
        }
        PressureZone::Deck => DesignPressure::governed(
            zone,
            pdm * k_dc * factors.k_ar_displacement * k_l,
            pdm * k_dc * factors.k_ar_planing * k_l,
            DECK_MINIMUM_KPA,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisories::AdvisoryLog;
    use crate::rules::factors::LoadedArea;
    use crate::rules::global::compute_global_factors;
    use crate::structure::{Location, Position};
    use crate::vessel::tests::test_input;
    use crate::vessel::DesignCategory;

    fn setup() -> (Vessel, GlobalFactors) {
        let vessel = Vessel::new(test_input()).unwrap();
        let mut log = AdvisoryLog::new();
        let global = compute_global_factors(&vessel, DesignCategory::C, &mut log);
        (vessel, global)
    }

    fn factors(vessel: &Vessel, global: &GlobalFactors, location: Location, z_m: f64) -> PressureFactors {
        PressureFactors::compute(
            vessel,
            global,
            location,
            Position::new(3.0, 0.4, z_m),
            LoadedArea::Panel { width_mm: 500.0, length_mm: 1000.0 },
        )
    }

    #[test]
    fn test_bottom_pressure_is_max_of_candidates() {
        let (v, g) = setup();
        let f = factors(&v, &g, Location::Bottom, 0.0);
        let p = design_pressure(&v, &g, &f, PressureZone::Bottom);
        let expected = p.displacement_kpa.max(p.planing_kpa).max(p.minimum_kpa);
        assert_eq!(p.design_kpa, expected);
        let pbmd = 2.4 * 1800f64.powf(0.33) + 20.0;
        assert!((p.displacement_kpa - pbmd * f.k_ar_displacement * 0.6 * f.k_l).abs() < 1e-9);
    }

    #[test]
    fn test_bottom_minimum_floor() {
        let (v, g) = setup();
        let f = PressureFactors {
            k_l: 0.01,
            design_area_m2: 1.0,
            k_r_displacement: 1.0,
            k_r_planing: 1.0,
            k_ar_displacement: 0.25,
            k_ar_planing: 0.25,
            k_z: 1.0,
        };
        let p = design_pressure(&v, &g, &f, PressureZone::Bottom);
        assert_eq!(p.design_kpa, p.minimum_kpa);
        assert_eq!(p.governing_case(), "minimum");
    }

    #[test]
    fn test_side_at_waterline_matches_bottom_base() {
        // kZ = 1 collapses the displacement side pressure onto the bottom base
        let (v, g) = setup();
        let f = factors(&v, &g, Location::Side, 0.0);
        assert_eq!(f.k_z, 1.0);
        let side = design_pressure(&v, &g, &f, PressureZone::Side);
        let bottom = design_pressure(&v, &g, &f, PressureZone::Bottom);
        assert!((side.displacement_kpa - bottom.displacement_kpa).abs() < 1e-9);
    }

    #[test]
    fn test_side_pressure_decreases_with_height() {
        let (v, g) = setup();
        let low = design_pressure(&v, &g, &factors(&v, &g, Location::Side, 0.4), PressureZone::Side);
        let high = design_pressure(&v, &g, &factors(&v, &g, Location::Side, 1.0), PressureZone::Side);
        assert!(low.displacement_kpa > high.displacement_kpa);
        assert!(high.design_kpa >= 0.9 * 6.851 * 0.6 - 1e-12);
    }

    #[test]
    fn test_deck_floor() {
        let (v, g) = setup();
        let f = factors(&v, &g, Location::Deck, 1.2);
        let p = design_pressure(&v, &g, &f, PressureZone::Deck);
        assert!(p.design_kpa >= DECK_MINIMUM_KPA);
        let expected = (0.35 * 6.851 + 14.6) * 0.6 * f.k_ar_displacement * f.k_l;
        assert!((p.displacement_kpa - expected).abs() < 1e-9);
    }
}
