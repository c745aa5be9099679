//! # Design Pipeline
//!
//! Runs one design configuration through every stage on a structure whose
//! topology has already been generated:
//!
//! ```text
//! materials → factors → pressure → requirement → plate
//!           → profile → stress → proportions → weight
//! ```
//!
//! Stiffener stages are skipped when the structure has no stiffeners.
//!
//! ## Example
//!
//! ```rust
//! use scant_core::advisories::AdvisoryLog;
//! use scant_core::catalog::Catalogs;
//! use scant_core::pipeline::{run, DesignChoice};
//! use scant_core::rules::compute_global_factors;
//! use scant_core::structure::{Location, Position, Section, Structure};
//! use scant_core::vessel::{DesignCategory, Vessel, VesselInput};
//!
//! let vessel = Vessel::new(VesselInput {
//!     lwl_m: 6.851, beam_chine_m: 2.4, mass_kg: 1800.0, deadrise_deg: 16.0,
//!     speed_kn: 12.0, superstructure_height_m: 0.0, canoe_draft_m: 0.35,
//!     freeboard_m: 0.9,
//! }).unwrap();
//! let cats = Catalogs::standard();
//! let global = compute_global_factors(&vessel, DesignCategory::C, &mut AdvisoryLog::new());
//!
//! let mut structure = Structure::with_sections(&[
//!     Section::new("B1", 1000.0, 1000.0, Position::new(2.0, 0.0, 0.0), Location::Bottom),
//! ]).unwrap();
//! structure.generate_all(3).unwrap();
//!
//! let alloy = cats.materials.lookup("AL_5083_O").unwrap();
//! let choice = DesignChoice {
//!     panel_material: alloy,
//!     stiffener_material: alloy,
//!     profile: Some(cats.profiles.lookup("Tee 40 x 40 x 4").unwrap()),
//! };
//! let outcome = run(&mut structure, &vessel, &global, &choice, &cats.plates).unwrap();
//! assert!(outcome.weight.total_mass_kg > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::advisories::AdvisoryLog;
use crate::calculations::weight::WeightSummary;
use crate::catalog::{Material, PlateCatalog, Profile};
use crate::errors::{ScantError, ScantResult};
use crate::rules::GlobalFactors;
use crate::structure::Structure;
use crate::vessel::Vessel;

/// Material and profile choices for one configuration
#[derive(Debug, Clone, Copy)]
pub struct DesignChoice<'a> {
    pub panel_material: &'a Material,
    pub stiffener_material: &'a Material,
    /// Required whenever the structure has stiffeners
    pub profile: Option<&'a Profile>,
}

/// Results of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutcome {
    pub weight: WeightSummary,
    /// None when there are no stiffeners
    pub min_section_modulus_ratio: Option<f64>,
    pub min_web_area_ratio: Option<f64>,
    /// True when any panel fell back to the thickest plate
    pub plate_fallback: bool,
    pub advisories: AdvisoryLog,
}

/// Run every stage on `structure` with the given choices.
pub fn run(
    structure: &mut Structure,
    vessel: &Vessel,
    global: &GlobalFactors,
    choice: &DesignChoice<'_>,
    plates: &PlateCatalog,
) -> ScantResult<PipelineOutcome> {
    let mut advisories = AdvisoryLog::new();

    structure.set_global_factors(*global);
    structure.assign_materials(choice.panel_material, choice.stiffener_material);
    structure.compute_requirements(vessel)?;
    structure.assign_plates(plates, &mut advisories)?;

    if !structure.stiffeners().is_empty() {
        let profile = choice.profile.ok_or_else(|| ScantError::missing_field("profile"))?;
        structure.assign_profile(profile);
        structure.check_stiffeners(&mut advisories)?;
    }

    let weight = structure.weight()?;
    let plate_fallback = structure
        .panels()
        .iter()
        .any(|p| p.plate.as_ref().is_some_and(|s| s.fell_back));

    Ok(PipelineOutcome {
        weight,
        min_section_modulus_ratio: structure.min_section_modulus_ratio(),
        min_web_area_ratio: structure.min_web_area_ratio(),
        plate_fallback,
        advisories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::rules::compute_global_factors;
    use crate::structure::{Location, Position, Section};
    use crate::vessel::tests::test_input;
    use crate::vessel::DesignCategory;

    fn setup(count: usize) -> (Structure, Vessel, GlobalFactors, Catalogs) {
        let vessel = Vessel::new(test_input()).unwrap();
        let global = compute_global_factors(&vessel, DesignCategory::C, &mut AdvisoryLog::new());
        let mut structure = Structure::with_sections(&[
            Section::new("B1", 1000.0, 1000.0, Position::new(2.0, 0.0, 0.0), Location::Bottom),
            Section::new("S1", 600.0, 1000.0, Position::new(2.0, 1.2, 0.3), Location::Side),
        ])
        .unwrap();
        structure.generate_all(count).unwrap();
        (structure, vessel, global, Catalogs::standard())
    }

    #[test]
    fn test_zero_stiffeners_weight_is_panels_only() {
        let (mut s, vessel, global, cats) = setup(0);
        let alloy = cats.materials.lookup("AL_5083_O").unwrap();
        let choice = DesignChoice {
            panel_material: alloy,
            stiffener_material: alloy,
            profile: None,
        };
        let out = run(&mut s, &vessel, &global, &choice, &cats.plates).unwrap();
        assert_eq!(out.weight.stiffener_mass_kg, 0.0);
        assert_eq!(out.weight.total_mass_kg, out.weight.panel_mass_kg);
        assert!(out.min_section_modulus_ratio.is_none());
        assert!(s.stiffeners().is_empty());
    }

    #[test]
    fn test_profile_required_with_stiffeners() {
        let (mut s, vessel, global, cats) = setup(2);
        let alloy = cats.materials.lookup("AL_5083_O").unwrap();
        let choice = DesignChoice {
            panel_material: alloy,
            stiffener_material: alloy,
            profile: None,
        };
        let err = run(&mut s, &vessel, &global, &choice, &cats.plates).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_pipeline_idempotent() {
        let (mut s, vessel, global, cats) = setup(3);
        let alloy = cats.materials.lookup("AL_5083_H32").unwrap();
        let choice = DesignChoice {
            panel_material: alloy,
            stiffener_material: alloy,
            profile: Some(cats.profiles.lookup("Tee 40 x 40 x 4").unwrap()),
        };
        let first = run(&mut s, &vessel, &global, &choice, &cats.plates).unwrap();
        let snapshot = s.clone();
        let second = run(&mut s, &vessel, &global, &choice, &cats.plates).unwrap();
        assert_eq!(first, second);
        assert_eq!(snapshot, s);
    }

    #[test]
    fn test_stiffeners_add_weight() {
        let (mut s, vessel, global, cats) = setup(2);
        let alloy = cats.materials.lookup("AL_5083_O").unwrap();
        let choice = DesignChoice {
            panel_material: alloy,
            stiffener_material: alloy,
            profile: Some(cats.profiles.lookup("Flat Bar 50 x 6").unwrap()),
        };
        let out = run(&mut s, &vessel, &global, &choice, &cats.plates).unwrap();
        // 4 stiffeners of 300 mm² over 1 m
        let expected = 4.0 * 300.0 * 1000.0 * 1e-9 * 2720.0;
        assert!((out.weight.stiffener_mass_kg - expected).abs() < 1e-9);
        assert!(out.weight.centre_of_gravity.is_some());
        assert!(out.min_web_area_ratio.unwrap() > 0.0);
    }
}
