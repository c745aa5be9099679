//! Plate panels and their pipeline stages.
//!
//! A panel moves through factors → pressure → requirement → plate. Each
//! stage reads the previous stage's output and returns
//! [`ScantError::PipelineOrder`] when it is missing.

use serde::{Deserialize, Serialize};

use super::section::{Location, Position};
use crate::advisories::{Advisory, AdvisoryKind, AdvisoryLog};
use crate::calculations::weight::panel_mass_kg;
use crate::catalog::{Material, PlateCatalog, PlateSelection};
use crate::errors::{ScantError, ScantResult};
use crate::rules::{design_pressure, DesignPressure, GlobalFactors, LoadedArea, PanelRequirement, PressureFactors};
use crate::vessel::Vessel;

/// One plate field between two adjacent stiffener lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub label: String,
    /// Label of the section that generated this panel
    pub section: String,
    pub location: Location,
    /// Distance between the bounding lines (mm)
    pub width_mm: f64,
    /// Frame spacing (mm)
    pub length_mm: f64,
    /// Panel centre
    pub position: Position,

    pub material: Option<Material>,
    pub factors: Option<PressureFactors>,
    pub pressure: Option<DesignPressure>,
    pub requirement: Option<PanelRequirement>,
    pub plate: Option<PlateSelection>,
}

impl Panel {
    pub fn new(
        label: impl Into<String>,
        section: impl Into<String>,
        location: Location,
        width_mm: f64,
        length_mm: f64,
        position: Position,
    ) -> Self {
        Panel {
            label: label.into(),
            section: section.into(),
            location,
            width_mm,
            length_mm,
            position,
            material: None,
            factors: None,
            pressure: None,
            requirement: None,
            plate: None,
        }
    }

    pub fn loaded_area(&self) -> LoadedArea {
        LoadedArea::Panel {
            width_mm: self.width_mm,
            length_mm: self.length_mm,
        }
    }

    /// Panel area (m²)
    pub fn area_m2(&self) -> f64 {
        self.width_mm * self.length_mm * 1e-6
    }

    pub fn assign_material(&mut self, material: &Material) {
        self.material = Some(material.clone());
    }

    /// Stage 1: kL, kAR and kZ
    pub fn compute_factors(&mut self, vessel: &Vessel, global: &GlobalFactors) -> PressureFactors {
        let factors = PressureFactors::compute(vessel, global, self.location, self.position, self.loaded_area());
        self.factors = Some(factors);
        factors
    }

    /// Stage 2: design pressure, needs factors
    pub fn compute_pressure(&mut self, vessel: &Vessel, global: &GlobalFactors) -> ScantResult<DesignPressure> {
        let factors = self
            .factors
            .ok_or_else(|| ScantError::pipeline_order(&self.label, "pressure", "factors"))?;
        let pressure = design_pressure(vessel, global, &factors, self.location.pressure_zone());
        self.pressure = Some(pressure);
        Ok(pressure)
    }

    /// Stage 3: thickness requirement, needs pressure and material
    pub fn compute_requirement(&mut self, vessel: &Vessel) -> ScantResult<PanelRequirement> {
        let pressure = self
            .pressure
            .ok_or_else(|| ScantError::pipeline_order(&self.label, "requirement", "pressure"))?;
        let material = self
            .material
            .as_ref()
            .ok_or_else(|| ScantError::pipeline_order(&self.label, "requirement", "material"))?;
        let requirement = PanelRequirement::compute(
            vessel,
            material,
            self.location,
            self.width_mm,
            self.length_mm,
            pressure.design_kpa,
        );
        self.requirement = Some(requirement);
        Ok(requirement)
    }

    /// Stage 4: thinnest sufficient catalog plate.
    ///
    /// Falls back to the thickest plate with a warning naming this panel.
    pub fn assign_plate(&mut self, plates: &PlateCatalog, advisories: &mut AdvisoryLog) -> ScantResult<f64> {
        let requirement = self
            .requirement
            .ok_or_else(|| ScantError::pipeline_order(&self.label, "plate", "requirement"))?;
        let required_mm = requirement.governing_thickness_mm();
        let selection = plates.select(required_mm)?;
        if selection.fell_back {
            advisories.push(Advisory::warning(
                Some(self.label.clone()),
                AdvisoryKind::PlateFallback {
                    required_mm,
                    assigned_mm: selection.plate.thickness_mm,
                },
                format!(
                    "No catalog plate reaches {:.2} mm; using thickest ({:.1} mm)",
                    required_mm, selection.plate.thickness_mm
                ),
            ));
        }
        let thickness = selection.plate.thickness_mm;
        self.plate = Some(selection);
        Ok(thickness)
    }

    /// Assigned plate thickness (mm)
    pub fn thickness_mm(&self) -> Option<f64> {
        self.plate.as_ref().map(|p| p.plate.thickness_mm)
    }

    /// Mass from assigned plate and material (kg)
    pub fn mass_kg(&self) -> Option<f64> {
        let t = self.thickness_mm()?;
        let rho = self.material.as_ref()?.density_kg_m3;
        Some(panel_mass_kg(self.width_mm, self.length_mm, t, rho))
    }

    /// Assigned over governing thickness
    pub fn thickness_ratio(&self) -> Option<f64> {
        let t = self.thickness_mm()?;
        Some(t / self.requirement?.governing_thickness_mm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::rules::compute_global_factors;
    use crate::vessel::tests::test_input;
    use crate::vessel::DesignCategory;

    fn setup() -> (Vessel, GlobalFactors, Catalogs) {
        let vessel = Vessel::new(test_input()).unwrap();
        let mut log = AdvisoryLog::new();
        let global = compute_global_factors(&vessel, DesignCategory::C, &mut log);
        (vessel, global, Catalogs::standard())
    }

    fn panel() -> Panel {
        Panel::new("B1a", "B1", Location::Bottom, 500.0, 1000.0, Position::new(2.5, 0.25, 0.0))
    }

    #[test]
    fn test_stage_order_enforced() {
        let (vessel, global, _) = setup();
        let mut p = panel();
        let err = p.compute_pressure(&vessel, &global).unwrap_err();
        assert_eq!(err.error_code(), "PIPELINE_ORDER");

        p.compute_factors(&vessel, &global);
        p.compute_pressure(&vessel, &global).unwrap();
        // Material still missing
        assert_eq!(p.compute_requirement(&vessel).unwrap_err().error_code(), "PIPELINE_ORDER");
    }

    #[test]
    fn test_full_panel_pipeline() {
        let (vessel, global, cats) = setup();
        let mut p = panel();
        p.assign_material(cats.materials.lookup("AL_5083_O").unwrap());
        p.compute_factors(&vessel, &global);
        p.compute_pressure(&vessel, &global).unwrap();
        let req = p.compute_requirement(&vessel).unwrap();
        let mut log = AdvisoryLog::new();
        let t = p.assign_plate(&cats.plates, &mut log).unwrap();

        assert!(t >= req.governing_thickness_mm());
        assert!(log.is_empty());
        assert!(p.thickness_ratio().unwrap() >= 1.0);
        let expected = 0.5 * t * 1e-3 * 2720.0;
        assert!((p.mass_kg().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_plate_fallback_advisory() {
        let (vessel, global, cats) = setup();
        let mut p = Panel::new("B1a", "B1", Location::Bottom, 6000.0, 8000.0, Position::new(0.0, 0.0, 0.0));
        p.assign_material(cats.materials.lookup("AL_5251_O").unwrap());
        p.compute_factors(&vessel, &global);
        p.compute_pressure(&vessel, &global).unwrap();
        p.compute_requirement(&vessel).unwrap();
        let mut log = AdvisoryLog::new();
        let t = p.assign_plate(&cats.plates, &mut log).unwrap();
        assert_eq!(t, 30.0);
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].member.as_deref(), Some("B1a"));
        assert!(matches!(log.entries()[0].kind, AdvisoryKind::PlateFallback { .. }));
    }

    #[test]
    fn test_mass_requires_plate() {
        let p = panel();
        assert!(p.mass_kg().is_none());
        assert!((p.area_m2() - 0.5).abs() < 1e-12);
    }
}
