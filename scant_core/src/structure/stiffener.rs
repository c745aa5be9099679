//! Stiffeners and their pipeline stages.
//!
//! Stages: factors → pressure → requirement → profile → stress → proportions.
//! The stress stage needs the thickness of the attached plating, so plates
//! must be assigned to the neighbouring panels first.

use serde::{Deserialize, Serialize};

use super::section::{Location, Position, StiffenerType};
use crate::advisories::AdvisoryLog;
use crate::calculations::stress::{self, StiffenerStressInput, StiffenerStressResult};
use crate::calculations::weight::stiffener_mass_kg;
use crate::catalog::{Material, Profile};
use crate::errors::{ScantError, ScantResult};
use crate::rules::{
    design_pressure, DesignPressure, GlobalFactors, LoadedArea, PressureFactors, ProportionCheck,
    StiffenerRequirement,
};
use crate::vessel::Vessel;

/// A stiffener on one of a section's interior lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stiffener {
    pub label: String,
    pub section: String,
    pub stiffener_type: StiffenerType,
    pub location: Location,
    /// Unsupported span between frames (mm)
    pub length_mm: f64,
    /// Mean distance to the neighbouring lines (mm)
    pub spacing_mm: f64,
    /// Mid-span position
    pub position: Position,
    /// Panels on either side of this stiffener
    pub attached_panels: [String; 2],

    pub material: Option<Material>,
    pub factors: Option<PressureFactors>,
    pub pressure: Option<DesignPressure>,
    pub requirement: Option<StiffenerRequirement>,
    pub profile: Option<Profile>,
    pub stress: Option<StiffenerStressResult>,
    pub proportions: Option<ProportionCheck>,
}

impl Stiffener {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        label: impl Into<String>,
        section: impl Into<String>,
        stiffener_type: StiffenerType,
        location: Location,
        length_mm: f64,
        spacing_mm: f64,
        position: Position,
        attached_panels: [String; 2],
    ) -> Self {
        Stiffener {
            label: label.into(),
            section: section.into(),
            stiffener_type,
            location,
            length_mm,
            spacing_mm,
            position,
            attached_panels,
            material: None,
            factors: None,
            pressure: None,
            requirement: None,
            profile: None,
            stress: None,
            proportions: None,
        }
    }

    pub fn loaded_area(&self) -> LoadedArea {
        LoadedArea::Stiffener {
            span_mm: self.length_mm,
            spacing_mm: self.spacing_mm,
        }
    }

    pub fn assign_material(&mut self, material: &Material) {
        self.material = Some(material.clone());
    }

    pub fn assign_profile(&mut self, profile: &Profile) {
        self.profile = Some(profile.clone());
    }

    pub fn compute_factors(&mut self, vessel: &Vessel, global: &GlobalFactors) -> PressureFactors {
        let factors = PressureFactors::compute(vessel, global, self.location, self.position, self.loaded_area());
        self.factors = Some(factors);
        factors
    }

    pub fn compute_pressure(&mut self, vessel: &Vessel, global: &GlobalFactors) -> ScantResult<DesignPressure> {
        let factors = self
            .factors
            .ok_or_else(|| ScantError::pipeline_order(&self.label, "pressure", "factors"))?;
        let pressure = design_pressure(vessel, global, &factors, self.location.pressure_zone());
        self.pressure = Some(pressure);
        Ok(pressure)
    }

    pub fn compute_requirement(&mut self) -> ScantResult<StiffenerRequirement> {
        let pressure = self
            .pressure
            .ok_or_else(|| ScantError::pipeline_order(&self.label, "requirement", "pressure"))?;
        let material = self
            .material
            .as_ref()
            .ok_or_else(|| ScantError::pipeline_order(&self.label, "requirement", "material"))?;
        let requirement =
            StiffenerRequirement::compute(material, pressure.design_kpa, self.spacing_mm, self.length_mm);
        self.requirement = Some(requirement);
        Ok(requirement)
    }

    /// Bending stress with `plate_thickness_mm` of attached plating
    pub fn check_stress(&mut self, plate_thickness_mm: f64) -> ScantResult<StiffenerStressResult> {
        let pressure = self
            .pressure
            .ok_or_else(|| ScantError::pipeline_order(&self.label, "stress", "pressure"))?;
        let profile = self
            .profile
            .as_ref()
            .ok_or_else(|| ScantError::pipeline_order(&self.label, "stress", "profile"))?;
        let result = stress::calculate(&StiffenerStressInput {
            geometry: profile.geometry,
            plate_thickness_mm,
            spacing_mm: self.spacing_mm,
            span_mm: self.length_mm,
            pressure_kpa: pressure.design_kpa,
        })?;
        self.stress = Some(result);
        Ok(result)
    }

    /// Web and flange slenderness; violations go to `advisories`
    pub fn check_proportions(&mut self, advisories: &mut AdvisoryLog) -> ScantResult<ProportionCheck> {
        let stress = self
            .stress
            .ok_or_else(|| ScantError::pipeline_order(&self.label, "proportions", "stress"))?;
        let requirement = self
            .requirement
            .ok_or_else(|| ScantError::pipeline_order(&self.label, "proportions", "requirement"))?;
        let (profile, material) = match (&self.profile, &self.material) {
            (Some(p), Some(m)) => (p, m),
            _ => return Err(ScantError::pipeline_order(&self.label, "proportions", "profile")),
        };
        let check = ProportionCheck::compute(
            profile,
            material,
            stress.stress_mpa,
            requirement.design_bending_stress_mpa,
            requirement.web_area_cm2,
        );
        for advisory in check.advisories(&self.label) {
            advisories.push(advisory);
        }
        self.proportions = Some(check);
        Ok(check)
    }

    /// Offered over required section modulus
    pub fn section_modulus_ratio(&self) -> Option<f64> {
        let offered = self.profile.as_ref()?.section_modulus_cm3;
        Some(offered / self.requirement?.section_modulus_cm3)
    }

    /// Offered over required web area
    pub fn web_area_ratio(&self) -> Option<f64> {
        let offered = self.profile.as_ref()?.web_area_cm2;
        Some(offered / self.requirement?.web_area_cm2)
    }

    /// Mass from profile area, length and material density (kg)
    pub fn mass_kg(&self) -> Option<f64> {
        let area = self.profile.as_ref()?.area_mm2();
        let rho = self.material.as_ref()?.density_kg_m3;
        Some(stiffener_mass_kg(area, self.length_mm, rho))
    }
}
