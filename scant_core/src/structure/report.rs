//! Flat per-member records for downstream tables and exports.
//!
//! Fields that belong to a stage the member has not reached are `None`.

use serde::{Deserialize, Serialize};

use super::section::{Location, Position};
use super::{Panel, Stiffener, Structure};
use crate::advisories::AdvisoryLog;
use crate::calculations::weight::WeightSummary;
use crate::rules::GlobalFactors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberKind {
    Panel,
    Stiffener,
}

/// One row of a scantling table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberReport {
    pub label: String,
    pub section: String,
    pub kind: MemberKind,
    pub location: Location,
    pub position: Position,
    /// Panel length or stiffener span (mm)
    pub length_mm: f64,
    /// Panel width or stiffener spacing (mm)
    pub width_mm: f64,
    pub design_pressure_kpa: Option<f64>,

    // === Panel ===
    pub required_thickness_mm: Option<f64>,
    pub minimum_thickness_mm: Option<f64>,
    pub plate_thickness_mm: Option<f64>,

    // === Stiffener ===
    pub required_section_modulus_cm3: Option<f64>,
    pub required_web_area_cm2: Option<f64>,
    pub offered_section_modulus_cm3: Option<f64>,
    pub offered_web_area_cm2: Option<f64>,
    pub stress_mpa: Option<f64>,
    pub proportions_ok: Option<bool>,

    /// Plate or profile label
    pub assigned: Option<String>,
    pub material: Option<String>,
    /// Largest required/offered ratio
    pub utilisation: Option<f64>,
    pub mass_kg: Option<f64>,
}

impl MemberReport {
    pub fn from_panel(panel: &Panel) -> Self {
        let requirement = panel.requirement;
        MemberReport {
            label: panel.label.clone(),
            section: panel.section.clone(),
            kind: MemberKind::Panel,
            location: panel.location,
            position: panel.position,
            length_mm: panel.length_mm,
            width_mm: panel.width_mm,
            design_pressure_kpa: panel.pressure.map(|p| p.design_kpa),
            required_thickness_mm: requirement.map(|r| r.required_thickness_mm),
            minimum_thickness_mm: requirement.map(|r| r.minimum_thickness_mm),
            plate_thickness_mm: panel.thickness_mm(),
            required_section_modulus_cm3: None,
            required_web_area_cm2: None,
            offered_section_modulus_cm3: None,
            offered_web_area_cm2: None,
            stress_mpa: None,
            proportions_ok: None,
            assigned: panel.plate.as_ref().map(|p| p.plate.label.clone()),
            material: panel.material.as_ref().map(|m| m.label.clone()),
            utilisation: panel.thickness_ratio().map(|r| 1.0 / r),
            mass_kg: panel.mass_kg(),
        }
    }

    pub fn from_stiffener(stiffener: &Stiffener) -> Self {
        let requirement = stiffener.requirement;
        let profile = stiffener.profile.as_ref();
        let utilisation = match (stiffener.section_modulus_ratio(), stiffener.web_area_ratio()) {
            (Some(sm), Some(aw)) => Some((1.0 / sm).max(1.0 / aw)),
            _ => None,
        };
        MemberReport {
            label: stiffener.label.clone(),
            section: stiffener.section.clone(),
            kind: MemberKind::Stiffener,
            location: stiffener.location,
            position: stiffener.position,
            length_mm: stiffener.length_mm,
            width_mm: stiffener.spacing_mm,
            design_pressure_kpa: stiffener.pressure.map(|p| p.design_kpa),
            required_thickness_mm: None,
            minimum_thickness_mm: None,
            plate_thickness_mm: None,
            required_section_modulus_cm3: requirement.map(|r| r.section_modulus_cm3),
            required_web_area_cm2: requirement.map(|r| r.web_area_cm2),
            offered_section_modulus_cm3: profile.map(|p| p.section_modulus_cm3),
            offered_web_area_cm2: profile.map(|p| p.web_area_cm2),
            stress_mpa: stiffener.stress.map(|s| s.stress_mpa),
            proportions_ok: stiffener.proportions.map(|c| c.passes()),
            assigned: profile.map(|p| p.label.clone()),
            material: stiffener.material.as_ref().map(|m| m.label.clone()),
            utilisation,
            mass_kg: stiffener.mass_kg(),
        }
    }

    /// Offered values meet the requirement
    pub fn passes(&self) -> bool {
        self.utilisation.is_some_and(|u| u <= 1.0 + 1e-9)
    }
}

/// All member rows of a structure with its totals and advisories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureReport {
    pub global: Option<GlobalFactors>,
    pub members: Vec<MemberReport>,
    /// None until every member has a plate or profile
    pub weight: Option<WeightSummary>,
    pub advisories: AdvisoryLog,
}

impl StructureReport {
    pub fn panels(&self) -> impl Iterator<Item = &MemberReport> {
        self.members.iter().filter(|m| m.kind == MemberKind::Panel)
    }

    pub fn stiffeners(&self) -> impl Iterator<Item = &MemberReport> {
        self.members.iter().filter(|m| m.kind == MemberKind::Stiffener)
    }

    pub fn all_pass(&self) -> bool {
        self.members.iter().all(MemberReport::passes)
    }
}

impl Structure {
    /// Build the report rows for every panel then every stiffener
    pub fn report(&self, advisories: &AdvisoryLog) -> StructureReport {
        let members = self
            .panels()
            .iter()
            .map(MemberReport::from_panel)
            .chain(self.stiffeners().iter().map(MemberReport::from_stiffener))
            .collect();
        StructureReport {
            global: self.global_factors().copied(),
            members,
            weight: self.weight().ok(),
            advisories: advisories.clone(),
        }
    }
}
