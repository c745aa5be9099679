//! # Structure Aggregate
//!
//! A [`Structure`] owns the sections of a design and the panels and
//! stiffeners generated from them, together with the vessel-wide rule
//! factors. Members are plain values held in ordered collections; each one
//! records the section that generated it.
//!
//! ```text
//! Structure
//! ├── sections:   Vec<Section>    (geometry, location, label)
//! ├── panels:     Vec<Panel>      (generated, per section)
//! ├── stiffeners: Vec<Stiffener>  (generated, per section)
//! └── global:     Option<GlobalFactors>
//! ```
//!
//! One structure is used per design iteration. The optimizer builds a fresh
//! one for every grid cell.
//!
//! ## Example
//!
//! ```rust
//! use scant_core::structure::{Location, Position, Section, Structure};
//!
//! let mut structure = Structure::new();
//! structure
//!     .add_section(Section::new("B1", 1000.0, 1000.0, Position::new(2.0, 0.0, 0.0), Location::Bottom))
//!     .unwrap();
//! structure.generate_topology("B1", 3).unwrap();
//! assert_eq!(structure.panels().len(), 4);
//! ```

pub mod panel;
pub mod report;
pub mod section;
pub mod stiffener;
pub mod topology;

pub use panel::Panel;
pub use report::{MemberKind, MemberReport, StructureReport};
pub use section::{DistributionAxis, Location, Position, PressureZone, Section, StiffenerType};
pub use stiffener::Stiffener;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::advisories::AdvisoryLog;
use crate::calculations::weight::{MassAccumulator, WeightSummary};
use crate::catalog::{Material, PlateCatalog, Profile};
use crate::errors::{ScantError, ScantResult};
use crate::rules::{compute_global_factors, GlobalFactors};
use crate::vessel::{DesignCategory, Vessel};

/// Member label used in errors that concern the whole structure
const STRUCTURE_MEMBER: &str = "structure";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    sections: Vec<Section>,
    panels: Vec<Panel>,
    stiffeners: Vec<Stiffener>,
    global: Option<GlobalFactors>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Structure holding `sections`, with no members generated yet
    pub fn with_sections(sections: &[Section]) -> ScantResult<Self> {
        let mut structure = Structure::new();
        for section in sections {
            structure.add_section(section.clone())?;
        }
        Ok(structure)
    }

    /// Add a section; labels must be unique.
    pub fn add_section(&mut self, section: Section) -> ScantResult<()> {
        section.validate()?;
        if self.sections.iter().any(|s| s.label == section.label) {
            return Err(ScantError::invalid_input(
                "label",
                section.label,
                "Section label already used in this structure",
            ));
        }
        self.sections.push(section);
        Ok(())
    }

    pub fn section(&self, label: &str) -> ScantResult<&Section> {
        self.sections
            .iter()
            .find(|s| s.label == label)
            .ok_or_else(|| ScantError::not_in_catalog("Section", label))
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn stiffeners(&self) -> &[Stiffener] {
        &self.stiffeners
    }

    pub fn panels_in<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a Panel> + 'a {
        self.panels.iter().filter(move |p| p.section == section)
    }

    pub fn stiffeners_in<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a Stiffener> + 'a {
        self.stiffeners.iter().filter(move |s| s.section == section)
    }

    /// Generate the same stiffener count in every section
    pub fn generate_all(&mut self, stiffener_count: usize) -> ScantResult<()> {
        let labels: Vec<String> = self.sections.iter().map(|s| s.label.clone()).collect();
        for label in labels {
            self.generate_topology(&label, stiffener_count)?;
        }
        Ok(())
    }

    // =========================================================================
    // Rule pipeline
    // =========================================================================

    pub fn global_factors(&self) -> Option<&GlobalFactors> {
        self.global.as_ref()
    }

    pub fn set_global_factors(&mut self, global: GlobalFactors) {
        self.global = Some(global);
    }

    /// Compute and store kDC and nCG
    pub fn compute_global_factors(
        &mut self,
        vessel: &Vessel,
        category: DesignCategory,
        advisories: &mut AdvisoryLog,
    ) -> GlobalFactors {
        let global = compute_global_factors(vessel, category, advisories);
        self.global = Some(global);
        global
    }

    fn require_global(&self, stage: &str) -> ScantResult<GlobalFactors> {
        self.global
            .ok_or_else(|| ScantError::pipeline_order(STRUCTURE_MEMBER, stage, "global factors"))
    }

    /// Assign one material to every panel and another to every stiffener
    pub fn assign_materials(&mut self, panel_material: &Material, stiffener_material: &Material) {
        for panel in &mut self.panels {
            panel.assign_material(panel_material);
        }
        for stiffener in &mut self.stiffeners {
            stiffener.assign_material(stiffener_material);
        }
    }

    /// Factors, design pressure and requirement for every member, in that
    /// order. Needs global factors and assigned materials.
    pub fn compute_requirements(&mut self, vessel: &Vessel) -> ScantResult<()> {
        let global = self.require_global("requirements")?;
        for panel in &mut self.panels {
            panel.compute_factors(vessel, &global);
            panel.compute_pressure(vessel, &global)?;
            panel.compute_requirement(vessel)?;
        }
        for stiffener in &mut self.stiffeners {
            stiffener.compute_factors(vessel, &global);
            stiffener.compute_pressure(vessel, &global)?;
            stiffener.compute_requirement()?;
        }
        Ok(())
    }

    /// Thinnest sufficient plate for every panel
    pub fn assign_plates(&mut self, plates: &PlateCatalog, advisories: &mut AdvisoryLog) -> ScantResult<()> {
        for panel in &mut self.panels {
            panel.assign_plate(plates, advisories)?;
        }
        Ok(())
    }

    /// Assign one profile to every stiffener
    pub fn assign_profile(&mut self, profile: &Profile) {
        for stiffener in &mut self.stiffeners {
            stiffener.assign_profile(profile);
        }
    }

    /// Stress and proportion checks for every stiffener.
    ///
    /// The attached plating is the thinner of the two neighbouring panels.
    pub fn check_stiffeners(&mut self, advisories: &mut AdvisoryLog) -> ScantResult<()> {
        // Panel labels are only unique within their section
        let thickness: HashMap<(&str, &str), f64> = self
            .panels
            .iter()
            .filter_map(|p| p.thickness_mm().map(|t| ((p.section.as_str(), p.label.as_str()), t)))
            .collect();

        for stiffener in &mut self.stiffeners {
            let section = stiffener.section.as_str();
            let [left, right] = &stiffener.attached_panels;
            let tp = match (
                thickness.get(&(section, left.as_str())),
                thickness.get(&(section, right.as_str())),
            ) {
                (Some(a), Some(b)) => a.min(*b),
                _ => {
                    return Err(ScantError::pipeline_order(
                        &stiffener.label,
                        "stress",
                        "attached plate",
                    ))
                }
            };
            stiffener.check_stress(tp)?;
            stiffener.check_proportions(advisories)?;
        }
        Ok(())
    }

    /// Total mass and centre of gravity.
    ///
    /// Every panel needs a plate and every stiffener a profile.
    pub fn weight(&self) -> ScantResult<WeightSummary> {
        let mut acc = MassAccumulator::new();
        for panel in &self.panels {
            let mass = panel
                .mass_kg()
                .ok_or_else(|| ScantError::pipeline_order(&panel.label, "weight", "plate"))?;
            acc.add_panel(mass, panel.position);
        }
        for stiffener in &self.stiffeners {
            let mass = stiffener
                .mass_kg()
                .ok_or_else(|| ScantError::pipeline_order(&stiffener.label, "weight", "profile"))?;
            acc.add_stiffener(mass, stiffener.position);
        }
        Ok(acc.summary())
    }

    /// Smallest offered/required section modulus over all stiffeners
    pub fn min_section_modulus_ratio(&self) -> Option<f64> {
        self.stiffeners
            .iter()
            .filter_map(Stiffener::section_modulus_ratio)
            .reduce(f64::min)
    }

    /// Smallest offered/required web area over all stiffeners
    pub fn min_web_area_ratio(&self) -> Option<f64> {
        self.stiffeners
            .iter()
            .filter_map(Stiffener::web_area_ratio)
            .reduce(f64::min)
    }
}
