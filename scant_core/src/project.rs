//! # Project Data Structures
//!
//! The [`DesignProject`] is the root container for a scantling study.
//! Projects serialize to `.scn` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! DesignProject
//! ├── meta: ProjectMetadata (id, version, designer, job info, timestamps)
//! ├── settings: RuleSettings (design category, craft mode override)
//! ├── vessel: VesselInput
//! ├── sections: Vec<Section>
//! ├── sweep: SweepConfig
//! └── catalogs: Catalogs (materials, plates, profiles)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use scant_core::project::DesignProject;
//!
//! let project = DesignProject::demo();
//! let outcome = project.run_sweep().unwrap();
//! assert!(!outcome.records.is_empty());
//!
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("\"sections\""));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::advisories::AdvisoryLog;
use crate::catalog::{Catalogs, ProfileGeometry};
use crate::errors::{ScantError, ScantResult};
use crate::optimizer::{CountRange, MachinedProfileDef, Sweep, SweepConfig, SweepOutcome};
use crate::structure::{Location, Position, Section, StructureReport};
use crate::vessel::{CraftMode, DesignCategory, Vessel, VesselInput};

/// Current schema version for .scn files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container, serialized to `.scn` files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignProject {
    pub meta: ProjectMetadata,
    pub settings: RuleSettings,
    pub vessel: VesselInput,
    /// Hull sections, in generation order
    pub sections: Vec<Section>,
    pub sweep: SweepConfig,
    /// Reference data; the built-in library when absent from the file
    #[serde(default = "Catalogs::standard")]
    pub catalogs: Catalogs,
}

impl DesignProject {
    /// Create a project with no sections, the default sweep and the
    /// built-in catalogs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use scant_core::project::DesignProject;
    /// use scant_core::vessel::VesselInput;
    ///
    /// let vessel = VesselInput {
    ///     lwl_m: 6.851, beam_chine_m: 2.4, mass_kg: 1800.0, deadrise_deg: 16.0,
    ///     speed_kn: 12.0, superstructure_height_m: 0.0, canoe_draft_m: 0.35,
    ///     freeboard_m: 0.9,
    /// };
    /// let project = DesignProject::new("J. Designer", "26-014", "Workboat 7", vessel);
    /// assert_eq!(project.meta.vessel_name, "Workboat 7");
    /// assert!(project.sections.is_empty());
    /// ```
    pub fn new(
        designer: impl Into<String>,
        job_id: impl Into<String>,
        vessel_name: impl Into<String>,
        vessel: VesselInput,
    ) -> Self {
        let now = Utc::now();
        DesignProject {
            meta: ProjectMetadata {
                id: Uuid::new_v4(),
                version: SCHEMA_VERSION.to_string(),
                designer: designer.into(),
                job_id: job_id.into(),
                vessel_name: vessel_name.into(),
                created: now,
                modified: now,
            },
            settings: RuleSettings::default(),
            vessel,
            sections: Vec::new(),
            sweep: SweepConfig::default(),
            catalogs: Catalogs::standard(),
        }
    }

    /// Add a section; its label must be new to the project.
    pub fn add_section(&mut self, section: Section) -> ScantResult<()> {
        section.validate()?;
        if self.sections.iter().any(|s| s.label == section.label) {
            return Err(ScantError::invalid_input(
                "label",
                section.label,
                "Section label already used in this project",
            ));
        }
        self.sections.push(section);
        self.touch();
        Ok(())
    }

    /// Remove a section by label, returning it if present.
    pub fn remove_section(&mut self, label: &str) -> Option<Section> {
        let index = self.sections.iter().position(|s| s.label == label)?;
        self.touch();
        Some(self.sections.remove(index))
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Validated vessel with the craft mode override applied
    pub fn build_vessel(&self, advisories: &mut AdvisoryLog) -> ScantResult<Vessel> {
        Vessel::with_craft_mode(self.vessel, self.settings.craft_mode_override, advisories)
    }

    /// Run the configured sweep.
    ///
    /// Vessel advisories (such as a craft mode override) lead the outcome's
    /// advisory log.
    pub fn run_sweep(&self) -> ScantResult<SweepOutcome> {
        let mut advisories = AdvisoryLog::new();
        let vessel = self.build_vessel(&mut advisories)?;
        let sweep = Sweep::new(
            &vessel,
            self.settings.design_category,
            &self.sections,
            &self.catalogs,
            &self.sweep,
        )?;
        let mut outcome = sweep.run()?;
        advisories.extend(outcome.advisories);
        outcome.advisories = advisories;
        Ok(outcome)
    }

    /// Rebuild the structure of record `index` and report on every member.
    pub fn structure_report(&self, outcome: &SweepOutcome, index: usize) -> ScantResult<StructureReport> {
        let record = outcome.records.get(index).ok_or_else(|| {
            ScantError::invalid_input("index", index.to_string(), "No such sweep record")
        })?;
        let vessel = self.build_vessel(&mut AdvisoryLog::new())?;
        let sweep = Sweep::new(
            &vessel,
            self.settings.design_category,
            &self.sections,
            &self.catalogs,
            &self.sweep,
        )?;
        let (structure, pipeline) = sweep.evaluate(&record.cell)?;
        let mut advisories = outcome.advisories.clone();
        advisories.extend(pipeline.advisories);
        Ok(structure.report(&advisories))
    }

    /// A 7 m aluminium planing workboat with bottom, side, deck and
    /// superstructure sections.
    pub fn demo() -> Self {
        let vessel = VesselInput {
            lwl_m: 6.851,
            beam_chine_m: 2.4,
            mass_kg: 1800.0,
            deadrise_deg: 16.0,
            speed_kn: 25.0,
            superstructure_height_m: 1.2,
            canoe_draft_m: 0.35,
            freeboard_m: 0.9,
        };
        let mut project = DesignProject::new("Demo Designer", "DEMO-001", "Workboat 7", vessel);
        project.sections = vec![
            Section::new("B1", 1000.0, 1000.0, Position::new(2.0, 0.0, 0.0), Location::Bottom),
            Section::new("B2", 900.0, 1000.0, Position::new(3.0, 0.0, 0.0), Location::Bottom),
            Section::new("S1", 600.0, 1000.0, Position::new(2.0, 1.2, 0.3), Location::Side),
            Section::new("D1", 800.0, 1000.0, Position::new(2.0, 0.4, 0.9), Location::Deck),
            Section::new("H1", 500.0, 1000.0, Position::new(3.0, 0.9, 0.95), Location::Superstructure),
            Section::new("T1", 800.0, 1000.0, Position::new(3.0, 0.2, 2.1), Location::SuperstructureTop),
        ];
        project.sweep = SweepConfig {
            stiffener_counts: CountRange::new(0, 6),
            panel_materials: vec!["AL_5083_O".to_string(), "AL_5083_H32".to_string()],
            stiffener_materials: vec!["AL_6061_T6".to_string()],
            extrusions: Vec::new(),
            machined: vec![MachinedProfileDef {
                label: None,
                geometry: ProfileGeometry::flat_bar(60.0, 6.0),
            }],
        };
        project
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Stable identity across renames and copies
    pub id: Uuid,
    /// Schema version (for migration compatibility)
    pub version: String,
    pub designer: String,
    pub job_id: String,
    pub vessel_name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Rule choices applied to every run of the project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleSettings {
    pub design_category: DesignCategory,
    /// Force planing or displacement regardless of V/√LWL
    #[serde(default)]
    pub craft_mode_override: Option<CraftMode>,
}

impl Default for RuleSettings {
    fn default() -> Self {
        RuleSettings {
            design_category: DesignCategory::C,
            craft_mode_override: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisories::AdvisoryKind;
    use crate::vessel::tests::test_input;

    #[test]
    fn test_project_creation() {
        let project = DesignProject::new("Jane Designer", "26-001", "Tender", test_input());
        assert_eq!(project.meta.designer, "Jane Designer");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.settings.design_category, DesignCategory::C);
        assert!(!project.catalogs.materials.is_empty());
    }

    #[test]
    fn test_project_serialization() {
        let project = DesignProject::demo();
        let json = serde_json::to_string_pretty(&project).unwrap();
        assert!(json.contains("Workboat 7"));
        assert!(json.contains("SuperstructureTop"));
        let roundtrip: DesignProject = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta, project.meta);
        assert_eq!(roundtrip.sections, project.sections);
        assert_eq!(roundtrip.sweep, project.sweep);
        assert_eq!(roundtrip.catalogs.profiles.len(), project.catalogs.profiles.len());
    }

    #[test]
    fn test_catalogs_default_when_missing() {
        let project = DesignProject::demo();
        let mut value = serde_json::to_value(&project).unwrap();
        value.as_object_mut().unwrap().remove("catalogs");
        let loaded: DesignProject = serde_json::from_value(value).unwrap();
        assert_eq!(loaded.catalogs, Catalogs::standard());
    }

    #[test]
    fn test_add_remove_section() {
        let mut project = DesignProject::new("D", "J", "V", test_input());
        let section = Section::new("B1", 1000.0, 1000.0, Position::default(), Location::Bottom);
        project.add_section(section.clone()).unwrap();
        assert!(project.add_section(section).unwrap_err().is_validation());
        assert!(project.remove_section("B1").is_some());
        assert!(project.remove_section("B1").is_none());
    }

    #[test]
    fn test_craft_mode_override_advisory() {
        let mut project = DesignProject::new("D", "J", "V", test_input());
        project.settings.craft_mode_override = Some(CraftMode::Planing);
        project
            .add_section(Section::new("B1", 1000.0, 1000.0, Position::new(2.0, 0.0, 0.0), Location::Bottom))
            .unwrap();
        project.sweep.stiffener_counts = CountRange::new(0, 0);

        let outcome = project.run_sweep().unwrap();
        assert!(matches!(
            outcome.advisories.entries()[0].kind,
            AdvisoryKind::CraftModeOverride { .. }
        ));
        assert_eq!(outcome.records.len(), 1);
    }

    #[test]
    fn test_structure_report_for_best() {
        let project = DesignProject::demo();
        let outcome = project.run_sweep().unwrap();
        let index = outcome.best.first().copied().unwrap_or(0);
        let report = project.structure_report(&outcome, index).unwrap();
        let n = outcome.records[index].cell.stiffener_count;
        assert_eq!(report.panels().count(), project.sections.len() * (n + 1));
        assert_eq!(report.stiffeners().count(), project.sections.len() * n);
        let mass = report.weight.unwrap().total_mass_kg;
        assert!((mass - outcome.records[index].total_mass_kg).abs() < 1e-9);
    }

    #[test]
    fn test_structure_report_bad_index() {
        let project = DesignProject::demo();
        let outcome = project.run_sweep().unwrap();
        let err = project.structure_report(&outcome, outcome.records.len()).unwrap_err();
        assert!(err.is_validation());
    }
}
