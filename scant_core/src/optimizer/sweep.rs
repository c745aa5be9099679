//! Grid evaluation and minimum-weight search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::SweepConfig;
use crate::advisories::AdvisoryLog;
use crate::catalog::{Catalogs, Profile, ProfileSource};
use crate::errors::{ScantError, ScantResult};
use crate::pipeline::{self, DesignChoice, PipelineOutcome};
use crate::rules::{compute_global_factors, GlobalFactors};
use crate::structure::{Position, Section, Structure};
use crate::vessel::{DesignCategory, Vessel};

/// Relative tolerance under which two masses count as a tie
pub const WEIGHT_TIE_TOLERANCE: f64 = 1e-9;

/// One grid point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepCell {
    pub stiffener_count: usize,
    pub panel_material: String,
    /// None when `stiffener_count` is zero
    pub stiffener_material: Option<String>,
    pub profile: Option<String>,
}

/// Result of evaluating one grid point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRecord {
    pub index: usize,
    pub cell: SweepCell,
    pub profile_source: Option<ProfileSource>,

    // === Weight ===
    pub total_mass_kg: f64,
    pub panel_mass_kg: f64,
    pub stiffener_mass_kg: f64,
    pub centre_of_gravity: Option<Position>,

    // === Adequacy ===
    pub min_section_modulus_ratio: Option<f64>,
    pub min_web_area_ratio: Option<f64>,
    pub plate_fallback: bool,
    pub feasible: bool,

    pub advisories: AdvisoryLog,
}

/// Every record of a sweep with the minimum-weight picks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepOutcome {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub global: GlobalFactors,
    /// Vessel-level advisories, raised once per sweep
    pub advisories: AdvisoryLog,
    pub records: Vec<SweepRecord>,
    /// Lightest feasible records over the whole grid; several on a tie
    pub best: Vec<usize>,
    /// Lightest feasible records using an extrusion
    pub best_extrusion: Vec<usize>,
    /// Lightest feasible records using a machined profile
    pub best_machined: Vec<usize>,
}

impl SweepOutcome {
    pub fn best_records(&self) -> impl Iterator<Item = &SweepRecord> {
        self.best.iter().filter_map(|&i| self.records.get(i))
    }

    pub fn feasible_count(&self) -> usize {
        self.records.iter().filter(|r| r.feasible).count()
    }

    pub fn has_feasible(&self) -> bool {
        !self.best.is_empty()
    }
}

/// Indices of the lightest feasible records accepted by `accept`
pub fn minimum_weight<F>(records: &[SweepRecord], accept: F) -> Vec<usize>
where
    F: Fn(&SweepRecord) -> bool,
{
    let candidates: Vec<&SweepRecord> = records.iter().filter(|r| r.feasible && accept(*r)).collect();
    let Some(lightest) = candidates.iter().map(|r| r.total_mass_kg).reduce(f64::min) else {
        return Vec::new();
    };
    let tolerance = WEIGHT_TIE_TOLERANCE * lightest.abs().max(1.0);
    candidates
        .iter()
        .filter(|r| r.total_mass_kg - lightest <= tolerance)
        .map(|r| r.index)
        .collect()
}

/// Evaluates a [`SweepConfig`] grid against one vessel and section set.
pub struct Sweep<'a> {
    vessel: &'a Vessel,
    sections: &'a [Section],
    catalogs: &'a Catalogs,
    config: &'a SweepConfig,
    global: GlobalFactors,
    global_advisories: AdvisoryLog,
    profiles: Vec<Profile>,
}

impl<'a> Sweep<'a> {
    /// Validate the inputs and compute the vessel-wide factors once.
    pub fn new(
        vessel: &'a Vessel,
        category: DesignCategory,
        sections: &'a [Section],
        catalogs: &'a Catalogs,
        config: &'a SweepConfig,
    ) -> ScantResult<Self> {
        if sections.is_empty() {
            return Err(ScantError::missing_field("sections"));
        }
        catalogs.validate()?;
        config.validate(catalogs)?;
        let profiles = config.candidate_profiles(catalogs)?;

        let mut global_advisories = AdvisoryLog::new();
        let global = compute_global_factors(vessel, category, &mut global_advisories);

        Ok(Sweep {
            vessel,
            sections,
            catalogs,
            config,
            global,
            global_advisories,
            profiles,
        })
    }

    pub fn global_factors(&self) -> &GlobalFactors {
        &self.global
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Grid points in evaluation order: count, panel material, stiffener
    /// material, profile. A zero count varies the panel material only.
    pub fn cells(&self) -> Vec<SweepCell> {
        let mut cells = Vec::new();
        for count in self.config.stiffener_counts.iter() {
            for panel_material in &self.config.panel_materials {
                if count == 0 {
                    cells.push(SweepCell {
                        stiffener_count: 0,
                        panel_material: panel_material.clone(),
                        stiffener_material: None,
                        profile: None,
                    });
                    continue;
                }
                for stiffener_material in &self.config.stiffener_materials {
                    for profile in &self.profiles {
                        cells.push(SweepCell {
                            stiffener_count: count,
                            panel_material: panel_material.clone(),
                            stiffener_material: Some(stiffener_material.clone()),
                            profile: Some(profile.label.clone()),
                        });
                    }
                }
            }
        }
        cells
    }

    fn profile(&self, label: &str) -> ScantResult<&Profile> {
        self.profiles
            .iter()
            .find(|p| p.label == label)
            .ok_or_else(|| ScantError::not_in_catalog("Profile", label))
    }

    /// Build a fresh structure for `cell` and run the pipeline on it.
    ///
    /// Returns the evaluated structure so callers can report on a chosen
    /// configuration.
    pub fn evaluate(&self, cell: &SweepCell) -> ScantResult<(Structure, PipelineOutcome)> {
        let panel_material = self.catalogs.materials.lookup(&cell.panel_material)?;
        let stiffener_material = match &cell.stiffener_material {
            Some(label) => self.catalogs.materials.lookup(label)?,
            None => panel_material,
        };
        let profile = cell.profile.as_deref().map(|l| self.profile(l)).transpose()?;

        let mut structure = Structure::with_sections(self.sections)?;
        structure.generate_all(cell.stiffener_count)?;

        let choice = DesignChoice {
            panel_material,
            stiffener_material,
            profile,
        };
        let outcome = pipeline::run(
            &mut structure,
            self.vessel,
            &self.global,
            &choice,
            &self.catalogs.plates,
        )?;
        Ok((structure, outcome))
    }

    fn record(&self, index: usize, cell: SweepCell, outcome: PipelineOutcome) -> ScantResult<SweepRecord> {
        let profile_source = cell
            .profile
            .as_deref()
            .map(|l| self.profile(l).map(|p| p.source))
            .transpose()?;
        let feasible = outcome.min_section_modulus_ratio.map_or(true, |r| r >= 1.0)
            && outcome.min_web_area_ratio.map_or(true, |r| r >= 1.0);

        Ok(SweepRecord {
            index,
            cell,
            profile_source,
            total_mass_kg: outcome.weight.total_mass_kg,
            panel_mass_kg: outcome.weight.panel_mass_kg,
            stiffener_mass_kg: outcome.weight.stiffener_mass_kg,
            centre_of_gravity: outcome.weight.centre_of_gravity,
            min_section_modulus_ratio: outcome.min_section_modulus_ratio,
            min_web_area_ratio: outcome.min_web_area_ratio,
            plate_fallback: outcome.plate_fallback,
            feasible,
            advisories: outcome.advisories,
        })
    }

    /// Evaluate every grid point and pick the lightest feasible ones.
    pub fn run(&self) -> ScantResult<SweepOutcome> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let cells = self.cells();
        log::info!(
            "sweep {}: {} configurations over {} sections",
            run_id,
            cells.len(),
            self.sections.len()
        );

        let mut records = Vec::with_capacity(cells.len());
        for (index, cell) in cells.into_iter().enumerate() {
            let (_, outcome) = self.evaluate(&cell)?;
            let record = self.record(index, cell, outcome)?;
            log::debug!(
                "cell {} n={} {} / {:?} / {:?}: {:.2} kg, feasible={}",
                index,
                record.cell.stiffener_count,
                record.cell.panel_material,
                record.cell.stiffener_material,
                record.cell.profile,
                record.total_mass_kg,
                record.feasible
            );
            records.push(record);
        }

        let best = minimum_weight(&records, |_| true);
        let best_extrusion = minimum_weight(&records, |r| r.profile_source == Some(ProfileSource::Extrusion));
        let best_machined = minimum_weight(&records, |r| r.profile_source == Some(ProfileSource::Machined));

        match best.first().and_then(|&i| records.get(i)) {
            Some(r) => log::info!(
                "sweep {}: lightest feasible {:.2} kg at n={} ({} tied)",
                run_id,
                r.total_mass_kg,
                r.cell.stiffener_count,
                best.len()
            ),
            None => log::warn!("sweep {}: no feasible configuration", run_id),
        }

        Ok(SweepOutcome {
            run_id,
            started_at,
            finished_at: Utc::now(),
            global: self.global,
            advisories: self.global_advisories.clone(),
            records,
            best,
            best_extrusion,
            best_machined,
        })
    }
}
