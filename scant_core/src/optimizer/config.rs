//! Sweep grid definition.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalogs, Profile, ProfileGeometry, ProfileSource};
use crate::errors::{ScantError, ScantResult};

/// Inclusive range of stiffener counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub fn new(min: usize, max: usize) -> Self {
        CountRange { min, max }
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<usize> {
        self.min..=self.max
    }
}

/// A machined profile to add to the sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachinedProfileDef {
    #[serde(default)]
    pub label: Option<String>,
    pub geometry: ProfileGeometry,
}

/// The design space to search.
///
/// ## JSON Example
///
/// ```json
/// {
///   "stiffener_counts": { "min": 0, "max": 6 },
///   "panel_materials": ["AL_5083_O", "AL_5083_H32"],
///   "stiffener_materials": ["AL_6061_T6"],
///   "extrusions": [],
///   "machined": [
///     { "geometry": { "shape": "Flat Bar", "web_height_mm": 60.0, "web_thickness_mm": 6.0 } }
///   ]
/// }
/// ```
///
/// An empty `extrusions` list means every extrusion in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub stiffener_counts: CountRange,
    pub panel_materials: Vec<String>,
    pub stiffener_materials: Vec<String>,
    #[serde(default)]
    pub extrusions: Vec<String>,
    #[serde(default)]
    pub machined: Vec<MachinedProfileDef>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            stiffener_counts: CountRange::new(0, 6),
            panel_materials: vec!["AL_5083_O".to_string()],
            stiffener_materials: vec!["AL_5083_O".to_string()],
            extrusions: Vec::new(),
            machined: Vec::new(),
        }
    }
}

impl SweepConfig {
    /// Check the grid against the catalogs it will draw from.
    pub fn validate(&self, catalogs: &Catalogs) -> ScantResult<()> {
        if self.stiffener_counts.min > self.stiffener_counts.max {
            return Err(ScantError::invalid_input(
                "stiffener_counts",
                format!("{}..={}", self.stiffener_counts.min, self.stiffener_counts.max),
                "Minimum stiffener count exceeds maximum",
            ));
        }
        if self.panel_materials.is_empty() {
            return Err(ScantError::missing_field("panel_materials"));
        }
        if self.stiffener_counts.max > 0 && self.stiffener_materials.is_empty() {
            return Err(ScantError::missing_field("stiffener_materials"));
        }
        for label in self.panel_materials.iter().chain(&self.stiffener_materials) {
            catalogs.materials.lookup(label)?;
        }
        for label in &self.extrusions {
            let profile = catalogs.profiles.lookup(label)?;
            if profile.source != ProfileSource::Extrusion {
                return Err(ScantError::invalid_input(
                    "extrusions",
                    label.clone(),
                    "Profile is not an extrusion",
                ));
            }
        }
        for def in &self.machined {
            def.geometry.validate()?;
        }
        Ok(())
    }

    /// Profiles the sweep will try, extrusions first.
    ///
    /// Machined profiles from the catalog come before those defined here.
    /// Cells name their profile by label, so labels must be unique
    /// (ignoring case).
    pub fn candidate_profiles(&self, catalogs: &Catalogs) -> ScantResult<Vec<Profile>> {
        let mut out: Vec<Profile> = if self.extrusions.is_empty() {
            catalogs.profiles.extrusions().to_vec()
        } else {
            self.extrusions
                .iter()
                .map(|label| catalogs.profiles.lookup(label).cloned())
                .collect::<ScantResult<_>>()?
        };
        out.extend(catalogs.profiles.machined().iter().cloned());
        for def in &self.machined {
            out.push(Profile::machined(def.geometry, def.label.clone())?);
        }
        for (i, profile) in out.iter().enumerate() {
            if out[..i].iter().any(|p| p.label.eq_ignore_ascii_case(&profile.label)) {
                return Err(ScantError::invalid_input(
                    "machined",
                    profile.label.clone(),
                    "Profile label already used by another candidate",
                ));
            }
        }
        if self.stiffener_counts.max > 0 && out.is_empty() {
            return Err(ScantError::EmptyCatalog {
                catalog: "Profile".to_string(),
            });
        }
        Ok(out)
    }
}
