//! Plate thickness records and the plate catalog.
//!
//! The catalog keeps plates sorted by ascending thickness so selection can
//! take the first plate at or above a requirement.

use serde::{Deserialize, Serialize};

use crate::errors::{ScantError, ScantResult};

/// Relative tolerance when comparing a catalog thickness to a requirement
const THICKNESS_TOLERANCE: f64 = 1e-9;

/// One stock plate thickness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    /// Catalog label (e.g., "AL5")
    pub label: String,
    /// Thickness (mm)
    pub thickness_mm: f64,
}

impl Plate {
    pub fn new(label: impl Into<String>, thickness_mm: f64) -> Self {
        Plate {
            label: label.into(),
            thickness_mm,
        }
    }
}

/// Outcome of selecting a plate for a thickness requirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateSelection {
    pub plate: Plate,
    /// True when no plate met the requirement and the thickest was used
    pub fell_back: bool,
}

/// Stock plates ordered by ascending thickness
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Plate>", into = "Vec<Plate>")]
pub struct PlateCatalog {
    plates: Vec<Plate>,
}

impl From<Vec<Plate>> for PlateCatalog {
    fn from(plates: Vec<Plate>) -> Self {
        PlateCatalog::new(plates)
    }
}

impl From<PlateCatalog> for Vec<Plate> {
    fn from(catalog: PlateCatalog) -> Self {
        catalog.plates
    }
}

impl PlateCatalog {
    /// Build a catalog; plates are sorted by thickness.
    pub fn new(mut plates: Vec<Plate>) -> Self {
        plates.sort_by(|a, b| a.thickness_mm.total_cmp(&b.thickness_mm));
        PlateCatalog { plates }
    }

    /// All available thicknesses, ascending (mm)
    pub fn thicknesses(&self) -> Vec<f64> {
        self.plates.iter().map(|p| p.thickness_mm).collect()
    }

    /// Catalog entry with exactly this thickness
    pub fn lookup_thickness(&self, thickness_mm: f64) -> Option<&Plate> {
        self.plates
            .iter()
            .find(|p| (p.thickness_mm - thickness_mm).abs() <= THICKNESS_TOLERANCE * thickness_mm.abs().max(1.0))
    }

    /// Catalog entry by label (case-insensitive)
    pub fn lookup(&self, label: &str) -> ScantResult<&Plate> {
        self.plates
            .iter()
            .find(|p| p.label.eq_ignore_ascii_case(label))
            .ok_or_else(|| ScantError::not_in_catalog("Plate", label))
    }

    /// Thinnest plate at or above `required_mm`, falling back to the thickest.
    ///
    /// # Example
    /// ```rust
    /// use scant_core::catalog::{Plate, PlateCatalog};
    ///
    /// let cat = PlateCatalog::new(vec![Plate::new("AL4", 4.0), Plate::new("AL5", 5.0)]);
    /// let sel = cat.select(4.2).unwrap();
    /// assert_eq!(sel.plate.thickness_mm, 5.0);
    /// assert!(!sel.fell_back);
    /// ```
    pub fn select(&self, required_mm: f64) -> ScantResult<PlateSelection> {
        let thickest = self.plates.last().ok_or_else(|| ScantError::EmptyCatalog {
            catalog: "Plate".to_string(),
        })?;

        let tol = THICKNESS_TOLERANCE * required_mm.abs().max(1.0);
        match self.plates.iter().find(|p| p.thickness_mm + tol >= required_mm) {
            Some(plate) => Ok(PlateSelection {
                plate: plate.clone(),
                fell_back: false,
            }),
            None => Ok(PlateSelection {
                plate: thickest.clone(),
                fell_back: true,
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plate> {
        self.plates.iter()
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }
}
