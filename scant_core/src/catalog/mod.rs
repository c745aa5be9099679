//! # Reference Catalogs
//!
//! Read-only reference data consumed by the engine: structural materials,
//! stock plate thicknesses and stiffener profiles.
//!
//! ## Catalog Types
//!
//! - **Materials**: yield/tensile strength, moduli and density per alloy
//! - **Plates**: stock thicknesses, sorted so the thinnest sufficient plate
//!   can be selected
//! - **Profiles**: extrusions with catalog properties and machined shapes
//!   with properties derived from geometry
//!
//! ## Example
//!
//! ```rust
//! use scant_core::catalog::Catalogs;
//!
//! let cats = Catalogs::standard();
//! let plate = cats.plates.select(4.2).unwrap();
//! assert_eq!(plate.plate.label, "AL5");
//! let alloy = cats.materials.lookup("AL_5083_O").unwrap();
//! assert_eq!(alloy.yield_mpa, 125.0);
//! ```

pub mod library;
pub mod material;
pub mod plate;
pub mod profile;

pub use library::STANDARD_CATALOGS;
pub use material::{Material, MaterialCatalog};
pub use plate::{Plate, PlateCatalog, PlateSelection};
pub use profile::{Profile, ProfileCatalog, ProfileGeometry, ProfileSource, ShapeType};

use serde::{Deserialize, Serialize};

use crate::errors::{ScantError, ScantResult};

/// The three reference catalogs a design run reads from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalogs {
    pub materials: MaterialCatalog,
    pub plates: PlateCatalog,
    pub profiles: ProfileCatalog,
}

impl Catalogs {
    /// A copy of the built-in aluminium library
    pub fn standard() -> Self {
        STANDARD_CATALOGS.clone()
    }

    /// Check that every catalog a sweep needs has entries and that the
    /// materials are physically meaningful.
    pub fn validate(&self) -> ScantResult<()> {
        if self.materials.is_empty() {
            return Err(ScantError::EmptyCatalog {
                catalog: "Material".to_string(),
            });
        }
        if self.plates.is_empty() {
            return Err(ScantError::EmptyCatalog {
                catalog: "Plate".to_string(),
            });
        }
        for material in self.materials.iter() {
            material.validate()?;
        }
        for plate in self.plates.iter() {
            crate::errors::require_positive("thickness_mm", plate.thickness_mm)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_validates() {
        assert!(Catalogs::standard().validate().is_ok());
    }

    #[test]
    fn test_empty_catalogs_rejected() {
        let err = Catalogs::default().validate().unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_CATALOG");
    }

    #[test]
    fn test_catalogs_serialization() {
        let cats = Catalogs::standard();
        let json = serde_json::to_string(&cats).unwrap();
        let parsed: Catalogs = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.materials.labels(), cats.materials.labels());
        assert_eq!(parsed.plates.thicknesses(), cats.plates.thicknesses());
        assert_eq!(parsed.profiles.len(), cats.profiles.len());
    }
}
