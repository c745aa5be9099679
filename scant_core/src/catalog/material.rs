//! Structural material records and the material catalog.
//!
//! Values are welded-condition properties, in N/mm² (MPa) and kg/m³.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, ScantError, ScantResult};

/// Mechanical properties of one structural material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Catalog label (e.g., "AL_5083_O")
    pub label: String,
    /// Yield strength σy, welded (N/mm²)
    pub yield_mpa: f64,
    /// Ultimate tensile strength σu, welded (N/mm²)
    pub tensile_mpa: f64,
    /// Elastic modulus E (N/mm²)
    pub elastic_modulus_mpa: f64,
    /// Shear modulus G (N/mm²)
    pub shear_modulus_mpa: f64,
    /// Density ρ (kg/m³)
    pub density_kg_m3: f64,
}

impl Material {
    pub fn new(
        label: impl Into<String>,
        yield_mpa: f64,
        tensile_mpa: f64,
        elastic_modulus_mpa: f64,
        shear_modulus_mpa: f64,
        density_kg_m3: f64,
    ) -> Self {
        Material {
            label: label.into(),
            yield_mpa,
            tensile_mpa,
            elastic_modulus_mpa,
            shear_modulus_mpa,
            density_kg_m3,
        }
    }

    /// Validate that every property is physically meaningful.
    pub fn validate(&self) -> ScantResult<()> {
        if self.label.trim().is_empty() {
            return Err(ScantError::missing_field("material.label"));
        }
        require_positive("yield_mpa", self.yield_mpa)?;
        require_positive("tensile_mpa", self.tensile_mpa)?;
        require_positive("elastic_modulus_mpa", self.elastic_modulus_mpa)?;
        require_positive("shear_modulus_mpa", self.shear_modulus_mpa)?;
        require_positive("density_kg_m3", self.density_kg_m3)?;
        Ok(())
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (σy={:.0}, σu={:.0} N/mm², ρ={:.0} kg/m³)",
            self.label, self.yield_mpa, self.tensile_mpa, self.density_kg_m3
        )
    }
}

/// Ordered collection of materials, looked up by label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    pub fn new(materials: Vec<Material>) -> Self {
        MaterialCatalog { materials }
    }

    /// Look up a material by label (case-insensitive)
    pub fn lookup(&self, label: &str) -> ScantResult<&Material> {
        self.materials
            .iter()
            .find(|m| m.label.eq_ignore_ascii_case(label))
            .ok_or_else(|| ScantError::not_in_catalog("Material", label))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MaterialCatalog {
        MaterialCatalog::new(vec![
            Material::new("AL_5083_O", 125.0, 270.0, 70_000.0, 26_000.0, 2720.0),
            Material::new("AL_6061_T6", 276.0, 310.0, 68_900.0, 26_000.0, 2700.0),
        ])
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let cat = catalog();
        assert_eq!(cat.lookup("al_5083_o").unwrap().yield_mpa, 125.0);
        assert_eq!(cat.labels(), vec!["AL_5083_O", "AL_6061_T6"]);
    }

    #[test]
    fn test_lookup_missing() {
        let err = catalog().lookup("AL_7075").unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_ENTRY_NOT_FOUND");
    }

    #[test]
    fn test_validate() {
        let mut m = Material::new("X", 100.0, 200.0, 70_000.0, 26_000.0, 2700.0);
        assert!(m.validate().is_ok());
        m.density_kg_m3 = 0.0;
        assert!(m.validate().is_err());
    }
}
