//! Built-in aluminium library.
//!
//! Marine aluminium alloys (welded properties), stock plate thicknesses from
//! 3 to 30 mm and a small set of extruded flat bars, angles and tees. Used as
//! the default catalog for new projects and by the CLI demo.

use once_cell::sync::Lazy;

use super::material::{Material, MaterialCatalog};
use super::plate::{Plate, PlateCatalog};
use super::profile::{Profile, ProfileCatalog, ProfileGeometry, ShapeType};
use super::Catalogs;

/// The built-in catalogs, built once on first use
pub static STANDARD_CATALOGS: Lazy<Catalogs> = Lazy::new(|| Catalogs {
    materials: standard_materials(),
    plates: standard_plates(),
    profiles: standard_profiles(),
});

fn standard_materials() -> MaterialCatalog {
    // (label, σy, σu, E, G, ρ)
    let rows: [(&str, f64, f64, f64, f64, f64); 11] = [
        ("AL_5083_O", 125.0, 270.0, 70_000.0, 26_000.0, 2720.0),
        ("AL_5083_H32", 250.0, 320.0, 70_000.0, 26_000.0, 2660.0),
        ("AL_5251_O", 80.0, 180.0, 70_000.0, 26_000.0, 2690.0),
        ("AL_5251_H22", 165.0, 210.0, 70_000.0, 26_000.0, 2690.0),
        ("AL_5251_H24", 190.0, 230.0, 70_000.0, 26_000.0, 2690.0),
        ("AL_5251_H26", 215.0, 255.0, 70_000.0, 26_000.0, 2690.0),
        ("AL_6061_T6", 276.0, 310.0, 68_900.0, 26_000.0, 2700.0),
        ("AL_6082_T4", 110.0, 205.0, 70_000.0, 26_920.0, 2700.0),
        ("AL_6082_T6_<5", 250.0, 290.0, 70_000.0, 26_920.0, 2700.0),
        ("AL_6082_T6_>5", 260.0, 310.0, 70_000.0, 26_920.0, 2700.0),
        ("AL_6106_T6", 200.0, 250.0, 70_000.0, 26_920.0, 2700.0),
    ];
    MaterialCatalog::new(
        rows.iter()
            .map(|&(label, fy, fu, e, g, rho)| Material::new(label, fy, fu, e, g, rho))
            .collect(),
    )
}

fn standard_plates() -> PlateCatalog {
    let thicknesses = [3, 4, 5, 6, 8, 10, 12, 15, 18, 20, 22, 25, 30];
    PlateCatalog::new(
        thicknesses
            .iter()
            .map(|&t| Plate::new(format!("AL{}", t), f64::from(t)))
            .collect(),
    )
}

fn standard_profiles() -> ProfileCatalog {
    // (label, SM cm³, AW cm², tw, hw, tf, fw, shape)
    let rows: [(&str, f64, f64, f64, f64, f64, f64, ShapeType); 10] = [
        ("Flat Bar 40 x 5", 1.333, 2.000, 5.0, 40.0, 0.0, 0.0, ShapeType::FlatBar),
        ("Flat Bar 40 x 6", 1.600, 2.400, 6.0, 40.0, 0.0, 0.0, ShapeType::FlatBar),
        ("Flat Bar 50 x 6", 2.500, 3.000, 6.0, 50.0, 0.0, 0.0, ShapeType::FlatBar),
        ("Flat Bar 60 x 5", 6.179, 3.000, 5.0, 60.0, 0.0, 0.0, ShapeType::FlatBar),
        ("Flat Bar 80 x 6", 6.400, 4.800, 6.0, 80.0, 0.0, 0.0, ShapeType::FlatBar),
        ("Angle 50 x 50 x 6", 8.928, 3.000, 6.0, 50.0, 6.0, 50.0, ShapeType::LShape),
        ("Tee 38.1 x 38.1 x 4.76", 2.148, 1.814, 4.76, 38.1, 4.76, 38.1, ShapeType::TShape),
        ("Tee 40 x 40 x 4", 1.944, 1.600, 4.0, 40.0, 4.0, 40.0, ShapeType::TShape),
        ("Tee 50 x 50 x 4", 2.983, 2.000, 4.0, 50.0, 4.0, 50.0, ShapeType::TShape),
        ("Tee 50.8 x 50.8 x 6.3", 5.049, 3.200, 6.3, 50.8, 6.3, 50.8, ShapeType::TShape),
    ];

    let mut catalog = ProfileCatalog::new();
    for &(label, sm, aw, tw, hw, tf, fw, shape) in rows.iter() {
        let geometry = match shape {
            ShapeType::FlatBar => ProfileGeometry::flat_bar(hw, tw),
            _ => ProfileGeometry::flanged(shape, hw, tw, fw, tf),
        };
        catalog.add(Profile::extrusion(label, sm, aw, geometry));
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sizes() {
        let cats = &*STANDARD_CATALOGS;
        assert_eq!(cats.materials.len(), 11);
        assert_eq!(cats.plates.len(), 13);
        assert_eq!(cats.profiles.extrusions().len(), 10);
        assert!(cats.profiles.machined().is_empty());
    }

    #[test]
    fn test_standard_entries_valid() {
        for m in STANDARD_CATALOGS.materials.iter() {
            assert!(m.validate().is_ok(), "{} invalid", m.label);
        }
        for p in STANDARD_CATALOGS.profiles.iter() {
            assert!(p.geometry.validate().is_ok(), "{} invalid", p.label);
        }
    }

    #[test]
    fn test_plate_labels() {
        assert_eq!(STANDARD_CATALOGS.plates.lookup_thickness(5.0).unwrap().label, "AL5");
        assert_eq!(STANDARD_CATALOGS.plates.lookup("al30").unwrap().thickness_mm, 30.0);
    }
}
