//! Member mass and centre of gravity.
//!
//! Panel mass = w·l·t·1e-9·ρ, stiffener mass = A·L·1e-9·ρ (mm and kg/m³ in,
//! kg out). The centre of gravity is the mass-weighted mean of member
//! positions along each axis.

use serde::{Deserialize, Serialize};

use crate::structure::Position;

/// mm³ per m³
const MM3_PER_M3: f64 = 1e9;

/// Plate panel mass (kg)
pub fn panel_mass_kg(width_mm: f64, length_mm: f64, thickness_mm: f64, density_kg_m3: f64) -> f64 {
    width_mm * length_mm * thickness_mm / MM3_PER_M3 * density_kg_m3
}

/// Stiffener mass from cross-section area and length (kg)
pub fn stiffener_mass_kg(area_mm2: f64, length_mm: f64, density_kg_m3: f64) -> f64 {
    area_mm2 * length_mm / MM3_PER_M3 * density_kg_m3
}

/// Total mass and centre of gravity of a set of members
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightSummary {
    pub panel_mass_kg: f64,
    pub stiffener_mass_kg: f64,
    pub total_mass_kg: f64,
    /// None when the total mass is zero
    pub centre_of_gravity: Option<Position>,
}

/// Running mass moment accumulator
#[derive(Debug, Clone, Copy, Default)]
pub struct MassAccumulator {
    panel_kg: f64,
    stiffener_kg: f64,
    moment: [f64; 3],
}

impl MassAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_panel(&mut self, mass_kg: f64, at: Position) {
        self.panel_kg += mass_kg;
        self.add_moment(mass_kg, at);
    }

    pub fn add_stiffener(&mut self, mass_kg: f64, at: Position) {
        self.stiffener_kg += mass_kg;
        self.add_moment(mass_kg, at);
    }

    fn add_moment(&mut self, mass_kg: f64, at: Position) {
        self.moment[0] += mass_kg * at.x_m;
        self.moment[1] += mass_kg * at.y_m;
        self.moment[2] += mass_kg * at.z_m;
    }

    pub fn summary(&self) -> WeightSummary {
        let total = self.panel_kg + self.stiffener_kg;
        let centre_of_gravity = if total > 0.0 {
            Some(Position::new(
                self.moment[0] / total,
                self.moment[1] / total,
                self.moment[2] / total,
            ))
        } else {
            None
        };
        WeightSummary {
            panel_mass_kg: self.panel_kg,
            stiffener_mass_kg: self.stiffener_kg,
            total_mass_kg: total,
            centre_of_gravity,
        }
    }
}
