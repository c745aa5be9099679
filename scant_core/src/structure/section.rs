//! Structural sections: the region between two girders and two frames that
//! the topology generator subdivides into panels and stiffeners.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, ScantError, ScantResult};

/// Hull region a member belongs to.
///
/// The location decides which pressure formula applies, which minimum
/// thickness coefficients are used and along which axis a section is
/// subdivided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Bottom,
    Side,
    Deck,
    Superstructure,
    /// Bottom plating running up the side; loaded as bottom
    BottomAndSide,
    /// Superstructure top (roof); loaded as deck
    SuperstructureTop,
}

/// Pressure formula family applied to a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureZone {
    Bottom,
    Side,
    Deck,
}

/// Direction along which a section is split into panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionAxis {
    /// Across the hull (y), for bottoms, decks and roofs
    Transverse,
    /// Upwards (z), for sides, bottom & side and superstructure walls
    Vertical,
}

impl Location {
    pub const ALL: [Location; 6] = [
        Location::Bottom,
        Location::Side,
        Location::Deck,
        Location::Superstructure,
        Location::BottomAndSide,
        Location::SuperstructureTop,
    ];

    pub fn pressure_zone(&self) -> PressureZone {
        match self {
            Location::Bottom | Location::BottomAndSide => PressureZone::Bottom,
            Location::Side | Location::Superstructure => PressureZone::Side,
            Location::Deck | Location::SuperstructureTop => PressureZone::Deck,
        }
    }

    pub fn distribution_axis(&self) -> DistributionAxis {
        match self {
            Location::Side | Location::BottomAndSide | Location::Superstructure => {
                DistributionAxis::Vertical
            }
            Location::Bottom | Location::Deck | Location::SuperstructureTop => {
                DistributionAxis::Transverse
            }
        }
    }

    /// Bottom plating uses the heavier minimum thickness coefficients
    pub fn uses_bottom_minimum(&self) -> bool {
        matches!(self, Location::Bottom | Location::BottomAndSide)
    }

    /// Superstructure members measure height factors against the top of
    /// the superstructure rather than the sheer
    pub fn is_superstructure(&self) -> bool {
        matches!(self, Location::Superstructure | Location::SuperstructureTop)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Location::Bottom => "Bottom",
            Location::Side => "Side",
            Location::Deck => "Deck",
            Location::Superstructure => "Superstructure",
            Location::BottomAndSide => "Bottom & Side",
            Location::SuperstructureTop => "Superstructure Top",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Role of the stiffeners generated inside a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StiffenerType {
    #[default]
    Longitudinal,
    Frame,
    Girder,
}

impl StiffenerType {
    /// Label prefix: `L`, `FR` or `G`
    pub fn prefix(&self) -> &'static str {
        match self {
            StiffenerType::Longitudinal => "L",
            StiffenerType::Frame => "FR",
            StiffenerType::Girder => "G",
        }
    }
}

impl std::fmt::Display for StiffenerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StiffenerType::Longitudinal => write!(f, "Longitudinal"),
            StiffenerType::Frame => write!(f, "Frame"),
            StiffenerType::Girder => write!(f, "Girder"),
        }
    }
}

/// Point in hull coordinates (m).
///
/// x is measured forward from the aft end of the waterline, y to starboard
/// from the centreline and z upwards from the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x_m: f64,
    pub y_m: f64,
    pub z_m: f64,
}

impl Position {
    pub fn new(x_m: f64, y_m: f64, z_m: f64) -> Self {
        Position { x_m, y_m, z_m }
    }
}

/// A bay bounded by two girders and two frames.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B1",
///   "girder_spacing_mm": 1000.0,
///   "frame_spacing_mm": 1000.0,
///   "origin": { "x_m": 2.0, "y_m": 0.0, "z_m": 0.0 },
///   "location": "Bottom",
///   "stiffener_type": "Longitudinal"
/// }
/// ```
///
/// `origin` is the aft end of the first girder; panels extend from it along
/// the location's distribution axis and forward by one frame spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub label: String,
    /// Distance between the bounding girders (mm)
    pub girder_spacing_mm: f64,
    /// Distance between the bounding frames (mm)
    pub frame_spacing_mm: f64,
    pub origin: Position,
    pub location: Location,
    #[serde(default)]
    pub stiffener_type: StiffenerType,
}

impl Section {
    pub fn new(
        label: impl Into<String>,
        girder_spacing_mm: f64,
        frame_spacing_mm: f64,
        origin: Position,
        location: Location,
    ) -> Self {
        Section {
            label: label.into(),
            girder_spacing_mm,
            frame_spacing_mm,
            origin,
            location,
            stiffener_type: StiffenerType::Longitudinal,
        }
    }

    pub fn with_stiffener_type(mut self, stiffener_type: StiffenerType) -> Self {
        self.stiffener_type = stiffener_type;
        self
    }

    pub fn validate(&self) -> ScantResult<()> {
        if self.label.trim().is_empty() {
            return Err(ScantError::invalid_input(
                "label",
                self.label.clone(),
                "Section label must not be empty",
            ));
        }
        require_positive("girder_spacing_mm", self.girder_spacing_mm)?;
        require_positive("frame_spacing_mm", self.frame_spacing_mm)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressure_zones() {
        assert_eq!(Location::BottomAndSide.pressure_zone(), PressureZone::Bottom);
        assert_eq!(Location::Superstructure.pressure_zone(), PressureZone::Side);
        assert_eq!(Location::SuperstructureTop.pressure_zone(), PressureZone::Deck);
    }

    #[test]
    fn test_distribution_axis() {
        for loc in Location::ALL {
            let expected = matches!(
                loc,
                Location::Side | Location::BottomAndSide | Location::Superstructure
            );
            assert_eq!(loc.distribution_axis() == DistributionAxis::Vertical, expected);
        }
    }

    #[test]
    fn test_section_validation() {
        let ok = Section::new("B1", 1000.0, 1000.0, Position::default(), Location::Bottom);
        assert!(ok.validate().is_ok());

        let bad = Section::new("B1", 0.0, 1000.0, Position::default(), Location::Bottom);
        assert!(bad.validate().unwrap_err().is_validation());

        let unnamed = Section::new(" ", 1000.0, 1000.0, Position::default(), Location::Bottom);
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn test_section_json_defaults_stiffener_type() {
        let json = r#"{
            "label": "S1",
            "girder_spacing_mm": 800.0,
            "frame_spacing_mm": 1200.0,
            "origin": { "x_m": 1.0, "y_m": 1.1, "z_m": 0.3 },
            "location": "Side"
        }"#;
        let s: Section = serde_json::from_str(json).unwrap();
        assert_eq!(s.stiffener_type, StiffenerType::Longitudinal);
        assert_eq!(s.location, Location::Side);
    }
}
