//! Stiffener profiles: fixed extrusions and geometry-derived (machined) shapes.
//!
//! Dimensions are in mm. Section modulus is reported in cm³ and areas in cm²
//! to match the units of the stiffener requirements.
//!
//! ```text
//!   Flat bar        L-shape           T-shape
//!                   ┌──────┐       ┌─────┬─────┐  ─┬─ tf
//!     ┌┐            ├┐     │       └─────┼─────┘
//!     ││ hw         ││               │ │   hw
//!     ││            ││               │ │
//!     └┘ tw         └┘ tw            └─┘ tw
//! ```
//!
//! The web height `hw` excludes the flange thickness.

use serde::{Deserialize, Serialize};

use crate::equations::section::{composite_properties, CompositeProperties, RectElement};
use crate::errors::{require_positive, ScantError, ScantResult};

/// mm³ per cm³
const MM3_PER_CM3: f64 = 1000.0;
/// mm² per cm²
const MM2_PER_CM2: f64 = 100.0;

/// Cross-section shape of a stiffener profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    #[serde(rename = "Flat Bar", alias = "FlatBar")]
    FlatBar,
    #[serde(rename = "L-shaped", alias = "LShape")]
    LShape,
    #[serde(rename = "T-shaped", alias = "TShape")]
    TShape,
}

impl ShapeType {
    pub fn has_flange(&self) -> bool {
        !matches!(self, ShapeType::FlatBar)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeType::FlatBar => "Flat Bar",
            ShapeType::LShape => "L-shaped",
            ShapeType::TShape => "T-shaped",
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Web and flange dimensions of a profile (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileGeometry {
    pub shape: ShapeType,
    /// Web height hw, excluding the flange (mm)
    pub web_height_mm: f64,
    /// Web thickness tw (mm)
    pub web_thickness_mm: f64,
    /// Flange width fw (mm), zero for flat bars
    #[serde(default)]
    pub flange_width_mm: f64,
    /// Flange thickness tf (mm), zero for flat bars
    #[serde(default)]
    pub flange_thickness_mm: f64,
}

impl ProfileGeometry {
    pub fn flat_bar(web_height_mm: f64, web_thickness_mm: f64) -> Self {
        ProfileGeometry {
            shape: ShapeType::FlatBar,
            web_height_mm,
            web_thickness_mm,
            flange_width_mm: 0.0,
            flange_thickness_mm: 0.0,
        }
    }

    pub fn flanged(
        shape: ShapeType,
        web_height_mm: f64,
        web_thickness_mm: f64,
        flange_width_mm: f64,
        flange_thickness_mm: f64,
    ) -> Self {
        ProfileGeometry {
            shape,
            web_height_mm,
            web_thickness_mm,
            flange_width_mm,
            flange_thickness_mm,
        }
    }

    pub fn validate(&self) -> ScantResult<()> {
        require_positive("web_height_mm", self.web_height_mm)?;
        require_positive("web_thickness_mm", self.web_thickness_mm)?;
        if self.shape.has_flange() {
            require_positive("flange_width_mm", self.flange_width_mm)?;
            require_positive("flange_thickness_mm", self.flange_thickness_mm)?;
            if self.flange_width_mm < self.web_thickness_mm {
                return Err(ScantError::invalid_input(
                    "flange_width_mm",
                    self.flange_width_mm.to_string(),
                    "Flange must be at least as wide as the web",
                ));
            }
        }
        Ok(())
    }

    /// Rectangles making up the profile, web heel at height `base`
    pub fn elements(&self, base: f64) -> Vec<RectElement> {
        let mut elements = vec![RectElement::stacked(
            self.web_thickness_mm,
            self.web_height_mm,
            base,
        )];
        if self.shape.has_flange() {
            elements.push(RectElement::stacked(
                self.flange_width_mm,
                self.flange_thickness_mm,
                base + self.web_height_mm,
            ));
        }
        elements
    }

    /// Section properties of the bare profile (mm units)
    pub fn properties(&self) -> Option<CompositeProperties> {
        composite_properties(&self.elements(0.0))
    }

    /// Web (shear) area hw·tw (mm²)
    pub fn web_area_mm2(&self) -> f64 {
        self.web_height_mm * self.web_thickness_mm
    }

    /// Total cross-section area (mm²)
    pub fn total_area_mm2(&self) -> f64 {
        let flange = if self.shape.has_flange() {
            self.flange_width_mm * self.flange_thickness_mm
        } else {
            0.0
        };
        self.web_area_mm2() + flange
    }

    /// Flange outstand beyond the web (mm)
    pub fn flange_projection_mm(&self) -> f64 {
        match self.shape {
            ShapeType::FlatBar => 0.0,
            ShapeType::LShape => self.flange_width_mm - self.web_thickness_mm,
            ShapeType::TShape => (self.flange_width_mm - self.web_thickness_mm) / 2.0,
        }
    }

    /// Generated label, e.g. "Machined T-shaped 40x4/40x4"
    pub fn generated_label(&self) -> String {
        if self.shape.has_flange() {
            format!(
                "Machined {} {}x{}/{}x{}",
                self.shape,
                self.web_height_mm,
                self.web_thickness_mm,
                self.flange_width_mm,
                self.flange_thickness_mm
            )
        } else {
            format!(
                "Machined {} {}x{}",
                self.shape, self.web_height_mm, self.web_thickness_mm
            )
        }
    }
}

/// Where a profile's section properties come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileSource {
    /// Manufacturer extrusion with catalog section properties
    Extrusion,
    /// User-defined shape with properties computed from its geometry
    Machined,
}

impl std::fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileSource::Extrusion => write!(f, "Extrusion"),
            ProfileSource::Machined => write!(f, "Machined"),
        }
    }
}

/// A stiffener profile with its offered section properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub label: String,
    pub source: ProfileSource,
    pub geometry: ProfileGeometry,
    /// Offered section modulus SM (cm³)
    pub section_modulus_cm3: f64,
    /// Offered web area AW (cm²)
    pub web_area_cm2: f64,
    /// Total cross-section area (cm²)
    pub area_cm2: f64,
}

impl Profile {
    /// Extrusion with catalog section modulus and web area.
    pub fn extrusion(
        label: impl Into<String>,
        section_modulus_cm3: f64,
        web_area_cm2: f64,
        geometry: ProfileGeometry,
    ) -> Self {
        Profile {
            label: label.into(),
            source: ProfileSource::Extrusion,
            geometry,
            section_modulus_cm3,
            web_area_cm2,
            area_cm2: geometry.total_area_mm2() / MM2_PER_CM2,
        }
    }

    /// Machined profile with properties derived from its geometry.
    ///
    /// # Example
    /// ```rust
    /// use scant_core::catalog::{Profile, ProfileGeometry};
    ///
    /// let fb = Profile::machined(ProfileGeometry::flat_bar(40.0, 5.0), None).unwrap();
    /// assert!((fb.section_modulus_cm3 - 1.333).abs() < 0.001);
    /// assert!((fb.web_area_cm2 - 2.0).abs() < 1e-9);
    /// assert_eq!(fb.label, "Machined Flat Bar 40x5");
    /// ```
    pub fn machined(geometry: ProfileGeometry, label: Option<String>) -> ScantResult<Self> {
        geometry.validate()?;
        let props = geometry.properties().ok_or_else(|| ScantError::Internal {
            message: "machined profile has no area".to_string(),
        })?;
        Ok(Profile {
            label: label.unwrap_or_else(|| geometry.generated_label()),
            source: ProfileSource::Machined,
            geometry,
            section_modulus_cm3: props.section_modulus() / MM3_PER_CM3,
            web_area_cm2: geometry.web_area_mm2() / MM2_PER_CM2,
            area_cm2: geometry.total_area_mm2() / MM2_PER_CM2,
        })
    }

    /// Total cross-section area (mm²)
    pub fn area_mm2(&self) -> f64 {
        self.area_cm2 * MM2_PER_CM2
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (SM={:.3} cm³, AW={:.3} cm²)",
            self.label, self.section_modulus_cm3, self.web_area_cm2
        )
    }
}

/// Extrusions and machined profiles, kept apart so sweeps can evaluate
/// each family separately
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileCatalog {
    #[serde(default)]
    extrusions: Vec<Profile>,
    #[serde(default)]
    machined: Vec<Profile>,
}

impl ProfileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile to the family matching its source
    pub fn add(&mut self, profile: Profile) {
        match profile.source {
            ProfileSource::Extrusion => self.extrusions.push(profile),
            ProfileSource::Machined => self.machined.push(profile),
        }
    }

    /// Define and add a machined profile, returning its label
    pub fn add_machined(&mut self, geometry: ProfileGeometry, label: Option<String>) -> ScantResult<String> {
        let profile = Profile::machined(geometry, label)?;
        let label = profile.label.clone();
        self.machined.push(profile);
        Ok(label)
    }

    /// Look up any profile by label (case-insensitive)
    pub fn lookup(&self, label: &str) -> ScantResult<&Profile> {
        self.iter()
            .find(|p| p.label.eq_ignore_ascii_case(label))
            .ok_or_else(|| ScantError::not_in_catalog("Profile", label))
    }

    pub fn extrusions(&self) -> &[Profile] {
        &self.extrusions
    }

    pub fn machined(&self) -> &[Profile] {
        &self.machined
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.extrusions.iter().chain(self.machined.iter())
    }

    pub fn len(&self) -> usize {
        self.extrusions.len() + self.machined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
