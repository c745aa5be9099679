//! # Vessel Definition
//!
//! Principal dimensions and operating parameters of the craft, plus the two
//! rule inputs that are chosen per design run: the design category and the
//! craft mode.
//!
//! A [`Vessel`] is validated once and is immutable afterwards. Craft mode is
//! derived from the speed/length ratio V/√LWL (knots, metres): planing at 5 and
//! above, displacement below.
//!
//! ## Example
//!
//! ```rust
//! use scant_core::vessel::{CraftMode, Vessel, VesselInput};
//!
//! let input = VesselInput {
//!     lwl_m: 6.851,
//!     beam_chine_m: 2.4,
//!     mass_kg: 1800.0,
//!     deadrise_deg: 16.0,
//!     speed_kn: 12.0,
//!     superstructure_height_m: 0.0,
//!     canoe_draft_m: 0.35,
//!     freeboard_m: 0.9,
//! };
//!
//! let vessel = Vessel::new(input).unwrap();
//! // 12 / √6.851 ≈ 4.586 < 5
//! assert_eq!(vessel.craft_mode(), CraftMode::Displacement);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::advisories::{Advisory, AdvisoryKind, AdvisoryLog};
use crate::errors::{require_non_negative, require_positive, ScantError, ScantResult};

/// Speed/length ratio (kn/√m) at and above which a craft is treated as planing
pub const PLANING_SPEED_LENGTH_RATIO: f64 = 5.0;

/// Operating regime of the craft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CraftMode {
    /// Planing craft (code 1)
    Planing,
    /// Displacement craft (code 2)
    Displacement,
}

impl CraftMode {
    /// Numeric code used in reports: 1 = planing, 2 = displacement
    pub fn code(&self) -> u8 {
        match self {
            CraftMode::Planing => 1,
            CraftMode::Displacement => 2,
        }
    }

    /// Parse a numeric craft mode code
    pub fn from_code(code: u8) -> ScantResult<Self> {
        match code {
            1 => Ok(CraftMode::Planing),
            2 => Ok(CraftMode::Displacement),
            other => Err(ScantError::InvalidCraftMode {
                value: other.to_string(),
            }),
        }
    }

    /// Craft mode implied by a speed/length ratio
    pub fn from_speed_length_ratio(ratio: f64) -> Self {
        if ratio >= PLANING_SPEED_LENGTH_RATIO {
            CraftMode::Planing
        } else {
            CraftMode::Displacement
        }
    }
}

impl std::fmt::Display for CraftMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CraftMode::Planing => write!(f, "Planing"),
            CraftMode::Displacement => write!(f, "Displacement"),
        }
    }
}

/// Design category (intended sea and wind severity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignCategory {
    /// Ocean
    A,
    /// Offshore
    B,
    /// Inshore
    C,
    /// Sheltered waters
    D,
}

impl DesignCategory {
    pub const ALL: [DesignCategory; 4] = [
        DesignCategory::A,
        DesignCategory::B,
        DesignCategory::C,
        DesignCategory::D,
    ];

    /// Design category factor kDC
    pub fn k_dc(&self) -> f64 {
        match self {
            DesignCategory::A => 1.0,
            DesignCategory::B => 0.8,
            DesignCategory::C => 0.6,
            DesignCategory::D => 0.4,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DesignCategory::A => "A (Ocean)",
            DesignCategory::B => "B (Offshore)",
            DesignCategory::C => "C (Inshore)",
            DesignCategory::D => "D (Sheltered waters)",
        }
    }
}

impl FromStr for DesignCategory {
    type Err = ScantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(DesignCategory::A),
            "B" => Ok(DesignCategory::B),
            "C" => Ok(DesignCategory::C),
            "D" => Ok(DesignCategory::D),
            _ => Err(ScantError::InvalidDesignCategory {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for DesignCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw vessel parameters as entered by the designer.
///
/// ## JSON Example
///
/// ```json
/// {
///   "lwl_m": 6.851,
///   "beam_chine_m": 2.4,
///   "mass_kg": 1800.0,
///   "deadrise_deg": 16.0,
///   "speed_kn": 12.0,
///   "superstructure_height_m": 0.0,
///   "canoe_draft_m": 0.35,
///   "freeboard_m": 0.9
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VesselInput {
    /// Length of the design waterline LWL (m)
    pub lwl_m: f64,
    /// Beam at the chine BC (m)
    pub beam_chine_m: f64,
    /// Loaded displacement mass mLDC (kg)
    pub mass_kg: f64,
    /// Deadrise angle at 0.4·LWL from aft, β0.4 (degrees)
    pub deadrise_deg: f64,
    /// Maximum speed in calm water, loaded (knots)
    pub speed_kn: f64,
    /// Height of the superstructure above the deck (m)
    pub superstructure_height_m: f64,
    /// Canoe body draft Tc (m)
    pub canoe_draft_m: f64,
    /// Freeboard above the waterline (m)
    pub freeboard_m: f64,
}

impl VesselInput {
    /// Validate input parameters.
    pub fn validate(&self) -> ScantResult<()> {
        require_positive("lwl_m", self.lwl_m)?;
        require_positive("beam_chine_m", self.beam_chine_m)?;
        require_positive("mass_kg", self.mass_kg)?;
        require_positive("speed_kn", self.speed_kn)?;
        require_positive("canoe_draft_m", self.canoe_draft_m)?;
        require_positive("freeboard_m", self.freeboard_m)?;
        require_non_negative("deadrise_deg", self.deadrise_deg)?;
        require_non_negative("superstructure_height_m", self.superstructure_height_m)?;
        if self.deadrise_deg >= 90.0 {
            return Err(ScantError::invalid_input(
                "deadrise_deg",
                self.deadrise_deg.to_string(),
                "Deadrise must be below 90 degrees",
            ));
        }
        Ok(())
    }

    /// Speed/length ratio V/√LWL (kn/√m)
    pub fn speed_length_ratio(&self) -> f64 {
        self.speed_kn / self.lwl_m.sqrt()
    }
}

/// Validated vessel with its derived craft mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    input: VesselInput,
    craft_mode: CraftMode,
}

impl Vessel {
    /// Validate the input and derive the craft mode from V/√LWL.
    pub fn new(input: VesselInput) -> ScantResult<Self> {
        input.validate()?;
        let craft_mode = CraftMode::from_speed_length_ratio(input.speed_length_ratio());
        Ok(Vessel { input, craft_mode })
    }

    /// Validate the input, honouring an explicit craft mode when given.
    ///
    /// An override that disagrees with the speed/length ratio is kept but
    /// recorded as an info advisory.
    pub fn with_craft_mode(
        input: VesselInput,
        craft_mode_override: Option<CraftMode>,
        advisories: &mut AdvisoryLog,
    ) -> ScantResult<Self> {
        let mut vessel = Vessel::new(input)?;
        if let Some(mode) = craft_mode_override {
            if mode != vessel.craft_mode {
                let ratio = input.speed_length_ratio();
                advisories.push(Advisory::info(
                    None,
                    AdvisoryKind::CraftModeOverride {
                        speed_length_ratio: ratio,
                    },
                    format!(
                        "Craft mode forced to {} although V/sqrt(LWL) = {:.3} implies {}",
                        mode, ratio, vessel.craft_mode
                    ),
                ));
            }
            vessel.craft_mode = mode;
        }
        Ok(vessel)
    }

    pub fn input(&self) -> &VesselInput {
        &self.input
    }

    pub fn craft_mode(&self) -> CraftMode {
        self.craft_mode
    }

    pub fn lwl_m(&self) -> f64 {
        self.input.lwl_m
    }

    pub fn beam_chine_m(&self) -> f64 {
        self.input.beam_chine_m
    }

    pub fn mass_kg(&self) -> f64 {
        self.input.mass_kg
    }

    pub fn deadrise_deg(&self) -> f64 {
        self.input.deadrise_deg
    }

    pub fn speed_kn(&self) -> f64 {
        self.input.speed_kn
    }

    pub fn canoe_draft_m(&self) -> f64 {
        self.input.canoe_draft_m
    }

    pub fn freeboard_m(&self) -> f64 {
        self.input.freeboard_m
    }

    pub fn superstructure_height_m(&self) -> f64 {
        self.input.superstructure_height_m
    }
}
