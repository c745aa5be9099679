//! # Design Sweep
//!
//! Exhaustive search over stiffener count, panel material, stiffener
//! material and profile. Every grid point gets a freshly generated
//! structure and a full pipeline run; nothing carries over between points.
//!
//! A configuration is feasible when every stiffener offers at least the
//! required section modulus and web area. With no stiffeners that holds
//! trivially. Plating that fell back to the thickest plate is reported on
//! the record and in its advisories but does not decide feasibility.
//!
//! ## Example
//!
//! ```rust
//! use scant_core::catalog::Catalogs;
//! use scant_core::optimizer::{CountRange, Sweep, SweepConfig};
//! use scant_core::structure::{Location, Position, Section};
//! use scant_core::vessel::{DesignCategory, Vessel, VesselInput};
//!
//! let vessel = Vessel::new(VesselInput {
//!     lwl_m: 6.851, beam_chine_m: 2.4, mass_kg: 1800.0, deadrise_deg: 16.0,
//!     speed_kn: 12.0, superstructure_height_m: 0.0, canoe_draft_m: 0.35,
//!     freeboard_m: 0.9,
//! }).unwrap();
//! let sections = vec![
//!     Section::new("B1", 1000.0, 1000.0, Position::new(2.0, 0.0, 0.0), Location::Bottom),
//! ];
//! let cats = Catalogs::standard();
//! let config = SweepConfig {
//!     stiffener_counts: CountRange::new(0, 4),
//!     ..SweepConfig::default()
//! };
//!
//! let sweep = Sweep::new(&vessel, DesignCategory::C, &sections, &cats, &config).unwrap();
//! let outcome = sweep.run().unwrap();
//! for record in outcome.best_records() {
//!     println!("{} stiffeners: {:.1} kg", record.cell.stiffener_count, record.total_mass_kg);
//! }
//! ```

pub mod config;
pub mod sweep;

pub use config::{CountRange, MachinedProfileDef, SweepConfig};
pub use sweep::{minimum_weight, Sweep, SweepCell, SweepOutcome, SweepRecord, WEIGHT_TIE_TOLERANCE};
