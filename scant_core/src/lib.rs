//! # scant_core - Small-Craft Scantling Engine
//!
//! `scant_core` sizes the plating and stiffeners of a small craft hull to
//! ISO 12215-5 and searches for the lightest arrangement that satisfies the
//! rules. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: the same inputs always give the same scantlings
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Advisories, not panics**: questionable inputs are reported alongside
//!   the results
//!
//! ## Quick Start
//!
//! ```rust
//! use scant_core::project::DesignProject;
//!
//! let project = DesignProject::demo();
//! let outcome = project.run_sweep().unwrap();
//! for record in outcome.best_records() {
//!     println!(
//!         "{} stiffeners, {} plating: {:.1} kg",
//!         record.cell.stiffener_count, record.cell.panel_material, record.total_mass_kg
//!     );
//! }
//! ```
//!
//! ## Modules
//!
//! - [`vessel`] - Principal dimensions, craft mode and design category
//! - [`catalog`] - Materials, stock plates and stiffener profiles
//! - [`equations`] - Beam and composite-section formulas
//! - [`rules`] - Rule factors, design pressures and required scantlings
//! - [`structure`] - Sections, topology generation, panels and stiffeners
//! - [`calculations`] - Stiffener stress and mass properties
//! - [`pipeline`] - One configuration through every stage
//! - [`optimizer`] - Minimum-weight sweep over the design space
//! - [`project`] - Project container, metadata and settings
//! - [`advisories`] - Non-fatal findings raised during a run
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves and locking

pub mod advisories;
pub mod calculations;
pub mod catalog;
pub mod equations;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_io;
pub mod optimizer;
pub mod pipeline;
pub mod project;
pub mod rules;
pub mod structure;
pub mod vessel;

// Re-export commonly used types at crate root for convenience
pub use advisories::{Advisory, AdvisoryKind, AdvisoryLog, Severity};
pub use errors::{ScantError, ScantResult};
#[cfg(not(target_arch = "wasm32"))]
pub use file_io::{load_project, save_project, save_sweep_report, FileLock};
pub use optimizer::{SweepConfig, SweepOutcome, SweepRecord};
pub use project::{DesignProject, ProjectMetadata, RuleSettings};
pub use structure::{Location, Position, Section, Structure};
pub use vessel::{CraftMode, DesignCategory, Vessel, VesselInput};
