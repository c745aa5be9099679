//! # Structural Mechanics Equations
//!
//! Fundamental mechanics formulas shared by the rule engine and the stress
//! checker. Rule-specific empirical formulas live in [`crate::rules`]; this
//! module only holds textbook relations.
//!
//! ## Modules
//!
//! - [`beam`] - Uniformly loaded beam formulas (moment, shear)
//! - [`section`] - Cross-section properties (A, I, S) and composite sections
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive toward the hull interior (pressure on the shell)
//! - **Heights**: Positive away from the plating into the stiffener
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - ISO 12215-5:2019 Small craft - Hull construction and scantlings

pub mod beam;
pub mod section;

// Re-export commonly used items
pub use beam::{
    fixed_fixed_uniform_end_moment,
    simply_supported_uniform_moment,
    uniform_load_end_shear,
};

pub use section::{
    composite_properties,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_section_modulus,
    CompositeProperties,
    RectElement,
};
