//! # Scantling Rules (ISO 12215-5)
//!
//! Rule formulas for small-craft hull structure, split by stage:
//!
//! - [`global`]: design category factor kDC and dynamic load factor nCG
//! - [`factors`]: member factors kL, kAR (with kR) and kZ
//! - [`pressure`]: bottom, side and deck design pressures
//! - [`plating`]: panel coefficients, required and minimum thickness
//! - [`stiffening`]: stiffener web area and section modulus
//! - [`proportions`]: web and flange slenderness limits
//!
//! Functions here are pure: they take the vessel, the factors computed by
//! the previous stage and the member's geometry, and return a value record.
//! Sequencing and storage on members is handled by
//! [`Structure`](crate::structure::Structure).
//!
//! ## Units
//!
//! | Quantity | Unit |
//! |----------|------|
//! | Pressure | kN/m² |
//! | Stress | N/mm² |
//! | Member dimensions | mm |
//! | Positions, vessel dimensions | m |
//! | Section modulus | cm³ |
//! | Web area | cm² |

pub mod factors;
pub mod global;
pub mod plating;
pub mod pressure;
pub mod proportions;
pub mod stiffening;

pub use factors::{LoadedArea, PressureFactors};
pub use global::{compute_global_factors, GlobalFactors};
pub use plating::PanelRequirement;
pub use pressure::{design_pressure, DesignPressure};
pub use proportions::ProportionCheck;
pub use stiffening::StiffenerRequirement;
