//! # Member Calculations
//!
//! Checks that run on a member once its plate or profile is chosen:
//!
//! - [`stress`]: bending stress in a stiffener with its attached plating
//! - [`weight`]: panel and stiffener mass, totals and centre of gravity

pub mod stress;
pub mod weight;

pub use stress::{StiffenerStressInput, StiffenerStressResult};
pub use weight::{MassAccumulator, WeightSummary};
