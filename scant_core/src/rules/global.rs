//! Vessel-wide rule factors: design category factor kDC and dynamic load
//! factor nCG. Computed once per vessel and design category.

use serde::{Deserialize, Serialize};

use crate::advisories::{Advisory, AdvisoryKind, AdvisoryLog};
use crate::vessel::{CraftMode, DesignCategory, Vessel};

/// nCG at or below which the first formula is used directly
pub const N_CG_DIRECT_LIMIT: f64 = 3.0;
/// Upper bound for the planing dynamic load factor
pub const N_CG_MAX: f64 = 7.0;
/// Deadrise range accepted by the nCG1 formula (degrees)
pub const DEADRISE_RANGE_DEG: (f64, f64) = (10.0, 30.0);

/// Global factors shared by every member of a structure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalFactors {
    pub design_category: DesignCategory,
    pub craft_mode: CraftMode,
    /// Design category factor kDC
    pub k_dc: f64,
    /// First dynamic load candidate nCG1 (length, beam, deadrise, speed, mass)
    pub n_cg1: f64,
    /// Second dynamic load candidate nCG2 (speed, mass)
    pub n_cg2: f64,
    /// Selected dynamic load factor nCG
    pub n_cg: f64,
}

/// nCG1 = 0.32·(LWL/(10·BC) + 0.084)·(50 − β)·V²·BC²/m
///
/// β is limited to 10°–30° before use.
pub fn dynamic_load_n_cg1(vessel: &Vessel) -> f64 {
    let lwl = vessel.lwl_m();
    let bc = vessel.beam_chine_m();
    let v = vessel.speed_kn();
    let beta = vessel
        .deadrise_deg()
        .clamp(DEADRISE_RANGE_DEG.0, DEADRISE_RANGE_DEG.1);
    0.32 * (lwl / (10.0 * bc) + 0.084) * (50.0 - beta) * (v * v * bc * bc) / vessel.mass_kg()
}

/// nCG2 = 0.5·V/m^0.17
pub fn dynamic_load_n_cg2(vessel: &Vessel) -> f64 {
    0.5 * vessel.speed_kn() / vessel.mass_kg().powf(0.17)
}

/// Compute kDC and nCG for a vessel.
///
/// Planing craft use nCG1 up to 3; above that the larger of the two
/// candidates is taken and capped at 7. Displacement craft always use nCG1,
/// with an advisory when it exceeds 3.
pub fn compute_global_factors(
    vessel: &Vessel,
    category: DesignCategory,
    advisories: &mut AdvisoryLog,
) -> GlobalFactors {
    let n_cg1 = dynamic_load_n_cg1(vessel);
    let n_cg2 = dynamic_load_n_cg2(vessel);

    let n_cg = match vessel.craft_mode() {
        CraftMode::Planing => {
            if n_cg1 <= N_CG_DIRECT_LIMIT {
                n_cg1
            } else {
                let candidate = n_cg1.max(n_cg2);
                if candidate > N_CG_DIRECT_LIMIT && candidate < N_CG_MAX {
                    candidate
                } else {
                    advisories.push(Advisory::info(
                        None,
                        AdvisoryKind::LoadFactorCapped {
                            candidate,
                            capped: N_CG_MAX,
                        },
                        format!("Dynamic load factor {:.2} capped at {:.0}", candidate, N_CG_MAX),
                    ));
                    N_CG_MAX
                }
            }
        }
        CraftMode::Displacement => {
            if n_cg1 > N_CG_DIRECT_LIMIT {
                advisories.push(Advisory::warning(
                    None,
                    AdvisoryKind::DisplacementSpeedAnomaly { n_cg: n_cg1 },
                    format!(
                        "nCG = {:.2} > {:.0}: vessel may be too fast for displacement mode",
                        n_cg1, N_CG_DIRECT_LIMIT
                    ),
                ));
            }
            n_cg1
        }
    };

    log::debug!(
        "global factors: kDC={:.2} nCG1={:.3} nCG2={:.3} nCG={:.3} ({})",
        category.k_dc(),
        n_cg1,
        n_cg2,
        n_cg,
        vessel.craft_mode()
    );

    GlobalFactors {
        design_category: category,
        craft_mode: vessel.craft_mode(),
        k_dc: category.k_dc(),
        n_cg1,
        n_cg2,
        n_cg,
    }
}
