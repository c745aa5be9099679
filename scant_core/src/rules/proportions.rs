//! Stiffener web and flange slenderness limits.
//!
//! Violations are advisory only: a stiffener that fails a proportion check
//! is still considered for the sweep.

use serde::{Deserialize, Serialize};

use crate::advisories::{Advisory, AdvisoryKind, ProportionRatio};
use crate::catalog::{Material, Profile, ShapeType};

/// Flat bar web and flange outstand coefficient
pub const FLAT_BAR_COEFFICIENT: f64 = 0.37;
/// Web coefficient for L- and T-sections
pub const FLANGED_WEB_COEFFICIENT: f64 = 1.1;
/// Fraction of σd below which the web limit may be relaxed
pub const STRESS_RELAXATION_RATIO: f64 = 0.8;

/// Outcome of the proportion checks for one stiffener
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProportionCheck {
    /// hw/tw
    pub web_ratio: f64,
    /// Allowed hw/tw after any relaxation
    pub web_limit: f64,
    /// True when low stress allowed the web limit to grow
    pub web_limit_relaxed: bool,
    /// Flange projection over flange thickness, flanged shapes only
    pub flange_ratio: Option<f64>,
    pub flange_limit: Option<f64>,
}

impl ProportionCheck {
    /// Run the web and flange checks.
    ///
    /// When `actual_stress_mpa` is below 0.8·σd the web limit is multiplied
    /// by √(AW offered / AW required).
    pub fn compute(
        profile: &Profile,
        material: &Material,
        actual_stress_mpa: f64,
        design_stress_mpa: f64,
        required_web_area_cm2: f64,
    ) -> Self {
        let g = &profile.geometry;
        let slenderness = (material.elastic_modulus_mpa / material.yield_mpa).sqrt();

        let base_web_limit = match g.shape {
            ShapeType::FlatBar => FLAT_BAR_COEFFICIENT * slenderness,
            ShapeType::LShape | ShapeType::TShape => FLANGED_WEB_COEFFICIENT * slenderness,
        };

        let relax = actual_stress_mpa < STRESS_RELAXATION_RATIO * design_stress_mpa
            && required_web_area_cm2 > 0.0
            && profile.web_area_cm2 > required_web_area_cm2;
        let web_limit = if relax {
            base_web_limit * (profile.web_area_cm2 / required_web_area_cm2).sqrt()
        } else {
            base_web_limit
        };

        let (flange_ratio, flange_limit) = if g.shape.has_flange() {
            (
                Some(g.flange_projection_mm() / g.flange_thickness_mm),
                Some(FLAT_BAR_COEFFICIENT * slenderness),
            )
        } else {
            (None, None)
        };

        ProportionCheck {
            web_ratio: g.web_height_mm / g.web_thickness_mm,
            web_limit,
            web_limit_relaxed: relax,
            flange_ratio,
            flange_limit,
        }
    }

    pub fn web_ok(&self) -> bool {
        self.web_ratio <= self.web_limit
    }

    pub fn flange_ok(&self) -> bool {
        match (self.flange_ratio, self.flange_limit) {
            (Some(ratio), Some(limit)) => ratio <= limit,
            _ => true,
        }
    }

    pub fn passes(&self) -> bool {
        self.web_ok() && self.flange_ok()
    }

    /// One warning per violated ratio
    pub fn advisories(&self, member: &str) -> Vec<Advisory> {
        let mut out = Vec::new();
        if !self.web_ok() {
            out.push(violation(member, ProportionRatio::WebHeight, self.web_ratio, self.web_limit));
        }
        if let (Some(ratio), Some(limit)) = (self.flange_ratio, self.flange_limit) {
            if ratio > limit {
                out.push(violation(member, ProportionRatio::FlangeProjection, ratio, limit));
            }
        }
        out
    }
}

fn violation(member: &str, ratio: ProportionRatio, actual: f64, limit: f64) -> Advisory {
    Advisory::warning(
        Some(member.to_string()),
        AdvisoryKind::ProportionExceeded { ratio, actual, limit },
        format!("{} ratio {:.2} exceeds limit {:.2}", ratio, actual, limit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;

    fn setup(profile: &str) -> (Profile, Material) {
        let cats = Catalogs::standard();
        (
            cats.profiles.lookup(profile).unwrap().clone(),
            cats.materials.lookup("AL_5083_O").unwrap().clone(),
        )
    }

    #[test]
    fn test_flat_bar_within_limit() {
        // √(70000/125) = 23.66, limit 8.75; 40/5 = 8
        let (p, m) = setup("Flat Bar 40 x 5");
        let check = ProportionCheck::compute(&p, &m, 80.0, 87.5, 1.0);
        assert!((check.web_limit - 0.37 * 560f64.sqrt()).abs() < 1e-12);
        assert!(check.passes());
        assert!(check.flange_ratio.is_none());
        assert!(check.advisories("L1").is_empty());
    }

    #[test]
    fn test_flat_bar_violation() {
        // 80/6 = 13.3 > 8.75 at full stress
        let (p, m) = setup("Flat Bar 80 x 6");
        let check = ProportionCheck::compute(&p, &m, 86.0, 87.5, 4.0);
        assert!(!check.web_limit_relaxed);
        assert!(!check.web_ok());
        let adv = check.advisories("LB1.1");
        assert_eq!(adv.len(), 1);
        assert_eq!(adv[0].member.as_deref(), Some("LB1.1"));
    }

    #[test]
    fn test_low_stress_relaxes_web_limit() {
        // AW offered 4.8, required 1.2 -> limit doubles
        let (p, m) = setup("Flat Bar 80 x 6");
        let check = ProportionCheck::compute(&p, &m, 30.0, 87.5, 1.2);
        assert!(check.web_limit_relaxed);
        assert!((check.web_limit - 2.0 * 0.37 * 560f64.sqrt()).abs() < 1e-9);
        assert!(check.web_ok());
    }

    #[test]
    fn test_tee_flange_check() {
        // (40 - 4)/2/4 = 4.5
        let (p, m) = setup("Tee 40 x 40 x 4");
        let check = ProportionCheck::compute(&p, &m, 80.0, 87.5, 1.0);
        assert!((check.flange_ratio.unwrap() - 4.5).abs() < 1e-12);
        assert!((check.web_limit - 1.1 * 560f64.sqrt()).abs() < 1e-12);
        assert!(check.passes());
    }
}
