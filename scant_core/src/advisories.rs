//! # Advisories
//!
//! Non-fatal findings raised while the pipeline runs. Every advisory is
//! collected into an [`AdvisoryLog`] that travels with the results, so batch
//! callers and tests can inspect them without parsing console text.
//!
//! Advisories are mirrored to the `log` facade at the matching level.

use serde::{Deserialize, Serialize};

/// How serious an advisory is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational note, no action needed
    Info,
    /// The result is usable but a reviewer should look at it
    Warning,
}

/// Which stiffener dimension ratio was exceeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProportionRatio {
    /// Web height over web thickness (hw/tw)
    WebHeight,
    /// Flange projection over flange thickness
    FlangeProjection,
}

impl std::fmt::Display for ProportionRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProportionRatio::WebHeight => write!(f, "web height/thickness"),
            ProportionRatio::FlangeProjection => write!(f, "flange projection/thickness"),
        }
    }
}

/// Advisory payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AdvisoryKind {
    /// No catalog plate met the requirement; the thickest plate was used
    PlateFallback { required_mm: f64, assigned_mm: f64 },

    /// A stiffener profile exceeds a recommended dimension ratio
    ProportionExceeded {
        ratio: ProportionRatio,
        actual: f64,
        limit: f64,
    },

    /// Displacement craft whose dynamic load factor implies planing speeds
    DisplacementSpeedAnomaly { n_cg: f64 },

    /// Planing dynamic load factor capped at the rule maximum
    LoadFactorCapped { candidate: f64, capped: f64 },

    /// Craft mode override disagrees with the speed/length ratio
    CraftModeOverride { speed_length_ratio: f64 },
}

/// A single structured advisory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    /// Severity level
    pub severity: Severity,
    /// Member label the advisory refers to, if any
    pub member: Option<String>,
    /// Structured payload
    pub kind: AdvisoryKind,
    /// Human-readable message
    pub message: String,
}

impl Advisory {
    /// Create a warning-level advisory
    pub fn warning(member: Option<String>, kind: AdvisoryKind, message: impl Into<String>) -> Self {
        Advisory {
            severity: Severity::Warning,
            member,
            kind,
            message: message.into(),
        }
    }

    /// Create an info-level advisory
    pub fn info(member: Option<String>, kind: AdvisoryKind, message: impl Into<String>) -> Self {
        Advisory {
            severity: Severity::Info,
            member,
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
        };
        match &self.member {
            Some(member) => write!(f, "[{}] {}: {}", level, member, self.message),
            None => write!(f, "[{}] {}", level, self.message),
        }
    }
}

/// Ordered collection of advisories produced by one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvisoryLog {
    entries: Vec<Advisory>,
}

impl AdvisoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an advisory and mirror it to the log facade
    pub fn push(&mut self, advisory: Advisory) {
        match advisory.severity {
            Severity::Info => log::info!("{}", advisory),
            Severity::Warning => log::warn!("{}", advisory),
        }
        self.entries.push(advisory);
    }

    /// Append every advisory from another log
    pub fn extend(&mut self, other: AdvisoryLog) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[Advisory] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of warning-level advisories
    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|a| a.severity == Severity::Warning)
            .count()
    }

    /// Advisories attached to one member label
    pub fn for_member<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Advisory> + 'a {
        self.entries
            .iter()
            .filter(move |a| a.member.as_deref() == Some(label))
    }
}
