//! Topology generator: splits a section into evenly spaced panels and
//! stiffeners.
//!
//! ```text
//!   girder        L.1         L.2        girder
//!     |     a      |     b     |     c     |
//!     |<-- G/3 --->|<-- G/3 -->|<-- G/3 -->|
//!   line 0       line 1      line 2      line 3
//! ```
//!
//! N stiffeners give N + 2 lines, N + 1 panels and N stiffeners on the
//! interior lines. Regenerating a section replaces its members.

use super::section::{DistributionAxis, Position, Section};
use super::{Panel, Stiffener, Structure};
use crate::errors::ScantResult;

/// Minor division suffix for panel `index`: a..z, aa, ab, ...
pub fn panel_suffix(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'a' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// Position of a point `offset_mm` along the section's distribution axis
fn point_at(section: &Section, offset_mm: f64) -> Position {
    let o = section.origin;
    let x = o.x_m + section.frame_spacing_mm / 2000.0;
    match section.location.distribution_axis() {
        DistributionAxis::Transverse => Position::new(x, o.y_m + offset_mm / 1000.0, o.z_m),
        DistributionAxis::Vertical => Position::new(x, o.y_m, o.z_m + offset_mm / 1000.0),
    }
}

impl Structure {
    /// Generate `stiffener_count` stiffeners and the panels between them for
    /// the section labelled `section_label`.
    ///
    /// Previously generated members of that section are removed first.
    ///
    /// # Example
    /// ```rust
    /// use scant_core::structure::{Location, Position, Section, Structure};
    ///
    /// let mut s = Structure::new();
    /// s.add_section(Section::new("B1", 900.0, 1000.0, Position::default(), Location::Bottom)).unwrap();
    /// s.generate_topology("B1", 2).unwrap();
    /// assert_eq!(s.panels().len(), 3);
    /// assert_eq!(s.stiffeners().len(), 2);
    /// assert_eq!(s.panels()[1].label, "B1b");
    /// assert_eq!(s.stiffeners()[0].label, "LB1.1");
    /// ```
    pub fn generate_topology(&mut self, section_label: &str, stiffener_count: usize) -> ScantResult<()> {
        let section = self.section(section_label)?.clone();
        self.clear_section_members(section_label);

        let divisions = stiffener_count + 1;
        let g = section.girder_spacing_mm;
        let lines: Vec<f64> = (0..=divisions)
            .map(|i| g * i as f64 / divisions as f64)
            .collect();

        let panel_labels: Vec<String> = (0..divisions)
            .map(|i| format!("{}{}", section.label, panel_suffix(i)))
            .collect();

        for (i, label) in panel_labels.iter().enumerate() {
            let width = lines[i + 1] - lines[i];
            let centre = (lines[i] + lines[i + 1]) / 2.0;
            self.panels.push(Panel::new(
                label.clone(),
                section.label.clone(),
                section.location,
                width,
                section.frame_spacing_mm,
                point_at(&section, centre),
            ));
        }

        for k in 1..=stiffener_count {
            let spacing = (lines[k + 1] - lines[k - 1]) / 2.0;
            self.stiffeners.push(Stiffener::new(
                format!("{}{}.{}", section.stiffener_type.prefix(), section.label, k),
                section.label.clone(),
                section.stiffener_type,
                section.location,
                section.frame_spacing_mm,
                spacing,
                point_at(&section, lines[k]),
                [panel_labels[k - 1].clone(), panel_labels[k].clone()],
            ));
        }

        log::trace!(
            "section {}: {} panels, {} stiffeners",
            section.label,
            divisions,
            stiffener_count
        );
        Ok(())
    }

    fn clear_section_members(&mut self, section_label: &str) {
        self.panels.retain(|p| p.section != section_label);
        self.stiffeners.retain(|s| s.section != section_label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{Location, StiffenerType};

    fn structure(location: Location) -> Structure {
        let mut s = Structure::new();
        s.add_section(Section::new(
            "B1",
            1000.0,
            1200.0,
            Position::new(2.0, 0.1, 0.3),
            location,
        ))
        .unwrap();
        s
    }

    #[test]
    fn test_panel_suffix() {
        assert_eq!(panel_suffix(0), "a");
        assert_eq!(panel_suffix(25), "z");
        assert_eq!(panel_suffix(26), "aa");
        assert_eq!(panel_suffix(27), "ab");
        assert_eq!(panel_suffix(701), "zz");
        assert_eq!(panel_suffix(702), "aaa");
    }

    #[test]
    fn test_counts_and_width_sum() {
        for n in [0usize, 1, 2, 3, 7, 12] {
            let mut s = structure(Location::Bottom);
            s.generate_topology("B1", n).unwrap();
            assert_eq!(s.panels().len(), n + 1);
            assert_eq!(s.stiffeners().len(), n);
            let total: f64 = s.panels().iter().map(|p| p.width_mm).sum();
            assert!((total - 1000.0).abs() <= 1e-6 * 1000.0);
        }
    }

    #[test]
    fn test_zero_stiffeners_single_panel() {
        let mut s = structure(Location::Deck);
        s.generate_topology("B1", 0).unwrap();
        assert_eq!(s.panels().len(), 1);
        assert!(s.stiffeners().is_empty());
        assert_eq!(s.panels()[0].width_mm, 1000.0);
        assert_eq!(s.panels()[0].length_mm, 1200.0);
    }

    #[test]
    fn test_regeneration_replaces() {
        let mut s = structure(Location::Bottom);
        s.generate_topology("B1", 4).unwrap();
        s.generate_topology("B1", 1).unwrap();
        assert_eq!(s.panels().len(), 2);
        assert_eq!(s.stiffeners().len(), 1);
        assert_eq!(s.stiffeners()[0].label, "LB1.1");
    }

    #[test]
    fn test_regeneration_keeps_other_sections() {
        let mut s = structure(Location::Bottom);
        s.add_section(Section::new("S1", 600.0, 1200.0, Position::default(), Location::Side))
            .unwrap();
        s.generate_topology("B1", 2).unwrap();
        s.generate_topology("S1", 1).unwrap();
        s.generate_topology("B1", 0).unwrap();
        assert_eq!(s.panels().len(), 3);
        assert_eq!(s.stiffeners().len(), 1);
        assert_eq!(s.stiffeners()[0].section, "S1");
    }

    #[test]
    fn test_transverse_positions() {
        let mut s = structure(Location::Bottom);
        s.generate_topology("B1", 1).unwrap();
        let a = &s.panels()[0];
        assert!((a.position.x_m - 2.6).abs() < 1e-12);
        assert!((a.position.y_m - 0.35).abs() < 1e-12);
        assert_eq!(a.position.z_m, 0.3);
        let l = &s.stiffeners()[0];
        assert!((l.position.y_m - 0.6).abs() < 1e-12);
        assert_eq!(l.spacing_mm, 500.0);
        assert_eq!(l.length_mm, 1200.0);
        assert_eq!(l.attached_panels, ["B1a".to_string(), "B1b".to_string()]);
    }

    #[test]
    fn test_vertical_positions() {
        let mut s = structure(Location::Side);
        s.generate_topology("B1", 1).unwrap();
        let b = &s.panels()[1];
        assert_eq!(b.position.y_m, 0.1);
        assert!((b.position.z_m - 1.05).abs() < 1e-12);
        assert_eq!(b.width_mm, 500.0);
    }

    #[test]
    fn test_stiffener_prefix_follows_type() {
        let mut s = Structure::new();
        s.add_section(
            Section::new("D2", 800.0, 1000.0, Position::default(), Location::Deck)
                .with_stiffener_type(StiffenerType::Frame),
        )
        .unwrap();
        s.generate_topology("D2", 3).unwrap();
        let labels: Vec<&str> = s.stiffeners().iter().map(|x| x.label.as_str()).collect();
        assert_eq!(labels, ["FRD2.1", "FRD2.2", "FRD2.3"]);
        assert!(s.stiffeners().iter().all(|x| x.stiffener_type == StiffenerType::Frame));
    }

    #[test]
    fn test_unknown_section() {
        let mut s = Structure::new();
        let err = s.generate_topology("X9", 1).unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_ENTRY_NOT_FOUND");
    }
}
