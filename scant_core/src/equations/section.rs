//! # Cross-Section Property Formulas
//!
//! Geometric properties of stiffener cross-sections built from rectangles:
//! flat bars, L and T profiles, and a profile combined with its effective
//! width of attached plating.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area) about the neutral axis
//! - `S` = Section modulus (I/c, where c = distance to extreme fiber)
//! - `b` = Width of a rectangle
//! - `d` = Depth (height) of a rectangle
//!
//! Heights are measured upward from a reference line (the plate face or the
//! heel of the profile); any consistent unit works.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Appendix A
//! - ISO 12215-5:2019, Annex H (attached plating)

use serde::{Deserialize, Serialize};

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Cross-sectional area for rectangular section
///
/// # Formula
/// A = b × d
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Moment of inertia for rectangular section about its own centroid
///
/// # Formula
/// I = bd³/12
///
/// # Example
/// ```rust
/// use scant_core::equations::section::rectangular_moment_of_inertia;
///
/// // 5 mm x 40 mm flat bar
/// let i = rectangular_moment_of_inertia(5.0, 40.0);
/// assert!((i - 26_666.67).abs() < 0.01);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Section modulus for rectangular section
///
/// # Formula
/// S = I/c = bd²/6
#[inline]
pub fn rectangular_section_modulus(b: f64, d: f64) -> f64 {
    b * d.powi(2) / 6.0
}

// =============================================================================
// COMPOSITE SECTIONS
// Parallel-axis combination of rectangular elements
// =============================================================================

/// One rectangular element of a built-up section
///
/// ```text
///     ┌──────b──────┐  ─┬─
///     │      +      │   d    + = centroid at height `centroid`
///     └─────────────┘  ─┴─
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectElement {
    /// Width, perpendicular to the bending plane
    pub width: f64,
    /// Depth, in the bending plane
    pub depth: f64,
    /// Height of the element centroid above the reference line
    pub centroid: f64,
}

impl RectElement {
    /// Element whose lower edge sits at `base` above the reference line
    pub fn stacked(width: f64, depth: f64, base: f64) -> Self {
        RectElement {
            width,
            depth,
            centroid: base + depth / 2.0,
        }
    }

    pub fn area(&self) -> f64 {
        rectangular_area(self.width, self.depth)
    }

    pub fn own_inertia(&self) -> f64 {
        rectangular_moment_of_inertia(self.width, self.depth)
    }

    fn bottom(&self) -> f64 {
        self.centroid - self.depth / 2.0
    }

    fn top(&self) -> f64 {
        self.centroid + self.depth / 2.0
    }
}

/// Properties of a built-up section about its own neutral axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeProperties {
    /// Total area A = ΣAᵢ
    pub area: f64,
    /// Neutral axis height ȳ = ΣAᵢyᵢ / ΣAᵢ
    pub neutral_axis: f64,
    /// Moment of inertia I = Σ(Iᵢ + Aᵢ(yᵢ − ȳ)²)
    pub moment_of_inertia: f64,
    /// Lowest fibre height
    pub bottom: f64,
    /// Highest fibre height
    pub top: f64,
}

impl CompositeProperties {
    /// Distance from the neutral axis to the farthest fibre
    pub fn extreme_fibre(&self) -> f64 {
        (self.neutral_axis - self.bottom).max(self.top - self.neutral_axis)
    }

    /// Minimum (governing) section modulus I / c_max
    pub fn section_modulus(&self) -> f64 {
        self.moment_of_inertia / self.extreme_fibre()
    }
}

/// Combine rectangular elements with the parallel-axis theorem.
///
/// Returns `None` when the elements have no area.
///
/// # Example
/// ```rust
/// use scant_core::equations::section::{composite_properties, RectElement};
///
/// // Tee 40 x 40 x 4: web 4 x 40, flange 40 x 4 on top
/// let web = RectElement::stacked(4.0, 40.0, 0.0);
/// let flange = RectElement::stacked(40.0, 4.0, 40.0);
/// let props = composite_properties(&[web, flange]).unwrap();
/// assert!((props.neutral_axis - 31.0).abs() < 1e-9);
/// // 1.944 cm³ in the extrusion catalog
/// assert!((props.section_modulus() / 1000.0 - 1.944).abs() < 0.001);
/// ```
pub fn composite_properties(elements: &[RectElement]) -> Option<CompositeProperties> {
    let area: f64 = elements.iter().map(RectElement::area).sum();
    if area <= 0.0 {
        return None;
    }

    let first_moment: f64 = elements.iter().map(|e| e.area() * e.centroid).sum();
    let neutral_axis = first_moment / area;

    let moment_of_inertia = elements
        .iter()
        .map(|e| e.own_inertia() + e.area() * (e.centroid - neutral_axis).powi(2))
        .sum();

    let bottom = elements
        .iter()
        .map(RectElement::bottom)
        .fold(f64::INFINITY, f64::min);
    let top = elements
        .iter()
        .map(RectElement::top)
        .fold(f64::NEG_INFINITY, f64::max);

    Some(CompositeProperties {
        area,
        neutral_axis,
        moment_of_inertia,
        bottom,
        top,
    })
}

// =============================================================================
// UNIT TESTS
// =============================================================================
