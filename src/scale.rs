//! Scale functions for data-to-visual mappings.
//!
//! Scales transform data values to visual properties (position, color).
//! Based on the Grammar of Graphics [Wilkinson 2005]; the tick and band
//! layout rules follow the conventions of d3-scale so that charts line up
//! with the round numbers readers expect.

use std::collections::HashSet;

use tracing::trace;

use crate::color::{Rgba, CATEGORY10};
use crate::error::{Error, Result};

/// Number of ticks targeted when rounding a domain to nice bounds.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

// ============================================================================
// Tick increments
// ============================================================================

/// A human-friendly tick increment: 1, 2 or 5 times a power of ten.
///
/// Sub-unit increments are kept as their inverse (`Fraction(5.0)` is a step
/// of 0.2) so that boundaries are computed as `k / 5` rather than `k * 0.2`,
/// which keeps multiples exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TickStep {
    /// Step is the contained value.
    Multiple(f64),
    /// Step is the reciprocal of the contained value.
    Fraction(f64),
}

impl TickStep {
    /// Increment giving roughly `count` ticks over `[start, stop]`.
    pub(crate) fn for_span(start: f64, stop: f64, count: usize) -> Option<Self> {
        if count == 0 || stop <= start {
            return None;
        }
        let raw = (stop - start) / count as f64;
        if !raw.is_finite() || raw <= 0.0 {
            return None;
        }

        let power = raw.log10().floor();
        let error = raw / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        if power >= 0.0 {
            Some(Self::Multiple(factor * 10f64.powf(power)))
        } else {
            Some(Self::Fraction(10f64.powf(-power) / factor))
        }
    }

    /// The `k`-th multiple of this step.
    pub(crate) fn at(self, k: f64) -> f64 {
        match self {
            Self::Multiple(step) => k * step,
            Self::Fraction(inverse) => k / inverse,
        }
    }

    /// Step size as a plain number.
    pub(crate) fn size(self) -> f64 {
        match self {
            Self::Multiple(step) => step,
            Self::Fraction(inverse) => 1.0 / inverse,
        }
    }

    fn quotient(self, value: f64) -> f64 {
        match self {
            Self::Multiple(step) => value / step,
            Self::Fraction(inverse) => value * inverse,
        }
    }

    /// Index of the largest multiple `<= value`.
    ///
    /// A multiple whose `f32` form equals `value` counts as equal, which
    /// absorbs the widening error of `f32` observations.
    pub(crate) fn floor_index(self, value: f64) -> f64 {
        let q = self.quotient(value);
        let nearest = q.round();
        if self.at(nearest) as f32 == value as f32 {
            nearest
        } else {
            q.floor()
        }
    }

    /// Index of the smallest multiple `>= value`.
    pub(crate) fn ceil_index(self, value: f64) -> f64 {
        let q = self.quotient(value);
        let nearest = q.round();
        if self.at(nearest) as f32 == value as f32 {
            nearest
        } else {
            q.ceil()
        }
    }
}

/// Round `[a, b]` outward to multiples of its tick increment.
///
/// Repeats until the increment is stable (at most ten passes), since
/// widening the domain can change the increment. A bound that would round
/// past the `f32` range is left as given.
pub(crate) fn nice_domain(a: f32, b: f32, count: usize) -> (f32, f32) {
    let mut start = f64::from(a);
    let mut stop = f64::from(b);
    let mut previous: Option<TickStep> = None;

    for _ in 0..10 {
        let Some(step) = TickStep::for_span(start, stop, count) else {
            break;
        };
        if previous == Some(step) {
            break;
        }
        start = step.at(step.floor_index(start));
        stop = step.at(step.ceil_index(stop));
        previous = Some(step);
    }

    let start = if (start as f32).is_finite() { start as f32 } else { a };
    let stop = if (stop as f32).is_finite() { stop as f32 } else { b };
    (start, stop)
}

// ============================================================================
// Linear scale
// ============================================================================

/// Linear scale for continuous-to-continuous mapping.
///
/// Values outside the domain extrapolate linearly; nothing is clamped, so
/// whiskers and outliers beyond nice bounds still land where they belong.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale, optionally rounding the domain outward.
    ///
    /// A degenerate domain (`a == b`) is allowed and maps every input to the
    /// start of the range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] if a bound is non-finite or the
    /// domain is inverted.
    pub fn new(domain: (f32, f32), range: (f32, f32), nice: bool) -> Result<Self> {
        let (a, b) = domain;
        if !a.is_finite() || !b.is_finite() {
            return Err(Error::domain(format!("non-finite bounds [{a}, {b}]")));
        }
        if a > b {
            return Err(Error::domain(format!("inverted bounds [{a}, {b}]")));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(Error::domain(format!("non-finite range [{}, {}]", range.0, range.1)));
        }

        let (domain_min, domain_max) =
            if nice { nice_domain(a, b, DEFAULT_TICK_COUNT) } else { (a, b) };
        trace!(domain_min, domain_max, nice, "linear scale");

        Ok(Self { domain_min, domain_max, range_min: range.0, range_max: range.1 })
    }

    /// True when the domain collapses to a single value.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.domain_min == self.domain_max
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f32) -> f32 {
        if self.range_min == self.range_max {
            return self.domain_min;
        }
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }

    /// Round tick values inside the domain, about `count` of them.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f32> {
        if self.is_degenerate() {
            return vec![self.domain_min];
        }
        let lo = f64::from(self.domain_min);
        let hi = f64::from(self.domain_max);
        let Some(step) = TickStep::for_span(lo, hi, count) else {
            return vec![self.domain_min];
        };

        let first = step.ceil_index(lo);
        let last = step.floor_index(hi);
        if last < first {
            return Vec::new();
        }
        let n = ((last - first) as usize).min(1_000);
        (0..=n).map(|i| step.at(first + i as f64) as f32).collect()
    }

    /// Spacing between the values returned by [`ticks`](Self::ticks).
    #[must_use]
    pub fn tick_step(&self, count: usize) -> f32 {
        TickStep::for_span(f64::from(self.domain_min), f64::from(self.domain_max), count)
            .map_or(0.0, |step| step.size() as f32)
    }
}

impl Scale<f32, f32> for LinearScale {
    fn scale(&self, value: f32) -> f32 {
        if self.is_degenerate() {
            return self.range_min;
        }
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

// ============================================================================
// Band scale
// ============================================================================

/// Band scale for categorical positions.
///
/// The range is divided into one equal band per category, with `padding`
/// (a fraction of the step) between bands and at both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    categories: Vec<String>,
    range: (f32, f32),
    padding: f32,
    step: f32,
    bandwidth: f32,
    start: f32,
}

impl BandScale {
    /// Create a band scale over distinct, ordered categories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateCategory`] if a category repeats and
    /// [`Error::InvalidDomain`] if there are no categories.
    pub fn new(categories: Vec<String>, range: (f32, f32), padding: f32) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::domain("band scale requires at least one category"));
        }
        let mut seen = HashSet::with_capacity(categories.len());
        for category in &categories {
            if !seen.insert(category.as_str()) {
                return Err(Error::DuplicateCategory(category.clone()));
            }
        }

        let padding = if padding.is_finite() { padding.clamp(0.0, 1.0) } else { 0.0 };
        let n = categories.len() as f32;
        let (lo, hi) = if range.0 <= range.1 { range } else { (range.1, range.0) };

        let step = (hi - lo) / (n - padding + 2.0 * padding).max(1.0);
        let bandwidth = step * (1.0 - padding);
        let start = lo + (hi - lo - step * (n - padding)) * 0.5;
        trace!(bands = categories.len(), step, bandwidth, "band scale");

        Ok(Self { categories, range, padding, step, bandwidth, start })
    }

    /// Usable width of each band.
    #[must_use]
    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    /// Distance between the starts of adjacent bands.
    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Padding fraction the scale was built with.
    #[must_use]
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Range the bands are laid out over.
    #[must_use]
    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Categories in band order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Start of the band at `index`.
    #[must_use]
    pub fn position_at(&self, index: usize) -> f32 {
        let n = self.categories.len();
        // A reversed range lays the first category out at the far end.
        let slot = if self.range.0 <= self.range.1 { index } else { n - 1 - index.min(n - 1) };
        self.start + self.step * slot as f32
    }

    /// Start of the band for `key`, if the key is in the domain.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<f32> {
        self.categories.iter().position(|c| c == key).map(|i| self.position_at(i))
    }

    /// Middle of the band for `key`.
    #[must_use]
    pub fn center(&self, key: &str) -> Option<f32> {
        self.position(key).map(|p| p + self.bandwidth / 2.0)
    }
}

// ============================================================================
// Ordinal color scale
// ============================================================================

/// Ordinal color scale cycling the ten-color categorical palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinalColorScale {
    len: usize,
}

impl OrdinalColorScale {
    /// Create a color scale for `n` ordinal positions.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { len: n }
    }

    /// Color for position `index` (palette index `index mod 10`).
    #[must_use]
    pub fn color(&self, index: usize) -> Rgba {
        CATEGORY10[index % CATEGORY10.len()]
    }
}

impl Scale<usize, Rgba> for OrdinalColorScale {
    fn scale(&self, value: usize) -> Rgba {
        self.color(value)
    }

    fn domain(&self) -> (usize, usize) {
        (0, self.len.saturating_sub(1))
    }

    fn range(&self) -> (Rgba, Rgba) {
        (self.color(0), self.color(self.len.saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0), false)
            .expect("operation should succeed");
        assert!((scale.scale(0.0) - 0.0).abs() < 0.001);
        assert!((scale.scale(50.0) - 0.5).abs() < 0.001);
        assert!((scale.scale(100.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_nice_domain_near_float_max() {
        let (lo, hi) = nice_domain(0.0, f32::MAX, DEFAULT_TICK_COUNT);
        assert_eq!(lo, 0.0);
        assert_eq!(hi, f32::MAX);

        let (lo, hi) = nice_domain(-f32::MAX, -1.0, DEFAULT_TICK_COUNT);
        assert_eq!(lo, -f32::MAX);
        assert!(hi.is_finite() && hi >= -1.0);

        let scale = LinearScale::new((1.0, f32::MAX), (0.0, 100.0), true)
            .expect("operation should succeed");
        let (a, b) = scale.domain();
        assert!(a.is_finite() && b.is_finite());
    }

    #[test]
    fn test_linear_scale_extrapolates() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0), false)
            .expect("operation should succeed");
        assert!((scale.scale(-5.0) + 50.0).abs() < 0.001);
        assert!((scale.scale(20.0) - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        let scale = LinearScale::new((0.0, 80.0), (270.0, 20.0), false)
            .expect("operation should succeed");
        assert!((scale.scale(0.0) - 270.0).abs() < 0.001);
        assert!((scale.scale(80.0) - 20.0).abs() < 0.001);
        assert!(scale.scale(30.0) > scale.scale(60.0));
    }

    #[test]
    fn test_linear_scale_invert() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0), false)
            .expect("operation should succeed");
        assert!((scale.invert(0.5) - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_linear_scale_rejects_non_finite() {
        assert!(matches!(
            LinearScale::new((f32::NAN, 1.0), (0.0, 1.0), false),
            Err(Error::InvalidDomain(_))
        ));
        assert!(matches!(
            LinearScale::new((0.0, f32::INFINITY), (0.0, 1.0), true),
            Err(Error::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_linear_scale_rejects_inverted_domain() {
        let inverted = LinearScale::new((5.0, 1.0), (0.0, 1.0), false);
        assert!(matches!(inverted, Err(Error::InvalidDomain(_))));
    }

    #[test]
    fn test_linear_scale_degenerate_maps_to_range_start() {
        let scale = LinearScale::new((5.0, 5.0), (10.0, 90.0), false)
            .expect("operation should succeed");
        assert!(scale.is_degenerate());
        assert_eq!(scale.scale(5.0), 10.0);
        assert_eq!(scale.scale(-3.0), 10.0);
        assert_eq!(scale.ticks(10), vec![5.0]);
    }

    #[test]
    fn test_linear_scale_nice() {
        let scale = LinearScale::new((0.0, 80.0), (0.0, 1.0), true)
            .expect("operation should succeed");
        assert_eq!(scale.domain(), (0.0, 80.0));

        let scale = LinearScale::new((3.7, 96.2), (0.0, 1.0), true)
            .expect("operation should succeed");
        assert_eq!(scale.domain(), (0.0, 100.0));

        let scale = LinearScale::new((0.12, 0.87), (0.0, 1.0), true)
            .expect("operation should succeed");
        let (lo, hi) = scale.domain();
        assert!((lo - 0.1).abs() < 1e-6);
        assert!((hi - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_linear_scale_nice_negative() {
        let scale = LinearScale::new((-13.0, 47.0), (0.0, 1.0), true)
            .expect("operation should succeed");
        assert_eq!(scale.domain(), (-15.0, 50.0));
    }

    #[test]
    fn test_linear_scale_ticks() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0), false)
            .expect("operation should succeed");
        let ticks = scale.ticks(5);
        assert_eq!(ticks.len(), 6);
        assert!((ticks[1] - 0.2).abs() < 1e-6);
        assert!((scale.tick_step(5) - 0.2).abs() < 1e-6);

        let scale = LinearScale::new((0.0, 80.0), (0.0, 100.0), false)
            .expect("operation should succeed");
        assert_eq!(scale.ticks(10), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]);
    }

    #[test]
    fn test_tick_step_factors() {
        assert_eq!(TickStep::for_span(0.0, 100.0, 10), Some(TickStep::Multiple(10.0)));
        assert_eq!(TickStep::for_span(0.0, 100.0, 20), Some(TickStep::Multiple(5.0)));
        assert_eq!(TickStep::for_span(0.0, 1.0, 5), Some(TickStep::Fraction(5.0)));
        assert_eq!(TickStep::for_span(1.0, 1.0, 5), None);
        assert_eq!(TickStep::for_span(0.0, 1.0, 0), None);
    }

    #[test]
    fn test_band_scale_layout() {
        let cats: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let scale = BandScale::new(cats, (40.0, 470.0), 0.1).expect("operation should succeed");

        let step = 430.0 / 4.1;
        assert!((scale.step() - step).abs() < 1e-3);
        assert!((scale.bandwidth() - step * 0.9).abs() < 1e-3);
        assert!((scale.position("A").expect("known key") - (40.0 + step * 0.1)).abs() < 1e-3);

        let a = scale.position("A").expect("known key");
        let d = scale.position("D").expect("known key");
        assert!(a < d);
        assert!(d + scale.bandwidth() <= 470.0 + 1e-3);
        assert!(scale.position("Z").is_none());
    }

    #[test]
    fn test_band_scale_no_padding_fills_range() {
        let cats: Vec<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
        let scale = BandScale::new(cats, (0.0, 100.0), 0.0).expect("operation should succeed");
        assert!((scale.bandwidth() - 50.0).abs() < 1e-4);
        assert!((scale.center("y").expect("known key") - 75.0).abs() < 1e-4);
    }

    #[test]
    fn test_band_scale_reversed_range() {
        let cats: Vec<String> = ["top", "bottom"].iter().map(|s| s.to_string()).collect();
        let scale = BandScale::new(cats, (100.0, 0.0), 0.0).expect("operation should succeed");
        let top = scale.position("top").expect("known key");
        assert!(top > scale.position("bottom").expect("known key"));
    }

    #[test]
    fn test_band_scale_duplicate_category() {
        let cats: Vec<String> = ["A", "B", "A"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            BandScale::new(cats, (0.0, 1.0), 0.1),
            Err(Error::DuplicateCategory("A".to_string()))
        );
    }

    #[test]
    fn test_band_scale_empty() {
        let empty = BandScale::new(Vec::new(), (0.0, 1.0), 0.1);
        assert!(matches!(empty, Err(Error::InvalidDomain(_))));
    }

    #[test]
    fn test_ordinal_color_scale_cycles() {
        let scale = OrdinalColorScale::new(12);
        assert_eq!(scale.color(0), CATEGORY10[0]);
        assert_eq!(scale.color(10), CATEGORY10[0]);
        assert_eq!(scale.scale(13), CATEGORY10[3]);
        assert_eq!(scale.domain(), (0, 11));
    }
}
