//! Histogram binning.
//!
//! Bin boundaries are round numbers: the domain is covered by multiples of
//! the tick increment for the requested bin count, so the number of bins
//! produced may differ from the number asked for.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validate;
use crate::error::{Error, Result};
use crate::scale::TickStep;

/// Default target bin count.
pub const DEFAULT_BINS: usize = 20;

/// Largest bin count a histogram aims for; larger requests are clamped.
pub const MAX_BINS: usize = 10_000;

/// A half-open interval `[lower, upper)` and the observations falling in it.
///
/// The last bin of a histogram is closed, so the domain maximum is counted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Inclusive lower boundary.
    pub lower: f32,
    /// Upper boundary (exclusive, except for the last bin).
    pub upper: f32,
    /// Number of observations in the bin.
    pub count: usize,
}

impl Bin {
    /// Width of the bin.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.upper - self.lower
    }
}

/// Partition `domain` into round-numbered bins and count `data` into them.
///
/// Observations outside `domain` are not counted. A degenerate domain
/// (`lo == hi`) yields a single bin `[lo, lo]`. Requests above [`MAX_BINS`]
/// are binned as if [`MAX_BINS`] had been asked for.
///
/// # Errors
///
/// Returns [`Error::EmptyDataset`] for empty data, [`Error::InvalidDomain`]
/// for non-finite data or bounds, and [`Error::InvalidParameter`] if
/// `bins` is zero.
pub fn histogram(data: &[f32], domain: (f32, f32), bins: usize) -> Result<Vec<Bin>> {
    validate(data)?;
    if bins == 0 {
        return Err(Error::InvalidParameter {
            name: "bins",
            reason: "must be at least 1".to_string(),
        });
    }
    let (lo, hi) = domain;
    if !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Err(Error::domain(format!("invalid histogram domain [{lo}, {hi}]")));
    }

    let boundaries = boundaries(lo, hi, bins);
    let last = boundaries.len() - 2;
    let mut counts = vec![0usize; last + 1];

    for &v in data {
        if v < boundaries[0] || v > boundaries[last + 1] {
            continue;
        }
        let idx = boundaries.partition_point(|&b| b <= v).saturating_sub(1).min(last);
        counts[idx] += 1;
    }

    if counts.len() != bins {
        debug!(
            requested = bins,
            actual = counts.len(),
            "histogram bins aligned to round boundaries"
        );
    }

    Ok(boundaries
        .windows(2)
        .zip(counts)
        .map(|(w, count)| Bin { lower: w[0], upper: w[1], count })
        .collect())
}

/// Round boundaries covering `[lo, hi]`, at least two of them.
fn boundaries(lo: f32, hi: f32, bins: usize) -> Vec<f32> {
    let Some(step) = TickStep::for_span(f64::from(lo), f64::from(hi), bins.min(MAX_BINS)) else {
        return vec![lo, hi];
    };

    let first = step.floor_index(f64::from(lo));
    let last = step.ceil_index(f64::from(hi)).max(first + 1.0);
    let n = (last - first) as usize;

    let mut out: Vec<f32> = (0..=n).map(|i| step.at(first + i as f64) as f32).collect();

    // Narrowing to f32 can pull an outer boundary just inside the domain.
    if out[0] > lo {
        out.insert(0, step.at(first - 1.0) as f32);
    }
    if out[out.len() - 1] < hi {
        out.push(step.at(first + n as f64 + 1.0) as f32);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_round_boundaries() {
        let data = [0.0, 1.0, 2.5, 7.0, 9.9, 10.0];
        let bins = histogram(&data, (0.0, 10.0), 5).expect("operation should succeed");
        assert_eq!(bins.len(), 5);
        assert_eq!(bins[0], Bin { lower: 0.0, upper: 2.0, count: 2 });
        assert_eq!(bins[1].count, 1);
        assert_eq!(bins[3].count, 1);
        // Last bin is closed.
        assert_eq!(bins[4], Bin { lower: 8.0, upper: 10.0, count: 2 });
    }

    #[test]
    fn test_histogram_count_may_differ_from_request() {
        let data = [0.0, 100.0];
        let bins = histogram(&data, (0.0, 100.0), 3).expect("operation should succeed");
        // Step 50 for three requested bins.
        assert_eq!(bins.len(), 2);
        assert!((bins[0].width() - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_histogram_boundary_value_goes_right() {
        let bins = histogram(&[2.0], (0.0, 4.0), 2).expect("operation should succeed");
        assert_eq!(bins[0].count, 0);
        assert_eq!(bins[1].count, 1);
    }

    #[test]
    fn test_histogram_uneven_domain() {
        let data = [3.7, 12.0, 41.2];
        let bins = histogram(&data, (3.7, 41.2), 4).expect("operation should succeed");
        assert!(bins[0].lower <= 3.7);
        assert!(bins[bins.len() - 1].upper >= 41.2);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
        for pair in bins.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
        }
    }

    #[test]
    fn test_histogram_degenerate_domain() {
        let bins = histogram(&[5.0, 5.0, 5.0], (5.0, 5.0), 10).expect("operation should succeed");
        assert_eq!(bins, vec![Bin { lower: 5.0, upper: 5.0, count: 3 }]);
    }

    #[test]
    fn test_histogram_ignores_out_of_domain() {
        let bins = histogram(&[-50.0, 1.0, 500.0], (0.0, 10.0), 10)
            .expect("operation should succeed");
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 1);
    }

    #[test]
    fn test_histogram_huge_bin_request_is_clamped() {
        let data = [0.0, 0.25, 0.5, 1.0];
        let bins = histogram(&data, (0.0, 1.0), 1_000_000).expect("operation should succeed");
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), data.len());
        assert!(bins.len() <= 2 * MAX_BINS);
        assert_eq!(bins[0].lower, 0.0);
        assert!(bins[bins.len() - 1].upper >= 1.0);
    }

    #[test]
    fn test_histogram_errors() {
        assert!(matches!(histogram(&[], (0.0, 1.0), 5), Err(Error::EmptyDataset { .. })));
        assert!(matches!(
            histogram(&[1.0], (0.0, 1.0), 0),
            Err(Error::InvalidParameter { name: "bins", .. })
        ));
        assert!(matches!(histogram(&[1.0], (2.0, 1.0), 5), Err(Error::InvalidDomain(_))));
        assert!(matches!(histogram(&[f32::NAN], (0.0, 1.0), 5), Err(Error::InvalidDomain(_))));
    }
}
