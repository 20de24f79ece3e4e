//! Quantiles and five-number summaries.

use serde::{Deserialize, Serialize};

use super::sorted_copy;
use crate::error::{Error, Result};

/// Quantile of sorted data using linear interpolation.
///
/// The position is `p * (n - 1)`; `p` is clamped to `[0, 1]`.
///
/// # Errors
///
/// Returns [`Error::EmptyDataset`] for empty input and
/// [`Error::InvalidParameter`] for a NaN probability.
pub fn quantile(sorted: &[f32], p: f32) -> Result<f32> {
    if sorted.is_empty() {
        return Err(Error::EmptyDataset { required: 1, actual: 0 });
    }
    if p.is_nan() {
        return Err(Error::InvalidParameter { name: "p", reason: "probability is NaN".to_string() });
    }

    let n = sorted.len();
    let idx = p.clamp(0.0, 1.0) * (n - 1) as f32;
    let lower = (idx.floor() as usize).min(n - 1);
    let upper = (idx.ceil() as usize).min(n - 1);
    let frac = idx - lower as f32;

    Ok(sorted[lower] + frac * (sorted[upper] - sorted[lower]))
}

/// Five-number summary with Tukey fences (1.5 x IQR).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantileSummary {
    /// First quartile (25th percentile).
    pub q1: f32,
    /// Median (50th percentile).
    pub median: f32,
    /// Third quartile (75th percentile).
    pub q3: f32,
    /// Interquartile range (`q3 - q1`).
    pub iqr: f32,
    /// Smallest observation `>= q1 - 1.5 * iqr`.
    pub lower_whisker: f32,
    /// Largest observation `<= q3 + 1.5 * iqr`.
    pub upper_whisker: f32,
    /// Observations outside the whiskers, ascending.
    pub outliers: Vec<f32>,
}

impl QuantileSummary {
    /// Summarize unsorted data.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is empty or contains a non-finite value.
    pub fn from_data(data: &[f32]) -> Result<Self> {
        let sorted = sorted_copy(data)?;
        Self::from_sorted(&sorted)
    }

    /// Summarize data that is already sorted ascending.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDataset`] for empty input.
    pub fn from_sorted(sorted: &[f32]) -> Result<Self> {
        let q1 = quantile(sorted, 0.25)?;
        let median = quantile(sorted, 0.5)?;
        let q3 = quantile(sorted, 0.75)?;
        let iqr = q3 - q1;

        let lower_fence = q1 - 1.5 * iqr;
        let upper_fence = q3 + 1.5 * iqr;

        // q1 and q3 lie within the data, so both searches find a value.
        let lower_whisker = sorted.iter().copied().find(|&x| x >= lower_fence).unwrap_or(sorted[0]);
        let last = sorted[sorted.len() - 1];
        let upper_whisker = sorted.iter().copied().rfind(|&x| x <= upper_fence).unwrap_or(last);

        let outliers =
            sorted.iter().copied().filter(|&x| x < lower_whisker || x > upper_whisker).collect();

        Ok(Self { q1, median, q3, iqr, lower_whisker, upper_whisker, outliers })
    }
}
