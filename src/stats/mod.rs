//! Statistical transforms.
//!
//! Pure functions from raw observations to derived tables: bins, density
//! curves, quantile summaries, cumulative steps, frequency tables and
//! stem-leaf groups. No transform mutates its input; those that need
//! ordered data sort a private copy.
//!
//! Every transform rejects an empty input with [`Error::EmptyDataset`] and
//! a non-finite observation with [`Error::InvalidDomain`].

mod density;
mod ecdf;
mod frequency;
mod histogram;
mod pie;
mod qq;
mod quantile;
mod stem_leaf;

pub use density::{epanechnikov, kde, linspace, DensityPoint, DEFAULT_DENSITY_POINTS};
pub use ecdf::{ecdf, EcdfStep};
pub use frequency::{
    frequency_table, pareto_table, FrequencyEntry, FrequencyTable, ParetoEntry, ParetoTable,
};
pub use histogram::{histogram, Bin, DEFAULT_BINS, MAX_BINS};
pub use pie::{pie_slices, PieSlice};
pub use qq::{qq_pairs, QqPairs};
pub use quantile::{quantile, QuantileSummary};
pub use stem_leaf::{stem_leaf, stem_unit, Stem, StemLeafGroup};

use trueno::Vector;

use crate::error::{Error, Result};

/// Check that `data` is non-empty and entirely finite.
pub(crate) fn validate(data: &[f32]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::EmptyDataset { required: 1, actual: 0 });
    }
    if let Some(i) = data.iter().position(|v| !v.is_finite()) {
        return Err(Error::domain(format!("non-finite observation {} at index {i}", data[i])));
    }
    Ok(())
}

/// Sorted copy of `data` (ascending).
///
/// # Errors
///
/// Returns an error if `data` is empty or contains a non-finite value.
pub fn sorted_copy(data: &[f32]) -> Result<Vec<f32>> {
    validate(data)?;
    let mut sorted = data.to_vec();
    sorted.sort_by(f32::total_cmp);
    Ok(sorted)
}

/// Minimum and maximum of `data`.
///
/// # Errors
///
/// Returns an error if `data` is empty or contains a non-finite value.
pub fn extent(data: &[f32]) -> Result<(f32, f32)> {
    validate(data)?;
    // SIMD-accelerated reductions
    let vec = Vector::from_slice(data);
    let min = vec.min().map_err(|_| Error::domain("minimum of observations is undefined"))?;
    let max = vec.max().map_err(|_| Error::domain("maximum of observations is undefined"))?;
    Ok((min, max))
}

/// Arithmetic mean of `data`.
///
/// # Errors
///
/// Returns an error if `data` is empty or contains a non-finite value.
pub fn mean(data: &[f32]) -> Result<f32> {
    validate(data)?;
    Vector::from_slice(data).mean().map_err(|_| Error::domain("mean of observations is undefined"))
}

/// Smallest positive difference between adjacent values of sorted, distinct
/// `values`, if there are at least two.
pub(crate) fn smallest_gap(values: impl IntoIterator<Item = f32>) -> Option<f32> {
    let mut previous: Option<f32> = None;
    let mut gap: Option<f32> = None;
    for v in values {
        if let Some(p) = previous {
            let d = v - p;
            if d > 0.0 {
                gap = Some(gap.map_or(d, |g: f32| g.min(d)));
            }
        }
        previous = Some(v);
    }
    gap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert_eq!(validate(&[]), Err(Error::EmptyDataset { required: 1, actual: 0 }));
        assert!(matches!(validate(&[1.0, f32::NAN]), Err(Error::InvalidDomain(_))));
        assert!(matches!(validate(&[f32::NEG_INFINITY]), Err(Error::InvalidDomain(_))));
        assert!(validate(&[0.0, -3.5]).is_ok());
    }

    #[test]
    fn test_sorted_copy_leaves_input() {
        let data = vec![3.0, -1.0, 2.0];
        let sorted = sorted_copy(&data).expect("operation should succeed");
        assert_eq!(sorted, vec![-1.0, 2.0, 3.0]);
        assert_eq!(data, vec![3.0, -1.0, 2.0]);
    }

    #[test]
    fn test_extent_and_mean() {
        let data = [4.0, -2.0, 7.0, 1.0];
        assert_eq!(extent(&data).expect("operation should succeed"), (-2.0, 7.0));
        assert!((mean(&data).expect("operation should succeed") - 2.5).abs() < 1e-5);
        assert!(extent(&[]).is_err());
    }

    #[test]
    fn test_smallest_gap() {
        assert_eq!(smallest_gap([1.0, 3.0, 3.5, 6.0]), Some(0.5));
        assert_eq!(smallest_gap([2.0]), None);
        assert_eq!(smallest_gap(std::iter::empty()), None);
    }
}
