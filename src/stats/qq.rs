//! Quantile-quantile pairing of two samples.

use serde::{Deserialize, Serialize};

use super::{quantile, sorted_copy};
use crate::error::{Error, Result};

/// Paired quantiles of two samples and their shared reference range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QqPairs {
    /// `(first, second)` quantiles at `(i + 0.5) / m`, `m` the smaller sample size.
    pub pairs: Vec<(f32, f32)>,
    /// Overlap of the two sample ranges, where the `y = x` reference line is
    /// drawn; `None` when the ranges are disjoint.
    pub diagonal: Option<(f32, f32)>,
}

/// Pair the quantiles of `first` and `second`.
///
/// # Errors
///
/// Returns [`Error::EmptyDataset`] if either sample has fewer than two
/// observations, and [`Error::InvalidDomain`] for non-finite values.
pub fn qq_pairs(first: &[f32], second: &[f32]) -> Result<QqPairs> {
    let smaller = first.len().min(second.len());
    if smaller < 2 {
        return Err(Error::EmptyDataset { required: 2, actual: smaller });
    }
    let a = sorted_copy(first)?;
    let b = sorted_copy(second)?;

    let m = smaller as f32;
    let pairs = (0..smaller)
        .map(|i| {
            let p = (i as f32 + 0.5) / m;
            Ok((quantile(&a, p)?, quantile(&b, p)?))
        })
        .collect::<Result<Vec<_>>>()?;

    let lo = a[0].max(b[0]);
    let hi = a[a.len() - 1].min(b[b.len() - 1]);
    let diagonal = (lo <= hi).then_some((lo, hi));

    Ok(QqPairs { pairs, diagonal })
}
