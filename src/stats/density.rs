//! Kernel density estimation with the Epanechnikov kernel.

use serde::{Deserialize, Serialize};

use super::validate;
use crate::error::{Error, Result};

/// Number of evaluation points used for density curves.
pub const DEFAULT_DENSITY_POINTS: usize = 100;

/// A density curve sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    /// Evaluation position in data units.
    pub position: f32,
    /// Estimated density at `position`.
    pub density: f32,
}

/// Epanechnikov kernel: `0.75 * (1 - u^2)` for `|u| <= 1`, else 0.
#[inline]
#[must_use]
pub fn epanechnikov(u: f32) -> f32 {
    if u.abs() <= 1.0 {
        0.75 * (1.0 - u * u)
    } else {
        0.0
    }
}

/// `n` evenly spaced positions from `domain.0` to `domain.1` inclusive.
#[must_use]
pub fn linspace(domain: (f32, f32), n: usize) -> Vec<f32> {
    let (lo, hi) = domain;
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let last = (n - 1) as f32;
            (0..n).map(|i| if i == n - 1 { hi } else { lo + (hi - lo) * i as f32 / last }).collect()
        }
    }
}

/// Estimate the density of `data` at each of `positions`.
///
/// `density(t) = (1 / (n * h)) * sum K((t - x_i) / h)`.
///
/// # Errors
///
/// Returns [`Error::EmptyDataset`] for empty data, [`Error::InvalidDomain`]
/// for non-finite data and [`Error::InvalidBandwidth`] unless `bandwidth`
/// is positive and finite.
pub fn kde(data: &[f32], bandwidth: f32, positions: &[f32]) -> Result<Vec<DensityPoint>> {
    validate(data)?;
    if !(bandwidth > 0.0 && bandwidth.is_finite()) {
        return Err(Error::InvalidBandwidth(bandwidth));
    }

    let norm = 1.0 / (data.len() as f32 * bandwidth);
    Ok(positions
        .iter()
        .map(|&t| {
            let sum: f32 = data.iter().map(|&x| epanechnikov((t - x) / bandwidth)).sum();
            DensityPoint { position: t, density: sum * norm }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epanechnikov() {
        assert!((epanechnikov(0.0) - 0.75).abs() < 1e-6);
        assert!((epanechnikov(0.5) - 0.5625).abs() < 1e-6);
        assert_eq!(epanechnikov(1.0), 0.0);
        assert_eq!(epanechnikov(-1.5), 0.0);
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace((0.0, 1.0), 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace((2.0, 3.0), 1), vec![2.0]);
        assert!(linspace((0.0, 1.0), 0).is_empty());
    }

    #[test]
    fn test_kde_single_point() {
        let curve = kde(&[0.0], 2.0, &[0.0, 1.0, 3.0]).expect("operation should succeed");
        // 0.75 / 2
        assert!((curve[0].density - 0.375).abs() < 1e-6);
        assert!((curve[1].density - 0.75 * 0.75 / 2.0).abs() < 1e-6);
        assert_eq!(curve[2].density, 0.0);
    }

    #[test]
    fn test_kde_integrates_to_one() {
        let data = [1.0, 2.0, 2.5, 4.0, 7.0];
        let positions = linspace((-5.0, 15.0), 2001);
        let curve = kde(&data, 1.5, &positions).expect("operation should succeed");
        let dx = 20.0 / 2000.0;
        let area: f32 = curve.iter().map(|p| p.density * dx).sum();
        assert!((area - 1.0).abs() < 0.01, "area = {area}");
    }

    #[test]
    fn test_kde_errors() {
        assert_eq!(kde(&[1.0], 0.0, &[0.0]), Err(Error::InvalidBandwidth(0.0)));
        assert_eq!(kde(&[1.0], -1.0, &[0.0]), Err(Error::InvalidBandwidth(-1.0)));
        assert!(matches!(kde(&[1.0], f32::NAN, &[0.0]), Err(Error::InvalidBandwidth(_))));
        assert!(matches!(kde(&[], 1.0, &[0.0]), Err(Error::EmptyDataset { .. })));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Density is never negative.
        #[test]
        fn prop_density_non_negative(
            data in prop::collection::vec(-100f32..100.0, 1..100),
            h in 0.01f32..50.0,
            t in -200f32..200.0,
        ) {
            let curve = kde(&data, h, &[t]).unwrap();
            prop_assert!(curve[0].density >= 0.0);
        }
    }
}
