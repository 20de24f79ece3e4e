//! Empirical cumulative distribution.

use serde::{Deserialize, Serialize};

use super::sorted_copy;
use crate::error::Result;

/// One step of an empirical CDF.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcdfStep {
    /// Observation value.
    pub value: f32,
    /// Fraction of observations `<=` this one in sort order, `(i + 1) / n`.
    pub fraction: f32,
}

/// Empirical CDF of `data`: one step per observation, ascending by value.
///
/// Tied values produce one step each; the final fraction is exactly 1.
///
/// # Errors
///
/// Returns an error if `data` is empty or contains a non-finite value.
pub fn ecdf(data: &[f32]) -> Result<Vec<EcdfStep>> {
    let sorted = sorted_copy(data)?;
    let n = sorted.len() as f32;
    Ok(sorted
        .into_iter()
        .enumerate()
        .map(|(i, value)| EcdfStep { value, fraction: (i + 1) as f32 / n })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecdf_steps() {
        let steps = ecdf(&[3.0, 1.0, 2.0, 2.0]).expect("operation should succeed");
        let values: Vec<f32> = steps.iter().map(|s| s.value).collect();
        let fractions: Vec<f32> = steps.iter().map(|s| s.fraction).collect();
        assert_eq!(values, vec![1.0, 2.0, 2.0, 3.0]);
        assert_eq!(fractions, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_ecdf_empty() {
        assert!(ecdf(&[]).is_err());
    }
}
