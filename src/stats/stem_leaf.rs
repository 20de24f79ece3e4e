//! Stem-and-leaf grouping.

use serde::{Deserialize, Serialize};

use super::sorted_copy;
use crate::error::Result;

/// A stem and its leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stem {
    /// `floor(value / unit)`.
    pub stem: i64,
    /// `value - stem * unit` for each observation on this stem, ascending.
    pub leaves: Vec<f32>,
}

/// Observations grouped by stem, ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StemLeafGroup {
    /// Stem unit: 10, 100 or 1000.
    pub unit: f32,
    /// Stems in ascending order.
    pub stems: Vec<Stem>,
}

impl StemLeafGroup {
    /// Leaves on `stem`, if that stem occurs.
    #[must_use]
    pub fn leaves(&self, stem: i64) -> Option<&[f32]> {
        self.stems.iter().find(|s| s.stem == stem).map(|s| s.leaves.as_slice())
    }
}

/// Stem unit for data spanning `range`.
#[must_use]
pub fn stem_unit(range: f32) -> f32 {
    if range <= 100.0 {
        10.0
    } else if range <= 1000.0 {
        100.0
    } else {
        1000.0
    }
}

/// Group `data` into stems and leaves.
///
/// Negative values take the stem below (`-7` is stem `-1`, leaf `3`), so
/// every leaf lies in `[0, unit)`.
///
/// # Errors
///
/// Returns an error if `data` is empty or contains a non-finite value.
pub fn stem_leaf(data: &[f32]) -> Result<StemLeafGroup> {
    let sorted = sorted_copy(data)?;
    let unit = stem_unit(sorted[sorted.len() - 1] - sorted[0]);

    let mut stems: Vec<Stem> = Vec::new();
    for value in sorted {
        let (stem, leaf) = split(value, unit);
        match stems.last_mut() {
            Some(last) if last.stem == stem => last.leaves.push(leaf),
            _ => stems.push(Stem { stem, leaves: vec![leaf] }),
        }
    }
    Ok(StemLeafGroup { unit, stems })
}

/// Split one value into its stem and a leaf in `[0, unit)`.
///
/// Values within rounding distance of a stem boundary snap onto that
/// boundary (`-1e-8` is stem `0`, leaf `0`).
fn split(value: f32, unit: f32) -> (i64, f32) {
    let stem = (value / unit).floor();
    let leaf = value - stem * unit;
    if leaf >= unit {
        (stem as i64 + 1, 0.0)
    } else if leaf < 0.0 {
        (stem as i64, 0.0)
    } else {
        (stem as i64, leaf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_leaf_tens() {
        let group = stem_leaf(&[23.0, 25.0, 27.0, 31.0, 33.0]).expect("operation should succeed");
        assert_eq!(group.unit, 10.0);
        assert_eq!(group.stems.len(), 2);
        assert_eq!(group.leaves(2), Some(&[3.0, 5.0, 7.0][..]));
        assert_eq!(group.leaves(3), Some(&[1.0, 3.0][..]));
        assert_eq!(group.leaves(4), None);
    }

    #[test]
    fn test_stem_unit_thresholds() {
        assert_eq!(stem_unit(0.0), 10.0);
        assert_eq!(stem_unit(100.0), 10.0);
        assert_eq!(stem_unit(100.5), 100.0);
        assert_eq!(stem_unit(1000.0), 100.0);
        assert_eq!(stem_unit(5000.0), 1000.0);
    }

    #[test]
    fn test_stem_leaf_hundreds() {
        let group = stem_leaf(&[120.0, 345.0, 399.0]).expect("operation should succeed");
        assert_eq!(group.unit, 100.0);
        assert_eq!(group.leaves(1), Some(&[20.0][..]));
        assert_eq!(group.leaves(3), Some(&[45.0, 99.0][..]));
    }

    #[test]
    fn test_stem_leaf_negative() {
        let group = stem_leaf(&[-7.0, 4.0]).expect("operation should succeed");
        assert_eq!(group.leaves(-1), Some(&[3.0][..]));
        assert_eq!(group.leaves(0), Some(&[4.0][..]));
    }

    #[test]
    fn test_stem_leaf_tiny_negative_snaps_to_boundary() {
        let group = stem_leaf(&[-1e-8, 5.0]).expect("operation should succeed");
        assert_eq!(group.unit, 10.0);
        assert_eq!(group.stems.len(), 1);
        assert_eq!(group.leaves(0), Some(&[0.0, 5.0][..]));
        assert_eq!(group.leaves(-1), None);
    }

    #[test]
    fn test_split_keeps_leaf_below_unit() {
        assert_eq!(split(-1e-8, 10.0), (0, 0.0));
        assert_eq!(split(-7.0, 10.0), (-1, 3.0));
        assert_eq!(split(40.0, 10.0), (4, 0.0));
    }

    #[test]
    fn test_stem_leaf_unsorted_input() {
        let group = stem_leaf(&[33.0, 23.0, 31.0]).expect("operation should succeed");
        assert_eq!(group.stems[0].stem, 2);
        assert_eq!(group.leaves(3), Some(&[1.0, 3.0][..]));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every observation lands on exactly one stem, and stems ascend.
        #[test]
        fn prop_stem_leaf_partition(data in prop::collection::vec(-5000i32..5000, 1..200)) {
            let data: Vec<f32> = data.into_iter().map(|v| v as f32).collect();
            let group = stem_leaf(&data).unwrap();
            prop_assert_eq!(group.stems.iter().map(|s| s.leaves.len()).sum::<usize>(), data.len());
            for pair in group.stems.windows(2) {
                prop_assert!(pair[0].stem < pair[1].stem);
            }
            for stem in &group.stems {
                for &leaf in &stem.leaves {
                    prop_assert!(leaf >= 0.0 && leaf < group.unit);
                }
            }
        }

        /// Leaves stay in `[0, unit)` for fractional values near zero.
        #[test]
        fn prop_leaf_range_near_zero(data in prop::collection::vec(-1e-3f32..1e-3, 1..50)) {
            let group = stem_leaf(&data).unwrap();
            for stem in &group.stems {
                for &leaf in &stem.leaves {
                    prop_assert!((0.0..group.unit).contains(&leaf));
                }
            }
        }
    }
}
