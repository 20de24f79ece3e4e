//! Input datasets.
//!
//! A dataset is caller-owned and read-only to the pipeline: every transform
//! that needs sorted data works on its own copy.

use serde::{Deserialize, Serialize};

/// A categorical observation (`{name, value}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    /// Category key.
    pub name: String,
    /// Observed value.
    pub value: f32,
}

impl NamedValue {
    /// Create a named value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: f32) -> Self {
        Self { name: name.into(), value }
    }
}

/// A bivariate observation (`{x, y}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XyDatum {
    /// X value.
    pub x: f32,
    /// Y value.
    pub y: f32,
}

impl XyDatum {
    /// Create an x/y observation.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The shape of a dataset, as required by a chart recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetShape {
    /// Scalar numeric sequence.
    Values,
    /// Sequence of `{name, value}` records.
    Named,
    /// Sequence of `{x, y}` records.
    Points,
    /// Two independent scalar samples.
    Paired,
}

impl DatasetShape {
    /// Human-readable shape name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Values => "values",
            Self::Named => "named",
            Self::Points => "points",
            Self::Paired => "paired",
        }
    }
}

/// An ordered sequence of raw observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// Scalar observations (distribution and discrete charts).
    Values(Vec<f32>),
    /// Categorical records (bar, pie, dot plot).
    Named(Vec<NamedValue>),
    /// Bivariate records (line, scatter, area).
    Points(Vec<XyDatum>),
    /// Two samples compared against each other (Q-Q plot).
    Paired {
        /// Sample mapped to the x axis.
        first: Vec<f32>,
        /// Sample mapped to the y axis.
        second: Vec<f32>,
    },
}

impl Dataset {
    /// Scalar dataset from a slice.
    #[must_use]
    pub fn values(values: &[f32]) -> Self {
        Self::Values(values.to_vec())
    }

    /// Categorical dataset from `(name, value)` pairs.
    #[must_use]
    pub fn named<'a>(records: impl IntoIterator<Item = (&'a str, f32)>) -> Self {
        Self::Named(records.into_iter().map(|(name, value)| NamedValue::new(name, value)).collect())
    }

    /// Bivariate dataset from `(x, y)` pairs.
    #[must_use]
    pub fn points(records: impl IntoIterator<Item = (f32, f32)>) -> Self {
        Self::Points(records.into_iter().map(|(x, y)| XyDatum::new(x, y)).collect())
    }

    /// Two-sample dataset.
    #[must_use]
    pub fn paired(first: &[f32], second: &[f32]) -> Self {
        Self::Paired { first: first.to_vec(), second: second.to_vec() }
    }

    /// Shape of this dataset.
    #[must_use]
    pub fn shape(&self) -> DatasetShape {
        match self {
            Self::Values(_) => DatasetShape::Values,
            Self::Named(_) => DatasetShape::Named,
            Self::Points(_) => DatasetShape::Points,
            Self::Paired { .. } => DatasetShape::Paired,
        }
    }

    /// Number of observations; for paired data, the smaller sample size.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Values(v) => v.len(),
            Self::Named(v) => v.len(),
            Self::Points(v) => v.len(),
            Self::Paired { first, second } => first.len().min(second.len()),
        }
    }

    /// True when there are no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_constructors() {
        let named = Dataset::named([("A", 30.0), ("B", 80.0)]);
        assert_eq!(named.shape(), DatasetShape::Named);
        assert_eq!(named.len(), 2);

        let points = Dataset::points([(1.0, 10.0)]);
        assert_eq!(points.shape(), DatasetShape::Points);
        assert_eq!(points, Dataset::Points(vec![XyDatum::new(1.0, 10.0)]));
    }

    #[test]
    fn test_paired_len_is_min() {
        let paired = Dataset::paired(&[1.0, 2.0, 3.0], &[4.0, 5.0]);
        assert_eq!(paired.len(), 2);
        assert!(!paired.is_empty());
        assert!(Dataset::paired(&[1.0], &[]).is_empty());
    }

    #[test]
    fn test_shape_names() {
        assert_eq!(DatasetShape::Values.name(), "values");
        assert_eq!(DatasetShape::Paired.name(), "paired");
    }

    #[test]
    fn test_values_copies_input() {
        let source = vec![3.0, 1.0, 2.0];
        let dataset = Dataset::values(&source);
        assert_eq!(dataset, Dataset::Values(vec![3.0, 1.0, 2.0]));
    }
}
