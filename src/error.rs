//! Error types for chart pipeline operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a dataset into a scene.
///
/// Every error is detected synchronously during a pipeline invocation and is
/// deterministic for a given input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The dataset has fewer observations than the chart kind requires.
    #[error("Empty dataset: {required} observation(s) required, {actual} provided")]
    EmptyDataset {
        /// Minimum number of observations.
        required: usize,
        /// Number of observations supplied.
        actual: usize,
    },

    /// Non-finite or inverted domain bounds, or a non-finite observation.
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    /// Kernel bandwidth is not a positive finite number.
    #[error("Invalid bandwidth: {0} (must be > 0)")]
    InvalidBandwidth(f32),

    /// A band scale was given the same category twice.
    #[error("Duplicate category: {0:?}")]
    DuplicateCategory(String),

    /// The chart kind is not in the catalog.
    #[error("Unknown chart kind: {0:?}")]
    UnknownChartKind(String),

    /// The dataset shape does not match what the chart kind consumes.
    #[error("Chart kind {kind} expects a {expected} dataset, got {actual}")]
    DatasetShape {
        /// Chart kind name.
        kind: &'static str,
        /// Expected dataset shape.
        expected: &'static str,
        /// Supplied dataset shape.
        actual: &'static str,
    },

    /// A required chart parameter was not supplied.
    #[error("Chart kind {kind} requires parameter `{name}`")]
    MissingParameter {
        /// Chart kind name.
        kind: &'static str,
        /// Parameter name.
        name: &'static str,
    },

    /// A chart parameter is out of its valid range.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// YAML chart configuration could not be parsed.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number (1-based, 0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// OS entropy was unavailable for seeding jitter.
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidDomain`].
    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        Error::InvalidDomain(msg.into())
    }
}
