//! Chart parameters and YAML chart configuration.
//!
//! Every field has a default, so an empty document is a valid
//! configuration:
//!
//! ```yaml
//! kind: histogram
//! params:
//!   width: 640
//!   bins: 12
//! ```

use batuta_common::display::WithDimensions;
use serde::{Deserialize, Serialize};

use crate::catalog::{compute_scene, ChartKind};
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::scene::Scene;

/// Space reserved around the plot area for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    /// Top margin in pixels.
    #[serde(default = "default_margin_top")]
    pub top: f32,
    /// Right margin in pixels.
    #[serde(default = "default_margin_right")]
    pub right: f32,
    /// Bottom margin in pixels.
    #[serde(default = "default_margin_bottom")]
    pub bottom: f32,
    /// Left margin in pixels.
    #[serde(default = "default_margin_left")]
    pub left: f32,
}

fn default_margin_top() -> f32 {
    20.0
}
fn default_margin_right() -> f32 {
    30.0
}
fn default_margin_bottom() -> f32 {
    30.0
}
fn default_margin_left() -> f32 {
    40.0
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: default_margin_top(),
            right: default_margin_right(),
            bottom: default_margin_bottom(),
            left: default_margin_left(),
        }
    }
}

impl Margin {
    /// Create a margin from its four sides.
    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }
}

/// Parameters shared by every chart recipe.
///
/// Recipes read only the parameters they declare; the rest are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartParams {
    /// Surface width in pixels.
    #[serde(default = "default_width")]
    pub width: f32,

    /// Surface height in pixels.
    #[serde(default = "default_height")]
    pub height: f32,

    /// Margins around the plot area.
    #[serde(default)]
    pub margin: Margin,

    /// Target histogram bin count (default 20).
    #[serde(default)]
    pub bins: Option<usize>,

    /// Kernel bandwidth, in data units, for density charts.
    #[serde(default)]
    pub bandwidth: Option<f32>,

    /// Box width for box, violin and bean plots.
    #[serde(default = "default_box_width")]
    pub box_width: f32,

    /// Horizontal spread of strip plot points.
    #[serde(default = "default_jitter_width")]
    pub jitter_width: f32,

    /// Jitter seed; OS entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_width() -> f32 {
    500.0
}
fn default_height() -> f32 {
    300.0
}
fn default_box_width() -> f32 {
    100.0
}
fn default_jitter_width() -> f32 {
    50.0
}

impl Default for ChartParams {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margin: Margin::default(),
            bins: None,
            bandwidth: None,
            box_width: default_box_width(),
            jitter_width: default_jitter_width(),
            seed: None,
        }
    }
}

impl ChartParams {
    /// Creates parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the surface size.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the margins.
    #[must_use]
    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Set the target bin count.
    #[must_use]
    pub fn bins(mut self, bins: usize) -> Self {
        self.bins = Some(bins);
        self
    }

    /// Set the kernel bandwidth.
    #[must_use]
    pub fn bandwidth(mut self, bandwidth: f32) -> Self {
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Set the box width.
    #[must_use]
    pub fn box_width(mut self, width: f32) -> Self {
        self.box_width = width;
        self
    }

    /// Set the strip plot jitter width.
    #[must_use]
    pub fn jitter_width(mut self, width: f32) -> Self {
        self.jitter_width = width;
        self
    }

    /// Fix the jitter seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses parameters from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] with the line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        parse_yaml(yaml)
    }
}

impl WithDimensions for ChartParams {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
    }
}

/// A chart kind name together with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart kind name, e.g. `"histogram"` or `"box-plot"`.
    pub kind: String,

    /// Recipe parameters.
    #[serde(default)]
    pub params: ChartParams,
}

impl ChartConfig {
    /// Configuration for `kind` with default parameters.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), params: ChartParams::default() }
    }

    /// Parses a chart configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] with the line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        parse_yaml(yaml)
    }

    /// Resolve the configured kind name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChartKind`] if the name is not in the catalog.
    pub fn chart_kind(&self) -> Result<ChartKind> {
        self.kind.parse()
    }

    /// Run the configured recipe over `dataset`.
    ///
    /// # Errors
    ///
    /// Propagates any error from kind lookup or scene computation.
    pub fn compute(&self, dataset: &Dataset) -> Result<Scene> {
        compute_scene(dataset, self.chart_kind()?, &self.params)
    }
}

impl WithDimensions for ChartConfig {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.params.set_dimensions(width, height);
    }
}

fn parse_yaml<T: serde::de::DeserializeOwned>(yaml: &str) -> Result<T> {
    serde_yaml_ng::from_str(yaml).map_err(|e| {
        let line = e.location().map(|l| l.line()).unwrap_or(0);
        Error::ConfigParse { line, message: e.to_string() }
    })
}
