//! # Trueno-Charts
//!
//! Statistical chart scene engine: turns raw observations into an ordered,
//! layered description of drawing primitives.
//!
//! Built on the [trueno](https://crates.io/crates/trueno) core library for
//! its SIMD reductions, trueno-charts covers the classic statistical chart
//! catalog (bar, histogram, density, box, violin, ECDF, Q-Q, Pareto,
//! stem-and-leaf and more) without touching any rendering API. A renderer
//! (SVG, raster, terminal) consumes the resulting [`Scene`].
//!
//! ## Pipeline
//!
//! ```text
//! Dataset -> ChartKind recipe -> transforms -> scales -> Scene
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_charts::prelude::*;
//!
//! let data = Dataset::values(&[2.0, 3.5, 3.9, 4.1, 5.0, 7.2, 9.8]);
//! let params = ChartParams::default().bins(5);
//! let scene = compute_scene(&data, ChartKind::Histogram, &params)?;
//!
//! for primitive in scene.layer(Layer::Fill) {
//!     // hand each bar to a renderer
//!     let _ = primitive;
//! }
//! # Ok::<(), trueno_charts::Error>(())
//! ```
//!
//! ## References
//!
//! - Wilkinson, L. (2005). *The Grammar of Graphics*. Springer.
//! - Tukey, J. W. (1977). *Exploratory Data Analysis*. Addison-Wesley.
//! - Silverman, B. W. (1986). *Density Estimation for Statistics and Data Analysis*.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color values and the categorical palette.
pub mod color;

/// Geometric primitives (points, lines, rectangles).
pub mod geometry;

/// Scale functions for data-to-visual mappings.
pub mod scale;

/// Statistical transforms.
pub mod stats;

// ============================================================================
// Pipeline Modules
// ============================================================================

/// Input datasets.
pub mod dataset;

/// Scene description output.
pub mod scene;

/// Chart parameters and YAML configuration.
pub mod config;

/// Jitter randomness for strip plots.
pub mod jitter;

/// Chart catalog and dispatch.
pub mod catalog;

mod charts;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for chart pipeline operations.
pub mod error;

pub use catalog::{compute_scene, compute_scene_with, ChartKind};
pub use error::{Error, Result};
pub use scene::Scene;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_charts::prelude::*;
/// ```
pub mod prelude {
    pub use batuta_common::display::WithDimensions;
    pub use crate::catalog::{compute_scene, compute_scene_with, ChartKind, Recipe};
    pub use crate::color::Rgba;
    pub use crate::config::{ChartConfig, ChartParams, Margin};
    pub use crate::dataset::{Dataset, DatasetShape, NamedValue, XyDatum};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Line, Point, Rect};
    pub use crate::jitter::{JitterSource, Xorshift64};
    pub use crate::scale::{BandScale, LinearScale, OrdinalColorScale, Scale};
    pub use crate::scene::{Anchor, Curve, Layer, Primitive, Scene, Style};
}
