//! Chart catalog and dispatch.
//!
//! The catalog is a closed table: one [`Recipe`] per [`ChartKind`] naming
//! the dataset shape it consumes, the transforms and scales it runs, the
//! marks it emits and the parameters it reads. [`compute_scene`] validates
//! a dataset against the row and then runs the recipe.
//!
//! # Example
//!
//! ```
//! use trueno_charts::prelude::*;
//!
//! let data = Dataset::named([("A", 30.0), ("B", 80.0), ("C", 45.0)]);
//! let scene = compute_scene(&data, ChartKind::Bar, &ChartParams::default()).unwrap();
//! assert_eq!(scene.rects(Layer::Fill).count(), 3);
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::charts::{bivariate, categorical, discrete, distribution, stem_leaf};
use crate::config::ChartParams;
use crate::dataset::{Dataset, DatasetShape, NamedValue, XyDatum};
use crate::error::{Error, Result};
use crate::jitter::{JitterSource, Xorshift64};
use crate::scene::Scene;

/// Every supported chart kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Vertical bars over named categories.
    Bar,
    /// Polyline through `{x, y}` records.
    Line,
    /// Circles at `{x, y}` records.
    Scatter,
    /// Wedges proportional to named values.
    Pie,
    /// Filled region under `{x, y}` records.
    Area,
    /// Counts of binned observations.
    Histogram,
    /// Kernel density curve.
    Kde,
    /// Short ticks at each observation.
    Rug,
    /// Box-and-whisker summary.
    BoxPlot,
    /// Mirrored density.
    Violin,
    /// Violin with one line per observation and a mean line.
    Bean,
    /// Cleveland dot plot over named categories.
    DotPlot,
    /// Jittered points along a value axis.
    StripPlot,
    /// Stem-and-leaf text display.
    StemLeaf,
    /// Empirical cumulative distribution.
    Ecdf,
    /// Quantile-quantile comparison of two samples.
    QqPlot,
    /// Bars of distinct-value counts.
    DiscreteBar,
    /// Lollipops of distinct-value counts.
    DotChart,
    /// Counts by descending frequency with a cumulative line.
    Pareto,
    /// Polyline through distinct-value counts.
    FrequencyPolygon,
    /// Stem-and-leaf with one glyph per leaf.
    DiscreteStemLeaf,
    /// Vertical spikes at distinct values.
    SpikePlot,
}

impl ChartKind {
    /// All kinds in catalog order.
    pub const ALL: [Self; 22] = [
        Self::Bar,
        Self::Line,
        Self::Scatter,
        Self::Pie,
        Self::Area,
        Self::Histogram,
        Self::Kde,
        Self::Rug,
        Self::BoxPlot,
        Self::Violin,
        Self::Bean,
        Self::DotPlot,
        Self::StripPlot,
        Self::StemLeaf,
        Self::Ecdf,
        Self::QqPlot,
        Self::DiscreteBar,
        Self::DotChart,
        Self::Pareto,
        Self::FrequencyPolygon,
        Self::DiscreteStemLeaf,
        Self::SpikePlot,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::Pie => "pie",
            Self::Area => "area",
            Self::Histogram => "histogram",
            Self::Kde => "kde",
            Self::Rug => "rug",
            Self::BoxPlot => "box",
            Self::Violin => "violin",
            Self::Bean => "bean",
            Self::DotPlot => "dot",
            Self::StripPlot => "strip",
            Self::StemLeaf => "stem-leaf",
            Self::Ecdf => "ecdf",
            Self::QqPlot => "qq",
            Self::DiscreteBar => "discrete-bar",
            Self::DotChart => "dot-chart",
            Self::Pareto => "pareto",
            Self::FrequencyPolygon => "frequency-polygon",
            Self::DiscreteStemLeaf => "discrete-stem-leaf",
            Self::SpikePlot => "spike",
        }
    }

    /// The catalog row for this kind.
    #[must_use]
    pub fn recipe(self) -> &'static Recipe {
        &CATALOG[self as usize]
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = Error;

    /// Case-insensitive; `_` and spaces are read as `-`.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        if let Some(kind) = Self::ALL.into_iter().find(|k| k.name() == key) {
            return Ok(kind);
        }
        match key.as_str() {
            "box-plot" | "boxplot" => Ok(Self::BoxPlot),
            "dot-plot" | "cleveland" => Ok(Self::DotPlot),
            "strip-plot" => Ok(Self::StripPlot),
            "stem-and-leaf" => Ok(Self::StemLeaf),
            "qq-plot" => Ok(Self::QqPlot),
            "lollipop" => Ok(Self::DotChart),
            "density" => Ok(Self::Kde),
            "spike-plot" => Ok(Self::SpikePlot),
            _ => Err(Error::UnknownChartKind(s.to_string())),
        }
    }
}

/// A statistical transform a recipe runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Raw observations used directly.
    Identity,
    /// Minimum and maximum.
    Extent,
    /// Angular pie layout.
    PieLayout,
    /// Round-boundary binning.
    Bin,
    /// Kernel density estimate.
    Density,
    /// Quartiles, whiskers and outliers.
    Quantiles,
    /// Arithmetic mean.
    Mean,
    /// Random horizontal offsets.
    Jitter,
    /// Stem-and-leaf grouping.
    StemLeaf,
    /// Empirical CDF.
    Ecdf,
    /// Paired quantiles.
    QqPairs,
    /// Distinct-value counts.
    Count,
    /// Counts by descending frequency with running totals.
    Pareto,
}

/// A scale a recipe builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    /// Linear scale over exact bounds.
    Linear,
    /// Linear scale over bounds rounded to the tick increment.
    NiceLinear,
    /// Band scale over categories.
    Band,
    /// Ordinal color scale.
    OrdinalColor,
}

/// A primitive a recipe emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Rectangle.
    Rect,
    /// Circle.
    Circle,
    /// Line segment.
    Line,
    /// Path.
    Path,
    /// Text.
    Text,
}

/// A parameter a recipe reads from [`ChartParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// Target bin count.
    Bins,
    /// Kernel bandwidth.
    Bandwidth,
    /// Box width.
    BoxWidth,
    /// Strip plot jitter width.
    JitterWidth,
    /// Jitter seed.
    Seed,
}

impl Param {
    /// Parameter name as it appears in configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bins => "bins",
            Self::Bandwidth => "bandwidth",
            Self::BoxWidth => "box_width",
            Self::JitterWidth => "jitter_width",
            Self::Seed => "seed",
        }
    }
}

/// A parameter and whether the recipe requires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// The parameter.
    pub param: Param,
    /// True when there is no default.
    pub required: bool,
}

const fn optional(param: Param) -> ParamSpec {
    ParamSpec { param, required: false }
}

const fn required(param: Param) -> ParamSpec {
    ParamSpec { param, required: true }
}

/// One catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    /// Kind this row describes.
    pub kind: ChartKind,
    /// Dataset shape consumed.
    pub shape: DatasetShape,
    /// Fewest observations accepted (per sample for paired data).
    pub min_observations: usize,
    /// Transforms, in the order they run.
    pub transforms: &'static [Transform],
    /// Scales built.
    pub scales: &'static [ScaleKind],
    /// Primitives emitted.
    pub marks: &'static [Mark],
    /// Parameters read.
    pub params: &'static [ParamSpec],
}

impl Recipe {
    /// True when the recipe runs `transform`.
    #[must_use]
    pub fn uses(&self, transform: Transform) -> bool {
        self.transforms.contains(&transform)
    }

    /// Check `dataset` and `params` against this row.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyDataset`] when there are too few observations (checked
    /// first, so an empty dataset of any shape reports emptiness),
    /// [`Error::DatasetShape`] for the wrong shape, and
    /// [`Error::MissingParameter`], [`Error::InvalidBandwidth`] or
    /// [`Error::InvalidParameter`] for parameter problems.
    pub fn validate(&self, dataset: &Dataset, params: &ChartParams) -> Result<()> {
        let actual = dataset.len();
        if actual < self.min_observations {
            return Err(Error::EmptyDataset { required: self.min_observations, actual });
        }
        if dataset.shape() != self.shape {
            return Err(Error::DatasetShape {
                kind: self.kind.name(),
                expected: self.shape.name(),
                actual: dataset.shape().name(),
            });
        }
        for spec in self.params {
            self.validate_param(*spec, params)?;
        }
        Ok(())
    }

    fn validate_param(&self, spec: ParamSpec, params: &ChartParams) -> Result<()> {
        let name = spec.param.name();
        match spec.param {
            Param::Bins => {
                if params.bins == Some(0) {
                    return Err(Error::InvalidParameter {
                        name,
                        reason: "must be at least 1".to_string(),
                    });
                }
            }
            Param::Bandwidth => match params.bandwidth {
                None if spec.required => {
                    return Err(Error::MissingParameter { kind: self.kind.name(), name })
                }
                Some(h) if !(h > 0.0 && h.is_finite()) => return Err(Error::InvalidBandwidth(h)),
                _ => {}
            },
            Param::BoxWidth => {
                if !(params.box_width > 0.0 && params.box_width.is_finite()) {
                    let reason = format!("{} is not positive", params.box_width);
                    return Err(Error::InvalidParameter { name, reason });
                }
            }
            Param::JitterWidth => {
                if !(params.jitter_width >= 0.0 && params.jitter_width.is_finite()) {
                    let reason = format!("{} is negative", params.jitter_width);
                    return Err(Error::InvalidParameter { name, reason });
                }
            }
            Param::Seed => {}
        }
        Ok(())
    }
}

use Mark as M;
use ScaleKind as S;
use Transform as T;

const VALUES: DatasetShape = DatasetShape::Values;

const fn row(
    kind: ChartKind,
    shape: DatasetShape,
    transforms: &'static [Transform],
    scales: &'static [ScaleKind],
    marks: &'static [Mark],
    params: &'static [ParamSpec],
) -> Recipe {
    Recipe { kind, shape, min_observations: 1, transforms, scales, marks, params }
}

/// The chart catalog, indexed by `ChartKind as usize`.
pub static CATALOG: [Recipe; 22] = [
    row(
        ChartKind::Bar,
        DatasetShape::Named,
        &[T::Identity, T::Extent],
        &[S::Band, S::NiceLinear],
        &[M::Rect],
        &[],
    ),
    row(
        ChartKind::Line,
        DatasetShape::Points,
        &[T::Extent],
        &[S::Linear, S::Linear],
        &[M::Path],
        &[],
    ),
    row(
        ChartKind::Scatter,
        DatasetShape::Points,
        &[T::Extent],
        &[S::Linear, S::Linear],
        &[M::Circle],
        &[],
    ),
    row(ChartKind::Pie, DatasetShape::Named, &[T::PieLayout], &[S::OrdinalColor], &[M::Path], &[]),
    row(
        ChartKind::Area,
        DatasetShape::Points,
        &[T::Extent],
        &[S::Linear, S::Linear],
        &[M::Path],
        &[],
    ),
    row(
        ChartKind::Histogram,
        VALUES,
        &[T::Extent, T::Bin],
        &[S::Linear, S::NiceLinear],
        &[M::Rect],
        &[optional(Param::Bins)],
    ),
    row(
        ChartKind::Kde,
        VALUES,
        &[T::Extent, T::Density],
        &[S::NiceLinear, S::NiceLinear],
        &[M::Path],
        &[required(Param::Bandwidth)],
    ),
    row(ChartKind::Rug, VALUES, &[T::Identity, T::Extent], &[S::NiceLinear], &[M::Line], &[]),
    row(
        ChartKind::BoxPlot,
        VALUES,
        &[T::Extent, T::Quantiles],
        &[S::NiceLinear],
        &[M::Rect, M::Line, M::Circle],
        &[optional(Param::BoxWidth)],
    ),
    row(
        ChartKind::Violin,
        VALUES,
        &[T::Extent, T::Density, T::Quantiles],
        &[S::NiceLinear, S::Linear],
        &[M::Path, M::Line],
        &[required(Param::Bandwidth), optional(Param::BoxWidth)],
    ),
    row(
        ChartKind::Bean,
        VALUES,
        &[T::Extent, T::Density, T::Mean],
        &[S::NiceLinear, S::Linear],
        &[M::Path, M::Line],
        &[required(Param::Bandwidth), optional(Param::BoxWidth)],
    ),
    row(
        ChartKind::DotPlot,
        DatasetShape::Named,
        &[T::Identity, T::Extent],
        &[S::Band, S::NiceLinear],
        &[M::Line, M::Circle],
        &[],
    ),
    row(
        ChartKind::StripPlot,
        VALUES,
        &[T::Extent, T::Jitter],
        &[S::NiceLinear],
        &[M::Circle],
        &[optional(Param::JitterWidth), optional(Param::Seed)],
    ),
    row(ChartKind::StemLeaf, VALUES, &[T::StemLeaf], &[], &[M::Text, M::Line], &[]),
    row(
        ChartKind::Ecdf,
        VALUES,
        &[T::Ecdf, T::Extent],
        &[S::NiceLinear, S::Linear],
        &[M::Path],
        &[],
    ),
    Recipe {
        kind: ChartKind::QqPlot,
        shape: DatasetShape::Paired,
        min_observations: 2,
        transforms: &[T::QqPairs, T::Extent],
        scales: &[S::NiceLinear, S::NiceLinear],
        marks: &[M::Line, M::Circle],
        params: &[],
    },
    row(
        ChartKind::DiscreteBar,
        VALUES,
        &[T::Count],
        &[S::Band, S::NiceLinear],
        &[M::Rect, M::Text],
        &[],
    ),
    row(
        ChartKind::DotChart,
        VALUES,
        &[T::Count],
        &[S::Band, S::NiceLinear],
        &[M::Line, M::Circle],
        &[],
    ),
    row(
        ChartKind::Pareto,
        VALUES,
        &[T::Pareto],
        &[S::Band, S::NiceLinear, S::Linear],
        &[M::Rect, M::Path, M::Circle, M::Text],
        &[],
    ),
    row(
        ChartKind::FrequencyPolygon,
        VALUES,
        &[T::Count],
        &[S::Linear, S::NiceLinear],
        &[M::Path, M::Circle],
        &[],
    ),
    row(ChartKind::DiscreteStemLeaf, VALUES, &[T::StemLeaf], &[], &[M::Text, M::Line], &[]),
    row(ChartKind::SpikePlot, VALUES, &[T::Count], &[S::Linear, S::NiceLinear], &[M::Line], &[]),
];

/// Compute the scene for `dataset` drawn as `kind`.
///
/// The strip plot draws its jitter from a generator seeded with
/// `params.seed`, or from OS entropy when no seed is given.
///
/// # Errors
///
/// Returns the first validation, transform or scale error encountered.
pub fn compute_scene(dataset: &Dataset, kind: ChartKind, params: &ChartParams) -> Result<Scene> {
    let recipe = kind.recipe();
    recipe.validate(dataset, params)?;
    let mut source = match params.seed {
        Some(seed) => Xorshift64::new(seed),
        None if recipe.uses(Transform::Jitter) => Xorshift64::from_entropy()?,
        None => Xorshift64::default(),
    };
    compute_scene_with(dataset, kind, params, &mut source)
}

/// Compute the scene with an explicit jitter source.
///
/// # Errors
///
/// Returns the first validation, transform or scale error encountered.
pub fn compute_scene_with(
    dataset: &Dataset,
    kind: ChartKind,
    params: &ChartParams,
    jitter: &mut dyn JitterSource,
) -> Result<Scene> {
    let recipe = kind.recipe();
    recipe.validate(dataset, params)?;
    debug!(kind = kind.name(), observations = dataset.len(), "computing scene");

    let scene = match kind {
        ChartKind::Bar => categorical::bar(named(dataset, recipe)?, params),
        ChartKind::Pie => categorical::pie(named(dataset, recipe)?, params),
        ChartKind::DotPlot => categorical::dot_plot(named(dataset, recipe)?, params),
        ChartKind::Line => bivariate::line(points(dataset, recipe)?, params),
        ChartKind::Scatter => bivariate::scatter(points(dataset, recipe)?, params),
        ChartKind::Area => bivariate::area(points(dataset, recipe)?, params),
        ChartKind::Histogram => distribution::histogram(values(dataset, recipe)?, params),
        ChartKind::Kde => {
            distribution::kde(values(dataset, recipe)?, bandwidth(kind, params)?, params)
        }
        ChartKind::Rug => distribution::rug(values(dataset, recipe)?, params),
        ChartKind::BoxPlot => distribution::box_plot(values(dataset, recipe)?, params),
        ChartKind::Violin => {
            distribution::violin(values(dataset, recipe)?, bandwidth(kind, params)?, params)
        }
        ChartKind::Bean => {
            distribution::bean(values(dataset, recipe)?, bandwidth(kind, params)?, params)
        }
        ChartKind::StripPlot => distribution::strip(values(dataset, recipe)?, params, jitter),
        ChartKind::Ecdf => distribution::ecdf(values(dataset, recipe)?, params),
        ChartKind::QqPlot => {
            let (first, second) = paired(dataset, recipe)?;
            distribution::qq(first, second, params)
        }
        ChartKind::StemLeaf => stem_leaf::stem_leaf(values(dataset, recipe)?, params),
        ChartKind::DiscreteStemLeaf => {
            stem_leaf::discrete_stem_leaf(values(dataset, recipe)?, params)
        }
        ChartKind::DiscreteBar => discrete::discrete_bar(values(dataset, recipe)?, params),
        ChartKind::DotChart => discrete::dot_chart(values(dataset, recipe)?, params),
        ChartKind::Pareto => discrete::pareto(values(dataset, recipe)?, params),
        ChartKind::FrequencyPolygon => {
            discrete::frequency_polygon(values(dataset, recipe)?, params)
        }
        ChartKind::SpikePlot => discrete::spike(values(dataset, recipe)?, params),
    }?;

    debug!(kind = kind.name(), primitives = scene.len(), "scene computed");
    Ok(scene)
}

fn shape_error(dataset: &Dataset, recipe: &Recipe) -> Error {
    Error::DatasetShape {
        kind: recipe.kind.name(),
        expected: recipe.shape.name(),
        actual: dataset.shape().name(),
    }
}

fn values<'a>(dataset: &'a Dataset, recipe: &Recipe) -> Result<&'a [f32]> {
    match dataset {
        Dataset::Values(v) => Ok(v),
        _ => Err(shape_error(dataset, recipe)),
    }
}

fn named<'a>(dataset: &'a Dataset, recipe: &Recipe) -> Result<&'a [NamedValue]> {
    match dataset {
        Dataset::Named(v) => Ok(v),
        _ => Err(shape_error(dataset, recipe)),
    }
}

fn points<'a>(dataset: &'a Dataset, recipe: &Recipe) -> Result<&'a [XyDatum]> {
    match dataset {
        Dataset::Points(v) => Ok(v),
        _ => Err(shape_error(dataset, recipe)),
    }
}

fn paired<'a>(dataset: &'a Dataset, recipe: &Recipe) -> Result<(&'a [f32], &'a [f32])> {
    match dataset {
        Dataset::Paired { first, second } => Ok((first, second)),
        _ => Err(shape_error(dataset, recipe)),
    }
}

fn bandwidth(kind: ChartKind, params: &ChartParams) -> Result<f32> {
    params
        .bandwidth
        .ok_or(Error::MissingParameter { kind: kind.name(), name: Param::Bandwidth.name() })
}
