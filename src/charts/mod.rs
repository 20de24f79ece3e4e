//! Chart recipes: scene synthesis for each chart kind.
//!
//! Each recipe runs its transforms, builds scales over the plot area and
//! emits primitives layer by layer. Dispatch from a [`ChartKind`] lives in
//! the catalog.
//!
//! [`ChartKind`]: crate::catalog::ChartKind

pub(crate) mod axis;
pub(crate) mod bivariate;
pub(crate) mod categorical;
pub(crate) mod discrete;
pub(crate) mod distribution;
pub(crate) mod frame;
pub(crate) mod stem_leaf;
