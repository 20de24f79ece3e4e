//! Pie layout: values to angular slices.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use super::validate;
use crate::error::{Error, Result};

/// Angular extent of one value, in radians clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    /// Index of the value in the input.
    pub index: usize,
    /// The value itself.
    pub value: f32,
    /// Start angle.
    pub start_angle: f32,
    /// End angle.
    pub end_angle: f32,
}

/// Lay values out around a circle.
///
/// Slices are returned in input order, but angles are assigned largest value
/// first (ties in input order), so the biggest slice starts at 12 o'clock.
/// If every value is zero all slices are empty.
///
/// # Errors
///
/// Returns [`Error::EmptyDataset`] for no values and [`Error::InvalidDomain`]
/// for a negative or non-finite value.
pub fn pie_slices(values: &[f32]) -> Result<Vec<PieSlice>> {
    validate(values)?;
    if let Some(v) = values.iter().find(|v| **v < 0.0) {
        return Err(Error::domain(format!("negative pie value {v}")));
    }

    let total: f32 = values.iter().sum();
    let k = if total > 0.0 { TAU / total } else { 0.0 };

    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let mut slices: Vec<PieSlice> = values
        .iter()
        .enumerate()
        .map(|(index, &value)| PieSlice { index, value, start_angle: 0.0, end_angle: 0.0 })
        .collect();

    let mut angle = 0.0;
    for idx in order {
        let end = angle + values[idx] * k;
        slices[idx].start_angle = angle;
        slices[idx].end_angle = end;
        angle = end;
    }
    Ok(slices)
}
