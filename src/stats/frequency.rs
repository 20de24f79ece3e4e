//! Frequency and Pareto tables for discrete data.

use serde::{Deserialize, Serialize};

use super::{smallest_gap, sorted_copy};
use crate::error::Result;

/// A distinct value and how often it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    /// Distinct observed value.
    pub value: f32,
    /// Number of occurrences.
    pub count: usize,
}

/// Counts of distinct values, ascending by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// One entry per distinct value.
    pub entries: Vec<FrequencyEntry>,
    /// Total number of observations.
    pub total: usize,
}

impl FrequencyTable {
    /// Largest count in the table.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0)
    }

    /// Smallest difference between adjacent distinct values.
    #[must_use]
    pub fn smallest_gap(&self) -> Option<f32> {
        smallest_gap(self.entries.iter().map(|e| e.value))
    }
}

/// One row of a Pareto table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParetoEntry {
    /// Distinct observed value.
    pub value: f32,
    /// Number of occurrences.
    pub count: usize,
    /// Running total of counts up to and including this row.
    pub cumulative: usize,
}

/// Frequency entries ordered by descending count, with running totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoTable {
    /// Rows, most frequent first; ties keep ascending value order.
    pub entries: Vec<ParetoEntry>,
    /// Total number of observations.
    pub total: usize,
}

/// Count distinct values of `data`.
///
/// # Errors
///
/// Returns an error if `data` is empty or contains a non-finite value.
pub fn frequency_table(data: &[f32]) -> Result<FrequencyTable> {
    let sorted = sorted_copy(data)?;
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    for value in sorted {
        match entries.last_mut() {
            Some(last) if last.value == value => last.count += 1,
            _ => entries.push(FrequencyEntry { value, count: 1 }),
        }
    }
    Ok(FrequencyTable { entries, total: data.len() })
}

/// Frequency table ordered for a Pareto chart.
///
/// # Errors
///
/// Returns an error if `data` is empty or contains a non-finite value.
pub fn pareto_table(data: &[f32]) -> Result<ParetoTable> {
    let FrequencyTable { mut entries, total } = frequency_table(data)?;
    // Stable sort: equal counts stay in ascending value order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    let mut cumulative = 0;
    let entries = entries
        .into_iter()
        .map(|e| {
            cumulative += e.count;
            ParetoEntry { value: e.value, count: e.count, cumulative }
        })
        .collect();
    Ok(ParetoTable { entries, total })
}
