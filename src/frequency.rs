//! Cumulative frequency tables.
//!
//! A [`FrequencyTable`] is the running prefix sum of a weight list, kept in
//! input order. Lookups (see [`crate::picker`]) draw one uniform value over
//! the total and return the first entry whose cumulative weight reaches it,
//! so the order of the input decides tie-breaks.

use crate::error::{Result, SamplingError};

/// An item with a non-negative weight.
///
/// Weights are conventionally "per hundred" (see
/// [`crate::proportional::sample_proportional`]) but nothing here requires
/// them to sum to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedItem<T> {
    pub item: T,
    pub weight: f64,
}

impl<T> WeightedItem<T> {
    pub fn new(item: T, weight: f64) -> Self {
        Self { item, weight }
    }
}

impl<T> From<(T, f64)> for WeightedItem<T> {
    fn from((item, weight): (T, f64)) -> Self {
        Self { item, weight }
    }
}

/// One row of a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cumulative<T> {
    pub item: T,
    /// Sum of this item's weight and all weights before it.
    pub cumulative_weight: f64,
}

/// Ascending cumulative-weight table, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<T> {
    entries: Vec<Cumulative<T>>,
}

impl<T> FrequencyTable<T> {
    /// Build from weighted items in iteration order.
    ///
    /// # Errors
    ///
    /// - [`SamplingError::NonFiniteWeight`] for a NaN or infinite weight.
    /// - [`SamplingError::NegativeWeight`] for a weight below zero.
    /// - [`SamplingError::NonFiniteWeight`] carrying the running total when
    ///   finite weights sum past `f64::MAX`.
    ///
    /// An empty input (or all-zero weights) builds fine; it only fails when
    /// something is picked from it.
    pub fn build<I>(items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<WeightedItem<T>>,
    {
        let items = items.into_iter();
        let mut entries = Vec::with_capacity(items.size_hint().0);
        let mut acc = 0.0_f64;

        for (index, wi) in items.enumerate() {
            let WeightedItem { item, weight } = wi.into();
            check_weight(index, weight)?;
            acc += weight;
            if !acc.is_finite() {
                return Err(SamplingError::NonFiniteWeight { index, weight: acc });
            }
            entries.push(Cumulative {
                item,
                cumulative_weight: acc,
            });
        }

        Ok(Self { entries })
    }

    /// Last cumulative weight, or `0.0` for an empty table.
    pub fn total(&self) -> f64 {
        self.entries.last().map_or(0.0, |e| e.cumulative_weight)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Cumulative<T>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cumulative<T>> {
        self.entries.iter()
    }
}

impl<'a, T> IntoIterator for &'a FrequencyTable<T> {
    type Item = &'a Cumulative<T>;
    type IntoIter = std::slice::Iter<'a, Cumulative<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

pub(crate) fn check_weight(index: usize, weight: f64) -> Result<()> {
    if !weight.is_finite() {
        return Err(SamplingError::NonFiniteWeight { index, weight });
    }
    if weight < 0.0 {
        return Err(SamplingError::NegativeWeight { index, weight });
    }
    Ok(())
}
