//! Weighted picks from a [`FrequencyTable`].
//!
//! One draw `s` in `[0, total)`, then the first entry whose cumulative weight
//! is `>= s`. Zero-weight entries share a boundary with their predecessor, so
//! they are reachable only if `s` lands exactly on that boundary.
//!
//! The table is non-decreasing, so "first entry with `cumulative >= s`" is a
//! partition point and the lookup is a binary search rather than a scan.

use rand::Rng;

use crate::error::{Result, SamplingError};
use crate::frequency::FrequencyTable;
use crate::source::{Numeric, UniformSource};

/// Index of a weighted pick.
///
/// # Errors
///
/// [`SamplingError::InvalidWeight`] if the table total is `<= 0`
/// (including an empty table).
pub fn pick_index<T, N, R>(
    table: &FrequencyTable<T>,
    source: &mut UniformSource<'_, N, R>,
) -> Result<usize>
where
    N: Numeric,
    R: Rng + ?Sized,
{
    let total = table.total();
    if !(total > 0.0) {
        return Err(SamplingError::InvalidWeight { total });
    }

    let s = source.cast::<f64>().next(0.0, total);
    let entries = table.entries();
    let i = entries.partition_point(|e| e.cumulative_weight < s);

    // The last entry holds `total` and `s < total`, so `i < entries.len()`.
    Ok(i)
}

/// A weighted pick. See [`pick_index`].
pub fn pick<'t, T, N, R>(
    table: &'t FrequencyTable<T>,
    source: &mut UniformSource<'_, N, R>,
) -> Result<&'t T>
where
    N: Numeric,
    R: Rng + ?Sized,
{
    let i = pick_index(table, source)?;
    Ok(&table.entries()[i].item)
}

impl<T> FrequencyTable<T> {
    /// Shorthand for [`pick`].
    pub fn pick<N: Numeric, R: Rng + ?Sized>(
        &self,
        source: &mut UniformSource<'_, N, R>,
    ) -> Result<&T> {
        pick(self, source)
    }
}
