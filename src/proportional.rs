//! Quota + weighted remainder + shuffle.
//!
//! Produces exactly `count` items whose composition follows each item's
//! weight read as a percentage of `count`:
//!
//! 1. **Quota**: `floor(weight * count / 100)` copies of each item, in input order.
//! 2. **Remainder**: weighted picks (see [`crate::picker`]) until `count` is reached.
//! 3. **Shuffle**: Fisher–Yates over the whole result, so positions do not
//!    reveal which copies were quota and which were drawn.
//!
//! Weights are "per hundred" and are *not* renormalized. If they sum well
//! below 100 the remainder phase does most of the work; if they sum above
//! 100 the quota phase stops at `count` and later items lose copies.

use rand::Rng;

use crate::error::Result;
use crate::frequency::{FrequencyTable, WeightedItem};
use crate::picker::pick_index;
use crate::shuffle::shuffle;
use crate::source::{Numeric, UniformSource};

/// Copies of an item guaranteed by the quota phase.
///
/// Multiplies before dividing: for integer percentages `weight * count` is
/// exact, so `floor` sees the true quotient.
#[inline]
pub fn quota(weight: f64, count: usize) -> usize {
    (weight * count as f64 / 100.0).floor() as usize
}

/// Draw exactly `count` items following a percentage distribution.
///
/// # Errors
///
/// - [`SamplingError::NegativeWeight`] / [`SamplingError::NonFiniteWeight`]
///   for a bad weight, before anything is drawn.
/// - [`SamplingError::InvalidWeight`] if the remainder phase needs a pick
///   and all weights are zero (or `items` is empty).
///
/// `count == 0` always yields an empty `Vec`.
///
/// [`SamplingError::NegativeWeight`]: crate::SamplingError::NegativeWeight
/// [`SamplingError::NonFiniteWeight`]: crate::SamplingError::NonFiniteWeight
/// [`SamplingError::InvalidWeight`]: crate::SamplingError::InvalidWeight
pub fn sample_proportional<T, N, R>(
    source: &mut UniformSource<'_, N, R>,
    count: usize,
    items: &[WeightedItem<T>],
) -> Result<Vec<T>>
where
    T: Clone,
    N: Numeric,
    R: Rng + ?Sized,
{
    if count == 0 {
        return Ok(Vec::new());
    }

    // Indices stand in for items so the table needs no clones.
    let table = FrequencyTable::<usize>::build(
        items.iter().enumerate().map(|(i, wi)| (i, wi.weight)),
    )?;

    let mut result = Vec::with_capacity(count);
    for wi in items {
        let room = count - result.len();
        let q = quota(wi.weight, count);
        if q > room {
            tracing::debug!(
                quota = q,
                room,
                total_weight = table.total(),
                "quota phase reached count; weights sum above 100"
            );
        }
        result.extend(std::iter::repeat(wi.item.clone()).take(q.min(room)));
    }

    let quotas = result.len();
    while result.len() < count {
        let i = pick_index(&table, source)?;
        result.push(items[i].item.clone());
    }

    tracing::debug!(count, quotas, remainder = count - quotas, "proportional sample assembled");

    shuffle(&mut result, source);
    Ok(result)
}
