//! A sampler that owns its entropy stream.
//!
//! The free functions in this crate borrow a [`UniformSource`] from the
//! caller. [`Sampler`] is the convenience layer on top: it owns one
//! generator (thread-local, seeded, or caller-supplied) and exposes every
//! operation as a method drawing from that single stream.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::distinct::sample_distinct;
use crate::error::Result;
use crate::frequency::{FrequencyTable, WeightedItem};
use crate::picker::pick;
use crate::proportional::sample_proportional;
use crate::shuffle::shuffle;
use crate::source::{Numeric, UniformSource};

/// Owns an RNG and hands out [`UniformSource`] views over it.
///
/// Not `Send`: build one per thread.
pub struct Sampler {
    rng: Box<dyn RngCore>,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sampler").finish_non_exhaustive()
    }
}

impl Sampler {
    /// Draw from this thread's `rand::rng()`.
    pub fn new() -> Self {
        tracing::debug!("sampler using thread-local rng");
        Self {
            rng: Box::new(rand::rng()),
        }
    }

    /// Draw from `ChaCha8Rng` seeded with `seed`; same seed, same draws.
    pub fn with_seed(seed: u64) -> Self {
        tracing::debug!(seed, "sampler using seeded ChaCha8");
        Self {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Draw from a caller-supplied generator.
    pub fn from_rng<R: RngCore + 'static>(rng: R) -> Self {
        Self { rng: Box::new(rng) }
    }

    /// A typed view over this sampler's stream.
    pub fn source<T: Numeric>(&mut self) -> UniformSource<'_, T, dyn RngCore> {
        UniformSource::new(&mut *self.rng)
    }

    /// Uniform draw in `[min, max)`.
    pub fn next<T: Numeric>(&mut self, min: T, max: T) -> T {
        self.source::<T>().next(min, max)
    }

    /// Uniform draw in `[0, 1]`.
    pub fn next01(&mut self) -> f64 {
        self.source::<f64>().next01()
    }

    /// See [`UniformSource::dice`].
    pub fn dice(&mut self, n: u32) -> u32 {
        self.source::<u32>().dice(n)
    }

    /// See [`UniformSource::choose`].
    pub fn choose<'p, X>(&mut self, items: &'p [X]) -> Option<&'p X> {
        self.source::<usize>().choose(items)
    }

    /// Weighted pick. See [`crate::picker::pick`].
    pub fn pick<'t, T>(&mut self, table: &'t FrequencyTable<T>) -> Result<&'t T> {
        pick(table, &mut self.source::<f64>())
    }

    /// `count` distinct elements of `population`, in draw order.
    ///
    /// See [`crate::distinct::sample_distinct`].
    pub fn sample_distinct<'p, T>(&mut self, population: &'p [T], count: usize) -> Result<Vec<&'p T>> {
        let mut src = self.source::<usize>();
        Ok(sample_distinct(&mut src, population, count)?.collect())
    }

    /// Exactly `count` items following a percentage distribution.
    ///
    /// See [`crate::proportional::sample_proportional`].
    pub fn sample_proportional<T: Clone>(
        &mut self,
        count: usize,
        items: &[WeightedItem<T>],
    ) -> Result<Vec<T>> {
        sample_proportional(&mut self.source::<f64>(), count, items)
    }

    /// Uniformly permute `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        shuffle(items, &mut self.source::<usize>());
    }
}
