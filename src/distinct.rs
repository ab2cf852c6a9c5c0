//! Sampling without replacement by index rejection.
//!
//! Draw an index in `[0, n)`; if it was drawn before, draw again; otherwise
//! yield that element. Items come out in draw order, lazily, once.
//!
//! Rejection on its own never terminates when `count > n`, so the size check
//! happens before the first draw.

use std::collections::HashSet;
use std::iter::FusedIterator;

use rand::Rng;

use crate::error::{Result, SamplingError};
use crate::source::{Numeric, UniformSource};

/// Lazy iterator over `count` distinct elements of a population.
///
/// Created by [`sample_distinct`].
#[derive(Debug)]
pub struct Distinct<'a, 'p, T, R: ?Sized> {
    source: UniformSource<'a, usize, R>,
    population: &'p [T],
    consumed: HashSet<usize>,
    remaining: usize,
}

/// Draw `count` distinct elements of `population`.
///
/// # Errors
///
/// [`SamplingError::InsufficientPopulation`] if `count > population.len()`.
pub fn sample_distinct<'a, 'p, T, N, R>(
    source: &'a mut UniformSource<'_, N, R>,
    population: &'p [T],
    count: usize,
) -> Result<Distinct<'a, 'p, T, R>>
where
    N: Numeric,
    R: Rng + ?Sized,
{
    if count > population.len() {
        return Err(SamplingError::InsufficientPopulation {
            requested: count,
            available: population.len(),
        });
    }

    Ok(Distinct {
        source: source.cast::<usize>(),
        population,
        consumed: HashSet::with_capacity(count),
        remaining: count,
    })
}

impl<'p, T, R: Rng + ?Sized> Iterator for Distinct<'_, 'p, T, R> {
    type Item = &'p T;

    fn next(&mut self) -> Option<&'p T> {
        if self.remaining == 0 {
            return None;
        }

        let n = self.population.len();
        let mut rejected = 0usize;
        loop {
            let i = self.source.next(0, n);
            if self.consumed.insert(i) {
                if rejected > 0 {
                    tracing::trace!(index = i, rejected, "distinct draw accepted after redraws");
                }
                self.remaining -= 1;
                return self.population.get(i);
            }
            rejected += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, R: Rng + ?Sized> ExactSizeIterator for Distinct<'_, '_, T, R> {}

impl<T, R: Rng + ?Sized> FusedIterator for Distinct<'_, '_, T, R> {}
