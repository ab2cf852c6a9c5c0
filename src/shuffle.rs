//! In-place Fisher–Yates (Durstenfeld) shuffle.

use rand::Rng;

use crate::source::{Numeric, UniformSource};

/// Uniformly permute `items` in place.
///
/// Walks backwards and swaps each position `i` with an index drawn from
/// `[0, i]` through the source's `usize` view.
pub fn shuffle<T, N, R>(items: &mut [T], source: &mut UniformSource<'_, N, R>)
where
    N: Numeric,
    R: Rng + ?Sized,
{
    let n = items.len();
    if n <= 1 {
        return;
    }
    let mut index = source.cast::<usize>();
    for i in (1..n).rev() {
        let j = index.next(0, i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn keeps_elements() {
        let mut rng = ChaCha8Rng::seed_from_u64(123);
        let mut src = UniformSource::<f32, _>::new(&mut rng);
        let mut v: Vec<u32> = (1..=10).collect();
        shuffle(&mut v, &mut src);
        v.sort_unstable();
        assert_eq!(v, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn trivial_slices_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut src = UniformSource::<usize, _>::new(&mut rng);
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut src);
        let mut one = vec![9];
        shuffle(&mut one, &mut src);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn first_slot_is_uniform() {
        // Each of 4 values should land first ~1/4 of the time; df = 3.
        let trials = 8_000;
        let mut counts = [0usize; 4];
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut src = UniformSource::<usize, _>::new(&mut rng);
        for _ in 0..trials {
            let mut v = [0usize, 1, 2, 3];
            shuffle(&mut v, &mut src);
            counts[v[0]] += 1;
        }
        let expected = trials as f64 / 4.0;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(chi2 < 25.0, "chi2 too large (chi2={chi2:.2}). counts={counts:?}");
    }
}
