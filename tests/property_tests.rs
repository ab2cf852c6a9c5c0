use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warifuri::{
    quota, sample_distinct, sample_proportional, FrequencyTable, SamplingError, UniformSource,
    WeightedItem,
};

proptest! {
    #[test]
    fn prop_cumulative_weights_non_decreasing(
        weights in prop::collection::vec(0.0f64..100.0, 0..40)
    ) {
        let table = FrequencyTable::<usize>::build(weights.iter().copied().enumerate())
            .expect("weights ok");

        prop_assert_eq!(table.len(), weights.len());
        for pair in table.entries().windows(2) {
            prop_assert!(pair[0].cumulative_weight <= pair[1].cumulative_weight);
        }

        let sum: f64 = weights.iter().sum();
        prop_assert!((table.total() - sum).abs() <= 1e-9 * sum.max(1.0));
    }

    #[test]
    fn prop_pick_returns_positive_weight_item(
        weights in prop::collection::vec(0.0f64..10.0, 1..20),
        seed in 0u64..10_000,
    ) {
        let table = FrequencyTable::<usize>::build(weights.iter().copied().enumerate())
            .expect("weights ok");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut src = UniformSource::<f64, _>::new(&mut rng);

        match table.pick(&mut src) {
            Ok(&i) => prop_assert!(weights[i] > 0.0, "picked zero weight at {}", i),
            Err(e) => {
                prop_assert!(weights.iter().all(|&w| w == 0.0));
                prop_assert_eq!(e, SamplingError::InvalidWeight { total: 0.0 });
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_distinct_invariants(
        population in prop::collection::vec(0u32..1000, 0..50),
        k in 0usize..60,
        seed in 0u64..10_000,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut src = UniformSource::<usize, _>::new(&mut rng);

        match sample_distinct(&mut src, &population, k) {
            Ok(it) => {
                prop_assert!(k <= population.len());
                // Compare by address: the population may hold equal values.
                let picked: Vec<*const u32> = it.map(|x| x as *const u32).collect();
                prop_assert_eq!(picked.len(), k);
                let set: HashSet<_> = picked.iter().collect();
                prop_assert_eq!(set.len(), k);
                let range = population.as_ptr_range();
                prop_assert!(picked.iter().all(|p| range.contains(p)));
            }
            Err(e) => {
                prop_assert!(k > population.len());
                prop_assert_eq!(
                    e,
                    SamplingError::InsufficientPopulation { requested: k, available: population.len() }
                );
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_proportional_exact_count(
        weights in prop::collection::vec(0.01f64..100.0, 1..8),
        n in 0usize..200,
        seed in 0u64..10_000,
    ) {
        let items: Vec<WeightedItem<usize>> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| WeightedItem::new(i, w))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut src = UniformSource::<f32, _>::new(&mut rng);

        let out = sample_proportional(&mut src, n, &items).expect("positive weights");
        prop_assert_eq!(out.len(), n);
        prop_assert!(out.iter().all(|&i| i < weights.len()));
    }

    #[test]
    fn prop_proportional_meets_every_quota(
        percents in prop::collection::vec(1u32..=100, 1..8),
        n in 0usize..300,
        seed in 0u64..10_000,
    ) {
        // Keep the prefix that sums to at most 100 so every quota fits in `n`.
        let mut budget = 100u32;
        let weights: Vec<f64> = percents
            .iter()
            .take_while(|&&p| {
                let fits = p <= budget;
                budget = budget.saturating_sub(p);
                fits
            })
            .map(|&p| f64::from(p))
            .collect();
        let quotas: Vec<usize> = weights.iter().map(|&w| quota(w, n)).collect();
        prop_assert!(quotas.iter().sum::<usize>() <= n);

        let items: Vec<WeightedItem<usize>> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| WeightedItem::new(i, w))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut src = UniformSource::<f32, _>::new(&mut rng);

        let out = sample_proportional(&mut src, n, &items).expect("positive weights");
        prop_assert_eq!(out.len(), n);
        for (i, &q) in quotas.iter().enumerate() {
            let seen = out.iter().filter(|&&x| x == i).count();
            prop_assert!(seen >= q, "item {} appeared {} times, quota {}", i, seen, q);
        }
    }

    #[test]
    fn prop_next01_within_closed_unit(seed in 0u64..10_000) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut src = UniformSource::<f32, _>::new(&mut rng);
        for _ in 0..100 {
            let x = src.next01();
            prop_assert!((0.0..=1.0).contains(&x));
        }
    }
}
