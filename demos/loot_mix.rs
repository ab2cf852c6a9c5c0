//! Loot mix: quota-proportional drops vs independent weighted picks.
//!
//! Both follow the same percentages, but the proportional sampler guarantees
//! the floor of each share and only draws the leftover slots at random.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warifuri::{sample_proportional, FrequencyTable, UniformSource, WeightedItem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let drops = vec![
        WeightedItem::new("common", 62.0),
        WeightedItem::new("rare", 25.0),
        WeightedItem::new("epic", 10.0),
        WeightedItem::new("legendary", 3.0),
    ];
    let count = 20usize;

    let mut rng_p = ChaCha8Rng::seed_from_u64(7);
    let mut src_p = UniformSource::<f32, _>::new(&mut rng_p);
    let mixed = sample_proportional(&mut src_p, count, &drops)?;

    let table = FrequencyTable::<&str>::build(drops.iter().cloned())?;
    let mut rng_w = ChaCha8Rng::seed_from_u64(7);
    let mut src_w = UniformSource::<f64, _>::new(&mut rng_w);
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        picked.push(*table.pick(&mut src_w)?);
    }

    println!("share of {count} drops:");
    for d in &drops {
        let p = mixed.iter().filter(|&&x| x == d.item).count();
        let w = picked.iter().filter(|&&x| x == d.item).count();
        println!(
            "  {:<10} weight={:>4}  proportional={p:2}  independent={w:2}",
            d.item, d.weight
        );
    }
    println!();
    println!("proportional order: {mixed:?}");

    Ok(())
}
