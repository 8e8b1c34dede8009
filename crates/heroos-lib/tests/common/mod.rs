#![allow(dead_code)]

use heroos_lib::{sort_by_power, GenerationConfig, Inventory, Item};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic RNG for reproducible inventories.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate a default-sized inventory from `seed`.
pub fn generated_inventory(seed: u64) -> Inventory {
    let mut inventory = Inventory::new();
    inventory
        .regenerate_with(&GenerationConfig::default(), &mut seeded_rng(seed))
        .expect("default generation config is valid");
    inventory
}

/// Build a sorted inventory from explicit powers.
pub fn sorted_inventory(powers: &[i32]) -> Inventory {
    let items = powers
        .iter()
        .enumerate()
        .map(|(id, power)| Item::new(id as u32, format!("item-{id}"), *power))
        .collect();
    let mut inventory = Inventory::from_items(items);
    sort_by_power(&mut inventory);
    inventory
}
