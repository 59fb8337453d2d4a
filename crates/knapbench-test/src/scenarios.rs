//! Hand-built item sets with known optima.

use knapbench_core::{create_rng, generate_items, Capacity, ItemSet};

/// Capacity of the three-item reference scenario.
pub const REFERENCE_CAPACITY: f64 = 5.0;

/// Optimum of the reference scenario (items 1 and 2, value 22.00).
pub const REFERENCE_OPTIMUM_UNITS: u64 = 2200;

/// Capacity of the greedy trap scenario.
pub const GREEDY_TRAP_CAPACITY: f64 = 10.0;

/// Items `[(w=2, v=10), (w=3, v=12), (w=5, v=20)]`.
///
/// With capacity 5 the optimum packs items 1 and 2 (value 22), beating
/// item 3 alone (value 20). Ratios are 5.0, 4.0 and 4.0.
pub fn reference_items() -> ItemSet {
    ItemSet::from_pairs(&[(2.0, 10.0), (3.0, 12.0), (5.0, 20.0)])
        .expect("reference items are valid")
}

/// Returns [`REFERENCE_CAPACITY`] as a [`Capacity`].
pub fn reference_capacity() -> Capacity {
    Capacity::new(REFERENCE_CAPACITY).expect("reference capacity is valid")
}

/// Items where the best ratio blocks the optimum.
///
/// With capacity 10, greedy packs item 1 (value 30) and nothing else fits;
/// the optimum packs items 2 and 3 (value 48).
pub fn greedy_trap_items() -> ItemSet {
    ItemSet::from_pairs(&[(6.0, 30.0), (5.0, 24.0), (5.0, 24.0)])
        .expect("greedy trap items are valid")
}

/// Generates `count` reproducible items from `seed`.
pub fn seeded_items(count: usize, seed: u64) -> ItemSet {
    generate_items(count, &mut create_rng(seed))
}
