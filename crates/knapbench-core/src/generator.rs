//! Synthetic item generation.
//!
//! Items are sampled in integer hundredths so every generated weight and
//! value is exact at two decimal places. The random source is always passed
//! in; use [`create_rng`] for reproducible item sets.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::item::{Item, ItemSet};
use crate::quantize::dequantize;

/// Seedable random source used by the benchmark harness.
pub type ItemRng = ChaCha8Rng;

/// Smallest generated weight, in hundredths (1.00).
pub const MIN_WEIGHT_UNITS: u64 = 100;

/// Largest generated weight, in hundredths (100.00).
pub const MAX_WEIGHT_UNITS: u64 = 10_000;

/// Smallest generated value, in hundredths (100.00).
pub const MIN_VALUE_UNITS: u64 = 10_000;

/// Largest generated value, in hundredths (1000.00).
pub const MAX_VALUE_UNITS: u64 = 100_000;

/// Creates a deterministic random source from a seed.
pub fn create_rng(seed: u64) -> ItemRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generates `count` items with uniformly sampled weight and value.
///
/// Ids run from 1 to `count` in generation order.
///
/// # Examples
///
/// ```
/// use knapbench_core::{create_rng, generate_items};
///
/// let mut rng = create_rng(42);
/// let items = generate_items(5, &mut rng);
/// assert_eq!(items.len(), 5);
/// assert!(items.iter().all(|i| (1.0..=100.0).contains(&i.weight())));
///
/// // Same seed, same items.
/// assert_eq!(items, generate_items(5, &mut create_rng(42)));
/// ```
pub fn generate_items<R: Rng>(count: usize, rng: &mut R) -> ItemSet {
    (1..=count)
        .map(|id| {
            let weight = rng.random_range(MIN_WEIGHT_UNITS..=MAX_WEIGHT_UNITS);
            let value = rng.random_range(MIN_VALUE_UNITS..=MAX_VALUE_UNITS);
            Item::new(id, dequantize(weight), dequantize(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_two_decimal(x: f64) -> bool {
        let scaled = x * 100.0;
        (scaled - scaled.round()).abs() < 1e-6
    }

    #[test]
    fn test_generate_empty() {
        let items = generate_items(0, &mut create_rng(1));
        assert!(items.is_empty());
    }

    #[test]
    fn test_generate_ranges_and_precision() {
        let items = generate_items(2000, &mut create_rng(7));
        assert_eq!(items.len(), 2000);
        for item in &items {
            assert!(
                (1.0..=100.0).contains(&item.weight()),
                "weight out of range: {}",
                item.weight()
            );
            assert!(
                (100.0..=1000.0).contains(&item.value()),
                "value out of range: {}",
                item.value()
            );
            assert!(is_two_decimal(item.weight()));
            assert!(is_two_decimal(item.value()));
        }
    }

    #[test]
    fn test_generate_sequential_ids() {
        let items = generate_items(10, &mut create_rng(3));
        let ids: Vec<usize> = items.iter().map(Item::id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_generate_quantizes_exactly() {
        let items = generate_items(500, &mut create_rng(11));
        for item in &items {
            assert!((MIN_WEIGHT_UNITS..=MAX_WEIGHT_UNITS).contains(&item.weight_units()));
            assert!((MIN_VALUE_UNITS..=MAX_VALUE_UNITS).contains(&item.value_units()));
        }
    }

    #[test]
    fn test_generate_is_seed_deterministic() {
        let a = generate_items(50, &mut create_rng(99));
        let b = generate_items(50, &mut create_rng(99));
        let c = generate_items(50, &mut create_rng(100));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
