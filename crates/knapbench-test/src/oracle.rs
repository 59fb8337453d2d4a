//! Independent optimum computation for small inputs.
//!
//! Deliberately naive: recursive include/exclude over integer hundredths,
//! with no pruning, so solver tests never check an algorithm against itself.

use knapbench_core::{Capacity, Item};

/// Returns the optimal packed value of `items` within `capacity`, in hundredths.
///
/// Exponential in `items.len()`; keep inputs under about 20 items.
pub fn optimum_units(items: &[Item], capacity: Capacity) -> u64 {
    best(items, capacity.units())
}

fn best(items: &[Item], remaining: u64) -> u64 {
    let Some((first, rest)) = items.split_first() else {
        return 0;
    };
    let skip = best(rest, remaining);
    let weight = first.weight_units();
    if weight > remaining {
        return skip;
    }
    skip.max(first.value_units() + best(rest, remaining - weight))
}
