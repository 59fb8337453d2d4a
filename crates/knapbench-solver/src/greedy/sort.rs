//! Ratio orderings used by the greedy solver.
//!
//! Both sorts order item indices by value/weight ratio, highest first, and
//! break ties by input position. That is a strict total order, so any
//! correct sort yields the same permutation; the two strategies differ
//! only in cost.

use std::cmp::Ordering;

use knapbench_core::Item;

/// Compares two item indices: higher ratio first, then lower index.
#[inline]
pub(crate) fn by_ratio(items: &[Item], a: usize, b: usize) -> Ordering {
    items[b]
        .ratio()
        .total_cmp(&items[a].ratio())
        .then(a.cmp(&b))
}

/// Sorts with the standard O(n log n) comparison sort.
///
/// Returns the permutation and the number of comparisons made.
pub(crate) fn comparison_sort(items: &[Item]) -> (Vec<usize>, u64) {
    let mut order: Vec<usize> = (0..items.len()).collect();
    let mut comparisons = 0u64;
    order.sort_unstable_by(|&a, &b| {
        comparisons += 1;
        by_ratio(items, a, b)
    });
    (order, comparisons)
}

/// Sorts with an O(n^2) selection sort.
///
/// Returns the permutation and the number of comparisons made.
pub(crate) fn selection_sort(items: &[Item]) -> (Vec<usize>, u64) {
    let mut order: Vec<usize> = (0..items.len()).collect();
    let mut comparisons = 0u64;
    for i in 0..order.len() {
        let mut best = i;
        for j in i + 1..order.len() {
            comparisons += 1;
            if by_ratio(items, order[j], order[best]) == Ordering::Less {
                best = j;
            }
        }
        order.swap(i, best);
    }
    (order, comparisons)
}
