//! Value bounders for backtracking pruning.
//!
//! Bounders calculate an optimistic bound on the value reachable from a
//! partial assignment. If the bound cannot beat the best complete
//! assignment found so far, the subtree is skipped.

use std::fmt::Debug;

use knapbench_core::Item;

/// Calculates optimistic value bounds for backtracking pruning.
pub trait Bounder: Send + Debug {
    /// Returns an upper bound, in hundredths, on any value reachable from a
    /// node at `depth` (items `0..depth` decided) holding `current_value`.
    ///
    /// The bound must be greater than or equal to every achievable value.
    /// Returns `None` if no bound can be computed, which disables pruning.
    fn optimistic_bound(&self, depth: usize, current_value: u64) -> Option<u64>;
}

/// A bounder that never bounds, giving plain backtracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBounder;

impl Bounder for NoBounder {
    fn optimistic_bound(&self, _depth: usize, _current_value: u64) -> Option<u64> {
        None
    }
}

/// Bounds by adding the value of every undecided item, ignoring weight.
///
/// Valid because no completion can pack more than all remaining items.
#[derive(Debug, Clone, Default)]
pub struct RemainingValueBounder {
    // suffix[d] = sum of values of items d..n; suffix[n] = 0
    suffix: Vec<u64>,
}

impl RemainingValueBounder {
    /// Precomputes the remaining-value suffix sums of `items`.
    pub fn new(items: &[Item]) -> Self {
        let mut suffix = vec![0u64; items.len() + 1];
        for (depth, item) in items.iter().enumerate().rev() {
            suffix[depth] = suffix[depth + 1] + item.value_units();
        }
        Self { suffix }
    }

    /// Returns the summed value of items `depth..n`.
    pub fn remaining_value(&self, depth: usize) -> u64 {
        self.suffix.get(depth).copied().unwrap_or(0)
    }
}

impl Bounder for RemainingValueBounder {
    fn optimistic_bound(&self, depth: usize, current_value: u64) -> Option<u64> {
        Some(current_value + self.remaining_value(depth))
    }
}

/// Bounder type selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BounderType {
    /// No bounding (plain backtracking).
    #[default]
    None,
    /// Remaining-value bounding (pruned backtracking).
    RemainingValue,
}

impl std::fmt::Display for BounderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BounderType::None => write!(f, "None"),
            BounderType::RemainingValue => write!(f, "RemainingValue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knapbench_test::reference_items;

    #[test]
    fn test_no_bounder_returns_none() {
        assert_eq!(NoBounder.optimistic_bound(0, 100), None);
    }

    #[test]
    fn test_remaining_value_suffix() {
        let bounder = RemainingValueBounder::new(&reference_items());
        assert_eq!(bounder.remaining_value(0), 4200);
        assert_eq!(bounder.remaining_value(1), 3200);
        assert_eq!(bounder.remaining_value(2), 2000);
        assert_eq!(bounder.remaining_value(3), 0);
        assert_eq!(bounder.remaining_value(7), 0);
    }

    #[test]
    fn test_remaining_value_bound() {
        let bounder = RemainingValueBounder::new(&reference_items());
        assert_eq!(bounder.optimistic_bound(1, 1000), Some(4200));
    }

    #[test]
    fn test_bounder_type_display() {
        assert_eq!(format!("{}", BounderType::None), "None");
        assert_eq!(format!("{}", BounderType::RemainingValue), "RemainingValue");
    }

    #[test]
    fn test_bounder_type_default() {
        assert_eq!(BounderType::default(), BounderType::None);
    }
}
