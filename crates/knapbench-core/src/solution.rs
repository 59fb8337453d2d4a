//! Selections and solver results.

use crate::item::{Capacity, Item};
use crate::quantize::dequantize;

/// Inclusion flags, one per item, produced by a single solver run.
///
/// # Examples
///
/// ```
/// use knapbench_core::Selection;
///
/// let selection = Selection::from_indices(3, &[0, 2]);
/// assert_eq!(selection.count(), 2);
/// assert!(selection.is_selected(2));
/// assert_eq!(selection.indices().collect::<Vec<_>>(), vec![0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    picks: Vec<bool>,
}

impl Selection {
    /// Creates a selection of `len` items with nothing included.
    pub fn empty(len: usize) -> Self {
        Selection {
            picks: vec![false; len],
        }
    }

    /// Creates a selection with the given item indices included.
    ///
    /// Indices outside `0..len` are ignored.
    pub fn from_indices(len: usize, indices: &[usize]) -> Self {
        let mut selection = Self::empty(len);
        for &index in indices {
            selection.set(index, true);
        }
        selection
    }

    /// Creates a selection from the low `len` bits of `mask`.
    ///
    /// Items past bit 63 are never included.
    pub fn from_mask(len: usize, mask: u64) -> Self {
        Selection {
            picks: (0..len).map(|j| j < 64 && (mask >> j) & 1 == 1).collect(),
        }
    }

    /// Sets the inclusion flag of an item. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, included: bool) {
        if let Some(slot) = self.picks.get_mut(index) {
            *slot = included;
        }
    }

    #[inline]
    pub fn is_selected(&self, index: usize) -> bool {
        self.picks.get(index).copied().unwrap_or(false)
    }

    /// Returns the number of items this selection covers.
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Returns the number of included items.
    pub fn count(&self) -> usize {
        self.picks.iter().filter(|&&p| p).count()
    }

    /// Iterates the indices of included items in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.picks
            .iter()
            .enumerate()
            .filter_map(|(i, &p)| p.then_some(i))
    }

    /// Iterates the included items of `items`.
    pub fn chosen<'a>(&'a self, items: &'a [Item]) -> impl Iterator<Item = &'a Item> + 'a {
        self.indices().filter_map(move |i| items.get(i))
    }

    /// Returns the summed weight of included items, in hundredths.
    pub fn weight_units(&self, items: &[Item]) -> u64 {
        self.chosen(items).map(Item::weight_units).sum()
    }

    /// Returns the summed value of included items, in hundredths.
    pub fn value_units(&self, items: &[Item]) -> u64 {
        self.chosen(items).map(Item::value_units).sum()
    }

    /// Returns true if the included weight fits within `capacity`.
    pub fn is_feasible(&self, items: &[Item], capacity: Capacity) -> bool {
        self.weight_units(items) <= capacity.units()
    }
}

impl From<Vec<bool>> for Selection {
    fn from(picks: Vec<bool>) -> Self {
        Selection { picks }
    }
}

/// Result of one solver invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Which items were packed.
    pub selection: Selection,
    /// Total packed value, in hundredths.
    pub value_units: u64,
    /// Total packed weight, in hundredths.
    pub weight_units: u64,
    /// Work performed: subsets enumerated, nodes visited, cells filled or items scanned.
    pub steps: u64,
}

impl Solution {
    /// Creates the empty solution over `len` items.
    pub fn empty(len: usize) -> Self {
        Solution {
            selection: Selection::empty(len),
            value_units: 0,
            weight_units: 0,
            steps: 0,
        }
    }

    /// Builds a solution from a selection, computing its totals.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapbench_core::{ItemSet, Selection, Solution};
    ///
    /// let items = ItemSet::from_pairs(&[(2.0, 10.0), (3.0, 12.0)]).unwrap();
    /// let solution = Solution::from_selection(&items, Selection::from_indices(2, &[1]), 7);
    /// assert_eq!(solution.total_value(), 12.0);
    /// assert_eq!(solution.steps, 7);
    /// ```
    pub fn from_selection(items: &[Item], selection: Selection, steps: u64) -> Self {
        let value_units = selection.value_units(items);
        let weight_units = selection.weight_units(items);
        Solution {
            selection,
            value_units,
            weight_units,
            steps,
        }
    }

    /// Returns the total packed value.
    pub fn total_value(&self) -> f64 {
        dequantize(self.value_units)
    }

    /// Returns the total packed weight.
    pub fn total_weight(&self) -> f64 {
        dequantize(self.weight_units)
    }

    /// Returns true if the packed weight fits within `capacity`.
    pub fn is_feasible(&self, capacity: Capacity) -> bool {
        self.weight_units <= capacity.units()
    }
}
