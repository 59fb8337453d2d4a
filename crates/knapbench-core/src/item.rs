//! Items, item collections and knapsack capacity.

use std::fmt;
use std::ops::Deref;

use crate::error::{KnapbenchError, Result};
use crate::quantize::{dequantize, quantize, quantize_down};

/// A single knapsack item.
///
/// Weight and value carry two-decimal precision. Solvers read them through
/// [`Item::weight_units`] and [`Item::value_units`].
///
/// # Examples
///
/// ```
/// use knapbench_core::Item;
///
/// let item = Item::new(1, 2.5, 10.0);
/// assert_eq!(item.weight_units(), 250);
/// assert_eq!(item.value_units(), 1000);
/// assert!((item.ratio() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    id: usize,
    weight: f64,
    value: f64,
}

impl Item {
    /// Creates an item without validation.
    #[inline]
    pub const fn new(id: usize, weight: f64, value: f64) -> Self {
        Item { id, weight, value }
    }

    /// Creates an item, rejecting non-positive weights and negative values.
    pub fn try_new(id: usize, weight: f64, value: f64) -> Result<Self> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(KnapbenchError::InvalidWeight { id, weight });
        }
        if !value.is_finite() || value < 0.0 {
            return Err(KnapbenchError::InvalidValue { id, value });
        }
        Ok(Item::new(id, weight, value))
    }

    /// Returns the sequential identifier (1-based).
    #[inline]
    pub const fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the weight in integer hundredths.
    #[inline]
    pub fn weight_units(&self) -> u64 {
        quantize(self.weight)
    }

    /// Returns the value in integer hundredths.
    #[inline]
    pub fn value_units(&self) -> u64 {
        quantize(self.value)
    }

    /// Returns the value per unit of weight.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.value / self.weight
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "item {}: weight {:.2}, value {:.2}",
            self.id, self.weight, self.value
        )
    }
}

/// An ordered collection of items, generated once per scenario.
///
/// Dereferences to `[Item]` so solvers can borrow any prefix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    /// Creates an empty item set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an item set from `(weight, value)` pairs, numbering items from 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapbench_core::ItemSet;
    ///
    /// let items = ItemSet::from_pairs(&[(2.0, 10.0), (3.0, 12.0)]).unwrap();
    /// assert_eq!(items.len(), 2);
    /// assert_eq!(items[1].id(), 2);
    /// ```
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(i, &(weight, value))| Item::try_new(i + 1, weight, value))
            .collect::<Result<Vec<_>>>()?;
        Ok(ItemSet { items })
    }

    /// Returns the items as a slice.
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Returns the first `n` items (or all of them if fewer exist).
    pub fn prefix(&self, n: usize) -> &[Item] {
        &self.items[..n.min(self.items.len())]
    }

    /// Returns the summed value of every item, in hundredths.
    pub fn total_value_units(&self) -> u64 {
        self.items.iter().map(Item::value_units).sum()
    }
}

impl Deref for ItemSet {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        &self.items
    }
}

impl From<Vec<Item>> for ItemSet {
    fn from(items: Vec<Item>) -> Self {
        ItemSet { items }
    }
}

impl FromIterator<Item> for ItemSet {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        ItemSet {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Weight budget of the knapsack.
///
/// # Examples
///
/// ```
/// use knapbench_core::Capacity;
///
/// let capacity = Capacity::new(1000.0).unwrap();
/// assert_eq!(capacity.units(), 100_000);
/// assert!(Capacity::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Capacity(f64);

impl Capacity {
    /// The empty knapsack.
    pub const ZERO: Capacity = Capacity(0.0);

    /// Creates a capacity, rejecting negative and non-finite amounts.
    pub fn new(amount: f64) -> Result<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(KnapbenchError::InvalidCapacity(amount));
        }
        Ok(Capacity(amount))
    }

    /// Creates a capacity from integer hundredths.
    pub fn from_units(units: u64) -> Self {
        Capacity(dequantize(units))
    }

    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns the capacity in integer hundredths, rounded down so that
    /// any selection within the budget also fits the real amount.
    #[inline]
    pub fn units(&self) -> u64 {
        quantize_down(self.0)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
