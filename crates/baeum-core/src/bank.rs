//! Immutable item banks with uniform random selection.
//!
//! A bank is loaded once, validated item by item, and never mutated at
//! runtime. Selection is uniform **with replacement**: picking the same item
//! twice in a row is possible and deliberate.

use std::path::Path;

use rand::Rng;
use rand::rngs::StdRng;
use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};
use crate::item::BankItem;

/// An immutable, ordered collection of practice items.
#[derive(Debug, Clone)]
pub struct Bank<T: BankItem> {
    items: Vec<T>,
}

impl<T: BankItem> Bank<T> {
    /// Build a bank from a collection of items, validating each one.
    ///
    /// Fails with [`CoreError::EmptyBank`] for an empty collection and with
    /// [`CoreError::DataIntegrity`] for the first item that violates its
    /// invariants.
    pub fn new(items: Vec<T>) -> CoreResult<Self> {
        if items.is_empty() {
            return Err(CoreError::EmptyBank);
        }
        for (index, item) in items.iter().enumerate() {
            if let Err(reason) = item.validate() {
                return Err(CoreError::DataIntegrity { index, reason });
            }
        }
        Ok(Self { items })
    }

    /// All items, in authored order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items in the bank.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the bank is empty. Always false for a constructed bank.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of a uniformly random item. Repeats are not filtered out.
    pub fn pick(&self, rng: &mut StdRng) -> usize {
        rng.random_range(0..self.items.len())
    }

    /// The item at `index`. Panics on out-of-range indices, which cannot be
    /// produced by [`Bank::pick`].
    pub fn get(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T: BankItem + DeserializeOwned> Bank<T> {
    /// Load a bank from a JSON file containing an array of items.
    pub fn from_json_file(path: &Path) -> CoreResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let items: Vec<T> = serde_json::from_str(&raw)?;
        Self::new(items)
    }
}
