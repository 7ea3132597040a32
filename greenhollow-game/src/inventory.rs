//! Decimal-quantity inventory map.
//!
//! Invariant: quantities are never negative and an absent key means a
//! quantity of exactly zero. Debits that would break the invariant are
//! refused without touching the map.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::items::ItemName;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<ItemName, Decimal>,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current quantity of an item; zero when the key is absent.
    #[must_use]
    pub fn amount(&self, item: ItemName) -> Decimal {
        self.items.get(&item).copied().unwrap_or(Decimal::ZERO)
    }

    /// Whether the player holds at least one unit of the item.
    #[must_use]
    pub fn has(&self, item: ItemName) -> bool {
        self.amount(item) > Decimal::ZERO
    }

    #[must_use]
    pub fn has_at_least(&self, item: ItemName, amount: Decimal) -> bool {
        self.amount(item) >= amount
    }

    /// Set an item to an exact quantity, dropping the key at zero.
    pub fn set(&mut self, item: ItemName, amount: Decimal) {
        if amount <= Decimal::ZERO {
            self.items.remove(&item);
        } else {
            self.items.insert(item, amount);
        }
    }

    /// Builder form of [`Inventory::set`].
    #[must_use]
    pub fn with(mut self, item: ItemName, amount: Decimal) -> Self {
        self.set(item, amount);
        self
    }

    /// Add a (positive) quantity of an item.
    pub fn credit(&mut self, item: ItemName, amount: Decimal) {
        if amount <= Decimal::ZERO {
            return;
        }
        let total = self.amount(item) + amount;
        self.items.insert(item, total);
    }

    /// Remove a quantity of an item. Returns `false` and leaves the map
    /// untouched when the held quantity does not cover the debit.
    pub fn debit(&mut self, item: ItemName, amount: Decimal) -> bool {
        let held = self.amount(item);
        if amount < Decimal::ZERO || held < amount {
            return false;
        }
        self.set(item, held - amount);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemName, Decimal)> + '_ {
        self.items.iter().map(|(item, amount)| (*item, *amount))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
