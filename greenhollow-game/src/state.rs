//! Canonical game-state snapshot.
//!
//! `GameState` is an immutable value: reducers receive a shared reference
//! and return a brand-new snapshot, so readers holding an older snapshot
//! are never affected by a later event.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::inventory::Inventory;
use crate::items::ItemName;

// Cumulative experience required to reach each level, level 1 first.
const LEVEL_EXPERIENCE: [u32; 15] = [
    0, 5, 22, 70, 230, 625, 1_500, 3_400, 7_000, 11_000, 15_500, 20_500, 26_000, 32_000, 38_500,
];

/// Player progress record. A farm without one cannot act.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bumpkin {
    #[serde(default)]
    pub experience: Decimal,
}

impl Bumpkin {
    #[must_use]
    pub fn new(experience: Decimal) -> Self {
        Self { experience }
    }

    #[must_use]
    pub fn level(&self) -> u8 {
        bumpkin_level(self.experience)
    }
}

/// Level derived from cumulative experience, capped at the table's top.
#[must_use]
pub fn bumpkin_level(experience: Decimal) -> u8 {
    let mut level = 1u8;
    for (idx, threshold) in LEVEL_EXPERIENCE.iter().enumerate() {
        if experience >= Decimal::from(*threshold) {
            level = idx as u8 + 1;
        }
    }
    level
}

/// Where a listing came from. Listings persisted before the tag existed
/// deserialize as `Legacy` and take the legacy cancellation path; the
/// list reducer only ever writes `Current`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingProvenance {
    #[default]
    Legacy,
    Current,
}

/// A player's offer to sell inventory items for SFL.
///
/// Lifecycle: open (`bought_at` absent) until a counterparty fulfills it
/// externally, then fulfilled until claimed. Cancel removes an open
/// listing; claim removes a fulfilled one. There is no way back from
/// fulfilled to open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeListing {
    pub items: BTreeMap<ItemName, Decimal>,
    pub sfl: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bought_at: Option<i64>,
    #[serde(default)]
    pub provenance: ListingProvenance,
}

impl TradeListing {
    #[must_use]
    pub const fn is_fulfilled(&self) -> bool {
        self.bought_at.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeState {
    #[serde(default)]
    pub listings: BTreeMap<String, TradeListing>,
}

/// Root aggregate. Owned by the external state machine; this crate only
/// ever derives new snapshots from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// SFL wallet, the trade-side unit of account. Distinct from the
    /// Block Buck inventory item that pays for banners.
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bumpkin: Option<Bumpkin>,
    #[serde(default)]
    pub trades: TradeState,
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
