//! Trade listing reducer.

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::error::EventError;
use crate::items::ItemName;
use crate::state::{GameState, ListingProvenance, TradeListing};
use crate::vip;

/// At most this many listings may be open or awaiting claim at once.
pub const MAX_ACTIVE_LISTINGS: usize = 3;

/// Cap on the asking price of a single listing, in SFL.
pub const MAX_ASKING_PRICE: Decimal = dec!(150);

const LISTING_ID_LEN: usize = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTradeAction {
    /// Offered items and quantities.
    pub items: BTreeMap<ItemName, Decimal>,
    /// Asking price in SFL.
    pub sfl: Decimal,
}

/// Validate and apply a new trade listing.
///
/// Offered items are deducted from inventory up front and held by the
/// listing until it is cancelled (returned) or claimed (sold). The new
/// listing is tagged [`ListingProvenance::Current`] and keyed by a fresh
/// identifier drawn from the injected rng.
///
/// # Errors
///
/// Rejects when the player lacks premium access, already has
/// [`MAX_ACTIVE_LISTINGS`] listings, offers nothing or a non-positive
/// quantity, offers an unlistable item, exceeds an item's listing cap,
/// asks a price outside `[0, MAX_ASKING_PRICE]`, or offers more than the
/// inventory holds. The input state is never modified.
pub fn list_trade(
    state: &GameState,
    action: &ListTradeAction,
    now_ms: i64,
    rng: &mut impl Rng,
) -> Result<GameState, EventError> {
    let mut next = state.clone();

    if next.bumpkin.is_none() {
        return Err(EventError::NoBumpkin);
    }
    if !vip::has_premium_access(&next.inventory, now_ms) {
        return Err(EventError::AccessDenied);
    }
    if next.trades.listings.len() >= MAX_ACTIVE_LISTINGS {
        return Err(EventError::ListingLimitExceeded);
    }
    if action.items.is_empty() {
        return Err(EventError::InvalidOffer);
    }
    if action.sfl < Decimal::ZERO || action.sfl > MAX_ASKING_PRICE {
        return Err(EventError::PriceLimitExceeded);
    }

    for (&item, &quantity) in &action.items {
        if quantity <= Decimal::ZERO {
            return Err(EventError::InvalidOffer);
        }
        let cap = item.max_listed_quantity().ok_or(EventError::NotTradable)?;
        if quantity > Decimal::from(cap) {
            return Err(EventError::QuantityLimitExceeded);
        }
        if !next.inventory.debit(item, quantity) {
            return Err(EventError::InsufficientInventory);
        }
    }

    let mut listing_id = new_listing_id(rng);
    while next.trades.listings.contains_key(&listing_id) {
        listing_id = new_listing_id(rng);
    }
    next.trades.listings.insert(
        listing_id,
        TradeListing {
            items: action.items.clone(),
            sfl: action.sfl,
            bought_at: None,
            provenance: ListingProvenance::Current,
        },
    );
    Ok(next)
}

fn new_listing_id(rng: &mut impl Rng) -> String {
    let mut id = String::with_capacity(LISTING_ID_LEN);
    for _ in 0..LISTING_ID_LEN / 2 {
        let byte: u8 = rng.r#gen();
        let _ = write!(id, "{byte:02x}");
    }
    id
}
