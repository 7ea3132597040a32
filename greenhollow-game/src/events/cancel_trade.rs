//! Trade cancellation reducer.

use serde::{Deserialize, Serialize};

use crate::error::EventError;
use crate::state::{GameState, ListingProvenance, TradeListing};

/// Which cancellation pathway the dispatcher chose. Legacy listings are
/// unwound locally; current listings also have to be withdrawn from the
/// remote order book by the external system. Both pathways end the same
/// way in this core: items restored, listing removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelPath {
    Legacy,
    Remote,
}

impl CancelPath {
    /// The pathway a listing must be cancelled through.
    #[must_use]
    pub const fn for_listing(listing: &TradeListing) -> Self {
        match listing.provenance {
            ListingProvenance::Legacy => Self::Legacy,
            ListingProvenance::Current => Self::Remote,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelTradeAction {
    pub listing_id: String,
    pub path: CancelPath,
}

/// Cancel an open listing, returning its items to inventory.
///
/// Fulfilled listings cannot be cancelled (the buyer has already paid);
/// they can only be claimed. A listing cancelled through the wrong
/// pathway is rejected so the dispatcher's routing mistake surfaces
/// instead of silently unwinding on the wrong side.
///
/// # Errors
///
/// Rejects on an unknown listing id, a fulfilled listing, or a pathway
/// mismatch. The input state is never modified.
pub fn cancel_trade(state: &GameState, action: &CancelTradeAction) -> Result<GameState, EventError> {
    let mut next = state.clone();

    let Some(listing) = next.trades.listings.remove(&action.listing_id) else {
        return Err(EventError::ListingNotFound);
    };
    if listing.is_fulfilled() {
        return Err(EventError::ListingFulfilled);
    }
    if action.path != CancelPath::for_listing(&listing) {
        return Err(EventError::WrongCancellationPath);
    }

    for (item, quantity) in listing.items {
        next.inventory.credit(item, quantity);
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemName;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn state_with_listing(provenance: ListingProvenance, bought_at: Option<i64>) -> GameState {
        let mut state = GameState::new();
        state.inventory.credit(ItemName::Wood, dec!(10));
        state.trades.listings.insert(
            "listing-1".to_string(),
            TradeListing {
                items: BTreeMap::from([(ItemName::Wood, dec!(30)), (ItemName::Stone, dec!(4))]),
                sfl: dec!(12),
                bought_at,
                provenance,
            },
        );
        state
    }

    fn cancel(path: CancelPath) -> CancelTradeAction {
        CancelTradeAction {
            listing_id: "listing-1".to_string(),
            path,
        }
    }

    #[test]
    fn cancel_restores_the_exact_offered_quantities() {
        let state = state_with_listing(ListingProvenance::Current, None);
        let next = cancel_trade(&state, &cancel(CancelPath::Remote)).unwrap();
        assert_eq!(next.inventory.amount(ItemName::Wood), dec!(40));
        assert_eq!(next.inventory.amount(ItemName::Stone), dec!(4));
        assert!(next.trades.listings.is_empty());
        // Input untouched.
        assert_eq!(state.trades.listings.len(), 1);
    }

    #[test]
    fn legacy_listings_cancel_through_the_legacy_path() {
        let state = state_with_listing(ListingProvenance::Legacy, None);
        let next = cancel_trade(&state, &cancel(CancelPath::Legacy)).unwrap();
        assert_eq!(next.inventory.amount(ItemName::Wood), dec!(40));
        assert!(next.trades.listings.is_empty());
    }

    #[test]
    fn pathway_mismatch_is_rejected() {
        let state = state_with_listing(ListingProvenance::Legacy, None);
        assert_eq!(
            cancel_trade(&state, &cancel(CancelPath::Remote)),
            Err(EventError::WrongCancellationPath)
        );

        let state = state_with_listing(ListingProvenance::Current, None);
        assert_eq!(
            cancel_trade(&state, &cancel(CancelPath::Legacy)),
            Err(EventError::WrongCancellationPath)
        );
        assert_eq!(state.inventory.amount(ItemName::Wood), dec!(10));
    }

    #[test]
    fn fulfilled_listings_cannot_be_cancelled() {
        let state = state_with_listing(ListingProvenance::Current, Some(1_700_000_000_000));
        assert_eq!(
            cancel_trade(&state, &cancel(CancelPath::Remote)),
            Err(EventError::ListingFulfilled)
        );
        assert_eq!(state.trades.listings.len(), 1);
    }

    #[test]
    fn unknown_listing_is_rejected() {
        let state = state_with_listing(ListingProvenance::Current, None);
        let action = CancelTradeAction {
            listing_id: "missing".to_string(),
            path: CancelPath::Remote,
        };
        assert_eq!(cancel_trade(&state, &action), Err(EventError::ListingNotFound));
    }
}
