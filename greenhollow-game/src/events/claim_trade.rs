//! Trade claim reducer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EventError;
use crate::state::GameState;

/// Fraction of the sale price retained as the trading fee. The seller is
/// credited the remainder, matching the "you will receive" figure shown
/// at listing time.
pub const TRADE_FEE_PERCENT: Decimal = dec!(0.10);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimTradeAction {
    pub listing_id: String,
}

/// Claim the proceeds of a fulfilled listing.
///
/// Credits the asking price net of [`TRADE_FEE_PERCENT`] to the SFL
/// balance and removes the listing. Open listings cannot be claimed;
/// they can only be cancelled.
///
/// # Errors
///
/// Rejects on an unknown listing id or an unfulfilled listing. The input
/// state is never modified.
pub fn claim_trade(state: &GameState, action: &ClaimTradeAction) -> Result<GameState, EventError> {
    let mut next = state.clone();

    let Some(listing) = next.trades.listings.remove(&action.listing_id) else {
        return Err(EventError::ListingNotFound);
    };
    if !listing.is_fulfilled() {
        return Err(EventError::ListingNotFulfilled);
    }

    let proceeds = listing.sfl - listing.sfl * TRADE_FEE_PERCENT;
    next.balance += proceeds;
    Ok(next)
}
