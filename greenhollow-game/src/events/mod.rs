//! Game events and their reducers.
//!
//! Every player action is a pure reducer over the current snapshot:
//! `(state, action, now) -> Result<GameState, EventError>`. A reducer
//! either fully applies (returning a fresh snapshot) or rejects with a
//! typed reason, leaving the input untouched either way.

pub mod cancel_trade;
pub mod claim_trade;
pub mod list_trade;
pub mod purchase_banner;

pub use cancel_trade::{CancelPath, CancelTradeAction, cancel_trade};
pub use claim_trade::{ClaimTradeAction, TRADE_FEE_PERCENT, claim_trade};
pub use list_trade::{
    ListTradeAction, MAX_ACTIVE_LISTINGS, MAX_ASKING_PRICE, list_trade,
};
pub use purchase_banner::{PurchaseBannerAction, purchase_banner};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EventError;
use crate::state::GameState;

/// Dispatchable player action. The tag values are the wire names the
/// frontend sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "banner.purchased")]
    PurchaseBanner(PurchaseBannerAction),
    #[serde(rename = "trade.listed")]
    ListTrade(ListTradeAction),
    #[serde(rename = "trade.cancelled")]
    CancelTrade(CancelTradeAction),
    #[serde(rename = "trade.claimed")]
    ClaimTrade(ClaimTradeAction),
}

/// Route an action to its reducer.
///
/// The rng is only consulted by [`list_trade`] for fresh listing
/// identifiers; everything else is a pure function of `(state, action,
/// now_ms)`.
///
/// # Errors
///
/// Propagates the reducer's typed rejection; the input state is never
/// modified.
pub fn apply_action(
    state: &GameState,
    action: &Action,
    now_ms: i64,
    rng: &mut impl Rng,
) -> Result<GameState, EventError> {
    match action {
        Action::PurchaseBanner(action) => purchase_banner(state, action, now_ms),
        Action::ListTrade(action) => list_trade(state, action, now_ms, rng),
        Action::CancelTrade(action) => cancel_trade(state, action),
        Action::ClaimTrade(action) => claim_trade(state, action),
    }
}
