//! Banner purchase reducer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EventError;
use crate::items::ItemName;
use crate::pricing::{self, LIFETIME_BANNER_PRICE};
use crate::seasons;
use crate::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseBannerAction {
    /// Seasonal banner or the lifetime variant.
    pub name: ItemName,
}

/// Validate and apply a banner purchase.
///
/// Seasonal banners are only on sale during their own season, are
/// excluded once the lifetime banner is owned, and are discounted in the
/// early-bird window for previous-banner and Gold Pass holders. The
/// lifetime banner is flat-priced and skips all seasonal checks.
///
/// # Errors
///
/// Rejects with the first failing check of the validation ladder; the
/// input state is never modified.
pub fn purchase_banner(
    state: &GameState,
    action: &PurchaseBannerAction,
    now_ms: i64,
) -> Result<GameState, EventError> {
    let mut next = state.clone();

    if next.bumpkin.is_none() {
        return Err(EventError::NoBumpkin);
    }

    if action.name == ItemName::LifetimeFarmerBanner {
        return purchase_lifetime_banner(next);
    }

    let season = seasons::season_of_banner(action.name).ok_or(EventError::InvalidBanner)?;
    if next.inventory.has(action.name) {
        return Err(EventError::AlreadyOwned);
    }
    if next.inventory.has(ItemName::LifetimeFarmerBanner) {
        return Err(EventError::SupersededByLifetime);
    }
    if season != seasons::season_at(now_ms) {
        return Err(EventError::WrongSeason);
    }

    let has_previous_banner = season
        .previous_banner()
        .is_some_and(|banner| next.inventory.has(banner));
    let has_gold_pass = next.inventory.has(ItemName::GoldPass);
    let price = pricing::banner_price(action.name, has_previous_banner, has_gold_pass, now_ms)
        .ok_or(EventError::InvalidBanner)?;

    if !next.inventory.debit(ItemName::BlockBuck, price) {
        return Err(EventError::InsufficientBlockBucks);
    }
    next.inventory.credit(action.name, Decimal::ONE);
    Ok(next)
}

fn purchase_lifetime_banner(mut next: GameState) -> Result<GameState, EventError> {
    if next.inventory.has(ItemName::LifetimeFarmerBanner) {
        return Err(EventError::AlreadyOwned);
    }
    if !next.inventory.debit(ItemName::BlockBuck, LIFETIME_BANNER_PRICE) {
        return Err(EventError::InsufficientBlockBucks);
    }
    next.inventory.credit(ItemName::LifetimeFarmerBanner, Decimal::ONE);
    Ok(next)
}
