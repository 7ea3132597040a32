//! Banner pricing.
//!
//! Seasonal banners are priced by whole weeks elapsed since their season
//! started: an early-bird window with stacking discounts, a peak tier,
//! and two decaying late tiers. The lifetime banner is flat-priced.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::items::ItemName;
use crate::seasons::{self, WEEK_MS};

pub const LIFETIME_BANNER_PRICE: Decimal = dec!(540);

const EARLY_BIRD_PRICE: Decimal = dec!(65);
const PEAK_PRICE: Decimal = dec!(90);
const MID_SEASON_PRICE: Decimal = dec!(70);
const LATE_SEASON_PRICE: Decimal = dec!(50);
const DISCOUNT: Decimal = dec!(15);

const PEAK_WEEK: i64 = 2;
const MID_SEASON_WEEK: i64 = 4;
const LATE_SEASON_WEEK: i64 = 8;

/// Price of a banner in Block Bucks at a given moment.
///
/// Returns `None` when the item is not a purchasable banner. Timestamps
/// before the season start produce a negative week count and land in the
/// early-bird tier; that is the defined behavior, not an accident. The
/// early-bird tier is clamped at zero so no combination of discounts can
/// ever go negative.
#[must_use]
pub fn banner_price(
    banner: ItemName,
    has_previous_banner: bool,
    has_premium_pass: bool,
    now_ms: i64,
) -> Option<Decimal> {
    if banner == ItemName::LifetimeFarmerBanner {
        return Some(LIFETIME_BANNER_PRICE);
    }

    let season = seasons::season_of_banner(banner)?;
    let weeks_elapsed = (now_ms - season.start_ms()).div_euclid(WEEK_MS);

    if weeks_elapsed < PEAK_WEEK {
        let mut price = EARLY_BIRD_PRICE;
        if has_previous_banner {
            price -= DISCOUNT;
        }
        if has_premium_pass {
            price -= DISCOUNT;
        }
        return Some(price.max(Decimal::ZERO));
    }
    if weeks_elapsed < MID_SEASON_WEEK {
        return Some(PEAK_PRICE);
    }
    if weeks_elapsed < LATE_SEASON_WEEK {
        return Some(MID_SEASON_PRICE);
    }
    Some(LATE_SEASON_PRICE)
}
