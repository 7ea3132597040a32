//! Premium (VIP) access policy.
//!
//! A hard cutover, not a migration: before the Gold Pass sunset the pass
//! is the only thing that grants access, from the sunset onward only
//! banner ownership does. Exactly one rule is in force for any timestamp.

use crate::inventory::Inventory;
use crate::items::ItemName;
use crate::seasons;

/// 2024-05-01T00:00:00Z, the moment the Gold Pass stops granting access.
pub const GOLD_PASS_SUNSET_MS: i64 = 1_714_521_600_000;

/// Whether the inventory grants premium access at the given moment.
///
/// After the sunset, either the banner of the currently running season or
/// the lifetime banner qualifies.
#[must_use]
pub fn has_premium_access(inventory: &Inventory, now_ms: i64) -> bool {
    if now_ms < GOLD_PASS_SUNSET_MS {
        return inventory.has(ItemName::GoldPass);
    }

    inventory.has(seasons::seasonal_banner_at(now_ms))
        || inventory.has(ItemName::LifetimeFarmerBanner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn before_sunset_only_the_gold_pass_counts() {
        let now = GOLD_PASS_SUNSET_MS - 1;
        let banner = seasons::seasonal_banner_at(now);

        let with_pass = Inventory::new().with(ItemName::GoldPass, dec!(1));
        assert!(has_premium_access(&with_pass, now));

        // Banner ownership is irrelevant under the old rule.
        let with_banner = Inventory::new().with(banner, dec!(1));
        assert!(!has_premium_access(&with_banner, now));
    }

    #[test]
    fn after_sunset_only_the_current_banner_counts() {
        let now = GOLD_PASS_SUNSET_MS;
        let banner = seasons::seasonal_banner_at(now);

        let with_banner = Inventory::new().with(banner, dec!(1));
        assert!(has_premium_access(&with_banner, now));

        // The pass is irrelevant under the new rule.
        let with_pass = Inventory::new().with(ItemName::GoldPass, dec!(1));
        assert!(!has_premium_access(&with_pass, now));
    }

    #[test]
    fn stale_season_banner_does_not_grant_access() {
        let now = GOLD_PASS_SUNSET_MS;
        let current = seasons::season_at(now);
        let stale = current.previous().unwrap().banner();
        let inventory = Inventory::new().with(stale, dec!(1));
        assert!(!has_premium_access(&inventory, now));
    }

    #[test]
    fn lifetime_banner_grants_access_after_sunset() {
        let inventory = Inventory::new().with(ItemName::LifetimeFarmerBanner, dec!(1));
        assert!(has_premium_access(&inventory, GOLD_PASS_SUNSET_MS));
        assert!(!has_premium_access(&inventory, GOLD_PASS_SUNSET_MS - 1));
    }
}
