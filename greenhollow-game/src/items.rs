//! Inventory item catalog.
//!
//! Every inventory key is a member of this closed enumeration; the display
//! names double as the stable serde map keys the rest of the stack (saves,
//! wire payloads, translation params) relies on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MAX_LISTED_CROPS: u32 = 2_000;
const MAX_LISTED_WOOD: u32 = 500;
const MAX_LISTED_STONE: u32 = 500;
const MAX_LISTED_IRON: u32 = 200;
const MAX_LISTED_GOLD: u32 = 100;
const MAX_LISTED_EGGS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemName {
    // Tradable farm resources
    Sunflower,
    Potato,
    Pumpkin,
    Carrot,
    Cabbage,
    Wood,
    Stone,
    Iron,
    Gold,
    Egg,
    // Premium currency spent on banners
    #[serde(rename = "Block Buck")]
    BlockBuck,
    // Legacy premium pass, sunset in favor of seasonal banners
    #[serde(rename = "Gold Pass")]
    GoldPass,
    // Seasonal banners, one per season window
    #[serde(rename = "Sprout Rising Banner")]
    SproutRisingBanner,
    #[serde(rename = "Frostbloom Banner")]
    FrostbloomBanner,
    #[serde(rename = "Meadow Waking Banner")]
    MeadowWakingBanner,
    #[serde(rename = "Golden Thresh Banner")]
    GoldenThreshBanner,
    #[serde(rename = "Ember Orchard Banner")]
    EmberOrchardBanner,
    #[serde(rename = "Starlit Furrow Banner")]
    StarlitFurrowBanner,
    // Permanent access, mutually exclusive with seasonal banner purchases
    #[serde(rename = "Lifetime Farmer Banner")]
    LifetimeFarmerBanner,
}

impl ItemName {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sunflower => "Sunflower",
            Self::Potato => "Potato",
            Self::Pumpkin => "Pumpkin",
            Self::Carrot => "Carrot",
            Self::Cabbage => "Cabbage",
            Self::Wood => "Wood",
            Self::Stone => "Stone",
            Self::Iron => "Iron",
            Self::Gold => "Gold",
            Self::Egg => "Egg",
            Self::BlockBuck => "Block Buck",
            Self::GoldPass => "Gold Pass",
            Self::SproutRisingBanner => "Sprout Rising Banner",
            Self::FrostbloomBanner => "Frostbloom Banner",
            Self::MeadowWakingBanner => "Meadow Waking Banner",
            Self::GoldenThreshBanner => "Golden Thresh Banner",
            Self::EmberOrchardBanner => "Ember Orchard Banner",
            Self::StarlitFurrowBanner => "Starlit Furrow Banner",
            Self::LifetimeFarmerBanner => "Lifetime Farmer Banner",
        }
    }

    /// Maximum quantity a single trade listing may offer of this item.
    /// `None` means the item cannot be listed at all (currency, passes,
    /// banners).
    #[must_use]
    pub const fn max_listed_quantity(self) -> Option<u32> {
        match self {
            Self::Sunflower | Self::Potato | Self::Pumpkin | Self::Carrot | Self::Cabbage => {
                Some(MAX_LISTED_CROPS)
            }
            Self::Wood => Some(MAX_LISTED_WOOD),
            Self::Stone => Some(MAX_LISTED_STONE),
            Self::Iron => Some(MAX_LISTED_IRON),
            Self::Gold => Some(MAX_LISTED_GOLD),
            Self::Egg => Some(MAX_LISTED_EGGS),
            Self::BlockBuck
            | Self::GoldPass
            | Self::SproutRisingBanner
            | Self::FrostbloomBanner
            | Self::MeadowWakingBanner
            | Self::GoldenThreshBanner
            | Self::EmberOrchardBanner
            | Self::StarlitFurrowBanner
            | Self::LifetimeFarmerBanner => None,
        }
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ItemName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sunflower" => Ok(Self::Sunflower),
            "Potato" => Ok(Self::Potato),
            "Pumpkin" => Ok(Self::Pumpkin),
            "Carrot" => Ok(Self::Carrot),
            "Cabbage" => Ok(Self::Cabbage),
            "Wood" => Ok(Self::Wood),
            "Stone" => Ok(Self::Stone),
            "Iron" => Ok(Self::Iron),
            "Gold" => Ok(Self::Gold),
            "Egg" => Ok(Self::Egg),
            "Block Buck" => Ok(Self::BlockBuck),
            "Gold Pass" => Ok(Self::GoldPass),
            "Sprout Rising Banner" => Ok(Self::SproutRisingBanner),
            "Frostbloom Banner" => Ok(Self::FrostbloomBanner),
            "Meadow Waking Banner" => Ok(Self::MeadowWakingBanner),
            "Golden Thresh Banner" => Ok(Self::GoldenThreshBanner),
            "Ember Orchard Banner" => Ok(Self::EmberOrchardBanner),
            "Starlit Furrow Banner" => Ok(Self::StarlitFurrowBanner),
            "Lifetime Farmer Banner" => Ok(Self::LifetimeFarmerBanner),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_keys_match_display_names() {
        let json = serde_json::to_string(&ItemName::BlockBuck).unwrap();
        assert_eq!(json, "\"Block Buck\"");
        let parsed: ItemName = serde_json::from_str("\"Lifetime Farmer Banner\"").unwrap();
        assert_eq!(parsed, ItemName::LifetimeFarmerBanner);
    }

    #[test]
    fn key_roundtrips_through_from_str() {
        for item in [
            ItemName::Sunflower,
            ItemName::BlockBuck,
            ItemName::GoldPass,
            ItemName::StarlitFurrowBanner,
            ItemName::LifetimeFarmerBanner,
        ] {
            assert_eq!(item.key().parse::<ItemName>(), Ok(item));
        }
    }

    #[test]
    fn only_farm_resources_are_listable() {
        assert_eq!(ItemName::Gold.max_listed_quantity(), Some(100));
        assert_eq!(ItemName::Sunflower.max_listed_quantity(), Some(2_000));
        assert_eq!(ItemName::BlockBuck.max_listed_quantity(), None);
        assert_eq!(ItemName::GoldPass.max_listed_quantity(), None);
        assert_eq!(ItemName::SproutRisingBanner.max_listed_quantity(), None);
    }
}
