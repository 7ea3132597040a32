//! Seasonal calendar.
//!
//! A static table of quarterly season windows drives everything
//! time-dependent in the economy: which banner is on sale, when its
//! pricing clock started, and which banner counts as "previous" for the
//! returning-player discount. All lookups take an explicit timestamp in
//! epoch milliseconds; nothing here reads the wall clock.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::items::ItemName;

pub const WEEK_MS: i64 = 1000 * 60 * 60 * 24 * 7;

// Season windows are [start, end) in UTC epoch milliseconds.
const SPROUT_RISING_START: i64 = 1_690_848_000_000; // 2023-08-01T00:00:00Z
const FROSTBLOOM_START: i64 = 1_698_796_800_000; // 2023-11-01T00:00:00Z
const MEADOW_WAKING_START: i64 = 1_706_745_600_000; // 2024-02-01T00:00:00Z
const GOLDEN_THRESH_START: i64 = 1_714_521_600_000; // 2024-05-01T00:00:00Z
const EMBER_ORCHARD_START: i64 = 1_722_470_400_000; // 2024-08-01T00:00:00Z
const STARLIT_FURROW_START: i64 = 1_730_419_200_000; // 2024-11-01T00:00:00Z
const STARLIT_FURROW_END: i64 = 1_738_368_000_000; // 2025-02-01T00:00:00Z

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    SproutRising,
    Frostbloom,
    MeadowWaking,
    GoldenThresh,
    EmberOrchard,
    StarlitFurrow,
}

pub const SEASONS: [Season; 6] = [
    Season::SproutRising,
    Season::Frostbloom,
    Season::MeadowWaking,
    Season::GoldenThresh,
    Season::EmberOrchard,
    Season::StarlitFurrow,
];

impl Season {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SproutRising => "Sprout Rising",
            Self::Frostbloom => "Frostbloom",
            Self::MeadowWaking => "Meadow Waking",
            Self::GoldenThresh => "Golden Thresh",
            Self::EmberOrchard => "Ember Orchard",
            Self::StarlitFurrow => "Starlit Furrow",
        }
    }

    #[must_use]
    pub const fn start_ms(self) -> i64 {
        match self {
            Self::SproutRising => SPROUT_RISING_START,
            Self::Frostbloom => FROSTBLOOM_START,
            Self::MeadowWaking => MEADOW_WAKING_START,
            Self::GoldenThresh => GOLDEN_THRESH_START,
            Self::EmberOrchard => EMBER_ORCHARD_START,
            Self::StarlitFurrow => STARLIT_FURROW_START,
        }
    }

    #[must_use]
    pub const fn end_ms(self) -> i64 {
        match self {
            Self::SproutRising => FROSTBLOOM_START,
            Self::Frostbloom => MEADOW_WAKING_START,
            Self::MeadowWaking => GOLDEN_THRESH_START,
            Self::GoldenThresh => EMBER_ORCHARD_START,
            Self::EmberOrchard => STARLIT_FURROW_START,
            Self::StarlitFurrow => STARLIT_FURROW_END,
        }
    }

    /// Banner on sale during this season.
    #[must_use]
    pub const fn banner(self) -> ItemName {
        match self {
            Self::SproutRising => ItemName::SproutRisingBanner,
            Self::Frostbloom => ItemName::FrostbloomBanner,
            Self::MeadowWaking => ItemName::MeadowWakingBanner,
            Self::GoldenThresh => ItemName::GoldenThreshBanner,
            Self::EmberOrchard => ItemName::EmberOrchardBanner,
            Self::StarlitFurrow => ItemName::StarlitFurrowBanner,
        }
    }

    /// The immediately preceding season. The first defined season has no
    /// predecessor.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::SproutRising => None,
            Self::Frostbloom => Some(Self::SproutRising),
            Self::MeadowWaking => Some(Self::Frostbloom),
            Self::GoldenThresh => Some(Self::MeadowWaking),
            Self::EmberOrchard => Some(Self::GoldenThresh),
            Self::StarlitFurrow => Some(Self::EmberOrchard),
        }
    }

    /// Banner of the preceding season, used for the returning-player
    /// discount. `None` for the first season: the discount simply never
    /// applies there.
    #[must_use]
    pub const fn previous_banner(self) -> Option<ItemName> {
        match self.previous() {
            Some(season) => Some(season.banner()),
            None => None,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Active season for a timestamp. Total over all of `i64`: timestamps
/// before the first window clamp to the first season and timestamps at or
/// past the last window clamp to the last.
#[must_use]
pub fn season_at(now_ms: i64) -> Season {
    for season in SEASONS {
        if now_ms < season.end_ms() {
            return season;
        }
    }
    Season::StarlitFurrow
}

/// Banner currently on sale.
#[must_use]
pub fn seasonal_banner_at(now_ms: i64) -> ItemName {
    season_at(now_ms).banner()
}

/// Previous season's banner relative to a timestamp, if any.
#[must_use]
pub fn previous_seasonal_banner_at(now_ms: i64) -> Option<ItemName> {
    season_at(now_ms).previous_banner()
}

/// Season a banner belongs to; `None` for anything that is not a seasonal
/// banner (including the lifetime banner).
#[must_use]
pub const fn season_of_banner(item: ItemName) -> Option<Season> {
    match item {
        ItemName::SproutRisingBanner => Some(Season::SproutRising),
        ItemName::FrostbloomBanner => Some(Season::Frostbloom),
        ItemName::MeadowWakingBanner => Some(Season::MeadowWaking),
        ItemName::GoldenThreshBanner => Some(Season::GoldenThresh),
        ItemName::EmberOrchardBanner => Some(Season::EmberOrchard),
        ItemName::StarlitFurrowBanner => Some(Season::StarlitFurrow),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_starts_are_inclusive_and_ends_exclusive() {
        assert_eq!(season_at(GOLDEN_THRESH_START), Season::GoldenThresh);
        assert_eq!(season_at(GOLDEN_THRESH_START - 1), Season::MeadowWaking);
        assert_eq!(season_at(EMBER_ORCHARD_START - 1), Season::GoldenThresh);
    }

    #[test]
    fn out_of_range_timestamps_clamp_to_the_table_edges() {
        assert_eq!(season_at(0), Season::SproutRising);
        assert_eq!(season_at(i64::MIN), Season::SproutRising);
        assert_eq!(season_at(STARLIT_FURROW_END), Season::StarlitFurrow);
        assert_eq!(season_at(i64::MAX), Season::StarlitFurrow);
    }

    #[test]
    fn each_season_maps_to_its_own_banner() {
        for season in SEASONS {
            assert_eq!(season_of_banner(season.banner()), Some(season));
        }
        assert_eq!(season_of_banner(ItemName::LifetimeFarmerBanner), None);
        assert_eq!(season_of_banner(ItemName::GoldPass), None);
    }

    #[test]
    fn first_season_has_no_previous_banner() {
        assert_eq!(Season::SproutRising.previous_banner(), None);
        assert_eq!(
            Season::Frostbloom.previous_banner(),
            Some(ItemName::SproutRisingBanner)
        );
        assert_eq!(previous_seasonal_banner_at(0), None);
        assert_eq!(
            previous_seasonal_banner_at(GOLDEN_THRESH_START),
            Some(ItemName::MeadowWakingBanner)
        );
    }

    #[test]
    fn windows_are_contiguous() {
        for pair in SEASONS.windows(2) {
            assert_eq!(pair[0].end_ms(), pair[1].start_ms());
        }
    }
}
