//! Typed rejection reasons for game events.
//!
//! Every validation failure is an expected, recoverable rejection the UI
//! presents to the player, never a defect. Each variant carries a stable
//! translation key so the presentation layer can localize it.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("no bumpkin on this farm")]
    NoBumpkin,
    #[error("banner already owned")]
    AlreadyOwned,
    #[error("not a recognized banner")]
    InvalidBanner,
    #[error("the lifetime banner already covers seasonal access")]
    SupersededByLifetime,
    #[error("banner is not on sale this season")]
    WrongSeason,
    #[error("insufficient Block Bucks")]
    InsufficientBlockBucks,
    #[error("listing limit reached")]
    ListingLimitExceeded,
    #[error("offered quantity exceeds inventory")]
    InsufficientInventory,
    #[error("premium access required")]
    AccessDenied,
    #[error("offer is empty or has a non-positive quantity")]
    InvalidOffer,
    #[error("item cannot be listed")]
    NotTradable,
    #[error("offered quantity exceeds the listing cap")]
    QuantityLimitExceeded,
    #[error("asking price is outside the allowed range")]
    PriceLimitExceeded,
    #[error("listing not found")]
    ListingNotFound,
    #[error("listing has already been bought")]
    ListingFulfilled,
    #[error("listing has not been bought yet")]
    ListingNotFulfilled,
    #[error("wrong cancellation path for this listing")]
    WrongCancellationPath,
}

impl EventError {
    /// Stable key the localization service resolves to a player-facing
    /// message. Keys are part of the external contract; renaming one is a
    /// breaking change.
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::NoBumpkin => "error.noBumpkin",
            Self::AlreadyOwned => "error.banner.alreadyOwned",
            Self::InvalidBanner => "error.banner.invalid",
            Self::SupersededByLifetime => "error.banner.lifetimeOwned",
            Self::WrongSeason => "error.banner.wrongSeason",
            Self::InsufficientBlockBucks => "error.blockBucks.insufficient",
            Self::ListingLimitExceeded => "error.trade.listingLimit",
            Self::InsufficientInventory => "error.trade.insufficientInventory",
            Self::AccessDenied => "error.trade.vipRequired",
            Self::InvalidOffer => "error.trade.invalidOffer",
            Self::NotTradable => "error.trade.notTradable",
            Self::QuantityLimitExceeded => "error.trade.quantityLimit",
            Self::PriceLimitExceeded => "error.trade.priceLimit",
            Self::ListingNotFound => "error.trade.notFound",
            Self::ListingFulfilled => "error.trade.alreadyBought",
            Self::ListingNotFulfilled => "error.trade.notBought",
            Self::WrongCancellationPath => "error.trade.wrongCancelPath",
        }
    }
}
