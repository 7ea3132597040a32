//! Greenhollow Game Core
//!
//! Platform-agnostic game logic for the Greenhollow farming and trading
//! game: the seasonal calendar, banner pricing, premium-access policy,
//! and the validated event reducers that turn one immutable state
//! snapshot into the next. Rendering, persistence, and network sync live
//! in other crates; this one has no I/O and reads no clocks.

pub mod error;
pub mod events;
pub mod inventory;
pub mod items;
pub mod machine;
pub mod pricing;
pub mod seasons;
pub mod state;
pub mod vip;

// Re-export commonly used types
pub use error::EventError;
pub use events::{
    Action, CancelPath, CancelTradeAction, ClaimTradeAction, ListTradeAction, MAX_ACTIVE_LISTINGS,
    MAX_ASKING_PRICE, PurchaseBannerAction, TRADE_FEE_PERCENT, apply_action, cancel_trade,
    claim_trade, list_trade, purchase_banner,
};
pub use inventory::Inventory;
pub use items::ItemName;
pub use machine::GameMachine;
pub use pricing::{LIFETIME_BANNER_PRICE, banner_price};
pub use seasons::{
    SEASONS, Season, WEEK_MS, previous_seasonal_banner_at, season_at, season_of_banner,
    seasonal_banner_at,
};
pub use state::{
    Bumpkin, GameState, ListingProvenance, TradeListing, TradeState, bumpkin_level,
};
pub use vip::{GOLD_PASS_SUNSET_MS, has_premium_access};
