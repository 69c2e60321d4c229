//! # price-ladder
//!
//! Order book aggregation and price-window engine for rendering a scrollable
//! price ladder.
//!
//! This library maintains a live, price-indexed view of a two-sided order
//! book and derives, on every update, everything a ladder UI needs: per-price
//! aggregated volumes (with the user's own size broken out), a stable center
//! price, and the descending sequence of prices to display — either every
//! integer across a padded span (*dense*) or only prices with liquidity
//! (*sparse*).
//!
//! ## Features
//!
//! - **Per-price aggregation**: raw bid/ask entries reduced to
//!   `total (+N yours)` volumes per level
//! - **User-neutral center price**: midpoint of the best non-user quotes,
//!   so a local order never skews the reference point
//! - **Dense & sparse price sequences**: gapless padded windows or
//!   liquidity-only rows, always descending and deterministic
//! - **Incremental range extension**: off-range user orders grow the dense
//!   sequence instead of regenerating tens of thousands of rows
//! - **Snapshot publishing**: every mutation atomically recomputes and hands
//!   subscribers an immutable [`LadderSnapshot`]
//!
//! ## Quick Start
//!
//! ```rust
//! use price_ladder::{LadderConfig, LadderStore, OrderEntry, Side, UserOrder};
//!
//! let mut store = LadderStore::new(LadderConfig::default());
//!
//! // Initial load from the market-data collaborator
//! store.replace_book(
//!     vec![OrderEntry::market(99, 10), OrderEntry::market(98, 25)],
//!     vec![OrderEntry::market(101, 8), OrderEntry::market(102, 40)],
//!     100,
//! );
//!
//! // Submit a local order; derived state recomputes before this returns
//! store.submit(UserOrder::new(99, 5, Side::Bid)).unwrap();
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.center_price, 100);
//! assert_eq!(snapshot.levels[&99].bid_size, 15);
//! assert_eq!(snapshot.levels[&99].user_bid_size, 5);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Core types: `OrderEntry`, `OrderBook`, `UserOrder`, `Side` |
//! | [`ladder`] | Pure derivations: aggregation, center price, price ranges |
//! | [`store`] | Stateful engine: `LadderStore`, snapshots, subscriptions |
//! | [`feed`] | One-shot book feeds: `BookFeed`, `StaticFeed`, `MockFeed` |
//! | [`error`] | Error types |
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `mock` | ✅ | Mock market-data feed (pulls in `rand`) |

pub mod error;
pub mod feed;
pub mod ladder;
pub mod store;
pub mod types;

// Re-exports - Core types
pub use error::{LadderError, Result};
pub use types::{OrderBook, OrderEntry, Side, UserOrder};

// Re-exports - Ladder derivations
pub use ladder::{
    aggregate_by_price, center_price, closest_index, dense_range, extend_range, sparse_range,
    LevelVolumes, PriceLevelMap, RangeMode, DEFAULT_PADDING,
};

// Re-exports - Store
pub use store::{LadderConfig, LadderSnapshot, LadderStats, LadderStore};

// Re-exports - Feeds
pub use feed::{BookFeed, StaticFeed};

#[cfg(feature = "mock")]
pub use feed::MockFeed;
