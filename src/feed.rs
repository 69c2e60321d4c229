//! Order book feed abstraction.
//!
//! The engine consumes exactly one payload per instrument session: an
//! [`OrderBook`] plus its last traded price, delivered through
//! [`BookFeed::fetch`]. If an upstream system streams updates, each update
//! maps to another [`crate::store::LadderStore::replace_book`] call; no
//! incremental push protocol is modeled here.
//!
//! # Implementing Custom Feeds
//!
//! ```
//! use price_ladder::feed::BookFeed;
//! use price_ladder::{OrderBook, Result};
//!
//! struct MyFeed {
//!     book: OrderBook,
//! }
//!
//! impl BookFeed for MyFeed {
//!     fn fetch(self) -> Result<OrderBook> {
//!         Ok(self.book)
//!     }
//! }
//! ```

use crate::error::Result;
use crate::types::OrderBook;

#[cfg(feature = "mock")]
use crate::types::OrderEntry;
#[cfg(feature = "mock")]
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Trait for one-shot order book feeds.
///
/// `fetch()` consumes `self`: the load happens once and then hands off to
/// the synchronous mutation model of the store.
pub trait BookFeed {
    /// Consume the feed and return the full order book payload.
    fn fetch(self) -> Result<OrderBook>;
}

// ============================================================================
// Static Feed (for testing)
// ============================================================================

/// A feed that returns a pre-built book. Useful for unit tests.
pub struct StaticFeed {
    book: OrderBook,
}

impl StaticFeed {
    /// Create a feed around an existing book.
    pub fn new(book: OrderBook) -> Self {
        Self { book }
    }
}

impl BookFeed for StaticFeed {
    fn fetch(self) -> Result<OrderBook> {
        Ok(self.book)
    }
}

// ============================================================================
// Mock Feed (feature-gated)
// ============================================================================

/// Base price the mock book is built around.
#[cfg(feature = "mock")]
const MOCK_BASE_PRICE: u64 = 50_000;

/// Tick distance between consecutive mock levels.
#[cfg(feature = "mock")]
const MOCK_TICK: u64 = 10;

/// Mock market-data feed, standing in for a live collaborator.
///
/// Generates `length` entries: the first half are bids descending from the
/// base price in tick steps, the second half asks ascending from one tick
/// above it. Sizes are uniform in `1..=100`. Seed the generator for
/// deterministic books in tests.
///
/// # Example
///
/// ```
/// use price_ladder::feed::{BookFeed, MockFeed};
///
/// let book = MockFeed::new("BTC_USD").with_length(30).with_seed(7).fetch().unwrap();
/// assert_eq!(book.bids.len(), 15);
/// assert_eq!(book.asks.len(), 15);
/// assert_eq!(book.last_traded_price, 50_000);
/// ```
#[cfg(feature = "mock")]
#[derive(Debug, Clone)]
pub struct MockFeed {
    ticker: String,
    length: usize,
    seed: Option<u64>,
}

#[cfg(feature = "mock")]
impl MockFeed {
    /// Create a mock feed for the given ticker.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            length: 2000,
            seed: None,
        }
    }

    /// Set the total number of generated entries (split across both sides).
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Seed the size generator for reproducible books.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The ticker this feed simulates.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }
}

#[cfg(feature = "mock")]
impl BookFeed for MockFeed {
    fn fetch(self) -> Result<OrderBook> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let half = self.length / 2;
        let mut bids = Vec::with_capacity(half);
        let mut asks = Vec::with_capacity(self.length - half);

        for i in 0..self.length {
            let size: u32 = rng.gen_range(1..=100);
            if i < half {
                let price = MOCK_BASE_PRICE.saturating_sub(i as u64 * MOCK_TICK);
                bids.push(OrderEntry::market(price, size));
            } else {
                let price = MOCK_BASE_PRICE + MOCK_TICK + (i - half) as u64 * MOCK_TICK;
                asks.push(OrderEntry::market(price, size));
            }
        }

        log::debug!(
            "generated mock book for {}: {} bids, {} asks",
            self.ticker,
            bids.len(),
            asks.len()
        );

        Ok(OrderBook::new(bids, asks, MOCK_BASE_PRICE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderEntry;

    #[test]
    fn test_static_feed() {
        let book = OrderBook::new(vec![OrderEntry::market(99, 1)], Vec::new(), 100);
        let fetched = StaticFeed::new(book.clone()).fetch().unwrap();
        assert_eq!(fetched, book);
    }

    #[cfg(feature = "mock")]
    mod mock_tests {
        use super::*;

        #[test]
        fn test_mock_feed_shape() {
            let book = MockFeed::new("TEST").with_length(30).with_seed(1).fetch().unwrap();

            assert_eq!(book.bids.len(), 15);
            assert_eq!(book.asks.len(), 15);
            assert_eq!(book.last_traded_price, MOCK_BASE_PRICE);

            // Bids descend from the base, asks ascend from one tick above
            assert_eq!(book.best_bid(), Some(MOCK_BASE_PRICE));
            assert_eq!(book.best_ask(), Some(MOCK_BASE_PRICE + MOCK_TICK));
            assert!(book.bids.iter().all(|e| !e.is_user_order));
            assert!(book.asks.iter().all(|e| e.size >= 1 && e.size <= 100));
        }

        #[test]
        fn test_mock_feed_deterministic_with_seed() {
            let a = MockFeed::new("TEST").with_length(100).with_seed(42).fetch().unwrap();
            let b = MockFeed::new("TEST").with_length(100).with_seed(42).fetch().unwrap();
            assert_eq!(a, b);
        }

        #[test]
        fn test_mock_feed_no_crossed_quotes() {
            let book = MockFeed::new("TEST").with_length(200).with_seed(3).fetch().unwrap();
            let (bid, ask) = (book.best_bid().unwrap(), book.best_ask().unwrap());
            assert!(bid < ask);
        }
    }
}
