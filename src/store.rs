//! Stateful order book store and recompute cycle.
//!
//! [`LadderStore`] owns the canonical entry lists and drives the
//! mutate-then-recompute sequence: every mutation (order submission, book
//! replacement, mode switch) rebuilds the aggregation map, center price, and
//! display sequence before any reader can observe new state. Derived state
//! is published as an immutable [`LadderSnapshot`] behind an `Arc`;
//! consumers hold a snapshot, never a live view, and request a fresh one (or
//! subscribe) after the next recomputation.
//!
//! Single-threaded by design: there is no concurrent writer, so no locking.
//! If embedded in a multi-threaded host, wrap each mutation in one critical
//! section to preserve the "never observe partial state" guarantee.

use std::sync::Arc;

use crate::error::Result;
use crate::feed::BookFeed;
use crate::ladder::{
    aggregate_by_price, center_price, closest_index, dense_range, extend_range, sparse_range,
    PriceLevelMap, RangeMode, DEFAULT_PADDING,
};
use crate::types::{OrderBook, OrderEntry, Side, UserOrder};

/// Configuration for store behavior.
#[derive(Debug, Clone)]
pub struct LadderConfig {
    /// Extra prices generated beyond the observed span on each side
    pub padding: u64,

    /// Which price sequence the snapshot exposes
    pub mode: RangeMode,

    /// Whether to validate user orders before accepting them
    pub validate_orders: bool,

    /// Whether to log rejected orders and range extensions
    pub log_events: bool,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            mode: RangeMode::default(),
            validate_orders: true,
            log_events: true,
        }
    }
}

impl LadderConfig {
    /// Create a config with the default padding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding applied on each side of the dense sequence.
    pub fn with_padding(mut self, padding: u64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the initial display mode.
    pub fn with_mode(mut self, mode: RangeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable/disable order validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_orders = validate;
        self
    }

    /// Enable/disable event logs.
    pub fn with_logging(mut self, log: bool) -> Self {
        self.log_events = log;
        self
    }
}

/// Immutable snapshot of all derived ladder state.
///
/// Built fresh on every recomputation; a snapshot is internally consistent
/// (its prices, levels, and center all come from the same pass).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LadderSnapshot {
    /// Display price sequence, strictly descending
    pub prices: Vec<u64>,

    /// Per-price aggregated volumes
    pub levels: PriceLevelMap,

    /// Computed center price (may be absent from `prices` in sparse books)
    pub center_price: u64,

    /// Index into `prices` of the row closest to the center price
    pub center_index: Option<usize>,

    /// Monotonic recompute counter; increases on every mutation
    pub version: u64,
}

/// Statistics for monitoring store activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LadderStats {
    /// Total recompute passes performed
    pub recomputes: u64,

    /// User orders accepted
    pub submissions: u64,

    /// User orders rejected at the validation boundary
    pub rejected_orders: u64,

    /// Times the dense sequence was extended for an out-of-range order
    pub range_extensions: u64,
}

/// Callback invoked with every freshly published snapshot.
pub type SnapshotSubscriber = Box<dyn FnMut(&Arc<LadderSnapshot>)>;

/// Owner of the canonical order book state.
///
/// # Example
///
/// ```
/// use price_ladder::store::{LadderConfig, LadderStore};
/// use price_ladder::{OrderEntry, Side, UserOrder};
///
/// let mut store = LadderStore::new(LadderConfig::default());
/// store.replace_book(
///     vec![OrderEntry::market(99, 10)],
///     vec![OrderEntry::market(101, 10)],
///     100,
/// );
///
/// store.submit(UserOrder::new(99, 5, Side::Bid)).unwrap();
///
/// let snapshot = store.snapshot();
/// assert_eq!(snapshot.center_price, 100);
/// assert_eq!(snapshot.levels[&99].user_bid_size, 5);
/// ```
pub struct LadderStore {
    /// Configuration
    config: LadderConfig,

    /// Canonical entry lists, exclusively owned by the store
    book: OrderBook,

    /// Long-lived dense sequence; grown via extension, regenerated on load
    dense: Vec<u64>,

    /// Latest published snapshot
    snapshot: Arc<LadderSnapshot>,

    /// Recompute subscribers
    subscribers: Vec<SnapshotSubscriber>,

    /// Activity statistics
    stats: LadderStats,
}

impl LadderStore {
    /// Create a store with an empty book.
    pub fn new(config: LadderConfig) -> Self {
        let book = OrderBook::default();
        let dense = dense_range(&book, config.padding);
        let mut store = Self {
            config,
            book,
            dense,
            snapshot: Arc::new(LadderSnapshot {
                prices: Vec::new(),
                levels: PriceLevelMap::default(),
                center_price: 0,
                center_index: None,
                version: 0,
            }),
            subscribers: Vec::new(),
            stats: LadderStats::default(),
        };
        store.recompute();
        store
    }

    /// Create a store and load its initial book from a feed.
    pub fn load<F: BookFeed>(config: LadderConfig, feed: F) -> Result<Self> {
        let mut store = Self::new(config);
        let book = feed.fetch()?;
        store.replace_book(book.bids, book.asks, book.last_traded_price);
        Ok(store)
    }

    /// Fully replace the book state (initial load or market-data refresh).
    ///
    /// Regenerates the dense sequence from scratch and recomputes all
    /// derived state.
    pub fn replace_book(
        &mut self,
        bids: Vec<OrderEntry>,
        asks: Vec<OrderEntry>,
        last_traded_price: u64,
    ) {
        self.book = OrderBook::new(bids, asks, last_traded_price);
        self.dense = dense_range(&self.book, self.config.padding);
        self.recompute();
    }

    /// Submit a user order.
    ///
    /// Appends a distinct user-tagged entry to the chosen side; entries are
    /// deliberately never merged so aggregates can decompose a level into
    /// "total (+N yours)". An order priced outside the current dense bounds
    /// extends the sequence instead of regenerating it.
    pub fn submit(&mut self, order: UserOrder) -> Result<()> {
        if self.config.validate_orders {
            if let Err(err) = order.validate() {
                self.stats.rejected_orders += 1;
                if self.config.log_events {
                    log::warn!("rejected user order at price {}: {err}", order.price);
                }
                return Err(err);
            }
        }

        let out_of_range = match (self.dense.first(), self.dense.last()) {
            (Some(&max), Some(&min)) => order.price > max || order.price < min,
            _ => true,
        };
        if out_of_range {
            self.dense = extend_range(&self.dense, order.price, self.config.padding);
            self.stats.range_extensions += 1;
            if self.config.log_events {
                log::debug!(
                    "extended dense range for out-of-range order at {} (now {} rows)",
                    order.price,
                    self.dense.len()
                );
            }
        }

        match order.side {
            Side::Bid => self.book.bids.push(order.into_entry()),
            Side::Ask => self.book.asks.push(order.into_entry()),
        }
        self.stats.submissions += 1;

        self.recompute();
        Ok(())
    }

    /// Switch between dense and sparse display sequences.
    pub fn set_mode(&mut self, mode: RangeMode) {
        if self.config.mode != mode {
            self.config.mode = mode;
            self.recompute();
        }
    }

    /// Register a callback invoked with every freshly published snapshot.
    ///
    /// The callback also fires immediately with the current snapshot, so
    /// late subscribers never start from a stale view.
    pub fn subscribe<F>(&mut self, mut callback: F)
    where
        F: FnMut(&Arc<LadderSnapshot>) + 'static,
    {
        callback(&self.snapshot);
        self.subscribers.push(Box::new(callback));
    }

    /// Get the latest snapshot (cheap `Arc` clone).
    #[inline]
    pub fn snapshot(&self) -> Arc<LadderSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Current display mode.
    #[inline]
    pub fn mode(&self) -> RangeMode {
        self.config.mode
    }

    /// Read access to the canonical book.
    #[inline]
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Current configuration.
    #[inline]
    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    /// Current statistics.
    #[inline]
    pub fn stats(&self) -> &LadderStats {
        &self.stats
    }

    /// Rebuild all derived state from the current entry lists and publish
    /// a fresh snapshot.
    ///
    /// Full recompute is the contract: no partial aggregate update, so a
    /// reader can never pair a new aggregate with a stale range.
    fn recompute(&mut self) {
        let levels = aggregate_by_price(&self.book.bids, &self.book.asks);
        let center = center_price(&self.book.bids, &self.book.asks, self.book.last_traded_price);

        let prices = match self.config.mode {
            RangeMode::Dense => self.dense.clone(),
            RangeMode::Sparse => sparse_range(&levels, center),
        };
        let center_index = closest_index(&prices, center);

        self.stats.recomputes += 1;
        self.snapshot = Arc::new(LadderSnapshot {
            prices,
            levels,
            center_price: center,
            center_index,
            version: self.snapshot.version + 1,
        });

        for subscriber in &mut self.subscribers {
            subscriber(&self.snapshot);
        }
    }
}
