//! Core data types for order book entries and user orders.
//!
//! Prices are plain integer ticks (`u64`, never negative) and sizes are
//! `u32`. Entries are immutable once created: they are produced either on
//! book load (market entries) or on user submission (user entries), and are
//! never amended or removed individually.

use serde::{Deserialize, Serialize};

/// Order side (bid or ask)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order (bid)
    Bid,
    /// Sell order (ask)
    Ask,
}

impl Side {
    /// Check if this is a bid.
    #[inline(always)]
    pub fn is_bid(self) -> bool {
        matches!(self, Side::Bid)
    }

    /// Check if this is an ask.
    #[inline(always)]
    pub fn is_ask(self) -> bool {
        matches!(self, Side::Ask)
    }
}

/// A single resting order in the book.
///
/// An entry belongs to exactly one side by virtue of which list contains it;
/// a price level may hold several entries (e.g. one user entry next to
/// market entries at the same price).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    /// Price in integer ticks
    pub price: u64,

    /// Order size (always > 0 for well-formed books)
    pub size: u32,

    /// Whether this entry was submitted locally by the user
    pub is_user_order: bool,
}

impl OrderEntry {
    /// Create a new order entry.
    pub fn new(price: u64, size: u32, is_user_order: bool) -> Self {
        Self {
            price,
            size,
            is_user_order,
        }
    }

    /// Create a market-sourced entry.
    #[inline]
    pub fn market(price: u64, size: u32) -> Self {
        Self::new(price, size, false)
    }

    /// Create a user-submitted entry.
    #[inline]
    pub fn user(price: u64, size: u32) -> Self {
        Self::new(price, size, true)
    }
}

/// Canonical order book state: the raw bid/ask entry lists plus the last
/// traded price supplied by the market-data feed.
///
/// The entry lists carry no required sort order; consumers derive min/max
/// prices with O(n) scans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Buy-side entries
    pub bids: Vec<OrderEntry>,

    /// Sell-side entries
    pub asks: Vec<OrderEntry>,

    /// Last traded price, external to the book (center-price fallback)
    pub last_traded_price: u64,
}

impl OrderBook {
    /// Create a new order book.
    pub fn new(bids: Vec<OrderEntry>, asks: Vec<OrderEntry>, last_traded_price: u64) -> Self {
        Self {
            bids,
            asks,
            last_traded_price,
        }
    }

    /// Check whether both sides are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Total number of entries across both sides.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    /// Highest bid price across all entries (user orders included).
    #[inline]
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.iter().map(|e| e.price).max()
    }

    /// Lowest ask price across all entries (user orders included).
    #[inline]
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.iter().map(|e| e.price).min()
    }

    /// Lowest and highest price observed anywhere in the book.
    ///
    /// Returns `None` when the book has no entries at all.
    pub fn price_span(&self) -> Option<(u64, u64)> {
        let mut span: Option<(u64, u64)> = None;
        for entry in self.bids.iter().chain(self.asks.iter()) {
            span = Some(match span {
                Some((low, high)) => (low.min(entry.price), high.max(entry.price)),
                None => (entry.price, entry.price),
            });
        }
        span
    }
}

/// An order submitted locally through the user-submission boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOrder {
    /// Price in integer ticks (zero is legal)
    pub price: u64,

    /// Order size, must be > 0
    pub size: u32,

    /// Which side the order rests on
    pub side: Side,
}

impl UserOrder {
    /// Create a new user order.
    pub fn new(price: u64, size: u32, side: Side) -> Self {
        Self { price, size, side }
    }

    /// Validate the order fields.
    ///
    /// Numeric parsing happens at the input-collection layer; this only
    /// checks what the core relies on (a strictly positive size).
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.size == 0 {
            return Err(crate::error::LadderError::InvalidSize(0));
        }
        Ok(())
    }

    /// Convert into a book entry tagged as user-owned.
    #[inline]
    pub fn into_entry(self) -> OrderEntry {
        OrderEntry::user(self.price, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_checks() {
        assert!(Side::Bid.is_bid());
        assert!(!Side::Ask.is_bid());
        assert!(Side::Ask.is_ask());
        assert!(!Side::Bid.is_ask());
    }

    #[test]
    fn test_entry_constructors() {
        let market = OrderEntry::market(100, 10);
        assert!(!market.is_user_order);

        let user = OrderEntry::user(100, 10);
        assert!(user.is_user_order);
        assert_eq!(user.price, 100);
        assert_eq!(user.size, 10);
    }

    #[test]
    fn test_book_best_prices() {
        let book = OrderBook::new(
            vec![OrderEntry::market(98, 5), OrderEntry::market(99, 5)],
            vec![OrderEntry::market(102, 5), OrderEntry::market(101, 5)],
            100,
        );

        assert_eq!(book.best_bid(), Some(99));
        assert_eq!(book.best_ask(), Some(101));
        assert_eq!(book.price_span(), Some((98, 102)));
        assert_eq!(book.entry_count(), 4);
        assert!(!book.is_empty());
    }

    #[test]
    fn test_book_empty() {
        let book = OrderBook::new(Vec::new(), Vec::new(), 100);
        assert!(book.is_empty());
        assert_eq!(book.best_bid(), None);
        assert_eq!(book.best_ask(), None);
        assert_eq!(book.price_span(), None);
    }

    #[test]
    fn test_book_one_sided_span() {
        let book = OrderBook::new(vec![OrderEntry::market(50, 1)], Vec::new(), 50);
        assert_eq!(book.price_span(), Some((50, 50)));
        assert_eq!(book.best_ask(), None);
    }

    #[test]
    fn test_user_order_validation() {
        let order = UserOrder::new(100, 10, Side::Bid);
        assert!(order.validate().is_ok());

        // Zero price is legal
        let order = UserOrder::new(0, 10, Side::Bid);
        assert!(order.validate().is_ok());

        // Zero size is not
        let order = UserOrder::new(100, 0, Side::Ask);
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_user_order_into_entry() {
        let entry = UserOrder::new(101, 2, Side::Ask).into_entry();
        assert_eq!(entry, OrderEntry::user(101, 2));
    }
}
