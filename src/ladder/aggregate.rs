//! Per-price aggregation of order book entries.
//!
//! Reduces the raw bid/ask entry lists into a lookup map keyed by price.
//! The map is a lookup structure, not a sequence; ordering is irrelevant.
//! Totals are `u64` so that many `u32` entries at one level cannot overflow.

use ahash::AHashMap;

use crate::types::OrderEntry;

/// Aggregated volumes at a single price level.
///
/// User-owned sizes are tracked separately from the side totals so the
/// renderer can decompose a level into "total (+N yours)".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LevelVolumes {
    /// Total bid size at this price (user orders included)
    pub bid_size: u64,

    /// Total ask size at this price (user orders included)
    pub ask_size: u64,

    /// User-owned portion of `bid_size`
    pub user_bid_size: u64,

    /// User-owned portion of `ask_size`
    pub user_ask_size: u64,
}

impl LevelVolumes {
    /// True if no volume was recorded at this level.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bid_size == 0 && self.ask_size == 0
    }

    /// True if any bid volume rests at this level.
    #[inline]
    pub fn has_bids(&self) -> bool {
        self.bid_size > 0
    }

    /// True if any ask volume rests at this level.
    #[inline]
    pub fn has_asks(&self) -> bool {
        self.ask_size > 0
    }

    #[inline]
    fn record_bid(&mut self, entry: &OrderEntry) {
        self.bid_size += u64::from(entry.size);
        if entry.is_user_order {
            self.user_bid_size += u64::from(entry.size);
        }
    }

    #[inline]
    fn record_ask(&mut self, entry: &OrderEntry) {
        self.ask_size += u64::from(entry.size);
        if entry.is_user_order {
            self.user_ask_size += u64::from(entry.size);
        }
    }
}

/// Lookup map from price to aggregated volumes.
pub type PriceLevelMap = AHashMap<u64, LevelVolumes>;

/// Aggregate bid and ask entries into per-price volume totals.
///
/// Pure and total: defined for empty input (returns an empty map). No entry
/// is dropped or deduplicated; multiple entries at the same price on the
/// same side sum.
pub fn aggregate_by_price(bids: &[OrderEntry], asks: &[OrderEntry]) -> PriceLevelMap {
    let mut levels = PriceLevelMap::with_capacity(bids.len() + asks.len());

    for entry in bids {
        levels.entry(entry.price).or_default().record_bid(entry);
    }
    for entry in asks {
        levels.entry(entry.price).or_default().record_ask(entry);
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_empty() {
        let levels = aggregate_by_price(&[], &[]);
        assert!(levels.is_empty());
    }

    #[test]
    fn test_aggregate_mixed_user_and_market() {
        let bids = vec![
            OrderEntry::market(100, 10),
            OrderEntry::user(100, 5),
            OrderEntry::market(99, 15),
        ];
        let asks = vec![
            OrderEntry::market(101, 8),
            OrderEntry::user(101, 2),
            OrderEntry::market(102, 12),
        ];

        let levels = aggregate_by_price(&bids, &asks);
        assert_eq!(levels.len(), 4);

        let at_100 = levels[&100];
        assert_eq!(at_100.bid_size, 15);
        assert_eq!(at_100.ask_size, 0);
        assert_eq!(at_100.user_bid_size, 5);
        assert_eq!(at_100.user_ask_size, 0);

        let at_99 = levels[&99];
        assert_eq!(at_99.bid_size, 15);
        assert_eq!(at_99.user_bid_size, 0);

        let at_101 = levels[&101];
        assert_eq!(at_101.bid_size, 0);
        assert_eq!(at_101.ask_size, 10);
        assert_eq!(at_101.user_bid_size, 0);
        assert_eq!(at_101.user_ask_size, 2);

        let at_102 = levels[&102];
        assert_eq!(at_102.ask_size, 12);
        assert_eq!(at_102.user_ask_size, 0);
    }

    #[test]
    fn test_aggregate_sums_duplicates_on_same_side() {
        let bids = vec![
            OrderEntry::market(100, 10),
            OrderEntry::market(100, 20),
            OrderEntry::market(100, 30),
        ];
        let levels = aggregate_by_price(&bids, &[]);

        assert_eq!(levels.len(), 1);
        assert_eq!(levels[&100].bid_size, 60);
    }

    #[test]
    fn test_aggregate_bid_and_ask_at_same_price() {
        // A locked level: both sides resting at the same price
        let bids = vec![OrderEntry::market(100, 10)];
        let asks = vec![OrderEntry::user(100, 4)];
        let levels = aggregate_by_price(&bids, &asks);

        let level = levels[&100];
        assert_eq!(level.bid_size, 10);
        assert_eq!(level.ask_size, 4);
        assert_eq!(level.user_ask_size, 4);
        assert!(level.has_bids());
        assert!(level.has_asks());
        assert!(!level.is_empty());
    }

    #[test]
    fn test_aggregate_every_level_has_volume() {
        let bids = vec![OrderEntry::market(98, 1), OrderEntry::market(97, 2)];
        let asks = vec![OrderEntry::market(103, 3)];
        let levels = aggregate_by_price(&bids, &asks);

        assert!(levels.values().all(|v| !v.is_empty()));
    }

    #[test]
    fn test_aggregate_no_overflow_on_large_levels() {
        // Many max-size entries at one price must not wrap the u64 totals
        let bids = vec![OrderEntry::market(100, u32::MAX); 8];
        let levels = aggregate_by_price(&bids, &[]);

        assert_eq!(levels[&100].bid_size, u64::from(u32::MAX) * 8);
    }
}
