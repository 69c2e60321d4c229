//! Display price sequence generation.
//!
//! Produces the ordered (strictly descending) sequence of integer prices the
//! ladder renders, in two modes:
//!
//! - **Dense**: every integer across the observed span, padded on each side
//!   so the user can scroll well past the best quotes. Long-lived; grown
//!   incrementally by [`crate::ladder::extend_range`].
//! - **Sparse**: only prices with actual liquidity, plus the center price so
//!   the anchor row is always visible. Fully recomputed on every change.
//!
//! Both generators are deterministic: identical inputs yield identical
//! sequences, which matters because display indices derived from them are
//! reused across renders.

use serde::{Deserialize, Serialize};

use crate::ladder::aggregate::PriceLevelMap;
use crate::types::OrderBook;

/// Default number of extra prices generated beyond the observed span on
/// each side of the dense sequence.
pub const DEFAULT_PADDING: u64 = 1000;

/// Which kind of price sequence the ladder displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RangeMode {
    /// Every integer price across the padded span (gapless)
    Dense,

    /// Only prices with liquidity, plus the center price
    #[default]
    Sparse,
}

/// Emit every integer in `[low, high]` in descending order.
#[inline]
fn descending(low: u64, high: u64) -> Vec<u64> {
    (low..=high).rev().collect()
}

/// Generate the dense price sequence for the current book.
///
/// The observed span is padded by `padding` on each side, with the lower
/// bound clamped at zero (prices are never negative). A book with no entries
/// at all falls back to a window of the same width around
/// `last_traded_price`.
pub fn dense_range(book: &OrderBook, padding: u64) -> Vec<u64> {
    let (low, high) = book
        .price_span()
        .unwrap_or((book.last_traded_price, book.last_traded_price));

    descending(low.saturating_sub(padding), high + padding)
}

/// Generate the sparse price sequence: aggregate keys sorted descending,
/// with `center` inserted when not already present.
///
/// An empty aggregate yields just `[center]` so the anchor row still exists
/// with zero liquidity.
pub fn sparse_range(levels: &PriceLevelMap, center: u64) -> Vec<u64> {
    let mut prices: Vec<u64> = levels.keys().copied().collect();
    prices.sort_unstable_by(|a, b| b.cmp(a));

    if let Err(pos) = prices.binary_search_by(|p| center.cmp(p)) {
        prices.insert(pos, center);
    }

    prices
}

/// Find the index of the price in `prices` closest to `target`.
///
/// The displayed sequence does not always contain the computed center, so
/// the renderer anchors on the nearest contained price. Ties resolve to the
/// earlier (higher) price. Returns `None` for an empty sequence.
pub fn closest_index(prices: &[u64], target: u64) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (i, &price) in prices.iter().enumerate() {
        let diff = price.abs_diff(target);
        match best {
            Some((_, best_diff)) if best_diff <= diff => {}
            _ => best = Some((i, diff)),
        }
    }
    best.map(|(i, _)| i)
}
