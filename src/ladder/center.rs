//! Center (mid) price computation.
//!
//! The center price anchors the display window between the best bid and the
//! best ask. User-submitted entries are filtered out before the midpoint is
//! taken: the reference price must reflect market structure, and a user's
//! own resting order must never move it.
//!
//! # Rounding
//!
//! The midpoint rounds half up (`(bid + ask).div_ceil(2)`), matching
//! `Math.round` semantics for non-negative operands. Tests pin this choice.

use crate::types::OrderEntry;

/// Compute the representative center price of the book.
///
/// Filters user orders from both sides first. If either filtered side is
/// empty the book is degenerate for centering purposes and the externally
/// sourced `last_traded_price` is returned instead. The filter-then-check
/// order matters: a side holding only user orders counts as empty here.
pub fn center_price(bids: &[OrderEntry], asks: &[OrderEntry], last_traded_price: u64) -> u64 {
    let best_bid = bids
        .iter()
        .filter(|e| !e.is_user_order)
        .map(|e| e.price)
        .max();
    let best_ask = asks
        .iter()
        .filter(|e| !e.is_user_order)
        .map(|e| e.price)
        .min();

    match (best_bid, best_ask) {
        (Some(bid), Some(ask)) => (bid + ask).div_ceil(2),
        _ => last_traded_price,
    }
}
