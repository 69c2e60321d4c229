//! Incremental extension of the dense price sequence.
//!
//! The dense sequence can hold tens of thousands of prices, so a user order
//! landing outside the current bounds must not force a full regeneration.
//! This module synthesizes only the missing run and merges it with the
//! existing sequence; conceptually a merge of three sorted segments
//! (new-high-side, existing, new-low-side).
//!
//! The result is always strictly descending, duplicate-free, and gapless:
//! the synthesized run fills the whole gap up to the new price and
//! guarantees at least `padding` fresh rows beyond the previous edge, so
//! the new order never sits at the very edge of the ladder.

/// Extend a dense (descending, gapless) price sequence to cover `new_price`.
///
/// A price already inside the current bounds is a no-op: the sequence is
/// returned unchanged. Otherwise the missing contiguous run is generated on
/// the appropriate side, bounded below by zero, without overlapping the
/// existing prices.
pub fn extend_range(current: &[u64], new_price: u64, padding: u64) -> Vec<u64> {
    let (Some(&max), Some(&min)) = (current.first(), current.last()) else {
        // Nothing to merge with: regenerate a padded window around the price
        let low = new_price.saturating_sub(padding);
        return (low..=new_price + padding).rev().collect();
    };

    if new_price > max {
        let top = new_price.max(max + padding);
        let mut extended = Vec::with_capacity((top - max) as usize + current.len());
        extended.extend((max + 1..=top).rev());
        extended.extend_from_slice(current);
        extended
    } else if new_price < min {
        let bottom = new_price.min(min.saturating_sub(padding));
        let mut extended = Vec::with_capacity(current.len() + (min - bottom) as usize);
        extended.extend_from_slice(current);
        extended.extend((bottom..=min - 1).rev());
        extended
    } else {
        current.to_vec()
    }
}
