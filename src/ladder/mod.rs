//! Price ladder derivation: aggregation, center price, and price ranges.
//!
//! Everything in this module is a pure function over order book data; the
//! stateful recompute cycle lives in [`crate::store`].

pub mod aggregate;
pub mod center;
pub mod extend;
pub mod range;

pub use aggregate::{aggregate_by_price, LevelVolumes, PriceLevelMap};
pub use center::center_price;
pub use extend::extend_range;
pub use range::{closest_index, dense_range, sparse_range, RangeMode, DEFAULT_PADDING};
