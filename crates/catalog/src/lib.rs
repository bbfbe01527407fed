//! Catalog read model consumed by the storefront.
//!
//! The product record is produced by an external catalog service; this crate
//! only describes its shape and the value objects derived from it (price and
//! rating). Deterministic, no IO.

pub mod lenient;
pub mod price;
pub mod product;
pub mod rating;

pub use price::Price;
pub use product::{Product, ReviewStats};
pub use rating::RatingValue;
