//! `shopfront-core`: shared domain primitives.
//!
//! This crate contains **pure** building blocks (no rendering, no IO) used by
//! the catalog and storefront crates.

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;
