//! `shopfront-storefront`
//!
//! **Responsibility:** presentational components of the storefront web client.
//!
//! This crate provides:
//! - `StarRating`: five-star display / controlled input widget
//! - `ProductCard`: navigable product tile (image, name, price, rating summary)
//! - Storefront configuration (asset host)
//!
//! Both components are pure functions of their props. The derivation rules
//! live in [`model`] and compile on every target; the Leptos views in
//! `frontend` are only built for `wasm32`.

pub mod config;
pub mod model;

#[cfg(not(target_arch = "wasm32"))]
pub mod preview;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::{ConfigError, ConfigSource, StorefrontConfig};
pub use model::product_card::{ImageState, ProductCardModel, RatingSummary};
pub use model::star_rating::{
    ActivationKey, ActivationTrigger, RatingLabel, RatingSize, StarRatingModel, StarState,
};
