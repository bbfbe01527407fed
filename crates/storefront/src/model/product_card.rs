//! Product card: image, price and rating summary derivation.

use serde::Serialize;

use shopfront_catalog::{Product, RatingValue, ReviewStats};
use shopfront_core::ProductId;

use crate::config::StorefrontConfig;
use crate::model::star_rating::{RatingSize, StarRatingModel};

/// Route prefix of the product detail page.
pub const PRODUCT_ROUTE_PREFIX: &str = "/products/";

/// Text of the block shown instead of an image.
pub const PLACEHOLDER_TEXT: &str = "No Image";

/// Size of the read-only stars inside a card.
pub const CARD_RATING_SIZE: RatingSize = RatingSize::Small;

/// Detail page path for a product.
pub fn product_href(id: &ProductId) -> String {
    format!("{PRODUCT_ROUTE_PREFIX}{id}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum ImageState {
    Placeholder,
    Image(String),
}

impl ImageState {
    /// Only the first image is ever shown.
    pub fn for_product(product: &Product, config: &StorefrontConfig) -> Self {
        match product.primary_image() {
            Some(path) => ImageState::Image(config.asset_url(path)),
            None => ImageState::Placeholder,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ImageState::Image(url) => Some(url.as_str()),
            ImageState::Placeholder => None,
        }
    }
}

/// Rating block of a card; exists only for products with reviews.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    pub rating: RatingValue,
    pub total_reviews: u64,
}

impl RatingSummary {
    pub fn from_stats(stats: &ReviewStats) -> Option<Self> {
        stats.has_reviews().then(|| Self {
            rating: stats.average(),
            total_reviews: stats.total_reviews,
        })
    }

    /// `"(42)"`
    pub fn count_label(&self) -> String {
        format!("({})", self.total_reviews)
    }

    pub fn stars(&self) -> StarRatingModel {
        StarRatingModel::display(self.rating, CARD_RATING_SIZE)
    }
}

/// Render state of a `ProductCard`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCardModel {
    pub href: String,
    pub name: String,
    pub image: ImageState,
    pub price: String,
    pub rating: Option<RatingSummary>,
}

impl ProductCardModel {
    pub fn from_product(product: &Product, config: &StorefrontConfig) -> Self {
        Self {
            href: product_href(&product.id),
            name: product.name.clone(),
            image: ImageState::for_product(product, config),
            price: product.price.formatted(),
            rating: product
                .review_stats
                .as_ref()
                .and_then(RatingSummary::from_stats),
        }
    }
}
