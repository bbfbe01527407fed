use serde::{Deserialize, Deserializer, Serialize};

use shopfront_core::ProductId;

use crate::lenient;
use crate::price::Price;
use crate::rating::RatingValue;

/// Aggregate review summary computed by the review service.
///
/// Both fields are lenient: an average over zero reviews often arrives as
/// `null` and counts may be sent as floats. A missing or malformed count
/// reads as zero reviews.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    #[serde(default = "lenient::nan", deserialize_with = "lenient::number")]
    pub average_rating: f64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_reviews: u64,
}

impl ReviewStats {
    pub fn has_reviews(&self) -> bool {
        self.total_reviews > 0
    }

    pub fn average(&self) -> RatingValue {
        RatingValue::new(self.average_rating)
    }
}

/// Product record as supplied by the catalog (read-only to the storefront).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Image paths relative to the asset host. Absent and `null` both read as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_stats: Option<ReviewStats>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            images: Vec::new(),
            review_stats: None,
        }
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_review_stats(mut self, average_rating: f64, total_reviews: u64) -> Self {
        self.review_stats = Some(ReviewStats {
            average_rating,
            total_reviews,
        });
        self
    }

    /// First image path, if the product has any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Review stats, only when at least one review exists.
    pub fn reviewed_stats(&self) -> Option<&ReviewStats> {
        self.review_stats.as_ref().filter(|s| s.has_reviews())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_record() {
        let json = r#"{
            "id": "p-1",
            "name": "Walnut Desk",
            "price": 249.99,
            "images": ["/uploads/desk.jpg", "/uploads/desk-2.jpg"],
            "reviewStats": { "averageRating": 4.5, "totalReviews": 12 }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "p-1");
        assert_eq!(product.primary_image(), Some("/uploads/desk.jpg"));
        let stats = product.reviewed_stats().unwrap();
        assert_eq!(stats.average_rating, 4.5);
        assert_eq!(stats.total_reviews, 12);
    }

    #[test]
    fn missing_or_null_images_read_as_empty() {
        let absent: Product =
            serde_json::from_str(r#"{"id":"a","name":"A","price":1}"#).unwrap();
        assert!(absent.images.is_empty());
        assert_eq!(absent.primary_image(), None);

        let null: Product =
            serde_json::from_str(r#"{"id":"b","name":"B","price":1,"images":null}"#).unwrap();
        assert!(null.images.is_empty());
    }

    #[test]
    fn null_review_stats_read_as_none() {
        let product: Product =
            serde_json::from_str(r#"{"id":"a","name":"A","price":"3.5","reviewStats":null}"#)
                .unwrap();
        assert!(product.review_stats.is_none());
        assert_eq!(product.price.formatted(), "$3.50");
    }

    #[test]
    fn zero_reviews_are_not_reported() {
        let product = Product::new("a", "A", 1.0).with_review_stats(4.0, 0);
        assert!(product.review_stats.is_some());
        assert!(product.reviewed_stats().is_none());
    }

    #[test]
    fn malformed_review_stats_degrade_instead_of_failing() {
        let json = r#"[
            {"id":"a","name":"A","price":1,"reviewStats":{"averageRating":null,"totalReviews":0}},
            {"id":"b","name":"B","price":1,"reviewStats":{"averageRating":"4.5","totalReviews":3.0}},
            {"id":"c","name":"C","price":1,"reviewStats":{"averageRating":4,"totalReviews":-2}},
            {"id":"d","name":"D","price":1,"reviewStats":{}}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();

        assert!(products[0].reviewed_stats().is_none());
        assert_eq!(products[0].review_stats.unwrap().average(), RatingValue::UNRATED);

        let b = products[1].reviewed_stats().unwrap();
        assert_eq!(b.average_rating, 4.5);
        assert_eq!(b.total_reviews, 3);

        assert!(products[2].reviewed_stats().is_none());
        assert!(products[3].reviewed_stats().is_none());
    }

    #[test]
    fn review_average_is_clamped_to_scale() {
        let stats = ReviewStats {
            average_rating: 6.2,
            total_reviews: 3,
        };
        assert_eq!(stats.average().get(), 5.0);
    }
}
