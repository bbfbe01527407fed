//! Native preview of card render state.
//!
//! Loads a catalog JSON export and derives the card models exactly as the
//! browser components would, so render decisions can be inspected without a
//! WASM build.

use std::path::Path;

use anyhow::Context;
use shopfront_catalog::Product;

use crate::config::StorefrontConfig;
use crate::model::product_card::ProductCardModel;

/// Read a JSON array of products from `path`.
pub fn read_products(path: &Path) -> anyhow::Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read products file at {:?}", path))?;
    parse_products(&raw).with_context(|| format!("invalid products file at {:?}", path))
}

pub fn parse_products(raw: &str) -> anyhow::Result<Vec<Product>> {
    serde_json::from_str(raw).context("expected a JSON array of products")
}

pub fn preview_cards(products: &[Product], config: &StorefrontConfig) -> Vec<ProductCardModel> {
    products
        .iter()
        .map(|product| {
            let card = ProductCardModel::from_product(product, config);
            tracing::debug!(
                product_id = %product.id,
                placeholder = card.image.url().is_none(),
                rated = card.rating.is_some(),
                "derived product card"
            );
            card
        })
        .collect()
}

pub fn render_preview_json(
    products: &[Product],
    config: &StorefrontConfig,
) -> anyhow::Result<String> {
    serde_json::to_string_pretty(&preview_cards(products, config))
        .context("failed to serialize card preview")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_non_array_input() {
        assert!(parse_products(r#"{"id":"x"}"#).is_err());
    }

    #[test]
    fn preview_json_contains_derived_fields() {
        let products = parse_products(
            r#"[{"id":"p1","name":"Mug","price":"4","images":["/m.png"],
                 "reviewStats":{"averageRating":3,"totalReviews":2}}]"#,
        )
        .unwrap();
        let config = StorefrontConfig::new("https://cdn").unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render_preview_json(&products, &config).unwrap()).unwrap();

        let card = &json[0];
        assert_eq!(card["href"], "/products/p1");
        assert_eq!(card["price"], "$4.00");
        assert_eq!(card["image"]["kind"], "image");
        assert_eq!(card["image"]["url"], "https://cdn/m.png");
        assert_eq!(card["rating"]["total_reviews"], 2);
    }

    #[test]
    fn read_products_reports_missing_file() {
        let err = read_products(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read products file"));
    }
}
