//! Leptos views for the storefront (WASM only).

pub mod product_card;
pub mod star_rating;

pub use product_card::{ProductCard, ProductGrid};
pub use star_rating::StarRating;

use leptos::*;
use leptos_router::Router;
use wasm_bindgen::prelude::*;

use shopfront_catalog::Product;

use crate::config::StorefrontConfig;

/// Mount a product grid into `<body>`.
///
/// `products_json` is the catalog's JSON array of products. The asset host
/// comes from the build environment (see `StorefrontConfig::from_env`).
#[wasm_bindgen]
pub fn mount_product_grid(products_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let products: Vec<Product> = serde_json::from_str(products_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse products: {e}")))?;
    let config = StorefrontConfig::from_env();

    leptos::mount_to_body(move || {
        provide_context(config);
        view! {
            <Router>
                <main>
                    <ProductGrid products=products/>
                </main>
            </Router>
        }
    });
    Ok(())
}
