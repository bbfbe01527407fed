//! `shopfront-preview`: print the card render state for a catalog export.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::path::PathBuf;

    use anyhow::Context;
    use shopfront_storefront::StorefrontConfig;
    use shopfront_storefront::preview;

    shopfront_observability::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: shopfront-preview <products.json>")?;

    let config = StorefrontConfig::from_env();
    let products = preview::read_products(&path)?;
    tracing::info!(count = products.len(), "loaded products");

    println!("{}", preview::render_preview_json(&products, &config)?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
