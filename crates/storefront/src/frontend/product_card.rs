use leptos::*;
use leptos_router::A;

use shopfront_catalog::Product;

use crate::config::StorefrontConfig;
use crate::frontend::star_rating::StarRating;
use crate::model::product_card::{
    CARD_RATING_SIZE, ImageState, PLACEHOLDER_TEXT, ProductCardModel, RatingSummary,
};

/// Navigable summary tile for one product.
///
/// Reads `StorefrontConfig` from context for the asset host and falls back
/// to the default host when none was provided.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let ProductCardModel {
        href,
        name,
        image,
        price,
        rating,
    } = ProductCardModel::from_product(&product, &config);

    let image = match image {
        ImageState::Image(url) => view! {
            <img class="product-card__image" src=url alt=name.clone()/>
        }
        .into_view(),
        ImageState::Placeholder => view! {
            <div class="product-card__placeholder">{PLACEHOLDER_TEXT}</div>
        }
        .into_view(),
    };

    view! {
        <A href=href class="product-card">
            {image}
            <div class="product-card__body">
                <h3 class="product-card__name">{name}</h3>
                <p class="product-card__price">{price}</p>
                {rating.map(|summary| view! { <CardRating summary=summary/> })}
            </div>
        </A>
    }
}

#[component]
fn CardRating(summary: RatingSummary) -> impl IntoView {
    view! {
        <div class="product-card__rating">
            <StarRating rating=summary.rating readonly=true size=CARD_RATING_SIZE/>
            <span class="product-card__reviews">{summary.count_label()}</span>
        </div>
    }
}

/// One card per product, in order.
#[component]
pub fn ProductGrid(#[prop(into)] products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="product-grid">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product=product/> })
                .collect_view()}
        </div>
    }
}
