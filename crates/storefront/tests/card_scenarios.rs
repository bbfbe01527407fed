use std::path::PathBuf;

use shopfront_storefront::model::product_card::PLACEHOLDER_TEXT;
use shopfront_storefront::preview;
use shopfront_storefront::{
    ActivationKey, ActivationTrigger, ImageState, ProductCardModel, RatingSize, StarRatingModel,
    StorefrontConfig,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/products.json")
}

fn cards() -> Vec<ProductCardModel> {
    let products = preview::read_products(&fixture_path()).expect("fixture should load");
    let config = StorefrontConfig::new("https://static.shop.test").unwrap();
    preview::preview_cards(&products, &config)
}

#[test]
fn reviewed_product_with_gallery() {
    let cards = cards();
    let desk = &cards[0];

    assert_eq!(desk.href, "/products/desk-01");
    assert_eq!(
        desk.image,
        ImageState::Image("https://static.shop.test/uploads/desk-front.jpg".to_string())
    );
    assert_eq!(desk.price, "$549.00");

    let rating = desk.rating.expect("desk has reviews");
    assert_eq!(rating.count_label(), "(42)");
    let stars = rating.stars();
    assert!(stars.readonly);
    assert_eq!(stars.filled_count(), 4);
    assert!(stars.stars.iter().all(|s| s.tab_index() == -1));
}

#[test]
fn product_with_zero_reviews_and_no_images() {
    let lamp = &cards()[1];
    assert_eq!(lamp.image, ImageState::Placeholder);
    assert_eq!(lamp.price, "$19.50");
    assert!(lamp.rating.is_none());
    assert_eq!(PLACEHOLDER_TEXT, "No Image");
}

#[test]
fn absent_optional_fields_degrade_gracefully() {
    let cards = cards();

    let mug = &cards[2];
    assert_eq!(mug.image, ImageState::Placeholder);
    assert_eq!(mug.price, "$10.00");
    assert!(mug.rating.is_none());

    let rug = &cards[3];
    assert_eq!(rug.image, ImageState::Placeholder);
    assert_eq!(rug.price, "$NaN");
    assert!(rug.rating.is_none());
}

#[test]
fn loose_review_stats_from_the_backend() {
    let cards = cards();

    let vase = &cards[4];
    assert_eq!(vase.price, "$32.00");
    assert!(vase.rating.is_none());

    let chair = &cards[5];
    let rating = chair.rating.expect("float review count still counts");
    assert_eq!(rating.count_label(), "(7)");
    assert_eq!(rating.stars().filled_count(), 3);
}

#[test]
fn interactive_widget_round_trip_through_parent_state() {
    // The parent owns the rating; the widget only reports selections.
    let mut parent_rating = 0u8;

    let model = StarRatingModel::new(parent_rating, false, true, RatingSize::Large);
    assert_eq!(model.label.unwrap().to_string(), "Click to rate");
    assert!(model.stars.iter().all(|s| s.tab_index() == 0));

    model.activate(
        3,
        ActivationTrigger::Key(ActivationKey::Space),
        Some(|v| parent_rating = v),
    );
    assert_eq!(model.filled_count(), 0, "widget must not update itself");

    let rerendered = StarRatingModel::new(parent_rating, false, true, RatingSize::Large);
    assert_eq!(rerendered.filled_count(), 3);
    assert_eq!(rerendered.label.unwrap().to_string(), "3/5");
}
