use leptos::*;

use shopfront_catalog::RatingValue;

use crate::model::star_rating::{
    ActivationKey, ActivationTrigger, RatingSize, StarRatingModel, StarState,
};

/// Five-star rating, read-only or as a controlled input.
///
/// Owns no state: the parent supplies `rating` on every render and receives
/// selections through `on_rating_change`.
#[component]
pub fn StarRating(
    #[prop(into)] rating: RatingValue,
    #[prop(optional, into)] on_rating_change: Option<Callback<u8>>,
    #[prop(optional)] readonly: bool,
    #[prop(optional)] size: RatingSize,
) -> impl IntoView {
    let model = StarRatingModel::new(rating, readonly, on_rating_change.is_some(), size);
    let class = format!("star-rating star-rating--{}", model.size.as_str());
    let stars = model.stars.clone();
    let label = model.label.map(|label| {
        view! { <span class="star-rating__label">{label.to_string()}</span> }
    });
    let model = store_value(model);

    let activate = move |star: u8, trigger: ActivationTrigger| {
        model.with_value(|m| {
            m.activate(star, trigger, on_rating_change.map(|cb| move |v| cb.call(v)));
        });
    };

    view! {
        <div class=class>
            {stars
                .into_iter()
                .map(|star| view! { <Star star=star activate=activate/> })
                .collect_view()}
            {label}
        </div>
    }
}

#[component]
fn Star<F>(star: StarState, activate: F) -> impl IntoView
where
    F: Fn(u8, ActivationTrigger) + Copy + 'static,
{
    let value = star.value;
    let class = if star.filled { "star star--filled" } else { "star" };

    view! {
        <span
            class=class
            role="button"
            tabindex=star.tab_index()
            aria-label=star.aria_label.clone()
            aria-disabled=star.disabled.to_string()
            on:click=move |_| activate(value, ActivationTrigger::Pointer)
            on:keydown=move |ev: ev::KeyboardEvent| {
                if let Some(key) = ActivationKey::from_key(&ev.key()) {
                    ev.prevent_default();
                    activate(value, ActivationTrigger::Key(key));
                }
            }
        >
            {star.glyph()}
        </span>
    }
}
