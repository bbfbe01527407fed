//! Render-state derivation for the storefront components.
//!
//! Each model is computed once per render from the component's props and
//! holds every branch decision (placeholder vs image, label vs none, ...) as
//! plain data. Views only translate a model into markup.

pub mod product_card;
pub mod star_rating;
