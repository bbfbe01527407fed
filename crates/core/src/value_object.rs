//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// Render-time values such as a rating or a formatted price are value
/// objects: two ratings of `3` are the same rating.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct RatingValue(f64);
///
/// impl ValueObject for RatingValue {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
