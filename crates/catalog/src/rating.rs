//! Star rating value.

use serde::{Deserialize, Serialize};

use shopfront_core::ValueObject;

/// A rating on the fixed five-star scale; `0` means unrated.
///
/// Out-of-range input is clamped into `[0, 5]` and `NaN` becomes `0`. Star
/// fill visuals are unaffected by clamping (a rating of 7 already fills every
/// star); only the textual `"{rating}/5"` label observes it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct RatingValue(f64);

impl ValueObject for RatingValue {}

impl RatingValue {
    /// Number of stars on the scale.
    pub const MAX_STARS: u8 = 5;

    pub const UNRATED: Self = Self(0.0);

    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::UNRATED;
        }
        Self(raw.clamp(0.0, f64::from(Self::MAX_STARS)))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn is_rated(self) -> bool {
        self.0 > 0.0
    }

    /// Whether star `star` (1-based) is drawn filled.
    pub fn fills(self, star: u8) -> bool {
        f64::from(star) <= self.0
    }
}

impl From<f64> for RatingValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<u8> for RatingValue {
    fn from(value: u8) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<RatingValue> for f64 {
    fn from(value: RatingValue) -> Self {
        value.0
    }
}

impl core::fmt::Display for RatingValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // f64's Display drops a trailing ".0", so whole ratings read "3".
        core::fmt::Display::fmt(&self.0, f)
    }
}
