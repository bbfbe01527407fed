//! Star rating widget: display state and activation rules.

use core::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use shopfront_catalog::RatingValue;
use shopfront_core::DomainError;

/// Display scale of the widget. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl RatingSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingSize::Small => "small",
            RatingSize::Medium => "medium",
            RatingSize::Large => "large",
        }
    }
}

impl FromStr for RatingSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(RatingSize::Small),
            "medium" => Ok(RatingSize::Medium),
            "large" => Ok(RatingSize::Large),
            other => Err(DomainError::validation(format!(
                "unknown rating size '{other}' (expected small, medium or large)"
            ))),
        }
    }
}

/// Trailing text shown next to an editable widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingLabel {
    /// `"{rating}/5"`
    Score(RatingValue),
    /// `"Click to rate"`
    Prompt,
}

impl core::fmt::Display for RatingLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RatingLabel::Score(rating) => write!(f, "{rating}/{}", RatingValue::MAX_STARS),
            RatingLabel::Prompt => f.write_str("Click to rate"),
        }
    }
}

impl Serialize for RatingLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Keys that activate a focused star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Enter,
    Space,
}

impl ActivationKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(ActivationKey::Enter),
            // "Spacebar" is what older engines report.
            " " | "Spacebar" => Some(ActivationKey::Space),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationTrigger {
    /// Primary pointer click.
    Pointer,
    Key(ActivationKey),
}

/// One of the five star controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarState {
    /// 1-based star value reported on activation.
    pub value: u8,
    pub filled: bool,
    pub focusable: bool,
    pub disabled: bool,
    pub aria_label: String,
}

impl StarState {
    /// `tabindex` for the control: reachable by Tab only when interactive.
    pub fn tab_index(&self) -> i32 {
        if self.focusable { 0 } else { -1 }
    }

    pub fn glyph(&self) -> &'static str {
        if self.filled { "★" } else { "☆" }
    }
}

/// Render state of a `StarRating`.
///
/// The widget is a controlled component: the model never changes after it
/// is built, and activations are reported through the caller's callback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarRatingModel {
    pub rating: RatingValue,
    pub size: RatingSize,
    pub readonly: bool,
    /// Not read-only and a callback was supplied.
    pub interactive: bool,
    pub stars: [StarState; 5],
    pub label: Option<RatingLabel>,
}

impl StarRatingModel {
    pub fn new(
        rating: impl Into<RatingValue>,
        readonly: bool,
        has_callback: bool,
        size: RatingSize,
    ) -> Self {
        let rating = rating.into();
        let interactive = !readonly && has_callback;

        let stars = core::array::from_fn(|i| {
            let value = (i + 1) as u8;
            StarState {
                value,
                filled: rating.fills(value),
                focusable: interactive,
                disabled: readonly,
                aria_label: star_label(value),
            }
        });

        let label = (!readonly).then(|| {
            if rating.is_rated() {
                RatingLabel::Score(rating)
            } else {
                RatingLabel::Prompt
            }
        });

        Self {
            rating,
            size,
            readonly,
            interactive,
            stars,
            label,
        }
    }

    /// Read-only display of a rating (no label, nothing focusable).
    pub fn display(rating: impl Into<RatingValue>, size: RatingSize) -> Self {
        Self::new(rating, true, false, size)
    }

    pub fn filled_count(&self) -> usize {
        self.stars.iter().filter(|s| s.filled).count()
    }

    /// Handle an activation of star `star`.
    ///
    /// Invokes `on_change` exactly once with `star` when the model was built
    /// interactive (not read-only, callback present); otherwise does nothing.
    /// Returns whether the callback ran.
    pub fn activate<F>(&self, star: u8, trigger: ActivationTrigger, on_change: Option<F>) -> bool
    where
        F: FnOnce(u8),
    {
        let Some(on_change) = on_change.filter(|_| self.interactive) else {
            tracing::trace!(star, ?trigger, "star activation ignored (not interactive)");
            return false;
        };
        if !(1..=RatingValue::MAX_STARS).contains(&star) {
            tracing::trace!(star, "star activation ignored (out of range)");
            return false;
        }

        tracing::debug!(star, ?trigger, "star rating activated");
        on_change(star);
        true
    }
}

fn star_label(value: u8) -> String {
    if value == 1 {
        "1 star".to_string()
    } else {
        format!("{value} stars")
    }
}
