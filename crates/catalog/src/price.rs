//! Product price: lenient coercion from the wire and display formatting.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use shopfront_core::ValueObject;

use crate::lenient;

/// Currency symbol prefixed to every displayed price.
pub const CURRENCY_SYMBOL: &str = "$";

/// A product price as received from the catalog.
///
/// The catalog does not guarantee a numeric JSON value: decimal columns are
/// often sent as strings. Anything that does not parse becomes `NaN` and
/// renders as a degenerate string instead of failing the whole record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl ValueObject for Price {}

impl Price {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Coerce free-form text into a price (`NaN` when it is not a number).
    pub fn coerce(text: &str) -> Self {
        Self(lenient::coerce_number(text))
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    /// Display string: currency symbol + exactly two fractional digits.
    ///
    /// `19.5` → `"$19.50"`, `9.999` → `"$10.00"`.
    pub fn formatted(self) -> String {
        format!("{CURRENCY_SYMBOL}{}", fixed_two(self.0))
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.formatted())
    }
}

fn fixed_two(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0.0 would otherwise print as "-0.00".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.2}")
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::number(deserializer).map(Price)
    }
}
