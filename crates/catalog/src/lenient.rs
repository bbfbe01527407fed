//! Lenient numeric fields.
//!
//! Catalog exports are produced by several backends and numeric columns
//! arrive as numbers, numeric strings or `null`. A malformed value degrades to
//! `NaN` (or zero for counts) instead of failing the whole product list.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

/// Coerce free-form text into a number, `NaN` when it is not one.
///
/// Rust's float parser also accepts words such as `inf` or `nan`; only the
/// spelled-out `Infinity` and numerals that overflow are allowed to produce an
/// infinite value.
pub fn coerce_number(text: &str) -> f64 {
    let text = text.trim();
    let Ok(value) = text.parse::<f64>() else {
        return f64::NAN;
    };
    if value.is_finite() {
        return value;
    }
    let unsigned = text.trim_start_matches(['+', '-']);
    let numeral = unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.');
    if value.is_infinite() && (numeral || unsigned == "Infinity") {
        value
    } else {
        f64::NAN
    }
}

/// `deserialize_with` target for lenient floats.
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    deserializer.deserialize_any(NumberVisitor)
}

/// `deserialize_with` target for lenient counts.
///
/// Fractional counts are truncated; negative, `NaN` and non-numeric values
/// read as zero.
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    deserializer.deserialize_any(CountVisitor)
}

pub(crate) fn nan() -> f64 {
    f64::NAN
}

fn to_count(value: f64) -> u64 {
    if value > 0.0 {
        // `as` saturates at u64::MAX.
        value as u64
    } else {
        0
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        Ok(coerce_number(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<f64, E> {
        Ok(f64::NAN)
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(f64::NAN)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(f64::NAN)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<f64, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(f64::NAN)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<f64, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(f64::NAN)
    }
}

struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a count")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        Ok(u64::try_from(v).unwrap_or(0))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        Ok(to_count(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
        Ok(to_count(coerce_number(v)))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<u64, D::Error> {
        deserializer.deserialize_any(CountVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<u64, A::Error> {
        NumberVisitor.visit_seq(seq).map(to_count)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<u64, A::Error> {
        NumberVisitor.visit_map(map).map(to_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_numerals_and_spelled_out_infinity() {
        assert_eq!(coerce_number(" 12.30 "), 12.3);
        assert_eq!(coerce_number("-4"), -4.0);
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(coerce_number("1e400"), f64::INFINITY);
    }

    #[test]
    fn rejects_float_parser_words() {
        for word in ["inf", "INF", "-inf", "infinity", "+Inf", "nan", "NaN", "abc", ""] {
            assert!(coerce_number(word).is_nan(), "{word:?} should coerce to NaN");
        }
    }

    #[test]
    fn counts_truncate_and_floor_at_zero() {
        assert_eq!(to_count(3.0), 3);
        assert_eq!(to_count(2.9), 2);
        assert_eq!(to_count(-1.0), 0);
        assert_eq!(to_count(f64::NAN), 0);
    }
}
