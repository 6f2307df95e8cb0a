// ============================================================================
// Non-Finite f64 Serialization
// serde `with` helper for f64 fields that may hold NaN or an infinity
// ============================================================================
//
// Finite values are written as plain numbers. NaN and the infinities are
// written as the strings "NaN", "Infinity" and "-Infinity", matching the
// display text, since JSON has no literal for them.
//
// Usage:
// ```ignore
// #[serde(with = "crate::numeric::serde_float")]
// result: f64,
// ```

use super::display::non_finite;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match non_finite(*value) {
        Some(text) => serializer.serialize_str(text),
        None => serializer.serialize_f64(*value),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Number(value) => Ok(value),
        Repr::Text(text) => match text.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            other => Err(D::Error::custom(format!(
                "expected a number, \"NaN\", \"Infinity\" or \"-Infinity\", got {other:?}"
            ))),
        },
    }
}
