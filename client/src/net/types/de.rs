//! Lenient field decoders shared by the DTO modules.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string or integer id and normalise it to a string.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => match i64_from(&n) {
            Some(int) => Ok(int.to_string()),
            None => Err(D::Error::custom("expected integer id")),
        },
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

/// Optional variant of [`id`]; `null` and missing both map to `None`.
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(i64_from(&n).map(|v| v.to_string())),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

/// Integer that may arrive as an integral float or a numeric string.
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => i64_from(&n).ok_or_else(|| D::Error::custom("expected integer-compatible number")),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer, got {s:?}"))),
        Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Decimal that may arrive as a number or a numeric string (amounts).
pub fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().ok_or_else(|| D::Error::custom("expected finite number")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected number, got {s:?}"))),
        Value::Null => Ok(0.0),
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Boolean that may arrive as `0`/`1` or `"true"`/`"false"`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
        Value::String(s) => Ok(matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")),
        Value::Null => Ok(false),
        _ => Err(D::Error::custom("expected boolean")),
    }
}

fn i64_from(number: &serde_json::Number) -> Option<i64> {
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    number
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| f as i64)
}
