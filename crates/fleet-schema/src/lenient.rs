//! Lax scalar coercion for API payloads
//!
//! The API is loose about scalar encoding: integers may arrive as `2019`,
//! `2019.0` or `"2019"`, floats as numbers or numeric strings, booleans as
//! `true`, `1` or `"yes"`. These helpers accept those forms for use with
//! `#[serde(deserialize_with = ...)]`. Non-numeric strings, fractional values
//! for integer fields and other JSON types are still rejected.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Integer from a JSON integer, integral float, or numeric string.
pub fn int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_int(&value).map_err(D::Error::custom)
}

pub fn opt_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => value_to_int(&value).map(Some).map_err(D::Error::custom),
    }
}

/// Float from any JSON number or numeric string.
pub fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_float(&value).map_err(D::Error::custom)
}

pub fn opt_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => value_to_float(&value).map(Some).map_err(D::Error::custom),
    }
}

/// Bool from a JSON bool, `0`/`1`, or a yes/no style string.
pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) if n.as_i64() == Some(0) => Ok(false),
        Value::Number(n) if n.as_i64() == Some(1) => Ok(true),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Ok(true),
            "false" | "f" | "no" | "n" | "off" | "0" => Ok(false),
            _ => Err(D::Error::custom(format!("expected a boolean, got {value}"))),
        },
        _ => Err(D::Error::custom(format!("expected a boolean, got {value}"))),
    }
}

fn value_to_int<T: TryFrom<i64>>(value: &Value) -> Result<T, String> {
    let wide = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => n.as_f64().and_then(integral),
        },
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    };
    wide.and_then(|i| T::try_from(i).ok())
        .ok_or_else(|| format!("expected an integer, got {value}"))
}

fn value_to_float(value: &Value) -> Result<f64, String> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| format!("expected a number, got {value}"))
}

/// Whole-number floats only; `2019.5` is not an integer.
fn integral(f: f64) -> Option<i64> {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
