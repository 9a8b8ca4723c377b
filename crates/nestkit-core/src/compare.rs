// Deep equality over serde_json::Value where timestamps compare as instants.
// A string is date-like when it parses as RFC 3339 or RFC 2822.
use chrono::{DateTime, FixedOffset, TimeZone};
use serde_json::Value;

use crate::value::{is_nil, js_string, number_text};

fn parse_date(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_rfc2822(s))
        .ok()
}

fn epoch_millis(v: &Value) -> Option<i64> {
    match v {
        Value::String(s) => parse_date(s).map(|d| d.timestamp_millis()),
        _ => None,
    }
}

pub fn is_date(value: &Value) -> bool {
    epoch_millis(value).is_some()
}

/// Objects and arrays. Date-like values are strings, so they never qualify.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

pub fn is_equal_dates<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    a.timestamp_millis() == b.timestamp_millis()
}

fn date_customizer(a: &Value, b: &Value) -> Option<bool> {
    match (epoch_millis(a), epoch_millis(b)) {
        (Some(x), Some(y)) => Some(x == y),
        _ => None,
    }
}

fn numbers_equal(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => number_text(a) == number_text(b),
    }
}

/// Structural equality with a hook consulted at every level.
///
/// `customizer` returning `Some(eq)` decides that pair; `None` falls through
/// to the structural comparison (objects ignore key order).
pub fn is_equal_with<F>(a: &Value, b: &Value, customizer: &F) -> bool
where
    F: Fn(&Value, &Value) -> Option<bool>,
{
    if let Some(eq) = customizer(a, b) {
        return eq;
    }
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len()
                && xs.iter().zip(ys).all(|(x, y)| is_equal_with(x, y, customizer))
        }
        (Value::Object(xm), Value::Object(ym)) => {
            xm.len() == ym.len()
                && xm.iter().all(|(k, x)| {
                    ym.get(k).is_some_and(|y| is_equal_with(x, y, customizer))
                })
        }
        _ => false,
    }
}

pub fn is_equal(a: &Value, b: &Value) -> bool {
    if a.is_null() && b.is_null() {
        return true;
    }
    is_equal_with(a, b, &date_customizer)
}

/// Compares the text form of two values, so `4` equals `"4"`. Nulls read as `""`.
pub fn is_equal_number_or_string(a: &Value, b: &Value) -> bool {
    let text = |v: &Value| {
        if is_nil(Some(v)) { String::new() } else { js_string(v) }
    };
    text(a) == text(b)
}
