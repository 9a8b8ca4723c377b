// Dot/bracket path addressing over serde_json::Value.
// - Read: `get_deep_value` (caller-chosen splitter), `get_prop`/`get_prop_or` (dot + brackets).
// - Write: `change_deep_value` mutates in place and reports success as a bool.
// - Absence is `None`, never an error; a present JSON null is `Some(&Value::Null)`.
// Array elements are addressed with the same string keys as object members ("0", "1", ...).
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::value::{index_key, is_nil, is_truthy};

// `[` optional quote, a word of [A-Za-z0-9_], optional quote, `]`.
static BRACKET_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[['"]?([A-Za-z0-9_]+)['"]?\]"#).expect("bracket key pattern is valid")
});

/// Rewrites bracket segments into dot segments and strips one stray leading
/// and one stray trailing dot.
///
/// Accepted inside brackets: a bare word or digit run, or the same wrapped in
/// single or double quotes (`a[0]`, `a[b]`, `a['b']`, `a["b"]` all become
/// `a.0` / `a.b`). Other bracket contents are left as-is.
pub fn normalize_path(path: &str) -> String {
    let dotted = BRACKET_KEY.replace_all(path, ".${1}");
    let trimmed = dotted.strip_prefix('.').unwrap_or(&dotted);
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}

fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    if key.is_empty() {
        return None;
    }
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => index_key(key).and_then(|i| items.get(i)),
        _ => None,
    }
}

fn child_mut<'a>(value: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    if key.is_empty() {
        return None;
    }
    match value {
        Value::Object(map) => map.get_mut(key),
        Value::Array(items) => index_key(key).and_then(move |i| items.get_mut(i)),
        _ => None,
    }
}

/// Walks `path` (split on `splitter`) from segment `start_index` onward.
///
/// A null `obj` is returned unchanged. The walk stops at the first segment
/// that is missing (`None`) or null (`Some(&Value::Null)`).
pub fn get_deep_value<'a>(
    obj: &'a Value,
    path: &str,
    splitter: &str,
    start_index: usize,
) -> Option<&'a Value> {
    if obj.is_null() {
        return Some(obj);
    }
    if splitter.is_empty() {
        return None;
    }
    let mut value = obj;
    for key in path.split(splitter).skip(start_index) {
        match child(value, key) {
            Some(next) if !next.is_null() => value = next,
            stop => return stop,
        }
    }
    Some(value)
}

/// Assigns `value` at `path`, returning whether the assignment happened.
///
/// Every intermediate segment must exist and be non-null, otherwise nothing is
/// touched. The last segment inserts into objects, and overwrites or appends
/// (index == len) on arrays.
pub fn change_deep_value(obj: &mut Value, path: Option<&str>, splitter: &str, value: Value) -> bool {
    let Some(path) = path else {
        return false;
    };
    if splitter.is_empty() {
        return false;
    }
    let keys: Vec<&str> = path.split(splitter).collect();
    let Some((last, parents)) = keys.split_last() else {
        return false;
    };

    let mut target = obj;
    for key in parents {
        match child_mut(target, key) {
            Some(next) if !next.is_null() => target = next,
            _ => {
                log::debug!("change_deep_value: `{key}` missing on path `{path}`");
                return false;
            }
        }
    }

    if last.is_empty() {
        return false;
    }
    match target {
        Value::Object(map) => {
            map.insert((*last).to_string(), value);
            true
        }
        Value::Array(items) => match index_key(last) {
            Some(i) if i < items.len() => {
                items[i] = value;
                true
            }
            Some(i) if i == items.len() => {
                items.push(value);
                true
            }
            _ => {
                log::debug!("change_deep_value: `{last}` is not a writable index on path `{path}`");
                false
            }
        },
        _ => false,
    }
}

/// Reads a nested property using dot and bracket syntax (`a.b[0]['c']`).
///
/// Returns `None` when `obj` is falsy, `path` is empty, or any segment is undefined.
pub fn get_prop<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() || !is_truthy(obj) {
        return None;
    }
    normalize_path(path)
        .split('.')
        .try_fold(obj, |tmp, prop| child(tmp, prop))
}

pub fn get_prop_or<'a>(obj: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get_prop(obj, path).unwrap_or(default)
}

/// True when `path` resolves to a non-null value.
pub fn has_prop(obj: &Value, path: &str) -> bool {
    !is_nil(get_prop(obj, path))
}
