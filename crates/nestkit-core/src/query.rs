// URL query-string parsing and serialization.
// Parsing is heuristic: anything with a `?` and an `=` is treated as carrying a query.
use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::value::js_string;

/// A coerced query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl QueryValue {
    /// Digit runs become integers, `true`/`false` (any case) become booleans,
    /// everything else stays text. A digit run too large for `i64` stays text.
    pub fn coerce(raw: &str) -> Self {
        if !raw.is_empty()
            && raw.bytes().all(|b| b.is_ascii_digit())
            && let Ok(n) = raw.parse::<i64>()
        {
            return QueryValue::Int(n);
        }
        if raw.eq_ignore_ascii_case("true") {
            QueryValue::Bool(true)
        } else if raw.eq_ignore_ascii_case("false") {
            QueryValue::Bool(false)
        } else {
            QueryValue::Str(raw.to_string())
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            QueryValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            QueryValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Int(n) => write!(f, "{n}"),
            QueryValue::Bool(b) => write!(f, "{b}"),
            QueryValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&QueryValue> for Value {
    fn from(v: &QueryValue) -> Self {
        match v {
            QueryValue::Int(n) => Value::Number((*n).into()),
            QueryValue::Bool(b) => Value::Bool(*b),
            QueryValue::Str(s) => Value::String(s.clone()),
        }
    }
}

/// Parsed query parameters, unique keys in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: IndexMap<String, QueryValue>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the value of an existing key in place, otherwise appends.
    pub fn insert(&mut self, key: impl Into<String>, value: QueryValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(self.entries.len());
        for (k, v) in &self.entries {
            map.insert(k.clone(), v.into());
        }
        Value::Object(map)
    }

    pub fn to_query_string(&self, sort_keys: bool) -> String {
        serialize_url_params(&self.to_json(), sort_keys)
    }
}

impl<K: Into<String>> FromIterator<(K, QueryValue)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, QueryValue)>>(iter: I) -> Self {
        let mut out = QueryMap::new();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}

/// Parses the parameters after the first `?` of `url`, e.g. `test/?v1=10&flag=true&s=txt`.
///
/// Returns `None` unless `url` contains both `?` and `=`. Each `&`-separated
/// segment splits on its first `=`; key and value are trimmed and a missing
/// value reads as `""`. Repeated keys keep their first position and last value.
pub fn parse_url_query(url: &str) -> Option<QueryMap> {
    if !url.contains('=') {
        log::trace!("parse_url_query: no `=` in `{url}`");
        return None;
    }
    let Some((_, query)) = url.split_once('?') else {
        log::trace!("parse_url_query: no `?` in `{url}`");
        return None;
    };
    let mut out = QueryMap::new();
    for segment in query.split('&') {
        let (key, raw) = segment.split_once('=').unwrap_or((segment, ""));
        out.insert(key.trim(), QueryValue::coerce(raw.trim()));
    }
    Some(out)
}

/// Serializes the own keys of an object (or indices of an array) into `?k=v&...`.
///
/// Null members are dropped; values render as template-literal text. Returns
/// `""` when nothing is left to serialize.
pub fn serialize_url_params(params: &Value, sort_keys: bool) -> String {
    let mut pairs: Vec<(String, &Value)> = match params {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items.iter().enumerate().map(|(i, v)| (i.to_string(), v)).collect(),
        _ => return String::new(),
    };
    if sort_keys {
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
    }
    let serialized = pairs
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| format!("{k}={}", js_string(v)))
        .collect::<Vec<_>>()
        .join("&");
    if serialized.trim().is_empty() {
        String::new()
    } else {
        format!("?{serialized}")
    }
}

/// Looks `key` up and converts it, falling back to `default` when absent.
pub fn get_query_param<T>(
    params: &QueryMap,
    key: &str,
    converter: impl FnOnce(&QueryValue) -> T,
    default: T,
) -> T {
    params.get(key).map(converter).unwrap_or(default)
}

/// Arrays pass through; any other value becomes a one-element array.
pub fn param_as_array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}
