use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::value::{js_string, number_text};

#[derive(Clone, Copy)]
pub struct FlattenOpts {
    pub indent: usize,
}

impl Default for FlattenOpts {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Text form of a value: `"null"` for null, pretty JSON for containers,
/// plain text for scalars.
pub fn flatten(value: &Value) -> String {
    flatten_with(value, FlattenOpts::default())
}

pub fn flatten_with(value: &Value, opts: FlattenOpts) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Object(_) | Value::Array(_) => {
            let indent = vec![b' '; opts.indent];
            let mut out = Vec::new();
            let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
            match value.serialize(&mut ser) {
                Ok(()) => String::from_utf8(out).unwrap_or_else(|_| value.to_string()),
                Err(_) => value.to_string(),
            }
        }
        scalar => js_string(scalar),
    }
}

pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True for a string that is non-blank after trimming (or any string when `allow_empty`).
pub fn is_str_has_value(value: &Value, allow_empty: bool) -> bool {
    match value {
        Value::String(s) => allow_empty || !s.trim().is_empty(),
        _ => false,
    }
}

// Groups the trailing digit run of `int_part` in threes: "-1234" -> "-1,234".
fn group_thousands(int_part: &str) -> String {
    let run_start = int_part
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map_or(int_part.len(), |(i, _)| i);
    let (prefix, digits) = int_part.split_at(run_start);

    let mut groups: Vec<&str> = Vec::new();
    let head = digits.len() % 3;
    if head > 0 {
        groups.push(&digits[..head]);
    }
    let mut i = head;
    while i < digits.len() {
        groups.push(&digits[i..i + 3]);
        i += 3;
    }

    let mut out = prefix.to_string();
    if !prefix.is_empty() && head == 0 && !digits.is_empty() {
        out.push(',');
    }
    out.push_str(&groups.join(","));
    out.replacen("-,", "-", 1)
}

/// Thousands separators for the integer part, e.g. `-1234567.891` -> `-1,234,567.891`.
///
/// Null, `false` and `""` format as `""`; zero formats as `"0"`.
pub fn number_format(n: &Value) -> String {
    let text = match n {
        Value::Null | Value::Bool(false) => return String::new(),
        Value::String(s) if s.is_empty() => return String::new(),
        Value::String(s) => s.clone(),
        Value::Number(num) => number_text(num),
        other => js_string(other),
    };
    match text.find('.') {
        Some(dot) => {
            let (int_part, frac) = text.split_at(dot);
            format!("{}{}", group_thousands(int_part), frac)
        }
        None => group_thousands(&text),
    }
}
