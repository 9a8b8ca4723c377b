//! nestkit-core: Deep-path access, query-string codec, comparison and fixture helpers
//!
//! This crate focuses on a small, well-factored surface over `serde_json::Value`:
//! - Dot/bracket path reads and in-place writes (`a.b[0]['c']`)
//! - URL query parsing with int/bool coercion, and canonical serialization
//! - Deep equality that treats timestamps as instants, not strings
//! - Random scalars, strings, dates and item factories for test fixtures
//! - Small formatting helpers and JSON file load/save for CLI use
//!
pub mod compare;
pub mod error;
pub mod format;
pub mod io;
pub mod path;
pub mod query;
pub mod random;
pub mod value;

pub use compare::{
    is_date, is_equal, is_equal_dates, is_equal_number_or_string, is_equal_with, is_object,
};
pub use error::{Error, Result};
pub use format::{
    FlattenOpts, capitalize_first_letter, flatten, flatten_with, is_str_has_value, number_format,
};
pub use io::{load_json_file, write_json_to_file};
pub use path::{
    change_deep_value, get_deep_value, get_prop, get_prop_or, has_prop, normalize_path,
};
pub use query::{
    QueryMap, QueryValue, get_query_param, param_as_array, parse_url_query, serialize_url_params,
};
pub use random::{
    CHAR_PRESETS, Enumerable, Randomizer, create_n_items, exec_n_times, n_random, random_date,
    random_enum_value, random_id, random_item, random_string, shuffle_items,
};
