use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

pub fn load_json_file(path: &Path) -> Result<Value> {
    let data = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if data.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(Error::Empty(path.to_path_buf()));
    }
    log::debug!("loaded {} bytes from {}", data.len(), path.display());
    serde_json::from_slice(&data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_json_to_file(path: &Path, value: &Value) -> Result<()> {
    let s = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, s).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
