use std::path::PathBuf;

/// Errors from the file-backed surface. The value algorithms never fail;
/// they signal absence with `None`, `false` or `""`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read or write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("empty file: {}", .0.display())]
    Empty(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
