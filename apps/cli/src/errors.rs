use std::path::PathBuf;

use thiserror::Error;

/// Purge-level error type.
///
/// Only fatal conditions live here. "Not present in this store" is an
/// expected outcome and is reported by each store module as a miss, not
/// an error. In particular, an absent index map or absent key is a miss,
/// while an unreadable or malformed index map is fatal and keeps its own
/// variant so the two are never conflated.
#[derive(Debug, Error)]
pub enum PurgeError {
    #[error("index map {path} is unreadable: {source}")]
    IndexMapUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("index map {path} is not valid JSON: {source}")]
    IndexMapMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cache {path} is unreadable: {source}")]
    CacheUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cache {path} is not valid JSON: {source}")]
    CacheMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
