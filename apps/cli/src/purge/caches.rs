//! Tabular caches — three on-disk tables keyed by arXiv code (paper
//! metadata, GPT reviews, topic cluster assignments). Each is a single
//! JSON object mapping code to a row object whose columns are opaque to
//! the purge. The table is loaded fully, one row dropped, and rewritten
//! in full only when a drop occurred.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::errors::PurgeError;

/// Cache file names under the data directory, in purge order.
pub const CACHE_FILES: [&str; 3] = ["arxiv.json", "reviews.json", "topics.json"];

/// Drops the row for `arxiv_code` from the cache at `path`.
///
/// Returns `Ok(true)` if a row was dropped (and the file rewritten),
/// `Ok(false)` on a miss. Unlike the code map, a cache is expected to
/// exist: a missing or corrupt cache file aborts the whole purge.
pub fn drop_row(path: &Path, arxiv_code: &str) -> Result<bool, PurgeError> {
    let raw = fs::read_to_string(path).map_err(|source| PurgeError::CacheUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut table: Map<String, Value> =
        serde_json::from_str(&raw).map_err(|source| PurgeError::CacheMalformed {
            path: path.to_path_buf(),
            source,
        })?;

    if table.remove(arxiv_code).is_none() {
        return Ok(false);
    }

    let serialized =
        serde_json::to_string(&table).expect("a JSON object always serializes");
    fs::write(path, serialized).map_err(|source| PurgeError::StoreWrite {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVIEWS: &str = r#"{
        "9999.99999": {"novelty_score": 2, "technical_score": 3},
        "2309.12345": {"novelty_score": 3, "technical_score": 2},
        "2209.12345": {"novelty_score": 1, "technical_score": 1}
    }"#;

    fn write_cache(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("reviews.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_drops_exactly_one_row_and_keeps_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_cache(&dir, REVIEWS);

        let dropped = drop_row(&path, "9999.99999").unwrap();
        assert!(dropped);

        let table: Map<String, Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.contains_key("9999.99999"));
        assert_eq!(table["2309.12345"]["novelty_score"], 3);
        assert_eq!(table["2209.12345"]["technical_score"], 1);
    }

    #[test]
    fn test_miss_does_not_rewrite_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_cache(&dir, REVIEWS);

        let dropped = drop_row(&path, "0000.00000").unwrap();
        assert!(!dropped);
        // The non-canonical indentation survives only if no rewrite happened.
        assert_eq!(fs::read_to_string(&path).unwrap(), REVIEWS);
    }

    #[test]
    fn test_missing_cache_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.json");

        let err = drop_row(&path, "9999.99999").unwrap_err();
        assert!(matches!(err, PurgeError::CacheUnreadable { .. }));
    }

    #[test]
    fn test_corrupt_cache_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_cache(&dir, "definitely not json");

        let err = drop_row(&path, "9999.99999").unwrap_err();
        assert!(matches!(err, PurgeError::CacheMalformed { .. }));
    }

    #[test]
    fn test_double_drop_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_cache(&dir, REVIEWS);

        assert!(drop_row(&path, "9999.99999").unwrap());
        assert!(!drop_row(&path, "9999.99999").unwrap());

        let table: Map<String, Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(table.len(), 2);
    }
}
