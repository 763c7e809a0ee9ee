//! The arXiv code map — a single JSON object mapping arXiv code to its
//! canonical title, used by the pipeline as a cheap existence check.
//! The whole map is rewritten on every removal.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};

use crate::errors::PurgeError;

/// Removes `arxiv_code` from the code map at `path` and persists the map.
///
/// Returns `Ok(true)` if the key was present and removed, `Ok(false)` on a
/// miss (absent file or absent key). An unreadable or malformed map is a
/// fatal error, not a miss.
pub fn remove_entry(path: &Path, arxiv_code: &str) -> Result<bool, PurgeError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(source) => {
            return Err(PurgeError::IndexMapUnreadable {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut map: Map<String, Value> =
        serde_json::from_str(&raw).map_err(|source| PurgeError::IndexMapMalformed {
            path: path.to_path_buf(),
            source,
        })?;

    if map.remove(arxiv_code).is_none() {
        return Ok(false);
    }

    let serialized =
        serde_json::to_string(&map).expect("a JSON object always serializes");
    fs::write(path, serialized).map_err(|source| PurgeError::StoreWrite {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_map(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("arxiv_code_map.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_removes_present_key_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_map(
            &dir,
            r#"{"9999.99999": "Scaling Laws", "2309.12345": "Adaptive NER"}"#,
        );

        let removed = remove_entry(&path, "9999.99999").unwrap();
        assert!(removed);

        let map: Map<String, Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(!map.contains_key("9999.99999"));
        assert_eq!(map["2309.12345"], "Adaptive NER");
    }

    #[test]
    fn test_absent_key_is_a_miss_and_file_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // Non-canonical spacing proves a miss does not rewrite the file.
        let contents = r#"{ "2309.12345":   "Adaptive NER" }"#;
        let path = write_map(&dir, contents);

        let removed = remove_entry(&path, "0000.00000").unwrap();
        assert!(!removed);
        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    }

    #[test]
    fn test_missing_file_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arxiv_code_map.json");

        let removed = remove_entry(&path, "9999.99999").unwrap();
        assert!(!removed);
        assert!(!path.exists());
    }

    #[test]
    fn test_malformed_map_is_a_distinct_fatal_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_map(&dir, "{not json at all");

        let err = remove_entry(&path, "9999.99999").unwrap_err();
        assert!(matches!(err, PurgeError::IndexMapMalformed { .. }));
    }
}
