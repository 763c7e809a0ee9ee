//! Per-record artifacts — one file per paper per category, at a path
//! templated by category directory and arXiv code.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// One artifact category: a directory under the data directory and the
/// file extension its per-paper files carry.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactCategory {
    pub dir: &'static str,
    pub ext: &'static str,
}

/// All artifact categories, in purge order.
pub const ARTIFACT_CATEGORIES: [ArtifactCategory; 7] = [
    ArtifactCategory { dir: "summaries", ext: "json" },
    ArtifactCategory { dir: "arxiv_objects", ext: "json" },
    ArtifactCategory { dir: "semantic_meta", ext: "json" },
    ArtifactCategory { dir: "arxiv_text", ext: "txt" },
    ArtifactCategory { dir: "arxiv_chunks", ext: "json" },
    ArtifactCategory { dir: "arxiv_large_parent_chunks", ext: "json" },
    ArtifactCategory { dir: "arxiv_qna", ext: "json" },
];

/// Removes the artifact file at `path` if it exists.
///
/// Returns `Ok(true)` when a file was removed and `Ok(false)` on a miss.
/// Removal failures are returned to the caller, which logs them and moves
/// on to the next category; one broken artifact must not block the rest.
pub fn remove(path: &Path) -> std::io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_existing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("9999.99999.json");
        fs::write(&path, "{}").unwrap();

        assert!(remove(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_absent_artifact_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("0000.00000.json");

        assert!(!remove(&path).unwrap());
    }

    #[test]
    fn test_removal_failure_surfaces_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory at the artifact path cannot be removed
        // with remove_file, which is the easiest removal failure to stage.
        let path = dir.path().join("9999.99999.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("inner"), "x").unwrap();

        assert!(remove(&path).is_err());
        assert!(path.exists());
    }

    #[test]
    fn test_every_category_has_a_known_extension() {
        for category in ARTIFACT_CATEGORIES {
            assert!(matches!(category.ext, "json" | "txt"));
        }
    }
}
