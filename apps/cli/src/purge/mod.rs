//! Paper purge coordinator.
//!
//! Given an arXiv code, removes every known representation of the paper:
//! the code map entry, one row per tabular cache, one file per artifact
//! category, and one row per relational table. Best-effort and
//! non-atomic: a miss in any single store is reported and the run
//! continues; there is no cross-store transaction, so a run killed
//! midway leaves the code removed from some stores and present in
//! others. The next run cleans up the rest (every step is idempotent).

pub mod artifacts;
pub mod caches;
pub mod index_map;
pub mod tables;

use std::path::PathBuf;

use sqlx::PgPool;
use tracing::{info, warn};

use crate::errors::PurgeError;
use artifacts::ArtifactCategory;

/// On-disk layout of the file-based stores, rooted at the pipeline data
/// directory. Passed in explicitly so tests can point the purge at a
/// temporary directory.
#[derive(Debug, Clone)]
pub struct StoreLayout {
    data_dir: PathBuf,
}

impl StoreLayout {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn index_map_path(&self) -> PathBuf {
        self.data_dir.join("arxiv_code_map.json")
    }

    pub fn cache_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    pub fn artifact_path(&self, category: ArtifactCategory, arxiv_code: &str) -> PathBuf {
        self.data_dir
            .join(category.dir)
            .join(format!("{arxiv_code}.{}", category.ext))
    }
}

/// Purges one paper from every store: file stores first, then the
/// database. The order is fixed but incidental; no store depends on
/// another.
pub async fn purge(
    pool: &PgPool,
    layout: &StoreLayout,
    arxiv_code: &str,
) -> Result<(), PurgeError> {
    purge_file_stores(layout, arxiv_code)?;
    tables::delete_from_all_tables(pool, arxiv_code).await
}

/// Purges the code map, the tabular caches, and the per-record
/// artifacts. Split out from [`purge`] so the file-store semantics can
/// be exercised without a live database.
pub fn purge_file_stores(layout: &StoreLayout, arxiv_code: &str) -> Result<(), PurgeError> {
    let map_path = layout.index_map_path();
    if index_map::remove_entry(&map_path, arxiv_code)? {
        info!("Deleted {} from {}.", arxiv_code, map_path.display());
    } else {
        info!("{} not found in {}.", arxiv_code, map_path.display());
    }

    info!("Cleaning up caches...");
    for file_name in caches::CACHE_FILES {
        let cache_path = layout.cache_path(file_name);
        if caches::drop_row(&cache_path, arxiv_code)? {
            info!("Deleted {} from {}.", arxiv_code, cache_path.display());
        } else {
            info!("{} not found in {}.", arxiv_code, cache_path.display());
        }
    }

    info!("Removing files...");
    for category in artifacts::ARTIFACT_CATEGORIES {
        let artifact_path = layout.artifact_path(category, arxiv_code);
        match artifacts::remove(&artifact_path) {
            Ok(true) => info!("Deleted {}.", artifact_path.display()),
            Ok(false) => info!("No {} file for {}.", category.dir, arxiv_code),
            // One broken artifact must not block the remaining categories.
            Err(e) => warn!("Failed to remove {}: {e}", artifact_path.display()),
        }
    }

    Ok(())
}
