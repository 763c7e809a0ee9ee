use std::path::PathBuf;

use anyhow::{Context, Result};

/// Process configuration loaded from environment variables.
///
/// Only this module reads the environment. The purge coordinator takes an
/// explicit `StoreLayout` built from `data_dir`, so tests can point it at
/// a temporary directory without touching process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub data_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            data_dir: PathBuf::from(require_env("DATA_DIR")?),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
