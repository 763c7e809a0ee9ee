mod config;
mod db;
mod errors;
mod prompts;
mod purge;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::purge::StoreLayout;

/// Delete a paper, identified by its arXiv code, from every data store
/// in the summarization pipeline.
#[derive(Debug, Parser)]
#[command(name = "delete-paper", version)]
struct Cli {
    /// arXiv code of the paper to be deleted (e.g. 2309.12345).
    arxiv_code: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the CLI first so --help and --version work with no
    // environment set; clap exits before any config is needed.
    let cli = Cli::parse();

    // Load configuration (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if cli.arxiv_code.trim().is_empty() {
        bail!("arXiv code must not be empty");
    }

    let pool = create_pool(&config.database_url).await?;
    let layout = StoreLayout::new(&config.data_dir);

    purge::purge(&pool, &layout, &cli.arxiv_code).await?;
    info!("Done.");

    Ok(())
}
