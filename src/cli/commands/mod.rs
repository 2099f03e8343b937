//! CLI command implementations.

pub mod categories;
pub mod fetch;
pub mod init;
pub mod refresh;
pub mod serve;

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::adapters::arxiv::ArxivClient;
use crate::adapters::store::ObjectStorePaperCache;
use crate::domain::models::Config;
use crate::domain::ports::PaperCache;
use crate::infrastructure::config::ConfigLoader;
use crate::services::PaperService;

/// Build the live lookup pipeline against the configured feed.
pub(crate) fn paper_service(config: &Config) -> Result<PaperService> {
    let client = ArxivClient::new(&config.feed).context("Failed to build arXiv client")?;
    Ok(PaperService::with_lookback_days(
        Arc::new(client),
        config.feed.lookback_days,
    ))
}

/// Open the configured object store as a paper cache.
pub(crate) fn open_cache(config: &Config) -> Result<Arc<dyn PaperCache>> {
    ConfigLoader::validate_store(config)?;
    let cache = ObjectStorePaperCache::from_config(&config.store)
        .context("Failed to open paper cache")?;
    Ok(Arc::new(cache))
}
