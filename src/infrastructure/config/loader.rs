use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::{Config, StoreBackend};

/// Project config file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "better-papers.yaml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "BETTER_PAPERS_";

/// Plain bucket-name variable honoured for compatibility with existing deployments
pub const BUCKET_NAME_ENV: &str = "BUCKET_NAME";

/// Largest page the arXiv export API serves in one response
const MAX_PAGE_SIZE: usize = 2000;

/// Widest recency window accepted, about ten years
const MAX_LOOKBACK_DAYS: i64 = 3650;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid feed base_url: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid page_size: {0}. Must be between 1 and 2000")]
    InvalidPageSize(usize),

    #[error("Invalid lookback_days: {0}. Must be between 1 and 3650")]
    InvalidLookback(i64),

    #[error("store.bucket_name is required for the s3 backend (set BUCKET_NAME or BETTER_PAPERS_STORE__BUCKET_NAME)")]
    MissingBucketName,

    #[error("store.root cannot be empty for the local backend")]
    EmptyStoreRoot,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. better-papers.yaml in the working directory (optional)
    /// 3. An explicitly given config file (optional)
    /// 4. BUCKET_NAME
    /// 5. Environment variables (BETTER_PAPERS_* prefix, `__` separates nested keys)
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let config: Config = Self::figment(explicit)
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(DEFAULT_CONFIG_FILE));
        if let Some(path) = explicit {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(
                Env::raw()
                    .only(&[BUCKET_NAME_ENV])
                    .map(|_| "store.bucket_name".into()),
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate configuration after loading
    ///
    /// Store settings are checked separately by [`ConfigLoader::validate_store`]
    /// since a live-mode server never touches the store.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let feed = &config.feed;
        match reqwest::Url::parse(&feed.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidBaseUrl(feed.base_url.clone())),
        }

        if feed.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(feed.timeout_secs));
        }

        if feed.page_size == 0 || feed.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize(feed.page_size));
        }

        if !(1..=MAX_LOOKBACK_DAYS).contains(&feed.lookback_days) {
            return Err(ConfigError::InvalidLookback(feed.lookback_days));
        }

        Ok(())
    }

    /// Validate the settings needed to open the configured store
    pub fn validate_store(config: &Config) -> Result<(), ConfigError> {
        match config.store.backend {
            StoreBackend::S3 => {
                let has_bucket = config
                    .store
                    .bucket_name
                    .as_deref()
                    .is_some_and(|b| !b.trim().is_empty());
                if !has_bucket {
                    return Err(ConfigError::MissingBucketName);
                }
            }
            StoreBackend::Local => {
                if config.store.root.trim().is_empty() {
                    return Err(ConfigError::EmptyStoreRoot);
                }
            }
            StoreBackend::Memory => {}
        }
        Ok(())
    }
}
