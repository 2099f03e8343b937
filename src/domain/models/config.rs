use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Main configuration structure for Better Papers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Object store holding the per-category documents
    #[serde(default)]
    pub store: StoreConfig,

    /// Upstream feed settings
    #[serde(default)]
    pub feed: FeedConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which object store implementation backs the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Amazon S3 (or an S3-compatible endpoint)
    #[default]
    S3,
    /// Directory on the local filesystem
    Local,
    /// Process-local memory, lost on exit
    Memory,
}

/// Object store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Bucket to address; required for the S3 backend
    #[serde(default)]
    pub bucket_name: Option<String>,

    /// Root directory for the local backend
    #[serde(default = "default_store_root")]
    pub root: String,

    /// Region override for S3
    #[serde(default)]
    pub region: Option<String>,

    /// Endpoint override for S3-compatible stores
    #[serde(default)]
    pub endpoint: Option<String>,
}

fn default_store_root() -> String {
    ".better-papers/store".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            bucket_name: None,
            root: default_store_root(),
            region: None,
            endpoint: None,
        }
    }
}

/// Upstream feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FeedConfig {
    /// Search endpoint of the preprint feed
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Value of the `max_results` query parameter
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Width of the recency window in days
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
}

fn default_base_url() -> String {
    "https://export.arxiv.org/api/query".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_page_size() -> usize {
    50
}

const fn default_lookback_days() -> i64 {
    7
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
            lookback_days: default_lookback_days(),
        }
    }
}

/// Which `/papers/{category}` variant a deployment serves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServingMode {
    /// Read precomputed documents from the object store
    #[default]
    Cached,
    /// Query the upstream feed on every request
    Live,
}

impl ServingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cached => "cached",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for ServingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cached" => Ok(Self::Cached),
            "live" => Ok(Self::Live),
            other => Err(format!("unknown serving mode '{other}' (expected cached or live)")),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub mode: ServingMode,

    /// Allow cross-origin requests from a browser frontend
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8000
}

const fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            mode: ServingMode::default(),
            enable_cors: default_true(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serving_mode_from_str() {
        assert_eq!("live".parse::<ServingMode>(), Ok(ServingMode::Live));
        assert_eq!("CACHED".parse::<ServingMode>(), Ok(ServingMode::Cached));
        assert!("proxy".parse::<ServingMode>().is_err());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "store:\n  bucket_name: papers\nserver:\n  mode: live\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.store.bucket_name.as_deref(), Some("papers"));
        assert_eq!(config.store.backend, StoreBackend::S3);
        assert_eq!(config.server.mode, ServingMode::Live);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.feed.timeout_secs, 10);
        assert_eq!(config.feed.page_size, 50);
    }
}
