//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Configuration validation
//! - Type-safe config structs

pub mod loader;
pub mod template;

pub use loader::{ConfigError, ConfigLoader, BUCKET_NAME_ENV, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use template::{write_default_config, DEFAULT_CONFIG_TEMPLATE};
