//! Default configuration file written by `better-papers init`.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Default configuration template content
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Better Papers Configuration
# Override settings by editing this file or setting environment variables
# with the BETTER_PAPERS_ prefix (nested keys separated by "__").
#
# Example environment variables:
#   export BUCKET_NAME=my-papers-bucket
#   export BETTER_PAPERS_SERVER__MODE=live
#   export BETTER_PAPERS_LOGGING__LEVEL=debug

# Object store holding one <category>.json document per category
store:
  # Backend: s3, local, memory
  backend: "s3"

  # Bucket name (required for s3)
  # bucket_name: "my-papers-bucket"

  # Directory used by the local backend
  root: ".better-papers/store"

# Upstream arXiv export API
feed:
  base_url: "https://export.arxiv.org/api/query"
  timeout_secs: 10
  page_size: 50
  lookback_days: 7

# HTTP server
server:
  host: "127.0.0.1"
  port: 8000

  # Serving mode: cached (read the store) or live (query arXiv per request)
  mode: "cached"
  enable_cors: true

# Logging configuration
logging:
  # Log level: trace, debug, info, warn, error
  level: "info"

  # Log format: json, pretty
  format: "json"
"#;

/// Write the default config to `path`.
///
/// Returns `false` without touching the file if it exists and `force` is not set.
pub fn write_default_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(true)
}
