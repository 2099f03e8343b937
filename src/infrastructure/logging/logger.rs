use anyhow::Result;
use std::io;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::models::LoggingConfig;

/// Logger initialisation using tracing
pub struct LoggerImpl;

impl LoggerImpl {
    /// Install the global subscriber for the given configuration
    ///
    /// `RUST_LOG` directives take precedence over the configured level. Logs go
    /// to stderr so `--json` command output on stdout stays machine-readable.
    ///
    /// # Errors
    /// Returns an error if the level is invalid or a global subscriber is
    /// already installed
    pub fn init(config: &LoggingConfig) -> Result<()> {
        let default_level = parse_log_level(&config.level)?;

        let env_filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy();

        match config.format.as_str() {
            "pretty" => {
                let layer = tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_filter(env_filter);
                tracing_subscriber::registry().with(layer).try_init()?;
            }
            _ => {
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(env_filter);
                tracing_subscriber::registry().with(layer).try_init()?;
            }
        }

        tracing::debug!(
            level = %config.level,
            format = %config.format,
            "logger initialized"
        );
        Ok(())
    }
}

/// Parse log level string to Level
fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {level}"),
    }
}
