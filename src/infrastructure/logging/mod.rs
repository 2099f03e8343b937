//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting
//! - `RUST_LOG` overrides

pub mod logger;

pub use logger::LoggerImpl;
