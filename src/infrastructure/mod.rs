//! Infrastructure layer module
//!
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;
