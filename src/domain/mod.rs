//! Domain layer for Better Papers
//!
//! This module contains the paper and category models, the error taxonomy,
//! and the ports implemented by infrastructure adapters.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
