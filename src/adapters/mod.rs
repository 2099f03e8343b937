//! Infrastructure adapters for external systems.

pub mod arxiv;
pub mod http;
pub mod store;
