use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Category, PaperRecord};

/// Repository trait for the per-category paper documents
///
/// One document per category, stored under `{category}.json` as a JSON
/// array of [`PaperRecord`]. Writes overwrite unconditionally; there is no
/// versioning.
#[async_trait]
pub trait PaperCache: Send + Sync {
    /// Replace the document for `category` with `records`
    async fn put(&self, category: &Category, records: &[PaperRecord]) -> DomainResult<()>;

    /// Read the document for `category`
    ///
    /// # Errors
    /// - `NotFound` if no document has been written for the category
    /// - `StoreFailure` for any other store error
    async fn get(&self, category: &Category) -> DomainResult<Vec<PaperRecord>>;

    /// Category codes of every stored document
    ///
    /// Keys not ending in `.json` are ignored.
    async fn list_categories(&self) -> DomainResult<BTreeSet<String>>;
}
