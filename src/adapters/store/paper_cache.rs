//! Object-store backed [`PaperCache`].
//!
//! Each category lives in a single object `{category}.json` whose body is a
//! JSON array of paper records. Works against any `object_store` backend;
//! S3 in production, the local filesystem or memory for development and tests.

use std::collections::BTreeSet;
use std::path::Path as FsPath;
use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Category, PaperRecord, StoreBackend, StoreConfig, DOCUMENT_SUFFIX};
use crate::domain::ports::PaperCache;

const CONTENT_TYPE_JSON: &str = "application/json";

/// Paper cache over an [`ObjectStore`].
#[derive(Debug, Clone)]
pub struct ObjectStorePaperCache {
    store: Arc<dyn ObjectStore>,
    /// Whether to attach a content-type attribute on writes. The local
    /// filesystem backend cannot store attributes.
    set_content_type: bool,
}

impl ObjectStorePaperCache {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            store,
            set_content_type: true,
        }
    }

    /// Skip the content-type attribute on writes.
    pub fn without_content_type(mut self) -> Self {
        self.set_content_type = false;
        self
    }

    /// Build the cache for the configured backend.
    pub fn from_config(config: &StoreConfig) -> DomainResult<Self> {
        match config.backend {
            StoreBackend::S3 => {
                let bucket = config
                    .bucket_name
                    .as_deref()
                    .filter(|b| !b.is_empty())
                    .ok_or_else(|| {
                        DomainError::StoreFailure(
                            "bucket_name is required for the s3 backend".to_string(),
                        )
                    })?;
                let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);
                if let Some(region) = &config.region {
                    builder = builder.with_region(region);
                }
                if let Some(endpoint) = &config.endpoint {
                    builder = builder
                        .with_endpoint(endpoint)
                        .with_allow_http(endpoint.starts_with("http://"));
                }
                let s3 = builder
                    .build()
                    .map_err(|e| DomainError::StoreFailure(format!("S3 setup failed: {e}")))?;
                tracing::info!(bucket, "using S3 paper cache");
                Ok(Self::new(Arc::new(s3)))
            }
            StoreBackend::Local => {
                let store = local_store(FsPath::new(&config.root))?;
                tracing::info!(root = %config.root, "using local filesystem paper cache");
                Ok(Self::new(Arc::new(store)).without_content_type())
            }
            StoreBackend::Memory => {
                tracing::warn!("using in-memory paper cache; documents are lost on exit");
                Ok(Self::new(Arc::new(InMemory::new())))
            }
        }
    }

    fn location(category: &Category) -> Path {
        Path::from(category.object_key())
    }
}

fn local_store(root: &FsPath) -> DomainResult<LocalFileSystem> {
    std::fs::create_dir_all(root).map_err(|e| {
        DomainError::StoreFailure(format!("cannot create {}: {e}", root.display()))
    })?;
    LocalFileSystem::new_with_prefix(root)
        .map_err(|e| DomainError::StoreFailure(format!("cannot open {}: {e}", root.display())))
}

fn map_store_error(category: &Category, err: object_store::Error) -> DomainError {
    match err {
        object_store::Error::NotFound { .. } => DomainError::NotFound(category.to_string()),
        other => DomainError::StoreFailure(format!("{}: {other}", category.object_key())),
    }
}

#[async_trait]
impl PaperCache for ObjectStorePaperCache {
    async fn put(&self, category: &Category, records: &[PaperRecord]) -> DomainResult<()> {
        let body = serde_json::to_vec(records)?;
        let size = body.len();

        let mut opts = PutOptions::default();
        if self.set_content_type {
            let mut attributes = Attributes::new();
            attributes.insert(Attribute::ContentType, CONTENT_TYPE_JSON.into());
            opts.attributes = attributes;
        }

        self.store
            .put_opts(&Self::location(category), PutPayload::from(body), opts)
            .await
            .map_err(|e| map_store_error(category, e))?;

        tracing::info!(
            category = %category,
            papers = records.len(),
            bytes = size,
            "wrote category document"
        );
        Ok(())
    }

    async fn get(&self, category: &Category) -> DomainResult<Vec<PaperRecord>> {
        let result = self
            .store
            .get(&Self::location(category))
            .await
            .map_err(|e| map_store_error(category, e))?;
        let bytes = result
            .bytes()
            .await
            .map_err(|e| map_store_error(category, e))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::StoreFailure(format!(
                "{} is not a valid paper document: {e}",
                category.object_key()
            ))
        })
    }

    async fn list_categories(&self) -> DomainResult<BTreeSet<String>> {
        let mut listing = self.store.list(None);
        let mut categories = BTreeSet::new();

        while let Some(meta) = listing.next().await {
            let meta = meta.map_err(|e| DomainError::StoreFailure(format!("listing failed: {e}")))?;
            if let Some(code) = meta.location.as_ref().strip_suffix(DOCUMENT_SUFFIX) {
                if !code.is_empty() && !code.contains('/') {
                    categories.insert(code.to_string());
                }
            }
        }

        Ok(categories)
    }
}
