//! Papers HTTP Server.
//!
//! Serves recent papers per category. A deployment runs in exactly one
//! mode: `live` proxies the upstream feed on every request, `cached` reads
//! the documents written by the refresh job.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::errors::DomainError;
use crate::domain::models::{Category, CategoryInfo, PaperRecord, ServerConfig, ServingMode, CATALOG};
use crate::domain::ports::PaperCache;
use crate::services::PaperService;

/// Configuration for the papers HTTP server.
#[derive(Debug, Clone)]
pub struct PapersHttpConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether to enable CORS.
    pub enable_cors: bool,
}

impl Default for PapersHttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            enable_cors: true,
        }
    }
}

impl From<&ServerConfig> for PapersHttpConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            enable_cors: config.enable_cors,
        }
    }
}

/// Cached-mode response for one category.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryPapersResponse {
    pub category: String,
    pub papers: Vec<PaperRecord>,
}

/// Response listing category codes.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Root welcome response.
#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Where `/papers/*` gets its data.
enum Backend {
    Live(PaperService),
    Cached(Arc<dyn PaperCache>),
}

/// Papers HTTP Server.
pub struct PapersHttpServer {
    config: PapersHttpConfig,
    backend: Backend,
}

impl PapersHttpServer {
    /// Server that queries the feed on every request.
    pub fn live(papers: PaperService, config: PapersHttpConfig) -> Self {
        Self {
            config,
            backend: Backend::Live(papers),
        }
    }

    /// Server that reads precomputed documents from the cache.
    pub fn cached(cache: Arc<dyn PaperCache>, config: PapersHttpConfig) -> Self {
        Self {
            config,
            backend: Backend::Cached(cache),
        }
    }

    pub fn mode(&self) -> ServingMode {
        match self.backend {
            Backend::Live(_) => ServingMode::Live,
            Backend::Cached(_) => ServingMode::Cached,
        }
    }

    /// Build the router.
    pub fn build_router(self) -> Router {
        let papers = match self.backend {
            Backend::Live(service) => Router::new()
                .route("/papers/categories", get(live_categories))
                .route("/papers/{category}", get(live_papers))
                .with_state(Arc::new(service)),
            Backend::Cached(cache) => Router::new()
                .route("/papers/categories", get(cached_categories))
                .route("/papers/{category}", get(cached_papers))
                .with_state(cache),
        };

        let app = Router::new()
            .route("/", get(root))
            .route("/health", get(health_check))
            .route("/catalog", get(catalog))
            .merge(papers);

        if self.config.enable_cors {
            app.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
                .layer(TraceLayer::new_for_http())
        } else {
            app.layer(TraceLayer::new_for_http())
        }
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let mode = self.mode();
        let router = self.build_router();

        tracing::info!(%addr, %mode, "papers HTTP server listening");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

// Handler functions

async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Better Papers API!".to_string(),
    })
}

async fn health_check() -> &'static str {
    "OK"
}

async fn catalog() -> Json<&'static [CategoryInfo]> {
    Json(CATALOG)
}

async fn live_papers(
    State(service): State<Arc<PaperService>>,
    Path(category): Path<String>,
) -> Result<Json<Vec<PaperRecord>>, ApiError> {
    let category = Category::parse(category).map_err(error_response)?;
    let papers = service
        .recent_papers(&category)
        .await
        .map_err(error_response)?;
    Ok(Json(papers))
}

/// Live mode has no cache to enumerate, so the static catalog is listed.
async fn live_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: CATALOG.iter().map(|info| info.code.to_string()).collect(),
    })
}

async fn cached_papers(
    State(cache): State<Arc<dyn PaperCache>>,
    Path(category): Path<String>,
) -> Result<Json<CategoryPapersResponse>, ApiError> {
    let category = Category::parse(category).map_err(error_response)?;
    let papers = cache.get(&category).await.map_err(error_response)?;
    Ok(Json(CategoryPapersResponse {
        category: category.to_string(),
        papers,
    }))
}

async fn cached_categories(
    State(cache): State<Arc<dyn PaperCache>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = cache.list_categories().await.map_err(error_response)?;
    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().collect(),
    }))
}

fn error_response(err: DomainError) -> ApiError {
    let (status, code) = match &err {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        DomainError::InvalidCategory(_) => (StatusCode::BAD_REQUEST, "INVALID_CATEGORY"),
        DomainError::UpstreamUnavailable(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_UNAVAILABLE")
        }
        DomainError::StoreFailure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_FAILURE"),
        DomainError::MalformedEntry(_) | DomainError::SerializationError(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    };
    if status.is_server_error() {
        tracing::error!(error = %err, code, "request failed");
    }
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: code.to_string(),
        }),
    )
}
