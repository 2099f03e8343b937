//! End-to-end tests for the HTTP API in both serving modes.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{Duration, Utc};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use better_papers::adapters::arxiv::ArxivClient;
use better_papers::adapters::http::{PapersHttpConfig, PapersHttpServer};
use better_papers::adapters::store::ObjectStorePaperCache;
use better_papers::domain::models::{Category, CATALOG};
use better_papers::domain::ports::PaperCache;
use better_papers::services::PaperService;
use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::{ObjectStore, PutPayload};

use common::{atom_feed, feed_config, get_json, paper, TestEntry, FEED_PATH};

fn live_server(server_uri: &str) -> PapersHttpServer {
    let client = ArxivClient::new(&feed_config(server_uri)).unwrap();
    PapersHttpServer::live(
        PaperService::new(Arc::new(client)),
        PapersHttpConfig::default(),
    )
}

async fn seeded_cache() -> Arc<dyn PaperCache> {
    let cache = ObjectStorePaperCache::new(Arc::new(InMemory::new()));
    let now = Utc::now();
    cache
        .put(
            &Category::parse("cs.LG").unwrap(),
            &[paper("Sparse attention", now), paper("Tiny models", now - Duration::days(3))],
        )
        .await
        .unwrap();
    cache
        .put(&Category::parse("math.CO").unwrap(), &[])
        .await
        .unwrap();
    Arc::new(cache)
}

#[tokio::test]
async fn test_live_returns_only_last_week() {
    common::setup_test_logging();
    let mock_server = MockServer::start().await;
    let now = Utc::now();
    let fresh = TestEntry::days_old("2501.00001v1", "Fresh result", now, 2);
    let stale = TestEntry::days_old("2412.00002v2", "Stale result", now, 10);

    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .and(query_param("search_query", "cat:cs.LG"))
        .and(query_param("sortBy", "submittedDate"))
        .and(query_param("sortOrder", "descending"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(atom_feed(&[fresh.clone(), stale]))
                .insert_header("content-type", "application/atom+xml"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let router = live_server(&mock_server.uri()).build_router();
    let (status, body) = get_json(router, "/papers/cs.LG").await;

    assert_eq!(status, StatusCode::OK);
    let papers = body.as_array().expect("live response is a bare array");
    assert_eq!(papers.len(), 1);
    assert_eq!(
        papers[0],
        serde_json::to_value(fresh.expected_record()).unwrap()
    );
    assert_eq!(papers[0]["authors"][1], "Alan Turing");
}

#[tokio::test]
async fn test_live_empty_feed_is_empty_array() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(atom_feed(&[])))
        .mount(&mock_server)
        .await;

    let router = live_server(&mock_server.uri()).build_router();
    let (status, body) = get_json(router, "/papers/math.CO").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_live_upstream_error_is_500() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let router = live_server(&mock_server.uri()).build_router();
    let (status, body) = get_json(router, "/papers/cs.AI").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "UPSTREAM_UNAVAILABLE");
}

#[tokio::test]
async fn test_live_unparseable_feed_is_500() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let router = live_server(&mock_server.uri()).build_router();
    let (status, _) = get_json(router, "/papers/cs.AI").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_invalid_category_is_400_without_upstream_call() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(atom_feed(&[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let router = live_server(&mock_server.uri()).build_router();
    let (status, body) = get_json(router, "/papers/cs%20LG").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_CATEGORY");
}

#[tokio::test]
async fn test_live_categories_lists_catalog() {
    let router = live_server("http://127.0.0.1:9").build_router();
    let (status, body) = get_json(router, "/papers/categories").await;

    assert_eq!(status, StatusCode::OK);
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), CATALOG.len());
    assert_eq!(categories[0], "cs.LG");
}

#[tokio::test]
async fn test_cached_returns_stored_document() {
    let router = PapersHttpServer::cached(seeded_cache().await, PapersHttpConfig::default())
        .build_router();
    let (status, body) = get_json(router, "/papers/cs.LG").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "cs.LG");
    let papers = body["papers"].as_array().unwrap();
    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0]["title"], "Sparse attention");
    assert_eq!(papers[1]["title"], "Tiny models");
}

#[tokio::test]
async fn test_cached_empty_document_is_200() {
    let router = PapersHttpServer::cached(seeded_cache().await, PapersHttpConfig::default())
        .build_router();
    let (status, body) = get_json(router, "/papers/math.CO").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["papers"], serde_json::json!([]));
}

#[tokio::test]
async fn test_cached_missing_category_is_404() {
    let router = PapersHttpServer::cached(seeded_cache().await, PapersHttpConfig::default())
        .build_router();
    let (status, body) = get_json(router, "/papers/cs.CV").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_cached_document_is_decoded_not_passed_through() {
    let store = Arc::new(InMemory::new());
    store
        .put(
            &Path::from("cs.NE.json"),
            PutPayload::from_static(
                br#"[{"title":"Spiking nets","authors":["A. Author"],"summary":"s","published":"2025-01-15T10:00:00+02:00","link":"http://arxiv.org/abs/1"}]"#,
            ),
        )
        .await
        .unwrap();
    store
        .put(
            &Path::from("cs.RO.json"),
            PutPayload::from_static(br#"[{"title":"Missing everything else"}]"#),
        )
        .await
        .unwrap();
    let cache: Arc<dyn PaperCache> = Arc::new(ObjectStorePaperCache::new(store));
    let router =
        PapersHttpServer::cached(cache, PapersHttpConfig::default()).build_router();

    let (status, body) = get_json(router.clone(), "/papers/cs.NE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["papers"][0]["published"], "2025-01-15T08:00:00Z");

    let (status, body) = get_json(router, "/papers/cs.RO").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "STORE_FAILURE");
}

#[tokio::test]
async fn test_cached_categories_lists_stored_documents() {
    let router = PapersHttpServer::cached(seeded_cache().await, PapersHttpConfig::default())
        .build_router();
    let (status, body) = get_json(router, "/papers/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "categories": ["cs.LG", "math.CO"] }));
}

#[tokio::test]
async fn test_root_health_and_catalog() {
    let cache = seeded_cache().await;

    let router = PapersHttpServer::cached(cache.clone(), PapersHttpConfig::default())
        .build_router();
    let (status, body) = get_json(router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to Better Papers API!");

    let router = PapersHttpServer::cached(cache.clone(), PapersHttpConfig::default())
        .build_router();
    let (status, body) = get_json(router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::Value::String("OK".to_string()));

    let router = PapersHttpServer::cached(cache, PapersHttpConfig::default()).build_router();
    let (status, body) = get_json(router, "/catalog").await;
    assert_eq!(status, StatusCode::OK);
    let catalog = body.as_array().unwrap();
    assert_eq!(catalog.len(), CATALOG.len());
    assert_eq!(catalog[0]["code"], "cs.LG");
    assert_eq!(catalog[0]["field"], "Computer Science");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let router = PapersHttpServer::cached(seeded_cache().await, PapersHttpConfig::default())
        .build_router();
    let response = router
        .oneshot(
            Request::builder()
                .uri("/papers/cs.LG")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_disabled() {
    let config = PapersHttpConfig {
        enable_cors: false,
        ..PapersHttpConfig::default()
    };
    let router = PapersHttpServer::cached(seeded_cache().await, config).build_router();
    let response = router
        .oneshot(
            Request::builder()
                .uri("/papers/cs.LG")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
