//! Router-level tests driving the full middleware stack with `oneshot`.

use std::collections::HashSet;

use api_key_gateway::{KeyStore, app, db::create_pool};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
    response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn setup() -> KeyStore {
    let pool = create_pool("sqlite::memory:", 1).await.unwrap();
    let store = KeyStore::new(pool);
    store.initialize().await.unwrap();
    store
}

async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_key(uri: &str, key: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("api-key", key)
        .body(Body::empty())
        .unwrap()
}

async fn generate(router: &Router) -> String {
    let response = send(
        router,
        Request::builder()
            .method(Method::POST)
            .uri("/generate-api-key")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response).await["api_key"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn welcome_is_constant() {
    let router = app(setup().await, false);

    for _ in 0..3 {
        let response = send(&router, get("/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"Message": "Welcome"}));
    }
}

#[tokio::test]
async fn generate_returns_a_uuid_key() {
    let router = app(setup().await, false);

    let key = generate(&router).await;

    assert_eq!(key.len(), 36);
    assert!(uuid::Uuid::parse_str(&key).is_ok());
}

#[tokio::test]
async fn generate_rejects_get() {
    let router = app(setup().await, false);

    let response = send(&router, get("/generate-api-key")).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn issued_keys_are_distinct() {
    let router = app(setup().await, false);

    let mut keys = HashSet::new();
    for _ in 0..200 {
        keys.insert(generate(&router).await);
    }

    assert_eq!(keys.len(), 200);
}

#[tokio::test]
async fn valid_key_unlocks_secure_data() {
    let router = app(setup().await, false);
    let key = generate(&router).await;

    let response = send(&router, get_with_key("/secure-data", &key)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!("This is a secure message!"));
}

#[tokio::test]
async fn header_name_matches_case_insensitively() {
    let router = app(setup().await, false);
    let key = generate(&router).await;

    let response = send(
        &router,
        Request::builder()
            .uri("/secure-data")
            .header("API-KEY", key.as_str())
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_key_is_forbidden() {
    let router = app(setup().await, false);
    let key = generate(&router).await;
    let upper = key.to_uppercase();

    for presented in ["not-a-key", "", upper.as_str(), &key[..35]] {
        let response = send(&router, get_with_key("/secure-data", presented)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{presented:?}");
    }
}

#[tokio::test]
async fn missing_header_is_forbidden() {
    let router = app(setup().await, false);
    generate(&router).await;

    let response = send(&router, get("/secure-data")).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "invalid_api_key");
}

#[tokio::test]
async fn missing_header_is_not_looked_up_as_a_placeholder() {
    let store = setup().await;
    store.insert("None").await.unwrap();
    let router = app(store, false);

    let response = send(&router, get("/secure-data")).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn listing_returns_every_issued_key() {
    let router = app(setup().await, false);
    let issued: HashSet<String> = [
        generate(&router).await,
        generate(&router).await,
        generate(&router).await,
    ]
    .into_iter()
    .collect();

    let response = send(&router, get("/get-api-keys")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 3);
    let listed: HashSet<String> = records
        .iter()
        .map(|r| {
            assert!(r["id"].is_i64());
            r["api_key"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(listed, issued);
}

#[tokio::test]
async fn protected_listing_requires_a_key() {
    let router = app(setup().await, true);
    let key = generate(&router).await;

    let response = send(&router, get("/get-api-keys")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&router, get_with_key("/get-api-keys", &key)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn issue_then_list_scenario() {
    let store = setup().await;
    let router = app(store.clone(), false);
    assert!(store.list_all().await.unwrap().is_empty());

    let first = generate(&router).await;
    assert!(store.exists(&first).await.unwrap());

    let second = generate(&router).await;
    assert_ne!(first, second);
    assert_eq!(store.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn health_reports_connected_database() {
    let router = app(setup().await, false);

    let response = send(&router, get("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn store_failure_maps_to_internal_error() {
    let store = setup().await;
    let router = app(store.clone(), false);
    store.pool().close().await;

    let response = send(
        &router,
        Request::builder()
            .method(Method::POST)
            .uri("/generate-api-key")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"]["code"], "internal_error");

    let response = send(&router, get("/health")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_issues_on_file_database_all_succeed() {
    const REQUESTS: usize = 300;

    let dir = tempfile::TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("keys.db").display());
    let pool = create_pool(&url, 5).await.unwrap();
    let store = KeyStore::new(pool);
    store.initialize().await.unwrap();
    let router = app(store.clone(), false);

    let handles: Vec<_> = (0..REQUESTS)
        .map(|_| {
            let router = router.clone();
            tokio::spawn(async move {
                let request = Request::builder()
                    .method(Method::POST)
                    .uri("/generate-api-key")
                    .body(Body::empty())
                    .unwrap();
                router.oneshot(request).await.unwrap().status()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let records = store.list_all().await.unwrap();
    assert_eq!(records.len(), REQUESTS);
    let distinct: HashSet<&str> = records.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(distinct.len(), REQUESTS);

    store.pool().close().await;
}
