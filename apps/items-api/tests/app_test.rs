//! End-to-end tests through the full application router: docs, health,
//! greeting, fallback and the nested items routes with all middleware.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use items_api::{AppState, Config, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app_with(config: Config) -> Router {
    build_router(&AppState::new(config)).unwrap()
}

fn app() -> Router {
    app_with(Config::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_root_greeting() {
    let (status, body) = send(app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Hello World!" }));
}

#[tokio::test]
async fn test_health_reports_package() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["name"], "items_api");
}

#[tokio::test]
async fn test_items_are_served_under_api_prefix() {
    let (status, body) = send(app(), get("/api/items")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(app(), get("/api/items/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Sample Item 2");
}

#[tokio::test]
async fn test_unseeded_store_starts_empty() {
    let config = Config {
        seed_items: false,
        ..Config::default()
    };
    let (status, body) = send(app_with(config), get("/api/items")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_missing_item_message() {
    let (status, body) = send(app(), get("/api/items/abc")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item not found");
}

#[tokio::test]
async fn test_unknown_route_uses_fallback() {
    let (status, body) = send(app(), get("/api/widgets")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_openapi_document_lists_item_paths() {
    let (status, body) = send(app(), get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/items"].is_object());
    assert!(body["paths"]["/api/items/{id}"].is_object());
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let request = Request::get("/api/items")
        .header("origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_greeting_and_health_carry_cors_headers() {
    for uri in ["/", "/health"] {
        let request = Request::get(uri)
            .header("origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*",
            "GET {uri}"
        );
    }
}

#[tokio::test]
async fn test_greeting_preflight_is_answered() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "GET")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("access-control-allow-methods"));
}

#[tokio::test]
async fn test_full_lifecycle_over_http() {
    let app = app();

    let create = Request::post("/api/items")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"A","description":"a"}"#))
        .unwrap();
    let (status, created) = send(app.clone(), create).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 3);

    let update = Request::put("/api/items/3")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"A2","description":""}"#))
        .unwrap();
    let (status, updated) = send(app.clone(), update).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "A2");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let delete = Request::delete("/api/items/3").body(Body::empty()).unwrap();
    let (status, deleted) = send(app.clone(), delete).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Item deleted successfully");
    assert_eq!(deleted["item"]["id"], 3);

    let (status, _) = send(app, get("/api/items/3")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
