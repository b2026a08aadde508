use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use blogsmith::presentation::http::openapi::docs_router;
use serde_json::Value;
use tower::ServiceExt; // for oneshot

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn openapi_json_lists_the_public_routes() {
    let resp = docs_router().oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024)
        .await
        .unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    let paths = doc["paths"].as_object().expect("paths object");
    for path in [
        "/api/v1/articles",
        "/api/v1/articles/{slug}",
        "/api/v1/articles/{slug}/comments",
        "/api/v1/articles/{slug}/images",
        "/api/v1/comments/{slug}/replies",
        "/api/v1/categories",
        "/api/v1/users",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(doc["components"]["securitySchemes"]["basicAuth"].is_object());
}

#[tokio::test]
async fn root_redirects_to_swagger_ui() {
    let resp = docs_router().oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/docs");
}

#[tokio::test]
async fn redoc_page_is_served() {
    let resp = docs_router().oneshot(get("/redoc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
