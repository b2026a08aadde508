// tests/e2e_categories.rs
use axum::http::StatusCode;
use serde_json::json;

mod support;

use support::{Credentials, admin, assert_error_response, spawn_app};

#[tokio::test]
async fn category_slugs_follow_the_name_seed() {
    let app = spawn_app().await;
    app.bootstrap_admin().await;

    let (status, first) = app
        .post(
            "/api/v1/categories",
            Some(admin()),
            json!({ "name": "Hello, World!!! Extra" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["slug"], "hello-wor");
    assert_eq!(first["name"], "Hello, World!!! Extra");

    let (status, second) = app
        .post(
            "/api/v1/categories",
            Some(admin()),
            json!({ "name": "Hello, World!!! Extra" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let slug = second["slug"].as_str().unwrap();
    let digit = slug.strip_prefix("hello-wor-").expect("suffixed slug");
    assert!(digit.len() == 1 && digit.chars().all(|c| c.is_ascii_digit()));

    let (status, listed) = app.get("/api/v1/categories", Some(admin())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn explicit_category_slug_must_be_free() {
    let app = spawn_app().await;
    app.bootstrap_admin().await;

    let (status, body) = app
        .post(
            "/api/v1/categories",
            Some(admin()),
            json!({ "name": "Systems", "slug": "sys" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["slug"], "sys");

    let (status, body) = app
        .post(
            "/api/v1/categories",
            Some(admin()),
            json!({ "name": "Synths", "slug": "sys" }),
        )
        .await;
    assert_error_response(status, &body, StatusCode::CONFLICT);
}

#[tokio::test]
async fn categories_are_admin_only() {
    let app = spawn_app().await;
    app.bootstrap_admin().await;
    app.register_author("writer").await;
    let writer = Credentials::new("writer");

    let (status, body) = app.get("/api/v1/categories", Some(writer)).await;
    assert_error_response(status, &body, StatusCode::FORBIDDEN);

    let (status, body) = app
        .post("/api/v1/categories", Some(writer), json!({ "name": "Mine" }))
        .await;
    assert_error_response(status, &body, StatusCode::FORBIDDEN);

    let (status, body) = app.get("/api/v1/categories", None).await;
    assert_error_response(status, &body, StatusCode::UNAUTHORIZED);
}
