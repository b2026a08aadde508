// tests/e2e_users.rs
use axum::http::{Method, StatusCode, header::WWW_AUTHENTICATE};
use serde_json::json;

mod support;

use support::{Credentials, PASSWORD, admin, assert_error_response, json_request, spawn_app};

#[tokio::test]
async fn health_reports_ok() {
    let app = spawn_app().await;
    let (status, body) = app.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn first_registration_becomes_admin_with_author_profile() {
    let app = spawn_app().await;

    let (status, body) = app
        .post(
            "/api/v1/users",
            None,
            json!({ "username": "founder", "password": PASSWORD, "role": "author" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["role"], "admin");

    let (status, whoami) = app
        .get("/api/v1/whoami", Some(Credentials::new("founder")))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(whoami["user"]["username"], "founder");
    assert_eq!(whoami["author"]["username"], "founder");
    assert_eq!(
        whoami["author"]["picture_url"],
        "http://media.test/default.png"
    );
    let caps = whoami["capabilities"].as_array().unwrap();
    assert!(caps.iter().any(|c| c["resource"] == "categories" && c["action"] == "manage"));
}

#[tokio::test]
async fn registering_creates_exactly_one_profile() {
    let app = spawn_app().await;
    app.bootstrap_admin().await;
    app.register_author("writer").await;

    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM author_profiles p JOIN users u ON u.id = p.user_id WHERE u.username = ?",
    )
    .bind("writer")
    .fetch_one(&app.pool)
    .await
    .unwrap();
    assert_eq!(count, 1);

    let (status, profile) = app.get("/api/v1/authors/writer", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["username"], "writer");
}

#[tokio::test]
async fn whoami_without_credentials_is_challenged() {
    let app = spawn_app().await;
    let (status, headers, body) = app
        .send(json_request(Method::GET, "/api/v1/whoami", None, None))
        .await;
    assert_error_response(status, &body, StatusCode::UNAUTHORIZED);
    let challenge = headers
        .get(WWW_AUTHENTICATE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(challenge.starts_with("Basic"), "challenge: {challenge}");
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let app = spawn_app().await;
    app.bootstrap_admin().await;

    let creds = Credentials {
        username: "admin",
        password: "Wr0ng!Password",
    };
    let (status, body) = app.get("/api/v1/whoami", Some(creds)).await;
    assert_error_response(status, &body, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn later_registrations_need_users_create() {
    let app = spawn_app().await;
    app.bootstrap_admin().await;

    let (status, body) = app
        .post(
            "/api/v1/users",
            None,
            json!({ "username": "drifter", "password": PASSWORD }),
        )
        .await;
    assert_error_response(status, &body, StatusCode::UNAUTHORIZED);

    app.register_author("writer").await;
    let (status, body) = app
        .post(
            "/api/v1/users",
            Some(Credentials::new("writer")),
            json!({ "username": "friend", "password": PASSWORD }),
        )
        .await;
    assert_error_response(status, &body, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let app = spawn_app().await;
    app.bootstrap_admin().await;
    app.register_author("writer").await;

    let (status, body) = app
        .post(
            "/api/v1/users",
            Some(admin()),
            json!({ "username": "writer", "password": PASSWORD }),
        )
        .await;
    assert_error_response(status, &body, StatusCode::CONFLICT);
}

#[tokio::test]
async fn weak_password_is_a_validation_error() {
    let app = spawn_app().await;
    let (status, body) = app
        .post(
            "/api/v1/users",
            None,
            json!({ "username": "founder", "password": "short" }),
        )
        .await;
    assert_error_response(status, &body, StatusCode::BAD_REQUEST);
}
