// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{InMemoryFileStorage, PlainPasswordHasher, ScriptedDigits, SteppingClock};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode, header::CONTENT_TYPE};
use blogsmith::application::services::{ApplicationServices, Ports};
use blogsmith::infrastructure::{
    database, repositories::sqlite_repositories, util::DefaultSlugGenerator,
};
use blogsmith::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use headers::{Authorization, HeaderMapExt};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt as _;

pub const PASSWORD: &str = "Str0ng!Passw0rd";
pub const ADMIN: &str = "admin";

const BOUNDARY: &str = "blogsmith-test-boundary";
const DEFAULT_DIGITS: &[u8] = &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3];

/// Username/password pair sent as HTTP Basic credentials.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    pub const fn new(username: &'a str) -> Self {
        Self {
            username,
            password: PASSWORD,
        }
    }
}

pub const fn admin() -> Credentials<'static> {
    Credentials::new(ADMIN)
}

pub struct TestApp {
    pub router: Router,
    pub storage: Arc<InMemoryFileStorage>,
    pub pool: SqlitePool,
    pub services: Arc<ApplicationServices>,
}

pub async fn memory_pool() -> SqlitePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("apply migrations");
    pool
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_digits(DEFAULT_DIGITS).await
}

pub async fn spawn_app_with_digits(digits: &[u8]) -> TestApp {
    let pool = memory_pool().await;
    let storage = Arc::new(InMemoryFileStorage::new());

    let services = Arc::new(ApplicationServices::new(
        sqlite_repositories(&pool),
        Ports {
            password_hasher: Arc::new(PlainPasswordHasher),
            clock: Arc::new(SteppingClock::new()),
            slugger: Arc::new(DefaultSlugGenerator),
            digits: Arc::new(ScriptedDigits::new(digits)),
            storage: storage.clone(),
        },
    ));

    let state = HttpState {
        services: Arc::clone(&services),
        db_pool: pool.clone(),
    };

    TestApp {
        router: build_router_with_rate_limiter(state, false),
        storage,
        pool,
        services,
    }
}

/// Convenience wrapper bundling the router with per-request helpers.
impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router never fails");
        let status = response.status();
        let (parts, body_stream) = response.into_parts();
        let bytes = body::to_bytes(body_stream, 1024 * 1024)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, parts.headers, json)
    }

    pub async fn get(&self, uri: &str, creds: Option<Credentials<'_>>) -> (StatusCode, Value) {
        let (status, _, json) = self.send(json_request(Method::GET, uri, creds, None)).await;
        (status, json)
    }

    pub async fn post(
        &self,
        uri: &str,
        creds: Option<Credentials<'_>>,
        body: Value,
    ) -> (StatusCode, Value) {
        let (status, _, json) = self
            .send(json_request(Method::POST, uri, creds, Some(body)))
            .await;
        (status, json)
    }

    pub async fn put(&self, uri: &str, creds: Credentials<'_>, body: Value) -> (StatusCode, Value) {
        let (status, _, json) = self
            .send(json_request(Method::PUT, uri, Some(creds), Some(body)))
            .await;
        (status, json)
    }

    pub async fn patch(
        &self,
        uri: &str,
        creds: Credentials<'_>,
        body: Value,
    ) -> (StatusCode, Value) {
        let (status, _, json) = self
            .send(json_request(Method::PATCH, uri, Some(creds), Some(body)))
            .await;
        (status, json)
    }

    pub async fn delete(&self, uri: &str, creds: Credentials<'_>) -> StatusCode {
        let (status, _, _) = self
            .send(json_request(Method::DELETE, uri, Some(creds), None))
            .await;
        status
    }

    /// Registers the first account, which becomes the administrator.
    pub async fn bootstrap_admin(&self) {
        let (status, body) = self
            .post(
                "/api/v1/users",
                None,
                serde_json::json!({ "username": ADMIN, "password": PASSWORD }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "admin registration failed: {body}");
    }

    /// Registers an author account through the admin.
    pub async fn register_author(&self, username: &str) {
        let (status, body) = self
            .post(
                "/api/v1/users",
                Some(admin()),
                serde_json::json!({ "username": username, "password": PASSWORD, "role": "author" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "author registration failed: {body}");
    }

    /// Creates an article and returns its slug.
    pub async fn create_article(&self, creds: Credentials<'_>, body: Value) -> String {
        let (status, json) = self.post("/api/v1/articles", Some(creds), body).await;
        assert_eq!(status, StatusCode::CREATED, "article creation failed: {json}");
        json["slug"].as_str().expect("slug in response").to_string()
    }
}

pub fn json_request(
    method: Method,
    uri: &str,
    creds: Option<Credentials<'_>>,
    body: Option<Value>,
) -> Request<Body> {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .body(match &body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        })
        .expect("valid request");
    if body.is_some() {
        request
            .headers_mut()
            .insert(CONTENT_TYPE, "application/json".parse().unwrap());
    }
    if let Some(creds) = creds {
        request
            .headers_mut()
            .typed_insert(Authorization::basic(creds.username, creds.password));
    }
    request
}

/// One part of a multipart body.
pub enum Part<'a> {
    File {
        name: &'a str,
        file_name: &'a str,
        contents: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

pub fn multipart_request(
    method: Method,
    uri: &str,
    creds: Option<Credentials<'_>>,
    parts: &[Part<'_>],
) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::File {
                name,
                file_name,
                contents,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(contents);
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("valid request");
    if let Some(creds) = creds {
        request
            .headers_mut()
            .typed_insert(Authorization::basic(creds.username, creds.password));
    }
    request
}

/// Assert that a response body is an `ErrorResponse` with the expected status and reason.
pub fn assert_error_response(status: StatusCode, body: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    let err_field = body.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = body.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(
        Some(err_field),
        expected.canonical_reason(),
        "unexpected error field: {err_field}"
    );
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
