// src/presentation/http/routes.rs
use crate::presentation::http::middleware::rate_limit::rate_limit_layer;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, authors, categories, comments, images, users},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    Json,
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Router with CORS open to any origin.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit_enabled: bool) -> Router {
    build_router_with_options(state, rate_limit_enabled, &[])
}

/// Full router. An empty origin list, or one containing `*`, allows any origin.
pub fn build_router_with_options(
    state: HttpState,
    rate_limit_enabled: bool,
    allowed_origins: &[String],
) -> Router {
    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api_routes());

    let router = match rate_limit_layer() {
        Some(limiter) if rate_limit_enabled => router.layer(limiter),
        _ => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn api_routes() -> Router {
    Router::new()
        .route("/api/v1/users", post(users::register))
        .route("/api/v1/whoami", get(users::whoami))
        .route(
            "/api/v1/authors/{username}",
            get(authors::get_author)
                .patch(authors::update_author)
                .delete(authors::delete_author),
        )
        .route(
            "/api/v1/authors/{username}/picture",
            put(authors::replace_picture),
        )
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/{slug}",
            get(articles::get_article)
                .put(articles::update_article)
                .patch(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/api/v1/articles/{slug}/like", post(articles::toggle_like))
        .route(
            "/api/v1/articles/{slug}/comments",
            post(comments::create_comment),
        )
        .route(
            "/api/v1/articles/{slug}/images",
            get(images::list_images_not_allowed).post(images::upload_images),
        )
        .route(
            "/api/v1/comments/{slug}",
            get(comments::get_comment)
                .put(comments::update_comment)
                .patch(comments::update_comment)
                .delete(comments::delete_comment),
        )
        .route(
            "/api/v1/comments/{slug}/replies",
            post(comments::create_reply),
        )
        .route(
            "/api/v1/replies/{slug}",
            get(comments::get_reply)
                .put(comments::update_reply)
                .patch(comments::update_reply)
                .delete(comments::delete_reply),
        )
        .route(
            "/api/v1/images/{slug}",
            get(images::get_image)
                .patch(images::update_image)
                .delete(images::delete_image),
        )
        .route(
            "/api/v1/categories",
            get(categories::list_categories).post(categories::create_category),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let allow_origin = if origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are reachable.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 503, description = "Database did not answer.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security([]),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> (StatusCode, Json<StatusResponse>) {
    match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "ok".into(),
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "health check query failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusResponse {
                    status: "unavailable".into(),
                }),
            )
        }
    }
}
