// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::RegisterUserCommand,
    dto::{UserDto, WhoAmIDto},
};
use crate::domain::user::Role;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    /// Ignored for the first account, which is always an admin.
    #[serde(default)]
    pub role: Option<Role>,
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered and author profile created.", body = UserDto),
        (status = 400, description = "Invalid username or weak password.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Credentials required once an admin exists.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Username taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        username: payload.username,
        password: payload.password,
        role: payload.role,
    };

    state
        .services
        .user_commands
        .register(actor.0.as_ref(), command)
        .await
        .into_http()
        .map(|user| (StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/api/v1/whoami",
    responses(
        (status = 200, description = "Current user with author profile.", body = WhoAmIDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn whoami(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<WhoAmIDto>> {
    state
        .services
        .user_queries
        .whoami(&user)
        .await
        .into_http()
        .map(Json)
}
