// src/presentation/http/controllers/authors.rs
use super::read_multipart;
use crate::application::{
    commands::authors::{DeleteAuthorCommand, ReplacePictureCommand, UpdateAuthorCommand},
    dto::AuthorProfileDto,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

const PICTURE_FIELD: &str = "picture";

/// Distinguishes an absent field from an explicit `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAuthorRequest {
    /// `null` clears the bio; omitting the field leaves it unchanged.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub bio: Option<Option<String>>,
}

/// Multipart form accepted by the picture endpoint.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct PictureUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub picture: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/authors/{username}",
    params(("username" = String, Path, description = "Author username")),
    responses(
        (status = 200, description = "Public author profile.", body = AuthorProfileDto),
        (status = 404, description = "Author not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Authors"
)]
pub async fn get_author(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
) -> HttpResult<Json<AuthorProfileDto>> {
    state
        .services
        .user_queries
        .get_author(&username)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/authors/{username}",
    params(("username" = String, Path, description = "Author username")),
    request_body = UpdateAuthorRequest,
    responses(
        (status = 200, description = "Profile updated.", body = AuthorProfileDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Author not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn update_author(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(username): Path<String>,
    Json(payload): Json<UpdateAuthorRequest>,
) -> HttpResult<Json<AuthorProfileDto>> {
    state
        .services
        .author_commands
        .update_author(
            &user,
            UpdateAuthorCommand {
                username,
                bio: payload.bio,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/authors/{username}/picture",
    params(("username" = String, Path, description = "Author username")),
    request_body(content = PictureUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Picture replaced.", body = AuthorProfileDto),
        (status = 400, description = "Missing picture.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Author not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn replace_picture(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(username): Path<String>,
    multipart: Multipart,
) -> HttpResult<Json<AuthorProfileDto>> {
    let upload = read_multipart(multipart, PICTURE_FIELD).await?;
    let file = upload
        .files
        .into_iter()
        .next()
        .ok_or_else(|| HttpError::bad_request("a `picture` file is required"))?;

    state
        .services
        .author_commands
        .replace_picture(&user, ReplacePictureCommand { username, file })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/authors/{username}",
    params(("username" = String, Path, description = "Author username")),
    responses(
        (status = 204, description = "Profile and uploaded picture removed."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Author not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn delete_author(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .author_commands
        .delete_author(&user, DeleteAuthorCommand { username })
        .await
        .into_http()
        .map(|()| StatusCode::NO_CONTENT)
}
