// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{
        CreateCommentCommand, CreateReplyCommand, DeleteCommentCommand, DeleteReplyCommand,
        UpdateCommentCommand, UpdateReplyCommand,
    },
    dto::{CommentDto, NestedCommentDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Body shared by comment and reply create/update requests.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentBodyRequest {
    pub body: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{slug}/comments",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = CommentBodyRequest,
    responses(
        (status = 201, description = "Comment created.", body = CommentDto),
        (status = 400, description = "Empty body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 406, description = "Article does not exist.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(article_slug): Path<String>,
    Json(payload): Json<CommentBodyRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = CreateCommentCommand {
        article_slug,
        body: payload.body,
    };

    state
        .services
        .comment_commands
        .create_comment(&user, command)
        .await
        .into_http()
        .map(|comment| (StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    get,
    path = "/api/v1/comments/{slug}",
    params(("slug" = String, Path, description = "Comment slug")),
    responses(
        (status = 200, description = "Comment with its replies.", body = CommentDto),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Comments"
)]
pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_queries
        .get_comment(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/comments/{slug}",
    params(("slug" = String, Path, description = "Comment slug")),
    request_body = CommentBodyRequest,
    responses(
        (status = 200, description = "Comment updated.", body = CommentDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<CommentBodyRequest>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .update_comment(
            &user,
            UpdateCommentCommand {
                slug,
                body: payload.body,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{slug}",
    params(("slug" = String, Path, description = "Comment slug")),
    responses(
        (status = 204, description = "Comment and its replies deleted."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(&user, DeleteCommentCommand { slug })
        .await
        .into_http()
        .map(|()| StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/comments/{slug}/replies",
    params(("slug" = String, Path, description = "Parent comment slug")),
    request_body = CommentBodyRequest,
    responses(
        (status = 201, description = "Reply created.", body = NestedCommentDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Parent comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_reply(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(comment_slug): Path<String>,
    Json(payload): Json<CommentBodyRequest>,
) -> HttpResult<(StatusCode, Json<NestedCommentDto>)> {
    let command = CreateReplyCommand {
        comment_slug,
        body: payload.body,
    };

    state
        .services
        .comment_commands
        .create_reply(&user, command)
        .await
        .into_http()
        .map(|reply| (StatusCode::CREATED, Json(reply)))
}

#[utoipa::path(
    get,
    path = "/api/v1/replies/{slug}",
    params(("slug" = String, Path, description = "Reply slug")),
    responses(
        (status = 200, description = "Nested comment.", body = NestedCommentDto),
        (status = 404, description = "Reply not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Comments"
)]
pub async fn get_reply(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<NestedCommentDto>> {
    state
        .services
        .comment_queries
        .get_reply(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/replies/{slug}",
    params(("slug" = String, Path, description = "Reply slug")),
    request_body = CommentBodyRequest,
    responses(
        (status = 200, description = "Reply updated.", body = NestedCommentDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Reply not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn update_reply(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<CommentBodyRequest>,
) -> HttpResult<Json<NestedCommentDto>> {
    state
        .services
        .comment_commands
        .update_reply(
            &user,
            UpdateReplyCommand {
                slug,
                body: payload.body,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/replies/{slug}",
    params(("slug" = String, Path, description = "Reply slug")),
    responses(
        (status = 204, description = "Reply deleted."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Reply not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_reply(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_reply(&user, DeleteReplyCommand { slug })
        .await
        .into_http()
        .map(|()| StatusCode::NO_CONTENT)
}
