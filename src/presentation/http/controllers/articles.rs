// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, ToggleLikeCommand, UpdateArticleCommand,
    },
    dto::{ArticleDetailDto, ArticleDto, LikeOutcome},
    queries::articles::{GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::{ArticleListResponse, MessageResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u32>,
    /// Items per page, capped at 100.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Matches article content, title or author username.
    #[serde(default)]
    pub search: Option<String>,
    /// `created_at`, `updated_at` or `title`, prefixed with `-` for descending.
    #[serde(default)]
    pub ordering: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Category slugs.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub content: Option<String>,
    pub title: Option<String>,
    pub categories: Option<Vec<String>>,
    pub featured: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Page of articles.", body = ArticleListResponse),
        (status = 400, description = "Invalid ordering.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            page: params.page,
            page_size: params.page_size,
            search: params.search,
            ordering: params.ordering,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article with comments and images.", body = ArticleDetailDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        content: payload.content,
        title: payload.title,
        categories: payload.categories,
        slug: payload.slug,
        featured: payload.featured,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated. The slug never changes.", body = ArticleDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        slug,
        content: payload.content,
        title: payload.title,
        categories: payload.categories,
        featured: payload.featured,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 204, description = "Article deleted along with its comments, likes and images."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { slug })
        .await
        .into_http()
        .map(|()| StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{slug}/like",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Like is successful", body = MessageResponse),
        (status = 201, description = "Unlike successful", body = MessageResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn toggle_like(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<(StatusCode, Json<MessageResponse>)> {
    let outcome = state
        .services
        .article_commands
        .toggle_like(&user, ToggleLikeCommand { slug })
        .await
        .into_http()?;

    let status = match outcome {
        LikeOutcome::Liked => StatusCode::OK,
        LikeOutcome::Unliked => StatusCode::CREATED,
    };
    Ok((status, Json(MessageResponse::new(outcome.message()))))
}
