// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleSummaryDto, Page};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Plain confirmation body, e.g. for like toggling.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleSummaryDto>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub has_next: bool,
}

impl From<Page<ArticleSummaryDto>> for ArticleListResponse {
    fn from(page: Page<ArticleSummaryDto>) -> Self {
        Self {
            items: page.items,
            page: page.page,
            page_size: page.page_size,
            total: page.total,
            has_next: page.has_next,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::register,
        crate::presentation::http::controllers::users::whoami,
        crate::presentation::http::controllers::authors::get_author,
        crate::presentation::http::controllers::authors::update_author,
        crate::presentation::http::controllers::authors::replace_picture,
        crate::presentation::http::controllers::authors::delete_author,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::toggle_like,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::get_comment,
        crate::presentation::http::controllers::comments::update_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::comments::create_reply,
        crate::presentation::http::controllers::comments::get_reply,
        crate::presentation::http::controllers::comments::update_reply,
        crate::presentation::http::controllers::comments::delete_reply,
        crate::presentation::http::controllers::images::upload_images,
        crate::presentation::http::controllers::images::list_images_not_allowed,
        crate::presentation::http::controllers::images::get_image,
        crate::presentation::http::controllers::images::update_image,
        crate::presentation::http::controllers::images::delete_image,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::create_category,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            MessageResponse,
            ArticleListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::users::RegisterRequest,
            crate::presentation::http::controllers::authors::UpdateAuthorRequest,
            crate::presentation::http::controllers::authors::PictureUploadForm,
            crate::presentation::http::controllers::articles::ArticleListParams,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::comments::CommentBodyRequest,
            crate::presentation::http::controllers::images::ImageUploadForm,
            crate::presentation::http::controllers::images::UpdateImageRequest,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::application::dto::UserDto,
            crate::application::dto::WhoAmIDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::AuthorProfileDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::ArticleDetailDto,
            crate::application::dto::CommentDto,
            crate::application::dto::NestedCommentDto,
            crate::application::dto::ImageDto,
            crate::application::dto::CategoryDto,
            crate::domain::user::Role
        )
    ),
    tags(
        (name = "Users", description = "Registration and identity"),
        (name = "Authors", description = "Public author profiles"),
        (name = "Articles", description = "Articles, likes and listing"),
        (name = "Comments", description = "Comments and nested replies"),
        (name = "Images", description = "Article images"),
        (name = "Categories", description = "Category management"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("basicAuth" = [])),
    info(
        title = "Blogsmith API",
        description = "Blogging backend with slugged articles, comments and images",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "basicAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        );

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if !urls.iter().any(|url| url == "http://localhost:8080") {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// `/docs` (Swagger UI, which also serves `/openapi.json`) and `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the OpenAPI document to `OPENAPI_SNAPSHOT_PATH` and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_declares_basic_auth() {
        let doc = ApiDoc::openapi();
        let schemes = doc
            .components
            .as_ref()
            .map(|components| components.security_schemes.clone())
            .unwrap_or_default();
        assert!(schemes.contains_key("basicAuth"));
    }

    #[test]
    fn document_lists_slug_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/articles/{slug}"));
        assert!(doc.paths.paths.contains_key("/api/v1/replies/{slug}"));
    }
}
