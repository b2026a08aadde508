// src/presentation/http/controllers/images.rs
use super::read_multipart;
use crate::application::{
    commands::images::{DeleteImageCommand, UpdateImageCommand, UploadImagesCommand},
    dto::ImageDto,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

const IMAGE_FIELD: &str = "image";
const CAPTION_FIELD: &str = "caption";

/// Multipart form accepted by the image upload endpoint.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ImageUploadForm {
    /// One or more files; each becomes its own image record.
    #[schema(value_type = Vec<String>, format = Binary)]
    pub image: Vec<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateImageRequest {
    pub caption: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{slug}/images",
    params(("slug" = String, Path, description = "Article slug")),
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Images stored.", body = [ImageDto]),
        (status = 400, description = "No files or malformed body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Images"
)]
pub async fn upload_images(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(article_slug): Path<String>,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<Vec<ImageDto>>)> {
    let upload = read_multipart(multipart, IMAGE_FIELD).await?;
    let caption = upload.text(CAPTION_FIELD).map(str::to_string);

    let command = UploadImagesCommand {
        article_slug,
        caption,
        files: upload.files,
    };

    state
        .services
        .image_commands
        .upload_images(&user, command)
        .await
        .into_http()
        .map(|images| (StatusCode::CREATED, Json(images)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{slug}/images",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 405, description = "Listing is not supported; images are returned with the article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Images"
)]
pub async fn list_images_not_allowed(Path(_slug): Path<String>) -> HttpError {
    HttpError::method_not_allowed("Only receives POST of image for an article")
}

#[utoipa::path(
    get,
    path = "/api/v1/images/{slug}",
    params(("slug" = String, Path, description = "Image slug")),
    responses(
        (status = 200, description = "Image metadata.", body = ImageDto),
        (status = 404, description = "Image not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Images"
)]
pub async fn get_image(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ImageDto>> {
    state
        .services
        .image_queries
        .get_image(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/images/{slug}",
    params(("slug" = String, Path, description = "Image slug")),
    request_body = UpdateImageRequest,
    responses(
        (status = 200, description = "Caption updated.", body = ImageDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Image not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Images"
)]
pub async fn update_image(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateImageRequest>,
) -> HttpResult<Json<ImageDto>> {
    state
        .services
        .image_commands
        .update_image(
            &user,
            UpdateImageCommand {
                slug,
                caption: payload.caption,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/images/{slug}",
    params(("slug" = String, Path, description = "Image slug")),
    responses(
        (status = 204, description = "Image record and stored file removed."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Image not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Images"
)]
pub async fn delete_image(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .image_commands
        .delete_image(&user, DeleteImageCommand { slug })
        .await
        .into_http()
        .map(|()| StatusCode::NO_CONTENT)
}
