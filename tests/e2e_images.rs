// tests/e2e_images.rs
use axum::http::{Method, StatusCode};

mod support;

use support::{
    ArticlePayload, Credentials, Part, TestApp, admin, assert_error_response, multipart_request,
    spawn_app, spawn_app_with_digits,
};

const WRITER: Credentials<'static> = Credentials::new("writer");
const RIVAL: Credentials<'static> = Credentials::new("rival");

async fn prepare(app: &TestApp) -> String {
    app.bootstrap_admin().await;
    app.register_author("writer").await;
    app.register_author("rival").await;
    app.create_article(WRITER, ArticlePayload::new("Photo essay").build())
        .await
}

fn image_part<'a>(file_name: &'a str) -> Part<'a> {
    Part::File {
        name: "image",
        file_name,
        contents: b"\x89PNG fake image bytes",
    }
}

fn article_files(app: &TestApp) -> Vec<String> {
    app.storage
        .keys()
        .into_iter()
        .filter(|key| key.starts_with("article/"))
        .collect()
}

#[tokio::test]
async fn listing_images_is_not_allowed() {
    let app = spawn_app().await;
    let article = prepare(&app).await;

    let (status, body) = app
        .get(&format!("/api/v1/articles/{article}/images"), None)
        .await;
    assert_error_response(status, &body, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "Only receives POST of image for an article");
}

#[tokio::test]
async fn each_uploaded_file_becomes_an_image() {
    let app = spawn_app().await;
    let article = prepare(&app).await;

    let request = multipart_request(
        Method::POST,
        &format!("/api/v1/articles/{article}/images"),
        Some(WRITER),
        &[
            image_part("one.png"),
            image_part("two.PNG"),
            Part::Text {
                name: "caption",
                value: "Sunset",
            },
        ],
    );
    let (status, _, body) = app.send(request).await;
    assert_eq!(status, StatusCode::CREATED, "upload failed: {body}");

    let images = body.as_array().unwrap();
    assert_eq!(images.len(), 2);
    assert_ne!(images[0]["slug"], images[1]["slug"]);
    for image in images {
        assert_eq!(image["caption"], "Sunset");
        let url = image["image_url"].as_str().unwrap();
        assert!(url.starts_with("http://media.test/article/2024/05/"), "url: {url}");
        assert!(url.ends_with(".png"), "url: {url}");
    }
    assert_eq!(article_files(&app).len(), 2);

    let (_, detail) = app.get(&format!("/api/v1/articles/{article}"), None).await;
    let listed = detail["images"].as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["slug"], images[1]["slug"]);
}

#[tokio::test]
async fn colliding_digit_extends_the_image_slug() {
    let app = spawn_app_with_digits(&[7, 7, 2]).await;
    let article = prepare(&app).await;
    let uri = format!("/api/v1/articles/{article}/images");

    let (status, _, first) = app
        .send(multipart_request(Method::POST, &uri, Some(WRITER), &[image_part("a.jpg")]))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first[0]["slug"], "7");

    let (status, _, second) = app
        .send(multipart_request(Method::POST, &uri, Some(WRITER), &[image_part("b.jpg")]))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second[0]["slug"], "7-2");
}

#[tokio::test]
async fn upload_requires_article_ownership() {
    let app = spawn_app().await;
    let article = prepare(&app).await;
    let uri = format!("/api/v1/articles/{article}/images");

    let (status, _, body) = app
        .send(multipart_request(Method::POST, &uri, Some(RIVAL), &[image_part("x.png")]))
        .await;
    assert_error_response(status, &body, StatusCode::FORBIDDEN);
    assert!(article_files(&app).is_empty());

    let (status, _, _) = app
        .send(multipart_request(Method::POST, &uri, Some(admin()), &[image_part("x.png")]))
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn upload_without_files_is_rejected() {
    let app = spawn_app().await;
    let article = prepare(&app).await;

    let (status, _, body) = app
        .send(multipart_request(
            Method::POST,
            &format!("/api/v1/articles/{article}/images"),
            Some(WRITER),
            &[Part::Text {
                name: "caption",
                value: "Nothing attached",
            }],
        ))
        .await;
    assert_error_response(status, &body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn caption_update_and_delete_remove_the_file() {
    let app = spawn_app().await;
    let article = prepare(&app).await;

    let (_, _, uploaded) = app
        .send(multipart_request(
            Method::POST,
            &format!("/api/v1/articles/{article}/images"),
            Some(WRITER),
            &[image_part("keep.gif")],
        ))
        .await;
    let slug = uploaded[0]["slug"].as_str().unwrap().to_string();
    let uri = format!("/api/v1/images/{slug}");
    let stored = article_files(&app);
    assert_eq!(stored.len(), 1);

    let (status, body) = app
        .patch(&uri, RIVAL, serde_json::json!({ "caption": "Mine now" }))
        .await;
    assert_error_response(status, &body, StatusCode::FORBIDDEN);

    let (status, body) = app
        .patch(&uri, WRITER, serde_json::json!({ "caption": "Golden hour" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["caption"], "Golden hour");
    assert_eq!(body["slug"], slug);

    let (status, fetched) = app.get(&uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["caption"], "Golden hour");

    assert_eq!(app.delete(&uri, WRITER).await, StatusCode::NO_CONTENT);
    assert!(!app.storage.contains(&stored[0]));
    let (status, body) = app.get(&uri, None).await;
    assert_error_response(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_the_article_removes_image_files() {
    let app = spawn_app().await;
    let article = prepare(&app).await;

    let (status, _, _) = app
        .send(multipart_request(
            Method::POST,
            &format!("/api/v1/articles/{article}/images"),
            Some(WRITER),
            &[image_part("a.png"), image_part("b.png")],
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(article_files(&app).len(), 2);

    assert_eq!(
        app.delete(&format!("/api/v1/articles/{article}"), WRITER).await,
        StatusCode::NO_CONTENT
    );
    assert!(article_files(&app).is_empty());
}
