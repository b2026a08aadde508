// tests/e2e_comments.rs
use axum::http::StatusCode;
use serde_json::json;

mod support;

use support::{ArticlePayload, Credentials, TestApp, admin, assert_error_response, spawn_app};

const WRITER: Credentials<'static> = Credentials::new("writer");
const READER: Credentials<'static> = Credentials::new("reader");

async fn app_with_article() -> (TestApp, String) {
    let app = spawn_app().await;
    app.bootstrap_admin().await;
    app.register_author("writer").await;
    app.register_author("reader").await;
    let slug = app
        .create_article(WRITER, ArticlePayload::new("Discussion starter").build())
        .await;
    (app, slug)
}

async fn comment(app: &TestApp, creds: Credentials<'_>, article: &str, body: &str) -> String {
    let (status, json) = app
        .post(
            &format!("/api/v1/articles/{article}/comments"),
            Some(creds),
            json!({ "body": body }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "comment failed: {json}");
    json["slug"].as_str().unwrap().to_string()
}

async fn reply(app: &TestApp, creds: Credentials<'_>, parent: &str, body: &str) -> String {
    let (status, json) = app
        .post(
            &format!("/api/v1/comments/{parent}/replies"),
            Some(creds),
            json!({ "body": body }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "reply failed: {json}");
    json["slug"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn comment_on_missing_article_is_not_acceptable() {
    let (app, _) = app_with_article().await;
    let (status, body) = app
        .post(
            "/api/v1/articles/ghost/comments",
            Some(READER),
            json!({ "body": "Anyone here?" }),
        )
        .await;
    assert_error_response(status, &body, StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn reply_to_missing_comment_is_not_found() {
    let (app, _) = app_with_article().await;
    let (status, body) = app
        .post(
            "/api/v1/comments/ghost/replies",
            Some(READER),
            json!({ "body": "Hello?" }),
        )
        .await;
    assert_error_response(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn comment_representation_carries_links_and_author() {
    let (app, article) = app_with_article().await;
    let (status, created) = app
        .post(
            &format!("/api/v1/articles/{article}/comments"),
            Some(READER),
            json!({ "body": "Great read, thanks" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["slug"], "great-read");
    assert_eq!(created["user_name"], "reader");
    assert_eq!(created["user_image"], "http://media.test/default.png");
    assert_eq!(created["update_url"], "/api/v1/comments/great-read");
    assert_eq!(created["add_reply_url"], "/api/v1/comments/great-read/replies");
    assert_eq!(created["replies"], json!([]));
}

#[tokio::test]
async fn article_detail_nests_replies_newest_first() {
    let (app, article) = app_with_article().await;
    let older = comment(&app, READER, &article, "First thoughts").await;
    let newer = comment(&app, WRITER, &article, "Author response").await;
    let r1 = reply(&app, WRITER, &older, "Thanks a lot").await;
    let r2 = reply(&app, READER, &older, "You are welcome").await;

    let (status, detail) = app.get(&format!("/api/v1/articles/{article}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let comments = detail["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["slug"], newer);
    assert_eq!(comments[1]["slug"], older);

    let replies = comments[1]["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["slug"], r2);
    assert_eq!(replies[1]["slug"], r1);
    assert_eq!(replies[0]["update_url"], format!("/api/v1/replies/{r2}"));

    let (status, single) = app.get(&format!("/api/v1/comments/{older}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(single["replies"].as_array().unwrap().len(), 2);

    let (status, single_reply) = app.get(&format!("/api/v1/replies/{r1}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(single_reply["body"], "Thanks a lot");
}

#[tokio::test]
async fn same_comment_text_gets_distinct_slugs() {
    let (app, article) = app_with_article().await;
    let a = comment(&app, READER, &article, "Nice one!").await;
    let b = comment(&app, WRITER, &article, "Nice one!").await;
    assert_eq!(a, "nice-one");
    assert!(b.starts_with("nice-one-"), "got {b}");
}

#[tokio::test]
async fn only_owner_or_admin_edits_comments() {
    let (app, article) = app_with_article().await;
    let slug = comment(&app, READER, &article, "Typo in here").await;
    let uri = format!("/api/v1/comments/{slug}");

    let (status, body) = app.put(&uri, WRITER, json!({ "body": "Not yours" })).await;
    assert_error_response(status, &body, StatusCode::FORBIDDEN);

    let (status, body) = app.patch(&uri, READER, json!({ "body": "Typo fixed" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["body"], "Typo fixed");
    assert_eq!(body["slug"], slug);

    let (status, body) = app.patch(&uri, READER, json!({ "body": "   " })).await;
    assert_error_response(status, &body, StatusCode::BAD_REQUEST);

    assert_eq!(app.delete(&uri, WRITER).await, StatusCode::FORBIDDEN);
    assert_eq!(app.delete(&uri, admin()).await, StatusCode::NO_CONTENT);
    let (status, body) = app.get(&uri, None).await;
    assert_error_response(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn replies_follow_the_same_ownership_rules() {
    let (app, article) = app_with_article().await;
    let parent = comment(&app, READER, &article, "Question time").await;
    let child = reply(&app, WRITER, &parent, "Answer here").await;
    let uri = format!("/api/v1/replies/{child}");

    let (status, body) = app.put(&uri, READER, json!({ "body": "Edited" })).await;
    assert_error_response(status, &body, StatusCode::FORBIDDEN);

    let (status, body) = app.put(&uri, WRITER, json!({ "body": "Better answer" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["body"], "Better answer");

    assert_eq!(app.delete(&uri, WRITER).await, StatusCode::NO_CONTENT);
    let (_, parent_view) = app.get(&format!("/api/v1/comments/{parent}"), None).await;
    assert_eq!(parent_view["replies"], json!([]));
}

#[tokio::test]
async fn deleting_a_comment_removes_its_replies() {
    let (app, article) = app_with_article().await;
    let parent = comment(&app, READER, &article, "Thread root").await;
    let child = reply(&app, WRITER, &parent, "Thread leaf").await;

    assert_eq!(
        app.delete(&format!("/api/v1/comments/{parent}"), READER).await,
        StatusCode::NO_CONTENT
    );
    let (status, body) = app.get(&format!("/api/v1/replies/{child}"), None).await;
    assert_error_response(status, &body, StatusCode::NOT_FOUND);
}
