//! Hypermedia links embedded in API representations.
use crate::application::ports::FileStoragePort;

pub const API_PREFIX: &str = "/api/v1";

pub fn article_url(slug: &str) -> String {
    format!("{API_PREFIX}/articles/{slug}")
}

pub fn article_comments_url(slug: &str) -> String {
    format!("{API_PREFIX}/articles/{slug}/comments")
}

pub fn article_images_url(slug: &str) -> String {
    format!("{API_PREFIX}/articles/{slug}/images")
}

pub fn comment_url(slug: &str) -> String {
    format!("{API_PREFIX}/comments/{slug}")
}

pub fn comment_replies_url(slug: &str) -> String {
    format!("{API_PREFIX}/comments/{slug}/replies")
}

pub fn reply_url(slug: &str) -> String {
    format!("{API_PREFIX}/replies/{slug}")
}

/// Public URL of a stored file, `None` when nothing is stored.
pub fn media_url(storage: &FileStoragePort, key: Option<&str>) -> Option<String> {
    key.filter(|key| !key.is_empty())
        .map(|key| storage.public_url(key))
}
