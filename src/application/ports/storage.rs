// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Blob store for uploaded media, addressed by relative keys such as
/// `article/2024/05/<uuid>.png`.
#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn save(&self, key: &str, contents: Bytes) -> ApplicationResult<()>;
    /// Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> ApplicationResult<()>;
    async fn exists(&self, key: &str) -> ApplicationResult<bool>;
    fn public_url(&self, key: &str) -> String;
}

/// An uploaded file as received from a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub contents: Bytes,
}

impl UploadedFile {
    const MAX_EXTENSION_LEN: usize = 10;

    /// Lowercased extension of the original file name, `bin` when absent or
    /// unusable.
    pub fn extension(&self) -> String {
        self.file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| {
                !ext.is_empty()
                    && ext.len() <= Self::MAX_EXTENSION_LEN
                    && ext.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .unwrap_or_else(|| "bin".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: Option<&str>) -> UploadedFile {
        UploadedFile {
            file_name: name.map(str::to_string),
            contents: Bytes::from_static(b"data"),
        }
    }

    #[test]
    fn extension_is_taken_from_the_file_name() {
        assert_eq!(upload(Some("Photo.JPG")).extension(), "jpg");
        assert_eq!(upload(Some("archive.tar.gz")).extension(), "gz");
    }

    #[test]
    fn unusable_extensions_fall_back_to_bin() {
        assert_eq!(upload(None).extension(), "bin");
        assert_eq!(upload(Some("README")).extension(), "bin");
        assert_eq!(upload(Some("evil.p/hp")).extension(), "bin");
    }
}
