//! Media files on the local filesystem, rooted at `MEDIA_ROOT`.
use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::FileStorage,
};

#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            root: root.into(),
            base_url,
        }
    }

    /// Keys are relative paths; anything escaping the root is rejected.
    fn resolve(&self, key: &str) -> ApplicationResult<PathBuf> {
        let relative = Path::new(key);
        let safe = !key.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !safe {
            return Err(ApplicationError::validation(format!(
                "invalid storage key '{key}'"
            )));
        }
        Ok(self.root.join(relative))
    }
}

fn io_error(err: &std::io::Error) -> ApplicationError {
    ApplicationError::infrastructure(format!("file storage: {err}"))
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn save(&self, key: &str, contents: Bytes) -> ApplicationResult<()> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| io_error(&err))?;
        }
        tokio::fs::write(&path, &contents)
            .await
            .map_err(|err| io_error(&err))?;
        tracing::debug!(file = key, bytes = contents.len(), "file stored");
        Ok(())
    }

    async fn delete(&self, key: &str) -> ApplicationResult<()> {
        let path = self.resolve(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(&err)),
        }
    }

    async fn exists(&self, key: &str) -> ApplicationResult<bool> {
        let path = self.resolve(key)?;
        tokio::fs::try_exists(&path)
            .await
            .map_err(|err| io_error(&err))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}{key}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(dir.path(), "/media");

        storage
            .save("article/2024/05/a.png", Bytes::from_static(b"png"))
            .await
            .unwrap();
        assert!(storage.exists("article/2024/05/a.png").await.unwrap());
        assert!(dir.path().join("article/2024/05/a.png").is_file());

        storage.delete("article/2024/05/a.png").await.unwrap();
        assert!(!storage.exists("article/2024/05/a.png").await.unwrap());
        // second delete is a no-op
        storage.delete("article/2024/05/a.png").await.unwrap();
    }

    #[tokio::test]
    async fn keys_cannot_escape_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(dir.path(), "/media/");
        assert!(storage.save("../x.png", Bytes::new()).await.is_err());
        assert!(storage.exists("/etc/passwd").await.is_err());
    }

    #[test]
    fn public_url_joins_base_and_key() {
        let storage = LocalFileStorage::new("/srv/media", "/media");
        assert_eq!(storage.public_url("author/x.png"), "/media/author/x.png");
    }
}
