// tests/support/mocks/storage.rs
use std::collections::HashMap;
use std::sync::Mutex;

use blogsmith::application::{ApplicationResult, ports::storage::FileStorage};
use bytes::Bytes;

pub const MEDIA_BASE_URL: &str = "http://media.test/";

#[derive(Default)]
pub struct InMemoryFileStorage {
    files: Mutex<HashMap<String, Bytes>>,
}

impl InMemoryFileStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.files.lock().unwrap().contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn put(&self, key: &str, contents: &'static [u8]) {
        self.files
            .lock()
            .unwrap()
            .insert(key.to_string(), Bytes::from_static(contents));
    }
}

#[async_trait::async_trait]
impl FileStorage for InMemoryFileStorage {
    async fn save(&self, key: &str, contents: Bytes) -> ApplicationResult<()> {
        self.files.lock().unwrap().insert(key.to_string(), contents);
        Ok(())
    }

    async fn delete(&self, key: &str) -> ApplicationResult<()> {
        self.files.lock().unwrap().remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> ApplicationResult<bool> {
        Ok(self.contains(key))
    }

    fn public_url(&self, key: &str) -> String {
        format!("{MEDIA_BASE_URL}{key}")
    }
}
