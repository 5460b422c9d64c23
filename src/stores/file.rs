//! Directory-backed store: one JSON file per key.
//!
//! Writes go through a temporary file in the same directory followed by a
//! rename, so a reader never observes a half-written entry.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::Store;
use crate::error::Result;

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Maps a key to its file. Characters outside `[A-Za-z0-9._-]` become `_`.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '_' | '-' => c,
                _ => '_',
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }

    async fn write_atomic(&self, path: &Path, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for FileStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key);
        self.write_atomic(&path, &value).await
    }

    async fn swap(&self, key: &str, value: String) -> Result<Option<String>> {
        let previous = self.load(key).await?;
        let path = self.path_for(key);
        self.write_atomic(&path, &value).await?;
        Ok(previous)
    }
}
