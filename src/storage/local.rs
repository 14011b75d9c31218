//! Filesystem-backed key-value store.
//!
//! Each key maps to `{dir}/{key}.json`. Writes go to a temp file first and
//! are renamed into place, so a reader never sees a half-written document.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use super::KeyValueStore;
use crate::error::{AppError, Result};

/// Whether `key` can name a file under the store directory:
/// non-empty ASCII letters, digits, `_` and `-`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
}

/// Key-value store keeping one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    root_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root_dir`. The directory is created on first write.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// File backing `key`.
    fn path(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            return Err(AppError::storage(key, "keys may only contain letters, digits, '_' and '-'"));
        }
        Ok(self.root_dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(key, e)),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.path(key)?;
        tokio::fs::create_dir_all(&self.root_dir)
            .await
            .map_err(|e| AppError::storage(key, e))?;

        let tmp = path.with_extension("json.tmp");
        let write = async {
            let mut file = tokio::fs::File::create(&tmp).await?;
            file.write_all(value).await?;
            file.flush().await?;
            drop(file);
            tokio::fs::rename(&tmp, &path).await
        };
        write.await.map_err(|e| AppError::storage(key, e))?;

        log::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
