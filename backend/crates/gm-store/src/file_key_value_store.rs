use crate::{KeyValueStore, StoreError, StoreResult};

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;
use tokio::io::AsyncWriteExt;

/// One `<key>.json` file per slot under a data directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.slot_path(key);

        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::file_read(path, e)),
        }
    }

    /// Saves using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.slot_path(key);
        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file = tokio::fs::File::create(&temp_path)
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &final_path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StoreError::atomic_rename(temp_path, final_path, e));
        }

        debug!("Wrote slot {key} to {final_path:?}");
        Ok(())
    }
}
