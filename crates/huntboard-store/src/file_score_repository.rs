//! File implementation of the `ScoreRepository` trait.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use huntboard_core::error::DomainError;
use huntboard_core::guild::GuildRef;
use huntboard_core::record::GuildCollection;
use huntboard_core::repository::{GuildWriteGuard, ScoreRepository};

use crate::path::score_file_name;

/// JSON-file-backed score repository.
///
/// Stores one pretty-printed JSON array per guild under the configured root
/// directory, so the files stay human-diffable. Every save rewrites the
/// whole file. A per-guild async mutex, handed out via `lock`, serializes
/// read-modify-write cycles within this process; there is no cross-process
/// coordination.
#[derive(Debug)]
pub struct FileScoreRepository {
    root: PathBuf,
    guild_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl FileScoreRepository {
    /// Creates a repository rooted at `root`. The directory is created on
    /// first write if it does not exist yet.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            guild_locks: Mutex::new(HashMap::new()),
        }
    }

    /// The file storing the given guild's collection.
    #[must_use]
    pub fn score_file_path(&self, guild: &GuildRef) -> PathBuf {
        self.root.join(score_file_name(guild))
    }

    fn guild_lock(&self, guild: &GuildRef) -> Arc<tokio::sync::Mutex<()>> {
        self.guild_locks
            .lock()
            .expect("guild lock map is never poisoned")
            .entry(score_file_name(guild))
            .or_default()
            .clone()
    }

    fn render(collection: &GuildCollection) -> Result<String, DomainError> {
        serde_json::to_string_pretty(collection)
            .map_err(|e| DomainError::Storage(format!("collection serialization failed: {e}")))
    }

    fn parse(path: &Path, contents: &str) -> Result<GuildCollection, DomainError> {
        serde_json::from_str(contents).map_err(|e| DomainError::CorruptStore {
            path: path.display().to_string(),
            detail: e.to_string(),
        })
    }

    async fn ensure_root(&self) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            DomainError::Storage(format!(
                "failed to create score directory {}: {e}",
                self.root.display()
            ))
        })
    }

    /// Atomically creates the guild's file with an empty collection. If
    /// another writer created it in the meantime, that file wins and is
    /// read back instead.
    async fn create_empty(&self, path: &Path) -> Result<GuildCollection, DomainError> {
        self.ensure_root().await?;
        let empty = GuildCollection::new();
        let contents = Self::render(&empty)?;
        let created = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await;
        match created {
            Ok(mut file) => {
                file.write_all(contents.as_bytes()).await.map_err(|e| {
                    DomainError::Storage(format!("failed to write {}: {e}", path.display()))
                })?;
                tracing::info!(path = %path.display(), "created empty score file");
                Ok(empty)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
                    DomainError::Storage(format!("failed to read {}: {e}", path.display()))
                })?;
                Self::parse(path, &contents)
            }
            Err(e) => Err(DomainError::Storage(format!(
                "failed to create {}: {e}",
                path.display()
            ))),
        }
    }
}

#[async_trait]
impl ScoreRepository for FileScoreRepository {
    async fn lock(&self, guild: &GuildRef) -> GuildWriteGuard {
        GuildWriteGuard::new(self.guild_lock(guild).lock_owned().await)
    }

    async fn load(&self, guild: &GuildRef) -> Result<GuildCollection, DomainError> {
        let path = self.score_file_path(guild);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                let collection = Self::parse(&path, &contents)?;
                tracing::debug!(
                    path = %path.display(),
                    records = collection.len(),
                    "loaded guild collection"
                );
                Ok(collection)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => self.create_empty(&path).await,
            Err(e) => Err(DomainError::Storage(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    async fn save(
        &self,
        guild: &GuildRef,
        collection: &GuildCollection,
    ) -> Result<(), DomainError> {
        self.ensure_root().await?;
        let path = self.score_file_path(guild);
        let contents = Self::render(collection)?;
        tokio::fs::write(&path, contents).await.map_err(|e| {
            DomainError::Storage(format!("failed to write {}: {e}", path.display()))
        })?;
        tracing::debug!(
            path = %path.display(),
            records = collection.len(),
            "saved guild collection"
        );
        Ok(())
    }
}
