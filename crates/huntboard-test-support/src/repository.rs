//! Test repositories — mock `ScoreRepository` implementations for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use huntboard_core::error::DomainError;
use huntboard_core::guild::GuildRef;
use huntboard_core::record::GuildCollection;
use huntboard_core::repository::{GuildWriteGuard, ScoreRepository};

fn guild_key(guild: &GuildRef) -> String {
    format!("{}_-_{}", guild.name, guild.id)
}

/// A score repository that keeps collections in memory and records every
/// `save` call. Loading an unseen guild yields an empty collection, just
/// like the file store's lazy creation.
#[derive(Debug, Default)]
pub struct InMemoryScoreRepository {
    collections: Mutex<HashMap<String, GuildCollection>>,
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
    saved: Mutex<Vec<(String, GuildCollection)>>,
}

impl InMemoryScoreRepository {
    /// Create an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with an existing collection for `guild`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn seed(&self, guild: &GuildRef, collection: GuildCollection) {
        self.collections
            .lock()
            .unwrap()
            .insert(guild_key(guild), collection);
    }

    /// The current collection stored for `guild`, if any save or load has
    /// touched it.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn collection(&self, guild: &GuildRef) -> Option<GuildCollection> {
        self.collections.lock().unwrap().get(&guild_key(guild)).cloned()
    }

    /// Returns a snapshot of every `(guild key, collection)` pair that was
    /// saved, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn saved_collections(&self) -> Vec<(String, GuildCollection)> {
        self.saved.lock().unwrap().clone()
    }

    fn guild_lock(&self, guild: &GuildRef) -> Arc<tokio::sync::Mutex<()>> {
        self.locks
            .lock()
            .unwrap()
            .entry(guild_key(guild))
            .or_default()
            .clone()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn lock(&self, guild: &GuildRef) -> GuildWriteGuard {
        GuildWriteGuard::new(self.guild_lock(guild).lock_owned().await)
    }

    async fn load(&self, guild: &GuildRef) -> Result<GuildCollection, DomainError> {
        Ok(self
            .collections
            .lock()
            .unwrap()
            .entry(guild_key(guild))
            .or_default()
            .clone())
    }

    async fn save(
        &self,
        guild: &GuildRef,
        collection: &GuildCollection,
    ) -> Result<(), DomainError> {
        let key = guild_key(guild);
        self.collections
            .lock()
            .unwrap()
            .insert(key.clone(), collection.clone());
        self.saved.lock().unwrap().push((key, collection.clone()));
        Ok(())
    }
}

/// A score repository whose reads and writes always fail with a storage
/// error. Useful for testing error-propagation paths.
#[derive(Debug, Default)]
pub struct FailingScoreRepository {
    lock: Arc<tokio::sync::Mutex<()>>,
}

impl FailingScoreRepository {
    /// Create a new failing repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreRepository for FailingScoreRepository {
    async fn lock(&self, _guild: &GuildRef) -> GuildWriteGuard {
        GuildWriteGuard::new(Arc::clone(&self.lock).lock_owned().await)
    }

    async fn load(&self, _guild: &GuildRef) -> Result<GuildCollection, DomainError> {
        Err(DomainError::Storage("score file unavailable".into()))
    }

    async fn save(
        &self,
        _guild: &GuildRef,
        _collection: &GuildCollection,
    ) -> Result<(), DomainError> {
        Err(DomainError::Storage("score file unavailable".into()))
    }
}

/// A score repository whose loads report a corrupt score file. Saves are
/// rejected too; a corrupt guild must never be overwritten.
#[derive(Debug, Default)]
pub struct CorruptScoreRepository {
    lock: Arc<tokio::sync::Mutex<()>>,
}

impl CorruptScoreRepository {
    /// Create a new corrupt repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn corrupt(guild: &GuildRef) -> DomainError {
        DomainError::CorruptStore {
            path: format!("{}.json", guild_key(guild)),
            detail: "expected value at line 1 column 1".into(),
        }
    }
}

#[async_trait]
impl ScoreRepository for CorruptScoreRepository {
    async fn lock(&self, _guild: &GuildRef) -> GuildWriteGuard {
        GuildWriteGuard::new(Arc::clone(&self.lock).lock_owned().await)
    }

    async fn load(&self, guild: &GuildRef) -> Result<GuildCollection, DomainError> {
        Err(Self::corrupt(guild))
    }

    async fn save(
        &self,
        guild: &GuildRef,
        _collection: &GuildCollection,
    ) -> Result<(), DomainError> {
        Err(Self::corrupt(guild))
    }
}
