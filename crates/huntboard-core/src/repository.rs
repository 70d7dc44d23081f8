//! Score repository abstraction.

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use crate::error::DomainError;
use crate::guild::GuildRef;
use crate::record::GuildCollection;

/// Exclusive write access to one guild's collection.
///
/// Command handlers hold a guard across each load → mutate → save cycle so
/// that two commands against the same guild cannot interleave and lose an
/// update. Dropping the guard releases the guild.
#[derive(Debug)]
pub struct GuildWriteGuard {
    _guard: OwnedMutexGuard<()>,
}

impl GuildWriteGuard {
    /// Wraps an acquired per-guild mutex guard.
    #[must_use]
    pub fn new(guard: OwnedMutexGuard<()>) -> Self {
        Self { _guard: guard }
    }
}

/// Repository trait for loading and persisting guild collections.
///
/// Implementations own the physical representation outright; callers never
/// touch the backing storage directly. The whole collection is the unit of
/// persistence — there are no partial writes.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Acquires the write-serialization point for `guild`. Mutating callers
    /// take this before `load` and hold it until after `save`.
    async fn lock(&self, guild: &GuildRef) -> GuildWriteGuard;

    /// Loads the guild's collection. An absent backing file is created with
    /// an empty collection and that collection is returned.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CorruptStore` if the backing data exists but
    /// does not parse, and `DomainError::Storage` for other I/O failures.
    async fn load(&self, guild: &GuildRef) -> Result<GuildCollection, DomainError>;

    /// Serializes the full collection and overwrites the guild's backing
    /// storage.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Storage` if the write fails.
    async fn save(&self, guild: &GuildRef, collection: &GuildCollection)
    -> Result<(), DomainError>;
}
