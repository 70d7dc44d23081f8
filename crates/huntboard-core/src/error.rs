//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Every failure path in the tracker maps to exactly one variant, and every
/// variant has a distinct, user-presentable rendering. Nothing is swallowed
/// or silently recovered.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed or missing command input (unknown job class, empty
    /// character name, non-positive kill count).
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The targeted character has no record in the guild's collection.
    #[error("character `{char_name}` is not registered for user {user_id}; register it first")]
    NotRegistered {
        /// Identity of the controlling account.
        user_id: String,
        /// Display name of the targeted character.
        char_name: String,
    },

    /// The guild's score file exists but does not parse as a collection.
    /// Fatal for that guild until the file is repaired by hand; the store
    /// never resets it to empty.
    #[error("score store at {path} is corrupt: {detail}")]
    CorruptStore {
        /// Path of the offending file.
        path: String,
        /// Underlying parse failure.
        detail: String,
    },

    /// The mission draw gave up before finding a target different from the
    /// previous one. Only reachable on degenerate (single-monster) catalogs.
    #[error("no fresh hunt target after {attempts} draws; the catalog needs at least two monsters")]
    TargetDrawExhausted {
        /// Number of draws attempted before giving up.
        attempts: u32,
    },

    /// An I/O or persistence error outside the corrupt-file case.
    #[error("storage error: {0}")]
    Storage(String),
}
