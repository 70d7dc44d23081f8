//! Guild identity.

/// Reference to one guild: the isolation scope for character records.
///
/// The `id` is the platform's stable, opaque identity; `name` is the
/// human-readable display name. Both feed the storage-key derivation in the
/// file store, so a guild rename moves its collection to a new key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRef {
    /// Stable, opaque guild identity.
    pub id: String,
    /// Human-readable guild display name.
    pub name: String,
}

impl GuildRef {
    /// Creates a new guild reference.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
