//! Catalog construction errors.

use thiserror::Error;

/// Errors raised while building a [`crate::MonsterCatalog`].
///
/// These are startup errors: a catalog either constructs fully valid or not
/// at all, so the rest of the tracker never sees a half-loaded table.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The monster table did not parse as JSON.
    #[error("monster table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The monster table contained no entries.
    #[error("monster table is empty")]
    Empty,

    /// Two entries shared the same monster id.
    #[error("duplicate monster id {0} in table")]
    DuplicateId(u16),
}
