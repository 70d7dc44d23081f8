//! Huntboard — static monster reference catalog.
//!
//! The catalog is resolved once at startup from a known table (bundled or
//! caller-supplied JSON) and is read-only afterwards. Components receive it
//! by reference, so tests can substitute a smaller table.

pub mod catalog;
pub mod error;

pub use catalog::{Monster, MonsterCatalog, SpawnLocation};
pub use error::CatalogError;
