//! Huntboard Core — shared domain abstractions.
//!
//! This crate defines the data model, error taxonomy, and the traits that
//! the catalog, store, and mission crates depend on. It contains no
//! infrastructure code.

pub mod error;
pub mod guild;
pub mod record;
pub mod repository;
pub mod rng;
