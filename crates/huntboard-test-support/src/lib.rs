//! Shared test mocks and utilities for the Huntboard mission tracker.

mod repository;
mod rng;

pub use repository::{CorruptScoreRepository, FailingScoreRepository, InMemoryScoreRepository};
pub use rng::{MockRng, SequenceRng};
