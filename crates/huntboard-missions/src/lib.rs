//! Huntboard — per-guild character mission tracker.
//!
//! Registers player characters, assigns randomized hunting missions,
//! advances kill counters, and promotes to a fresh mission once the
//! advancement threshold is reached. Persistence goes through the
//! `ScoreRepository` trait; randomness through `DeterministicRng`.

pub mod application;
pub mod domain;
