//! Huntboard — file-backed persistence for guild score collections.
//!
//! One JSON file per guild, fully rewritten on every save and created lazily
//! on first reference. This crate is the only code that touches the files;
//! everything else goes through the `ScoreRepository` trait.

pub mod file_score_repository;
pub mod path;

pub use file_score_repository::FileScoreRepository;
