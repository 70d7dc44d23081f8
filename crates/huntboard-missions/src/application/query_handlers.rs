//! Query handlers for the mission tracker context.
//!
//! Read-only lookups against the guild's collection. Queries take no write
//! guard; they never mutate or persist anything.

use huntboard_core::error::DomainError;
use huntboard_core::repository::ScoreRepository;
use serde::Serialize;

use crate::domain::commands::GetScore;

/// Read-only view of a character's standing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreView {
    /// The character's display name.
    pub char_name: String,
    /// The character's job class.
    pub class_name: String,
    /// Completed missions.
    pub score: u32,
}

/// Retrieves the score of a registered character.
///
/// # Errors
///
/// Returns `DomainError::NotRegistered` if the character has no record and
/// propagates load failures.
pub async fn handle_get_score(
    query: &GetScore,
    repo: &dyn ScoreRepository,
) -> Result<ScoreView, DomainError> {
    let collection = repo.load(&query.guild).await?;
    let index = collection
        .find_index(&query.user_id, &query.char_name)
        .ok_or_else(|| DomainError::NotRegistered {
            user_id: query.user_id.clone(),
            char_name: query.char_name.clone(),
        })?;
    let character = collection
        .get(index)
        .ok_or_else(|| DomainError::Storage("record vanished during score lookup".into()))?;

    Ok(ScoreView {
        char_name: character.char_name.clone(),
        class_name: character.class_name.clone(),
        score: character.score,
    })
}
