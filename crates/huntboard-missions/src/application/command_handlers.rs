//! Command handlers for the mission tracker context.
//!
//! This module contains application-level command handler functions that
//! drive the character state machine: take the guild's write guard, load
//! the collection, apply mission logic, persist the result.

use huntboard_catalog::MonsterCatalog;
use huntboard_core::error::DomainError;
use huntboard_core::record::Character;
use huntboard_core::repository::ScoreRepository;
use huntboard_core::rng::DeterministicRng;

use crate::domain::commands::{RecordKills, RegisterCharacter, RerollMission};
use crate::domain::mission::{apply_kills, create_mission};
use crate::domain::ruleset::Ruleset;

/// Outcome of a registration command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    /// `false` if the `(user, character)` pair was already registered; the
    /// existing record is returned unchanged in that case.
    pub created: bool,
    /// The registered character, new or pre-existing.
    pub character: Character,
}

/// Outcome of a kill-count update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillReport {
    /// The character after the update.
    pub character: Character,
    /// `true` if the threshold was reached: the score went up and a new
    /// mission was assigned, which the presentation layer announces.
    pub advanced: bool,
}

/// Handles the `RegisterCharacter` command: validates the class and name,
/// appends a fresh character with its first mission, and persists the
/// collection. Re-registering an existing character is not an error; the
/// existing record comes back with `created: false`.
///
/// # Errors
///
/// Returns `DomainError::InvalidArguments` for an unknown job class or an
/// empty character name, and propagates load/save failures.
pub async fn handle_register(
    command: &RegisterCharacter,
    ruleset: &Ruleset,
    catalog: &MonsterCatalog,
    rng: &mut dyn DeterministicRng,
    repo: &dyn ScoreRepository,
) -> Result<RegistrationOutcome, DomainError> {
    if !ruleset.is_job_class(&command.class_name) {
        return Err(DomainError::InvalidArguments(format!(
            "`{}` is not a job class",
            command.class_name
        )));
    }
    if command.char_name.trim().is_empty() {
        return Err(DomainError::InvalidArguments(
            "character name must not be empty".into(),
        ));
    }

    let _guard = repo.lock(&command.guild).await;
    let mut collection = repo.load(&command.guild).await?;

    if let Some(index) = collection.find_index(&command.user_id, &command.char_name) {
        let existing = collection
            .get(index)
            .ok_or_else(|| DomainError::Storage("record vanished during registration".into()))?;
        return Ok(RegistrationOutcome {
            created: false,
            character: existing.clone(),
        });
    }

    // First mission: no previous target to exclude.
    let first_mission = create_mission(catalog, rng, 0)?;
    let character = Character {
        user_id: command.user_id.clone(),
        char_name: command.char_name.clone(),
        class_name: command.class_name.clone(),
        score: 0,
        current_mission: first_mission,
    };
    collection.push(character.clone());
    repo.save(&command.guild, &collection).await?;

    tracing::info!(
        correlation_id = %command.correlation_id,
        char_name = %command.char_name,
        monster_id = character.current_mission.monster_id,
        "registered character with first mission"
    );

    Ok(RegistrationOutcome {
        created: true,
        character,
    })
}

/// Handles the `RecordKills` command: adds kills to the character's current
/// mission, advancing to a fresh mission and bumping the score when the
/// threshold is reached, then persists the record in place.
///
/// # Errors
///
/// Returns `DomainError::NotRegistered` if the character has no record,
/// `DomainError::InvalidArguments` for a non-positive kill amount, and
/// propagates load/save failures.
pub async fn handle_record_kills(
    command: &RecordKills,
    ruleset: &Ruleset,
    catalog: &MonsterCatalog,
    rng: &mut dyn DeterministicRng,
    repo: &dyn ScoreRepository,
) -> Result<KillReport, DomainError> {
    let _guard = repo.lock(&command.guild).await;
    let mut collection = repo.load(&command.guild).await?;

    let index = collection
        .find_index(&command.user_id, &command.char_name)
        .ok_or_else(|| DomainError::NotRegistered {
            user_id: command.user_id.clone(),
            char_name: command.char_name.clone(),
        })?;
    let character = collection
        .get_mut(index)
        .ok_or_else(|| DomainError::Storage("record vanished during kill update".into()))?;

    let outcome = apply_kills(
        character.current_mission,
        command.kills_to_add,
        catalog,
        rng,
        ruleset,
    )?;
    character.current_mission = outcome.mission;
    if outcome.advanced {
        character.score += 1;
    }
    let updated = character.clone();
    repo.save(&command.guild, &collection).await?;

    if outcome.advanced {
        tracing::info!(
            correlation_id = %command.correlation_id,
            char_name = %command.char_name,
            score = updated.score,
            monster_id = updated.current_mission.monster_id,
            "mission complete, new target assigned"
        );
    } else {
        tracing::debug!(
            correlation_id = %command.correlation_id,
            char_name = %command.char_name,
            kill_count = updated.current_mission.kill_count,
            "kill count updated"
        );
    }

    Ok(KillReport {
        character: updated,
        advanced: outcome.advanced,
    })
}

/// Handles the `RerollMission` command: discards the current mission for a
/// freshly drawn target, starting at zero kills. The score is untouched.
///
/// # Errors
///
/// Returns `DomainError::NotRegistered` if the character has no record and
/// propagates draw and load/save failures.
pub async fn handle_reroll(
    command: &RerollMission,
    catalog: &MonsterCatalog,
    rng: &mut dyn DeterministicRng,
    repo: &dyn ScoreRepository,
) -> Result<Character, DomainError> {
    let _guard = repo.lock(&command.guild).await;
    let mut collection = repo.load(&command.guild).await?;

    let index = collection
        .find_index(&command.user_id, &command.char_name)
        .ok_or_else(|| DomainError::NotRegistered {
            user_id: command.user_id.clone(),
            char_name: command.char_name.clone(),
        })?;
    let character = collection
        .get_mut(index)
        .ok_or_else(|| DomainError::Storage("record vanished during reroll".into()))?;

    character.current_mission = create_mission(catalog, rng, character.current_mission.monster_id)?;
    let updated = character.clone();
    repo.save(&command.guild, &collection).await?;

    tracing::info!(
        correlation_id = %command.correlation_id,
        char_name = %command.char_name,
        monster_id = updated.current_mission.monster_id,
        "mission rerolled"
    );

    Ok(updated)
}
