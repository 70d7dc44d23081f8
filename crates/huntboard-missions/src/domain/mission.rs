//! The mission engine: drawing new hunt targets and advancing kill counts.

use huntboard_catalog::MonsterCatalog;
use huntboard_core::error::DomainError;
use huntboard_core::record::Mission;
use huntboard_core::rng::DeterministicRng;

use crate::domain::ruleset::Ruleset;

/// Upper bound on target draws before giving up. Only a degenerate catalog
/// (a single monster matching the exclusion) can exhaust this.
const MAX_DRAW_ATTEMPTS: u32 = 64;

/// Result of applying kills to a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillOutcome {
    /// The mission after the update — either the same target with a higher
    /// count, or a freshly drawn one.
    pub mission: Mission,
    /// `true` if the threshold was reached and a new mission was drawn.
    /// The caller increments the character's score when set.
    pub advanced: bool,
}

/// Draws a new mission whose target differs from `previous_monster_id`.
///
/// Draws are uniform over the catalog and rejected while they match the
/// previous target, so a player is never handed the same monster twice in a
/// row. Passing `0` (no catalog id is zero) excludes nothing — that is how
/// a first mission is drawn. The fresh mission starts at zero kills.
///
/// # Errors
///
/// Returns `DomainError::TargetDrawExhausted` if no differing target was
/// drawn within [`MAX_DRAW_ATTEMPTS`], which requires a catalog with fewer
/// than two monsters.
pub fn create_mission(
    catalog: &MonsterCatalog,
    rng: &mut dyn DeterministicRng,
    previous_monster_id: u16,
) -> Result<Mission, DomainError> {
    for _ in 0..MAX_DRAW_ATTEMPTS {
        let monster_id = catalog.random_id(rng);
        if monster_id != previous_monster_id {
            return Ok(Mission {
                monster_id,
                kill_count: 0,
            });
        }
    }
    Err(DomainError::TargetDrawExhausted {
        attempts: MAX_DRAW_ATTEMPTS,
    })
}

/// Adds `kills_to_add` to a mission and evaluates advancement.
///
/// Below the ruleset's threshold the mission keeps its target with the new
/// total; at or above it a fresh mission is drawn (excluding the completed
/// target) and `advanced` is set. Either way the returned kill count is
/// strictly below the threshold.
///
/// # Errors
///
/// Returns `DomainError::InvalidArguments` if `kills_to_add` is not a
/// positive integer, and propagates draw failures from [`create_mission`].
pub fn apply_kills(
    mission: Mission,
    kills_to_add: i64,
    catalog: &MonsterCatalog,
    rng: &mut dyn DeterministicRng,
    ruleset: &Ruleset,
) -> Result<KillOutcome, DomainError> {
    if kills_to_add <= 0 {
        return Err(DomainError::InvalidArguments(
            "kill amount must be greater than zero".into(),
        ));
    }
    let kills = u32::try_from(kills_to_add)
        .map_err(|_| DomainError::InvalidArguments("kill amount is out of range".into()))?;

    let total = mission.kill_count.saturating_add(kills);
    if total < ruleset.advancement_threshold() {
        Ok(KillOutcome {
            mission: Mission {
                monster_id: mission.monster_id,
                kill_count: total,
            },
            advanced: false,
        })
    } else {
        let next = create_mission(catalog, rng, mission.monster_id)?;
        Ok(KillOutcome {
            mission: next,
            advanced: true,
        })
    }
}
