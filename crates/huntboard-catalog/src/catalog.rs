//! Monster table types and queries.

use std::collections::HashSet;

use huntboard_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One place a monster can be hunted, with its spawn weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnLocation {
    /// Map or zone name.
    pub location_name: String,
    /// Relative spawn density; higher means more targets per sweep.
    pub weight: u32,
    /// Minutes until a killed spawn returns. Zero means immediate.
    pub respawn_minutes: u32,
}

/// One huntable monster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    /// Stable catalog identifier.
    pub id: u16,
    /// Display name.
    pub name: String,
    /// Known spawn locations, in table order.
    pub spawns: Vec<SpawnLocation>,
}

/// The read-only reference table of huntable monsters.
#[derive(Debug, Clone)]
pub struct MonsterCatalog {
    monsters: Vec<Monster>,
}

/// The default monster table shipped with the crate.
const BUNDLED_TABLE: &str = include_str!("../data/monsters.json");

impl MonsterCatalog {
    /// Builds a catalog from an explicit monster list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list and
    /// `CatalogError::DuplicateId` if two entries share an id.
    pub fn new(monsters: Vec<Monster>) -> Result<Self, CatalogError> {
        if monsters.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for monster in &monsters {
            if !seen.insert(monster.id) {
                return Err(CatalogError::DuplicateId(monster.id));
            }
        }
        Ok(Self { monsters })
    }

    /// Parses a catalog from a JSON monster table.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, plus the
    /// validation errors of [`MonsterCatalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let monsters: Vec<Monster> = serde_json::from_str(json)?;
        Self::new(monsters)
    }

    /// The monster table bundled with the crate.
    ///
    /// # Panics
    ///
    /// Panics if the bundled table is invalid, which the crate's own tests
    /// rule out.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_json_str(BUNDLED_TABLE).expect("bundled monster table is valid")
    }

    /// All monsters, in catalog order.
    #[must_use]
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// The monster with the given id, if present.
    #[must_use]
    pub fn by_id(&self, id: u16) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    /// Number of monsters in the table. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    /// Always `false`; construction rejects empty tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Draws a monster id uniformly over the catalog's index range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn random_id(&self, rng: &mut dyn DeterministicRng) -> u16 {
        let last_index = (self.monsters.len() - 1) as u32;
        let index = rng.next_u32_range(0, last_index) as usize;
        self.monsters[index].id
    }

    /// The top `n` spawn locations of a monster, sorted by descending
    /// weight. Ties keep table order (the sort is stable), so output is
    /// deterministic. Unknown ids yield an empty list.
    #[must_use]
    pub fn top_spawn_locations(&self, monster_id: u16, n: usize) -> Vec<&SpawnLocation> {
        let Some(monster) = self.by_id(monster_id) else {
            return Vec::new();
        };
        let mut locations: Vec<&SpawnLocation> = monster.spawns.iter().collect();
        locations.sort_by(|a, b| b.weight.cmp(&a.weight));
        locations.truncate(n);
        locations
    }
}
