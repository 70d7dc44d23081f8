//! Persistent character records.
//!
//! These types define the on-disk shape of a guild's score file: a plain
//! JSON array of character records with camelCase field names, matching the
//! files the chat bot has always written.

use serde::{Deserialize, Serialize};

/// The currently assigned hunting objective of a character.
///
/// Never independently addressable; always nested inside a [`Character`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    /// Reference into the monster catalog.
    pub monster_id: u16,
    /// Kills recorded toward the current target. Always below the
    /// advancement threshold immediately after any write.
    pub kill_count: u32,
}

/// One registered character: the unit of persistence.
///
/// `(user_id, char_name)` is the unique key within a guild's collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Identity of the controlling account (stable, opaque).
    pub user_id: String,
    /// Free-text display name; may contain spaces.
    pub char_name: String,
    /// Job class, validated against the ruleset at registration.
    pub class_name: String,
    /// Completed missions.
    pub score: u32,
    /// The active hunting objective.
    pub current_mission: Mission,
}

/// The ordered collection of characters registered in one guild.
///
/// Serializes transparently as a JSON array. Insertion order carries no
/// meaning; lookup is by key equality, and the index of a match is reused as
/// the identity for in-place updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildCollection(Vec<Character>);

impl GuildCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Index of the character matching both key fields exactly, if any.
    #[must_use]
    pub fn find_index(&self, user_id: &str, char_name: &str) -> Option<usize> {
        self.0
            .iter()
            .position(|c| c.user_id == user_id && c.char_name == char_name)
    }

    /// Appends a character record.
    pub fn push(&mut self, character: Character) {
        self.0.push(character);
    }

    /// The record at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Character> {
        self.0.get(index)
    }

    /// Mutable access to the record at `index`, if in range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Character> {
        self.0.get_mut(index)
    }

    /// All records, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Character] {
        &self.0
    }

    /// Number of registered characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if no character is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(user_id: &str, char_name: &str) -> Character {
        Character {
            user_id: user_id.to_owned(),
            char_name: char_name.to_owned(),
            class_name: "Knight".to_owned(),
            score: 0,
            current_mission: Mission {
                monster_id: 1002,
                kill_count: 0,
            },
        }
    }

    #[test]
    fn test_find_index_matches_both_key_fields() {
        let mut collection = GuildCollection::new();
        collection.push(character("42", "Bob"));
        collection.push(character("42", "Alt Bob"));
        collection.push(character("7", "Bob"));

        assert_eq!(collection.find_index("42", "Alt Bob"), Some(1));
        assert_eq!(collection.find_index("7", "Bob"), Some(2));
        assert_eq!(collection.find_index("7", "Alt Bob"), None);
    }

    #[test]
    fn test_collection_serializes_as_plain_array_with_camel_case_fields() {
        let mut collection = GuildCollection::new();
        collection.push(character("42", "Bob"));

        let json = serde_json::to_value(&collection).unwrap();
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["userId"], "42");
        assert_eq!(records[0]["charName"], "Bob");
        assert_eq!(records[0]["className"], "Knight");
        assert_eq!(records[0]["currentMission"]["monsterId"], 1002);
        assert_eq!(records[0]["currentMission"]["killCount"], 0);
    }

    #[test]
    fn test_collection_round_trips_field_by_field() {
        let mut collection = GuildCollection::new();
        collection.push(character("42", "Bob"));
        collection.push(Character {
            score: 9,
            current_mission: Mission {
                monster_id: 1013,
                kill_count: 77,
            },
            ..character("7", "James Paul mieft")
        });

        let json = serde_json::to_string(&collection).unwrap();
        let reloaded: GuildCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, collection);
    }
}
