//! Commands for the mission tracker context.

use huntboard_core::guild::GuildRef;
use uuid::Uuid;

/// Command to register a new character and hand out its first mission.
#[derive(Debug, Clone)]
pub struct RegisterCharacter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Identity of the invoking account.
    pub user_id: String,
    /// The character's job class, as typed by the user.
    pub class_name: String,
    /// The character's display name; may contain spaces.
    pub char_name: String,
    /// The guild the character belongs to.
    pub guild: GuildRef,
}

/// Command to add kills to a character's current mission.
#[derive(Debug, Clone)]
pub struct RecordKills {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Identity of the invoking account.
    pub user_id: String,
    /// The character's display name.
    pub char_name: String,
    /// Number of kills to add. Parsed upstream from a raw token, so it
    /// arrives signed and is validated positive here.
    pub kills_to_add: i64,
    /// The guild the character belongs to.
    pub guild: GuildRef,
}

/// Command to discard the current mission for a freshly drawn one.
#[derive(Debug, Clone)]
pub struct RerollMission {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Identity of the invoking account.
    pub user_id: String,
    /// The character's display name.
    pub char_name: String,
    /// The guild the character belongs to.
    pub guild: GuildRef,
}

/// Query for a character's current score.
#[derive(Debug, Clone)]
pub struct GetScore {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Identity of the invoking account.
    pub user_id: String,
    /// The character's display name.
    pub char_name: String,
    /// The guild the character belongs to.
    pub guild: GuildRef,
}
