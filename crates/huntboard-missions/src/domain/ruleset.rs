//! Tracker configuration: the fixed job-class set and the advancement
//! threshold.
//!
//! Modeled as an injected value rather than module-level statics so tests
//! can substitute a smaller ruleset.

/// Kill count at which a mission completes and a new one is assigned.
pub const DEFAULT_ADVANCEMENT_THRESHOLD: u32 = 100;

/// The playable job classes, first through transcendent second jobs.
const DEFAULT_JOB_CLASSES: &[&str] = &[
    "Novice",
    "Swordman",
    "Thief",
    "Mage",
    "Merchant",
    "Archer",
    "Acolyte",
    "TaekwonKid",
    "Ninja",
    "Gunslinger",
    "Super Novice",
    "Knight",
    "Crusader",
    "Assassin",
    "Rogue",
    "Wizard",
    "Sage",
    "Blacksmith",
    "Alchemist",
    "Hunter",
    "Bard",
    "Dancer",
    "Priest",
    "Monk",
    "TaekwonMaster",
    "Soullinker",
    "LordKnight",
    "Paladin",
    "AssassinCross",
    "Stalker",
    "HighWizard",
    "Professor",
    "Whitesmith",
    "Creator",
    "Sniper",
    "Clown",
    "Gypsy",
    "HighPriest",
    "Champion",
];

/// Immutable tracker configuration, injected at construction.
#[derive(Debug, Clone)]
pub struct Ruleset {
    job_classes: Vec<String>,
    advancement_threshold: u32,
}

impl Ruleset {
    /// Creates a ruleset with an explicit class list and threshold.
    #[must_use]
    pub fn new(job_classes: Vec<String>, advancement_threshold: u32) -> Self {
        Self {
            job_classes,
            advancement_threshold,
        }
    }

    /// `true` if `name` is exactly one of the configured job classes.
    #[must_use]
    pub fn is_job_class(&self, name: &str) -> bool {
        self.job_classes.iter().any(|class| class == name)
    }

    /// The configured job classes, in declaration order.
    #[must_use]
    pub fn job_classes(&self) -> &[String] {
        &self.job_classes
    }

    /// Kill count at which a mission advances.
    #[must_use]
    pub fn advancement_threshold(&self) -> u32 {
        self.advancement_threshold
    }
}

impl Default for Ruleset {
    /// The production ruleset: the full job-class list and the threshold
    /// of [`DEFAULT_ADVANCEMENT_THRESHOLD`].
    fn default() -> Self {
        Self::new(
            DEFAULT_JOB_CLASSES.iter().map(ToString::to_string).collect(),
            DEFAULT_ADVANCEMENT_THRESHOLD,
        )
    }
}
