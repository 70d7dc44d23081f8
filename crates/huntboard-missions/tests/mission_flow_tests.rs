//! Integration tests for the mission tracker against the real file store.
//!
//! These drive the command handlers end to end: every cycle goes through
//! the guild's JSON file on disk, exactly as the chat layer would.

use uuid::Uuid;

use huntboard_catalog::MonsterCatalog;
use huntboard_core::error::DomainError;
use huntboard_core::guild::GuildRef;
use huntboard_core::repository::ScoreRepository;
use huntboard_core::rng::SystemRng;
use huntboard_missions::application::command_handlers::{
    handle_record_kills, handle_register, handle_reroll,
};
use huntboard_missions::application::query_handlers::handle_get_score;
use huntboard_missions::domain::commands::{
    GetScore, RecordKills, RegisterCharacter, RerollMission,
};
use huntboard_missions::domain::ruleset::Ruleset;
use huntboard_store::FileScoreRepository;

fn guild() -> GuildRef {
    GuildRef::new("112233445566", "Sacred Order")
}

fn register(user_id: &str, class_name: &str, char_name: &str) -> RegisterCharacter {
    RegisterCharacter {
        correlation_id: Uuid::new_v4(),
        user_id: user_id.to_owned(),
        class_name: class_name.to_owned(),
        char_name: char_name.to_owned(),
        guild: guild(),
    }
}

fn kills(user_id: &str, char_name: &str, kills_to_add: i64) -> RecordKills {
    RecordKills {
        correlation_id: Uuid::new_v4(),
        user_id: user_id.to_owned(),
        char_name: char_name.to_owned(),
        kills_to_add,
        guild: guild(),
    }
}

#[tokio::test]
async fn test_full_mission_lifecycle_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileScoreRepository::new(dir.path());
    let ruleset = Ruleset::default();
    let catalog = MonsterCatalog::bundled();
    let mut rng = SystemRng::from_seed(7);

    // Register a fresh character.
    let outcome = handle_register(
        &register("42", "Knight", "Bob"),
        &ruleset,
        &catalog,
        &mut rng,
        &repo,
    )
    .await
    .unwrap();
    assert!(outcome.created);
    assert_eq!(outcome.character.score, 0);
    assert_eq!(outcome.character.current_mission.kill_count, 0);
    let first_target = outcome.character.current_mission.monster_id;
    assert!(catalog.by_id(first_target).is_some());

    // 60 kills: no advancement yet.
    let report = handle_record_kills(&kills("42", "Bob", 60), &ruleset, &catalog, &mut rng, &repo)
        .await
        .unwrap();
    assert!(!report.advanced);
    assert_eq!(report.character.current_mission.kill_count, 60);

    // 45 more crosses the threshold: score goes up, fresh target assigned.
    let report = handle_record_kills(&kills("42", "Bob", 45), &ruleset, &catalog, &mut rng, &repo)
        .await
        .unwrap();
    assert!(report.advanced);
    assert_eq!(report.character.score, 1);
    assert_eq!(report.character.current_mission.kill_count, 0);
    assert_ne!(report.character.current_mission.monster_id, first_target);

    // Reroll swaps the target without touching score or kill count.
    let before_reroll = report.character.current_mission.monster_id;
    let character = handle_reroll(
        &RerollMission {
            correlation_id: Uuid::new_v4(),
            user_id: "42".to_owned(),
            char_name: "Bob".to_owned(),
            guild: guild(),
        },
        &catalog,
        &mut rng,
        &repo,
    )
    .await
    .unwrap();
    assert_ne!(character.current_mission.monster_id, before_reroll);
    assert_eq!(character.current_mission.kill_count, 0);
    assert_eq!(character.score, 1);

    // The score query sees the persisted state.
    let view = handle_get_score(
        &GetScore {
            correlation_id: Uuid::new_v4(),
            user_id: "42".to_owned(),
            char_name: "Bob".to_owned(),
            guild: guild(),
        },
        &repo,
    )
    .await
    .unwrap();
    assert_eq!(view.score, 1);

    // And the collection on disk matches what the handlers returned.
    let collection = repo.load(&guild()).await.unwrap();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.records()[0], character);
}

#[tokio::test]
async fn test_commands_against_unregistered_characters_fail() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileScoreRepository::new(dir.path());
    let ruleset = Ruleset::default();
    let catalog = MonsterCatalog::bundled();
    let mut rng = SystemRng::from_seed(7);

    let result = handle_record_kills(
        &kills("99", "Nobody", 10),
        &ruleset,
        &catalog,
        &mut rng,
        &repo,
    )
    .await;
    assert!(matches!(result, Err(DomainError::NotRegistered { .. })));

    let result = handle_get_score(
        &GetScore {
            correlation_id: Uuid::new_v4(),
            user_id: "99".to_owned(),
            char_name: "Nobody".to_owned(),
            guild: guild(),
        },
        &repo,
    )
    .await;
    assert!(matches!(result, Err(DomainError::NotRegistered { .. })));
}

#[tokio::test]
async fn test_characters_survive_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let ruleset = Ruleset::default();
    let catalog = MonsterCatalog::bundled();
    let mut rng = SystemRng::from_seed(11);

    {
        let repo = FileScoreRepository::new(dir.path());
        handle_register(
            &register("42", "Sniper", "James Paul mieft"),
            &ruleset,
            &catalog,
            &mut rng,
            &repo,
        )
        .await
        .unwrap();
        handle_record_kills(
            &kills("42", "James Paul mieft", 33),
            &ruleset,
            &catalog,
            &mut rng,
            &repo,
        )
        .await
        .unwrap();
    }

    // A new repository over the same directory sees the same state.
    let repo = FileScoreRepository::new(dir.path());
    let outcome = handle_register(
        &register("42", "Sniper", "James Paul mieft"),
        &ruleset,
        &catalog,
        &mut rng,
        &repo,
    )
    .await
    .unwrap();
    assert!(!outcome.created);
    assert_eq!(outcome.character.current_mission.kill_count, 33);
}

#[tokio::test]
async fn test_corrupt_guild_file_blocks_commands_without_rewrite() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileScoreRepository::new(dir.path());
    let ruleset = Ruleset::default();
    let catalog = MonsterCatalog::bundled();
    let mut rng = SystemRng::from_seed(7);

    let path = repo.score_file_path(&guild());
    std::fs::write(&path, "not a collection at all").unwrap();

    let result = handle_register(
        &register("42", "Knight", "Bob"),
        &ruleset,
        &catalog,
        &mut rng,
        &repo,
    )
    .await;

    assert!(matches!(result, Err(DomainError::CorruptStore { .. })));
    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, "not a collection at all");
}

#[tokio::test]
async fn test_concurrent_kill_updates_lose_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let repo = std::sync::Arc::new(FileScoreRepository::new(dir.path()));
    let ruleset = std::sync::Arc::new(Ruleset::default());
    let catalog = std::sync::Arc::new(MonsterCatalog::bundled());
    let mut rng = SystemRng::from_seed(7);

    handle_register(
        &register("42", "Knight", "Bob"),
        &ruleset,
        &catalog,
        &mut rng,
        repo.as_ref(),
    )
    .await
    .unwrap();
    handle_register(
        &register("7", "Wizard", "Mira"),
        &ruleset,
        &catalog,
        &mut rng,
        repo.as_ref(),
    )
    .await
    .unwrap();

    // Back-to-back updates for different characters in the same guild.
    let mut tasks = Vec::new();
    for (user_id, char_name, seed) in [("42", "Bob", 21_u64), ("7", "Mira", 22)] {
        let repo = std::sync::Arc::clone(&repo);
        let ruleset = std::sync::Arc::clone(&ruleset);
        let catalog = std::sync::Arc::clone(&catalog);
        tasks.push(tokio::spawn(async move {
            let mut rng = SystemRng::from_seed(seed);
            for _ in 0..5 {
                handle_record_kills(
                    &kills(user_id, char_name, 10),
                    &ruleset,
                    &catalog,
                    &mut rng,
                    repo.as_ref(),
                )
                .await
                .unwrap();
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    // Five updates of ten kills each, per character, none dropped.
    let collection = repo.load(&guild()).await.unwrap();
    for record in collection.records() {
        assert_eq!(record.current_mission.kill_count, 50);
    }
}
