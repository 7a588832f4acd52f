//! QA tests for the daily puzzle and the user controls around it.

use chrono::{Duration, TimeZone, Utc};
use whosthat_core::testing::{mock_controller, MockCatalog};
use whosthat_core::{daily_id, GameConfig, GenerationLimit, Message, RoundPhase};

#[tokio::test]
async fn test_daily_round_matches_daily_id() {
    let (game, source, clock) = mock_controller(MockCatalog::gen_one());
    let mut game = game.with_config(GameConfig::new().with_daily(true));

    game.start().await;

    let expected = daily_id(
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        GenerationLimit::GEN_1,
    );
    assert_eq!(expected, 94);
    assert_eq!(game.round().map(|r| r.id), Some(expected));
    assert_eq!(source.entity_requests(), [expected]);

    // Same day, later hour: same puzzle.
    clock.advance(Duration::hours(11));
    game.start().await;
    assert_eq!(game.round().map(|r| r.id), Some(expected));
}

#[tokio::test]
async fn test_daily_round_changes_next_day() {
    let (game, _, clock) = mock_controller(MockCatalog::gen_one());
    let mut game = game.with_config(GameConfig::new().with_daily(true));

    game.start().await;
    let today = game.round().map(|r| r.id).unwrap();

    clock.set(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
    game.start().await;
    let tomorrow = game.round().map(|r| r.id).unwrap();

    assert_ne!(today, tomorrow);
    assert_eq!(tomorrow, today + 1);
}

#[tokio::test]
async fn test_daily_mode_shows_daily_message_while_loading() {
    let (game, _, _) = mock_controller(MockCatalog::gen_one());
    let mut game = game.with_config(GameConfig::new().with_daily(true));

    let ticket = game.begin_round();
    assert_eq!(game.message(), Some(&Message::DailyPuzzle));
    assert!(!game.view().last_round().unwrap().can_skip);

    game.finish_round(ticket).await;
    assert_eq!(game.message(), Some(&Message::GuessPrompt));
}

#[tokio::test]
async fn test_next_round_refused_in_daily_mode() {
    let (game, source, _) = mock_controller(MockCatalog::gen_one());
    let mut game = game.with_config(GameConfig::new().with_daily(true));
    game.start().await;

    assert!(!game.next_round().await);
    assert_eq!(game.message(), Some(&Message::SkipDisabled));
    assert_eq!(source.entity_requests().len(), 1);
    assert_eq!(game.phase(), RoundPhase::AwaitingGuess);

    // Forced reveal is still allowed.
    assert!(game.force_reveal());
}

#[tokio::test]
async fn test_failed_daily_fetch_can_be_retried() {
    let (game, source, _) = mock_controller(MockCatalog::gen_one().with_entity_failure());
    let mut game = game.with_config(GameConfig::new().with_daily(true));
    game.start().await;
    assert_eq!(game.message(), Some(&Message::ArtworkFailed));
    assert!(game.can_skip());

    // The retry replays the same day's puzzle.
    assert!(game.next_round().await);
    assert_eq!(source.entity_requests(), [94, 94]);
    assert_ne!(game.view().last_message(), Some(&Message::SkipDisabled));
}

#[tokio::test]
async fn test_next_round_allowed_in_random_mode() {
    let (mut game, source, _) = mock_controller(MockCatalog::gen_one());
    game.start().await;
    assert!(game.next_round().await);
    assert_eq!(source.entity_requests().len(), 2);
}

#[tokio::test]
async fn test_toggling_daily_restarts_round() {
    let (mut game, _, _) = mock_controller(MockCatalog::gen_one());
    game.start().await;
    let before = game.generation();

    let ticket = game.set_daily(true);
    assert!(game.config().daily);
    assert_eq!(ticket.id, 94);
    assert_eq!(game.generation(), before + 1);
    game.finish_round(ticket).await;
    assert_eq!(game.round().map(|r| r.id), Some(94));

    let ticket = game.set_daily(false);
    assert!(game.can_skip());
    game.finish_round(ticket).await;
    assert_eq!(game.phase(), RoundPhase::AwaitingGuess);
}

#[tokio::test]
async fn test_generation_change_clamps_and_restarts() {
    let (mut game, _, _) = mock_controller(MockCatalog::gen_one());

    let ticket = game.set_generation_limit(9999);
    assert_eq!(game.config().generation_limit, GenerationLimit::GEN_2);
    assert!(game.view().messages.contains(&Message::GenerationSet {
        limit: GenerationLimit::GEN_2
    }));
    assert!((1..=251).contains(&ticket.id));

    let ticket = game.set_generation_limit(0);
    assert_eq!(game.config().generation_limit.get(), 1);
    assert_eq!(ticket.id, 1);
    game.finish_round(ticket).await;
    assert_eq!(game.round().map(|r| r.name.as_str()), Some("bulbasaur"));
}

#[tokio::test]
async fn test_daily_respects_generation_limit() {
    let (game, _, _) = mock_controller(MockCatalog::gen_one());
    let mut game = game.with_config(GameConfig::new().with_daily(true));

    // 19723 % 251 == 145
    let ticket = game.set_generation_limit(251);
    assert_eq!(ticket.id, 146);

    // 19723 % 10 == 3
    let ticket = game.set_generation_limit(10);
    assert_eq!(ticket.id, 4);
    game.finish_round(ticket).await;
    assert_eq!(game.round().map(|r| r.name.as_str()), Some("charmander"));
}
