//! QA tests for autocomplete through the controller.

use whosthat_core::testing::{mock_controller, MockCatalog, GEN_ONE_SAMPLE};
use whosthat_core::{normalize, GameConfig, MAX_SUGGESTIONS};

#[tokio::test]
async fn test_saur_scenario() {
    let (game, _, _) = mock_controller(MockCatalog::gen_one());
    let mut game = game.with_config(GameConfig::new().with_generation_limit(10));
    game.load_catalog().await;

    assert_eq!(
        game.suggestions("saur"),
        ["bulbasaur", "ivysaur", "venusaur"]
    );
}

#[tokio::test]
async fn test_empty_query_is_empty() {
    let (mut game, _, _) = mock_controller(MockCatalog::gen_one());
    game.load_catalog().await;
    assert!(game.suggestions("").is_empty());
}

#[tokio::test]
async fn test_suggestions_bounded_and_matching() {
    let (mut game, _, _) = mock_controller(MockCatalog::gen_one());
    game.load_catalog().await;

    for query in ["a", "e", "mon", "char", "Saur!", "zzz"] {
        let suggestions = game.suggestions(query);
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        let q = normalize(query);
        for name in &suggestions {
            assert!(normalize(name).contains(&q), "{name} does not match {query}");
            let id = game.catalog().id_of(name).unwrap();
            assert!(id <= game.config().generation_limit.get());
        }
    }
}

#[tokio::test]
async fn test_suggestions_before_catalog_loaded() {
    let (game, _, _) = mock_controller(MockCatalog::gen_one());
    assert!(game.suggestions("saur").is_empty());
}

#[tokio::test]
async fn test_update_suggestions_renders_to_view() {
    let (mut game, _, _) = mock_controller(MockCatalog::new(GEN_ONE_SAMPLE.iter().copied()));
    game.load_catalog().await;

    assert_eq!(game.update_suggestions("squirt"), 1);
    assert_eq!(game.view().last_suggestions(), Some(&["squirtle".to_string()][..]));

    assert_eq!(game.update_suggestions(""), 0);
    assert_eq!(game.view().last_suggestions(), Some(&[][..]));
}

#[tokio::test]
async fn test_suggestions_cleared_on_new_round_and_reveal() {
    let (mut game, _, _) = mock_controller(MockCatalog::gen_one());
    game.load_catalog().await;
    game.update_suggestions("char");

    let ticket = game.begin_round();
    assert!(game.view().last_suggestions().unwrap().is_empty());

    game.finish_round(ticket).await;
    game.update_suggestions("char");
    game.force_reveal();
    assert!(game.view().last_suggestions().unwrap().is_empty());
}
