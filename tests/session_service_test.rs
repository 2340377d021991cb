use std::sync::Arc;

use impostor::{
    models::{config::GameConfig, role::Role},
    services::words::StaticWords,
    utils::test_setup::setup_test_env,
    GameError, SessionController, Stage,
};

fn controller_with_words(words: &[&str], seed: u64) -> SessionController {
    setup_test_env();
    let config = GameConfig::default().with_seed(seed);
    SessionController::new(&config, Arc::new(StaticWords::new(words.iter().copied())))
}

async fn playing_controller(names: &[&str]) -> SessionController {
    let controller = controller_with_words(&["Pizza"], 17);
    for name in names {
        assert!(controller.add_participant(name).await);
    }
    controller.start_game().await.unwrap();
    controller
}

#[tokio::test]
async fn test_add_participant_dedups_and_trims() {
    let controller = controller_with_words(&["Pizza"], 1);

    assert!(controller.add_participant("Ana").await);
    assert!(!controller.add_participant("Ana").await);
    assert!(!controller.add_participant("  Ana  ").await);
    assert!(!controller.add_participant("   ").await);
    assert!(controller.add_participant("  Bea ").await);
    // 大文字小文字は区別する
    assert!(controller.add_participant("ana").await);

    let state = controller.snapshot().await;
    assert_eq!(state.roster, vec!["Ana", "Bea", "ana"]);
}

#[tokio::test]
async fn test_remove_absent_participant_is_noop() {
    let controller = controller_with_words(&["Pizza"], 1);
    controller.add_participant("Ana").await;

    assert!(!controller.remove_participant("Bea").await);
    assert_eq!(controller.snapshot().await.roster, vec!["Ana"]);

    assert!(controller.remove_participant("Ana").await);
    assert!(controller.snapshot().await.roster.is_empty());
}

#[tokio::test]
async fn test_start_requires_three_participants() {
    let controller = controller_with_words(&["Pizza"], 1);
    controller.add_participant("Ana").await;
    controller.add_participant("Bea").await;

    let before = controller.snapshot().await;
    let result = controller.start_game().await;
    assert_eq!(
        result,
        Err(GameError::InsufficientParticipants {
            required: 3,
            actual: 2
        })
    );
    assert_eq!(controller.snapshot().await, before);
    assert_eq!(before.stage, Stage::Setup);
    assert!(before.round.is_none());
}

#[tokio::test]
async fn test_start_game_deals_one_impostor() {
    let controller = playing_controller(&["A", "B", "C", "D"]).await;
    let state = controller.snapshot().await;

    assert_eq!(state.stage, Stage::Playing);
    let round = state.round.as_ref().unwrap();
    assert_eq!(round.len(), 4);
    let impostors = round
        .participants
        .iter()
        .filter(|p| p.role == Role::Impostor)
        .count();
    let pizzas = round
        .participants
        .iter()
        .filter(|p| p.role == Role::SecretWord("Pizza".to_string()))
        .count();
    assert_eq!(impostors, 1);
    assert_eq!(pizzas, 3);
    assert!(round.participants.iter().all(|p| !p.revealed));
    assert!(state.timers.is_empty());

    let first = state.first_player.as_ref().unwrap();
    assert!(state.roster.contains(first));
    assert!(!state.first_player_visible);
}

#[tokio::test]
async fn test_start_game_twice_is_rejected() {
    let controller = playing_controller(&["A", "B", "C"]).await;
    let before = controller.snapshot().await;

    let result = controller.start_game().await;
    assert_eq!(
        result,
        Err(GameError::InvalidStage {
            expected: Stage::Setup,
            actual: Stage::Playing
        })
    );
    assert_eq!(controller.snapshot().await, before);
}

#[tokio::test]
async fn test_empty_word_source_leaves_setup() {
    let controller = controller_with_words(&[], 1);
    for name in ["A", "B", "C"] {
        controller.add_participant(name).await;
    }

    assert_eq!(controller.start_game().await, Err(GameError::EmptyWordSource));
    let state = controller.snapshot().await;
    assert_eq!(state.stage, Stage::Setup);
    assert!(state.round.is_none());
    assert!(state.first_player.is_none());
}

#[tokio::test]
async fn test_roster_is_frozen_while_playing() {
    let controller = playing_controller(&["A", "B", "C"]).await;

    assert!(!controller.add_participant("D").await);
    assert!(!controller.remove_participant("A").await);
    assert_eq!(controller.snapshot().await.roster, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_new_round_outside_game_is_noop() {
    let controller = controller_with_words(&["Pizza"], 1);
    controller.add_participant("Ana").await;
    let before = controller.snapshot().await;

    assert_eq!(controller.new_round().await, Ok(()));
    assert_eq!(controller.snapshot().await, before);
}

#[tokio::test]
async fn test_new_round_replaces_round_and_rotates_first_player() {
    let controller = playing_controller(&["A", "B", "C", "D"]).await;

    for _ in 0..50 {
        let before = controller.snapshot().await;
        controller.new_round().await.unwrap();
        let after = controller.snapshot().await;

        assert_eq!(after.stage, Stage::Playing);
        let old_round = before.round.unwrap();
        let new_round = after.round.unwrap();
        assert!(new_round.generation > old_round.generation);
        assert_ne!(after.first_player, before.first_player);
        assert_eq!(after.roster, before.roster);
    }
}

#[tokio::test]
async fn test_shuffle_first_player_keeps_round() {
    let controller = playing_controller(&["A", "B", "C"]).await;

    for _ in 0..30 {
        let before = controller.snapshot().await;
        assert!(controller.shuffle_first_player().await);
        let after = controller.snapshot().await;

        assert_ne!(after.first_player, before.first_player);
        assert_eq!(after.round, before.round);
        assert_eq!(after.timers, before.timers);
    }
}

#[tokio::test]
async fn test_shuffle_first_player_in_setup_is_noop() {
    let controller = controller_with_words(&["Pizza"], 1);
    assert!(!controller.shuffle_first_player().await);
    assert!(controller.snapshot().await.first_player.is_none());
}

#[tokio::test]
async fn test_first_player_visibility_resets_on_new_round() {
    let controller = playing_controller(&["A", "B", "C"]).await;

    assert!(controller.toggle_first_player_visibility().await);
    assert!(controller.snapshot().await.first_player_visible);

    controller.new_round().await.unwrap();
    assert!(!controller.snapshot().await.first_player_visible);
}

#[tokio::test]
async fn test_toggle_reveal_ignores_bad_input() {
    let controller = controller_with_words(&["Pizza"], 1);
    assert!(!controller.toggle_reveal(0).await);

    for name in ["A", "B", "C"] {
        controller.add_participant(name).await;
    }
    controller.start_game().await.unwrap();

    let before = controller.snapshot().await;
    assert!(!controller.toggle_reveal(3).await);
    assert!(!controller.toggle_reveal(usize::MAX).await);
    assert_eq!(controller.snapshot().await, before);
}

#[tokio::test]
async fn test_reset_then_restart_is_independent() {
    let controller = playing_controller(&["A", "B", "C", "D"]).await;
    controller.toggle_reveal(0).await;
    controller.toggle_reveal(2).await;
    controller.toggle_first_player_visibility().await;
    let old_generation = controller.snapshot().await.round.unwrap().generation;

    controller.reset_session().await;
    let state = controller.snapshot().await;
    assert_eq!(state.stage, Stage::Setup);
    assert!(state.roster.is_empty());
    assert!(state.round.is_none());
    assert!(state.first_player.is_none());
    assert!(!state.first_player_visible);
    assert!(state.timers.is_empty());
    assert_eq!(controller.active_timers().await, 0);

    for name in ["A", "B", "C", "D"] {
        controller.add_participant(name).await;
    }
    controller.start_game().await.unwrap();
    let state = controller.snapshot().await;
    let round = state.round.unwrap();
    assert!(round.generation > old_generation);
    assert!(round.participants.iter().all(|p| !p.revealed));
    assert!(state.timers.is_empty());
    assert!(!state.first_player_visible);
}

#[tokio::test]
async fn test_seeded_sessions_deal_identically() {
    let first = playing_controller(&["A", "B", "C", "D", "E"]).await;
    let second = playing_controller(&["A", "B", "C", "D", "E"]).await;
    assert_eq!(first.snapshot().await, second.snapshot().await);
}
