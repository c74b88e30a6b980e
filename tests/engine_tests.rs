//! Turn engine integration tests: full turn scenarios driven by scripted dice.

use farkle_engine::core::{DieId, EngineConfig, EngineError, FaceSource, PlayerId, ScriptedFaces, TurnAction};
use farkle_engine::dice::DieState;
use farkle_engine::rules::{EngineSnapshot, FarkleEngine, GameStatus};

fn scripted(player_count: usize, faces: &[u8]) -> FarkleEngine<ScriptedFaces> {
    FarkleEngine::with_source(player_count, ScriptedFaces::new(faces.iter().copied())).unwrap()
}

/// Restore `snapshot` with future rolls drawn from `faces`.
fn restore(snapshot: EngineSnapshot, faces: &[u8]) -> FarkleEngine<ScriptedFaces> {
    FarkleEngine::from_snapshot(snapshot, ScriptedFaces::new(faces.iter().copied())).unwrap()
}

fn states<S: FaceSource>(engine: &FarkleEngine<S>) -> Vec<DieState> {
    engine.dice().iter().map(|d| d.state).collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_default_config_two_players() {
    let engine = FarkleEngine::new(&EngineConfig::default()).unwrap();

    assert_eq!(engine.player_count(), 2);
    assert_eq!(engine.player_scores(), &[0, 0]);
    assert_eq!(engine.dice().as_slice().len(), 6);
    assert!(matches!(engine.status(), GameStatus::Rolling | GameStatus::Farkle));
}

#[test]
fn test_zero_players_is_an_error() {
    let err = FarkleEngine::with_players(0).unwrap_err();
    assert_eq!(err, EngineError::InvalidPlayerCount(0));
    assert!(err.to_string().contains("1-255"));
}

#[test]
fn test_opening_roll_resolved_on_construction() {
    let engine = scripted(2, &[2, 3, 5, 4, 6, 6]);

    let values: Vec<u8> = engine.dice().iter().map(|d| d.value).collect();
    assert_eq!(values, vec![2, 3, 5, 4, 6, 6]);
    assert_eq!(engine.status(), GameStatus::Rolling);
    assert!(!engine.message().is_empty());
}

// =============================================================================
// Farkle
// =============================================================================

#[test]
fn test_farkle_forfeits_turn() {
    // A kept 1 and 5 worth 150, then four fresh dice with nothing.
    let snapshot = scripted(2, &[1, 5, 2, 3, 4, 6]).snapshot();
    let mut engine = restore(snapshot, &[2, 3, 4, 6, 2, 3]);

    engine.toggle_keep(DieId(0));
    engine.toggle_keep(DieId(1));
    assert_eq!(engine.current_keep_score(), 150);

    engine.roll();
    assert_eq!(engine.status(), GameStatus::Farkle);
    assert_eq!(engine.turn_score(), 0);
    assert_eq!(engine.current_keep_score(), 0);

    // Nothing left to bank.
    engine.bank();
    assert_eq!(engine.player_scores(), &[0, 0]);
    assert_eq!(engine.current_player_index(), 0);
}

#[test]
fn test_farkle_only_checks_newly_rolled_dice() {
    // Three banked 1s do not save a roll of 2, 3, 4.
    let mut snapshot = scripted(2, &[1]).snapshot().with_faces([1, 1, 1, 2, 2, 2]);
    for die in &mut snapshot.dice[..3] {
        die.state = DieState::Banked;
    }
    snapshot.turn_score = 1000;
    let mut engine = restore(snapshot, &[2, 3, 4]);

    engine.roll();
    assert_eq!(engine.status(), GameStatus::Farkle);
    assert_eq!(engine.turn_score(), 0);
}

#[test]
fn test_pass_after_farkle_resumes_rolling() {
    let mut engine = scripted(3, &[2, 3, 4, 6, 2, 3, 1, 2, 3, 4, 6, 6]);
    assert_eq!(engine.status(), GameStatus::Farkle);

    engine.pass_turn();
    assert_eq!(engine.status(), GameStatus::Rolling);
    assert_eq!(engine.current_player(), PlayerId::new(1));
    assert!(states(&engine).iter().all(|&s| s == DieState::Rolled));
}

// =============================================================================
// Rolling and hot hand
// =============================================================================

#[test]
fn test_roll_folds_keep_score_exactly_once() {
    let mut engine = scripted(2, &[1, 1, 2, 3, 4, 6, 5, 5, 2, 3]);

    engine.toggle_keep(DieId(0));
    engine.toggle_keep(DieId(1));
    engine.roll();
    assert_eq!(engine.turn_score(), 200);

    engine.toggle_keep(DieId(2));
    engine.roll();
    assert_eq!(engine.turn_score(), 250);
    assert_eq!(engine.current_keep_score(), 0);
}

#[test]
fn test_hot_hand() {
    let mut engine = scripted(2, &[2, 2, 2, 6, 6, 6, 5, 3, 3, 4, 4, 2]);

    engine.toggle_keep(DieId(0));
    engine.toggle_keep(DieId(3));
    assert_eq!(engine.current_keep_score(), 800);

    engine.roll();

    assert!(states(&engine).iter().all(|&s| s == DieState::Rolled));
    let values: Vec<u8> = engine.dice().iter().map(|d| d.value).collect();
    assert_eq!(values, vec![5, 3, 3, 4, 4, 2]);
    assert_eq!(engine.turn_score(), 800);
    assert_eq!(engine.status(), GameStatus::Rolling);
    assert_eq!(engine.face_source().consumed(), 12);
}

#[test]
fn test_hot_hand_after_several_rolls() {
    // 1 banked, then 5 dice: 5, 5, 5, 1, 1 all kept.
    let mut engine = scripted(2, &[1, 2, 3, 4, 6, 6, 5, 5, 5, 1, 1, 3, 3, 3, 2, 4, 6]);

    engine.toggle_keep(DieId(0));
    engine.roll();
    engine.toggle_keep(DieId(1));
    engine.toggle_keep(DieId(4));
    engine.toggle_keep(DieId(5));
    assert_eq!(engine.current_keep_score(), 700);

    engine.roll();
    assert_eq!(engine.turn_score(), 800);
    assert_eq!(engine.dice().count_in(DieState::Rolled), 6);
    assert_eq!(engine.status(), GameStatus::Rolling);
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_grouped_toggle_keeps_triple() {
    let mut engine = scripted(2, &[4, 1, 4, 2, 4, 6]);

    engine.toggle_keep(DieId(4));

    assert_eq!(
        states(&engine),
        vec![
            DieState::Kept,
            DieState::Rolled,
            DieState::Kept,
            DieState::Rolled,
            DieState::Kept,
            DieState::Rolled,
        ]
    );
    assert_eq!(engine.current_keep_score(), 400);
}

#[test]
fn test_untoggle_single_one_releases_all_kept_ones() {
    let mut engine = scripted(2, &[1, 1, 2, 3, 4, 6]);

    engine.toggle_keep(DieId(0));
    engine.toggle_keep(DieId(1));
    engine.toggle_keep(DieId(0));

    assert_eq!(engine.dice().count_in(DieState::Kept), 0);
    assert_eq!(engine.current_keep_score(), 0);
}

#[test]
fn test_keep_score_matches_kept_dice_after_every_toggle() {
    let mut engine = scripted(2, &[5, 5, 5, 5, 1, 3]);

    for id in [0, 3, 4, 0, 4, 1, 5, 2, 0] {
        engine.toggle_keep(DieId(id));
        let kept = engine.dice().faces_in(DieState::Kept);
        assert_eq!(engine.current_keep_score(), engine.evaluate_scoring(&kept));
    }
}

#[test]
fn test_preview_does_not_change_state() {
    let engine = scripted(2, &[1, 2, 3, 4, 6, 6]);
    let before = engine.snapshot();

    assert_eq!(engine.evaluate_scoring(&[1, 1, 1, 1]), 2000);
    assert_eq!(engine.snapshot(), before);
}

// =============================================================================
// Banking and winning
// =============================================================================

#[test]
fn test_win_on_bank() {
    // 500 banked earlier this turn, a kept 1 for 100 more.
    let mut snapshot = scripted(2, &[1, 5, 5, 5, 2, 3]).snapshot();
    snapshot.player_scores = vec![9500, 4000];
    snapshot.turn_score = 500;
    snapshot.dice[0].state = DieState::Kept;
    for die in &mut snapshot.dice[1..4] {
        die.state = DieState::Banked;
    }
    let mut engine = restore(snapshot, &[6]);
    assert_eq!(engine.current_keep_score(), 100);

    engine.bank();

    assert_eq!(engine.player_scores(), &[10100, 4000]);
    assert_eq!(engine.status(), GameStatus::Win);
    assert_eq!(engine.current_player_index(), 0);
    assert_eq!(engine.winner(), Some(PlayerId::new(0)));
    assert_eq!(engine.face_source().consumed(), 0);
    assert!(states(&engine).iter().all(|&s| s == DieState::Banked || s == DieState::Rolled));
}

#[test]
fn test_bank_below_threshold_passes() {
    let mut snapshot = scripted(3, &[1, 2, 3, 4, 6, 6]).snapshot();
    snapshot.player_scores = vec![9000, 0, 0];
    let mut engine = restore(snapshot, &[5, 2, 3, 4, 6, 6]);

    engine.toggle_keep(DieId(0));
    engine.bank();

    assert_eq!(engine.player_scores(), &[9100, 0, 0]);
    assert_eq!(engine.status(), GameStatus::Rolling);
    assert_eq!(engine.current_player_index(), 1);
    assert_eq!(engine.winner(), None);
}

#[test]
fn test_bank_banked_turn_score_only() {
    // Kept dice rolled over, nothing newly kept: turn score alone is bankable.
    let mut engine = scripted(2, &[1, 2, 3, 4, 6, 6, 2, 3, 5, 4, 6]);

    engine.toggle_keep(DieId(0));
    engine.roll();
    assert_eq!(engine.current_keep_score(), 0);

    engine.bank();
    assert_eq!(engine.player_scores(), &[100, 0]);
}

#[test]
fn test_turn_rotation_many_players() {
    let mut engine = scripted(5, &[1, 2, 3, 4, 6, 6]);

    let mut seen = Vec::new();
    for _ in 0..10 {
        seen.push(engine.current_player_index());
        engine.pass_turn();
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4]);
    assert_eq!(engine.turn_number(), 11);
}

// =============================================================================
// History and snapshots
// =============================================================================

#[test]
fn test_history_replays_on_same_dice() {
    let faces = [1, 5, 5, 2, 3, 4, 1, 1, 6, 2, 5, 5, 3, 3];
    let mut a = scripted(2, &faces);

    a.toggle_keep(DieId(0));
    a.roll();
    a.toggle_keep(DieId(1));
    a.bank();
    a.toggle_keep(DieId(2));
    a.pass_turn();

    let mut b = scripted(2, &faces);
    for record in a.history().iter() {
        b.apply(record.action);
    }

    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(b.history().len(), 6);
    assert_eq!(a.history()[4].player, PlayerId::new(1));
    assert_eq!(a.history()[4].action, TurnAction::ToggleKeep(DieId(2)));
}

#[test]
fn test_snapshot_bytes_restore() {
    let mut engine = FarkleEngine::new(&EngineConfig::new().with_players(4).with_seed(11)).unwrap();
    engine.pass_turn();
    engine.pass_turn();

    let bytes = engine.snapshot().to_bytes().unwrap();
    let restored = restore(EngineSnapshot::from_bytes(&bytes).unwrap(), &[1]);

    assert_eq!(restored.snapshot(), engine.snapshot());
    assert_eq!(restored.current_player_index(), 2);
}

#[test]
fn test_snapshot_json_round_trip() {
    let engine = scripted(2, &[1, 2, 3, 4, 6, 6]);
    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    let snapshot: EngineSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(snapshot, engine.snapshot());
}
