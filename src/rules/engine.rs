//! The Farkle turn engine.
//!
//! ## Turn flow
//!
//! ```text
//!            roll (potential)          bank (< 10 000)
//!   ┌──────────────┐            ┌──────────────────────────┐
//!   ▼              │            │                          ▼
//! ROLLING ─────────┴── bank ────┘         pass_turn ──► next player ROLLING
//!   │                   │
//!   │ roll (no 1, 5     │ bank (≥ 10 000)
//!   │ or triple)        ▼
//!   ▼                  WIN
//! FARKLE ── pass_turn ──► next player ROLLING
//! ```
//!
//! Illegal moves (toggling outside `Rolling`, unknown or banked dice,
//! banking with nothing accumulated) are ignored rather than reported.
//! Callers present legal moves by inspecting `status()` and die states.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{
    ActionRecord, DieId, EngineConfig, EngineError, FaceSource, GameRng, PlayerId, PlayerMap,
    TurnAction, WINNING_SCORE,
};
use crate::dice::{DiceSet, Die, DieState};
use crate::scoring::{evaluate_scoring, has_scoring_potential};

use super::snapshot::EngineSnapshot;

/// Game-visible phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The current player may select dice, roll or bank.
    Rolling,
    /// The last roll had nothing to keep; the turn's points are gone.
    Farkle,
    /// Never entered by the engine itself; available to callers.
    Bust,
    /// The current player reached the winning score.
    Win,
}

impl GameStatus {
    /// Whether the session is over.
    #[must_use]
    pub fn is_game_over(self) -> bool {
        match self {
            GameStatus::Win => true,
            GameStatus::Rolling | GameStatus::Farkle | GameStatus::Bust => false,
        }
    }
}

/// Farkle turn engine: scores, dice and the turn in progress.
///
/// Generic over where faces come from so tests can script rolls; real games
/// use the default [`GameRng`].
///
/// ## Example
///
/// ```
/// use farkle_engine::core::{DieId, ScriptedFaces};
/// use farkle_engine::rules::{FarkleEngine, GameStatus};
///
/// // Opening roll: three 2s, a 1, a 6, a 3
/// let faces = ScriptedFaces::new([2, 2, 2, 1, 6, 3]);
/// let mut engine = FarkleEngine::with_source(2, faces).unwrap();
/// assert_eq!(engine.status(), GameStatus::Rolling);
///
/// engine.toggle_keep(DieId::new(0)); // selects all three 2s
/// engine.toggle_keep(DieId::new(3)); // the 1
/// assert_eq!(engine.current_keep_score(), 300);
///
/// engine.bank();
/// assert_eq!(engine.player_scores(), &[300, 0]);
/// assert_eq!(engine.current_player_index(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct FarkleEngine<S: FaceSource = GameRng> {
    player_scores: PlayerMap<u32>,
    current_player: PlayerId,
    dice: DiceSet,
    turn_score: u32,
    current_keep_score: u32,
    status: GameStatus,
    message: String,
    turn_number: u32,
    history: Vector<ActionRecord>,
    next_sequence: u32,
    faces: S,
}

impl FarkleEngine<GameRng> {
    /// Build an engine with ChaCha8 dice, seeded from the config or from
    /// system entropy.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Self::with_source(config.player_count, GameRng::from_seed(config.seed))
    }

    /// Build an entropy-seeded engine for `player_count` players.
    pub fn with_players(player_count: usize) -> Result<Self, EngineError> {
        Self::new(&EngineConfig::new().with_players(player_count))
    }
}

impl<S: FaceSource> FarkleEngine<S> {
    /// Build an engine drawing faces from `faces`.
    ///
    /// The first player's opening roll happens here, so the engine is never
    /// observed before a roll has resolved.
    pub fn with_source(player_count: usize, faces: S) -> Result<Self, EngineError> {
        EngineConfig::new().with_players(player_count).validate()?;

        let mut engine = Self {
            player_scores: PlayerMap::with_value(player_count, 0),
            current_player: PlayerId::new(0),
            dice: DiceSet::new(),
            turn_score: 0,
            current_keep_score: 0,
            status: GameStatus::Rolling,
            message: String::new(),
            turn_number: 1,
            history: Vector::new(),
            next_sequence: 0,
            faces,
        };
        log::debug!("new game with {} players", player_count);
        engine.roll_dice();
        Ok(engine)
    }

    /// Rebuild an engine from a snapshot, drawing future faces from `faces`.
    ///
    /// The snapshot is validated; `current_keep_score` is recomputed from the
    /// kept dice rather than trusted. History starts empty.
    pub fn from_snapshot(snapshot: EngineSnapshot, faces: S) -> Result<Self, EngineError> {
        let parts = snapshot.validate()?;

        let mut engine = Self {
            player_scores: parts.player_scores,
            current_player: parts.current_player,
            dice: parts.dice,
            turn_score: parts.turn_score,
            current_keep_score: 0,
            status: parts.status,
            message: parts.message,
            turn_number: parts.turn_number,
            history: Vector::new(),
            next_sequence: 0,
            faces,
        };
        engine.recompute_keep_score();
        Ok(engine)
    }

    /// Capture the observable state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            player_scores: self.player_scores.as_slice().to_vec(),
            current_player_index: self.current_player.index(),
            dice: self.dice.as_slice().to_vec(),
            turn_score: self.turn_score,
            current_keep_score: self.current_keep_score,
            status: self.status,
            message: self.message.clone(),
            turn_number: self.turn_number,
        }
    }

    // === Operations ===

    /// Dispatch an action to the matching operation.
    pub fn apply(&mut self, action: TurnAction) {
        match action {
            TurnAction::Roll => self.roll(),
            TurnAction::ToggleKeep(id) => self.toggle_keep(id),
            TurnAction::RecalcKeepScore => self.recalc_keep_score(),
            TurnAction::Bank => self.bank(),
            TurnAction::PassTurn => self.pass_turn(),
        }
    }

    /// Lock the kept dice and roll the free ones.
    ///
    /// Kept dice become banked and their score joins the turn total. If
    /// every die is banked (hot hand) all six are freed first. A roll with
    /// no 1, no 5 and no three of a kind is a Farkle and wipes the turn.
    pub fn roll(&mut self) {
        self.record(TurnAction::Roll);
        self.roll_dice();
    }

    /// Select or deselect a die.
    ///
    /// Selection works on value groups: deselecting a kept die releases
    /// every kept die of that value, and selecting one of three or more
    /// matching dice selects a full triple.
    pub fn toggle_keep(&mut self, id: DieId) {
        self.record(TurnAction::ToggleKeep(id));
        self.toggle(id);
    }

    /// Recompute `current_keep_score` from the kept dice.
    pub fn recalc_keep_score(&mut self) {
        self.record(TurnAction::RecalcKeepScore);
        self.recompute_keep_score();
    }

    /// Bank the turn's points and, unless that wins, pass the dice on.
    ///
    /// Does nothing when neither kept dice nor earlier rolls have scored.
    pub fn bank(&mut self) {
        self.record(TurnAction::Bank);
        self.bank_turn();
    }

    /// End the turn without banking and roll for the next player.
    pub fn pass_turn(&mut self) {
        self.record(TurnAction::PassTurn);
        self.advance_turn();
    }

    // === Queries ===

    /// Score a hypothetical selection without touching the engine.
    #[must_use]
    pub fn evaluate_scoring(&self, values: &[u8]) -> u32 {
        evaluate_scoring(values)
    }

    /// Banked score per player, in seat order.
    #[must_use]
    pub fn player_scores(&self) -> &[u32] {
        self.player_scores.as_slice()
    }

    /// Banked score of one player.
    #[must_use]
    pub fn player_score(&self, player: PlayerId) -> u32 {
        self.player_scores[player]
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_scores.player_count()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player.index()
    }

    #[must_use]
    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    #[must_use]
    pub fn die(&self, id: DieId) -> Option<&Die> {
        self.dice.get(id)
    }

    /// Points locked in by earlier rolls this turn.
    #[must_use]
    pub fn turn_score(&self) -> u32 {
        self.turn_score
    }

    /// Points of the currently kept dice.
    #[must_use]
    pub fn current_keep_score(&self) -> u32 {
        self.current_keep_score
    }

    /// What banking right now would add.
    #[must_use]
    pub fn pending_score(&self) -> u32 {
        self.turn_score.saturating_add(self.current_keep_score)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Advisory text for display. Carries no game logic.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Turn counter, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every operation called on this engine, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The face source, e.g. to inspect a scripted sequence.
    #[must_use]
    pub fn face_source(&self) -> &S {
        &self.faces
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.is_game_over().then_some(self.current_player)
    }

    // === Transitions ===

    fn record(&mut self, action: TurnAction) {
        let record = ActionRecord::new(self.current_player, action, self.turn_number, self.next_sequence);
        self.next_sequence += 1;
        self.history.push_back(record);
    }

    fn roll_dice(&mut self) {
        self.dice.transition(DieState::Kept, DieState::Banked);
        self.turn_score = self.turn_score.saturating_add(self.current_keep_score);
        self.current_keep_score = 0;

        if self.dice.count_in(DieState::Rolled) == 0 {
            log::debug!("{} has hot dice at {} points", self.current_player, self.turn_score);
            self.dice.reset();
        }

        let rolled = self.dice.roll_free(&mut self.faces);

        if has_scoring_potential(&rolled) {
            log::debug!("{} rolled {:?}", self.current_player, rolled.as_slice());
            self.status = GameStatus::Rolling;
            self.message = format!("{}: keep scoring dice, then roll or bank.", self.current_player);
        } else {
            log::debug!(
                "{} farkled on {:?}, losing {} points",
                self.current_player,
                rolled.as_slice(),
                self.turn_score
            );
            self.turn_score = 0;
            self.current_keep_score = 0;
            self.status = GameStatus::Farkle;
            self.message = format!("Farkle! {} scores nothing this turn.", self.current_player);
        }
    }

    fn toggle(&mut self, id: DieId) {
        if self.status != GameStatus::Rolling {
            return;
        }
        let Some(&Die { value, state, .. }) = self.dice.get(id) else {
            return;
        };

        match state {
            DieState::Banked => return,
            DieState::Kept => {
                self.dice.transition_face(value, DieState::Kept, DieState::Rolled);
            }
            DieState::Rolled => {
                let rolled = self.dice.count_face(value, DieState::Rolled);
                let kept = self.dice.count_face(value, DieState::Kept);

                if rolled + kept >= 3 {
                    if kept < 3 {
                        self.dice.keep_face(value, 3 - kept);
                    } else {
                        self.keep_single(id);
                    }
                } else if value == 1 || value == 5 {
                    self.keep_single(id);
                }
            }
        }

        log::trace!("{} toggled {}, keep mask {:06b}", self.current_player, id, self.dice.kept_mask());
        self.recompute_keep_score();
    }

    fn keep_single(&mut self, id: DieId) {
        if let Some(die) = self.dice.get_mut(id) {
            die.state = DieState::Kept;
        }
    }

    fn recompute_keep_score(&mut self) {
        self.current_keep_score = evaluate_scoring(&self.dice.faces_in(DieState::Kept));
        log::trace!("keep score {}", self.current_keep_score);
    }

    fn bank_turn(&mut self) {
        if self.current_keep_score == 0 && self.turn_score == 0 {
            return;
        }

        self.turn_score = self.turn_score.saturating_add(self.current_keep_score);
        self.current_keep_score = 0;
        self.dice.transition(DieState::Kept, DieState::Banked);

        let player = self.current_player;
        let total = &mut self.player_scores[player];
        *total = total.saturating_add(self.turn_score);
        let total = *total;
        log::debug!("{} banked {} points, total {}", player, self.turn_score, total);

        if total >= WINNING_SCORE {
            log::debug!("{} wins with {}", player, total);
            self.status = GameStatus::Win;
            self.message = format!("{} wins with {} points!", player, total);
        } else {
            self.advance_turn();
        }
    }

    fn advance_turn(&mut self) {
        self.turn_score = 0;
        self.current_keep_score = 0;
        self.current_player = self.current_player.next(self.player_count());
        self.turn_number += 1;
        self.dice.reset();
        self.status = GameStatus::Rolling;
        log::debug!("turn {}: {} to roll", self.turn_number, self.current_player);
        self.roll_dice();
    }
}
