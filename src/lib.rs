//! # farkle-engine
//!
//! Rules engine for the dice game Farkle, plus a training environment.
//!
//! ## Design Principles
//!
//! 1. **Operations, not fields**: all state sits behind `roll`,
//!    `toggle_keep`, `recalc_keep_score`, `bank` and `pass_turn`, with
//!    read-only accessors. The kept-dice score is always recomputed from
//!    the kept dice.
//!
//! 2. **Illegal moves are no-ops**: toggling a banked die or banking an
//!    empty turn changes nothing. Only construction can fail.
//!
//! 3. **Injected dice**: the engine draws faces from a `FaceSource`, so
//!    games are reproducible from a seed and tests can script every roll.
//!
//! ## Modules
//!
//! - `core`: Die ids, players, actions, face sources, configuration, errors
//! - `dice`: The six-die set and per-die turn state
//! - `scoring`: Pure scoring of a face multiset
//! - `rules`: The turn engine and snapshots
//! - `nn`: Observation encoding for policy networks
//! - `training`: Step-based RL environment

pub mod core;
pub mod dice;
pub mod scoring;
pub mod rules;
pub mod nn;
pub mod training;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, DieId, EngineConfig, EngineError, FaceSource, GameRng, PlayerId, PlayerMap,
    ScriptedFaces, TurnAction, DICE_COUNT, WINNING_SCORE,
};

pub use crate::dice::{DiceSet, Die, DieState};

pub use crate::scoring::{evaluate_scoring, has_scoring_potential};

pub use crate::rules::{EngineSnapshot, FarkleEngine, GameStatus};

pub use crate::nn::{Observation, ObservationEncoder};

pub use crate::training::{EnvAction, EnvConfig, FarkleEnv, StepInfo, StepResult};
