//! Farkle rules: the turn engine and its snapshots.
//!
//! The engine owns all game state and exposes it read-only. Callers drive
//! it with `roll`, `toggle_keep`, `recalc_keep_score`, `bank` and
//! `pass_turn`, or with the equivalent `TurnAction` values via `apply`.

pub mod engine;
pub mod snapshot;

pub use engine::{FarkleEngine, GameStatus};
pub use snapshot::EngineSnapshot;
