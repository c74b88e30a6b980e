//! Core engine types: die ids, players, actions, face sources, configuration.
//!
//! Nothing in here knows the Farkle rules; the `scoring` and `rules` modules
//! build on these.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use entity::DieId;
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::{FaceSource, GameRng, ScriptedFaces};
pub use config::{EngineConfig, DICE_COUNT, WINNING_SCORE};
pub use action::{ActionRecord, TurnAction};
pub use error::EngineError;
