//! Engine snapshots.
//!
//! A snapshot is the engine's observable state as plain data. It is how a
//! game is checkpointed (via `bincode`) and how tests set up positions such
//! as "player 0 sits at 9 500 with two 5s kept" without reaching into the
//! engine's fields. Restoring validates every invariant the engine relies on.

use serde::{Deserialize, Serialize};

use crate::core::{DieId, EngineError, PlayerId, PlayerMap, DICE_COUNT};
use crate::dice::{DiceSet, Die, DieState};

use super::engine::GameStatus;

/// Observable engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub player_scores: Vec<u32>,
    pub current_player_index: usize,
    /// Any order; restored into id order.
    pub dice: Vec<Die>,
    pub turn_score: u32,
    /// Informational; recomputed from the kept dice on restore.
    pub current_keep_score: u32,
    pub status: GameStatus,
    pub message: String,
    pub turn_number: u32,
}

/// Validated pieces of a snapshot, ready to seed an engine.
pub(crate) struct SnapshotParts {
    pub player_scores: PlayerMap<u32>,
    pub current_player: PlayerId,
    pub dice: DiceSet,
    pub turn_score: u32,
    pub status: GameStatus,
    pub message: String,
    pub turn_number: u32,
}

impl EngineSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode. The result is not validated until restored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Replace the faces of all six dice, in id order. States are kept.
    ///
    /// Handy for setting up a position:
    ///
    /// ```
    /// use farkle_engine::core::ScriptedFaces;
    /// use farkle_engine::dice::DieState;
    /// use farkle_engine::rules::FarkleEngine;
    ///
    /// let engine = FarkleEngine::with_source(2, ScriptedFaces::new([1])).unwrap();
    /// let snapshot = engine.snapshot().with_faces([2, 2, 2, 3, 4, 6]);
    /// let restored = FarkleEngine::from_snapshot(snapshot, ScriptedFaces::new([1])).unwrap();
    ///
    /// let faces = restored.dice().faces_in(DieState::Rolled);
    /// assert_eq!(faces.as_slice(), &[2, 2, 2, 3, 4, 6]);
    /// ```
    #[must_use]
    pub fn with_faces(mut self, faces: [u8; DICE_COUNT]) -> Self {
        self.dice.sort_by_key(|d| d.id);
        for (die, face) in self.dice.iter_mut().zip(faces) {
            die.value = face;
        }
        self
    }

    pub(crate) fn validate(self) -> Result<SnapshotParts, EngineError> {
        let player_count = self.player_scores.len();
        let player_scores = PlayerMap::from_vec(self.player_scores)
            .ok_or(EngineError::InvalidPlayerCount(player_count))?;

        if self.current_player_index >= player_count {
            return Err(EngineError::InvalidPlayerIndex {
                index: self.current_player_index,
                player_count,
            });
        }

        if self.dice.len() != DICE_COUNT {
            return Err(EngineError::InvalidDiceCount(self.dice.len()));
        }

        let mut slots: [Option<Die>; DICE_COUNT] = [None; DICE_COUNT];
        for die in self.dice {
            if !(1..=6).contains(&die.value) {
                return Err(EngineError::InvalidFace { die: die.id.0, value: die.value });
            }
            match slots.get_mut(die.id.index()) {
                Some(slot @ None) => *slot = Some(die),
                _ => return Err(EngineError::InvalidDieIds),
            }
        }

        let mut ordered = [Die::new(DieId(0), 1, DieState::Rolled); DICE_COUNT];
        for (out, slot) in ordered.iter_mut().zip(slots) {
            *out = slot.ok_or(EngineError::InvalidDieIds)?;
        }

        Ok(SnapshotParts {
            player_scores,
            current_player: PlayerId::new(self.current_player_index as u8),
            dice: DiceSet::from_ordered(ordered),
            turn_score: self.turn_score,
            status: self.status,
            message: self.message,
            turn_number: self.turn_number,
        })
    }
}
