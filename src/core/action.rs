//! Turn actions and their history records.
//!
//! Every operation a caller can invoke on the engine has a `TurnAction`
//! variant, so a whole game can be logged, replayed or fed to an agent as
//! plain data.

use serde::{Deserialize, Serialize};

use super::entity::DieId;
use super::player::PlayerId;

/// One caller-invoked engine operation.
///
/// ## Example
///
/// ```
/// use farkle_engine::core::{DieId, TurnAction};
///
/// let keep = TurnAction::ToggleKeep(DieId::new(2));
/// assert_eq!(keep.die(), Some(DieId::new(2)));
/// assert_eq!(TurnAction::Bank.die(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// Lock kept dice and roll the rest.
    Roll,
    /// Select or deselect a die (and its value group).
    ToggleKeep(DieId),
    /// Recompute the kept-dice score.
    RecalcKeepScore,
    /// Bank the turn's points.
    Bank,
    /// Forfeit the turn and hand the dice on.
    PassTurn,
}

impl TurnAction {
    /// The die this action targets, if any.
    #[must_use]
    pub fn die(self) -> Option<DieId> {
        match self {
            TurnAction::ToggleKeep(id) => Some(id),
            TurnAction::Roll
            | TurnAction::RecalcKeepScore
            | TurnAction::Bank
            | TurnAction::PassTurn => None,
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay, debugging and training data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// The action taken.
    pub action: TurnAction,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Game-wide sequence number (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: TurnAction, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
