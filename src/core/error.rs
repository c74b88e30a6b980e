//! Construction and restore failures.
//!
//! Illegal moves during play are silent no-ops and never surface here.
//! `EngineError` only reports setups that would break the engine's
//! invariants if accepted.

/// Errors raised when building or restoring an engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Player count outside `1..=255`.
    InvalidPlayerCount(usize),
    /// Snapshot did not hold exactly six dice.
    InvalidDiceCount(usize),
    /// Snapshot die ids were not a permutation of `0..6`.
    InvalidDieIds,
    /// Face value outside `1..=6`.
    InvalidFace { die: u8, value: u8 },
    /// Current player index past the end of the score table.
    InvalidPlayerIndex { index: usize, player_count: usize },
    /// Discrete action outside the environment's action space.
    InvalidAction(usize),
    /// Snapshot bytes could not be encoded or decoded.
    Codec(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPlayerCount(n) => write!(f, "player count must be 1-255, got {}", n),
            Self::InvalidDiceCount(n) => write!(f, "expected 6 dice, got {}", n),
            Self::InvalidDieIds => write!(f, "die ids must be a permutation of 0..6"),
            Self::InvalidFace { die, value } => write!(f, "die {} has face {} outside 1..=6", die, value),
            Self::InvalidPlayerIndex { index, player_count } => {
                write!(f, "player index {} out of range for {} players", index, player_count)
            }
            Self::InvalidAction(a) => write!(f, "action {} outside the action space", a),
            Self::Codec(s) => write!(f, "snapshot codec: {}", s),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        Self::Codec(err.to_string())
    }
}
