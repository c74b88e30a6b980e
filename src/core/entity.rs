//! Die identification.
//!
//! The six dice carry ids `0..6`, assigned once when the engine is built.
//! Ids never change and are never reused; a die keeps its id across rolls,
//! hot hands and turns.
//!
//! ```
//! use farkle_engine::core::DieId;
//!
//! let ids: Vec<_> = DieId::all().collect();
//! assert_eq!(ids.len(), 6);
//! assert_eq!(ids[5], DieId::new(5));
//! assert!(!DieId::new(6).is_valid());
//! ```

use serde::{Deserialize, Serialize};

use super::config::DICE_COUNT;

/// Stable identifier of one of the six dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DieId(pub u8);

impl DieId {
    /// Create a die ID. Out-of-range ids are representable; operations
    /// given one simply find no die.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Position of this die in id order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether a die with this id exists.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.index() < DICE_COUNT
    }

    /// Bit for this die in a keep mask.
    #[must_use]
    pub const fn mask_bit(self) -> u8 {
        1 << self.0
    }

    /// All six die ids in order.
    pub fn all() -> impl Iterator<Item = DieId> {
        (0..DICE_COUNT as u8).map(DieId)
    }
}

impl std::fmt::Display for DieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "die {}", self.0)
    }
}
