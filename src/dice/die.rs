//! A single die and the six-die set.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DieId, FaceSource, DICE_COUNT};

/// Faces of up to six dice without heap allocation.
pub type Faces = SmallVec<[u8; DICE_COUNT]>;

/// Where a die sits within the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieState {
    /// Free: will be rerolled, may be selected.
    Rolled,
    /// Selected this roll; counts toward the keep score, may be deselected.
    Kept,
    /// Locked in by an earlier roll this turn.
    Banked,
}

impl DieState {
    /// Numeric code used by observation vectors: 0, 1, 2.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            DieState::Rolled => 0,
            DieState::Kept => 1,
            DieState::Banked => 2,
        }
    }
}

/// One die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    pub id: DieId,
    pub value: u8,
    pub state: DieState,
}

impl Die {
    #[must_use]
    pub const fn new(id: DieId, value: u8, state: DieState) -> Self {
        Self { id, value, state }
    }
}

/// The six dice, stored in id order so `dice[id]` is the die with that id.
///
/// The array length makes "exactly six dice" a type-level fact; ids are
/// assigned by [`DiceSet::new`] and no method changes them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSet {
    dice: [Die; DICE_COUNT],
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceSet {
    /// Six dice showing 1, all `Rolled`.
    #[must_use]
    pub fn new() -> Self {
        let mut dice = [Die::new(DieId(0), 1, DieState::Rolled); DICE_COUNT];
        for (i, die) in dice.iter_mut().enumerate() {
            die.id = DieId(i as u8);
        }
        Self { dice }
    }

    /// Build from dice already in id order. Caller checks the ids.
    pub(crate) fn from_ordered(dice: [Die; DICE_COUNT]) -> Self {
        debug_assert!(dice.iter().enumerate().all(|(i, d)| d.id.index() == i));
        Self { dice }
    }

    /// Dice in id order.
    #[must_use]
    pub fn as_slice(&self) -> &[Die] {
        &self.dice
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }

    /// Look up a die. `None` for ids outside `0..6`.
    #[must_use]
    pub fn get(&self, id: DieId) -> Option<&Die> {
        self.dice.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: DieId) -> Option<&mut Die> {
        self.dice.get_mut(id.index())
    }

    /// Faces of every die in `state`, in id order.
    #[must_use]
    pub fn faces_in(&self, state: DieState) -> Faces {
        self.dice
            .iter()
            .filter(|d| d.state == state)
            .map(|d| d.value)
            .collect()
    }

    /// Number of dice in `state`.
    #[must_use]
    pub fn count_in(&self, state: DieState) -> usize {
        self.dice.iter().filter(|d| d.state == state).count()
    }

    /// Number of dice in `state` showing `value`.
    #[must_use]
    pub fn count_face(&self, value: u8, state: DieState) -> usize {
        self.dice
            .iter()
            .filter(|d| d.value == value && d.state == state)
            .count()
    }

    /// Move every die in `from` to `to`.
    pub(crate) fn transition(&mut self, from: DieState, to: DieState) {
        for die in self.dice.iter_mut().filter(|d| d.state == from) {
            die.state = to;
        }
    }

    /// Move every die showing `value` from `from` to `to`.
    pub(crate) fn transition_face(&mut self, value: u8, from: DieState, to: DieState) {
        for die in self.dice.iter_mut().filter(|d| d.value == value && d.state == from) {
            die.state = to;
        }
    }

    /// Keep up to `count` rolled dice showing `value`, lowest id first.
    pub(crate) fn keep_face(&mut self, value: u8, count: usize) {
        self.dice
            .iter_mut()
            .filter(|d| d.value == value && d.state == DieState::Rolled)
            .take(count)
            .for_each(|d| d.state = DieState::Kept);
    }

    /// Put every die back to `Rolled`.
    pub(crate) fn reset(&mut self) {
        for die in &mut self.dice {
            die.state = DieState::Rolled;
        }
    }

    /// Give every `Rolled` die a fresh face; returns the new faces.
    pub(crate) fn roll_free<S: FaceSource>(&mut self, source: &mut S) -> Faces {
        self.dice
            .iter_mut()
            .filter(|d| d.state == DieState::Rolled)
            .map(|d| {
                d.value = source.next_face();
                d.value
            })
            .collect()
    }

    /// Keep mask: bit `i` set when die `i` is `Kept`.
    #[must_use]
    pub fn kept_mask(&self) -> u8 {
        self.dice
            .iter()
            .filter(|d| d.state == DieState::Kept)
            .fold(0, |mask, d| mask | d.id.mask_bit())
    }
}

impl std::ops::Index<DieId> for DiceSet {
    type Output = Die;

    fn index(&self, id: DieId) -> &Self::Output {
        &self.dice[id.index()]
    }
}
