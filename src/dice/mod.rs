//! Dice: the six-die set and each die's per-turn state.

mod die;

pub use die::{DiceSet, Die, DieState, Faces};
