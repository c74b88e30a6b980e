//! Pure scoring: face multiset in, points out.
//!
//! Used by the turn engine for kept dice and by callers previewing a
//! hypothetical selection. Nothing here touches engine state.

mod evaluate;

pub use evaluate::{evaluate_scoring, has_scoring_potential, triple_base, FaceCounts};
