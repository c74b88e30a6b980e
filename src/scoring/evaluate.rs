//! Scoring a multiset of die faces.
//!
//! | Combination             | Points                          |
//! |-------------------------|---------------------------------|
//! | single 1                | 100                             |
//! | single 5                | 50                              |
//! | three 1s                | 1000                            |
//! | three of face `n` (≠1)  | `n * 100`                       |
//! | each die beyond three   | doubles the triple              |
//!
//! Once a face reaches three of a kind, none of its dice also score as
//! singles. 2, 3, 4 and 6 score nothing below three of a kind.

/// Occurrences of each face; index 0 is unused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceCounts([u8; 7]);

impl FaceCounts {
    /// Tally faces. Values outside `1..=6` are ignored.
    pub fn tally(values: &[u8]) -> Self {
        let mut counts = [0u8; 7];
        for &v in values {
            if (1..=6).contains(&v) {
                counts[v as usize] = counts[v as usize].saturating_add(1);
            }
        }
        Self(counts)
    }

    /// How many dice show `face`.
    #[must_use]
    pub fn get(&self, face: u8) -> u8 {
        self.0.get(face as usize).copied().unwrap_or(0)
    }

    /// `(face, count)` for faces 1 through 6.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (1..=6u8).map(move |face| (face, self.0[face as usize]))
    }
}

/// Value of three of a kind of `face`.
#[must_use]
pub const fn triple_base(face: u8) -> u32 {
    if face == 1 {
        1000
    } else {
        face as u32 * 100
    }
}

/// Points for the given faces.
///
/// ```
/// use farkle_engine::scoring::evaluate_scoring;
///
/// assert_eq!(evaluate_scoring(&[]), 0);
/// assert_eq!(evaluate_scoring(&[1, 5]), 150);
/// assert_eq!(evaluate_scoring(&[4, 4, 4, 4]), 800);
/// assert_eq!(evaluate_scoring(&[2, 3, 4, 6, 1, 5]), 150);
/// ```
#[must_use]
pub fn evaluate_scoring(values: &[u8]) -> u32 {
    FaceCounts::tally(values)
        .iter()
        .map(|(face, count)| match (face, count) {
            (_, n) if n >= 3 => triple_base(face).saturating_mul(2u32.saturating_pow(u32::from(n - 3))),
            (1, n) => u32::from(n) * 100,
            (5, n) => u32::from(n) * 50,
            _ => 0,
        })
        .fold(0, u32::saturating_add)
}

/// Whether a fresh roll offers anything to keep: a 1, a 5, or three of a kind.
///
/// ```
/// use farkle_engine::scoring::has_scoring_potential;
///
/// assert!(has_scoring_potential(&[2, 2, 2]));
/// assert!(!has_scoring_potential(&[2, 3, 4, 6, 2, 3]));
/// ```
#[must_use]
pub fn has_scoring_potential(values: &[u8]) -> bool {
    let counts = FaceCounts::tally(values);
    counts.get(1) > 0 || counts.get(5) > 0 || counts.iter().any(|(_, n)| n >= 3)
}
