//! Face sources: where rolled die values come from.
//!
//! The engine never calls a random number generator directly. It draws
//! faces from a [`FaceSource`], so callers choose between:
//!
//! - [`GameRng`]: ChaCha8, seeded explicitly or from OS entropy
//! - [`ScriptedFaces`]: a fixed, cycling sequence for tests and replays
//!
//! ```
//! use farkle_engine::core::{FaceSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same faces
//! for _ in 0..20 {
//!     assert_eq!(a.next_face(), b.next_face());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies uniformly distributed die faces in `1..=6`.
pub trait FaceSource {
    /// Produce the next face value.
    fn next_face(&mut self) -> u8;
}

impl<S: FaceSource + ?Sized> FaceSource for &mut S {
    fn next_face(&mut self) -> u8 {
        (**self).next_face()
    }
}

impl<S: FaceSource + ?Sized> FaceSource for Box<S> {
    fn next_face(&mut self) -> u8 {
        (**self).next_face()
    }
}

/// Deterministic RNG for dice.
///
/// Uses ChaCha8 for speed while keeping high quality randomness. The seed is
/// retained so a game can be reported and replayed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded once from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed if given, entropy otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl FaceSource for GameRng {
    fn next_face(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }
}

/// Replays a fixed face sequence, wrapping back to the start when exhausted.
///
/// ```
/// use farkle_engine::core::{FaceSource, ScriptedFaces};
///
/// let mut faces = ScriptedFaces::new([1, 5]);
/// assert_eq!(faces.next_face(), 1);
/// assert_eq!(faces.next_face(), 5);
/// assert_eq!(faces.next_face(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedFaces {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedFaces {
    /// Script the given faces.
    ///
    /// # Panics
    ///
    /// If `faces` is empty or holds a value outside `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: Vec<u8> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "Script must contain at least one face");
        assert!(
            faces.iter().all(|f| (1..=6).contains(f)),
            "Scripted faces must be in 1..=6"
        );
        Self { faces, cursor: 0 }
    }

    /// Faces handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl FaceSource for ScriptedFaces {
    fn next_face(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_face(), rng2.next_face());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..32).map(|_| rng1.next_face()).collect();
        let seq2: Vec<_> = (0..32).map(|_| rng2.next_face()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_faces_in_range_and_all_seen() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 7];

        for _ in 0..1000 {
            let face = rng.next_face();
            assert!((1..=6).contains(&face));
            seen[face as usize] = true;
        }

        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_from_seed() {
        assert_eq!(GameRng::from_seed(Some(9)).seed(), 9);

        let mut a = GameRng::from_seed(Some(9));
        let mut b = GameRng::new(9);
        assert_eq!(a.next_face(), b.next_face());
    }

    #[test]
    fn test_scripted_cycles() {
        let mut faces = ScriptedFaces::new([2, 3, 4]);
        let seq: Vec<_> = (0..7).map(|_| faces.next_face()).collect();

        assert_eq!(seq, vec![2, 3, 4, 2, 3, 4, 2]);
        assert_eq!(faces.consumed(), 7);
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        fn draw<S: FaceSource>(mut source: S) -> u8 {
            source.next_face()
        }

        let mut faces = ScriptedFaces::new([6]);
        assert_eq!(draw(&mut faces), 6);
        assert_eq!(faces.consumed(), 1);
    }

    #[test]
    #[should_panic(expected = "Scripted faces must be in 1..=6")]
    fn test_scripted_rejects_bad_face() {
        let _ = ScriptedFaces::new([0]);
    }
}
