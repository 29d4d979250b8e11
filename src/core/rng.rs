//! Die sources.
//!
//! The game never generates randomness itself: every roll is drawn from a
//! [`RandomSource`] handed in by the caller. Two sources ship with the crate:
//!
//! - [`GameRng`]: seeded ChaCha8 stream. Same seed, same faces.
//! - [`ScriptedDice`]: replays a fixed list of faces.
//!
//! ```
//! use dice_duel::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll(6), b.roll(6));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

/// Produces die faces.
///
/// Implementations must return a value in `1..=sides`, uniformly
/// distributed and independent across calls.
pub trait RandomSource {
    /// Roll one die with `sides` faces.
    fn roll(&mut self, sides: u8) -> u8;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll(&mut self, sides: u8) -> u8 {
        (**self).roll(sides)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn roll(&mut self, sides: u8) -> u8 {
        (**self).roll(sides)
    }
}

/// Deterministic die source.
///
/// Uses ChaCha8 for speed while keeping cryptographic quality randomness.
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

    /// Create an RNG seeded from the thread RNG.
    ///
    /// The chosen seed is still recorded, so `seed()` can reproduce it.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn roll(&mut self, sides: u8) -> u8 {
        self.inner.gen_range(1..=sides.max(1))
    }
}

/// Replays a queue of predetermined faces, for tests and reproductions.
///
/// Once the script runs dry, faces come from a fallback [`GameRng`]. A
/// scripted face outside `1..=sides` is never returned: it is discarded with
/// a warning and the next face is used. Faces shown by the chat platform
/// should go through [`GameSession::record_roll`](crate::rules::GameSession::record_roll),
/// which rejects invalid values instead.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
    fallback: GameRng,
}

impl ScriptedDice {
    /// Script the given faces, falling back to seed 0 afterwards.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self::with_fallback(faces, GameRng::new(0))
    }

    /// Script the given faces with an explicit fallback.
    pub fn with_fallback(faces: impl IntoIterator<Item = u8>, fallback: GameRng) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            fallback,
        }
    }

    /// Queue another face.
    pub fn push(&mut self, face: u8) {
        self.faces.push_back(face);
    }

    /// Faces left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl RandomSource for ScriptedDice {
    fn roll(&mut self, sides: u8) -> u8 {
        while let Some(face) = self.faces.pop_front() {
            if (1..=sides).contains(&face) {
                return face;
            }
            warn!(face, sides, "discarding scripted face outside the die");
        }
        self.fallback.roll(sides)
    }
}
