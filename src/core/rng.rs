//! Random sources for deck shuffling.
//!
//! The engine only ever needs one capability from randomness: pick an index
//! in `[0, bound)`. That capability is the `RandomSource` trait, so tests can
//! swap the real generator for a scripted sequence.
//!
//! ## Sources
//!
//! - `GameRng`: ChaCha8, seeded explicitly or from entropy. Same seed, same
//!   shuffle.
//! - `ScriptedRng`: replays a fixed list of indices.
//!
//! ```
//! use dungeon_deck::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.next_index(52), b.next_index(52));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Return an index in `[0, bound)`.
    ///
    /// A `bound` of 0 or 1 always yields 0.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Seedable RNG used for live play.
///
/// Uses ChaCha8 for speed while keeping shuffle quality high.
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

    /// Create an RNG from a fresh entropy-drawn seed.
    ///
    /// The seed is still recorded so a surprising shuffle can be reproduced
    /// from `state()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.inner.gen_range(0..bound)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many cards have been shuffled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of indices.
///
/// Each scripted value is reduced modulo the requested bound. Once the
/// script runs out it starts over from the beginning; an empty script
/// always answers 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a source that replays `script`.
    #[must_use]
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// A source that always answers with the largest legal index.
    ///
    /// Under Fisher-Yates this leaves every element in place, so the deck
    /// keeps its canonical order.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(vec![usize::MAX])
    }

    /// How many indices have been handed out.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.script.is_empty() || bound <= 1 {
            self.cursor += 1;
            return 0;
        }
        let raw = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        if raw == usize::MAX {
            bound - 1
        } else {
            raw % bound
        }
    }
}
