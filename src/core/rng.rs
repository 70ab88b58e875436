//! Randomness sources for computer moves and card draws.
//!
//! Everything random in the games is a uniform pick over a finite set:
//! the fallback square, the computer's gesture, the suit bucket and rank
//! tried during a draw. `RandomSource` is that one operation.
//!
//! ```
//! use parlor_games::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same picks.
//! assert_eq!(rng1.pick_index(9), rng2.pick_index(9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform selection over a finite set.
pub trait RandomSource {
    /// Pick an index in `0..len` uniformly. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Pick an element of `items`, or `None` if it is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let index = self.pick_index(items.len());
        items.get(index)
    }
}

/// Deterministic RNG used by the console games.
///
/// Uses ChaCha8 so a seed replays the same computer moves and draws.
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

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Replays a fixed list of picks, cycling when it runs out.
///
/// Each scripted value is reduced modulo the requested length, so a script
/// stays valid whatever set it is applied to. Useful for pinning down the
/// computer's fallback moves and the cards a deck hands out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        pick % len
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
            assert_eq!(rng1.pick_index(1000), rng2.pick_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.pick_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.pick_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_pick_in_range() {
        let mut rng = GameRng::new(7);
        for len in 1..20 {
            assert!(rng.pick_index(len) < len);
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_scripted_cycles_and_wraps() {
        let mut scripted = ScriptedRandom::new(vec![1, 5]);
        assert_eq!(scripted.pick_index(3), 1);
        assert_eq!(scripted.pick_index(3), 2); // 5 % 3
        assert_eq!(scripted.pick_index(10), 1);
    }

    #[test]
    fn test_scripted_empty_picks_first() {
        let mut scripted = ScriptedRandom::default();
        assert_eq!(scripted.pick_index(4), 0);
    }
}
