//! Injectable randomness for the synthesized responses.
//!
//! Handlers never touch an RNG directly; they ask the `RandomSource` held in
//! the router state for an index. Production uses `ThreadRandom`, tests swap
//! in `ScriptedRandom` to pin every pick.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform picks. Shared across concurrent handler invocations.
pub trait RandomSource: Send + Sync + fmt::Debug {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Pick one element of `items` through `source`.
///
/// # Panics
/// If `items` is empty.
pub fn choose<'a, T>(source: &dyn RandomSource, items: &'a [T]) -> &'a T {
    assert!(!items.is_empty(), "cannot choose from an empty slice");
    &items[source.pick_index(items.len()) % items.len()]
}

/// Thread-local RNG from `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible picks from a fixed seed.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// Replays `picks` in order, wrapping around at the end. Each pick is reduced
/// modulo the requested length.
#[derive(Debug)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    cursor: AtomicUsize,
}

impl ScriptedRandom {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        let picks = picks.into();
        assert!(!picks.is_empty(), "script needs at least one pick");
        Self {
            picks,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&self, len: usize) -> usize {
        let at = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.picks[at % self.picks.len()] % len
    }
}
