//! Random selection for the featured recipe and the tip of the day.
//!
//! The page never calls a global generator. It asks a [`RandomSource`] for an
//! index, so callers decide between a clock-seeded generator and a scripted one.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniformly distributed indices.
pub trait RandomSource: Send {
    /// Return an index in `0..len`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Pick one element of `items`, or `None` for an empty slice.
///
/// Empty slices do not consume randomness.
pub fn choose<'a, T>(random: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = random.pick(items.len());
    items.get(index)
}

/// xorshift64 generator.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        // xorshift gets stuck on zero
        Self {
            state: seed.wrapping_add(0x9E37_79B9_7F4A_7C15) | 1,
        }
    }

    /// Seed from the system clock.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos ^ u64::from(std::process::id()))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        // Multiply-shift maps the full u64 range onto 0..len
        ((u128::from(self.next_u64()) * len as u128) >> 64) as usize
    }
}

/// Replays a fixed list of picks, wrapping each into range and cycling.
///
/// Useful when the exact featured recipe has to be known in advance.
#[derive(Debug, Clone)]
pub struct Sequence {
    picks: Vec<usize>,
    position: usize,
}

impl Sequence {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            position: 0,
        }
    }
}

impl RandomSource for Sequence {
    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let value = self.picks[self.position % self.picks.len()];
        self.position += 1;
        value % len
    }
}
