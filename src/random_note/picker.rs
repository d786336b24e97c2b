//! Random index sources used for note and heading selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws an index in `[0, len)`
///
/// Callers guarantee `len > 0`.
pub trait IndexPicker: Send + Sync {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picker backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform picker with a reproducible sequence
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IndexPicker for SeededPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Pick one element of a non-empty slice
pub fn choose<'a, T>(picker: &mut dyn IndexPicker, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(picker.pick(items.len()))
}
