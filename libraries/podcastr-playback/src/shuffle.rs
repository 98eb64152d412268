//! Shuffle index selection
//!
//! Shuffle-next picks a uniformly random queue position. The pick may land on
//! the current episode again; callers get whatever the picker returns.

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

/// Source of random queue positions
pub trait IndexPicker {
    /// Pick an index in `[0, len)`
    ///
    /// Returns 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize;
}

/// Picker backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        thread_rng().gen_range(0..len)
    }
}

/// Reproducible picker for scripted sessions and tests
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    /// Create a picker from a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IndexPicker for SeededPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Build the picker for an optional seed
pub fn picker_for(seed: Option<u64>) -> Box<dyn IndexPicker> {
    match seed {
        Some(seed) => Box::new(SeededPicker::new(seed)),
        None => Box::new(ThreadRngPicker),
    }
}
