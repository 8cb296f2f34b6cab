//! RNG module - injectable random sources for shape selection
//!
//! The engine only ever asks for "an index below `bound`". Three sources
//! answer that question:
//!
//! - [`SimpleRng`]: seedable LCG, identical sequence for identical seeds
//! - [`ThreadRandom`]: OS-seeded thread-local generator from `rand`
//! - [`ScriptedRng`]: replays a fixed list of indices (tests, demos)

use rand::Rng;

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Return a value in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        Self { seed, state: seed }
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_index(&mut self, bound: usize) -> usize {
        // The high bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() >> 16) as usize) % bound
    }
}

/// Non-deterministic source backed by `rand`'s thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Values at or above the requested bound wrap around (`value % bound`).
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    /// An empty script always yields 0.
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// How many indices have been handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_rng_deterministic() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_simple_rng_zero_seed_steps_to_increment() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.seed(), 0);
        assert_eq!(rng.next_u32(), 1_013_904_223);
        assert_ne!(rng.next_u32(), 1_013_904_223);
    }

    #[test]
    fn test_simple_rng_covers_all_shapes() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[rng.next_index(7)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_thread_random_in_range() {
        let mut rng = ThreadRandom;
        for _ in 0..200 {
            assert!(rng.next_index(7) < 7);
        }
    }

    #[test]
    fn test_scripted_rng_cycles_and_wraps() {
        let mut rng = ScriptedRng::new(vec![1, 9]);
        assert_eq!(rng.next_index(7), 1);
        assert_eq!(rng.next_index(7), 2);
        assert_eq!(rng.next_index(7), 1);
        assert_eq!(rng.drawn(), 3);

        let mut empty = ScriptedRng::new(Vec::new());
        assert_eq!(empty.next_index(7), 0);
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut boxed: Box<dyn RandomSource> = Box::new(ScriptedRng::new(vec![4]));
        assert_eq!(boxed.next_index(7), 4);
    }
}
