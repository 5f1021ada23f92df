//! RNG module - deterministic shuffling for the draw sequence.
//!
//! A simple LCG keeps rounds reproducible from a seed, which also keeps
//! the draw-sequence tests deterministic. No external RNG crate needed.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (usable as a seed to reproduce what follows).
    pub fn state(&self) -> u32 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut rng = SimpleRng::new(0);
        // Would be stuck at 0 forever without the remap.
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SimpleRng::new(7);
        let mut values: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }
}
