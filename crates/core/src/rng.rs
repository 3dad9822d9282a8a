//! RNG module - deterministic random source for tile spawns
//!
//! The engine consumes exactly two kinds of random draws: a uniform index into
//! the current set of empty cells, and the 2-vs-4 roll for the spawned value.
//! Both come from a small seeded LCG so that the same seed replays the same game.

use crate::types::{SPAWN_ALT_VALUE, SPAWN_FOUR_ONE_IN, SPAWN_VALUE};

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by multiply-and-shift so the result is drawn from the high bits;
    /// the low bits of a power-of-two LCG cycle with short periods.
    /// Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Roll the value of a freshly spawned tile: 4 one time in ten, otherwise 2
    pub fn spawn_value(&mut self) -> u32 {
        if self.next_range(SPAWN_FOUR_ONE_IN) == 0 {
            SPAWN_ALT_VALUE
        } else {
            SPAWN_VALUE
        }
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..=64 {
            for _ in 0..50 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_range_covers_every_bucket() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [0u32; 16];
        for _ in 0..4000 {
            seen[rng.next_range(16) as usize] += 1;
        }
        // 250 expected per bucket.
        for (bucket, count) in seen.iter().enumerate() {
            assert!(*count > 150 && *count < 350, "bucket {} drew {}", bucket, count);
        }
    }

    #[test]
    fn test_spawn_value_distribution() {
        let mut rng = SimpleRng::new(2048);
        let draws = 20_000;
        let fours = (0..draws).filter(|_| rng.spawn_value() == 4).count();
        let ratio = fours as f64 / draws as f64;
        assert!(
            (0.08..=0.12).contains(&ratio),
            "4s appeared in {:.3} of spawns",
            ratio
        );
    }

    #[test]
    fn test_spawn_value_only_two_or_four() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..1000 {
            let v = rng.spawn_value();
            assert!(v == 2 || v == 4);
        }
    }
}
