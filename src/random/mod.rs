//! Seeded random primitives
//!
//! This module provides the bounded random values every synthetic document is
//! built from: integers in a range, doubles in `[0, 1)` and fixed-alphabet
//! "words". All of them are derived from a single uniform source so that a run
//! is fully determined by its seed and the order of the draws.
//!
//! # Determinism
//!
//! The generator wraps xoshiro256++, whose output stream is specified bit for
//! bit and does not depend on the platform or on the `rand` version. Two
//! generators created with the same seed and asked for the same sequence of
//! draws always return the same values.
//!
//! # Example
//!
//! ```
//! use randomidx::random::RandomGenerator;
//!
//! let mut rng = RandomGenerator::with_seed(42);
//!
//! let n = rng.uniform_int(10);
//! assert!(n < 10);
//!
//! let len = rng.uniform_int_between(1, 6);
//! assert!((1..=6).contains(&len));
//!
//! let word = rng.random_word(len, 3);
//! assert!(word.chars().all(|c| ('a'..='c').contains(&c)));
//! ```

use rand::RngCore;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Number of letters available to [`RandomGenerator::random_word`] (`a`..=`z`).
pub const ALPHABET_SIZE: u32 = 26;

/// First letter of the word alphabet
const ALPHABET_BASE: u8 = b'a';

/// 2^53, the number of distinct mantissa values drawn for [`RandomGenerator::uniform_01`]
const UNIT_SCALE: f64 = (1u64 << 53) as f64;

/// Seeded generator of bounded random values
///
/// One instance is created per run and threaded by `&mut` through every call
/// that needs randomness. It is never shared and never reset mid-run.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: Xoshiro256PlusPlus,
    draws: u64,
}

impl RandomGenerator {
    /// Create a generator with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Number of uniform draws taken from the underlying source so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Generate a double in the range `0.0 <= v < 1.0`
    ///
    /// Uses the top 53 bits of a 64-bit draw divided by 2^53, so the largest
    /// possible value is `1 - 2^-53` and 1.0 itself can never be returned.
    #[inline]
    pub fn uniform_01(&mut self) -> f64 {
        self.draws += 1;
        (self.rng.next_u64() >> 11) as f64 / UNIT_SCALE
    }

    /// Generate an integer in `[0, range)`
    ///
    /// Computed as `floor(range * uniform_01())`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is zero.
    #[inline]
    pub fn uniform_int(&mut self, range: u32) -> u32 {
        assert!(range > 0, "uniform_int range must be positive");
        let value = (f64::from(range) * self.uniform_01()) as u32;
        value.min(range - 1)
    }

    /// Generate an integer in `[min, max]` (both inclusive)
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[inline]
    pub fn uniform_int_between(&mut self, min: u32, max: u32) -> u32 {
        assert!(min <= max, "uniform_int_between requires min <= max, got {} > {}", min, max);
        assert!(max - min < u32::MAX, "uniform_int_between range spans all of u32");
        min + self.uniform_int(max - min + 1)
    }

    /// Generate a word of exactly `length` letters
    ///
    /// Every letter is drawn independently and uniformly from the first
    /// `char_range` letters of the alphabet (`a`, `b`, ...). A zero length
    /// yields an empty string without consuming any draws.
    ///
    /// # Panics
    ///
    /// Panics if `char_range` is zero or larger than [`ALPHABET_SIZE`].
    pub fn random_word(&mut self, length: u32, char_range: u32) -> String {
        assert!(
            char_range > 0 && char_range <= ALPHABET_SIZE,
            "char_range must be between 1 and {}, got {}",
            ALPHABET_SIZE,
            char_range
        );

        (0..length)
            .map(|_| char::from(ALPHABET_BASE + self.uniform_int(char_range) as u8))
            .collect()
    }
}

/// Returns true if `ch` is one of the first `char_range` alphabet letters
pub fn in_alphabet(ch: char, char_range: u32) -> bool {
    ch.is_ascii_lowercase() && u32::from(ch as u8 - ALPHABET_BASE) < char_range
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_01_bounds() {
        let mut rng = RandomGenerator::with_seed(7);

        for _ in 0..10_000 {
            let v = rng.uniform_01();
            assert!((0.0..1.0).contains(&v), "value {} outside [0, 1)", v);
        }
        assert_eq!(rng.draws(), 10_000);
    }

    #[test]
    fn test_uniform_int_range_one_is_zero() {
        let mut rng = RandomGenerator::with_seed(42);

        for _ in 0..1000 {
            assert_eq!(rng.uniform_int(1), 0);
        }
    }

    #[test]
    fn test_uniform_int_between_degenerate() {
        let mut rng = RandomGenerator::with_seed(42);

        for _ in 0..1000 {
            assert_eq!(rng.uniform_int_between(5, 5), 5);
        }
    }

    #[test]
    fn test_uniform_int_between_bounds() {
        let mut rng = RandomGenerator::with_seed(3);
        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..10_000 {
            let v = rng.uniform_int_between(100, 110);
            assert!((100..=110).contains(&v));
            seen_min |= v == 100;
            seen_max |= v == 110;
        }
        assert!(seen_min && seen_max, "both endpoints should be reachable");
    }

    #[test]
    fn test_uniform_int_between_top_of_u32() {
        let mut rng = RandomGenerator::with_seed(11);
        assert_eq!(rng.uniform_int_between(u32::MAX, u32::MAX), u32::MAX);

        for _ in 0..1000 {
            let v = rng.uniform_int_between(u32::MAX - 3, u32::MAX);
            assert!(v >= u32::MAX - 3);
            assert!(rng.uniform_int_between(1, u32::MAX) >= 1);
        }
    }

    #[test]
    fn test_seed_42_stream() {
        let mut rng = RandomGenerator::with_seed(42);
        assert_eq!(rng.uniform_01(), 0.8143051451229099);

        let mut rng = RandomGenerator::with_seed(42);
        let values: Vec<u32> = (0..4).map(|_| rng.uniform_int(1_000_000)).collect();
        assert_eq!(values, vec![814305, 318821, 983894, 701135]);

        let mut rng = RandomGenerator::with_seed(7);
        assert_eq!(rng.random_word(12, 26), "beslzmsizbce");
    }

    #[test]
    fn test_uniform_int_large_range() {
        let mut rng = RandomGenerator::with_seed(11);

        for _ in 0..1000 {
            assert!(rng.uniform_int(u32::MAX) < u32::MAX);
        }
    }

    #[test]
    fn test_uniform_int_coverage() {
        let mut rng = RandomGenerator::with_seed(42);
        let mut buckets = vec![0u32; 10];

        for _ in 0..10_000 {
            buckets[rng.uniform_int(10) as usize] += 1;
        }

        // Each bucket should have roughly 1000 samples; allow 20% deviation
        for count in buckets {
            assert!(count > 800 && count < 1200, "Bucket count {} outside expected range", count);
        }
    }

    #[test]
    fn test_random_word_empty() {
        let mut rng = RandomGenerator::with_seed(42);

        for k in 1..=ALPHABET_SIZE {
            assert_eq!(rng.random_word(0, k), "");
        }
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_random_word_alphabet() {
        let mut rng = RandomGenerator::with_seed(5);

        let word = rng.random_word(500, 2);
        assert_eq!(word.len(), 500);
        assert!(word.chars().all(|c| c == 'a' || c == 'b'));

        let word = rng.random_word(500, ALPHABET_SIZE);
        assert!(word.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_seeded_sequences_match() {
        let mut rng1 = RandomGenerator::with_seed(12345);
        let mut rng2 = RandomGenerator::with_seed(12345);

        for _ in 0..100 {
            assert_eq!(rng1.uniform_int(1000), rng2.uniform_int(1000));
            assert_eq!(rng1.random_word(8, 10), rng2.random_word(8, 10));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut rng1 = RandomGenerator::with_seed(1);
        let mut rng2 = RandomGenerator::with_seed(2);

        let a: Vec<u32> = (0..32).map(|_| rng1.uniform_int(1_000_000)).collect();
        let b: Vec<u32> = (0..32).map(|_| rng2.uniform_int(1_000_000)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_in_alphabet() {
        assert!(in_alphabet('a', 1));
        assert!(!in_alphabet('b', 1));
        assert!(in_alphabet('j', 10));
        assert!(!in_alphabet('k', 10));
        assert!(!in_alphabet('A', 26));
    }

    #[test]
    #[should_panic(expected = "range must be positive")]
    fn test_uniform_int_zero_range_panics() {
        RandomGenerator::with_seed(1).uniform_int(0);
    }

    #[test]
    #[should_panic(expected = "min <= max")]
    fn test_uniform_int_between_inverted_panics() {
        RandomGenerator::with_seed(1).uniform_int_between(6, 5);
    }

    #[test]
    #[should_panic(expected = "char_range")]
    fn test_random_word_oversized_alphabet_panics() {
        RandomGenerator::with_seed(1).random_word(3, ALPHABET_SIZE + 1);
    }
}
