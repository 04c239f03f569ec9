//! Session RNG
//!
//! A small xorshift64* generator implementing the `rand_core` traits. The
//! engine only ever asks for a `&mut dyn RngCore`, so a host can hand in any
//! generator; this one exists so tests and the terminal binary can seed a
//! reproducible session.

use rand_core::{RngCore, SeedableRng};

/// Fallback state used when a seed of all zeroes is supplied
const NONZERO_STATE: u64 = 0x9E37_79B9_7F4A_7C15;

/// xorshift64* generator
#[derive(Debug, Clone)]
pub struct SessionRng {
    state: u64,
}

impl SessionRng {
    /// Create a generator from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { NONZERO_STATE } else { seed },
        }
    }
}

impl RngCore for SessionRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SessionRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Uniform-ish index in `0..len` (`len` must be non-zero)
pub fn pick_index(rng: &mut dyn RngCore, len: usize) -> usize {
    (rng.next_u32() as usize) % len
}

/// Value in the inclusive range `low..=high`
pub fn range_inclusive(rng: &mut dyn RngCore, low: u32, high: u32) -> u32 {
    low + rng.next_u32() % (high - low + 1)
}

/// Pick one element of a non-empty slice
pub fn choose<'a, T>(rng: &mut dyn RngCore, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(pick_index(rng, items.len()))
    }
}

/// Fisher-Yates shuffle in place
pub fn shuffle<T>(rng: &mut dyn RngCore, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = pick_index(rng, i + 1);
        items.swap(i, j);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_zero_seed_still_advances() {
        let mut rng = SessionRng::new(0);
        assert_ne!(rng.next_u64(), rng.next_u64());
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = SessionRng::new(7);
        for _ in 0..500 {
            let v = range_inclusive(&mut rng, 1, 6);
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = SessionRng::new(3);
        let mut items = [1, 2, 3, 4, 5, 6, 7, 8];
        shuffle(&mut rng, &mut items);
        let mut sorted = items;
        sorted.sort();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
