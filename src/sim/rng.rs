//! Scatter stream RNG
//!
//! A 32-bit linear congruential generator. The scatter field and the collision
//! index are both derived from its output, and the browser renderer replays the
//! same stream, so the recurrence and the normalization must stay bit-exact:
//!
//! `state = (1664525 * state + 1013904223) mod 2^32`, sample = `state / 2^32`.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0; // 2^32

/// Seeded LCG producing the scatter stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the stream and return the new state
    #[inline]
    pub fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Next sample in [0, 1)
    #[inline]
    pub fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / MODULUS
    }

    /// Next sample in [lo, hi)
    #[inline]
    pub fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }

    /// Next index in [0, n)
    #[inline]
    pub fn next_index(&mut self, n: u32) -> u32 {
        (self.next_unit() * n as f64).floor() as u32
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence() {
        let mut rng = Lcg::new(0);
        assert_eq!(rng.step(), 1_013_904_223);
        // 1664525 * 1013904223 + 1013904223 mod 2^32
        assert_eq!(rng.step(), 1_196_435_762);
    }

    #[test]
    fn test_unit_range() {
        let mut rng = Lcg::new(42);
        for _ in 0..10_000 {
            let r = rng.next_unit();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn test_index_bounds() {
        let mut rng = Lcg::new(7);
        for _ in 0..10_000 {
            assert!(rng.next_index(6) < 6);
        }
    }

    #[test]
    fn test_unit_is_state_over_modulus() {
        let mut rng = Lcg::from_seed(12345u32.to_le_bytes());
        let expected = Lcg::new(12345).step();
        assert_eq!(rng.next_unit(), expected as f64 / 4_294_967_296.0);
    }

    #[test]
    fn test_rng_core_matches_step() {
        let mut a = Lcg::new(99);
        let mut b = Lcg::from_seed(99u32.to_le_bytes());
        for _ in 0..32 {
            assert_eq!(a.step(), b.next_u32());
        }
    }
}
