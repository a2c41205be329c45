//! Seeded xorshift64 generator for random preemption.
//!
//! Deterministic per seed, so a failing schedule can be replayed by rerunning
//! with the same `STRAND_SEED`.

/// Fallback state; xorshift has a fixed point at zero.
const ZERO_SEED_FALLBACK: u64 = 0xDEAD_BEEF_CAFE_BABE;

/// xorshift64 pseudo-random generator.
#[derive(Debug, Clone)]
pub(crate) struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a generator. Seeds are scrambled so nearby seeds diverge.
    pub(crate) fn new(seed: u64) -> Self {
        let state = seed.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Self {
            state: if state == 0 { ZERO_SEED_FALLBACK } else { state },
        }
    }

    /// Returns the next pseudo-random value.
    pub(crate) fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Returns `true` with probability `1 / n`. `n == 0` never fires.
    pub(crate) fn one_in(&mut self, n: u32) -> bool {
        n != 0 && self.next_u64() % u64::from(n) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = XorShift64::new(42);
        let mut b = XorShift64::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = XorShift64::new(1);
        let mut b = XorShift64::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn never_stuck_at_zero() {
        let mut rng = XorShift64::new(u64::MAX);
        for _ in 0..64 {
            assert_ne!(rng.next_u64(), 0);
        }
    }

    #[test]
    fn one_in_bounds() {
        let mut rng = XorShift64::new(7);
        assert!((0..32).all(|_| rng.one_in(1)));
        assert!((0..32).all(|_| !rng.one_in(0)));
    }
}
