//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG for reproducible trials and host reveals.
//! Uses xorshift64* for the stream itself and a SplitMix64 finalizer to
//! derive independent per-trial streams.

/// 32-byte seed shared by a simulation run or a session
pub type Seed = [u8; 32];

const GOLDEN_GAMMA: u64 = 0x9e3779b97f4a7c15;

/// Seeded random number generator
///
/// Deterministic: same seed + stream = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 32-byte seed and stream index
    pub fn new(seed: &Seed, stream: u32) -> Self {
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }

        state ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);

        let mut rng = Self::from_state(state);
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Derive the RNG for one trial of a batch
    ///
    /// Streams for different trial indices share no mutable state, so trials
    /// can be evaluated in any order (or in parallel) with identical results.
    pub fn for_trial(&self, trial: u64) -> Self {
        let mut rng = Self::from_state(mix64(self.state ^ trial.wrapping_mul(GOLDEN_GAMMA)));
        rng.next_u64();
        rng
    }

    // xorshift has a fixed point at zero
    fn from_state(state: u64) -> Self {
        Self {
            state: if state == 0 { GOLDEN_GAMMA } else { state },
        }
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Fair coin flip
    pub fn next_bool(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }
}

/// Expand a 64-bit seed (e.g. from a command-line flag) into a full [`Seed`]
pub fn expand_seed(value: u64) -> Seed {
    let mut seed = [0u8; 32];
    let mut state = value;
    for chunk in seed.chunks_mut(8) {
        state = state.wrapping_add(GOLDEN_GAMMA);
        chunk.copy_from_slice(&mix64(state).to_le_bytes());
    }
    seed
}

/// SplitMix64 output finalizer
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let seed = [42u8; 32];
        let mut r1 = SeededRng::new(&seed, 0);
        let mut r2 = SeededRng::new(&seed, 0);

        for _ in 0..100 {
            assert_eq!(r1.next_u64(), r2.next_u64());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = SeededRng::new(&[1u8; 32], 0);
        let mut rng2 = SeededRng::new(&[2u8; 32], 0);

        let vals1: Vec<_> = (0..10).map(|_| rng1.next_u64()).collect();
        let vals2: Vec<_> = (0..10).map(|_| rng2.next_u64()).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_different_streams() {
        let seed = [42u8; 32];

        let mut rng1 = SeededRng::new(&seed, 0);
        let mut rng2 = SeededRng::new(&seed, 1);

        assert_ne!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_for_trial_is_pure() {
        let base = SeededRng::new(&[7u8; 32], 0);

        let mut a = base.for_trial(12);
        let mut b = base.for_trial(12);
        let mut c = base.for_trial(13);

        let first = a.next_u64();
        assert_eq!(first, b.next_u64());
        assert_ne!(first, c.next_u64());
    }

    #[test]
    fn test_zero_seed_does_not_stick() {
        let mut rng = SeededRng::from_state(0);
        let vals: Vec<_> = (0..4).map(|_| rng.next_u64()).collect();
        assert!(vals.iter().any(|v| *v != 0));
    }

    #[test]
    fn test_next_range() {
        let mut rng = SeededRng::new(&[42u8; 32], 0);

        for max in [1, 2, 3, 10, 1000].iter() {
            for _ in 0..100 {
                let val = rng.next_range(*max);
                assert!(val < *max, "next_range({}) returned {}", max, val);
            }
        }

        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_bool_takes_both_values() {
        let mut rng = SeededRng::new(&[9u8; 32], 0);
        let heads = (0..1000).filter(|_| rng.next_bool()).count();
        assert!(heads > 400 && heads < 600, "heads = {}", heads);
    }

    #[test]
    fn test_expand_seed() {
        assert_eq!(expand_seed(5), expand_seed(5));
        assert_ne!(expand_seed(5), expand_seed(6));
        assert_ne!(expand_seed(0), [0u8; 32]);
    }
}
