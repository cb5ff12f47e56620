//! Seeded pseudo-random number generation
//!
//! Every draw the simulator makes goes through [`RandomSource`], so callers
//! decide where randomness comes from. [`SeededRng`] is the default source:
//! a small xorshift64* generator that is reproducible from a seed.

/// A source of uniformly distributed 64-bit values.
pub trait RandomSource {
    /// Generate next u64
    fn next_u64(&mut self) -> u64;

    /// Generate next u32 (high half of a u64 draw)
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Generate a fair coin flip
    fn next_bool(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// Replacement state for seeds that would fold to zero, the xorshift fixpoint.
const NONZERO_STATE: u64 = 0x853c49e6748fea9b;

/// Seeded random number generator
///
/// Deterministic: same seed + stream = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 32-byte seed and stream index
    pub fn new(seed: &[u8; 32], stream: u32) -> Self {
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

    /// Create stream 0 from a 64-bit seed spread over the 32 seed bytes
    pub fn from_u64(seed: u64) -> Self {
        Self::new(&expand_seed(seed), 0)
    }

    /// Derive an independent child generator, leaving `self` untouched
    pub fn fork(&self, stream: u32) -> Self {
        let state = self.state ^ (stream as u64).wrapping_add(1).wrapping_mul(0x9e3779b97f4a7c15);

        let mut rng = Self::from_state(state);
        rng.next_u64();
        rng
    }

    fn from_state(state: u64) -> Self {
        Self {
            state: if state == 0 { NONZERO_STATE } else { state },
        }
    }
}

impl RandomSource for SeededRng {
    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }
}

/// Spread a 64-bit seed over the 32-byte seed format
pub fn expand_seed(seed: u64) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for (i, chunk) in bytes.chunks_mut(8).enumerate() {
        let word = seed.rotate_left(16 * i as u32) ^ (i as u64);
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    bytes
}
