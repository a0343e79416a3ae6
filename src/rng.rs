//! Deterministic shuffle support.
//!
//! Pool and zone shuffling must be reproducible under test, so gameplay code
//! takes a [`GameRng`] instead of sampling ambient entropy. The generator is
//! a plain xorshift64 seeded either explicitly (tests) or from the platform
//! entropy source via `getrandom` (browser). Not crypto secure.

pub struct GameRng {
    state: u64,
}

impl GameRng {
    /// Build a generator from an explicit seed. Equal seeds yield equal
    /// shuffle sequences.
    pub fn seeded(seed: u64) -> Self {
        // One LCG step mixes small seeds; the `| 1` keeps xorshift away from
        // its all-zero fixed point.
        let state = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407)
            | 1;
        Self { state }
    }

    /// Build a generator seeded from platform entropy. If the entropy source
    /// is unavailable the shuffle order merely becomes predictable; gameplay
    /// is unaffected.
    pub fn from_entropy() -> Self {
        let mut buf = [0u8; 8];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => Self::seeded(u64::from_le_bytes(buf)),
            Err(_) => Self::seeded(0x5eed_cafe),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64 (Marsaglia)
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Index in `0..len`. Modulo bias is irrelevant at catalog sizes.
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u64() % len as u64) as usize
    }

    /// In-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}
