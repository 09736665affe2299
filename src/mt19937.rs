//! MT19937 pseudo-random number generator

use rand_core::{impls, RngCore, SeedableRng};

const N: usize = 624;

pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    pub const W: u32 = 32;
    pub const N: usize = N;
    pub const M: usize = 397;
    pub const R: u32 = 31;
    pub const A: u32 = 0x9908b0df;
    pub const U: u32 = 11;
    pub const D: u32 = 0xffffffff;
    pub const S: u32 = 7;
    pub const B: u32 = 0x9d2c5680;
    pub const T: u32 = 15;
    pub const C: u32 = 0xefc60000;
    pub const L: u32 = 18;
    pub const F: u32 = 1812433253;

    pub const DEFAULT_SEED: u32 = 0x19937;

    const LMASK: u32 = (1 << Self::R) - 1;
    const UMASK: u32 = !Self::LMASK;

    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            state: [0; Self::N],
            index: Self::N,
        };
        rng.initialize(seed);
        rng
    }

    /// Install a raw state vector. The cursor is left exhausted, so the
    /// first call to `temper` twists the given state before reading it.
    pub fn from_state(state: [u32; Self::N]) -> Self {
        Self {
            state,
            index: Self::N,
        }
    }

    pub fn state(&self) -> &[u32; Self::N] {
        &self.state
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn initialize(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..Self::N {
            let prev = self.state[i - 1];
            self.state[i] = Self::F
                .wrapping_mul(prev ^ (prev >> (Self::W - 2)))
                .wrapping_add(i as u32);
        }
        self.twist();
    }

    /// Regenerate all N words in place and reset the cursor.
    pub fn twist(&mut self) {
        for i in 0..Self::N {
            let x = (self.state[i] & Self::UMASK) | (self.state[(i + 1) % Self::N] & Self::LMASK);
            let mut x_a = x >> 1;
            if x & 1 > 0 {
                x_a ^= Self::A;
            }
            self.state[i] = self.state[(i + Self::M) % Self::N] ^ x_a;
        }
        self.index = 0;
    }

    pub fn temper(&mut self) -> u32 {
        if self.index == Self::N {
            self.twist();
        }
        let y = temper_mix(self.state[self.index]);
        self.index += 1;
        y
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

/// The four tempering steps applied to a raw state word.
pub fn temper_mix(x: u32) -> u32 {
    let mut y = x ^ ((x >> Mt19937::U) & Mt19937::D);
    y ^= (y << Mt19937::S) & Mt19937::B;
    y ^= (y << Mt19937::T) & Mt19937::C;
    y ^ (y >> Mt19937::L)
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.temper()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
