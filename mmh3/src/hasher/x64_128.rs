use std::fmt::Display;

use num_traits::ToPrimitive;

use super::{impl_hasher_traits, seed_u64};
use crate::carry::BitCarry;
use crate::digest::Digest128;
use crate::error::Result;
use crate::mixer::x64_128;

/// Streaming MurmurHash3_x64_128.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Murmur3x64_128 {
    h1: u64,
    h2: u64,
    carry: BitCarry<u64, 2>,
    length: u64,
    seed: u64,
}

impl Murmur3x64_128 {
    pub const NAME: &'static str = "mmh3_x64_128";
    pub const DIGEST_SIZE: usize = Digest128::SIZE;
    pub const BLOCK_SIZE: usize = 32;

    const BLOCK_BITS: u32 = 128;

    pub fn new(seed: u64) -> Self {
        Self {
            h1: seed,
            h2: seed,
            carry: BitCarry::new(),
            length: 0,
            seed,
        }
    }

    pub fn with_seed<S: ToPrimitive + Display>(seed: S) -> Result<Self> {
        Ok(Self::new(seed_u64(seed)?))
    }

    pub fn oneshot(data: &[u8], seed: u64) -> Digest128 {
        let (h1, h2) = x64_128::hash(data, seed);
        Digest128::from_u64_words(h1, h2)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    /// Merges a 16-byte stride `(k1, k2)` with the pending bits.
    ///
    /// Returns the completed block and the new carry words. `shift` is a
    /// multiple of 8 below 128 and is left unchanged by a full stride.
    fn merge_stride(&self, k1: u64, k2: u64) -> ([u64; 2], [u64; 2]) {
        let [c1, c2] = self.carry.words();
        let s = self.carry.shift();
        match s {
            0 => ([k1, k2], [0, 0]),
            1..=63 => (
                [c1 | k1 << s, k1 >> (64 - s) | k2 << s],
                [k2 >> (64 - s), 0],
            ),
            64 => ([c1, k1], [k2, 0]),
            _ => (
                [c1, c2 | k1 << (s - 64)],
                [k1 >> (128 - s) | k2 << (s - 64), k2 >> (128 - s)],
            ),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        let mut h1 = self.h1;
        let mut h2 = self.h2;

        let mut strides = data.chunks_exact(x64_128::BLOCK_LEN);
        for stride in &mut strides {
            let (lo, hi) = stride.split_at(8);
            let k1 = u64::from_le_bytes([lo[0], lo[1], lo[2], lo[3], lo[4], lo[5], lo[6], lo[7]]);
            let k2 = u64::from_le_bytes([hi[0], hi[1], hi[2], hi[3], hi[4], hi[5], hi[6], hi[7]]);

            let ([b1, b2], leftover) = self.merge_stride(k1, k2);
            (h1, h2) = x64_128::mix_block(h1, h2, b1, b2);
            self.carry.set_words(leftover);
            self.length += x64_128::BLOCK_LEN as u64;
        }

        for &byte in strides.remainder() {
            self.carry.push_byte(byte);
            self.length += 1;

            if self.carry.shift() >= Self::BLOCK_BITS {
                let [b1, b2] = self.carry.words();
                (h1, h2) = x64_128::mix_block(h1, h2, b1, b2);
                self.carry.drain(Self::BLOCK_BITS);
            }
        }

        self.h1 = h1;
        self.h2 = h2;
    }

    pub fn finalize(&self) -> Digest128 {
        let [t1, t2] = self.carry.words();
        let (h1, h2) = x64_128::finalize(self.h1, self.h2, t1, t2, self.length);
        Digest128::from_u64_words(h1, h2)
    }

    pub fn digest(&self) -> [u8; Digest128::SIZE] {
        self.finalize().to_bytes()
    }

    pub fn sint_digest(&self) -> i128 {
        self.finalize().as_i128()
    }

    pub fn uint_digest(&self) -> u128 {
        self.finalize().as_u128()
    }

    pub fn stuple_digest(&self) -> (i64, i64) {
        self.finalize().as_i64_pair()
    }

    pub fn utuple_digest(&self) -> (u64, u64) {
        self.finalize().as_u64_pair()
    }
}

impl_hasher_traits!(Murmur3x64_128, u64, Digest128, |digest: Digest128| {
    digest.as_u64_pair().0
});
