use std::fmt::Display;

use num_traits::ToPrimitive;

use super::{impl_hasher_traits, seed_u32};
use crate::carry::BitCarry;
use crate::digest::Digest32;
use crate::error::Result;
use crate::mixer::x86_32;

/// Streaming MurmurHash3_x86_32.
///
/// The carry is a 64-bit shift register: a whole 32-bit word can be ORed in
/// on top of up to three pending bytes before the low half is mixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Murmur3x86_32 {
    h1: u32,
    carry: BitCarry<u64, 1>,
    length: u64,
    seed: u32,
}

impl Murmur3x86_32 {
    pub const NAME: &'static str = "mmh3_32";
    pub const DIGEST_SIZE: usize = Digest32::SIZE;
    pub const BLOCK_SIZE: usize = 12;

    const BLOCK_BITS: u32 = 32;

    pub fn new(seed: u32) -> Self {
        Self {
            h1: seed,
            carry: BitCarry::new(),
            length: 0,
            seed,
        }
    }

    /// Like [`Murmur3x86_32::new`] for seeds of any integer type, failing when
    /// the value is not a valid `u32`.
    pub fn with_seed<S: ToPrimitive + Display>(seed: S) -> Result<Self> {
        Ok(Self::new(seed_u32(seed)?))
    }

    pub fn oneshot(data: &[u8], seed: u32) -> Digest32 {
        Digest32::new(x86_32::hash(data, seed))
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn update(&mut self, data: &[u8]) {
        let mut h1 = self.h1;

        let mut words = data.chunks_exact(4);
        for word in &mut words {
            let k1 = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
            // Pending bytes sit below `shift`, so the new word lands above them
            // and the register's low half is always a complete block.
            let register = self.carry.word(0) | (k1 as u64) << self.carry.shift();
            h1 = x86_32::mix_block(h1, register as u32);
            self.carry.set_words([register >> 32]);
            self.length += 4;
        }

        for &byte in words.remainder() {
            self.carry.push_byte(byte);
            self.length += 1;

            if self.carry.shift() >= Self::BLOCK_BITS {
                h1 = x86_32::mix_block(h1, self.carry.word(0) as u32);
                self.carry.drain(Self::BLOCK_BITS);
            }
        }

        self.h1 = h1;
    }

    pub fn finalize(&self) -> Digest32 {
        Digest32::new(x86_32::finalize(
            self.h1,
            self.carry.word(0) as u32,
            self.length,
        ))
    }

    pub fn digest(&self) -> [u8; Digest32::SIZE] {
        self.finalize().to_bytes()
    }

    pub fn sint_digest(&self) -> i32 {
        self.finalize().as_i32()
    }

    pub fn uint_digest(&self) -> u32 {
        self.finalize().as_u32()
    }
}

impl_hasher_traits!(Murmur3x86_32, u32, Digest32, |digest: Digest32| {
    digest.as_u32().into()
});
