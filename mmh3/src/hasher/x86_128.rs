use std::fmt::Display;

use num_traits::ToPrimitive;

use super::{impl_hasher_traits, seed_u32};
use crate::carry::BitCarry;
use crate::digest::Digest128;
use crate::error::Result;
use crate::mixer::x86_128;

/// Streaming MurmurHash3_x86_128.
///
/// Input accumulates byte by byte into four 32-bit lanes; a block is mixed
/// once all four are full. Whole blocks are read directly while the carry is
/// empty, which places bytes in exactly the lanes the bytewise path would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Murmur3x86_128 {
    h: [u32; 4],
    carry: BitCarry<u32, 4>,
    length: u64,
    seed: u32,
}

impl Murmur3x86_128 {
    pub const NAME: &'static str = "mmh3_x86_128";
    pub const DIGEST_SIZE: usize = Digest128::SIZE;
    pub const BLOCK_SIZE: usize = 32;

    const BLOCK_BITS: u32 = 128;

    pub fn new(seed: u32) -> Self {
        Self {
            h: [seed; 4],
            carry: BitCarry::new(),
            length: 0,
            seed,
        }
    }

    pub fn with_seed<S: ToPrimitive + Display>(seed: S) -> Result<Self> {
        Ok(Self::new(seed_u32(seed)?))
    }

    pub fn oneshot(data: &[u8], seed: u32) -> Digest128 {
        Digest128::from_u32_words(x86_128::hash(data, seed))
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    fn push_byte(&mut self, byte: u8) {
        self.carry.push_byte(byte);
        self.length += 1;

        if self.carry.shift() >= Self::BLOCK_BITS {
            self.h = x86_128::mix_block(self.h, self.carry.words());
            self.carry.drain(Self::BLOCK_BITS);
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        // Top up a partially filled carry first so the block loop below only
        // ever starts from an empty one.
        let fill = if self.carry.is_empty() {
            0
        } else {
            (x86_128::BLOCK_LEN - self.carry.len()).min(data.len())
        };
        let (head, data) = data.split_at(fill);
        for &byte in head {
            self.push_byte(byte);
        }

        let mut blocks = data.chunks_exact(x86_128::BLOCK_LEN);
        for block in &mut blocks {
            let mut lanes = [0u32; 4];
            for (lane, word) in lanes.iter_mut().zip(block.chunks_exact(4)) {
                *lane = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
            }
            self.h = x86_128::mix_block(self.h, lanes);
            self.length += x86_128::BLOCK_LEN as u64;
        }

        for &byte in blocks.remainder() {
            self.push_byte(byte);
        }
    }

    pub fn finalize(&self) -> Digest128 {
        Digest128::from_u32_words(x86_128::finalize(
            self.h,
            self.carry.words(),
            self.length,
        ))
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

impl_hasher_traits!(Murmur3x86_128, u32, Digest128, |digest: Digest128| {
    digest.as_u64_pair().0
});
