use num_traits::PrimInt;

/// Input bits absorbed by a streaming hasher but not yet mixed.
///
/// Bytes are packed low-to-high across `N` words of type `W`, exactly as the
/// one-shot algorithm would read them from a contiguous little-endian buffer.
/// `shift` counts the populated bits; the hasher owning the carry decides
/// when a block is complete and how the leftovers move down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitCarry<W, const N: usize> {
    words: [W; N],
    shift: u32,
}

impl<W: PrimInt + From<u8>, const N: usize> BitCarry<W, N> {
    pub const WORD_BITS: u32 = (std::mem::size_of::<W>() * 8) as u32;
    pub const CAPACITY_BITS: u32 = Self::WORD_BITS * N as u32;

    pub fn new() -> Self {
        Self {
            words: [W::zero(); N],
            shift: 0,
        }
    }

    pub fn shift(&self) -> u32 {
        self.shift
    }

    pub fn words(&self) -> [W; N] {
        self.words
    }

    pub fn word(&self, index: usize) -> W {
        self.words[index]
    }

    pub fn is_empty(&self) -> bool {
        self.shift == 0
    }

    /// Number of whole bytes held.
    pub fn len(&self) -> usize {
        (self.shift / 8) as usize
    }

    /// Appends one byte at bit offset `shift`.
    ///
    /// The caller must have drained the carry before `shift` reaches the
    /// capacity.
    pub fn push_byte(&mut self, byte: u8) {
        debug_assert!(self.shift < Self::CAPACITY_BITS);
        let index = (self.shift / Self::WORD_BITS) as usize;
        let offset = (self.shift % Self::WORD_BITS) as usize;
        self.words[index] = self.words[index] | (<W as From<u8>>::from(byte) << offset);
        self.shift += 8;
    }

    /// Replaces the stored words without touching `shift`.
    pub fn set_words(&mut self, words: [W; N]) {
        self.words = words;
    }

    /// Zeroes the words and drops `bits` from the offset.
    pub fn drain(&mut self, bits: u32) {
        debug_assert!(bits <= self.shift);
        self.words = [W::zero(); N];
        self.shift -= bits;
    }
}

impl<W: PrimInt + From<u8>, const N: usize> Default for BitCarry<W, N> {
    fn default() -> Self {
        Self::new()
    }
}
