//! Finalized digests and their output representations.
//!
//! The hashers work on native-endian words. Every conversion to bytes or to
//! multi-word integers goes through this module and is little-endian, so the
//! same input gives the same output on every host.

/// Result of the 32-bit algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest32(u32);

impl Digest32 {
    pub const SIZE: usize = 4;

    pub fn new(h1: u32) -> Self {
        Self(h1)
    }

    pub fn to_bytes(self) -> [u8; Self::SIZE] {
        self.0.to_le_bytes()
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Two's-complement reinterpretation of the unsigned value.
    pub fn as_i32(self) -> i32 {
        self.0 as i32
    }

    /// Widens to `i64` keeping the requested signedness, which covers both
    /// the signed and unsigned 32-bit ranges without loss.
    pub fn to_int(self, signed: bool) -> i64 {
        if signed {
            self.as_i32().into()
        } else {
            self.as_u32().into()
        }
    }
}

/// Result of either 128-bit algorithm, held as two 64-bit words in output
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest128 {
    lo: u64,
    hi: u64,
}

impl Digest128 {
    pub const SIZE: usize = 16;

    pub fn from_u64_words(h1: u64, h2: u64) -> Self {
        Self { lo: h1, hi: h2 }
    }

    /// Lays four 32-bit words out the way they appear in the byte output.
    pub fn from_u32_words(h: [u32; 4]) -> Self {
        Self {
            lo: (h[1] as u64) << 32 | h[0] as u64,
            hi: (h[3] as u64) << 32 | h[2] as u64,
        }
    }

    pub fn to_bytes(self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[..8].copy_from_slice(&self.lo.to_le_bytes());
        out[8..].copy_from_slice(&self.hi.to_le_bytes());
        out
    }

    pub fn as_u128(self) -> u128 {
        u128::from_le_bytes(self.to_bytes())
    }

    pub fn as_i128(self) -> i128 {
        i128::from_le_bytes(self.to_bytes())
    }

    pub fn as_u64_pair(self) -> (u64, u64) {
        (self.lo, self.hi)
    }

    pub fn as_i64_pair(self) -> (i64, i64) {
        (self.lo as i64, self.hi as i64)
    }

    pub fn to_int(self, signed: bool) -> Int128 {
        if signed {
            Int128::Signed(self.as_i128())
        } else {
            Int128::Unsigned(self.as_u128())
        }
    }

    pub fn to_pair(self, signed: bool) -> Pair64 {
        if signed {
            let (lo, hi) = self.as_i64_pair();
            Pair64::Signed(lo, hi)
        } else {
            let (lo, hi) = self.as_u64_pair();
            Pair64::Unsigned(lo, hi)
        }
    }
}

/// A 128-bit digest as a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Int128 {
    Signed(i128),
    Unsigned(u128),
}

/// A 128-bit digest as two 64-bit integers, low word first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pair64 {
    Signed(i64, i64),
    Unsigned(u64, u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest32_representations() {
        let digest = Digest32::new(4138058784);
        assert_eq!(digest.as_i32(), -156908512);
        assert_eq!(digest.to_int(true), -156908512);
        assert_eq!(digest.to_int(false), 4138058784);
        assert_eq!(digest.to_bytes(), 4138058784u32.to_le_bytes());
    }

    #[test]
    fn digest128_byte_layout() {
        let digest = Digest128::from_u64_words(0x0807060504030201, 0x100f0e0d0c0b0a09);
        assert_eq!(
            digest.to_bytes(),
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]
        );
        assert_eq!(digest.as_u128(), 0x100f0e0d0c0b0a09_0807060504030201);

        let words = Digest128::from_u32_words([0x04030201, 0x08070605, 0x0c0b0a09, 0x100f0e0d]);
        assert_eq!(words, digest);
    }

    #[test]
    fn digest128_signed_views() {
        let digest = Digest128::from_u64_words(0xe271865701f54561, 0x7eaf87e42bba7d87);
        assert_eq!(
            digest.to_pair(true),
            Pair64::Signed(-2129773440516405919, 9128664383759220103)
        );
        assert_eq!(
            digest.to_pair(false),
            Pair64::Unsigned(16316970633193145697, 9128664383759220103)
        );

        let all_ones = Digest128::from_u64_words(u64::MAX, u64::MAX);
        assert_eq!(all_ones.to_int(true), Int128::Signed(-1));
        assert_eq!(all_ones.to_int(false), Int128::Unsigned(u128::MAX));
    }
}
