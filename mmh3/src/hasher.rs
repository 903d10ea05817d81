//! Incremental MurmurHash3 hashers.
//!
//! Input may be split into any number of chunks of any size; the digest is
//! always the one the one-shot function gives for the concatenated input.
//! Digest calls borrow the hasher immutably, so hashing can continue after a
//! digest has been taken, and [`StreamingHasher::copy`] forks a shared prefix
//! into independent hashers.

use std::fmt::Display;

use num_traits::ToPrimitive;

use crate::error::{Error, Result};

pub mod x64_128;
pub mod x86_128;
pub mod x86_32;

#[cfg(test)]
mod proptests;

pub use x64_128::Murmur3x64_128;
pub use x86_128::Murmur3x86_128;
pub use x86_32::Murmur3x86_32;

pub trait StreamingHasher: Clone {
    const NAME: &'static str;
    const DIGEST_SIZE: usize;
    const BLOCK_SIZE: usize;

    type Seed: Copy;
    type Digest: Copy;

    fn new(seed: Self::Seed) -> Self;

    fn update(&mut self, data: &[u8]);

    fn finalize(&self) -> Self::Digest;

    /// Total number of bytes absorbed so far.
    fn length(&self) -> u64;

    fn copy(&self) -> Self {
        self.clone()
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn digest_size(&self) -> usize {
        Self::DIGEST_SIZE
    }

    fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }
}

pub(crate) fn seed_u32<S: ToPrimitive + Display>(seed: S) -> Result<u32> {
    seed.to_u32().ok_or_else(|| Error::SeedOutOfRange {
        seed: seed.to_string(),
        bits: 32,
    })
}

pub(crate) fn seed_u64<S: ToPrimitive + Display>(seed: S) -> Result<u64> {
    seed.to_u64().ok_or_else(|| Error::SeedOutOfRange {
        seed: seed.to_string(),
        bits: 64,
    })
}

/// Wires a hasher into `StreamingHasher`, `Default`, `io::Write` and
/// `hash::Hasher`. `$finish` folds the digest into the `u64` returned by
/// `Hasher::finish`.
macro_rules! impl_hasher_traits {
    ($ty:ty, $seed:ty, $digest:ty, $finish:expr) => {
        impl $crate::hasher::StreamingHasher for $ty {
            const NAME: &'static str = <$ty>::NAME;
            const DIGEST_SIZE: usize = <$ty>::DIGEST_SIZE;
            const BLOCK_SIZE: usize = <$ty>::BLOCK_SIZE;

            type Seed = $seed;
            type Digest = $digest;

            fn new(seed: $seed) -> Self {
                <$ty>::new(seed)
            }

            fn update(&mut self, data: &[u8]) {
                <$ty>::update(self, data)
            }

            fn finalize(&self) -> $digest {
                <$ty>::finalize(self)
            }

            fn length(&self) -> u64 {
                <$ty>::length(self)
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                <$ty>::new(0)
            }
        }

        impl std::io::Write for $ty {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                <$ty>::update(self, buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        impl std::hash::Hasher for $ty {
            fn write(&mut self, bytes: &[u8]) {
                <$ty>::update(self, bytes)
            }

            fn finish(&self) -> u64 {
                let finish: fn($digest) -> u64 = $finish;
                finish(<$ty>::finalize(self))
            }
        }
    };
}

pub(crate) use impl_hasher_traits;

#[cfg(test)]
mod tests {
    use super::*;

    fn split_updates<H: StreamingHasher>(seed: H::Seed, data: &[u8], split: usize) -> H::Digest {
        let (head, tail) = data.split_at(split);
        let mut hasher = H::new(seed);
        hasher.update(head);
        hasher.update(tail);
        hasher.finalize()
    }

    #[test]
    fn attributes() {
        let h32 = Murmur3x86_32::default();
        assert_eq!((h32.name(), h32.digest_size(), h32.block_size()), ("mmh3_32", 4, 12));

        let h64 = Murmur3x64_128::default();
        assert_eq!(
            (h64.name(), h64.digest_size(), h64.block_size()),
            ("mmh3_x64_128", 16, 32)
        );

        let h86 = Murmur3x86_128::default();
        assert_eq!(
            (h86.name(), h86.digest_size(), h86.block_size()),
            ("mmh3_x86_128", 16, 32)
        );
    }

    #[test]
    fn generic_split() {
        let data = b"The quick brown fox jumps over the lazy dog";
        for split in 0..=data.len() {
            assert_eq!(
                split_updates::<Murmur3x86_32>(7, data, split),
                Murmur3x86_32::oneshot(data, 7)
            );
            assert_eq!(
                split_updates::<Murmur3x64_128>(7, data, split),
                Murmur3x64_128::oneshot(data, 7)
            );
            assert_eq!(
                split_updates::<Murmur3x86_128>(7, data, split),
                Murmur3x86_128::oneshot(data, 7)
            );
        }
    }

    #[test]
    fn io_write() {
        use std::io::Write;

        let mut hasher = Murmur3x64_128::default();
        write!(hasher, "hello {}", "world").unwrap();
        hasher.flush().unwrap();
        assert_eq!(hasher.finalize(), Murmur3x64_128::oneshot(b"hello world", 0));
    }

    #[test]
    fn std_hasher() {
        use std::hash::Hasher;

        let mut hasher = Murmur3x86_32::default();
        Hasher::write(&mut hasher, b"hello world");
        assert_eq!(hasher.finish(), 1586663183);

        let mut hasher = Murmur3x64_128::default();
        Hasher::write(&mut hasher, b"foo");
        assert_eq!(hasher.finish(), 0xe271865701f54561);
    }

    #[test]
    fn seed_ranges() {
        assert_eq!(seed_u32(42u64).unwrap(), 42);
        assert!(matches!(
            seed_u32(-1i32),
            Err(Error::SeedOutOfRange { bits: 32, .. })
        ));
        assert!(matches!(
            seed_u32(1u64 << 32),
            Err(Error::SeedOutOfRange { bits: 32, .. })
        ));
        assert_eq!(seed_u64(u64::MAX as u128).unwrap(), u64::MAX);
        assert!(matches!(
            seed_u64(u64::MAX as u128 + 1),
            Err(Error::SeedOutOfRange { bits: 64, .. })
        ));
    }
}
