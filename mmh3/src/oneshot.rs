//! One-shot hashing of complete buffers.

use tracing::{debug, instrument};

use crate::digest::{Digest128, Int128, Pair64};
use crate::hasher::{Murmur3x64_128, Murmur3x86_128, Murmur3x86_32};
use crate::options::{Arch, HashOptions};

/// MurmurHash3_x86_32 of `key`, signed unless `options.signed` says otherwise.
pub fn hash(key: &[u8], options: &HashOptions) -> i64 {
    Murmur3x86_32::oneshot(key, options.seed).to_int(options.signed_or(true))
}

/// Same value as [`hash`], computed by streaming `key` in
/// `options.chunk_size` pieces. Meant for large in-memory buffers.
#[instrument(skip_all, fields(len = key.len(), seed = options.seed))]
pub fn hash_from_buffer(key: &[u8], options: &HashOptions) -> i64 {
    let mut hasher = Murmur3x86_32::new(options.seed);
    let mut chunks = 0usize;
    for chunk in key.chunks(options.chunk_size.max(1)) {
        hasher.update(chunk);
        chunks += 1;
    }
    debug!(chunks, "hashed buffer");
    hasher.finalize().to_int(options.signed_or(true))
}

fn digest128(key: &[u8], options: &HashOptions) -> Digest128 {
    match options.arch {
        Arch::X64 => Murmur3x64_128::oneshot(key, options.seed.into()),
        Arch::X86 => Murmur3x86_128::oneshot(key, options.seed),
    }
}

/// 128-bit hash as two 64-bit integers, signed by default.
pub fn hash64(key: &[u8], options: &HashOptions) -> Pair64 {
    digest128(key, options).to_pair(options.signed_or(true))
}

/// 128-bit hash as one integer, unsigned by default.
pub fn hash128(key: &[u8], options: &HashOptions) -> Int128 {
    digest128(key, options).to_int(options.signed_or(false))
}

pub fn hash_bytes(key: &[u8], options: &HashOptions) -> [u8; Digest128::SIZE] {
    digest128(key, options).to_bytes()
}
