//! Stateless MurmurHash3 primitives.
//!
//! Each variant exposes the block round (`mix_block`), the finalization step
//! (`finalize`) taking the unconsumed tail words and the total input length,
//! and a one-shot `hash` over a contiguous buffer. The streaming hashers in
//! [`crate::hasher`] are built on the same functions, which is what keeps the
//! two paths bit-identical.

pub mod x64_128;
pub mod x86_128;
pub mod x86_32;
