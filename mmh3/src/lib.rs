//! MurmurHash3 in its three published variants, one-shot and streaming.
//!
//! ```
//! use mmh3::{HashOptions, Murmur3x86_32};
//!
//! let mut hasher = Murmur3x86_32::new(0);
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.uint_digest(), 1586663183);
//! assert_eq!(mmh3::hash(b"hello world", &HashOptions::default()), 1586663183);
//! ```
//!
//! Not suitable where collision resistance against adversarial input is
//! needed.

pub mod carry;
pub mod digest;
pub mod error;
pub mod hasher;
pub mod io;
pub mod mixer;
pub mod oneshot;
pub mod options;
mod utils;

pub use digest::{Digest128, Digest32, Int128, Pair64};
pub use error::{Error, Result};
pub use hasher::{Murmur3x64_128, Murmur3x86_128, Murmur3x86_32, StreamingHasher};
pub use io::hash_reader;
pub use oneshot::{hash, hash128, hash64, hash_bytes, hash_from_buffer};
pub use options::{Arch, HashOptions};
