use std::io::{ErrorKind, Read};

use tracing::{debug, instrument, trace};

use crate::error::Result;
use crate::hasher::StreamingHasher;
use crate::options::HashOptions;

/// Feeds everything `reader` yields into `hasher` and returns the number of
/// bytes absorbed.
///
/// The reader is drained into a copy of `hasher`, which replaces it only
/// once the end of input is reached. On error the hasher is left exactly as
/// it was.
#[instrument(skip_all, fields(hasher = H::NAME, chunk_size = options.chunk_size))]
pub fn hash_reader<H, R>(hasher: &mut H, mut reader: R, options: &HashOptions) -> Result<u64>
where
    H: StreamingHasher,
    R: Read,
{
    let mut scratch = hasher.copy();
    let mut buffer = vec![0u8; options.chunk_size.max(1)];
    let mut total = 0u64;
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        trace!(read, "chunk");
        scratch.update(&buffer[..read]);
        total += read as u64;
    }
    debug!(total, "reader exhausted");
    *hasher = scratch;
    Ok(total)
}
