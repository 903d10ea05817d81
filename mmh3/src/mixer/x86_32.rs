const C1: u32 = 0xcc9e2d51;
const C2: u32 = 0x1b873593;

pub const BLOCK_LEN: usize = 4;

#[inline]
pub fn mix_k1(k1: u32) -> u32 {
    let k1 = k1.wrapping_mul(C1);
    let k1 = k1.rotate_left(15);
    k1.wrapping_mul(C2)
}

#[inline]
pub fn mix_block(h1: u32, k1: u32) -> u32 {
    let h1 = h1 ^ mix_k1(k1);
    let h1 = h1.rotate_left(13);
    h1.wrapping_mul(5).wrapping_add(0xe6546b64)
}

#[inline]
pub fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

/// `tail` holds the last 0..=3 input bytes packed little-endian, zero when
/// there are none.
#[inline]
pub fn finalize(h1: u32, tail: u32, len: u64) -> u32 {
    let h1 = h1 ^ mix_k1(tail);
    // The reference algorithm folds the length in as a 32-bit value.
    let h1 = h1 ^ len as u32;
    fmix32(h1)
}

pub fn hash(data: &[u8], seed: u32) -> u32 {
    let mut h1 = seed;
    let mut blocks = data.chunks_exact(BLOCK_LEN);
    for block in &mut blocks {
        h1 = mix_block(h1, u32::from_le_bytes([block[0], block[1], block[2], block[3]]));
    }
    let tail = blocks
        .remainder()
        .iter()
        .rev()
        .fold(0u32, |acc, &byte| (acc << 8) | byte as u32);
    finalize(h1, tail, data.len() as u64)
}
