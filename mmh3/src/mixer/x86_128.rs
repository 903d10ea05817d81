use super::x86_32::fmix32;

const C1: u32 = 0x239b961b;
const C2: u32 = 0xab0e9789;
const C3: u32 = 0x38b34ae5;
const C4: u32 = 0xa1e38b93;

pub const BLOCK_LEN: usize = 16;

#[inline]
fn mix_k(k: u32, rotation: u32, c: u32, next_c: u32) -> u32 {
    let k = k.wrapping_mul(c);
    let k = k.rotate_left(rotation);
    k.wrapping_mul(next_c)
}

#[inline]
fn mix_h(h: u32, neighbour: u32, rotation: u32, add: u32) -> u32 {
    let h = h.rotate_left(rotation);
    let h = h.wrapping_add(neighbour);
    h.wrapping_mul(5).wrapping_add(add)
}

/// One round over the four lanes of a block.
///
/// Lanes are mixed strictly in order; the fourth lane reads `h1` after the
/// first lane has already updated it.
#[inline]
pub fn mix_block(h: [u32; 4], k: [u32; 4]) -> [u32; 4] {
    let [mut h1, mut h2, mut h3, mut h4] = h;

    h1 ^= mix_k(k[0], 15, C1, C2);
    h1 = mix_h(h1, h2, 19, 0x561ccd1b);

    h2 ^= mix_k(k[1], 16, C2, C3);
    h2 = mix_h(h2, h3, 17, 0x0bcaa747);

    h3 ^= mix_k(k[2], 17, C3, C4);
    h3 = mix_h(h3, h4, 15, 0x96cd1c35);

    h4 ^= mix_k(k[3], 18, C4, C1);
    h4 = mix_h(h4, h1, 13, 0x32ac3b17);

    [h1, h2, h3, h4]
}

/// `tail` holds the last 0..=15 input bytes spread over four little-endian
/// lanes, zero-filled.
#[inline]
pub fn finalize(h: [u32; 4], tail: [u32; 4], len: u64) -> [u32; 4] {
    let [mut h1, mut h2, mut h3, mut h4] = h;

    h4 ^= mix_k(tail[3], 18, C4, C1);
    h3 ^= mix_k(tail[2], 17, C3, C4);
    h2 ^= mix_k(tail[1], 16, C2, C3);
    h1 ^= mix_k(tail[0], 15, C1, C2);

    let len = len as u32;
    h1 ^= len;
    h2 ^= len;
    h3 ^= len;
    h4 ^= len;

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    h1 = fmix32(h1);
    h2 = fmix32(h2);
    h3 = fmix32(h3);
    h4 = fmix32(h4);

    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);

    [h1, h2, h3, h4]
}

fn read_lanes(bytes: &[u8]) -> [u32; 4] {
    let mut lanes = [0u32; 4];
    for (i, &byte) in bytes.iter().enumerate().take(BLOCK_LEN) {
        lanes[i / 4] |= (byte as u32) << (8 * (i % 4));
    }
    lanes
}

pub fn hash(data: &[u8], seed: u32) -> [u32; 4] {
    let mut h = [seed; 4];
    let mut blocks = data.chunks_exact(BLOCK_LEN);
    for block in &mut blocks {
        h = mix_block(h, read_lanes(block));
    }
    finalize(h, read_lanes(blocks.remainder()), data.len() as u64)
}
