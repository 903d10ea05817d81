const C1: u64 = 0x87c37b91114253d5;
const C2: u64 = 0x4cf5ad432745937f;

pub const BLOCK_LEN: usize = 16;

#[inline]
pub fn mix_k1(k1: u64) -> u64 {
    let k1 = k1.wrapping_mul(C1);
    let k1 = k1.rotate_left(31);
    k1.wrapping_mul(C2)
}

#[inline]
pub fn mix_k2(k2: u64) -> u64 {
    let k2 = k2.wrapping_mul(C2);
    let k2 = k2.rotate_left(33);
    k2.wrapping_mul(C1)
}

/// One round over the block `(k1, k2)`.
///
/// `h1` is advanced against the incoming `h2`, and `h2` against the already
/// advanced `h1`.
#[inline]
pub fn mix_block(h1: u64, h2: u64, k1: u64, k2: u64) -> (u64, u64) {
    let mut h1 = h1 ^ mix_k1(k1);
    h1 = h1.rotate_left(27);
    h1 = h1.wrapping_add(h2);
    h1 = h1.wrapping_mul(5).wrapping_add(0x52dce729);

    let mut h2 = h2 ^ mix_k2(k2);
    h2 = h2.rotate_left(31);
    h2 = h2.wrapping_add(h1);
    h2 = h2.wrapping_mul(5).wrapping_add(0x38495ab5);

    (h1, h2)
}

#[inline]
pub fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51afd7ed558ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^= k >> 33;
    k
}

/// `t1` carries tail bytes 0..8 and `t2` bytes 8..16, both packed
/// little-endian and zero-filled.
#[inline]
pub fn finalize(h1: u64, h2: u64, t1: u64, t2: u64, len: u64) -> (u64, u64) {
    let mut h1 = h1 ^ mix_k1(t1);
    let mut h2 = h2 ^ mix_k2(t2);

    h1 ^= len;
    h2 ^= len;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    (h1, h2)
}

fn read_tail(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &byte| (acc << 8) | byte as u64)
}

pub fn hash(data: &[u8], seed: u64) -> (u64, u64) {
    let mut h1 = seed;
    let mut h2 = seed;
    let mut blocks = data.chunks_exact(BLOCK_LEN);
    for block in &mut blocks {
        let (lo, hi) = block.split_at(8);
        (h1, h2) = mix_block(h1, h2, read_tail(lo), read_tail(hi));
    }
    let tail = blocks.remainder();
    let (t1, t2) = tail.split_at(tail.len().min(8));
    finalize(h1, h2, read_tail(t1), read_tail(t2), data.len() as u64)
}
