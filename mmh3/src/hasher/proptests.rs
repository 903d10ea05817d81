use proptest::prelude::*;

use super::{Murmur3x64_128, Murmur3x86_128, Murmur3x86_32, StreamingHasher};

/// Cuts `data` at the given points (taken modulo its length, in order).
fn chunks<'a>(data: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
    let mut points: Vec<usize> = cuts.iter().map(|cut| cut % (data.len() + 1)).collect();
    points.sort_unstable();
    let mut pieces = Vec::with_capacity(points.len() + 1);
    let mut start = 0;
    for point in points {
        pieces.push(&data[start..point]);
        start = point;
    }
    pieces.push(&data[start..]);
    pieces
}

fn streamed<H: StreamingHasher>(seed: H::Seed, pieces: &[&[u8]]) -> H {
    let mut hasher = H::new(seed);
    for piece in pieces {
        hasher.update(piece);
    }
    hasher
}

fn data() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..300)
}

fn cuts() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(any::<usize>(), 0..12)
}

proptest! {
    #[test]
    fn x86_32_chunking_invariance(seed in any::<u32>(), data in data(), cuts in cuts()) {
        let hasher: Murmur3x86_32 = streamed(seed, &chunks(&data, &cuts));
        prop_assert_eq!(hasher.finalize(), Murmur3x86_32::oneshot(&data, seed));
        prop_assert_eq!(hasher.length(), data.len() as u64);
    }

    #[test]
    fn x64_128_chunking_invariance(seed in any::<u64>(), data in data(), cuts in cuts()) {
        let hasher: Murmur3x64_128 = streamed(seed, &chunks(&data, &cuts));
        prop_assert_eq!(hasher.finalize(), Murmur3x64_128::oneshot(&data, seed));
    }

    #[test]
    fn x86_128_chunking_invariance(seed in any::<u32>(), data in data(), cuts in cuts()) {
        let hasher: Murmur3x86_128 = streamed(seed, &chunks(&data, &cuts));
        prop_assert_eq!(hasher.finalize(), Murmur3x86_128::oneshot(&data, seed));
    }

    #[test]
    fn digest_between_updates(data in data(), cuts in cuts()) {
        let mut hasher = Murmur3x64_128::default();
        let mut seen = 0;
        for piece in chunks(&data, &cuts) {
            hasher.update(piece);
            seen += piece.len();
            prop_assert_eq!(hasher.finalize(), Murmur3x64_128::oneshot(&data[..seen], 0));
            prop_assert_eq!(hasher.finalize(), hasher.finalize());
        }
    }

    #[test]
    fn forks_do_not_interfere(prefix in data(), left in data(), right in data()) {
        let mut base = Murmur3x86_128::new(3);
        base.update(&prefix);
        let mut fork = base.copy();

        base.update(&left);
        fork.update(&right);

        let mut expected_left = prefix.clone();
        expected_left.extend_from_slice(&left);
        let mut expected_right = prefix;
        expected_right.extend_from_slice(&right);

        prop_assert_eq!(base.finalize(), Murmur3x86_128::oneshot(&expected_left, 3));
        prop_assert_eq!(fork.finalize(), Murmur3x86_128::oneshot(&expected_right, 3));
    }
}
