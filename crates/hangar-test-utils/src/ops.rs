//! Seeded operation scripts.
//!
//! Scripts are plain data so that the same sequence can be replayed
//! against a container and against a std model (`VecDeque` or `Vec`).
//! Inserted values are consecutive from 0, which makes ordering failures
//! easy to read in assertion output.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One step of a container script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// `add`/`push` the value.
    Insert(u64),
    /// `remove`/`pop`.
    Remove,
    /// `peek`.
    Peek,
}

/// A script of `len` operations drawn from a ChaCha8 stream seeded by `seed`.
///
/// Roughly `insert_percent`% of operations insert; of the rest, three in
/// four remove and one in four peek. Identical arguments give identical
/// scripts.
pub fn random_ops(seed: u64, len: usize, insert_percent: u32) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut next_value = 0u64;
    let mut ops = Vec::with_capacity(len);

    for _ in 0..len {
        if rng.next_u32() % 100 < insert_percent {
            ops.push(Op::Insert(next_value));
            next_value += 1;
        } else if rng.next_u32() % 4 == 0 {
            ops.push(Op::Peek);
        } else {
            ops.push(Op::Remove);
        }
    }
    ops
}

/// Fill-then-drain waves of increasing depth.
///
/// Wave `w` (1-based) inserts `w * depth` values and then removes all of
/// them, so every wave forces growth to the wave's peak and shrinks back.
pub fn wave_ops(waves: u32, depth: u32) -> Vec<Op> {
    let mut ops = Vec::new();
    let mut next_value = 0u64;
    for w in 1..=u64::from(waves) {
        let count = w * u64::from(depth);
        for _ in 0..count {
            ops.push(Op::Insert(next_value));
            next_value += 1;
        }
        ops.extend((0..count).map(|_| Op::Remove));
    }
    ops
}
