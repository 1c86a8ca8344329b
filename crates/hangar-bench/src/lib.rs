//! Benchmark profiles for the Hangar containers.
//!
//! - [`steady_profile`]: a long mixed script that hovers around a stable size
//! - [`churn_profile`]: fill-then-drain waves that resize on every wave
//! - [`replay_queue`] and [`replay_stack`]: run a script to completion

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hangar::prelude::*;
use hangar_test_utils::{random_ops, wave_ops, Op};

/// Seeded mixed script with a slight insert bias, so the container grows
/// slowly and resizes rarely.
pub fn steady_profile(seed: u64, len: usize) -> Vec<Op> {
    random_ops(seed, len, 55)
}

/// Waves up to `waves * 1024` elements deep.
pub fn churn_profile(waves: u32) -> Vec<Op> {
    wave_ops(waves, 1024)
}

/// Run `ops` against `q` and return a checksum of what came out.
pub fn replay_queue(ops: &[Op], q: &mut CircularQueue<u64>) -> Result<u64, CollectionError> {
    let mut sum = 0u64;
    for op in ops {
        match *op {
            Op::Insert(v) => q.add(v)?,
            Op::Remove => sum = sum.wrapping_add(q.remove().unwrap_or(0)),
            Op::Peek => sum = sum.wrapping_add(q.peek().copied().unwrap_or(0)),
        }
    }
    Ok(sum)
}

/// Run `ops` against `s` and return a checksum of what came out.
///
/// Removes and peeks on an empty stack are counted as zero.
pub fn replay_stack(ops: &[Op], s: &mut BoundedStack<u64>) -> Result<u64, CollectionError> {
    let mut sum = 0u64;
    for op in ops {
        match *op {
            Op::Insert(v) => s.push(v)?,
            Op::Remove => sum = sum.wrapping_add(s.pop().unwrap_or(0)),
            Op::Peek => sum = sum.wrapping_add(s.peek().copied().unwrap_or(0)),
        }
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn churn_profile_balances() {
        let ops = churn_profile(2);
        let inserts = ops.iter().filter(|op| matches!(op, Op::Insert(_))).count();
        assert_eq!(inserts, 3 * 1024);
        assert_eq!(ops.len(), 2 * inserts);
    }

    #[test]
    fn replays_sum_every_inserted_value_on_full_drain() {
        let ops = churn_profile(1);
        let expected: u64 = (0..1024).sum();
        assert_eq!(replay_queue(&ops, &mut CircularQueue::new()).unwrap(), expected);
        assert_eq!(replay_stack(&ops, &mut BoundedStack::new()).unwrap(), expected);
    }

    #[test]
    fn replay_reports_ceiling() {
        let ops = churn_profile(1);
        let tight = CapacityConfig::new().with_max_capacity(64);
        let mut q = CircularQueue::with_config(tight).unwrap();
        assert!(matches!(
            replay_queue(&ops, &mut q),
            Err(CollectionError::OutOfMemory { .. })
        ));
    }
}
