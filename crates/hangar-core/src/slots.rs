//! Owned, fixed-length backing storage for the containers.
//!
//! # Invariants
//! - The slot count never changes after construction; resizing builds a
//!   new [`Slots`] and drops the old one.
//! - A vacated slot holds `None`. `None` is never a stored element.
//!
//! Cursor arithmetic is done by the owning container. [`Slots`] only knows
//! how to read, write, and clear a slot, and how to move a wrapped run of
//! live slots into fresh storage starting at slot 0.

use std::collections::TryReserveError;
use std::fmt;

// u32 slot indices must widen losslessly to usize.
const _: () = assert!(
    std::mem::size_of::<usize>() >= std::mem::size_of::<u32>(),
    "Platform must have at least 32-bit addressing"
);

#[inline(always)]
fn index(i: u32) -> usize {
    i as usize
}

/// A contiguous run of element slots owned by exactly one container.
pub struct Slots<T> {
    buf: Box<[Option<T>]>,
}

impl<T> Slots<T> {
    /// Allocate `len` empty slots.
    ///
    /// Used for the initial storage, whose size is the configured floor.
    /// Resizes go through [`try_new`](Self::try_new) so that allocator
    /// refusal can be reported instead of aborting.
    pub fn new(len: u32) -> Self {
        let mut buf = Vec::with_capacity(index(len));
        buf.resize_with(index(len), || None);
        Self {
            buf: buf.into_boxed_slice(),
        }
    }

    /// Allocate `len` empty slots, reporting allocator refusal.
    pub fn try_new(len: u32) -> Result<Self, TryReserveError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(index(len))?;
        buf.resize_with(index(len), || None);
        Ok(Self {
            buf: buf.into_boxed_slice(),
        })
    }

    /// Number of slots.
    pub fn len(&self) -> u32 {
        // Lengths only ever come in as u32.
        self.buf.len() as u32
    }

    /// Whether there are zero slots.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the element in slot `i`, if the slot is occupied.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn get(&self, i: u32) -> Option<&T> {
        self.buf[index(i)].as_ref()
    }

    /// Store `item` in slot `i`, returning whatever the slot held.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn put(&mut self, i: u32, item: T) -> Option<T> {
        self.buf[index(i)].replace(item)
    }

    /// Take the element out of slot `i`, leaving the slot vacated.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn take(&mut self, i: u32) -> Option<T> {
        self.buf[index(i)].take()
    }

    /// Number of occupied slots. O(len); intended for assertions and tests.
    pub fn occupied(&self) -> usize {
        self.buf.iter().filter(|slot| slot.is_some()).count()
    }

    /// Move `count` elements, starting at slot `start` and wrapping past the
    /// end, into new storage of `new_len` slots at positions `[0, count)`.
    ///
    /// On allocation failure `self` is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `count > new_len` or `count > len()`.
    pub fn relinearize(
        &mut self,
        start: u32,
        count: u32,
        new_len: u32,
    ) -> Result<(), TryReserveError> {
        assert!(count <= new_len, "relinearize: {count} elements do not fit in {new_len} slots");
        assert!(count <= self.len(), "relinearize: {count} elements exceed {} slots", self.len());

        let mut fresh = Self::try_new(new_len)?;
        let len = u64::from(self.len());
        for i in 0..count {
            // start < len and i < len, so the sum fits in u64 and the
            // wrapped position fits in u32.
            let from = ((u64::from(start) + u64::from(i)) % len) as u32;
            fresh.buf[index(i)] = self.take(from);
        }
        *self = fresh;
        Ok(())
    }
}

impl<T> fmt::Debug for Slots<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slots")
            .field("len", &self.buf.len())
            .field("occupied", &self.occupied())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slots_are_vacant() {
        let slots: Slots<u32> = Slots::new(8);
        assert_eq!(slots.len(), 8);
        assert_eq!(slots.occupied(), 0);
        assert!((0..8).all(|i| slots.get(i).is_none()));
    }

    #[test]
    fn put_take_leaves_slot_vacant() {
        let mut slots = Slots::new(4);
        assert_eq!(slots.put(2, "a"), None);
        assert_eq!(slots.get(2), Some(&"a"));
        assert_eq!(slots.take(2), Some("a"));
        assert_eq!(slots.get(2), None);
        assert_eq!(slots.occupied(), 0);
    }

    #[test]
    fn relinearize_unwraps_run() {
        let mut slots = Slots::new(4);
        // Run of 3 starting at slot 2: 2, 3, 0.
        slots.put(2, 'x');
        slots.put(3, 'y');
        slots.put(0, 'z');
        slots.relinearize(2, 3, 8).unwrap();
        assert_eq!(slots.len(), 8);
        assert_eq!(slots.get(0), Some(&'x'));
        assert_eq!(slots.get(1), Some(&'y'));
        assert_eq!(slots.get(2), Some(&'z'));
        assert_eq!(slots.occupied(), 3);
    }

    #[test]
    fn relinearize_can_shrink() {
        let mut slots = Slots::new(16);
        for i in 0..5 {
            slots.put(i, i * 10);
        }
        slots.relinearize(0, 5, 8).unwrap();
        assert_eq!(slots.len(), 8);
        for i in 0..5 {
            assert_eq!(slots.get(i), Some(&(i * 10)));
        }
    }

    #[test]
    fn relinearize_drops_nothing() {
        use std::rc::Rc;
        let tracker = Rc::new(());
        let mut slots = Slots::new(4);
        for i in 0..4 {
            slots.put(i, Rc::clone(&tracker));
        }
        slots.relinearize(1, 4, 8).unwrap();
        assert_eq!(Rc::strong_count(&tracker), 5);
        drop(slots);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    #[should_panic(expected = "do not fit")]
    fn relinearize_rejects_too_small_target() {
        let mut slots: Slots<u8> = Slots::new(8);
        let _ = slots.relinearize(0, 8, 4);
    }
}
