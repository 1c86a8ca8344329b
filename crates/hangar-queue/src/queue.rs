//! The [`CircularQueue`] type.

use std::fmt;

use hangar_core::{
    grown_capacity, shrunk_capacity, CapacityConfig, CollectionError, ConfigError, ResizeStats,
    Slots,
};

/// A FIFO queue over a circular slot array with automatic resize.
///
/// # Invariants
/// - `size <= capacity` and `capacity >= config.min_capacity`.
/// - The live elements occupy `size` slots starting at `head` and wrapping
///   forward; every other slot is vacated.
/// - `tail == (head + size) % capacity`. When the queue is full, `head` and
///   `tail` coincide; only `size` tells full from empty.
pub struct CircularQueue<T> {
    slots: Slots<T>,
    /// Next slot to remove from.
    head: u32,
    /// Next slot to write to.
    tail: u32,
    size: u32,
    config: CapacityConfig,
    stats: ResizeStats,
}

// Compile-time assertion: the queue owns its elements and is Send when they are.
const _: fn() = || {
    fn assert<T: Send>() {}
    assert::<CircularQueue<String>>();
};

impl<T> CircularQueue<T> {
    /// Create an empty queue with the default [`CapacityConfig`].
    pub fn new() -> Self {
        Self::build(CapacityConfig::default())
    }

    /// Create an empty queue with a custom [`CapacityConfig`].
    ///
    /// Initial capacity is `config.min_capacity`.
    pub fn with_config(config: CapacityConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: CapacityConfig) -> Self {
        Self {
            slots: Slots::new(config.min_capacity),
            head: 0,
            tail: 0,
            size: 0,
            config,
            stats: ResizeStats::with_initial_capacity(config.min_capacity),
        }
    }

    /// Add an item to the back of the queue.
    ///
    /// Accepts a plain `T` or an `Option<T>`. Passing `None` is rejected
    /// with [`CollectionError::InvalidArgument`].
    ///
    /// # Errors
    ///
    /// - [`CollectionError::InvalidArgument`] for `None`.
    /// - [`CollectionError::OutOfMemory`] if the queue is full and cannot
    ///   grow. The queue is unchanged.
    pub fn add(&mut self, item: impl Into<Option<T>>) -> Result<(), CollectionError> {
        let item = item.into().ok_or(CollectionError::InvalidArgument)?;
        self.grow_if_full()?;

        self.slots.put(self.tail, item);
        self.tail = self.next(self.tail);
        self.size += 1;
        Ok(())
    }

    /// Remove and return the front of the queue, or `None` if empty.
    pub fn remove(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots.take(self.head);
        self.head = self.next(self.head);
        self.size -= 1;
        self.shrink_if_sparse();
        item
    }

    /// Borrow the front of the queue, or `None` if empty.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots.get(self.head)
    }

    /// Number of elements in the queue.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Current number of slots in the backing storage.
    pub fn capacity(&self) -> u32 {
        self.slots.len()
    }

    /// Slot index of the front element (the "out" cursor).
    pub fn head_index(&self) -> u32 {
        self.head
    }

    /// Slot index the next added element will occupy (the "in" cursor).
    pub fn tail_index(&self) -> u32 {
        self.tail
    }

    /// The resize parameters this queue was built with.
    pub fn config(&self) -> &CapacityConfig {
        &self.config
    }

    /// Cumulative resize counters.
    pub fn stats(&self) -> &ResizeStats {
        &self.stats
    }

    /// Drop every element and return to the initial capacity.
    ///
    /// Resize counters are kept.
    pub fn clear(&mut self) {
        self.slots = Slots::new(self.config.min_capacity);
        self.head = 0;
        self.tail = 0;
        self.size = 0;
    }

    fn next(&self, cursor: u32) -> u32 {
        // cursor < capacity <= u32::MAX, so cursor + 1 cannot overflow.
        (cursor + 1) % self.capacity()
    }

    fn grow_if_full(&mut self) -> Result<(), CollectionError> {
        if self.size < self.capacity() {
            return Ok(());
        }
        let new_capacity = grown_capacity(self.capacity(), &self.config)?;
        let oom = CollectionError::OutOfMemory {
            capacity: self.capacity(),
            max_capacity: self.config.max_capacity,
        };
        self.slots
            .relinearize(self.head, self.size, new_capacity)
            .map_err(|_| oom)?;
        self.rebase();
        self.stats.record_grow(new_capacity, self.size);
        Ok(())
    }

    fn shrink_if_sparse(&mut self) {
        let Some(new_capacity) = shrunk_capacity(self.size, self.capacity(), &self.config) else {
            return;
        };
        // A refused shrink allocation keeps the larger storage.
        if self
            .slots
            .relinearize(self.head, self.size, new_capacity)
            .is_ok()
        {
            self.rebase();
            self.stats.record_shrink(self.size);
        }
    }

    /// Cursors after the live run was moved to slot 0.
    fn rebase(&mut self) {
        self.head = 0;
        self.tail = self.size % self.capacity();
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}
