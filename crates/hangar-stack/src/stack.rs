//! The [`BoundedStack`] type.

use std::fmt;

use hangar_core::{
    grown_capacity, shrunk_capacity, CapacityConfig, CollectionError, ConfigError, ResizeStats,
    Slots,
};

/// A LIFO stack over a contiguous slot array with automatic resize.
///
/// # Invariants
/// - `size <= capacity` and `capacity >= config.min_capacity`.
/// - Slots `[0, size)` are occupied; slots `[size, capacity)` are vacated.
pub struct BoundedStack<T> {
    slots: Slots<T>,
    /// Also the index of the next free slot.
    size: u32,
    config: CapacityConfig,
    stats: ResizeStats,
}

const _: fn() = || {
    fn assert<T: Send>() {}
    assert::<BoundedStack<String>>();
};

impl<T> BoundedStack<T> {
    /// Create an empty stack with the default [`CapacityConfig`].
    pub fn new() -> Self {
        Self::build(CapacityConfig::default())
    }

    /// Create an empty stack with a custom [`CapacityConfig`].
    pub fn with_config(config: CapacityConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: CapacityConfig) -> Self {
        Self {
            slots: Slots::new(config.min_capacity),
            size: 0,
            config,
            stats: ResizeStats::with_initial_capacity(config.min_capacity),
        }
    }

    /// Push an item onto the top of the stack.
    ///
    /// Accepts a plain `T` or an `Option<T>`; `None` is rejected.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::InvalidArgument`] for `None`.
    /// - [`CollectionError::OutOfMemory`] if the stack is full and cannot
    ///   grow. The stack is unchanged.
    pub fn push(&mut self, item: impl Into<Option<T>>) -> Result<(), CollectionError> {
        let item = item.into().ok_or(CollectionError::InvalidArgument)?;
        self.grow_if_full()?;

        self.slots.put(self.size, item);
        self.size += 1;
        Ok(())
    }

    /// Remove and return the top of the stack.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyStructure`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::EmptyStructure);
        }
        let top = self.size - 1;
        let item = self
            .slots
            .take(top)
            .ok_or(CollectionError::EmptyStructure)?;
        self.size = top;
        self.shrink_if_sparse();
        Ok(item)
    }

    /// Borrow the top of the stack.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyStructure`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::EmptyStructure);
        }
        self.slots
            .get(self.size - 1)
            .ok_or(CollectionError::EmptyStructure)
    }

    /// Number of elements on the stack.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Current number of slots in the backing storage.
    pub fn capacity(&self) -> u32 {
        self.slots.len()
    }

    /// The resize parameters this stack was built with.
    pub fn config(&self) -> &CapacityConfig {
        &self.config
    }

    /// Cumulative resize counters.
    pub fn stats(&self) -> &ResizeStats {
        &self.stats
    }

    /// Drop every element and return to the initial capacity.
    pub fn clear(&mut self) {
        self.slots = Slots::new(self.config.min_capacity);
        self.size = 0;
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
            .relinearize(0, self.size, new_capacity)
            .map_err(|_| oom)?;
        self.stats.record_grow(new_capacity, self.size);
        Ok(())
    }

    fn shrink_if_sparse(&mut self) {
        let Some(new_capacity) = shrunk_capacity(self.size, self.capacity(), &self.config) else {
            return;
        };
        if self.slots.relinearize(0, self.size, new_capacity).is_ok() {
            self.stats.record_shrink(self.size);
        }
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .finish()
    }
}
