//! Resize counters kept by each container.
//!
//! [`ResizeStats`] records how often storage was reallocated and how many
//! elements were copied doing so. The counters make the amortized-cost
//! guarantee observable: across `n` insertions from empty, the number of
//! elements moved by growth stays below `2 * n`.

/// Cumulative resize activity of one container.
///
/// Updated by the container after each completed resize. A resize that
/// fails leaves the counters unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResizeStats {
    /// Number of completed grow operations.
    pub grows: u64,
    /// Number of completed shrink operations.
    pub shrinks: u64,
    /// Total elements copied into new storage by grows and shrinks.
    pub elements_moved: u64,
    /// Largest capacity the container has held.
    pub peak_capacity: u32,
}

impl ResizeStats {
    /// Counters for a container whose initial capacity is `capacity`.
    pub fn with_initial_capacity(capacity: u32) -> Self {
        Self {
            peak_capacity: capacity,
            ..Self::default()
        }
    }

    /// Record a completed grow to `new_capacity` that moved `moved` elements.
    pub fn record_grow(&mut self, new_capacity: u32, moved: u32) {
        self.grows += 1;
        self.elements_moved += u64::from(moved);
        self.peak_capacity = self.peak_capacity.max(new_capacity);
    }

    /// Record a completed shrink that moved `moved` elements.
    pub fn record_shrink(&mut self, moved: u32) {
        self.shrinks += 1;
        self.elements_moved += u64::from(moved);
    }

    /// Total number of reallocations.
    pub fn resizes(&self) -> u64 {
        self.grows + self.shrinks
    }
}
