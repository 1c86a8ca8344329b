//! Grow and shrink arithmetic.
//!
//! Both containers resize by the same rules; only their relinearization
//! differs. All arithmetic is done in `u64` so that `capacity * factor`
//! can be compared against the ceiling without wrapping.

use crate::config::CapacityConfig;
use crate::error::CollectionError;

/// Capacity to grow to when storage of `capacity` slots is full.
///
/// Tries `capacity * growth_factor` first. If that exceeds
/// `max_capacity`, falls back to `capacity + growth_increment`. If that
/// also exceeds the ceiling, returns [`CollectionError::OutOfMemory`].
pub fn grown_capacity(capacity: u32, config: &CapacityConfig) -> Result<u32, CollectionError> {
    let max = u64::from(config.max_capacity);

    let multiplied = u64::from(capacity) * u64::from(config.growth_factor);
    if multiplied <= max {
        // <= max_capacity, which is a u32.
        return Ok(multiplied as u32);
    }

    let stepped = u64::from(capacity) + u64::from(config.growth_increment);
    if stepped <= max {
        return Ok(stepped as u32);
    }

    Err(CollectionError::OutOfMemory {
        capacity,
        max_capacity: config.max_capacity,
    })
}

/// Capacity to shrink to after a removal left `size` live elements in
/// storage of `capacity` slots, or `None` if no shrink applies.
///
/// Shrinks only when `size * shrink_divisor < capacity` and
/// `size > min_capacity`. The result is
/// `max(capacity / shrink_divisor, min_capacity)`.
pub fn shrunk_capacity(size: u32, capacity: u32, config: &CapacityConfig) -> Option<u32> {
    if u64::from(size) * u64::from(config.shrink_divisor) >= u64::from(capacity) {
        return None;
    }
    if size <= config.min_capacity {
        return None;
    }
    let target = (capacity / config.shrink_divisor).max(config.min_capacity);
    (target < capacity).then_some(target)
}
