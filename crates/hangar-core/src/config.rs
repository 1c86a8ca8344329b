//! Container capacity configuration.

use crate::error::ConfigError;

/// Resize parameters shared by every Hangar container.
///
/// Controls the capacity floor, how storage grows when full, when and how
/// far it shrinks after removals, and the largest capacity that is
/// considered representable. Validated by [`validate()`](Self::validate)
/// before a container accepts it; immutable once the container is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityConfig {
    /// Initial capacity and the floor that shrinking never goes below.
    ///
    /// Default: 8. Must be at least 1.
    pub min_capacity: u32,

    /// Multiplier applied to the capacity on the first growth attempt.
    ///
    /// Default: 2. Must be at least 2.
    pub growth_factor: u32,

    /// Fixed number of slots added when multiplying by
    /// [`growth_factor`](Self::growth_factor) would exceed
    /// [`max_capacity`](Self::max_capacity).
    ///
    /// Default: 32. Must be at least 1.
    pub growth_increment: u32,

    /// Storage shrinks once `size * shrink_divisor < capacity`, and the new
    /// capacity is `capacity / shrink_divisor` (clamped to the floor).
    ///
    /// Default: 2, i.e. shrink to half once less than half full.
    /// Must be at least 2.
    pub shrink_divisor: u32,

    /// Largest representable capacity. Growth past this fails with
    /// [`CollectionError::OutOfMemory`](crate::CollectionError::OutOfMemory).
    ///
    /// Default: `i32::MAX`. Must be at least `min_capacity`.
    pub max_capacity: u32,
}

impl CapacityConfig {
    /// Default capacity floor.
    pub const DEFAULT_MIN_CAPACITY: u32 = 8;

    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: u32 = 2;

    /// Default fallback increment: `1 << 5`.
    pub const DEFAULT_GROWTH_INCREMENT: u32 = 1 << 5;

    /// Default shrink divisor (shrink factor 0.5).
    pub const DEFAULT_SHRINK_DIVISOR: u32 = 2;

    /// Default representable ceiling, matching a signed 32-bit index.
    pub const DEFAULT_MAX_CAPACITY: u32 = i32::MAX as u32;

    /// Create a config with all default values.
    pub const fn new() -> Self {
        Self {
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            growth_increment: Self::DEFAULT_GROWTH_INCREMENT,
            shrink_divisor: Self::DEFAULT_SHRINK_DIVISOR,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Return a copy with a different representable ceiling.
    pub const fn with_max_capacity(mut self, max_capacity: u32) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Return a copy with a different capacity floor.
    pub const fn with_min_capacity(mut self, min_capacity: u32) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    /// Check every structural invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_capacity == 0 {
            return Err(ConfigError::MinCapacityZero);
        }
        if self.growth_factor < 2 {
            return Err(ConfigError::GrowthFactorTooSmall {
                value: self.growth_factor,
            });
        }
        if self.growth_increment == 0 {
            return Err(ConfigError::GrowthIncrementZero);
        }
        if self.shrink_divisor < 2 {
            return Err(ConfigError::ShrinkDivisorTooSmall {
                value: self.shrink_divisor,
            });
        }
        if self.max_capacity < self.min_capacity {
            return Err(ConfigError::MaxBelowMin {
                min: self.min_capacity,
                max: self.max_capacity,
            });
        }
        Ok(())
    }
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = CapacityConfig::default();
        assert_eq!(config.min_capacity, 8);
        assert_eq!(config.growth_factor, 2);
        assert_eq!(config.growth_increment, 32);
        assert_eq!(config.shrink_divisor, 2);
        assert_eq!(config.max_capacity, 2_147_483_647);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_floor_rejected() {
        let config = CapacityConfig::new().with_min_capacity(0);
        assert_eq!(config.validate(), Err(ConfigError::MinCapacityZero));
    }

    #[test]
    fn growth_factor_one_rejected() {
        let config = CapacityConfig {
            growth_factor: 1,
            ..CapacityConfig::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GrowthFactorTooSmall { value: 1 })
        );
    }

    #[test]
    fn zero_increment_rejected() {
        let config = CapacityConfig {
            growth_increment: 0,
            ..CapacityConfig::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::GrowthIncrementZero));
    }

    #[test]
    fn shrink_divisor_one_rejected() {
        let config = CapacityConfig {
            shrink_divisor: 1,
            ..CapacityConfig::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ShrinkDivisorTooSmall { value: 1 })
        );
    }

    #[test]
    fn ceiling_below_floor_rejected() {
        let config = CapacityConfig::new().with_max_capacity(4);
        match config.validate() {
            Err(ConfigError::MaxBelowMin { min: 8, max: 4 }) => {}
            other => panic!("expected MaxBelowMin, got {other:?}"),
        }
    }

    #[test]
    fn ceiling_equal_to_floor_accepted() {
        let config = CapacityConfig::new().with_max_capacity(8);
        assert!(config.validate().is_ok());
    }
}
