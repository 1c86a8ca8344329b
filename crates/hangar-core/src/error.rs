//! Error types for the Hangar containers.
//!
//! [`CollectionError`] covers failures of container operations;
//! [`ConfigError`] covers rejected [`CapacityConfig`](crate::CapacityConfig)
//! values. An empty queue is not an error: its `remove()` and `peek()`
//! report a miss as `None`.

use std::error::Error;
use std::fmt;

/// Errors returned by container operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionError {
    /// An absent marker (`None`) was offered as an element.
    ///
    /// The container is unchanged.
    InvalidArgument,
    /// A required resize could not be satisfied: the next capacity is not
    /// representable under the configured ceiling, or the allocator refused
    /// the request.
    ///
    /// Fatal for the operation that triggered it. The container is left in
    /// its pre-operation state.
    OutOfMemory {
        /// Capacity at the time of the failed growth.
        capacity: u32,
        /// Configured representable ceiling.
        max_capacity: u32,
    },
    /// `pop()` or `peek()` on an empty stack.
    ///
    /// The stack is unchanged.
    EmptyStructure,
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "absent element cannot be stored"),
            Self::OutOfMemory {
                capacity,
                max_capacity,
            } => {
                write!(
                    f,
                    "out of memory: cannot grow capacity {capacity} within maximum {max_capacity}"
                )
            }
            Self::EmptyStructure => write!(f, "structure is empty"),
        }
    }
}

impl Error for CollectionError {}

/// Errors detected by [`CapacityConfig::validate()`](crate::CapacityConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_capacity` is zero.
    MinCapacityZero,
    /// `growth_factor` is below 2, so growth would not enlarge storage.
    GrowthFactorTooSmall {
        /// The configured factor.
        value: u32,
    },
    /// `growth_increment` is zero.
    GrowthIncrementZero,
    /// `shrink_divisor` is below 2, so shrinking would not reduce storage.
    ShrinkDivisorTooSmall {
        /// The configured divisor.
        value: u32,
    },
    /// `max_capacity` is smaller than `min_capacity`.
    MaxBelowMin {
        /// The configured floor.
        min: u32,
        /// The configured ceiling.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinCapacityZero => write!(f, "min_capacity must be at least 1"),
            Self::GrowthFactorTooSmall { value } => {
                write!(f, "growth_factor must be at least 2, got {value}")
            }
            Self::GrowthIncrementZero => write!(f, "growth_increment must be at least 1"),
            Self::ShrinkDivisorTooSmall { value } => {
                write!(f, "shrink_divisor must be at least 2, got {value}")
            }
            Self::MaxBelowMin { min, max } => {
                write!(f, "max_capacity {max} is below min_capacity {min}")
            }
        }
    }
}

impl Error for ConfigError {}
