//! Hangar: array-backed containers with amortized resize.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Hangar sub-crates. For most users, adding `hangar` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hangar::prelude::*;
//!
//! let mut queue: CircularQueue<u32> = CircularQueue::new();
//! for i in 1..=9u32 {
//!     queue.add(i).unwrap();
//! }
//! assert_eq!(queue.capacity(), 16);
//! assert_eq!(queue.remove(), Some(1));
//!
//! let mut stack: BoundedStack<&str> = BoundedStack::new();
//! stack.push("sword").unwrap();
//! assert_eq!(stack.pop(), Ok("sword"));
//! assert_eq!(stack.pop(), Err(CollectionError::EmptyStructure));
//!
//! // Absent elements are never stored.
//! assert_eq!(queue.add(None::<u32>), Err(CollectionError::InvalidArgument));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hangar-core` | Capacity config, resize arithmetic, errors, stats |
//! | [`queue`] | `hangar-queue` | [`queue::CircularQueue`] |
//! | [`stack`] | `hangar-stack` | [`stack::BoundedStack`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Capacity configuration, resize arithmetic, slot storage, and errors
/// (`hangar-core`).
pub use hangar_core as types;

/// Growable circular-array FIFO queue (`hangar-queue`).
pub use hangar_queue as queue;

/// Growable array-backed LIFO stack (`hangar-stack`).
pub use hangar_stack as stack;

/// Common imports for typical Hangar usage.
///
/// ```rust
/// use hangar::prelude::*;
/// ```
pub mod prelude {
    pub use hangar_core::{CapacityConfig, CollectionError, ConfigError, ResizeStats};
    pub use hangar_queue::CircularQueue;
    pub use hangar_stack::BoundedStack;
}
