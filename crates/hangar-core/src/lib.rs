//! Shared building blocks for the Hangar containers.
//!
//! This is the leaf crate with zero internal dependencies. It holds the
//! pieces that [`CircularQueue`] and [`BoundedStack`] have in common but
//! that neither should own:
//!
//! - [`CapacityConfig`]: the floor, growth, shrink, and ceiling parameters.
//! - [`capacity`]: the grow/shrink arithmetic, including the two-step
//!   growth fallback (multiply, then fixed increment, then fail).
//! - [`slots`]: allocation and relinearization of owned backing storage.
//! - [`CollectionError`] and [`ConfigError`]: the error taxonomy.
//! - [`ResizeStats`]: per-container resize counters.
//!
//! [`CircularQueue`]: https://docs.rs/hangar-queue
//! [`BoundedStack`]: https://docs.rs/hangar-stack

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod capacity;
pub mod config;
pub mod error;
pub mod slots;
pub mod stats;

pub use capacity::{grown_capacity, shrunk_capacity};
pub use config::CapacityConfig;
pub use error::{CollectionError, ConfigError};
pub use slots::Slots;
pub use stats::ResizeStats;
