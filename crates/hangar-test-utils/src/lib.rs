//! Test utilities and reference workloads for Hangar development.
//!
//! - [`ops`]: deterministic, seeded operation scripts for model checking
//!   the containers ([`random_ops`], [`wave_ops`]).
//! - [`workloads`]: the two drone simulations that drive the containers in
//!   production, reduced to pure functions over in-memory input.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod ops;
pub mod workloads;

pub use ops::{random_ops, wave_ops, Op};
pub use workloads::{clean_sword_times, item_retrieval_times, CleanSwordTimes, ItemRetrievalTimes};
