//! Growable array-backed LIFO stack.
//!
//! [`BoundedStack`] keeps its elements in slots `[0, size)` of an owned,
//! fixed-length slot array; the top of the stack is slot `size - 1`. It
//! grows and shrinks by the same rules as the queue, but relinearization
//! is a straight copy because the live run never wraps.
//!
//! Unlike the queue, popping or peeking an empty stack is a hard failure
//! ([`CollectionError::EmptyStructure`](hangar_core::CollectionError::EmptyStructure)).
//! Callers are expected to check [`BoundedStack::is_empty`] first.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod stack;

pub use stack::BoundedStack;
