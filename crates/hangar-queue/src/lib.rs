//! Growable circular-array FIFO queue.
//!
//! [`CircularQueue`] stores elements in a ring over an owned, fixed-length
//! slot array. Two cursors walk the ring: `head` is the next element to
//! remove, `tail` the next free slot. When the ring is full it grows and
//! unwraps the live run into slot 0 of the new storage; when it falls
//! below half full it shrinks the same way.
//!
//! ```text
//!   capacity 8, size 5, head 5, tail 2
//!   ┌───┬───┬───┬───┬───┬───┬───┬───┐
//!   │ d │ e │   │   │   │ a │ b │ c │
//!   └───┴───┴───┴───┴───┴───┴───┴───┘
//!             ^tail       ^head
//! ```
//!
//! An empty queue is not an error: [`CircularQueue::remove`] and
//! [`CircularQueue::peek`] return `None`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod queue;

pub use queue::CircularQueue;
