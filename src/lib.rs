//! Keyed binary heaps for Rust
//!
//! This crate provides [`KeyedHeap`], a binary min-heap whose elements are
//! ordered by a caller-supplied key function instead of their own `Ord`.
//! Elements carry no heap metadata, and one element type can be queued under
//! several orderings (by deadline, by cost, inverted for a max-heap) without
//! newtype wrappers.
//!
//! # Features
//!
//! - **push / pop**: O(log n), pop moves the last element to the root and sifts it down
//! - **peek**: O(1)
//! - **pushpop**: push-then-pop that skips the heap entirely when the new item is smallest
//! - **replace_top**: pop-then-push in a single sift
//! - **heapify**: O(n) bottom-up construction from any `Vec`
//! - **select**: top-n selection and k-way merging of sorted inputs
//!
//! With the `tracing` feature, bulk operations emit `trace`-level events.
//!
//! # Example
//!
//! ```rust
//! use keyed_heap::KeyedHeap;
//!
//! #[derive(Debug)]
//! struct Task {
//!     name: &'static str,
//!     priority: u8,
//! }
//!
//! let mut queue = KeyedHeap::with_key(|task: &Task| task.priority);
//! queue.push(Task { name: "write", priority: 2 });
//! queue.push(Task { name: "read", priority: 1 });
//! queue.push(Task { name: "sleep", priority: 9 });
//!
//! assert_eq!(queue.pop().map(|task| task.name), Ok("read"));
//! assert_eq!(queue.pop().map(|task| task.name), Ok("write"));
//! assert_eq!(queue.len(), 1);
//! ```

mod instrumentation;
pub mod iter;
pub mod keyed;
pub mod select;
pub mod traits;

// Re-export the main types for convenience
pub use keyed::{heapify, is_heap, KeyedHeap};
pub use traits::{HeapError, Identity, KeyFn, KeyOrDefault, ReplaceError};
