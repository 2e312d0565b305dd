//! Key functions and error types for keyed heaps
//!
//! A [`KeyedHeap`](crate::KeyedHeap) never compares elements directly. Every
//! comparison goes through a [`KeyFn`], which maps an element to an orderable
//! key and compares the keys:
//!
//! - [`Identity`]: the default, compares elements by their own `Ord`
//! - any closure or function `Fn(&T) -> K` where `K: Ord`
//! - [`KeyOrDefault`]: an optional key function that falls back to `Identity`
//!
//! The key function must be consistent for as long as an element is stored.
//! Changing the order it induces for a stored element is a logic error: the
//! heap will not notice and the ordering guarantees are lost.

use std::cmp::Ordering;
use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation needs a root element but the heap is empty
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Error returned by [`KeyedHeap::try_replace_top`](crate::KeyedHeap::try_replace_top)
///
/// Hands the rejected item back so the caller can `push` it instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceError<T> {
    /// The item that could not be swapped in
    pub item: T,
}

impl<T> ReplaceError<T> {
    /// Returns the rejected item
    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> fmt::Display for ReplaceError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot replace the top of an empty heap")
    }
}

impl<T: fmt::Debug> std::error::Error for ReplaceError<T> {}

impl<T> From<ReplaceError<T>> for HeapError {
    fn from(_: ReplaceError<T>) -> Self {
        HeapError::Empty
    }
}

/// Orders elements of type `T` by an extracted key
///
/// Implemented for [`Identity`], [`KeyOrDefault`], and every `Fn(&T) -> K`
/// with `K: Ord`, so a plain closure can be handed to
/// [`KeyedHeap::with_key`](crate::KeyedHeap::with_key):
///
/// ```rust
/// use keyed_heap::KeyedHeap;
///
/// // Max-heap by inverting the key
/// let mut heap = KeyedHeap::with_key(|x: &i32| -x);
/// heap.push(2);
/// heap.push(9);
/// heap.push(4);
/// assert_eq!(heap.peek(), Ok(&9));
/// ```
pub trait KeyFn<T: ?Sized> {
    /// Compares `a` and `b` by their keys
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a`'s key is strictly smaller than `b`'s
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

impl<T: ?Sized, K: Ord, F> KeyFn<T> for F
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a).cmp(&self(b))
    }
}

/// The identity key function: elements are their own keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T: Ord + ?Sized> KeyFn<T> for Identity {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// An optional key function
///
/// `None` orders elements like [`Identity`], `Some(f)` orders them by `f`.
/// This is the key function behind
/// [`KeyedHeap::from_key`](crate::KeyedHeap::from_key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOrDefault<F>(pub Option<F>);

impl<F> Default for KeyOrDefault<F> {
    fn default() -> Self {
        KeyOrDefault(None)
    }
}

impl<T: Ord + ?Sized, F: KeyFn<T>> KeyFn<T> for KeyOrDefault<F> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match &self.0 {
            Some(key) => key.compare(a, b),
            None => Identity.compare(a, b),
        }
    }
}
