//! Keyed binary heap implementation
//!
//! A binary min-heap stored as a `Vec<T>` in the 0-based complete binary tree
//! layout: the root lives at index 0, and the children of `i` live at `2i+1`
//! and `2i+2`. Elements are ordered by a [`KeyFn`] rather than by their own
//! `Ord`, so the same element type can be queued under different orderings
//! without wrapping it.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity          |
//! |-------------------|---------------------|
//! | `push`            | O(log n)            |
//! | `pop`             | O(log n)            |
//! | `peek`            | O(1)                |
//! | `pushpop`         | O(1) or O(log n)    |
//! | `replace_top`     | O(log n)            |
//! | `from_vec_with_key` | O(n)              |
//! | `into_sorted_vec` | O(n log n)          |
//!
//! # Example
//!
//! ```rust
//! use keyed_heap::KeyedHeap;
//!
//! let mut heap = KeyedHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! heap.push(1);
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(8));
//! assert!(heap.pop().is_err());
//! ```

use std::fmt;
use std::mem;

use crate::instrumentation::bulk_op;
use crate::iter::{Drain, DrainSorted, IntoIter, IntoIterSorted, Iter};
use crate::traits::{HeapError, Identity, KeyFn, KeyOrDefault, ReplaceError};

/// A binary min-heap ordered by a key function
///
/// `F` defaults to [`Identity`], which orders elements by their own `Ord`.
/// Pass any `Fn(&T) -> K` with `K: Ord` to [`KeyedHeap::with_key`] to order
/// by something else.
///
/// Elements with equal keys come out in an unspecified order.
#[derive(Clone)]
pub struct KeyedHeap<T, F = Identity> {
    data: Vec<T>,
    key: F,
}

impl<T: Ord> KeyedHeap<T> {
    /// Creates an empty heap ordered by the elements themselves
    pub fn new() -> Self {
        Self::with_key(Identity)
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_key(capacity, Identity)
    }
}

impl<T: Ord, F: KeyFn<T>> KeyedHeap<T, KeyOrDefault<F>> {
    /// Creates an empty heap from an optional key function
    ///
    /// `None` orders elements by their own `Ord`, exactly like
    /// [`KeyedHeap::new`].
    ///
    /// ```rust
    /// use keyed_heap::KeyedHeap;
    ///
    /// let mut natural: KeyedHeap<i32, _> = KeyedHeap::from_key(None::<fn(&i32) -> i32>);
    /// natural.extend([2, 9, 4]);
    /// assert_eq!(natural.peek(), Ok(&2));
    ///
    /// let mut inverted: KeyedHeap<i32, _> = KeyedHeap::from_key(Some(|x: &i32| -x));
    /// inverted.extend([2, 9, 4]);
    /// assert_eq!(inverted.peek(), Ok(&9));
    /// ```
    pub fn from_key(key: Option<F>) -> Self {
        Self::with_key(KeyOrDefault(key))
    }
}

impl<T, F> KeyedHeap<T, F> {
    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the key function the heap is ordered by
    pub fn key_fn(&self) -> &F {
        &self.key
    }

    /// Iterates over the elements in heap order (not sorted)
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.data.iter())
    }

    /// Returns the backing storage in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning the backing storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Removes every element, yielding them in heap order (not sorted)
    ///
    /// The heap is empty afterwards even if the iterator is dropped early.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain(self.data.drain(..))
    }
}

impl<T, F: KeyFn<T>> KeyedHeap<T, F> {
    /// Creates an empty heap ordered by `key`
    pub fn with_key(key: F) -> Self {
        Self {
            data: Vec::new(),
            key,
        }
    }

    /// Creates an empty heap ordered by `key` with room for `capacity` elements
    pub fn with_capacity_and_key(capacity: usize, key: F) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            key,
        }
    }

    /// Builds a heap from an arbitrary vector in O(n)
    ///
    /// ```rust
    /// use keyed_heap::KeyedHeap;
    ///
    /// let heap = KeyedHeap::from_vec_with_key(vec![4, 1, 7, 3, 8, 5], |x: &i32| *x);
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 3, 4, 5, 7, 8]);
    /// ```
    pub fn from_vec_with_key(mut data: Vec<T>, key: F) -> Self {
        heapify(&mut data, &key);
        bulk_op("heapify", data.len(), data.len());
        Self { data, key }
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        sift_up(&mut self.data, &self.key, last);
    }

    /// Returns the element with the smallest key without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the element with the smallest key
    ///
    /// The last element takes the root's place and is sifted down, so a pop
    /// costs O(log n).
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let last = self.data.pop().ok_or(HeapError::Empty)?;
        if self.data.is_empty() {
            return Ok(last);
        }
        let top = mem::replace(&mut self.data[0], last);
        sift_down(&mut self.data, &self.key, 0);
        Ok(top)
    }

    /// Pushes `item` and then pops the smallest element, in one pass
    ///
    /// If `item`'s key is not greater than the root's, `item` is handed
    /// straight back and the heap is untouched. An empty heap also hands
    /// `item` straight back. Otherwise `item` takes the root's place and the
    /// old root is returned. The length never changes.
    ///
    /// ```rust
    /// use keyed_heap::KeyedHeap;
    ///
    /// let mut heap: KeyedHeap<i32> = vec![3, 5, 7].into();
    /// assert_eq!(heap.pushpop(1), 1);
    /// assert_eq!(heap.pushpop(6), 3);
    /// assert_eq!(heap.into_sorted_vec(), vec![5, 6, 7]);
    /// ```
    pub fn pushpop(&mut self, item: T) -> T {
        let root_is_smaller = self
            .data
            .first()
            .is_some_and(|top| self.key.less(top, &item));
        if !root_is_smaller {
            return item;
        }
        let top = mem::replace(&mut self.data[0], item);
        sift_down(&mut self.data, &self.key, 0);
        top
    }

    /// Pops the smallest element and pushes `item`, in one pass
    ///
    /// Unlike [`pushpop`](Self::pushpop), the returned element always comes
    /// from the heap, even if `item` is smaller than it.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty; `item` is dropped.
    /// Use [`try_replace_top`](Self::try_replace_top) to get it back.
    pub fn replace_top(&mut self, item: T) -> Result<T, HeapError> {
        self.try_replace_top(item).map_err(HeapError::from)
    }

    /// Like [`replace_top`](Self::replace_top), but returns `item` inside the
    /// error when the heap is empty
    ///
    /// ```rust
    /// use keyed_heap::KeyedHeap;
    ///
    /// let mut heap = KeyedHeap::new();
    /// let item = match heap.try_replace_top(4) {
    ///     Ok(_) => unreachable!(),
    ///     Err(err) => err.into_inner(),
    /// };
    /// heap.push(item);
    /// assert_eq!(heap.try_replace_top(9), Ok(4));
    /// assert_eq!(heap.peek(), Ok(&9));
    /// ```
    pub fn try_replace_top(&mut self, item: T) -> Result<T, ReplaceError<T>> {
        let Some(top) = self.data.first_mut() else {
            return Err(ReplaceError { item });
        };
        let old = mem::replace(top, item);
        sift_down(&mut self.data, &self.key, 0);
        Ok(old)
    }

    /// Moves every element of `other` into `self`, leaving `other` empty
    ///
    /// Elements are re-ordered by `self`'s key function.
    pub fn append(&mut self, other: &mut Self) {
        let start = self.data.len();
        self.data.append(&mut other.data);
        self.rebuild_tail(start);
    }

    /// Consumes the heap, returning its elements sorted ascending by key
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let len = self.data.len();
        let mut end = len;
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            sift_down(&mut self.data[..end], &self.key, 0);
        }
        // The sweep above leaves the minimum at the back.
        self.data.reverse();
        bulk_op("into_sorted_vec", len, 0);
        self.data
    }

    /// Removes every element, yielding them in ascending key order
    ///
    /// Elements the iterator has not yielded when it is dropped are removed
    /// too.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, F> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap, yielding elements in ascending key order
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, F> {
        IntoIterSorted { heap: self }
    }

    /// Checks the heap invariant: no element's key is smaller than its parent's
    pub fn is_valid(&self) -> bool {
        is_heap(&self.data, &self.key)
    }

    /// Restores the invariant after `append` moved raw elements in from `start`
    ///
    /// Pushing each new element costs about `added * log2(len)` comparisons,
    /// a full heapify about `2 * len`; pick whichever is cheaper.
    fn rebuild_tail(&mut self, start: usize) {
        let len = self.data.len();
        let added = len - start;
        if added == 0 {
            return;
        }

        let rebuild = start <= added || 2 * len < added * log2_floor(start);
        if rebuild {
            heapify(&mut self.data, &self.key);
            bulk_op("rebuild", added, len);
        } else {
            for index in start..len {
                sift_up(&mut self.data, &self.key, index);
            }
        }
    }
}

/// Rearranges `data` into a valid heap under `key`, in place and in O(n)
///
/// Every internal node is sifted down, walking from the last parent back to
/// the root so each subtree is already a heap when its root is sifted.
///
/// ```rust
/// use keyed_heap::{heapify, is_heap, Identity};
///
/// let mut data = [4, 1, 7, 3, 8, 5];
/// heapify(&mut data, &Identity);
/// assert!(is_heap(&data, &Identity));
/// assert_eq!(data[0], 1);
/// ```
pub fn heapify<T, F: KeyFn<T> + ?Sized>(data: &mut [T], key: &F) {
    for index in (0..data.len() / 2).rev() {
        sift_down(data, key, index);
    }
}

/// Returns true if `data` satisfies the heap invariant under `key`
pub fn is_heap<T, F: KeyFn<T> + ?Sized>(data: &[T], key: &F) -> bool {
    (1..data.len()).all(|index| match parent(index) {
        Some(parent) => !key.less(&data[index], &data[parent]),
        None => true,
    })
}

#[inline]
fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Left child of `index`; the right child is the next slot
#[inline]
fn first_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn log2_floor(n: usize) -> usize {
    (usize::BITS - 1 - n.leading_zeros()) as usize
}

/// Move element at index up while its parent's key is larger
fn sift_up<T, F: KeyFn<T> + ?Sized>(data: &mut [T], key: &F, mut index: usize) {
    while let Some(parent) = parent(index) {
        if key.less(&data[index], &data[parent]) {
            data.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
}

/// Move element at index down while a child's key is smaller
///
/// Swaps with the smaller child; the left child wins ties.
fn sift_down<T, F: KeyFn<T> + ?Sized>(data: &mut [T], key: &F, mut index: usize) {
    let len = data.len();
    loop {
        let left = first_child(index);
        if left >= len {
            break;
        }
        let right = left + 1;

        let mut smaller = left;
        if right < len && key.less(&data[right], &data[left]) {
            smaller = right;
        }

        if key.less(&data[smaller], &data[index]) {
            data.swap(index, smaller);
            index = smaller;
        } else {
            break;
        }
    }
}

impl<T, F: KeyFn<T> + Default> Default for KeyedHeap<T, F> {
    fn default() -> Self {
        Self::with_key(F::default())
    }
}

impl<T: fmt::Debug, F> fmt::Debug for KeyedHeap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T: Ord> From<Vec<T>> for KeyedHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_key(data, Identity)
    }
}

impl<T, F> From<KeyedHeap<T, F>> for Vec<T> {
    fn from(heap: KeyedHeap<T, F>) -> Self {
        heap.data
    }
}

impl<T, F: KeyFn<T> + Default> FromIterator<T> for KeyedHeap<T, F> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with_key(iter.into_iter().collect(), F::default())
    }
}

impl<T, F: KeyFn<T>> Extend<T> for KeyedHeap<T, F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a, F: KeyFn<T>> Extend<&'a T> for KeyedHeap<T, F> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, F> IntoIterator for KeyedHeap<T, F> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self.data.into_iter())
    }
}

impl<'a, T, F> IntoIterator for &'a KeyedHeap<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
