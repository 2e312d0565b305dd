//! Iterators over [`KeyedHeap`]
//!
//! [`Iter`], [`IntoIter`] and [`Drain`] walk the backing storage in heap
//! order. [`DrainSorted`] and [`IntoIterSorted`] pop, so they yield elements
//! in ascending key order at O(log n) per element.

use std::iter::FusedIterator;
use std::{slice, vec};

use crate::keyed::KeyedHeap;
use crate::traits::KeyFn;

/// Borrowing iterator in heap order, from [`KeyedHeap::iter`]
#[derive(Debug)]
pub struct Iter<'a, T>(pub(crate) slice::Iter<'a, T>);

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator in heap order
#[derive(Debug)]
pub struct IntoIter<T>(pub(crate) vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// Draining iterator in heap order, from [`KeyedHeap::drain`]
#[derive(Debug)]
pub struct Drain<'a, T>(pub(crate) vec::Drain<'a, T>);

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

/// Draining iterator in ascending key order, from [`KeyedHeap::drain_sorted`]
///
/// Whatever is left in the heap when this is dropped is removed.
#[derive(Debug)]
pub struct DrainSorted<'a, T, F> {
    pub(crate) heap: &'a mut KeyedHeap<T, F>,
}

impl<T, F: KeyFn<T>> Iterator for DrainSorted<'_, T, F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, F: KeyFn<T>> ExactSizeIterator for DrainSorted<'_, T, F> {}
impl<T, F: KeyFn<T>> FusedIterator for DrainSorted<'_, T, F> {}

impl<T, F> Drop for DrainSorted<'_, T, F> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}

/// Owning iterator in ascending key order, from [`KeyedHeap::into_iter_sorted`]
#[derive(Debug, Clone)]
pub struct IntoIterSorted<T, F> {
    pub(crate) heap: KeyedHeap<T, F>,
}

impl<T, F: KeyFn<T>> Iterator for IntoIterSorted<T, F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, F: KeyFn<T>> ExactSizeIterator for IntoIterSorted<T, F> {}
impl<T, F: KeyFn<T>> FusedIterator for IntoIterSorted<T, F> {}
