//! Selection and merging built on [`KeyedHeap`]
//!
//! - [`n_smallest_by_key`] / [`n_largest_by_key`]: top-n selection in
//!   O(m log n) over `m` inputs, holding at most `n` items at a time
//! - [`merge_sorted_by_key`]: lazy k-way merge of already-sorted inputs
//!
//! # Example
//!
//! ```rust
//! use keyed_heap::select::{merge_sorted_by_key, n_smallest_by_key};
//!
//! let words = ["pear", "fig", "banana", "kiwi", "apple"];
//! assert_eq!(n_smallest_by_key(words, 2, |w: &&str| w.len()), vec!["fig", "pear"]);
//!
//! let merged: Vec<_> = merge_sorted_by_key(vec![vec![1, 4, 9], vec![2, 3, 10]], |x: &i32| *x).collect();
//! assert_eq!(merged, vec![1, 2, 3, 4, 9, 10]);
//! ```

use std::cmp::{Ordering, Reverse};
use std::fmt;

use crate::keyed::KeyedHeap;
use crate::traits::KeyFn;

/// Returns the `n` items with the smallest keys, sorted ascending by key
///
/// Items with equal keys may come back in any order.
pub fn n_smallest_by_key<I, K, G>(items: I, n: usize, key: G) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Ord,
    G: Fn(&I::Item) -> K,
{
    if n == 0 {
        return Vec::new();
    }

    let items = items.into_iter();
    let capacity = n.min(items.size_hint().0);
    // The root is the largest item kept so far.
    let mut kept = KeyedHeap::with_capacity_and_key(capacity, |item: &I::Item| Reverse(key(item)));
    for item in items {
        if kept.len() < n {
            kept.push(item);
        } else {
            kept.pushpop(item);
        }
    }

    let mut smallest = kept.into_sorted_vec();
    smallest.reverse();
    smallest
}

/// Returns the `n` items with the largest keys, sorted descending by key
///
/// Items with equal keys may come back in any order.
pub fn n_largest_by_key<I, K, G>(items: I, n: usize, key: G) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Ord,
    G: Fn(&I::Item) -> K,
{
    if n == 0 {
        return Vec::new();
    }

    let items = items.into_iter();
    let capacity = n.min(items.size_hint().0);
    // The root is the smallest item kept so far.
    let mut kept = KeyedHeap::with_capacity_and_key(capacity, |item: &I::Item| key(item));
    for item in items {
        if kept.len() < n {
            kept.push(item);
        } else {
            kept.pushpop(item);
        }
    }

    let mut largest = kept.into_sorted_vec();
    largest.reverse();
    largest
}

/// Orders merge frontier entries by the item's key, then by source index
struct HeadKey<G>(G);

impl<T, K, G> KeyFn<(T, usize)> for HeadKey<G>
where
    K: Ord,
    G: Fn(&T) -> K,
{
    fn compare(&self, a: &(T, usize), b: &(T, usize)) -> Ordering {
        (self.0)(&a.0)
            .cmp(&(self.0)(&b.0))
            .then_with(|| a.1.cmp(&b.1))
    }
}

/// Lazy k-way merge, from [`merge_sorted_by_key`]
pub struct MergeSorted<S: Iterator, G> {
    sources: Vec<S>,
    frontier: KeyedHeap<(S::Item, usize), HeadKey<G>>,
}

/// Merges inputs that are each sorted ascending by `key` into one sorted
/// iterator
///
/// Holds one pending item per input. Equal keys come out in input order.
/// Inputs that are not sorted produce an unspecified interleaving.
pub fn merge_sorted_by_key<I, S, K, G>(inputs: I, key: G) -> MergeSorted<S::IntoIter, G>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator,
    K: Ord,
    G: Fn(&S::Item) -> K,
{
    let mut sources: Vec<S::IntoIter> = inputs.into_iter().map(IntoIterator::into_iter).collect();
    let heads: Vec<_> = sources
        .iter_mut()
        .enumerate()
        .filter_map(|(index, source)| source.next().map(|head| (head, index)))
        .collect();

    MergeSorted {
        sources,
        frontier: KeyedHeap::from_vec_with_key(heads, HeadKey(key)),
    }
}

impl<S, K, G> Iterator for MergeSorted<S, G>
where
    S: Iterator,
    K: Ord,
    G: Fn(&S::Item) -> K,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let source = self.frontier.peek().ok()?.1;
        let (item, _) = match self.sources[source].next() {
            Some(next) => self.frontier.replace_top((next, source)).ok()?,
            None => self.frontier.pop().ok()?,
        };
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.frontier.len();
        self.sources.iter().fold((pending, Some(pending)), |(lower, upper), source| {
            let (source_lower, source_upper) = source.size_hint();
            let upper = match (upper, source_upper) {
                (Some(a), Some(b)) => a.checked_add(b),
                _ => None,
            };
            (lower.saturating_add(source_lower), upper)
        })
    }
}

impl<S: Iterator, G> fmt::Debug for MergeSorted<S, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeSorted")
            .field("sources", &self.sources.len())
            .field("pending", &self.frontier.len())
            .finish()
    }
}
