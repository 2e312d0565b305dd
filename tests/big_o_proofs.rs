//! Big-O complexity checks for heap operations
//!
//! Empirically verifies the complexity bounds using the `big-o-test` crate.
//!
//! ## Testing Strategy
//!
//! We use `test_algorithm` to measure batch operations. For batch operations:
//! - O(1) per-element operations appear as O(n) for n operations
//! - O(log n) operations appear as O(n log n) for n operations
//!
//! Note: These are empirical tests, not formal proofs. They detect significant
//! deviations from expected behavior but may not catch subtle issues with
//! specific input patterns.

use big_o_test::{test_algorithm, BigOAlgorithmComplexity};
use keyed_heap::KeyedHeap;

use ctor::ctor;
use parking_lot::RwLock;
use std::sync::Arc;

/// Sets up the ENV, affecting the Rust's test runner
#[ctor]
fn setup_env() {
    // timing measurements are only meaningful when tests run serially
    std::env::set_var("RUST_TEST_THREADS", "1");
}

fn descending(n: i64) -> Vec<i64> {
    (0..n).rev().collect()
}

#[test]
fn test_push_batch() {
    // Descending input makes every push sift to the root: O(log n) each
    let heap = Arc::new(RwLock::new(KeyedHeap::<i64>::new()));

    test_algorithm(
        "KeyedHeap push batch",
        3,
        || {
            *heap.write() = KeyedHeap::new();
        },
        5000,
        || {
            let mut h = heap.write();
            for i in descending(5000) {
                h.push(i);
            }
            h.len() as u32
        },
        10000,
        || {
            let mut h = heap.write();
            for i in descending(10000) {
                h.push(i);
            }
            h.len() as u32
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

#[test]
fn test_pop_batch() {
    let heap = Arc::new(RwLock::new(KeyedHeap::<i64>::new()));

    test_algorithm(
        "KeyedHeap pop batch",
        3,
        || {
            *heap.write() = KeyedHeap::new();
        },
        5000,
        || {
            let mut h = heap.write();
            h.extend(descending(5000));
            for _ in 0..5000 {
                assert!(h.pop().is_ok(), "pop() must succeed after pushing elements");
            }
            42
        },
        10000,
        || {
            let mut h = heap.write();
            h.extend(descending(10000));
            for _ in 0..10000 {
                assert!(h.pop().is_ok(), "pop() must succeed after pushing elements");
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

#[test]
fn test_heapify_linear() {
    let heap = Arc::new(RwLock::new(KeyedHeap::<i64>::new()));

    test_algorithm(
        "KeyedHeap heapify",
        3,
        || {
            *heap.write() = KeyedHeap::new();
        },
        50000,
        || {
            let mut h = heap.write();
            *h = KeyedHeap::from(descending(50000));
            h.len() as u32
        },
        100000,
        || {
            let mut h = heap.write();
            *h = KeyedHeap::from(descending(100000));
            h.len() as u32
        },
        BigOAlgorithmComplexity::ON,
        BigOAlgorithmComplexity::ON,
    );
}
