//! Optional `tracing` events for bulk heap operations
//!
//! Enabled with the `tracing` feature. Only the O(n) and O(n log n) paths
//! report; push, pop and the sift loops stay silent.

#[cfg(feature = "tracing")]
mod backend {
    #[inline]
    pub(crate) fn bulk_op(op: &'static str, input: usize, len: usize) {
        tracing::trace!(target: "keyed_heap", op, input, len, "bulk heap operation");
    }
}

#[cfg(not(feature = "tracing"))]
mod backend {
    #[inline(always)]
    pub(crate) fn bulk_op(_op: &'static str, _input: usize, _len: usize) {}
}

// bulk_op(op, input, len): `input` elements consumed, `len` left in the heap
pub(crate) use self::backend::bulk_op;
