//! # Single-Writer Execution Wrapper
//!
//! The ledgers in this stack are strictly sequential: state-mutating
//! operations execute one at a time, and no operation may observe a
//! partially-applied effect of another. Within a single owner that falls
//! out of `&mut self`; `SingleWriter` extends the same guarantee to a
//! ledger shared across threads.
//!
//! The lock is `parking_lot::Mutex`, which is non-poisonable — a panicking
//! writer does not permanently wedge the ledger.

use std::sync::Arc;

use parking_lot::Mutex;

/// Shares a ledger between threads while serializing every access through
/// a single writer at a time.
#[derive(Debug, Default)]
pub struct SingleWriter<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Clone for SingleWriter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SingleWriter<T> {
    /// Wrap a ledger for shared sequential access.
    pub fn new(ledger: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Run `f` with exclusive access to the ledger.
    ///
    /// The closure observes the most recently committed state and its
    /// effects are fully visible to the next caller — there is no window
    /// in which another operation can interleave.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
