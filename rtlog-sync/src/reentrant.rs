//! A spin lock that the owning execution context may acquire repeatedly.
//!
//! Logging code can be re-entered from its own output path (a sink that
//! logs, a `Display` impl that logs). A plain spin lock would deadlock on
//! the second acquisition; this lock counts nested acquisitions by the
//! owner instead and only spins for other contexts.

use crate::prelude::{fmt, spin_loop, AtomicUsize, NonZeroUsize, Ordering};

const UNOWNED: usize = 0;

/// Reentrant spin lock keyed on an execution-context id.
///
/// The caller supplies the id of the current context (a thread or task
/// identifier). Ids must be stable for the life of the context and unique
/// among contexts that may contend for the lock.
pub struct ReentrantSpinLock {
    owner: AtomicUsize,
    /// Only read or written by the current owner.
    depth: AtomicUsize,
}

impl ReentrantSpinLock {
    /// Creates an unlocked lock.
    #[must_use]
    pub const fn new() -> Self {
        Self { owner: AtomicUsize::new(UNOWNED), depth: AtomicUsize::new(0) }
    }

    /// Acquires the lock for `context`, spinning while another context
    /// holds it. Nested acquisition by the owner returns immediately.
    pub fn lock(&self, context: NonZeroUsize) {
        if self.enter_nested(context) {
            return;
        }
        while self
            .owner
            .compare_exchange_weak(UNOWNED, context.get(), Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            spin_loop();
        }
        self.depth.store(1, Ordering::Relaxed);
    }

    /// Attempts to acquire the lock for `context` without spinning.
    #[must_use]
    pub fn try_lock(&self, context: NonZeroUsize) -> bool {
        if self.enter_nested(context) {
            return true;
        }
        if self
            .owner
            .compare_exchange(UNOWNED, context.get(), Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
        {
            self.depth.store(1, Ordering::Relaxed);
            true
        } else {
            false
        }
    }

    /// Releases one level of ownership held by `context`.
    ///
    /// Unlocking from a context that does not own the lock is ignored.
    pub fn unlock(&self, context: NonZeroUsize) {
        if self.owner.load(Ordering::Relaxed) != context.get() {
            debug_assert!(false, "ReentrantSpinLock unlocked by a non-owner");
            return;
        }
        let depth = self.depth.load(Ordering::Relaxed);
        if depth <= 1 {
            self.depth.store(0, Ordering::Relaxed);
            self.owner.store(UNOWNED, Ordering::Release);
        } else {
            self.depth.store(depth - 1, Ordering::Relaxed);
        }
    }

    /// Returns true if any context holds the lock.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.owner.load(Ordering::Relaxed) != UNOWNED
    }

    /// Returns true if `context` holds the lock.
    #[must_use]
    pub fn is_held_by(&self, context: NonZeroUsize) -> bool {
        self.owner.load(Ordering::Relaxed) == context.get()
    }

    /// Nesting depth of the current owner, zero when unlocked.
    #[must_use]
    pub fn depth(&self) -> usize {
        if self.is_locked() {
            self.depth.load(Ordering::Relaxed)
        } else {
            0
        }
    }

    fn enter_nested(&self, context: NonZeroUsize) -> bool {
        // Only the owner can observe its own id here, so the depth update
        // cannot race with another context.
        if self.owner.load(Ordering::Acquire) == context.get() {
            self.depth.fetch_add(1, Ordering::Relaxed);
            true
        } else {
            false
        }
    }
}

impl Default for ReentrantSpinLock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReentrantSpinLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReentrantSpinLock")
            .field("owner", &self.owner.load(Ordering::Relaxed))
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            atomic::{AtomicU32, Ordering as StdOrdering},
            Arc,
        },
        thread,
    };

    use super::*;

    fn ctx(id: usize) -> NonZeroUsize {
        NonZeroUsize::new(id).unwrap()
    }

    #[test]
    fn test_nested_lock_by_owner() {
        let lock = ReentrantSpinLock::new();
        lock.lock(ctx(1));
        lock.lock(ctx(1));
        lock.lock(ctx(1));
        assert_eq!(lock.depth(), 3);

        lock.unlock(ctx(1));
        lock.unlock(ctx(1));
        assert!(lock.is_held_by(ctx(1)));

        lock.unlock(ctx(1));
        assert!(!lock.is_locked());
        assert_eq!(lock.depth(), 0);
    }

    #[test]
    fn test_try_lock_other_context() {
        let lock = ReentrantSpinLock::new();
        lock.lock(ctx(1));
        assert!(!lock.try_lock(ctx(2)));
        assert!(lock.try_lock(ctx(1)));
        lock.unlock(ctx(1));
        lock.unlock(ctx(1));
        assert!(lock.try_lock(ctx(2)));
        lock.unlock(ctx(2));
    }

    #[test]
    fn test_contended_lock_excludes_other_threads() {
        let lock = Arc::new(ReentrantSpinLock::new());
        let counter = Arc::new(AtomicU32::new(0));
        let mut handles = vec![];

        for id in 1..=4usize {
            let lock = Arc::clone(&lock);
            let counter = Arc::clone(&counter);
            handles.push(thread::spawn(move || {
                for _ in 0..500 {
                    lock.lock(ctx(id));
                    lock.lock(ctx(id));
                    // Non-atomic read-modify-write made safe by the lock.
                    let value = counter.load(StdOrdering::Relaxed);
                    counter.store(value + 1, StdOrdering::Relaxed);
                    lock.unlock(ctx(id));
                    lock.unlock(ctx(id));
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counter.load(StdOrdering::Relaxed), 4 * 500);
        assert!(!lock.is_locked());
    }
}
