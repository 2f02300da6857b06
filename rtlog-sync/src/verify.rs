//! Formal verification for the synchronization primitives using Kani.
//!
//! These proofs only run with Kani and are isolated from normal compilation
//! and testing.

#[cfg(any(doc, kani))]
pub mod kani_verification {
    use crate::prelude::*;

    /// Verify that mutex locking and unlocking round-trips the data
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(3))]
    pub fn verify_mutex_lock_unlock() {
        let m = Mutex::new(10u32);
        {
            let mut guard = m.lock();
            *guard += 5;
        }
        assert_eq!(*m.lock(), 15);
    }

    /// Verify that the reentrant lock is released only after every nested
    /// acquisition is matched by an unlock
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(5))]
    pub fn verify_reentrant_depth_balance() {
        let lock = ReentrantSpinLock::new();
        let Some(owner) = NonZeroUsize::new(1) else { return };
        #[cfg(kani)]
        let nesting: usize = kani::any_where(|n: &usize| *n >= 1 && *n <= 3);
        #[cfg(not(kani))]
        let nesting: usize = 3;

        for _ in 0..nesting {
            lock.lock(owner);
        }
        assert_eq!(lock.depth(), nesting);
        for _ in 1..nesting {
            lock.unlock(owner);
        }
        assert!(lock.is_held_by(owner));
        lock.unlock(owner);
        assert!(!lock.is_locked());
    }
}
