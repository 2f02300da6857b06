//! Spinlock mutex used for short critical sections that never call out.

use crate::prelude::{fmt, spin_loop, AtomicBool, Deref, DerefMut, Ordering, UnsafeCell};

/// A simple, non-reentrant spinlock mutex suitable for `no_std` environments.
///
/// Intended for critical sections that are short and never call back into
/// user code (the tag registry lookup, for instance). Locking it twice from
/// the same context deadlocks.
pub struct RtlogMutex<T: ?Sized> {
    locked: AtomicBool,
    data: UnsafeCell<T>,
}

/// A guard that provides mutable access to the data protected by a
/// `RtlogMutex`.
///
/// When the guard is dropped, the mutex is unlocked.
#[clippy::has_significant_drop]
pub struct RtlogMutexGuard<'a, T: ?Sized + 'a> {
    mutex: &'a RtlogMutex<T>,
}

/// # Safety
/// Access to the `UnsafeCell` data is protected by the atomic `locked` flag,
/// so only one context can reach the data at a time (if `T` is `Send`).
unsafe impl<T: ?Sized + Send> Send for RtlogMutex<T> {}
/// # Safety
/// All accesses to the data go through a guard, and a guard only exists
/// while `locked` is held.
unsafe impl<T: ?Sized + Send> Sync for RtlogMutex<T> {}

impl<T> RtlogMutex<T> {
    /// Creates a new `RtlogMutex` protecting the given data.
    #[inline]
    pub const fn new(data: T) -> Self {
        RtlogMutex { locked: AtomicBool::new(false), data: UnsafeCell::new(data) }
    }

    /// Consumes the mutex and returns the protected data.
    #[inline]
    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }
}

impl<T: ?Sized> RtlogMutex<T> {
    /// Acquires the lock, spinning until it is available.
    ///
    /// # Panics
    ///
    /// This function does not panic.
    #[inline]
    pub fn lock(&self) -> RtlogMutexGuard<'_, T> {
        // Acquire on success so reads of the data happen after the lock is
        // taken; Relaxed on failure since we just retry.
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            spin_loop();
        }
        RtlogMutexGuard { mutex: self }
    }

    /// Attempts to acquire the lock without spinning.
    #[inline]
    pub fn try_lock(&self) -> Option<RtlogMutexGuard<'_, T>> {
        if self
            .locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
        {
            Some(RtlogMutexGuard { mutex: self })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the data; no locking is needed since
    /// the borrow is exclusive.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for RtlogMutex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never block in Debug.
        match self.try_lock() {
            Some(guard) => f.debug_struct("RtlogMutex").field("data", &&*guard).finish(),
            None => f.debug_struct("RtlogMutex").field("data", &"<locked>").finish(),
        }
    }
}

impl<T: ?Sized> Deref for RtlogMutexGuard<'_, T> {
    type Target = T;
    #[inline]
    fn deref(&self) -> &Self::Target {
        // # Safety
        // A guard only exists while the mutex is locked, which gives it
        // exclusive access to the data.
        unsafe { &*self.mutex.data.get() }
    }
}

impl<T: ?Sized> DerefMut for RtlogMutexGuard<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        // # Safety
        // See `deref`; the guard is the only path to the data.
        unsafe { &mut *self.mutex.data.get() }
    }
}

impl<T: ?Sized> Drop for RtlogMutexGuard<'_, T> {
    /// Releases the lock when the guard goes out of scope.
    #[inline]
    fn drop(&mut self) {
        // Release: writes to the data become visible to the next owner.
        self.mutex.locked.store(false, Ordering::Release);
    }
}
