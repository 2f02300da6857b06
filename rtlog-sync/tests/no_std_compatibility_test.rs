//! Validates that the rtlog-sync public API is usable the way the logger
//! uses it: a `static` mutex and a `static` reentrant lock.

#[cfg(test)]
mod tests {
    use core::num::NonZeroUsize;

    use rtlog_sync::{ReentrantSpinLock, RtlogMutex as Mutex};

    static COUNTER: Mutex<u32> = Mutex::new(0);
    static LOCK: ReentrantSpinLock = ReentrantSpinLock::new();

    #[test]
    fn test_static_mutex() {
        *COUNTER.lock() += 1;
        assert!(*COUNTER.lock() >= 1);
    }

    #[test]
    fn test_static_reentrant_lock() {
        let owner = NonZeroUsize::new(42).unwrap();
        LOCK.lock(owner);
        LOCK.lock(owner);
        assert_eq!(LOCK.depth(), 2);
        LOCK.unlock(owner);
        LOCK.unlock(owner);
        assert!(!LOCK.is_locked());
    }
}
