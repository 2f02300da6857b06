//! Prelude module for rtlog-sync
//!
//! Re-exports the core items the lock implementations are built from, so
//! both `std` and `no_std` builds import them from one place.

pub use core::{
    cell::UnsafeCell,
    fmt,
    hint::spin_loop,
    num::NonZeroUsize,
    ops::{Deref, DerefMut},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

pub use crate::{RtlogMutex as Mutex, ReentrantSpinLock};
