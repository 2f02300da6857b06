// RTLOG - rtlog
// Module: Platform Collaborators
// SW-REQ-ID: REQ_LOG_PLAT_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The platform services the logger consumes but does not implement.

#![allow(unsafe_code)]

use crate::config::TASK_NAME_MAX_LEN;

/// Name of the execution context that issued a log call
pub type TaskName = heapless::String<TASK_NAME_MAX_LEN>;

/// Lock, sink, clock and task-name services supplied by the target.
///
/// # Safety
///
/// If the implementing type is `Sync`, [`lock`](Self::lock) and
/// [`unlock`](Self::unlock) must provide mutual exclusion between execution
/// contexts: the logger hands out shared access to its buffers on the
/// strength of that lock. The lock must also let the holding context acquire
/// it again (sinks and `Display` impls may log); a non-reentrant lock
/// deadlocks on nested calls instead.
///
/// Logging from interrupt context is only supported if `lock` masks the
/// interrupts that may log; a task-level mutex or spin lock deadlocks when an
/// interrupt logs on top of the holder.
pub unsafe trait LogPlatform {
    /// One-time platform bring-up, run before the first flush
    fn init(&self) {}

    /// Enter the logger's critical section
    fn lock(&self);

    /// Leave the logger's critical section
    fn unlock(&self);

    /// Write rendered bytes to the output; an empty slice is a no-op
    fn print(&self, bytes: &[u8]);

    /// Current timestamp, Unix seconds or a free-running counter
    fn timestamp(&self) -> u32 {
        0
    }

    /// Name of the calling task, if the platform has one
    fn active_task_name(&self) -> Option<TaskName> {
        None
    }
}

// SAFETY: forwards to `P`, which upholds the contract.
unsafe impl<P: LogPlatform + ?Sized> LogPlatform for &P {
    fn init(&self) {
        (**self).init();
    }

    fn lock(&self) {
        (**self).lock();
    }

    fn unlock(&self) {
        (**self).unlock();
    }

    fn print(&self, bytes: &[u8]) {
        (**self).print(bytes);
    }

    fn timestamp(&self) -> u32 {
        (**self).timestamp()
    }

    fn active_task_name(&self) -> Option<TaskName> {
        (**self).active_task_name()
    }
}

/// Build a [`TaskName`] from `name`, cut at a character boundary if it is
/// too long.
#[must_use]
pub fn task_name(name: &str) -> TaskName {
    let mut out = TaskName::new();
    for ch in name.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// Holds the platform lock for a scope.
#[clippy::has_significant_drop]
pub(crate) struct PlatformLockGuard<'a, P: LogPlatform + ?Sized> {
    platform: &'a P,
}

impl<'a, P: LogPlatform + ?Sized> PlatformLockGuard<'a, P> {
    pub(crate) fn acquire(platform: &'a P) -> Self {
        platform.lock();
        Self { platform }
    }
}

impl<P: LogPlatform + ?Sized> Drop for PlatformLockGuard<'_, P> {
    fn drop(&mut self) {
        self.platform.unlock();
    }
}
