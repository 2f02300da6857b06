// RTLOG - rtlog
// Module: Hosted Platform
// SW-REQ-ID: REQ_LOG_PLAT_002
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! [`LogPlatform`] for hosted targets: threads as tasks, a reentrant spin
//! lock, the system clock and stdout or stderr as the sink.

#![allow(unsafe_code)]

use core::{
    cell::Cell,
    hash::{Hash, Hasher},
    num::NonZeroUsize,
    sync::atomic::{AtomicUsize, Ordering},
};
use std::{
    hash::DefaultHasher,
    io::Write,
    time::{SystemTime, UNIX_EPOCH},
};

use rtlog_sync::ReentrantSpinLock;

use crate::platform::{task_name, LogPlatform, TaskName};

/// Next odd id handed to a thread
static NEXT_CONTEXT_ID: AtomicUsize = AtomicUsize::new(1);

std::thread_local! {
    /// Id of this thread, 0 until first asked for
    static CONTEXT_ID: Cell<usize> = const { Cell::new(0) };
}

/// Id of the calling thread, stable for its lifetime and unique among
/// threads.
///
/// Ids are odd and handed out in order of first use. A thread whose
/// thread-locals are already torn down gets an even id derived from its
/// [`ThreadId`](std::thread::ThreadId) instead, so it still never shares
/// an id with another thread.
#[must_use]
pub fn current_context_id() -> NonZeroUsize {
    CONTEXT_ID
        .try_with(|id| {
            if id.get() == 0 {
                id.set(NEXT_CONTEXT_ID.fetch_add(2, Ordering::Relaxed));
            }
            id.get()
        })
        .ok()
        .and_then(NonZeroUsize::new)
        .unwrap_or_else(teardown_context_id)
}

/// Even id for a thread that can no longer reach its thread-locals
fn teardown_context_id() -> NonZeroUsize {
    let mut hasher = DefaultHasher::new();
    std::thread::current().id().hash(&mut hasher);
    // Truncation keeps the bits that matter; bit 1 keeps it nonzero.
    #[allow(clippy::cast_possible_truncation)]
    let id = ((hasher.finish() as usize) | 1) << 1;
    NonZeroUsize::new(id).unwrap_or(NonZeroUsize::MAX)
}

/// Where [`StdPlatform`] prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    /// Standard output
    #[default]
    Stdout,
    /// Standard error
    Stderr,
}

/// Platform for `std` targets
#[derive(Debug, Default)]
pub struct StdPlatform {
    lock:   ReentrantSpinLock,
    output: Output,
}

impl StdPlatform {
    /// Print to stdout
    #[must_use]
    pub const fn new() -> Self {
        Self::with_output(Output::Stdout)
    }

    /// Print to `output`
    #[must_use]
    pub const fn with_output(output: Output) -> Self {
        Self { lock: ReentrantSpinLock::new(), output }
    }

    /// Configured output
    #[must_use]
    pub const fn output(&self) -> Output {
        self.output
    }
}

// SAFETY: `lock` is a reentrant spin lock keyed on the calling thread, so
// it excludes other threads and lets the holder acquire it again.
unsafe impl LogPlatform for StdPlatform {
    fn lock(&self) {
        self.lock.lock(current_context_id());
    }

    fn unlock(&self) {
        self.lock.unlock(current_context_id());
    }

    fn print(&self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        // Nowhere to report a failed write to.
        let _ = match self.output {
            Output::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(bytes).and_then(|()| out.flush())
            },
            Output::Stderr => std::io::stderr().lock().write_all(bytes),
        };
    }

    fn timestamp(&self) -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| u32::try_from(elapsed.as_secs()).unwrap_or(u32::MAX))
    }

    fn active_task_name(&self) -> Option<TaskName> {
        std::thread::current().name().map(task_name)
    }
}
