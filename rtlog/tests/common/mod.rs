//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use rtlog::{current_context_id, task_name, LogPlatform, TaskName};
use rtlog_sync::ReentrantSpinLock;

/// Platform that records everything printed to it
pub struct RecordingPlatform {
    output:    Mutex<Vec<u8>>,
    lock:      ReentrantSpinLock,
    locks:     AtomicUsize,
    prints:    AtomicUsize,
    inits:     AtomicUsize,
    timestamp: u32,
    task:      Option<&'static str>,
    on_print:  Option<fn(&[u8])>,
}

impl RecordingPlatform {
    pub const fn new() -> Self {
        Self {
            output:    Mutex::new(Vec::new()),
            lock:      ReentrantSpinLock::new(),
            locks:     AtomicUsize::new(0),
            prints:    AtomicUsize::new(0),
            inits:     AtomicUsize::new(0),
            timestamp: 0,
            task:      None,
            on_print:  None,
        }
    }

    pub const fn with_task(mut self, task: &'static str) -> Self {
        self.task = Some(task);
        self
    }

    pub const fn with_timestamp(mut self, timestamp: u32) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Run `hook` after every print, outside the output lock
    pub const fn with_print_hook(mut self, hook: fn(&[u8])) -> Self {
        self.on_print = Some(hook);
        self
    }

    pub fn output(&self) -> String {
        String::from_utf8(self.output.lock().unwrap().clone()).unwrap()
    }

    pub fn take_output(&self) -> String {
        String::from_utf8(std::mem::take(&mut *self.output.lock().unwrap())).unwrap()
    }

    /// Number of times the platform lock was acquired
    pub fn locks(&self) -> usize {
        self.locks.load(Ordering::SeqCst)
    }

    pub fn prints(&self) -> usize {
        self.prints.load(Ordering::SeqCst)
    }

    pub fn inits(&self) -> usize {
        self.inits.load(Ordering::SeqCst)
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }
}

// SAFETY: `lock` is a reentrant spin lock keyed on the calling thread.
unsafe impl LogPlatform for RecordingPlatform {
    fn init(&self) {
        self.inits.fetch_add(1, Ordering::SeqCst);
    }

    fn lock(&self) {
        self.lock.lock(current_context_id());
        self.locks.fetch_add(1, Ordering::SeqCst);
    }

    fn unlock(&self) {
        self.lock.unlock(current_context_id());
    }

    fn print(&self, bytes: &[u8]) {
        self.prints.fetch_add(1, Ordering::SeqCst);
        self.output.lock().unwrap().extend_from_slice(bytes);
        if let Some(hook) = self.on_print {
            hook(bytes);
        }
    }

    fn timestamp(&self) -> u32 {
        self.timestamp
    }

    fn active_task_name(&self) -> Option<TaskName> {
        self.task.map(task_name)
    }
}

/// Static tag names `t0` to `t16`
pub const TAGS: [&str; 17] = [
    "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8", "t9", "t10", "t11", "t12", "t13", "t14",
    "t15", "t16",
];
