// RTLOG - rtlog
// Module: Buffered Writer
// SW-REQ-ID: REQ_LOG_BUF_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity byte buffers and the reentrancy-safe writer built on them.
//!
//! The outermost call in a context renders into the primary buffer and, once
//! the logger is initialized, flushes both buffers to the sink: secondary
//! first, since anything in it was logged while the enclosing call was in
//! flight. Nested calls render into the secondary buffer and never flush.
//! Overflowing content is truncated at the buffer end; drops are silent.

#![allow(unsafe_code)]

use core::{
    cell::UnsafeCell,
    fmt::{self, Write},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

use crate::guard::{ReentrancyGuard, Slot, SlotGuard};

/// A byte buffer with a write cursor.
///
/// Clearing only resets the cursor; old bytes stay behind it unread.
pub struct LogBuffer<const N: usize> {
    data:   UnsafeCell<[u8; N]>,
    cursor: AtomicUsize,
}

impl<const N: usize> LogBuffer<N> {
    /// Empty buffer
    #[must_use]
    pub const fn new() -> Self {
        Self { data: UnsafeCell::new([0; N]), cursor: AtomicUsize::new(0) }
    }

    /// Capacity in bytes
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Bytes waiting to be flushed
    #[must_use]
    pub fn len(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }

    /// True if nothing is waiting
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Room left in bytes
    #[must_use]
    pub fn remaining(&self) -> usize {
        N - self.len()
    }

    /// Render `prefix` then `message` at the cursor, truncating at the end
    /// of the buffer. Returns the number of bytes stored.
    ///
    /// # Safety
    ///
    /// The caller must hold the slot for this buffer, so no other reference
    /// to its contents exists while `message` is being formatted.
    unsafe fn append(&self, prefix: &str, message: fmt::Arguments<'_>) -> usize {
        let cursor = self.len();
        // SAFETY: exclusive access is guaranteed by the caller's slot.
        let data = unsafe { &mut *self.data.get() };
        let mut writer = SliceWriter::new(&mut data[cursor..]);
        // Errors only signal truncation.
        if writer.write_str(prefix).is_ok() {
            let _ = writer.write_fmt(message);
        }
        let written = writer.written();
        self.cursor.store(cursor + written, Ordering::Relaxed);
        written
    }

    /// Hand the pending bytes to `sink` and reset the cursor. Returns the
    /// number of bytes handed over.
    ///
    /// # Safety
    ///
    /// The caller must hold the slot for this buffer.
    unsafe fn drain(&self, sink: &mut dyn FnMut(&[u8])) -> usize {
        let len = self.len();
        // SAFETY: the slot keeps writers away while the sink reads.
        let data = unsafe { &*self.data.get() };
        sink(&data[..len]);
        self.cursor.store(0, Ordering::Relaxed);
        len
    }
}

impl<const N: usize> Default for LogBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for LogBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogBuffer").field("capacity", &N).field("len", &self.len()).finish()
    }
}

/// `fmt::Write` over a byte slice that stops at the slice end.
pub struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceWriter<'a> {
    /// Writer starting at the beginning of `buf`
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far
    #[must_use]
    pub fn written(&self) -> usize {
        self.pos
    }
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.len() - self.pos;
        let take = room.min(s.len());
        self.buf[self.pos..self.pos + take].copy_from_slice(&s.as_bytes()[..take]);
        self.pos += take;
        if take < s.len() {
            Err(fmt::Error)
        } else {
            Ok(())
        }
    }
}

/// Primary and secondary buffers, their busy flags and the init flag.
///
/// Callers must serialize access from different execution contexts (the
/// logger does so with the platform lock); nested calls from the same
/// context are sorted out by the [`ReentrancyGuard`].
pub struct BufferedWriter<const PRIMARY: usize, const SECONDARY: usize> {
    primary:       LogBuffer<PRIMARY>,
    secondary:     LogBuffer<SECONDARY>,
    guard:         ReentrancyGuard,
    initialized:   AtomicBool,
    bytes_flushed: AtomicUsize,
    dropped:       AtomicUsize,
}

impl<const PRIMARY: usize, const SECONDARY: usize> BufferedWriter<PRIMARY, SECONDARY> {
    /// Empty, uninitialized writer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            primary:       LogBuffer::new(),
            secondary:     LogBuffer::new(),
            guard:         ReentrancyGuard::new(),
            initialized:   AtomicBool::new(false),
            bytes_flushed: AtomicUsize::new(0),
            dropped:       AtomicUsize::new(0),
        }
    }

    /// Append one message. Returns the bytes stored, 0 if the call was
    /// nested too deep.
    ///
    /// Once initialized, the outermost call flushes both buffers to `sink`
    /// before returning.
    pub fn append(
        &self,
        prefix: &str,
        message: fmt::Arguments<'_>,
        sink: &mut dyn FnMut(&[u8]),
    ) -> usize {
        match self.guard.enter() {
            Slot::Dropped => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                0
            },
            Slot::Secondary(_slot) => {
                // SAFETY: the secondary slot is held until `_slot` drops.
                unsafe { self.secondary.append(prefix, message) }
            },
            Slot::Primary(slot) => {
                // SAFETY: the primary slot is held until `slot` drops.
                let written = unsafe { self.primary.append(prefix, message) };
                if self.is_initialized() {
                    self.flush_with(&slot, sink);
                }
                written
            },
        }
    }

    /// Flush both buffers if initialized. Returns false if the flush was
    /// skipped: not initialized yet, or called from inside an append, whose
    /// own flush will pick the data up.
    pub fn flush(&self, sink: &mut dyn FnMut(&[u8])) -> bool {
        if !self.is_initialized() {
            return false;
        }
        match self.guard.try_primary() {
            Some(slot) => {
                self.flush_with(&slot, sink);
                true
            },
            None => false,
        }
    }

    /// Secondary first, then primary. Logging from the sink while the
    /// secondary drains is dropped; while the primary drains it lands in the
    /// secondary buffer for the next flush.
    fn flush_with(&self, primary: &SlotGuard<'_>, sink: &mut dyn FnMut(&[u8])) {
        if let Some(_secondary) = primary.claim_secondary() {
            // SAFETY: both slots are held.
            let flushed = unsafe { self.secondary.drain(sink) };
            self.bytes_flushed.fetch_add(flushed, Ordering::Relaxed);
        }
        // SAFETY: the primary slot is held by the caller.
        let flushed = unsafe { self.primary.drain(sink) };
        self.bytes_flushed.fetch_add(flushed, Ordering::Relaxed);
    }

    /// Allow appends to reach the sink. Returns false if already set.
    pub fn mark_initialized(&self) -> bool {
        !self.initialized.swap(true, Ordering::AcqRel)
    }

    /// True once [`mark_initialized`](Self::mark_initialized) ran
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Bytes handed to the sink so far
    #[must_use]
    pub fn bytes_flushed(&self) -> usize {
        self.bytes_flushed.load(Ordering::Relaxed)
    }

    /// Calls dropped for nesting too deep
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Bytes waiting in the primary buffer
    #[must_use]
    pub fn primary_pending(&self) -> usize {
        self.primary.len()
    }

    /// Bytes waiting in the secondary buffer
    #[must_use]
    pub fn secondary_pending(&self) -> usize {
        self.secondary.len()
    }

    /// The busy flags
    #[must_use]
    pub fn guard(&self) -> &ReentrancyGuard {
        &self.guard
    }
}

impl<const PRIMARY: usize, const SECONDARY: usize> Default for BufferedWriter<PRIMARY, SECONDARY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const PRIMARY: usize, const SECONDARY: usize> fmt::Debug for BufferedWriter<PRIMARY, SECONDARY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedWriter")
            .field("primary", &self.primary)
            .field("secondary", &self.secondary)
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}
