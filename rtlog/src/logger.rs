// RTLOG - rtlog
// Module: Logger
// SW-REQ-ID: REQ_LOG_CORE_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The logger context: filtering, locking, prefix rendering, buffering and
//! flushing tied together.

#![allow(unsafe_code)]

use core::{
    fmt,
    sync::atomic::{AtomicUsize, Ordering},
};

use rtlog_error::Result;
use rtlog_sync::RtlogMutex;

use crate::{
    buffer::BufferedWriter,
    config::{LogConfig, DEFAULT_MAX_TAGS, DEFAULT_PRIMARY_BUF_SIZE, DEFAULT_SECONDARY_BUF_SIZE},
    level::{LevelFilter, Severity, STATIC_MAX_LEVEL},
    platform::{LogPlatform, PlatformLockGuard},
    prefix::{PrefixBuf, PrefixFormatter},
    registry::TagRegistry,
};

/// Counters describing what the logger has done so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogStatistics {
    /// Bytes handed to the sink
    pub bytes_flushed:     usize,
    /// Calls dropped for nesting too deep
    pub messages_dropped:  usize,
    /// Calls rejected by the level or tag filter
    pub messages_filtered: usize,
    /// Tags in the registry
    pub registered_tags:   usize,
    /// Bytes waiting in the primary buffer
    pub primary_pending:   usize,
    /// Bytes waiting in the secondary buffer
    pub secondary_pending: usize,
}

/// Logging context for one output.
///
/// `PRIMARY` and `SECONDARY` are the buffer sizes in bytes and `TAGS` the tag
/// registry capacity. A logger is usually placed in a `static`:
///
/// ```ignore
/// static LOGGER: Logger<UartPlatform> = Logger::new(UartPlatform::new(), LogConfig::DEFAULT);
/// ```
pub struct Logger<
    P,
    const PRIMARY: usize = DEFAULT_PRIMARY_BUF_SIZE,
    const SECONDARY: usize = DEFAULT_SECONDARY_BUF_SIZE,
    const TAGS: usize = DEFAULT_MAX_TAGS,
> {
    platform:  P,
    formatter: PrefixFormatter,
    /// Only locked while the platform lock is held, so it never spins
    registry:  RtlogMutex<TagRegistry<TAGS>>,
    writer:    BufferedWriter<PRIMARY, SECONDARY>,
    init_lock: RtlogMutex<()>,
    filtered:  AtomicUsize,
}

// SAFETY: the buffers are only touched between `platform.lock()` and
// `platform.unlock()`, which `LogPlatform` requires to exclude other contexts
// whenever `P: Sync`. Everything else is atomics or `RtlogMutex`.
unsafe impl<P, const PRIMARY: usize, const SECONDARY: usize, const TAGS: usize> Sync
    for Logger<P, PRIMARY, SECONDARY, TAGS>
where
    P: LogPlatform + Sync,
{
}

impl<P, const PRIMARY: usize, const SECONDARY: usize, const TAGS: usize>
    Logger<P, PRIMARY, SECONDARY, TAGS>
where
    P: LogPlatform,
{
    /// Create an uninitialized logger
    #[must_use]
    pub const fn new(platform: P, config: LogConfig) -> Self {
        Self {
            platform,
            formatter: PrefixFormatter::new(config),
            registry: RtlogMutex::new(TagRegistry::new(config.default_level)),
            writer: BufferedWriter::new(),
            init_lock: RtlogMutex::new(()),
            filtered: AtomicUsize::new(0),
        }
    }

    /// Create a logger after checking `config` against the capacities
    pub fn try_new(platform: P, config: LogConfig) -> Result<Self> {
        config.validate(PRIMARY, TAGS)?;
        Ok(Self::new(platform, config))
    }

    /// Log one message. Returns the bytes buffered for it: 0 if it was
    /// filtered out or nested too deep, less than the full text if a buffer
    /// ran out of room.
    ///
    /// `tag` of `None` skips tag filtering entirely. The message is only
    /// formatted after it has passed the filters.
    pub fn write(&self, level: Severity, tag: Option<&'static str>, message: fmt::Arguments<'_>) -> usize {
        if !STATIC_MAX_LEVEL.accepts(level) {
            return 0;
        }

        let _lock = PlatformLockGuard::acquire(&self.platform);
        if let Some(tag) = tag {
            if !self.registry.lock().is_printable(tag, level) {
                self.filtered.fetch_add(1, Ordering::Relaxed);
                return 0;
            }
        }

        let mut prefix = PrefixBuf::new();
        self.formatter.format(&mut prefix, level, tag, &self.platform);

        let platform = &self.platform;
        self.writer.append(&prefix, message, &mut |bytes| platform.print(bytes))
    }

    /// Flush buffered data to the sink if initialized. Returns false if
    /// nothing was flushed because the logger is not initialized or the call
    /// came from inside a log call (which flushes on its way out).
    pub fn flush_bufs(&self) -> bool {
        let _lock = PlatformLockGuard::acquire(&self.platform);
        let platform = &self.platform;
        self.writer.flush(&mut |bytes| platform.print(bytes))
    }

    /// Run platform initialization, start delivering to the sink, and flush
    /// everything buffered so far. Only the first call has any effect; it
    /// returns true.
    pub fn init(&self) -> bool {
        let Some(_init) = self.init_lock.try_lock() else {
            return false;
        };
        if self.writer.is_initialized() {
            return false;
        }
        self.platform.init();
        self.writer.mark_initialized();
        self.flush_bufs();
        true
    }

    /// True once [`init`](Self::init) has run
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.writer.is_initialized()
    }

    /// Set the threshold of `tag`, or of every registered tag for `"*"`.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if `tag` is new and the registry is full.
    pub fn set_level(&self, tag: &'static str, level: LevelFilter) -> Result<()> {
        let _lock = PlatformLockGuard::acquire(&self.platform);
        self.registry.lock().set_level(tag, level)
    }

    /// Whether a message at `level` for `tag` would pass the filters.
    /// Registers `tag` like a real log call would.
    pub fn is_printable(&self, tag: Option<&'static str>, level: Severity) -> bool {
        if !STATIC_MAX_LEVEL.accepts(level) {
            return false;
        }
        match tag {
            Some(tag) => {
                let _lock = PlatformLockGuard::acquire(&self.platform);
                self.registry.lock().is_printable(tag, level)
            },
            None => true,
        }
    }

    /// Current threshold of `tag`, if registered
    #[must_use]
    pub fn level_of(&self, tag: &str) -> Option<LevelFilter> {
        let _lock = PlatformLockGuard::acquire(&self.platform);
        self.registry.lock().threshold(tag)
    }

    /// Snapshot of the counters
    #[must_use]
    pub fn statistics(&self) -> LogStatistics {
        let _lock = PlatformLockGuard::acquire(&self.platform);
        LogStatistics {
            bytes_flushed:     self.writer.bytes_flushed(),
            messages_dropped:  self.writer.dropped(),
            messages_filtered: self.filtered.load(Ordering::Relaxed),
            registered_tags:   self.registry.lock().len(),
            primary_pending:   self.writer.primary_pending(),
            secondary_pending: self.writer.secondary_pending(),
        }
    }

    /// Prefix configuration
    #[must_use]
    pub const fn config(&self) -> &LogConfig {
        self.formatter.config()
    }

    /// The platform collaborators
    #[must_use]
    pub const fn platform(&self) -> &P {
        &self.platform
    }
}

impl<P, const PRIMARY: usize, const SECONDARY: usize, const TAGS: usize> fmt::Debug
    for Logger<P, PRIMARY, SECONDARY, TAGS>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", self.formatter.config())
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}
