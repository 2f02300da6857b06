//! # RTLOG
//!
//! Buffered, tag-filtered logging for real-time operating systems.
//!
//! Log calls are filtered by severity, first against a compile-time ceiling
//! and then against a per-tag threshold kept in a fixed-size registry.
//! Accepted messages get a configurable prefix (timestamp, severity label,
//! tag, task name) and are appended to a statically sized buffer that is
//! flushed to the platform sink once the logger is initialized. Messages
//! logged before initialization are kept until then.
//!
//! Logging is safe from inside a log call: a sink or `Display` impl that
//! logs writes to a secondary buffer, which is flushed first. Deeper nesting
//! is dropped and counted.
//!
//! ## Features
//!
//! - `std` (default): [`StdPlatform`] and the `log` adapter
//! - `log`: implement [`log::Log`] for [`Logger`]
//! - `max-level-*`: compile out everything more verbose than the named level
//! - `kani`: formal verification harnesses
//!
//! ## Usage
//!
//! ```
//! use rtlog::{logi, logw, LevelFilter, LogConfig, Logger, StdPlatform};
//!
//! static LOGGER: Logger<StdPlatform> = Logger::new(StdPlatform::new(), LogConfig::DEFAULT);
//!
//! LOGGER.set_level("net", LevelFilter::Warning).unwrap();
//! logi!(LOGGER, "net", "held back by the filter\n");
//! logw!(LOGGER, "net", "buffered until init\n");
//! LOGGER.init();
//! ```

// RTLOG - rtlog
// Module: Logging Facility
// SW-REQ-ID: REQ_LOG_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

/// Adapter for the `log` facade
#[cfg(feature = "log")]
pub mod adapter;
/// Primary and secondary buffers and the flush path
pub mod buffer;
/// Prefix configuration and capacities
pub mod config;
/// Reentrancy guard
pub mod guard;
/// Severity levels and thresholds
pub mod level;
/// The logger context
pub mod logger;
/// Platform collaborators
pub mod platform;
/// Prefix rendering
pub mod prefix;
/// Per-tag thresholds
pub mod registry;
/// Platform for hosted targets
#[cfg(feature = "std")]
pub mod std_platform;

#[cfg(all(not(coverage), any(doc, kani)))]
pub mod verify;

#[cfg(feature = "log")]
pub use adapter::set_global_logger;
pub use buffer::BufferedWriter;
pub use config::{LogConfig, TimestampFormat};
pub use guard::ReentrancyGuard;
pub use level::{LevelFilter, Severity, STATIC_MAX_LEVEL};
pub use logger::{LogStatistics, Logger};
pub use platform::{task_name, LogPlatform, TaskName};
pub use prefix::PrefixFormatter;
pub use registry::{TagRegistry, WILDCARD_TAG};
pub use rtlog_error::{Error, ErrorCategory, Result};
#[cfg(feature = "std")]
pub use std_platform::{current_context_id, Output, StdPlatform};
