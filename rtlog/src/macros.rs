// RTLOG - rtlog
// Module: Logging Macros
// SW-REQ-ID: REQ_LOG_MAC_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Level macros.
//!
//! Each macro checks its severity against
//! [`STATIC_MAX_LEVEL`](crate::level::STATIC_MAX_LEVEL) in a `const` item
//! first, so disabled levels compile to nothing, and only builds the
//! `format_args!` for [`Logger::write`](crate::Logger::write) behind that
//! check. The tag is either a `&'static str` or the literal `None`.
//!
//! ```ignore
//! logi!(LOGGER, "net", "link up after {} ms\r\n", elapsed);
//! loge!(LOGGER, None, "unfiltered message\r\n");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __rtlog_static {
    ($logger:expr, $level:path, None, $($arg:tt)+) => {{
        const ENABLED: bool = $level.is_statically_enabled();
        if ENABLED {
            $logger.write($level, ::core::option::Option::None, ::core::format_args!($($arg)+))
        } else {
            0
        }
    }};
    ($logger:expr, $level:path, $tag:expr, $($arg:tt)+) => {{
        const ENABLED: bool = $level.is_statically_enabled();
        if ENABLED {
            $logger.write($level, ::core::option::Option::Some($tag), ::core::format_args!($($arg)+))
        } else {
            0
        }
    }};
}

/// Log at an explicit, possibly runtime, severity
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, None, $($arg:tt)+) => {{
        let level: $crate::Severity = $level;
        if level.is_statically_enabled() {
            $logger.write(level, ::core::option::Option::None, ::core::format_args!($($arg)+))
        } else {
            0
        }
    }};
    ($logger:expr, $level:expr, $tag:expr, $($arg:tt)+) => {{
        let level: $crate::Severity = $level;
        if level.is_statically_enabled() {
            $logger.write(level, ::core::option::Option::Some($tag), ::core::format_args!($($arg)+))
        } else {
            0
        }
    }};
}

/// Log an error
#[macro_export]
macro_rules! loge {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__rtlog_static!($logger, $crate::Severity::Error, $($rest)+)
    };
}

/// Log a warning
#[macro_export]
macro_rules! logw {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__rtlog_static!($logger, $crate::Severity::Warning, $($rest)+)
    };
}

/// Log an informational message
#[macro_export]
macro_rules! logi {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__rtlog_static!($logger, $crate::Severity::Info, $($rest)+)
    };
}

/// Log a debug message
#[macro_export]
macro_rules! logd {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__rtlog_static!($logger, $crate::Severity::Debug, $($rest)+)
    };
}

/// Log a verbose message
#[macro_export]
macro_rules! logv {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__rtlog_static!($logger, $crate::Severity::Verbose, $($rest)+)
    };
}
