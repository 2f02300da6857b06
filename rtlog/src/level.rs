// RTLOG - rtlog
// Module: Severity Levels
// SW-REQ-ID: REQ_LOG_LVL_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Severity levels and per-tag thresholds.
//!
//! Severities are ordered from most severe to most verbose, so a numerically
//! larger severity is "more verbose". A threshold accepts a message iff the
//! message severity is not more verbose than the threshold.

use core::str::FromStr;

use rtlog_error::{kinds, Error};

/// Severity of a single log message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Error messages
    Error   = 0,
    /// Warning messages (potential issues)
    Warning = 1,
    /// Informational messages
    Info    = 2,
    /// Debug messages (useful for developers)
    Debug   = 3,
    /// Verbose messages (detailed tracing)
    Verbose = 4,
}

/// Threshold of a tag: the most verbose severity it accepts, or `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum LevelFilter {
    /// Accepts nothing
    Off     = -1,
    /// Accepts errors only
    Error   = 0,
    /// Accepts warnings and errors
    Warning = 1,
    /// Accepts info and above
    Info    = 2,
    /// Accepts debug and above
    Debug   = 3,
    /// Accepts everything
    Verbose = 4,
}

/// Width of every severity label rendered in a prefix.
pub const LEVEL_LABEL_LEN: usize = 9;

/// Global minimum severity fixed at build time.
///
/// Messages more verbose than this are rejected before any other work, and
/// the logging macros compare against it in a `const` context so disabled
/// levels compile away.
pub const STATIC_MAX_LEVEL: LevelFilter = static_max_level();

const fn static_max_level() -> LevelFilter {
    if cfg!(feature = "max-level-off") {
        LevelFilter::Off
    } else if cfg!(feature = "max-level-error") {
        LevelFilter::Error
    } else if cfg!(feature = "max-level-warning") {
        LevelFilter::Warning
    } else if cfg!(feature = "max-level-info") {
        LevelFilter::Info
    } else if cfg!(feature = "max-level-debug") {
        LevelFilter::Debug
    } else {
        LevelFilter::Verbose
    }
}

impl Severity {
    /// All severities, most severe first
    pub const ALL: [Severity; 5] =
        [Self::Error, Self::Warning, Self::Info, Self::Debug, Self::Verbose];

    /// Fixed-width bracketed label used in the prefix
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "[ ERROR ]",
            Self::Warning => "[WARNING]",
            Self::Info => "[ INFO  ]",
            Self::Debug => "[ DEBUG ]",
            Self::Verbose => "[VERBOSE]",
        }
    }

    /// Lower-case name of the severity
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Verbose => "verbose",
        }
    }

    /// Whether this severity passes [`STATIC_MAX_LEVEL`]
    #[must_use]
    #[inline(always)]
    pub const fn is_statically_enabled(self) -> bool {
        STATIC_MAX_LEVEL.accepts(self)
    }

    /// Creates a `Severity` from a string, defaulting to Info for invalid
    /// names
    #[must_use]
    pub fn from_string_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Self::Info)
    }
}

impl LevelFilter {
    /// Returns true if a message at `level` passes this threshold
    #[must_use]
    #[inline]
    pub const fn accepts(self, level: Severity) -> bool {
        (level as i8) <= (self as i8)
    }

    /// The most verbose severity this threshold accepts
    #[must_use]
    pub const fn to_severity(self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Error => Some(Severity::Error),
            Self::Warning => Some(Severity::Warning),
            Self::Info => Some(Severity::Info),
            Self::Debug => Some(Severity::Debug),
            Self::Verbose => Some(Severity::Verbose),
        }
    }

    /// Lower-case name of the threshold
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self.to_severity() {
            Some(severity) => severity.as_str(),
            None => "off",
        }
    }
}

impl From<Severity> for LevelFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => Self::Error,
            Severity::Warning => Self::Warning,
            Severity::Info => Self::Info,
            Severity::Debug => Self::Debug,
            Severity::Verbose => Self::Verbose,
        }
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") || s.eq_ignore_ascii_case("err") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warning") || s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warning)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("verbose") || s.eq_ignore_ascii_case("trace") {
            Ok(Self::Verbose)
        } else {
            Err(kinds::unknown_level_error("Invalid log level"))
        }
    }
}

impl FromStr for LevelFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("off") || s.eq_ignore_ascii_case("none") {
            return Ok(Self::Off);
        }
        Severity::from_str(s).map(Self::from)
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
