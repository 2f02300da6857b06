// RTLOG - rtlog
// Module: Build-time Configuration
// SW-REQ-ID: REQ_LOG_CFG_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Build-time configuration of the logger.
//!
//! Buffer and registry capacities are const generic parameters of
//! [`Logger`](crate::Logger); everything else lives in [`LogConfig`], a
//! `Copy` value meant to be assembled in a `const` item.

use rtlog_error::{kinds, Error, Result};

use crate::level::LevelFilter;

/// Size of the scratch buffer a prefix is rendered into
pub const PREFIX_MAX_LEN: usize = 82;

/// Room reserved for the timestamp segment, either format
pub const TIMESTAMP_MAX_LEN: usize = 24;

/// Longest active-task name kept when rendering the prefix
pub const TASK_NAME_MAX_LEN: usize = 32;

/// Default size of the primary buffer; it also holds everything logged
/// before initialization
pub const DEFAULT_PRIMARY_BUF_SIZE: usize = 2000;

/// Default size of the secondary buffer used by nested log calls
pub const DEFAULT_SECONDARY_BUF_SIZE: usize = 1000;

/// Default tag registry capacity
pub const DEFAULT_MAX_TAGS: usize = 16;

/// How the timestamp segment is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `[YYYY-MM-DD hh:mm:ss]`, the platform timestamp read as Unix seconds
    DateTime,
    /// `[%9u]`, the raw platform counter
    Raw,
}

/// Prefix layout and tag defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Threshold given to tags registered on first use
    pub default_level:     LevelFilter,
    /// Render the timestamp segment
    pub print_timestamp:   bool,
    /// Format of the timestamp segment
    pub timestamp_format:  TimestampFormat,
    /// Render the severity label
    pub print_level:       bool,
    /// Render the tag name
    pub print_tag_names:   bool,
    /// Render the active task name
    pub print_active_task: bool,
}

impl LogConfig {
    /// Level labels and task names, no timestamps or tag names; every tag
    /// starts out fully verbose
    pub const DEFAULT: Self = Self {
        default_level:     LevelFilter::Verbose,
        print_timestamp:   false,
        timestamp_format:  TimestampFormat::DateTime,
        print_level:       true,
        print_tag_names:   false,
        print_active_task: true,
    };

    /// Level label only
    #[must_use]
    pub const fn minimal() -> Self {
        Self::DEFAULT.with_active_task(false)
    }

    /// Every prefix segment enabled
    #[must_use]
    pub const fn verbose() -> Self {
        Self::DEFAULT.with_timestamp(TimestampFormat::DateTime).with_tag_names(true)
    }

    /// Set the threshold for lazily registered tags
    #[must_use]
    pub const fn with_default_level(mut self, level: LevelFilter) -> Self {
        self.default_level = level;
        self
    }

    /// Enable the timestamp segment in the given format
    #[must_use]
    pub const fn with_timestamp(mut self, format: TimestampFormat) -> Self {
        self.print_timestamp = true;
        self.timestamp_format = format;
        self
    }

    /// Disable the timestamp segment
    #[must_use]
    pub const fn without_timestamp(mut self) -> Self {
        self.print_timestamp = false;
        self
    }

    /// Toggle the severity label
    #[must_use]
    pub const fn with_level_labels(mut self, enabled: bool) -> Self {
        self.print_level = enabled;
        self
    }

    /// Toggle tag names
    #[must_use]
    pub const fn with_tag_names(mut self, enabled: bool) -> Self {
        self.print_tag_names = enabled;
        self
    }

    /// Toggle active task names
    #[must_use]
    pub const fn with_active_task(mut self, enabled: bool) -> Self {
        self.print_active_task = enabled;
        self
    }

    /// Validate the configuration against the capacities it will be used
    /// with. The secondary buffer may be empty; nested messages are then
    /// simply lost.
    pub fn validate(&self, primary: usize, max_tags: usize) -> Result<()> {
        if primary == 0 {
            return Err(Error::ZERO_CAPACITY);
        }
        if primary < PREFIX_MAX_LEN {
            return Err(kinds::buffer_exhausted_error("primary buffer cannot hold a full prefix"));
        }
        if max_tags == 0 {
            return Err(kinds::invalid_configuration_error(
                "tag registry capacity cannot be zero",
            ));
        }
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let minimal = LogConfig::minimal();
        assert!(minimal.print_level);
        assert!(!minimal.print_active_task);
        assert!(!minimal.print_timestamp);

        let verbose = LogConfig::verbose();
        assert!(verbose.print_timestamp && verbose.print_tag_names && verbose.print_active_task);
        assert_eq!(LogConfig::default(), LogConfig::DEFAULT);
    }

    #[test]
    fn test_builders_in_const_context() {
        const CONFIG: LogConfig = LogConfig::DEFAULT
            .with_default_level(LevelFilter::Warning)
            .with_timestamp(TimestampFormat::Raw);
        assert_eq!(CONFIG.default_level, LevelFilter::Warning);
        assert_eq!(CONFIG.timestamp_format, TimestampFormat::Raw);
        assert!(CONFIG.print_timestamp);
        assert!(!CONFIG.without_timestamp().print_timestamp);
    }

    #[test]
    fn test_validate() {
        let config = LogConfig::DEFAULT;
        assert!(config
            .validate(DEFAULT_PRIMARY_BUF_SIZE, DEFAULT_MAX_TAGS)
            .is_ok());
        assert!(config.validate(PREFIX_MAX_LEN, 1).is_ok());
        assert_eq!(config.validate(0, 4), Err(Error::ZERO_CAPACITY));
        assert!(config.validate(16, 4).unwrap_err().is_capacity_error());
        assert!(config.validate(128, 0).unwrap_err().is_configuration_error());
    }
}
