// RTLOG - rtlog
// Module: log Facade Adapter
// SW-REQ-ID: REQ_LOG_ADAPT_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Route the `log` crate's macros through a [`Logger`].
//!
//! The record's static module path is used as the tag, so per-module
//! thresholds set with [`Logger::set_level`] apply to `log::info!` and
//! friends. Records whose module path is not `'static` are logged untagged.
//! An explicit `target:` is filtered by that name's threshold as well,
//! matching what `log_enabled!` reports for it.

use rtlog_error::{kinds, Result};

use crate::{
    level::{LevelFilter, Severity, STATIC_MAX_LEVEL},
    logger::Logger,
    platform::LogPlatform,
};

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Verbose,
        }
    }
}

impl From<Severity> for log::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => Self::Error,
            Severity::Warning => Self::Warn,
            Severity::Info => Self::Info,
            Severity::Debug => Self::Debug,
            Severity::Verbose => Self::Trace,
        }
    }
}

impl From<log::LevelFilter> for LevelFilter {
    fn from(filter: log::LevelFilter) -> Self {
        match filter {
            log::LevelFilter::Off => Self::Off,
            log::LevelFilter::Error => Self::Error,
            log::LevelFilter::Warn => Self::Warning,
            log::LevelFilter::Info => Self::Info,
            log::LevelFilter::Debug => Self::Debug,
            log::LevelFilter::Trace => Self::Verbose,
        }
    }
}

impl From<LevelFilter> for log::LevelFilter {
    fn from(filter: LevelFilter) -> Self {
        match filter {
            LevelFilter::Off => Self::Off,
            LevelFilter::Error => Self::Error,
            LevelFilter::Warning => Self::Warn,
            LevelFilter::Info => Self::Info,
            LevelFilter::Debug => Self::Debug,
            LevelFilter::Verbose => Self::Trace,
        }
    }
}

impl<P, const PRIMARY: usize, const SECONDARY: usize, const TAGS: usize> log::Log
    for Logger<P, PRIMARY, SECONDARY, TAGS>
where
    P: LogPlatform + Send + Sync,
{
    /// Checks without registering the target, which is not `'static`
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        let severity = Severity::from(metadata.level());
        STATIC_MAX_LEVEL.accepts(severity)
            && self
                .level_of(metadata.target())
                .unwrap_or(self.config().default_level)
                .accepts(severity)
    }

    /// A record must pass both its target's threshold and, through
    /// [`Logger::write`], the threshold of its module path
    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.write(
            Severity::from(record.level()),
            record.module_path_static(),
            format_args!("{}\n", record.args()),
        );
    }

    fn flush(&self) {
        self.flush_bufs();
    }
}

/// Install `logger` as the `log` crate's global logger and raise the
/// facade's maximum level to the compile-time ceiling.
///
/// # Errors
///
/// Returns an invalid-state error if a global logger is already installed.
pub fn set_global_logger<P, const PRIMARY: usize, const SECONDARY: usize, const TAGS: usize>(
    logger: &'static Logger<P, PRIMARY, SECONDARY, TAGS>,
) -> Result<()>
where
    P: LogPlatform + Send + Sync,
{
    log::set_logger(logger)
        .map_err(|_| kinds::invalid_state_error("A global logger is already installed"))?;
    log::set_max_level(STATIC_MAX_LEVEL.into());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_conversions() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from(log::Level::from(severity)), severity);
        }
        assert_eq!(Severity::from(log::Level::Trace), Severity::Verbose);
        assert_eq!(LevelFilter::from(log::LevelFilter::Off), LevelFilter::Off);
        assert_eq!(log::LevelFilter::from(LevelFilter::Warning), log::LevelFilter::Warn);
    }
}
