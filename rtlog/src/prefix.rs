// RTLOG - rtlog
// Module: Prefix Formatter
// SW-REQ-ID: REQ_LOG_FMT_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Renders the metadata placed in front of every message.
//!
//! Segments are appended in a fixed order (timestamp, severity label, tag,
//! task name, separator space). A segment is skipped whole when the room
//! left is not strictly greater than the longest text it could render, so a
//! tight buffer loses fields instead of getting cut mid-field.

use core::fmt::{self, Write};

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::{
    config::{LogConfig, TimestampFormat, PREFIX_MAX_LEN, TIMESTAMP_MAX_LEN},
    level::{Severity, LEVEL_LABEL_LEN},
    platform::LogPlatform,
};

/// Scratch buffer a prefix is rendered into
pub type PrefixBuf = heapless::String<PREFIX_MAX_LEN>;

/// Renders prefixes according to a [`LogConfig`]
#[derive(Debug, Clone, Copy)]
pub struct PrefixFormatter {
    config: LogConfig,
}

impl PrefixFormatter {
    /// Create a formatter for `config`
    #[must_use]
    pub const fn new(config: LogConfig) -> Self {
        Self { config }
    }

    /// The configuration this formatter renders
    #[must_use]
    pub const fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Append the prefix for a message to `out`, returning the number of
    /// bytes appended.
    pub fn format<P, const CAP: usize>(
        &self,
        out: &mut heapless::String<CAP>,
        level: Severity,
        tag: Option<&str>,
        platform: &P,
    ) -> usize
    where
        P: LogPlatform + ?Sized,
    {
        let start = out.len();

        if self.config.print_timestamp && has_room(out, TIMESTAMP_MAX_LEN) {
            let timestamp = platform.timestamp();
            match self.config.timestamp_format {
                TimestampFormat::DateTime => push_datetime(out, timestamp),
                TimestampFormat::Raw => push_segment(out, format_args!("[{:9}]", timestamp)),
            }
        }

        if self.config.print_level && has_room(out, LEVEL_LABEL_LEN) {
            push_segment(out, format_args!("{}", level.label()));
        }

        if self.config.print_tag_names {
            if let Some(tag) = tag {
                if has_room(out, tag.len() + 2) {
                    push_segment(out, format_args!("[{}]", tag));
                }
            }
        }

        if self.config.print_active_task {
            if let Some(name) = platform.active_task_name() {
                if has_room(out, name.len() + 2) {
                    push_segment(out, format_args!("[{}]", name));
                }
            }
        }

        if has_room(out, 1) {
            push_segment(out, format_args!(" "));
        }

        out.len() - start
    }
}

fn has_room<const CAP: usize>(out: &heapless::String<CAP>, segment_len: usize) -> bool {
    CAP - out.len() > segment_len
}

/// Append a whole segment or nothing.
fn push_segment<const CAP: usize>(out: &mut heapless::String<CAP>, args: fmt::Arguments<'_>) {
    let mark = out.len();
    if out.write_fmt(args).is_err() {
        out.truncate(mark);
    }
}

fn push_datetime<const CAP: usize>(out: &mut heapless::String<CAP>, timestamp: u32) {
    let Some(time) = DateTime::<Utc>::from_timestamp(i64::from(timestamp), 0) else {
        return;
    };
    push_segment(
        out,
        format_args!(
            "[{:04}-{:02}-{:02} {:02}:{:02}:{:02}]",
            time.year(),
            time.month(),
            time.day(),
            time.hour(),
            time.minute(),
            time.second()
        ),
    );
}
