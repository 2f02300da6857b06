// RTLOG - rtlog
// Module: Tag Registry
// SW-REQ-ID: REQ_LOG_TAG_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity mapping from tag name to severity threshold.
//!
//! Tags are registered lazily the first time they are logged and are never
//! removed. Once the registry is full, unseen tags cannot be registered and
//! their messages are rejected for good.

use rtlog_error::{kinds, Error, Result};

use crate::level::{LevelFilter, Severity};

/// Tag name that addresses every registered tag in [`TagRegistry::set_level`]
pub const WILDCARD_TAG: &str = "*";

/// One registered tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagEntry {
    /// Tag name, borrowed from the caller
    pub name:      &'static str,
    /// Most verbose severity the tag accepts
    pub threshold: LevelFilter,
}

/// Registry of up to `N` tags, in registration order
#[derive(Debug)]
pub struct TagRegistry<const N: usize> {
    entries:       heapless::Vec<TagEntry, N>,
    default_level: LevelFilter,
}

impl<const N: usize> TagRegistry<N> {
    /// Create an empty registry; lazily registered tags get `default_level`
    #[must_use]
    pub const fn new(default_level: LevelFilter) -> Self {
        Self { entries: heapless::Vec::new(), default_level }
    }

    /// Index of `tag`, if registered
    #[must_use]
    pub fn lookup(&self, tag: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == tag)
    }

    /// Current threshold of `tag`, if registered
    #[must_use]
    pub fn threshold(&self, tag: &str) -> Option<LevelFilter> {
        self.lookup(tag).map(|index| self.entries[index].threshold)
    }

    /// Set the threshold of `tag`, registering it if needed.
    ///
    /// [`WILDCARD_TAG`] updates every tag registered so far and always
    /// succeeds; tags registered later still start at the default level.
    /// The empty name is refused.
    pub fn set_level(&mut self, tag: &'static str, level: LevelFilter) -> Result<()> {
        if tag.is_empty() {
            return Err(kinds::invalid_tag_error("Tag name cannot be empty"));
        }
        if tag == WILDCARD_TAG {
            for entry in self.entries.iter_mut() {
                entry.threshold = level;
            }
            return Ok(());
        }

        if let Some(index) = self.lookup(tag) {
            self.entries[index].threshold = level;
            return Ok(());
        }

        self.entries
            .push(TagEntry { name: tag, threshold: level })
            .map_err(|_| Error::TAG_REGISTRY_FULL)
    }

    /// Whether a message at `level` for `tag` should be printed.
    ///
    /// An unseen tag is registered at the default level first (regardless of
    /// `level`); if that fails because the registry is full, the message is
    /// rejected. The wildcard name is checked against the default level and
    /// never registered. The empty name is never registered and never printed.
    pub fn is_printable(&mut self, tag: &'static str, level: Severity) -> bool {
        if tag.is_empty() {
            return false;
        }
        if let Some(index) = self.lookup(tag) {
            return self.entries[index].threshold.accepts(level);
        }
        if tag == WILDCARD_TAG {
            return self.default_level.accepts(level);
        }
        match self.entries.push(TagEntry { name: tag, threshold: self.default_level }) {
            Ok(()) => self.default_level.accepts(level),
            Err(_) => false,
        }
    }

    /// Threshold given to lazily registered tags
    #[must_use]
    pub const fn default_level(&self) -> LevelFilter {
        self.default_level
    }

    /// Registered tags in registration order
    pub fn iter(&self) -> impl Iterator<Item = &TagEntry> {
        self.entries.iter()
    }

    /// Number of registered tags
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no tag is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if no further tag can be registered
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Maximum number of tags
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }
}
