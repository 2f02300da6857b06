// RTLOG - rtlog-error
// Module: Error Types
// SW-REQ-ID: REQ_LOG_ERR_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The `Error` struct and its categories.

use core::fmt;

use crate::{codes, ToErrorCategory};

/// `Error` categories for rtlog operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// A fixed-capacity structure is full
    Capacity      = 1,
    /// Build-time or runtime configuration errors
    Configuration = 2,
    /// Parse errors (level names)
    Parse         = 3,
    /// Invalid state errors
    InvalidState  = 4,
}

/// rtlog `Error` type
///
/// Carries a category, a numeric code and a static message so it can be
/// created and copied without an allocator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Tag registry is full
    pub const TAG_REGISTRY_FULL: Self = Self::new(
        ErrorCategory::Capacity,
        codes::TAG_REGISTRY_FULL,
        "Tag registry full",
    );
    /// Buffer has zero capacity
    pub const ZERO_CAPACITY: Self = Self::new(
        ErrorCategory::Capacity,
        codes::ZERO_CAPACITY,
        "Buffer capacity must be non-zero",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a configuration error
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        self.category == ErrorCategory::Configuration
    }

    /// Check if this is a parse error
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        self.category == ErrorCategory::Parse
    }

    /// Check if this is an invalid state error
    #[must_use]
    pub fn is_invalid_state_error(&self) -> bool {
        self.category == ErrorCategory::InvalidState
    }
}

impl ToErrorCategory for Error {
    fn to_category(&self) -> ErrorCategory {
        self.category
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}][E{:04X}] {}", self.category, self.code, self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
