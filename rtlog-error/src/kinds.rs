// RTLOG - rtlog-error
// Module: Error Kinds
// SW-REQ-ID: REQ_LOG_ERR_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Constructors for the error kinds rtlog reports.

use crate::{codes, Error, ErrorCategory};

/// Create a capacity error for a buffer too small for its use
#[must_use]
pub const fn buffer_exhausted_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Capacity, codes::BUFFER_EXHAUSTED, message)
}

/// Create a configuration error
#[must_use]
pub const fn invalid_configuration_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Configuration, codes::INVALID_CONFIGURATION, message)
}

/// Create a parse error for an unknown level name
#[must_use]
pub const fn unknown_level_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Parse, codes::UNKNOWN_LEVEL, message)
}

/// Create an error for an unusable tag name
#[must_use]
pub const fn invalid_tag_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Configuration, codes::INVALID_TAG, message)
}

/// Create an invalid state error
#[must_use]
pub const fn invalid_state_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::InvalidState, codes::INVALID_STATE, message)
}
