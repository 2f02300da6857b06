// RTLOG - rtlog-error
// Module: Error Codes
// SW-REQ-ID: REQ_LOG_ERR_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for rtlog
//!
//! The thousands digit of a code is the discriminant of its
//! [`ErrorCategory`](crate::ErrorCategory).

// Capacity error codes (1000-1099)
/// The tag registry has no room for another tag
pub const TAG_REGISTRY_FULL: u16 = 1000;
/// A fixed-capacity buffer is too small for its use
pub const BUFFER_EXHAUSTED: u16 = 1001;
/// A fixed-capacity buffer was declared with zero bytes
pub const ZERO_CAPACITY: u16 = 1002;

// Configuration error codes (2000-2099)
/// A configuration value is out of range or inconsistent
pub const INVALID_CONFIGURATION: u16 = 2000;
/// A tag name is empty or otherwise unusable
pub const INVALID_TAG: u16 = 2001;

// Parse error codes (3000-3099)
/// A level name could not be parsed
pub const UNKNOWN_LEVEL: u16 = 3000;

// State error codes (4000-4099)
/// The operation is not allowed in the current state
pub const INVALID_STATE: u16 = 4000;
