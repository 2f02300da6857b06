// RTLOG - rtlog-error
// Module: Error Handling
// SW-REQ-ID: REQ_LOG_ERR_001
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! rtlog error handling
//!
//! The logging write path never reports errors: drops and truncation are
//! silent. The few operations that can be refused (registering a tag in a
//! full registry, validating a build-time configuration, parsing a level
//! name) report a small, copyable [`Error`] instead.
//!
//! # Error Categories
//!
//! ## Capacity Errors (1000-1099)
//! - Tag registry full
//! - Buffers too small or of zero size
//!
//! ## Configuration Errors (2000-2099)
//! - Invalid configuration values
//! - Unusable tag names
//!
//! ## Parse Errors (3000-3099)
//! - Unknown level names
//!
//! ## State Errors (4000-4099)
//! - Operations refused in the current state, such as installing a second
//!   global logger
//!
//! # Usage
//!
//! ```
//! use rtlog_error::{codes, kinds, Error, ErrorCategory};
//!
//! let error = Error::new(ErrorCategory::Capacity, codes::TAG_REGISTRY_FULL, "Tag registry full");
//! assert!(error.is_capacity_error());
//!
//! let parse = kinds::unknown_level_error("Unknown log level name");
//! assert_eq!(parse.code, codes::UNKNOWN_LEVEL);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)] // Rule 2
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for rtlog
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind constructors
pub mod kinds;

pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for rtlog operations.
///
/// The error type is a plain `Copy` value, so this alias works the same in
/// `no_std` builds.
pub type Result<T> = core::result::Result<T, Error>;

/// Error conversion trait for converting to specific error categories
pub trait ToErrorCategory {
    /// Convert the error to a specific category
    fn to_category(&self) -> ErrorCategory;
}
