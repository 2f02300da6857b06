#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![doc = "no_std synchronization primitives (spin mutex, reentrant spin lock) for rtlog."]
#![warn(clippy::missing_panics_doc)]

pub mod mutex;
pub mod prelude;
pub mod reentrant;

// Include verification module conditionally, but exclude during coverage builds
#[cfg(all(not(coverage), any(doc, kani)))]
pub mod verify;

pub use mutex::*;
pub use reentrant::*;
