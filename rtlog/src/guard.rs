// RTLOG - rtlog
// Module: Reentrancy Guard
// SW-REQ-ID: REQ_LOG_BUF_002
//
// Copyright (c) 2025 The RTLOG Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Two-level reentrancy guard deciding which buffer a log call may use.
//!
//! The first call in a context takes the primary slot. A call that arrives
//! while the primary slot is held (the sink or a `Display` impl logged) takes
//! the secondary slot. A call that arrives while both are held is dropped.
//!
//! The flags are only touched by the context holding the platform lock, so
//! relaxed atomics are enough; they exist to make the guard `Sync`.

use core::sync::atomic::{AtomicBool, Ordering};

/// Which buffer a slot grants access to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// The primary buffer
    Primary,
    /// The secondary buffer, for nested calls
    Secondary,
}

/// Busy flags for the primary and secondary buffers
#[derive(Debug)]
pub struct ReentrancyGuard {
    primary:   AtomicBool,
    secondary: AtomicBool,
}

/// Outcome of [`ReentrancyGuard::enter`]
#[derive(Debug)]
pub enum Slot<'a> {
    /// Outermost call: write to the primary buffer
    Primary(SlotGuard<'a>),
    /// Nested call: write to the secondary buffer
    Secondary(SlotGuard<'a>),
    /// Nested two levels deep: the call is dropped
    Dropped,
}

/// Holds one busy flag; clears it on drop, including during unwinding
#[derive(Debug)]
#[clippy::has_significant_drop]
pub struct SlotGuard<'a> {
    owner: &'a ReentrancyGuard,
    kind:  BufferKind,
}

impl ReentrancyGuard {
    /// Both slots free
    #[must_use]
    pub const fn new() -> Self {
        Self { primary: AtomicBool::new(false), secondary: AtomicBool::new(false) }
    }

    /// Claim the slot a new call is entitled to
    pub fn enter(&self) -> Slot<'_> {
        if let Some(primary) = self.try_primary() {
            return Slot::Primary(primary);
        }
        if self.secondary.swap(true, Ordering::Relaxed) {
            return Slot::Dropped;
        }
        Slot::Secondary(SlotGuard { owner: self, kind: BufferKind::Secondary })
    }

    /// Claim the primary slot if it is free
    pub fn try_primary(&self) -> Option<SlotGuard<'_>> {
        if self.primary.swap(true, Ordering::Relaxed) {
            None
        } else {
            Some(SlotGuard { owner: self, kind: BufferKind::Primary })
        }
    }

    /// True while a primary slot is held
    #[must_use]
    pub fn is_primary_busy(&self) -> bool {
        self.primary.load(Ordering::Relaxed)
    }

    /// True while a secondary slot is held
    #[must_use]
    pub fn is_secondary_busy(&self) -> bool {
        self.secondary.load(Ordering::Relaxed)
    }

    fn flag(&self, kind: BufferKind) -> &AtomicBool {
        match kind {
            BufferKind::Primary => &self.primary,
            BufferKind::Secondary => &self.secondary,
        }
    }
}

impl Default for ReentrancyGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SlotGuard<'a> {
    /// Buffer this slot grants access to
    #[must_use]
    pub fn kind(&self) -> BufferKind {
        self.kind
    }

    /// From a primary slot, claim the secondary slot as well. Returns `None`
    /// for a secondary slot or if the secondary is already busy, which keeps
    /// the secondary flag from ever being set without the primary one.
    pub fn claim_secondary(&self) -> Option<SlotGuard<'a>> {
        if self.kind != BufferKind::Primary {
            return None;
        }
        if self.owner.secondary.swap(true, Ordering::Relaxed) {
            return None;
        }
        Some(SlotGuard { owner: self.owner, kind: BufferKind::Secondary })
    }
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        self.owner.flag(self.kind).store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nesting_levels() {
        let guard = ReentrancyGuard::new();
        let first = guard.enter();
        assert!(matches!(first, Slot::Primary(_)));
        let second = guard.enter();
        assert!(matches!(second, Slot::Secondary(_)));
        assert!(matches!(guard.enter(), Slot::Dropped));
        assert!(matches!(guard.enter(), Slot::Dropped));

        drop(second);
        assert!(!guard.is_secondary_busy());
        assert!(matches!(guard.enter(), Slot::Secondary(_)));

        drop(first);
        assert!(!guard.is_primary_busy());
        assert!(matches!(guard.enter(), Slot::Primary(_)));
    }

    #[test]
    fn test_claim_secondary_from_primary_only() {
        let guard = ReentrancyGuard::new();
        let primary = guard.try_primary().unwrap();
        assert!(guard.try_primary().is_none());

        let secondary = primary.claim_secondary().unwrap();
        assert_eq!(secondary.kind(), BufferKind::Secondary);
        assert!(primary.claim_secondary().is_none());
        assert!(secondary.claim_secondary().is_none());
        assert!(matches!(guard.enter(), Slot::Dropped));

        drop(secondary);
        drop(primary);
        assert!(!guard.is_primary_busy());
        assert!(!guard.is_secondary_busy());
    }

    #[test]
    fn test_flags_cleared_on_unwind() {
        let guard = ReentrancyGuard::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _slot = guard.enter();
            panic!("sink failed");
        }));
        assert!(result.is_err());
        assert!(!guard.is_primary_busy());
    }
}
