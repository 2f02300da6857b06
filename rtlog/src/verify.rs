//! Kani proofs for the reentrancy guard.
//!
//! These proofs only run with Kani and are isolated from normal compilation
//! and testing.

#[cfg(any(doc, kani))]
pub mod kani_verification {
    use crate::guard::{ReentrancyGuard, Slot};

    /// Verify that nesting takes the primary slot, then the secondary, then
    /// drops
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(4))]
    pub fn verify_slot_order() {
        let guard = ReentrancyGuard::new();
        let first = guard.enter();
        assert!(matches!(first, Slot::Primary(_)));
        let second = guard.enter();
        assert!(matches!(second, Slot::Secondary(_)));
        assert!(matches!(guard.enter(), Slot::Dropped));
        drop(second);
        drop(first);
    }

    /// Verify that every slot releases its flag whatever order the nested
    /// calls finish in
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(4))]
    pub fn verify_slot_release() {
        let guard = ReentrancyGuard::new();
        #[cfg(kani)]
        let depth: usize = kani::any_where(|n: &usize| *n <= 3);
        #[cfg(not(kani))]
        let depth: usize = 3;

        {
            let mut held = [None, None, None];
            for slot in held.iter_mut().take(depth) {
                *slot = Some(guard.enter());
            }
            assert_eq!(guard.is_primary_busy(), depth >= 1);
            assert_eq!(guard.is_secondary_busy(), depth >= 2);
        }
        assert!(!guard.is_primary_busy());
        assert!(!guard.is_secondary_busy());
    }
}
