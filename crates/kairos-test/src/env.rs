//! Scoped ambient-slot helpers
//!
//! The embedding environment owns the ambient binding; tests that play the
//! environment install an engine and must restore the slot afterwards,
//! panic or not. [`AmbientGuard`] does the restore on drop.

use std::sync::Arc;

use kairos_core::CapabilityEngine;
use kairos_resolve::AmbientSlot;

/// Installs an engine into a slot and uninstalls it on drop
pub struct AmbientGuard {
    slot: Arc<AmbientSlot>,
}

impl AmbientGuard {
    /// Install `engine` into `slot` for the guard's lifetime
    pub fn install(slot: Arc<AmbientSlot>, engine: Arc<dyn CapabilityEngine>) -> Self {
        slot.install(engine);
        AmbientGuard { slot }
    }
}

impl Drop for AmbientGuard {
    fn drop(&mut self) {
        self.slot.uninstall();
    }
}

#[cfg(test)]
mod tests {
    use crate::MockEngine;

    use super::*;

    #[test]
    fn test_guard_uninstalls_on_drop() {
        let slot = Arc::new(AmbientSlot::new());
        {
            let _guard = AmbientGuard::install(slot.clone(), Arc::new(MockEngine::full()));
            assert!(slot.is_present());
        }
        assert!(!slot.is_present());
    }
}
