//! Ambient slot - the process-wide engine binding
//!
//! The ambient slot models the well-known binding an embedding environment
//! may populate with a date/time engine. The environment owns it; the
//! resolver only reads it, and reads it fresh on every resolution, so an
//! engine installed after startup becomes visible without another
//! `set_override`.

use std::sync::{Arc, OnceLock};

use kairos_core::CapabilityEngine;
use parking_lot::RwLock;

static PROCESS_SLOT: OnceLock<Arc<AmbientSlot>> = OnceLock::new();

/// A slot the embedding environment may populate with an engine
///
/// [`Resolver`](crate::Resolver) binds to the shared process slot by
/// default. Embedders and tests that need isolation construct a private
/// slot and pass it through `Resolver::with_ambient`.
#[derive(Default)]
pub struct AmbientSlot {
    engine: RwLock<Option<Arc<dyn CapabilityEngine>>>,
}

impl AmbientSlot {
    /// Create a private, empty slot
    pub fn new() -> Self {
        AmbientSlot {
            engine: RwLock::new(None),
        }
    }

    /// The shared process-wide slot, created on first access
    pub fn process() -> Arc<AmbientSlot> {
        PROCESS_SLOT
            .get_or_init(|| Arc::new(AmbientSlot::new()))
            .clone()
    }

    /// Install an engine into the slot
    pub fn install(&self, engine: Arc<dyn CapabilityEngine>) {
        *self.engine.write() = Some(engine);
    }

    /// Remove the installed engine, if any
    pub fn uninstall(&self) {
        *self.engine.write() = None;
    }

    /// Presence check; never clones or touches the engine
    pub fn is_present(&self) -> bool {
        self.engine.read().is_some()
    }

    /// Currently installed engine
    pub fn get(&self) -> Option<Arc<dyn CapabilityEngine>> {
        self.engine.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use kairos_core::{CapabilityEngine, EntityConstructor};

    use super::*;

    /// Engine that answers none of the nine factories
    struct EmptyEngine;

    impl CapabilityEngine for EmptyEngine {
        fn instant(&self) -> Option<Arc<dyn EntityConstructor>> {
            None
        }
        fn zoned_date_time(&self) -> Option<Arc<dyn EntityConstructor>> {
            None
        }
        fn plain_date(&self) -> Option<Arc<dyn EntityConstructor>> {
            None
        }
        fn plain_time(&self) -> Option<Arc<dyn EntityConstructor>> {
            None
        }
        fn plain_date_time(&self) -> Option<Arc<dyn EntityConstructor>> {
            None
        }
        fn plain_year_month(&self) -> Option<Arc<dyn EntityConstructor>> {
            None
        }
        fn plain_month_day(&self) -> Option<Arc<dyn EntityConstructor>> {
            None
        }
        fn duration(&self) -> Option<Arc<dyn EntityConstructor>> {
            None
        }
        fn time_zone(&self) -> Option<Arc<dyn EntityConstructor>> {
            None
        }
    }

    #[test]
    fn test_slot_starts_empty() {
        let slot = AmbientSlot::new();
        assert!(!slot.is_present());
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_install_and_uninstall() {
        let slot = AmbientSlot::new();
        slot.install(Arc::new(EmptyEngine));
        assert!(slot.is_present());
        assert!(slot.get().is_some());

        slot.uninstall();
        assert!(!slot.is_present());
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_process_slot_is_shared() {
        let a = AmbientSlot::process();
        let b = AmbientSlot::process();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
