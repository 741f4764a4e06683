//! Resolver - decides the active engine and keeps the facade in sync
//!
//! Resolution order: explicit override, then the ambient slot, then stubs.
//! `current_engine` is evaluated fresh on every call; `resolve` memoizes
//! its answer for the life of the resolver. The two deliberately diverge
//! once the environment changes after first use.

use std::sync::{Arc, OnceLock};

use kairos_core::CapabilityEngine;
use parking_lot::RwLock;
use tracing::debug;

use crate::ambient::AmbientSlot;
use crate::facade::{Facade, Snapshot, Tier};
use crate::resolved::ResolvedEngine;

/// Decides the active engine and propagates the decision to the facade
pub struct Resolver {
    override_slot: RwLock<Option<Arc<dyn CapabilityEngine>>>,
    ambient: Arc<AmbientSlot>,
    facade: Facade,
    resolved: OnceLock<Arc<ResolvedEngine>>,
}

impl Resolver {
    /// Resolver bound to the process-wide ambient slot
    pub fn new() -> Self {
        Resolver::with_ambient(AmbientSlot::process())
    }

    /// Resolver bound to a private ambient slot
    ///
    /// Embedders that want isolation (one shim per test, per plugin host)
    /// construct their own slot instead of sharing the process one.
    pub fn with_ambient(ambient: Arc<AmbientSlot>) -> Self {
        let resolver = Resolver {
            override_slot: RwLock::new(None),
            ambient,
            facade: Facade::new(Snapshot::build(Tier::Unavailable, None)),
            resolved: OnceLock::new(),
        };
        resolver.resync_facade();
        resolver
    }

    /// Install or clear the engine override, then resync every facade slot
    pub fn set_override(&self, engine: Option<Arc<dyn CapabilityEngine>>) {
        let installed = engine.is_some();
        *self.override_slot.write() = engine;
        debug!(installed, "engine override updated");
        self.resync_facade();
    }

    /// Clear the engine override; same as `set_override(None)`
    pub fn clear_override(&self) {
        self.set_override(None);
    }

    /// The engine currently in effect: override first, then ambient
    ///
    /// Evaluated fresh on every call, so an engine installed on the
    /// ambient slot after startup becomes visible without another
    /// `set_override`.
    pub fn current_engine(&self) -> Option<Arc<dyn CapabilityEngine>> {
        self.override_slot
            .read()
            .clone()
            .or_else(|| self.ambient.get())
    }

    /// Whether any engine is installed
    ///
    /// Presence only: short-circuits on the override and never clones or
    /// inspects an engine.
    pub fn is_available(&self) -> bool {
        self.override_slot.read().is_some() || self.ambient.is_present()
    }

    /// Rewrite every facade slot from the current resolution
    ///
    /// Publishes one snapshot, so readers never observe a mix of tiers.
    /// Idempotent while the environment is unchanged.
    pub fn resync_facade(&self) {
        let (tier, engine) = if let Some(engine) = self.override_slot.read().clone() {
            (Tier::Override, Some(engine))
        } else if let Some(engine) = self.ambient.get() {
            (Tier::Ambient, Some(engine))
        } else {
            (Tier::Unavailable, None)
        };
        debug!(?tier, "facade resynchronized");
        self.facade.publish(Snapshot::build(tier, engine.as_ref()));
    }

    /// The always-present namespace facade
    pub fn facade(&self) -> &Facade {
        &self.facade
    }

    /// Resolve once and remember the answer for the resolver's lifetime
    ///
    /// The first call probes the environment; later calls return the same
    /// object even if availability has changed since. Callers that need
    /// the live view read the facade instead.
    pub fn resolve(&self) -> Arc<ResolvedEngine> {
        self.resolved
            .get_or_init(|| Arc::new(ResolvedEngine::from_resolution(self.current_engine())))
            .clone()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::new()
    }
}
