//! Stub set - inert placeholders for every entity kind
//!
//! When no engine is resolved the facade serves stubs. A stub fails with
//! [`KairosError::EngineUnavailable`] on construction, rendering, or any
//! zone operation. `parse` is the one exception: it hands back a poisoned
//! handle, so code that builds-and-holds a value never fails early while
//! any probe of the held value still does.

use std::sync::{Arc, OnceLock};

use kairos_core::{
    EntityConstructor, EntityHandle, EntityKind, KairosError, KairosResult, ZoneOps,
};

static STUBS: OnceLock<[Arc<dyn EntityConstructor>; 9]> = OnceLock::new();

/// The shared stub constructor for the given kind
///
/// Stubs are stateless and permanent; the same instance backs every facade
/// slot that falls through to this kind, which keeps resync referentially
/// idempotent.
pub fn stub(kind: EntityKind) -> Arc<dyn EntityConstructor> {
    let all = STUBS.get_or_init(|| {
        EntityKind::ALL.map(|k| Arc::new(StubConstructor::new(k)) as Arc<dyn EntityConstructor>)
    });
    all[kind.index()].clone()
}

/// Stub factory for one entity kind
pub struct StubConstructor {
    kind: EntityKind,
}

impl StubConstructor {
    pub fn new(kind: EntityKind) -> Self {
        StubConstructor { kind }
    }
}

impl EntityConstructor for StubConstructor {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn construct(&self) -> KairosResult<Box<dyn EntityHandle>> {
        Err(KairosError::EngineUnavailable)
    }

    // Deferred failure: the handle is poisoned, not the parse call.
    fn parse(&self, _text: &str) -> KairosResult<Box<dyn EntityHandle>> {
        Ok(Box::new(StubHandle { kind: self.kind }))
    }
}

/// Poisoned value produced by a stub factory's `parse`
pub struct StubHandle {
    kind: EntityKind,
}

impl EntityHandle for StubHandle {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn render(&self) -> KairosResult<String> {
        Err(KairosError::EngineUnavailable)
    }

    fn as_zone(&self) -> Option<&dyn ZoneOps> {
        if self.kind == EntityKind::TimeZone {
            Some(self)
        } else {
            None
        }
    }
}

impl ZoneOps for StubHandle {
    fn offset_nanoseconds_for(&self, _instant: &dyn EntityHandle) -> KairosResult<i64> {
        Err(KairosError::EngineUnavailable)
    }
}
