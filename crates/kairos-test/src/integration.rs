//! End-to-end scenarios for the resolution pipeline
//!
//! These walk the shim the way an embedding application would: through the
//! facade and the cached resolution accessor, never through crate
//! internals. Every scenario uses an isolated ambient slot except the one
//! that exercises the shared process slot.

use std::sync::Arc;

use kairos_resolve::{AmbientSlot, Resolver};

/// A resolver bound to a fresh private ambient slot
///
/// The pair most scenarios start from: no override, nothing ambient,
/// nothing shared with other tests.
pub fn isolated_shim() -> (Arc<AmbientSlot>, Resolver) {
    let ambient = Arc::new(AmbientSlot::new());
    let resolver = Resolver::with_ambient(ambient.clone());
    (ambient, resolver)
}

#[cfg(test)]
mod tests {
    use kairos_core::{CapabilityEngine, EntityKind, KairosError};
    use serial_test::serial;

    use crate::env::AmbientGuard;
    use crate::mock::MockEngine;

    use super::*;

    fn full_engine() -> Arc<dyn CapabilityEngine> {
        Arc::new(MockEngine::full())
    }

    #[test]
    fn test_bare_environment_fails_with_remediation() {
        let (_ambient, resolver) = isolated_shim();
        assert!(!resolver.is_available());

        for kind in EntityKind::ALL {
            let err = resolver
                .facade()
                .slot(kind)
                .construct()
                .expect_err("stub construction must fail");
            assert!(err.to_string().contains("date/time engine required"));
        }
    }

    #[test]
    fn test_bare_environment_guards_property_access() {
        let (_ambient, resolver) = isolated_shim();
        let resolved = resolver.resolve();

        let err = resolved
            .plain_date_time()
            .expect_err("guarded fallback must fail");
        assert_eq!(
            err,
            KairosError::GuardedProperty {
                property: "PlainDateTime".to_string()
            }
        );
        assert!(err.to_string().contains("accessed property: PlainDateTime"));
    }

    #[test]
    fn test_ambient_engine_backs_every_facade_slot() {
        let (ambient, resolver) = isolated_shim();
        let engine = full_engine();
        let _guard = AmbientGuard::install(ambient, engine.clone());
        resolver.resync_facade();

        assert!(resolver.is_available());
        for kind in EntityKind::ALL {
            let slot = resolver.facade().slot(kind);
            let expected = engine.constructor(kind).unwrap();
            assert!(Arc::ptr_eq(&slot, &expected));
        }
    }

    #[test]
    fn test_round_trip_through_the_facade() {
        let (ambient, resolver) = isolated_shim();
        let _guard = AmbientGuard::install(ambient, full_engine());
        resolver.resync_facade();

        let value = resolver
            .facade()
            .plain_date_time()
            .parse("2025-09-19T10:00")
            .unwrap();
        assert_eq!(value.render().unwrap(), "2025-09-19T10:00");
    }

    #[test]
    fn test_override_set_then_clear_serves_ambient() {
        let (ambient, resolver) = isolated_shim();
        let ambient_engine = full_engine();
        let _guard = AmbientGuard::install(ambient, ambient_engine.clone());
        resolver.set_override(Some(full_engine()));
        resolver.clear_override();

        // Not the stub, not the cleared override: the ambient engine.
        for kind in EntityKind::ALL {
            let slot = resolver.facade().slot(kind);
            let expected = ambient_engine.constructor(kind).unwrap();
            assert!(Arc::ptr_eq(&slot, &expected));
        }
    }

    #[test]
    fn test_cached_resolution_outlives_environment_changes() {
        let (ambient, resolver) = isolated_shim();
        let first = resolver.resolve();
        assert!(first.plain_date().is_err());

        let _guard = AmbientGuard::install(ambient, full_engine());
        resolver.resync_facade();

        // The facade sees the new engine; the cached resolution keeps
        // what it first saw.
        assert!(resolver.facade().plain_date().construct().is_ok());
        let second = resolver.resolve();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(second.plain_date().is_err());
    }

    #[test]
    #[serial]
    fn test_default_resolver_reads_the_process_slot() {
        let engine = full_engine();
        let _guard = AmbientGuard::install(AmbientSlot::process(), engine.clone());

        let resolver = Resolver::new();
        assert!(resolver.is_available());
        let held = resolver.current_engine().unwrap();
        assert!(Arc::ptr_eq(&held, &engine));
    }
}
