//! Mock capability engines
//!
//! Scripted engines for exercising the shim without a real date/time
//! implementation. [`MockEngine::full`] carries all nine entities;
//! [`MockEngine::with_entities`] builds a partial engine for
//! malformed-provider cases. Mock constructors round-trip text exactly:
//! `parse(s)` renders back `s` unchanged.

use std::sync::Arc;

use kairos_core::{
    CapabilityEngine, EntityConstructor, EntityHandle, EntityKind, KairosResult, ZoneOps,
};

/// UTC offset every mock time zone reports, in nanoseconds (one hour)
pub const MOCK_ZONE_OFFSET_NS: i64 = 3_600_000_000_000;

/// Scripted engine carrying a chosen subset of the nine entities
///
/// Factories are built once at construction and handed out as clones of
/// the same `Arc`, so facade slots bound to this engine stay referentially
/// stable across resyncs.
pub struct MockEngine {
    slots: [Option<Arc<dyn EntityConstructor>>; 9],
}

impl MockEngine {
    /// Engine exposing all nine entities
    pub fn full() -> Self {
        MockEngine::with_entities(&EntityKind::ALL)
    }

    /// Engine exposing only the given entities
    pub fn with_entities(kinds: &[EntityKind]) -> Self {
        let mut slots: [Option<Arc<dyn EntityConstructor>>; 9] = Default::default();
        for &kind in kinds {
            slots[kind.index()] = Some(Arc::new(MockConstructor::new(kind)) as Arc<dyn EntityConstructor>);
        }
        MockEngine { slots }
    }

    fn slot(&self, kind: EntityKind) -> Option<Arc<dyn EntityConstructor>> {
        self.slots[kind.index()].clone()
    }
}

impl CapabilityEngine for MockEngine {
    fn instant(&self) -> Option<Arc<dyn EntityConstructor>> {
        self.slot(EntityKind::Instant)
    }

    fn zoned_date_time(&self) -> Option<Arc<dyn EntityConstructor>> {
        self.slot(EntityKind::ZonedDateTime)
    }

    fn plain_date(&self) -> Option<Arc<dyn EntityConstructor>> {
        self.slot(EntityKind::PlainDate)
    }

    fn plain_time(&self) -> Option<Arc<dyn EntityConstructor>> {
        self.slot(EntityKind::PlainTime)
    }

    fn plain_date_time(&self) -> Option<Arc<dyn EntityConstructor>> {
        self.slot(EntityKind::PlainDateTime)
    }

    fn plain_year_month(&self) -> Option<Arc<dyn EntityConstructor>> {
        self.slot(EntityKind::PlainYearMonth)
    }

    fn plain_month_day(&self) -> Option<Arc<dyn EntityConstructor>> {
        self.slot(EntityKind::PlainMonthDay)
    }

    fn duration(&self) -> Option<Arc<dyn EntityConstructor>> {
        self.slot(EntityKind::Duration)
    }

    fn time_zone(&self) -> Option<Arc<dyn EntityConstructor>> {
        self.slot(EntityKind::TimeZone)
    }
}

/// Mock factory: values render to the exact text they were built from
pub struct MockConstructor {
    kind: EntityKind,
}

impl MockConstructor {
    pub fn new(kind: EntityKind) -> Self {
        MockConstructor { kind }
    }
}

impl EntityConstructor for MockConstructor {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn construct(&self) -> KairosResult<Box<dyn EntityHandle>> {
        Ok(Box::new(MockHandle {
            kind: self.kind,
            text: format!("{}:default", self.kind),
        }))
    }

    fn parse(&self, text: &str) -> KairosResult<Box<dyn EntityHandle>> {
        Ok(Box::new(MockHandle {
            kind: self.kind,
            text: text.to_string(),
        }))
    }
}

/// Mock value; renders the text it was parsed from
pub struct MockHandle {
    kind: EntityKind,
    text: String,
}

impl EntityHandle for MockHandle {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn render(&self) -> KairosResult<String> {
        Ok(self.text.clone())
    }

    fn as_zone(&self) -> Option<&dyn ZoneOps> {
        if self.kind == EntityKind::TimeZone {
            Some(self)
        } else {
            None
        }
    }
}

impl ZoneOps for MockHandle {
    fn offset_nanoseconds_for(&self, _instant: &dyn EntityHandle) -> KairosResult<i64> {
        Ok(MOCK_ZONE_OFFSET_NS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_round_trips_exactly() {
        let engine = MockEngine::full();
        let ctor = engine.plain_date_time().unwrap();
        let value = ctor.parse("2025-09-19T10:00").unwrap();
        assert_eq!(value.render().unwrap(), "2025-09-19T10:00");
    }

    #[test]
    fn test_partial_engine_answers_only_chosen_entities() {
        let engine = MockEngine::with_entities(&[EntityKind::Duration]);
        assert!(engine.duration().is_some());
        assert!(engine.instant().is_none());
        assert!(engine.time_zone().is_none());
    }

    #[test]
    fn test_factories_are_referentially_stable() {
        let engine = MockEngine::full();
        let a = engine.plain_date().unwrap();
        let b = engine.plain_date().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_zone_handle_reports_fixed_offset() {
        let engine = MockEngine::full();
        let zone = engine.time_zone().unwrap().parse("UTC+01:00").unwrap();
        let instant = engine.instant().unwrap().construct().unwrap();
        let ops = zone.as_zone().unwrap();
        assert_eq!(
            ops.offset_nanoseconds_for(instant.as_ref()).unwrap(),
            MOCK_ZONE_OFFSET_NS
        );
    }
}
