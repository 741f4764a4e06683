//! Cached resolution - the lazy accessor's result object
//!
//! `Resolver::resolve` hands out a [`ResolvedEngine`]: the live engine when
//! one was present at first resolution, otherwise a guarded fallback whose
//! every accessor fails naming the property that was touched. Guarded
//! errors are distinct from the stub set's: they flag attribute access on
//! an unresolved engine, not a domain operation.

use std::sync::Arc;

use kairos_core::{CapabilityEngine, EntityConstructor, EntityKind, KairosError, KairosResult};

use crate::stubs::stub;

/// Outcome of a one-time engine resolution
pub struct ResolvedEngine {
    inner: Resolution,
}

enum Resolution {
    Engine(Arc<dyn CapabilityEngine>),
    Guarded,
}

impl ResolvedEngine {
    pub(crate) fn from_resolution(engine: Option<Arc<dyn CapabilityEngine>>) -> Self {
        let inner = match engine {
            Some(engine) => Resolution::Engine(engine),
            None => Resolution::Guarded,
        };
        ResolvedEngine { inner }
    }

    /// Whether the resolution found a live engine
    pub fn is_engine(&self) -> bool {
        matches!(self.inner, Resolution::Engine(_))
    }

    /// The resolved engine itself
    pub fn engine(&self) -> KairosResult<Arc<dyn CapabilityEngine>> {
        match &self.inner {
            Resolution::Engine(engine) => Ok(engine.clone()),
            Resolution::Guarded => Err(guarded("engine")),
        }
    }

    /// Constructor for the given entity kind
    ///
    /// On a live engine a missing entity falls back to the stub for that
    /// slot, the same per-slot rule the facade applies.
    pub fn get(&self, kind: EntityKind) -> KairosResult<Arc<dyn EntityConstructor>> {
        match &self.inner {
            Resolution::Engine(engine) => {
                Ok(engine.constructor(kind).unwrap_or_else(|| stub(kind)))
            }
            Resolution::Guarded => Err(guarded(kind.name())),
        }
    }

    /// `Instant` constructor
    pub fn instant(&self) -> KairosResult<Arc<dyn EntityConstructor>> {
        self.get(EntityKind::Instant)
    }

    /// `ZonedDateTime` constructor
    pub fn zoned_date_time(&self) -> KairosResult<Arc<dyn EntityConstructor>> {
        self.get(EntityKind::ZonedDateTime)
    }

    /// `PlainDate` constructor
    pub fn plain_date(&self) -> KairosResult<Arc<dyn EntityConstructor>> {
        self.get(EntityKind::PlainDate)
    }

    /// `PlainTime` constructor
    pub fn plain_time(&self) -> KairosResult<Arc<dyn EntityConstructor>> {
        self.get(EntityKind::PlainTime)
    }

    /// `PlainDateTime` constructor
    pub fn plain_date_time(&self) -> KairosResult<Arc<dyn EntityConstructor>> {
        self.get(EntityKind::PlainDateTime)
    }

    /// `PlainYearMonth` constructor
    pub fn plain_year_month(&self) -> KairosResult<Arc<dyn EntityConstructor>> {
        self.get(EntityKind::PlainYearMonth)
    }

    /// `PlainMonthDay` constructor
    pub fn plain_month_day(&self) -> KairosResult<Arc<dyn EntityConstructor>> {
        self.get(EntityKind::PlainMonthDay)
    }

    /// `Duration` constructor
    pub fn duration(&self) -> KairosResult<Arc<dyn EntityConstructor>> {
        self.get(EntityKind::Duration)
    }

    /// `TimeZone` constructor
    pub fn time_zone(&self) -> KairosResult<Arc<dyn EntityConstructor>> {
        self.get(EntityKind::TimeZone)
    }
}

fn guarded(property: &str) -> KairosError {
    KairosError::GuardedProperty {
        property: property.to_string(),
    }
}
