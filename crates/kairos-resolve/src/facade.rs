//! Namespace facade - nine always-present constructor slots
//!
//! Consumers read slots without knowing which tier supplied them. Reads
//! never fail; only using a stub's own methods does. The whole slot set is
//! republished as one snapshot on every resync, so readers can never
//! observe a mix of tiers. Slot values must not be cached across a
//! `set_override`; re-read the facade instead.

use std::sync::Arc;

use kairos_core::{CapabilityEngine, EntityConstructor, EntityKind};
use parking_lot::RwLock;

use crate::stubs::stub;

/// Resolution tier currently feeding the facade
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    /// Explicitly injected engine
    Override,
    /// Engine registered on the ambient slot
    Ambient,
    /// No engine anywhere; every slot serves a stub
    Unavailable,
}

/// Where one slot's constructor came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotBinding {
    /// Bound to the override engine
    Override,
    /// Bound to the ambient engine
    Ambient,
    /// Engine missing this entity, or no engine at all
    Stub,
}

struct Slot {
    ctor: Arc<dyn EntityConstructor>,
    binding: SlotBinding,
}

/// One consistent view of all nine slots, swapped in atomically
pub(crate) struct Snapshot {
    tier: Tier,
    slots: [Slot; 9],
}

impl Snapshot {
    pub(crate) fn build(tier: Tier, engine: Option<&Arc<dyn CapabilityEngine>>) -> Snapshot {
        let bound = match tier {
            Tier::Override => SlotBinding::Override,
            Tier::Ambient => SlotBinding::Ambient,
            Tier::Unavailable => SlotBinding::Stub,
        };
        let slots = EntityKind::ALL.map(|kind| {
            match engine.and_then(|engine| engine.constructor(kind)) {
                Some(ctor) => Slot {
                    ctor,
                    binding: bound,
                },
                None => Slot {
                    ctor: stub(kind),
                    binding: SlotBinding::Stub,
                },
            }
        });
        Snapshot { tier, slots }
    }
}

/// The always-present namespace: one constructor slot per entity kind
///
/// Mutated only by the resolver's resync; everyone else reads.
pub struct Facade {
    snapshot: RwLock<Snapshot>,
}

impl Facade {
    pub(crate) fn new(snapshot: Snapshot) -> Self {
        Facade {
            snapshot: RwLock::new(snapshot),
        }
    }

    pub(crate) fn publish(&self, snapshot: Snapshot) {
        *self.snapshot.write() = snapshot;
    }

    /// Constructor currently bound for the given entity kind
    pub fn slot(&self, kind: EntityKind) -> Arc<dyn EntityConstructor> {
        self.snapshot.read().slots[kind.index()].ctor.clone()
    }

    /// Tier the facade currently serves from
    pub fn tier(&self) -> Tier {
        self.snapshot.read().tier
    }

    /// Source of one slot's constructor
    pub fn binding(&self, kind: EntityKind) -> SlotBinding {
        self.snapshot.read().slots[kind.index()].binding
    }

    /// `Instant` slot
    pub fn instant(&self) -> Arc<dyn EntityConstructor> {
        self.slot(EntityKind::Instant)
    }

    /// `ZonedDateTime` slot
    pub fn zoned_date_time(&self) -> Arc<dyn EntityConstructor> {
        self.slot(EntityKind::ZonedDateTime)
    }

    /// `PlainDate` slot
    pub fn plain_date(&self) -> Arc<dyn EntityConstructor> {
        self.slot(EntityKind::PlainDate)
    }

    /// `PlainTime` slot
    pub fn plain_time(&self) -> Arc<dyn EntityConstructor> {
        self.slot(EntityKind::PlainTime)
    }

    /// `PlainDateTime` slot
    pub fn plain_date_time(&self) -> Arc<dyn EntityConstructor> {
        self.slot(EntityKind::PlainDateTime)
    }

    /// `PlainYearMonth` slot
    pub fn plain_year_month(&self) -> Arc<dyn EntityConstructor> {
        self.slot(EntityKind::PlainYearMonth)
    }

    /// `PlainMonthDay` slot
    pub fn plain_month_day(&self) -> Arc<dyn EntityConstructor> {
        self.slot(EntityKind::PlainMonthDay)
    }

    /// `Duration` slot
    pub fn duration(&self) -> Arc<dyn EntityConstructor> {
        self.slot(EntityKind::Duration)
    }

    /// `TimeZone` slot
    pub fn time_zone(&self) -> Arc<dyn EntityConstructor> {
        self.slot(EntityKind::TimeZone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_serves_stubs_everywhere() {
        let facade = Facade::new(Snapshot::build(Tier::Unavailable, None));
        assert_eq!(facade.tier(), Tier::Unavailable);
        for kind in EntityKind::ALL {
            assert_eq!(facade.binding(kind), SlotBinding::Stub);
            assert_eq!(facade.slot(kind).kind(), kind);
        }
    }

    #[test]
    fn test_named_accessors_match_keyed_lookup() {
        let facade = Facade::new(Snapshot::build(Tier::Unavailable, None));
        assert!(Arc::ptr_eq(
            &facade.plain_date_time(),
            &facade.slot(EntityKind::PlainDateTime)
        ));
        assert!(Arc::ptr_eq(
            &facade.time_zone(),
            &facade.slot(EntityKind::TimeZone)
        ));
    }
}
