//! Entity vocabulary for the Kairos shim
//!
//! The shim exposes nine date/time entity slots. Each slot holds an
//! [`EntityConstructor`]; constructors produce [`EntityHandle`] values.
//! Kairos never looks inside an engine beyond these traits.

use std::fmt;

use crate::KairosResult;

/// The nine date/time entity slots known to the shim
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Instant,
    ZonedDateTime,
    PlainDate,
    PlainTime,
    PlainDateTime,
    PlainYearMonth,
    PlainMonthDay,
    Duration,
    TimeZone,
}

impl EntityKind {
    /// All entity kinds, in slot order
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Instant,
        EntityKind::ZonedDateTime,
        EntityKind::PlainDate,
        EntityKind::PlainTime,
        EntityKind::PlainDateTime,
        EntityKind::PlainYearMonth,
        EntityKind::PlainMonthDay,
        EntityKind::Duration,
        EntityKind::TimeZone,
    ];

    /// Position of this kind in slot order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Well-known slot name, as engines expose it
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Instant => "Instant",
            EntityKind::ZonedDateTime => "ZonedDateTime",
            EntityKind::PlainDate => "PlainDate",
            EntityKind::PlainTime => "PlainTime",
            EntityKind::PlainDateTime => "PlainDateTime",
            EntityKind::PlainYearMonth => "PlainYearMonth",
            EntityKind::PlainMonthDay => "PlainMonthDay",
            EntityKind::Duration => "Duration",
            EntityKind::TimeZone => "TimeZone",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Factory for one entity kind - what a facade slot holds
pub trait EntityConstructor: Send + Sync {
    /// Entity kind this constructor produces
    fn kind(&self) -> EntityKind;

    /// Construct a fresh value of this entity
    fn construct(&self) -> KairosResult<Box<dyn EntityHandle>>;

    /// Build a value from its canonical text form
    ///
    /// Stub constructors succeed here and hand back a poisoned handle;
    /// the failure surfaces when the handle is first used.
    fn parse(&self, text: &str) -> KairosResult<Box<dyn EntityHandle>>;
}

/// A constructed date/time value
pub trait EntityHandle: Send + Sync {
    /// Entity kind of this value
    fn kind(&self) -> EntityKind;

    /// Canonical text form of the value
    fn render(&self) -> KairosResult<String>;

    /// Zone capability of this value, if it carries one
    fn as_zone(&self) -> Option<&dyn ZoneOps> {
        None
    }
}

/// Operations specific to time zone entities
pub trait ZoneOps: Send + Sync {
    /// UTC offset at the given instant, in nanoseconds
    fn offset_nanoseconds_for(&self, instant: &dyn EntityHandle) -> KairosResult<i64>;
}
