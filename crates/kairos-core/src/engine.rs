//! Capability engine interface
//!
//! An engine is an external date/time implementation: native runtime
//! support, a polyfill crate, or a mock. Kairos references engines, never
//! mutates them, and never inspects them beyond the nine named factories.

use std::sync::Arc;

use crate::{EntityConstructor, EntityKind};

/// An external date/time implementation exposing the nine entity factories
///
/// A factory returns `None` when the engine does not carry that entity.
/// The resolver treats a missing entity as "stub for that slot only"; the
/// rest of the engine stays in effect.
pub trait CapabilityEngine: Send + Sync {
    /// `Instant` factory
    fn instant(&self) -> Option<Arc<dyn EntityConstructor>>;

    /// `ZonedDateTime` factory
    fn zoned_date_time(&self) -> Option<Arc<dyn EntityConstructor>>;

    /// `PlainDate` factory
    fn plain_date(&self) -> Option<Arc<dyn EntityConstructor>>;

    /// `PlainTime` factory
    fn plain_time(&self) -> Option<Arc<dyn EntityConstructor>>;

    /// `PlainDateTime` factory
    fn plain_date_time(&self) -> Option<Arc<dyn EntityConstructor>>;

    /// `PlainYearMonth` factory
    fn plain_year_month(&self) -> Option<Arc<dyn EntityConstructor>>;

    /// `PlainMonthDay` factory
    fn plain_month_day(&self) -> Option<Arc<dyn EntityConstructor>>;

    /// `Duration` factory
    fn duration(&self) -> Option<Arc<dyn EntityConstructor>>;

    /// `TimeZone` factory
    fn time_zone(&self) -> Option<Arc<dyn EntityConstructor>>;

    /// Factory lookup by entity kind
    fn constructor(&self, kind: EntityKind) -> Option<Arc<dyn EntityConstructor>> {
        match kind {
            EntityKind::Instant => self.instant(),
            EntityKind::ZonedDateTime => self.zoned_date_time(),
            EntityKind::PlainDate => self.plain_date(),
            EntityKind::PlainTime => self.plain_time(),
            EntityKind::PlainDateTime => self.plain_date_time(),
            EntityKind::PlainYearMonth => self.plain_year_month(),
            EntityKind::PlainMonthDay => self.plain_month_day(),
            EntityKind::Duration => self.duration(),
            EntityKind::TimeZone => self.time_zone(),
        }
    }
}
