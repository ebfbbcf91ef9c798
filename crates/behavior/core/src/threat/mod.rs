//! Per-unit ranking of hostile contributors.
//!
//! A [`ThreatTable`] is owned by the unit it ranks hostiles for. Every mutation
//! is reported to a [`ThreatObserver`] (normally the unit's AI controller)
//! after the table has been updated, together with a snapshot of the live set.
mod table;

pub use table::ThreatTable;

use crate::state::EntityId;

/// One hostile and its accumulated threat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreatEntry {
    pub hostile: EntityId,
    pub threat: u64,
    order: u64,
}

impl ThreatEntry {
    pub(crate) const fn new(hostile: EntityId, threat: u64, order: u64) -> Self {
        Self {
            hostile,
            threat,
            order,
        }
    }
}

/// Receives threat table notifications.
///
/// Callbacks run synchronously inside the mutating call. `live` slices are
/// ordered by threat descending, then insertion ascending, and contain only
/// hostiles that are currently alive.
pub trait ThreatObserver {
    fn on_threat_add_target(&mut self, entry: &ThreatEntry);

    fn on_threat_remove_target(&mut self, entry: &ThreatEntry);

    fn on_threat_change(&mut self, live: &[ThreatEntry]);
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullThreatObserver;

impl ThreatObserver for NullThreatObserver {
    fn on_threat_add_target(&mut self, _entry: &ThreatEntry) {}

    fn on_threat_remove_target(&mut self, _entry: &ThreatEntry) {}

    fn on_threat_change(&mut self, _live: &[ThreatEntry]) {}
}
