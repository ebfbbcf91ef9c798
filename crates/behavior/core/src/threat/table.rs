use std::cmp::Reverse;

use tracing::trace;

use super::{ThreatEntry, ThreatObserver};
use crate::state::{EntityId, UnitView};

/// Ranked set of hostiles with at most one entry per hostile.
///
/// The current victim is the live entry with the greatest threat; ties go to
/// the hostile that was added first.
#[derive(Clone, Debug, Default)]
pub struct ThreatTable {
    entries: Vec<ThreatEntry>,
    next_order: u64,
}

impl ThreatTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `threat` for `hostile`.
    ///
    /// A new hostile raises `on_threat_add_target` followed by
    /// `on_threat_change`; an existing one accumulates and raises only
    /// `on_threat_change`.
    pub fn add(
        &mut self,
        hostile: EntityId,
        threat: u64,
        units: &dyn UnitView,
        observer: &mut dyn ThreatObserver,
    ) {
        if let Some(entry) = self.entry_mut(hostile) {
            entry.threat = entry.threat.saturating_add(threat);
            trace!(
                target: "behavior::threat",
                hostile = %hostile,
                threat = entry.threat,
                "threat accumulated"
            );
        } else {
            let entry = ThreatEntry::new(hostile, threat, self.next_order);
            self.next_order += 1;
            self.entries.push(entry);
            trace!(target: "behavior::threat", hostile = %hostile, threat, "threat target added");
            observer.on_threat_add_target(&entry);
        }
        observer.on_threat_change(&self.live_entries(units));
    }

    /// Removes `hostile`, returning its entry if it was present.
    pub fn remove(
        &mut self,
        hostile: EntityId,
        units: &dyn UnitView,
        observer: &mut dyn ThreatObserver,
    ) -> Option<ThreatEntry> {
        let index = self.entries.iter().position(|e| e.hostile == hostile)?;
        let entry = self.entries.remove(index);
        trace!(target: "behavior::threat", hostile = %hostile, "threat target removed");
        observer.on_threat_remove_target(&entry);
        observer.on_threat_change(&self.live_entries(units));
        Some(entry)
    }

    /// Applies a signed delta to an existing entry, saturating at zero.
    ///
    /// Returns false without notifying if `hostile` has no entry.
    pub fn adjust_threat(
        &mut self,
        hostile: EntityId,
        delta: i64,
        units: &dyn UnitView,
        observer: &mut dyn ThreatObserver,
    ) -> bool {
        let Some(entry) = self.entry_mut(hostile) else {
            return false;
        };
        entry.threat = if delta >= 0 {
            entry.threat.saturating_add(delta.unsigned_abs())
        } else {
            entry.threat.saturating_sub(delta.unsigned_abs())
        };
        observer.on_threat_change(&self.live_entries(units));
        true
    }

    /// Removes every entry, raising a remove notification for each and then
    /// one change notification with an empty live set.
    pub fn clear(&mut self, observer: &mut dyn ThreatObserver) {
        let removed = std::mem::take(&mut self.entries);
        for entry in &removed {
            observer.on_threat_remove_target(entry);
        }
        observer.on_threat_change(&[]);
    }

    /// Live entries ordered by threat descending, then insertion ascending.
    pub fn live_entries(&self, units: &dyn UnitView) -> Vec<ThreatEntry> {
        let mut live: Vec<ThreatEntry> = self
            .entries
            .iter()
            .filter(|e| units.is_alive(e.hostile))
            .copied()
            .collect();
        live.sort_by_key(|e| (Reverse(e.threat), e.order));
        live
    }

    /// The current victim: the live entry with the greatest threat.
    pub fn highest_live_entry(&self, units: &dyn UnitView) -> Option<ThreatEntry> {
        self.entries
            .iter()
            .filter(|e| units.is_alive(e.hostile))
            .min_by_key(|e| (Reverse(e.threat), e.order))
            .copied()
    }

    pub fn threat_of(&self, hostile: EntityId) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.hostile == hostile)
            .map(|e| e.threat)
    }

    pub fn contains(&self, hostile: EntityId) -> bool {
        self.entries.iter().any(|e| e.hostile == hostile)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, hostile: EntityId) -> Option<&mut ThreatEntry> {
        self.entries.iter_mut().find(|e| e.hostile == hostile)
    }
}
