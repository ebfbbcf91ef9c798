//! Ability table oracle.

use arrayvec::ArrayVec;

use crate::config::BehaviorConfig;
use crate::state::AbilityId;

/// Ordered list of chained ability ids with padding removed.
pub type AbilityChain = ArrayVec<AbilityId, { BehaviorConfig::MAX_CHAIN_LENGTH }>;

/// Builds a chain from fixed-size table slots, dropping trailing empty slots.
///
/// Interior empty slots are kept so indices still line up with the table.
pub fn chain_from_slots(slots: &[AbilityId; BehaviorConfig::MAX_CHAIN_LENGTH]) -> AbilityChain {
    let len = slots
        .iter()
        .rposition(|id| !id.is_none())
        .map_or(0, |last| last + 1);
    slots[..len].iter().copied().collect()
}

/// Static description of an ability, read-only.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityEntry {
    pub id: AbilityId,
    /// Maximum distance between caster and primary target.
    pub max_range: f32,
}

impl AbilityEntry {
    pub const fn new(id: AbilityId, max_range: f32) -> Self {
        Self { id, max_range }
    }

    pub fn in_range(&self, distance: f32) -> bool {
        distance <= self.max_range
    }
}

/// Oracle providing ability entries.
pub trait AbilityOracle: Send + Sync {
    fn ability(&self, id: AbilityId) -> Option<AbilityEntry>;
}
