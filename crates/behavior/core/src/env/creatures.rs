//! Creature table oracle.

use std::time::Duration;

use super::abilities::{AbilityChain, chain_from_slots};
use crate::config::BehaviorConfig;
use crate::state::{AbilityId, CreatureId};

/// Special ability a creature fires on its own cadence while in combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialAbility {
    pub ability: AbilityId,
    /// Overrides [`BehaviorConfig::special_ability_interval_ms`] when set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interval_ms: Option<u64>,
}

impl SpecialAbility {
    pub const fn new(ability: AbilityId) -> Self {
        Self {
            ability,
            interval_ms: None,
        }
    }

    #[must_use]
    pub const fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = Some(interval_ms);
        self
    }

    pub fn interval(&self, config: &BehaviorConfig) -> Duration {
        self.interval_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| config.special_ability_interval())
    }
}

/// Static description of a creature type.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureEntry {
    pub id: CreatureId,
    /// Abilities cast in reverse order when a player activates this creature.
    #[cfg_attr(feature = "serde", serde(default))]
    pub activate_spells: [AbilityId; BehaviorConfig::MAX_CHAIN_LENGTH],
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_ability: Option<SpecialAbility>,
}

impl CreatureEntry {
    pub fn new(id: CreatureId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_activate_spells(
        mut self,
        spells: [AbilityId; BehaviorConfig::MAX_CHAIN_LENGTH],
    ) -> Self {
        self.activate_spells = spells;
        self
    }

    #[must_use]
    pub fn with_special_ability(mut self, special: SpecialAbility) -> Self {
        self.special_ability = Some(special);
        self
    }

    /// Activation chain with trailing empty slots removed.
    pub fn activation_chain(&self) -> AbilityChain {
        chain_from_slots(&self.activate_spells)
    }
}

/// Oracle providing creature entries.
pub trait CreatureOracle: Send + Sync {
    fn creature(&self, id: CreatureId) -> Option<CreatureEntry>;
}
