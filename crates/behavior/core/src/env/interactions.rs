//! Interaction table oracle.

use super::abilities::{AbilityChain, chain_from_slots};
use crate::config::BehaviorConfig;
use crate::state::{AbilityId, InteractionId};

/// Classification of an interaction session.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum InteractionKind {
    /// Generic click-to-activate interaction.
    #[default]
    Interaction,
    /// Player must hold the activation for a duration.
    PressAndHold,
    /// Player must repeatedly tap to fill a meter.
    RapidTapping,
    /// Activation picks up the object.
    Collect,
}

/// Static description of an interaction attached to a session.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionEntry {
    pub id: InteractionId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: InteractionKind,
    /// Abilities cast in reverse order; empty slots fall back to the target
    /// creature's activation chain.
    #[cfg_attr(feature = "serde", serde(default))]
    pub chain: [AbilityId; BehaviorConfig::MAX_CHAIN_LENGTH],
}

impl InteractionEntry {
    pub fn new(id: InteractionId, kind: InteractionKind) -> Self {
        Self {
            id,
            kind,
            chain: [AbilityId::NONE; BehaviorConfig::MAX_CHAIN_LENGTH],
        }
    }

    #[must_use]
    pub fn with_chain(mut self, chain: [AbilityId; BehaviorConfig::MAX_CHAIN_LENGTH]) -> Self {
        self.chain = chain;
        self
    }

    pub fn ability_chain(&self) -> AbilityChain {
        chain_from_slots(&self.chain)
    }
}

/// Oracle providing interaction entries.
pub trait InteractionOracle: Send + Sync {
    fn interaction(&self, id: InteractionId) -> Option<InteractionEntry>;
}
