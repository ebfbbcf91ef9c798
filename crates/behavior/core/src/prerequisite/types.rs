use crate::state::{AbilityId, EntityId};

/// Rule-type identifiers understood by the prerequisite engine.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::FromRepr,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u32)]
pub enum PrerequisiteType {
    Level = 1,
    Race = 2,
    Class = 3,
    Faction = 4,
    Reputation = 5,
    Quest = 8,
    Achievement = 10,
    /// Evaluates another named rule.
    Prerequisite = 11,
    Spell = 15,
    Path = 52,
    CosmicRewards = 111,
}

/// Comparison operator of a typed check.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::FromRepr,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u32)]
pub enum Comparison {
    Equal = 0,
    NotEqual = 1,
    GreaterThanOrEqual = 2,
    GreaterThan = 3,
    LessThanOrEqual = 4,
    LessThan = 5,
}

/// Facts about a player that prerequisite checks read.
pub trait PrerequisitePlayer {
    fn id(&self) -> EntityId;

    fn race(&self) -> u32;

    fn class(&self) -> u32;

    fn faction(&self) -> u32;

    fn path(&self) -> u32;

    /// Raw state of `quest` (0 when unknown to the player).
    fn quest_state(&self, quest: u32) -> u32;

    fn has_achievement(&self, achievement: u32) -> bool;

    fn knows_spell(&self, spell: AbilityId) -> bool;
}
