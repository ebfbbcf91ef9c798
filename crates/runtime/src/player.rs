//! Plain player facts for prerequisite evaluation.
use std::collections::{HashMap, HashSet};

use behavior_core::{AbilityId, EntityId, PrerequisitePlayer};

/// Snapshot of the player data prerequisite rules read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerFacts {
    pub id: EntityId,
    pub race: u32,
    pub class: u32,
    pub faction: u32,
    pub path: u32,
    /// Quest id to quest state.
    pub quests: HashMap<u32, u32>,
    pub achievements: HashSet<u32>,
    pub spells: HashSet<AbilityId>,
}

impl PlayerFacts {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_race(mut self, race: u32) -> Self {
        self.race = race;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: u32) -> Self {
        self.class = class;
        self
    }

    #[must_use]
    pub fn with_faction(mut self, faction: u32) -> Self {
        self.faction = faction;
        self
    }

    #[must_use]
    pub fn with_quest_state(mut self, quest: u32, state: u32) -> Self {
        self.quests.insert(quest, state);
        self
    }
}

impl PrerequisitePlayer for PlayerFacts {
    fn id(&self) -> EntityId {
        self.id
    }

    fn race(&self) -> u32 {
        self.race
    }

    fn class(&self) -> u32 {
        self.class
    }

    fn faction(&self) -> u32 {
        self.faction
    }

    fn path(&self) -> u32 {
        self.path
    }

    fn quest_state(&self, quest: u32) -> u32 {
        self.quests.get(&quest).copied().unwrap_or(0)
    }

    fn has_achievement(&self, achievement: u32) -> bool {
        self.achievements.contains(&achievement)
    }

    fn knows_spell(&self, spell: AbilityId) -> bool {
        self.spells.contains(&spell)
    }
}
