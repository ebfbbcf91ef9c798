#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use behavior_core::{
    AbilityEntry, AbilityId, AbilityOracle, AccountCurrency, AccountOracle, ActivationTarget,
    BehaviorEnv, CastRequest, CreatureEntry, CreatureId, CreatureOracle, EntityId, Env,
    InteractionEntry, InteractionId, InteractionOracle, MovementController, Notification,
    Notifier, Position, PrerequisiteEntry, PrerequisiteId, PrerequisiteOracle, SpellCaster,
    UnitView,
};

#[derive(Default)]
pub struct StaticAbilities(pub HashMap<AbilityId, AbilityEntry>);

impl StaticAbilities {
    pub fn with(mut self, id: u32, max_range: f32) -> Self {
        self.0.insert(AbilityId(id), AbilityEntry::new(AbilityId(id), max_range));
        self
    }
}

impl AbilityOracle for StaticAbilities {
    fn ability(&self, id: AbilityId) -> Option<AbilityEntry> {
        self.0.get(&id).copied()
    }
}

#[derive(Default)]
pub struct StaticCreatures(pub HashMap<CreatureId, CreatureEntry>);

impl StaticCreatures {
    pub fn with(mut self, entry: CreatureEntry) -> Self {
        self.0.insert(entry.id, entry);
        self
    }
}

impl CreatureOracle for StaticCreatures {
    fn creature(&self, id: CreatureId) -> Option<CreatureEntry> {
        self.0.get(&id).cloned()
    }
}

#[derive(Default)]
pub struct StaticInteractions(pub HashMap<InteractionId, InteractionEntry>);

impl InteractionOracle for StaticInteractions {
    fn interaction(&self, id: InteractionId) -> Option<InteractionEntry> {
        self.0.get(&id).cloned()
    }
}

#[derive(Default)]
pub struct StaticPrerequisites(pub HashMap<PrerequisiteId, PrerequisiteEntry>);

impl StaticPrerequisites {
    pub fn with(mut self, entry: PrerequisiteEntry) -> Self {
        self.0.insert(entry.id, entry);
        self
    }
}

impl PrerequisiteOracle for StaticPrerequisites {
    fn prerequisite(&self, id: PrerequisiteId) -> Option<PrerequisiteEntry> {
        self.0.get(&id).cloned()
    }
}

#[derive(Default)]
pub struct StaticAccounts(pub HashMap<(EntityId, AccountCurrency), u64>);

impl AccountOracle for StaticAccounts {
    fn currency_amount(&self, player: EntityId, currency: AccountCurrency) -> u64 {
        self.0.get(&(player, currency)).copied().unwrap_or(0)
    }
}

#[derive(Default)]
pub struct Oracles {
    pub abilities: StaticAbilities,
    pub creatures: StaticCreatures,
    pub interactions: StaticInteractions,
    pub prerequisites: StaticPrerequisites,
    pub accounts: StaticAccounts,
}

impl Oracles {
    pub fn env(&self) -> BehaviorEnv<'_> {
        Env::with_all(
            &self.abilities,
            &self.creatures,
            &self.interactions,
            &self.prerequisites,
            &self.accounts,
        )
        .into_behavior_env()
    }
}

#[derive(Default)]
pub struct World {
    pub positions: HashMap<EntityId, Position>,
    pub dead: HashSet<EntityId>,
}

impl World {
    pub fn place(&mut self, id: EntityId, position: Position) {
        self.positions.insert(id, position);
    }
}

impl UnitView for World {
    fn is_alive(&self, id: EntityId) -> bool {
        self.positions.contains_key(&id) && !self.dead.contains(&id)
    }

    fn position(&self, id: EntityId) -> Option<Position> {
        self.positions.get(&id).copied()
    }
}

#[derive(Debug, Default)]
pub struct RecordingMovement {
    pub chases: Vec<(EntityId, f32, f32)>,
    pub move_targets: Vec<(Position, f32)>,
    pub arrive: bool,
    pub stops: usize,
    pub broadcasts: usize,
    pub facings: Vec<(f32, bool)>,
}

impl MovementController for RecordingMovement {
    fn chase(&mut self, target: EntityId, speed: f32, max_range: f32) {
        self.chases.push((target, speed, max_range));
    }

    fn move_to(&mut self, point: Position, speed: f32) -> bool {
        self.move_targets.push((point, speed));
        self.arrive
    }

    fn stop_current_path(&mut self) {
        self.stops += 1;
    }

    fn set_facing(&mut self, rotation: f32, immediate: bool) {
        self.facings.push((rotation, immediate));
    }

    fn broadcast_pending_commands(&mut self) {
        self.broadcasts += 1;
    }
}

#[derive(Debug, Default)]
pub struct RecordingCaster {
    pub casts: Vec<CastRequest>,
}

impl RecordingCaster {
    pub fn abilities(&self) -> Vec<AbilityId> {
        self.casts.iter().map(|c| c.ability).collect()
    }
}

impl SpellCaster for RecordingCaster {
    fn cast_spell(&mut self, request: CastRequest) {
        self.casts.push(request);
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub broadcasts: Vec<(EntityId, Notification)>,
    pub sessions: Vec<(EntityId, Notification)>,
}

impl Notifier for RecordingNotifier {
    fn broadcast_to_observers(&mut self, source: EntityId, notification: Notification) {
        self.broadcasts.push((source, notification));
    }

    fn send_to_session(&mut self, player: EntityId, notification: Notification) {
        self.sessions.push((player, notification));
    }
}

#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub successes: Vec<EntityId>,
    pub failures: Vec<EntityId>,
}

impl ActivationTarget for RecordingTarget {
    fn on_activate_success(&mut self, player: EntityId) {
        self.successes.push(player);
    }

    fn on_activate_fail(&mut self, player: EntityId) {
        self.failures.push(player);
    }
}
