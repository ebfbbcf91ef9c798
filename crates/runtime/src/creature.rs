//! Reference host for one AI-driven unit.
//!
//! A [`Creature`] owns the unit's state, its threat table and its controller,
//! and routes threat mutations so the controller observes every change.
use std::time::Duration;

use behavior_core::{
    AiContext, AiController, AiError, BehaviorConfig, BehaviorEnv, CreatureEntry, EntityId,
    MovementController, Notifier, SpellCaster, ThreatTable, TickOutcome, UnitState, UnitView,
};

/// Side-effect collaborators borrowed for one unit.
pub struct UnitIo<'a> {
    pub movement: &'a mut dyn MovementController,
    pub caster: &'a mut dyn SpellCaster,
    pub notifier: &'a mut dyn Notifier,
}

#[derive(Clone, Debug)]
pub struct Creature {
    unit: UnitState,
    threat: ThreatTable,
    controller: AiController,
}

impl Creature {
    pub fn new(config: &BehaviorConfig, entry: &CreatureEntry, unit: UnitState) -> Self {
        Self {
            unit,
            threat: ThreatTable::new(),
            controller: AiController::for_creature(config, entry),
        }
    }

    pub fn id(&self) -> EntityId {
        self.unit.id
    }

    pub fn unit(&self) -> &UnitState {
        &self.unit
    }

    /// Direct access for host-driven changes (movement, damage, casting).
    pub fn unit_mut(&mut self) -> &mut UnitState {
        &mut self.unit
    }

    pub fn threat(&self) -> &ThreatTable {
        &self.threat
    }

    pub fn controller(&self) -> &AiController {
        &self.controller
    }

    pub fn add_threat(&mut self, hostile: EntityId, amount: u64, world: &dyn UnitView) {
        self.threat.add(hostile, amount, world, &mut self.controller);
        self.sync_target();
    }

    pub fn remove_threat(&mut self, hostile: EntityId, world: &dyn UnitView) -> bool {
        let removed = self
            .threat
            .remove(hostile, world, &mut self.controller)
            .is_some();
        self.sync_target();
        removed
    }

    pub fn adjust_threat(&mut self, hostile: EntityId, delta: i64, world: &dyn UnitView) -> bool {
        let adjusted = self
            .threat
            .adjust_threat(hostile, delta, world, &mut self.controller);
        self.sync_target();
        adjusted
    }

    pub fn clear_threat(&mut self) {
        self.threat.clear(&mut self.controller);
        self.sync_target();
    }

    pub fn add_execution_delay(&mut self, ms: u32) {
        self.controller.add_execution_delay(ms);
    }

    /// Runs one controller tick.
    pub fn update(
        &mut self,
        delta: Duration,
        world: &dyn UnitView,
        io: UnitIo<'_>,
        env: BehaviorEnv<'_>,
    ) -> Result<TickOutcome, AiError> {
        let mut ctx = AiContext {
            unit: &mut self.unit,
            threat: &mut self.threat,
            world,
            movement: io.movement,
            caster: io.caster,
            notifier: io.notifier,
            env,
        };
        self.controller.update(delta, &mut ctx)
    }

    /// Forces the unit out of combat. Returns false if it was not fighting.
    pub fn exit_combat(
        &mut self,
        world: &dyn UnitView,
        io: UnitIo<'_>,
        env: BehaviorEnv<'_>,
    ) -> bool {
        let mut ctx = AiContext {
            unit: &mut self.unit,
            threat: &mut self.threat,
            world,
            movement: io.movement,
            caster: io.caster,
            notifier: io.notifier,
            env,
        };
        self.controller.on_exit_combat(&mut ctx)
    }

    /// Applies the victim the controller selected on the last threat change.
    fn sync_target(&mut self) {
        self.unit.target = self.controller.victim();
    }
}
