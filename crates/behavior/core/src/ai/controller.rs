use std::time::Duration;

use tracing::debug;

use super::{AiError, MovementController};
use crate::cast::{CastParameters, CastRequest, SpellCaster};
use crate::config::BehaviorConfig;
use crate::env::{BehaviorEnv, CreatureEntry};
use crate::notify::{Notification, Notifier};
use crate::state::{AbilityId, ControlledUnit, EntityId, UnitView};
use crate::threat::{ThreatEntry, ThreatObserver, ThreatTable};
use crate::timer::CountdownTimer;

/// Combat state of a controlled unit.
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
#[strum(serialize_all = "snake_case")]
pub enum AiState {
    #[default]
    Idle,
    Combat,
    /// Returning to the leash anchor after leaving combat.
    Leashing,
}

/// Per-creature tuning resolved from configuration and the creature entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AiProfile {
    pub pursuit_speed_factor: f32,
    pub max_attack_range: f32,
    pub auto_attack_abilities: [AbilityId; 2],
    pub auto_attack_interval: Duration,
    pub execution_delay_epsilon: Duration,
    pub special_ability: Option<AbilityId>,
    pub special_ability_interval: Duration,
}

impl AiProfile {
    pub fn from_config(config: &BehaviorConfig, creature: &CreatureEntry) -> Self {
        let special = creature.special_ability;
        Self {
            pursuit_speed_factor: config.pursuit_speed_factor,
            max_attack_range: config.max_attack_range,
            auto_attack_abilities: config.auto_attack_abilities,
            auto_attack_interval: config.auto_attack_interval(),
            execution_delay_epsilon: config.execution_delay_epsilon(),
            special_ability: special.map(|s| s.ability),
            special_ability_interval: special
                .map(|s| s.interval(config))
                .unwrap_or_else(|| config.special_ability_interval()),
        }
    }
}

/// Collaborators borrowed for the duration of one controller call.
pub struct AiContext<'a> {
    pub unit: &'a mut dyn ControlledUnit,
    pub threat: &'a mut ThreatTable,
    pub world: &'a dyn UnitView,
    pub movement: &'a mut dyn MovementController,
    pub caster: &'a mut dyn SpellCaster,
    pub notifier: &'a mut dyn Notifier,
    pub env: BehaviorEnv<'a>,
}

/// The stage that ended a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The unit is dead; nothing ran.
    Dead,
    /// Idle with no live victim.
    Idle,
    /// Left combat this tick and started leashing.
    ExitedCombat,
    /// Still walking back to the anchor.
    Leashing,
    /// Reached the anchor and went idle.
    LeashComplete,
    /// The unit is casting; attack logic skipped.
    Casting,
    /// Execution delay still pending; attack logic skipped.
    DelayPending,
    SpecialCast(AbilityId),
    AutoAttack(AbilityId),
    /// The next auto-attack is out of range of the victim.
    OutOfRange,
    /// The auto-attack cadence has not elapsed yet.
    Waiting,
}

/// Combat state machine owned by exactly one unit.
///
/// The controller is driven by [`AiController::update`] once per tick and
/// observes the unit's [`ThreatTable`] through [`ThreatObserver`].
#[derive(Clone, Debug)]
pub struct AiController {
    profile: AiProfile,
    state: AiState,
    pending_exit: bool,
    victim: Option<EntityId>,
    execution_delay: Duration,
    auto_attack_index: usize,
    auto_attack_timer: CountdownTimer,
    special_timer: CountdownTimer,
}

impl AiController {
    pub fn new(profile: AiProfile) -> Self {
        Self {
            auto_attack_timer: CountdownTimer::new(profile.auto_attack_interval, true),
            special_timer: CountdownTimer::new(profile.special_ability_interval, false),
            profile,
            state: AiState::Idle,
            pending_exit: false,
            victim: None,
            execution_delay: Duration::ZERO,
            auto_attack_index: 0,
        }
    }

    pub fn for_creature(config: &BehaviorConfig, creature: &CreatureEntry) -> Self {
        Self::new(AiProfile::from_config(config, creature))
    }

    pub fn state(&self) -> AiState {
        self.state
    }

    pub fn profile(&self) -> &AiProfile {
        &self.profile
    }

    /// The hostile selected by the latest threat change or tick.
    pub fn victim(&self) -> Option<EntityId> {
        self.victim
    }

    pub fn is_in_combat(&self) -> bool {
        self.state == AiState::Combat
    }

    /// True when a threat notification emptied the live set and the exit
    /// transition is waiting for the next tick.
    pub fn is_exit_pending(&self) -> bool {
        self.pending_exit
    }

    pub fn execution_delay(&self) -> Duration {
        self.execution_delay
    }

    /// Ability the next auto-attack will use.
    pub fn next_auto_attack(&self) -> AbilityId {
        self.profile.auto_attack_abilities[self.auto_attack_index]
    }

    pub fn special_timer(&self) -> &CountdownTimer {
        &self.special_timer
    }

    pub fn auto_attack_timer(&self) -> &CountdownTimer {
        &self.auto_attack_timer
    }

    /// Runs one tick of the state machine.
    ///
    /// # Errors
    ///
    /// Returns an error if an ability entry the controller is about to use is
    /// missing from the ability oracle, or the oracle itself is absent.
    pub fn update(
        &mut self,
        delta: Duration,
        ctx: &mut AiContext<'_>,
    ) -> Result<TickOutcome, AiError> {
        if !ctx.unit.is_alive() {
            return Ok(TickOutcome::Dead);
        }

        let victim = ctx.threat.highest_live_entry(ctx.world).map(|e| e.hostile);
        if victim.is_none() && (self.state == AiState::Combat || self.pending_exit) {
            self.exit_combat(ctx);
            return Ok(TickOutcome::ExitedCombat);
        }
        if victim.is_some() && self.state == AiState::Idle {
            self.on_enter_combat();
        }

        let victim = match (self.state, victim) {
            (AiState::Combat, Some(victim)) => victim,
            (AiState::Leashing, _) => {
                self.consume_execution_delay(delta);
                return Ok(self.update_leash(ctx));
            }
            _ => {
                self.consume_execution_delay(delta);
                return Ok(TickOutcome::Idle);
            }
        };
        self.victim = Some(victim);
        ctx.unit.set_target(Some(victim));

        if ctx.unit.leash().is_exceeded_by(&ctx.unit.position()) {
            debug!(
                target: "behavior::ai",
                unit = %ctx.unit.id(),
                "leash radius exceeded"
            );
            self.exit_combat(ctx);
            return Ok(TickOutcome::ExitedCombat);
        }
        if ctx.unit.is_casting() {
            return Ok(TickOutcome::Casting);
        }

        let speed = self.pursuit_speed(ctx);
        ctx.movement
            .chase(victim, speed, self.profile.max_attack_range);

        if !self.consume_execution_delay(delta) {
            return Ok(TickOutcome::DelayPending);
        }

        if let Some(ability) = self.update_special_ability(delta, victim, ctx)? {
            return Ok(TickOutcome::SpecialCast(ability));
        }

        self.update_auto_attack(delta, victim, ctx)
    }

    /// Arms the special-ability timer and enters combat.
    pub fn on_enter_combat(&mut self) {
        if self.profile.special_ability.is_some() {
            self.special_timer
                .with_interval(self.profile.special_ability_interval, true);
        }
        self.pending_exit = false;
        if self.state != AiState::Combat {
            debug!(target: "behavior::ai", from = %self.state, "entering combat");
        }
        self.state = AiState::Combat;
    }

    /// Leaves combat immediately. Returns false if the unit was not in combat.
    pub fn on_exit_combat(&mut self, ctx: &mut AiContext<'_>) -> bool {
        if self.state != AiState::Combat {
            return false;
        }
        self.exit_combat(ctx);
        true
    }

    /// Suspends attack logic for `ms` milliseconds unless a longer delay is
    /// already pending.
    ///
    /// The delay drains with simulation time in every state, so one added out
    /// of combat does not hold back a later engagement.
    pub fn add_execution_delay(&mut self, ms: u32) {
        let delay = Duration::from_millis(u64::from(ms));
        if delay > self.execution_delay {
            self.execution_delay = delay;
        }
    }

    /// Alternation and pending delays do not carry into the next combat.
    fn exit_combat(&mut self, ctx: &mut AiContext<'_>) {
        ctx.threat.clear(self);
        self.special_timer.reset(false);
        self.state = AiState::Leashing;
        self.pending_exit = false;
        self.victim = None;
        self.auto_attack_index = 0;
        self.execution_delay = Duration::ZERO;
        ctx.unit.set_target(None);

        let unit = ctx.unit.id();
        debug!(target: "behavior::ai", unit = %unit, "combat exited, leashing");
        ctx.notifier
            .broadcast_to_observers(unit, Notification::CombatExited { unit });
    }

    fn update_leash(&mut self, ctx: &mut AiContext<'_>) -> TickOutcome {
        let leash = ctx.unit.leash();
        let speed = self.pursuit_speed(ctx);
        if !ctx.movement.move_to(leash.anchor, speed) {
            return TickOutcome::Leashing;
        }

        ctx.movement.set_facing(leash.anchor_facing, true);
        ctx.unit.restore_full_health();
        self.state = AiState::Idle;

        let unit = ctx.unit.id();
        debug!(target: "behavior::ai", unit = %unit, "leash complete");
        ctx.notifier
            .broadcast_to_observers(unit, Notification::Evaded { unit });
        TickOutcome::LeashComplete
    }

    /// Returns true once no delay is pending.
    fn consume_execution_delay(&mut self, delta: Duration) -> bool {
        if self.execution_delay.is_zero() {
            return true;
        }
        self.execution_delay = self.execution_delay.saturating_sub(delta);
        if self.execution_delay <= self.profile.execution_delay_epsilon {
            self.execution_delay = Duration::ZERO;
            return true;
        }
        false
    }

    fn update_special_ability(
        &mut self,
        delta: Duration,
        victim: EntityId,
        ctx: &mut AiContext<'_>,
    ) -> Result<Option<AbilityId>, AiError> {
        let Some(ability) = self.profile.special_ability else {
            return Ok(None);
        };
        if self.special_timer.is_idle() {
            return Ok(None);
        }
        self.special_timer.update(delta);
        if !self.special_timer.has_elapsed() {
            return Ok(None);
        }

        let entry = ctx
            .env
            .abilities()?
            .ability(ability)
            .ok_or(AiError::MissingAbilityEntry(ability))?;
        let position = ctx.unit.position();
        let Some(victim_position) = ctx.world.position(victim) else {
            return Ok(None);
        };
        if !entry.in_range(position.distance(&victim_position)) {
            return Ok(None);
        }

        ctx.movement.stop_current_path();
        ctx.movement.broadcast_pending_commands();
        ctx.movement
            .set_facing(position.facing_towards(&victim_position), false);
        ctx.caster
            .cast_spell(CastRequest::new(ability, CastParameters::targeting(victim)));
        self.special_timer.reset(true);

        debug!(
            target: "behavior::ai",
            unit = %ctx.unit.id(),
            victim = %victim,
            ability = %ability,
            "special ability cast"
        );
        Ok(Some(ability))
    }

    fn update_auto_attack(
        &mut self,
        delta: Duration,
        victim: EntityId,
        ctx: &mut AiContext<'_>,
    ) -> Result<TickOutcome, AiError> {
        self.auto_attack_timer.update(delta);

        let ability = self.next_auto_attack();
        let entry = ctx
            .env
            .abilities()?
            .ability(ability)
            .ok_or(AiError::MissingAbilityEntry(ability))?;

        let in_range = ctx
            .world
            .position(victim)
            .is_some_and(|p| entry.in_range(ctx.unit.position().distance(&p)));
        if !in_range {
            return Ok(TickOutcome::OutOfRange);
        }
        if !self.auto_attack_timer.has_elapsed() {
            return Ok(TickOutcome::Waiting);
        }

        ctx.caster
            .cast_spell(CastRequest::new(ability, CastParameters::targeting(victim)));
        self.auto_attack_index =
            (self.auto_attack_index + 1) % self.profile.auto_attack_abilities.len();
        self.auto_attack_timer.reset(true);
        Ok(TickOutcome::AutoAttack(ability))
    }

    fn pursuit_speed(&self, ctx: &AiContext<'_>) -> f32 {
        ctx.unit.movement_speed_multiplier() * self.profile.pursuit_speed_factor
    }
}

impl ThreatObserver for AiController {
    fn on_threat_add_target(&mut self, entry: &ThreatEntry) {
        debug!(target: "behavior::ai", hostile = %entry.hostile, "threat target added");
    }

    fn on_threat_remove_target(&mut self, entry: &ThreatEntry) {
        debug!(target: "behavior::ai", hostile = %entry.hostile, "threat target removed");
    }

    fn on_threat_change(&mut self, live: &[ThreatEntry]) {
        let Some(top) = live.first() else {
            if self.state == AiState::Combat {
                self.pending_exit = true;
            }
            self.victim = None;
            return;
        };
        self.pending_exit = false;
        if self.state == AiState::Idle {
            self.on_enter_combat();
        }
        self.victim = (self.state == AiState::Combat).then_some(top.hostile);
    }
}
