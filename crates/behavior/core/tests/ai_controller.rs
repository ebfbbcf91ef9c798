mod common;

use std::time::Duration;

use behavior_core::{
    AbilityId, AiContext, AiController, AiError, AiState, BehaviorConfig, CastParameters,
    CreatureEntry, CreatureId, EntityId, Notification, Position, SpecialAbility, ThreatTable,
    TickOutcome, UnitState,
};
use common::{
    Oracles, RecordingCaster, RecordingMovement, RecordingNotifier, StaticAbilities,
    StaticCreatures, World,
};

const UNIT: EntityId = EntityId(1);
const VICTIM: EntityId = EntityId(2);
const CREATURE: CreatureId = CreatureId(100);
const FIRST_SWING: AbilityId = AbilityId(28704);
const SECOND_SWING: AbilityId = AbilityId(28705);
const SPECIAL: AbilityId = AbilityId(500);

struct Harness {
    unit: UnitState,
    threat: ThreatTable,
    world: World,
    movement: RecordingMovement,
    caster: RecordingCaster,
    notifier: RecordingNotifier,
    oracles: Oracles,
    ai: AiController,
}

impl Harness {
    fn new(creature: CreatureEntry) -> Self {
        let config = BehaviorConfig::default();
        let oracles = Oracles {
            abilities: StaticAbilities::default()
                .with(FIRST_SWING.0, 5.0)
                .with(SECOND_SWING.0, 5.0)
                .with(SPECIAL.0, 10.0),
            creatures: StaticCreatures::default().with(creature.clone()),
            ..Oracles::default()
        };

        let mut world = World::default();
        world.place(UNIT, Position::ORIGIN);
        world.place(VICTIM, Position::new(0.0, 0.0, 2.0));

        Self {
            unit: UnitState::new(UNIT, CREATURE, Position::ORIGIN, 100, 30.0).with_facing(1.5),
            threat: ThreatTable::new(),
            world,
            movement: RecordingMovement::default(),
            caster: RecordingCaster::default(),
            notifier: RecordingNotifier::default(),
            oracles,
            ai: AiController::for_creature(&config, &creature),
        }
    }

    fn plain() -> Self {
        Self::new(CreatureEntry::new(CREATURE))
    }

    fn with_special() -> Self {
        let creature =
            CreatureEntry::new(CREATURE).with_special_ability(SpecialAbility::new(SPECIAL));
        Self::new(creature)
    }

    fn add_threat(&mut self, hostile: EntityId, amount: u64) {
        self.threat.add(hostile, amount, &self.world, &mut self.ai);
    }

    fn tick(&mut self, ms: u64) -> Result<TickOutcome, AiError> {
        self.advance(Duration::from_millis(ms))
    }

    fn advance(&mut self, delta: Duration) -> Result<TickOutcome, AiError> {
        let mut ctx = AiContext {
            unit: &mut self.unit,
            threat: &mut self.threat,
            world: &self.world,
            movement: &mut self.movement,
            caster: &mut self.caster,
            notifier: &mut self.notifier,
            env: self.oracles.env(),
        };
        self.ai.update(delta, &mut ctx)
    }

    fn exit_combat(&mut self) -> bool {
        let mut ctx = AiContext {
            unit: &mut self.unit,
            threat: &mut self.threat,
            world: &self.world,
            movement: &mut self.movement,
            caster: &mut self.caster,
            notifier: &mut self.notifier,
            env: self.oracles.env(),
        };
        self.ai.on_exit_combat(&mut ctx)
    }

    fn engaged() -> Self {
        let mut harness = Self::plain();
        harness.add_threat(VICTIM, 10);
        assert_eq!(harness.tick(0), Ok(TickOutcome::Waiting));
        harness
    }
}

#[test]
fn threat_notification_enters_combat() {
    let mut harness = Harness::plain();
    assert_eq!(harness.tick(100), Ok(TickOutcome::Idle));

    harness.add_threat(VICTIM, 10);
    assert_eq!(harness.ai.state(), AiState::Combat);

    harness.tick(0).unwrap();
    assert_eq!(harness.unit.target, Some(VICTIM));
    assert_eq!(harness.movement.chases, vec![(VICTIM, 7.0, 5.0)]);
}

#[test]
fn auto_attacks_alternate_starting_with_first() {
    let mut harness = Harness::engaged();

    assert_eq!(harness.tick(1_500), Ok(TickOutcome::AutoAttack(FIRST_SWING)));
    assert_eq!(harness.tick(1_000), Ok(TickOutcome::Waiting));
    assert_eq!(harness.tick(500), Ok(TickOutcome::AutoAttack(SECOND_SWING)));
    assert_eq!(harness.tick(1_500), Ok(TickOutcome::AutoAttack(FIRST_SWING)));

    assert_eq!(
        harness.caster.abilities(),
        vec![FIRST_SWING, SECOND_SWING, FIRST_SWING]
    );
    assert_eq!(
        harness.caster.casts[0].parameters,
        CastParameters::targeting(VICTIM)
    );
}

#[test]
fn special_ability_fires_once_per_interval() {
    let mut harness = Harness::with_special();
    harness.add_threat(VICTIM, 10);
    assert!(harness.ai.special_timer().is_ticking());

    assert_eq!(harness.tick(10_000), Ok(TickOutcome::SpecialCast(SPECIAL)));
    assert_eq!(harness.caster.abilities(), vec![SPECIAL]);
    assert_eq!(harness.movement.stops, 1);
    assert_eq!(harness.movement.broadcasts, 1);
    assert_eq!(harness.movement.facings.len(), 1);
    assert!(harness.ai.special_timer().is_ticking());
    assert_eq!(
        harness.ai.special_timer().remaining(),
        Duration::from_millis(10_000)
    );

    harness.tick(5_000).unwrap();
    let specials = harness
        .caster
        .abilities()
        .into_iter()
        .filter(|&id| id == SPECIAL)
        .count();
    assert_eq!(specials, 1);
}

#[test]
fn special_ability_out_of_range_waits_without_rearming() {
    let mut harness = Harness::with_special();
    harness.world.place(VICTIM, Position::new(0.0, 0.0, 20.0));
    harness.add_threat(VICTIM, 10);

    assert_eq!(harness.tick(10_000), Ok(TickOutcome::OutOfRange));
    assert!(harness.ai.special_timer().has_elapsed());

    harness.world.place(VICTIM, Position::new(0.0, 0.0, 3.0));
    assert_eq!(harness.tick(0), Ok(TickOutcome::SpecialCast(SPECIAL)));
}

#[test]
fn chase_speed_scales_with_movement_multiplier() {
    let mut harness = Harness::plain();
    harness.unit = harness.unit.clone().with_speed_multiplier(2.0);
    harness.world.place(VICTIM, Position::new(0.0, 0.0, 8.0));
    harness.add_threat(VICTIM, 1);

    assert_eq!(harness.tick(1_500), Ok(TickOutcome::OutOfRange));
    assert_eq!(harness.movement.chases, vec![(VICTIM, 14.0, 5.0)]);
    assert!(harness.caster.casts.is_empty());
}

#[test]
fn casting_unit_skips_attack_logic() {
    let mut harness = Harness::engaged();
    harness.unit.casting = true;
    let chases = harness.movement.chases.len();

    assert_eq!(harness.tick(5_000), Ok(TickOutcome::Casting));
    assert_eq!(harness.movement.chases.len(), chases);
    assert!(harness.caster.casts.is_empty());
}

#[test]
fn dead_unit_tick_is_a_noop() {
    let mut harness = Harness::plain();
    harness.add_threat(VICTIM, 1);
    harness.unit.health.current = 0;

    assert_eq!(harness.tick(5_000), Ok(TickOutcome::Dead));
    assert!(harness.movement.chases.is_empty());
}

#[test]
fn execution_delay_keeps_the_larger_value() {
    let mut harness = Harness::engaged();
    harness.ai.add_execution_delay(2_000);
    harness.ai.add_execution_delay(500);
    assert_eq!(harness.ai.execution_delay(), Duration::from_millis(2_000));

    assert_eq!(harness.tick(1_000), Ok(TickOutcome::DelayPending));
    assert_eq!(harness.tick(999), Ok(TickOutcome::DelayPending));
    assert_eq!(harness.tick(1), Ok(TickOutcome::Waiting));
    assert_eq!(harness.ai.execution_delay(), Duration::ZERO);
    assert!(harness.caster.casts.is_empty());
}

#[test]
fn execution_delay_within_epsilon_is_cleared() {
    let mut harness = Harness::engaged();
    harness.ai.add_execution_delay(1);

    assert_eq!(
        harness.advance(Duration::from_micros(950)),
        Ok(TickOutcome::Waiting)
    );
    assert_eq!(harness.ai.execution_delay(), Duration::ZERO);
}

#[test]
fn leaving_leash_radius_exits_combat_and_returns_home() {
    let mut harness = Harness::engaged();
    harness.unit.health.current = 40;
    harness.unit.position = Position::new(50.0, 0.0, 0.0);

    assert_eq!(harness.tick(100), Ok(TickOutcome::ExitedCombat));
    assert_eq!(harness.ai.state(), AiState::Leashing);
    assert!(harness.threat.is_empty());
    assert_eq!(harness.unit.target, None);
    assert_eq!(
        harness.notifier.broadcasts,
        vec![(UNIT, Notification::CombatExited { unit: UNIT })]
    );

    assert_eq!(harness.tick(100), Ok(TickOutcome::Leashing));
    assert_eq!(
        harness.movement.move_targets.last().map(|m| m.0),
        Some(Position::ORIGIN)
    );

    harness.movement.arrive = true;
    assert_eq!(harness.tick(100), Ok(TickOutcome::LeashComplete));
    assert_eq!(harness.ai.state(), AiState::Idle);
    assert!(harness.unit.health.is_full());
    assert_eq!(harness.movement.facings.last(), Some(&(1.5, true)));
    assert_eq!(
        harness.notifier.broadcasts.last(),
        Some(&(UNIT, Notification::Evaded { unit: UNIT }))
    );
}

#[test]
fn threat_added_while_leashing_waits_for_arrival() {
    let mut harness = Harness::engaged();
    harness.unit.position = Position::new(50.0, 0.0, 0.0);
    harness.tick(0).unwrap();

    harness.add_threat(VICTIM, 5);
    assert_eq!(harness.ai.state(), AiState::Leashing);
    assert_eq!(harness.tick(0), Ok(TickOutcome::Leashing));

    harness.movement.arrive = true;
    harness.unit.position = Position::ORIGIN;
    assert_eq!(harness.tick(0), Ok(TickOutcome::LeashComplete));
    assert_eq!(harness.tick(0), Ok(TickOutcome::Waiting));
    assert_eq!(harness.ai.state(), AiState::Combat);
}

#[test]
fn removing_last_hostile_exits_on_next_tick() {
    let mut harness = Harness::engaged();
    harness
        .threat
        .remove(VICTIM, &harness.world, &mut harness.ai);
    assert!(harness.ai.is_exit_pending());
    assert_eq!(harness.ai.state(), AiState::Combat);

    assert_eq!(harness.tick(0), Ok(TickOutcome::ExitedCombat));
    assert!(!harness.ai.is_exit_pending());
}

#[test]
fn dead_victim_ends_combat() {
    let mut harness = Harness::engaged();
    harness.world.dead.insert(VICTIM);

    assert_eq!(harness.tick(0), Ok(TickOutcome::ExitedCombat));
    assert!(harness.threat.is_empty());
}

#[test]
fn victim_follows_highest_threat() {
    let other = EntityId(3);
    let mut harness = Harness::engaged();
    harness.world.place(other, Position::new(1.0, 0.0, 0.0));
    harness.add_threat(other, 50);

    harness.tick(0).unwrap();
    assert_eq!(harness.unit.target, Some(other));
}

#[test]
fn threat_change_reselects_the_victim_immediately() {
    let other = EntityId(3);
    let mut harness = Harness::engaged();
    harness.world.place(other, Position::new(1.0, 0.0, 0.0));
    assert_eq!(harness.ai.victim(), Some(VICTIM));

    harness.add_threat(other, 50);
    assert_eq!(harness.ai.victim(), Some(other));

    harness
        .threat
        .remove(other, &harness.world, &mut harness.ai);
    assert_eq!(harness.ai.victim(), Some(VICTIM));

    harness
        .threat
        .remove(VICTIM, &harness.world, &mut harness.ai);
    assert_eq!(harness.ai.victim(), None);
}

#[test]
fn threat_while_leashing_selects_no_victim() {
    let mut harness = Harness::engaged();
    assert!(harness.exit_combat());

    harness.add_threat(VICTIM, 5);
    assert_eq!(harness.ai.state(), AiState::Leashing);
    assert_eq!(harness.ai.victim(), None);
}

#[test]
fn alternation_restarts_with_each_combat() {
    let mut harness = Harness::engaged();
    assert_eq!(harness.tick(1_500), Ok(TickOutcome::AutoAttack(FIRST_SWING)));

    assert!(harness.exit_combat());
    harness.movement.arrive = true;
    assert_eq!(harness.tick(0), Ok(TickOutcome::LeashComplete));

    harness.add_threat(VICTIM, 10);
    assert_eq!(harness.tick(1_500), Ok(TickOutcome::AutoAttack(FIRST_SWING)));
}

#[test]
fn execution_delay_does_not_outlive_combat() {
    let mut harness = Harness::engaged();
    harness.ai.add_execution_delay(5_000);
    assert!(harness.exit_combat());
    assert_eq!(harness.ai.execution_delay(), Duration::ZERO);

    // A delay added while walking home drains before the next engagement.
    harness.ai.add_execution_delay(2_000);
    assert_eq!(harness.tick(2_000), Ok(TickOutcome::Leashing));
    assert_eq!(harness.ai.execution_delay(), Duration::ZERO);

    harness.movement.arrive = true;
    assert_eq!(harness.tick(0), Ok(TickOutcome::LeashComplete));
    harness.add_threat(VICTIM, 10);
    assert_eq!(harness.tick(1_500), Ok(TickOutcome::AutoAttack(FIRST_SWING)));
}

#[test]
fn exit_combat_hook_is_idempotent() {
    let mut harness = Harness::engaged();
    assert!(harness.exit_combat());
    assert!(!harness.exit_combat());
    assert_eq!(harness.notifier.broadcasts.len(), 1);
    assert_eq!(harness.ai.state(), AiState::Leashing);
}

#[test]
fn missing_auto_attack_entry_is_fatal() {
    let mut harness = Harness::plain();
    harness.oracles.abilities.0.remove(&FIRST_SWING);
    harness.add_threat(VICTIM, 1);

    assert_eq!(harness.tick(0), Err(AiError::MissingAbilityEntry(FIRST_SWING)));
}
