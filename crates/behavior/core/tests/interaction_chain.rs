mod common;

use behavior_core::{
    AbilityId, CastCompletion, CastFlags, ChainStep, CreatureEntry, CreatureId, EntityId,
    InteractionContext, InteractionEntry, InteractionError, InteractionId, InteractionKind,
    InteractionSession, Notification, SessionId, SessionState,
};
use common::{Oracles, RecordingCaster, RecordingNotifier, RecordingTarget, StaticCreatures};

const PLAYER: EntityId = EntityId(7);
const OBJECT: EntityId = EntityId(40);
const OBJECT_CREATURE: CreatureId = CreatureId(900);
const SESSION: SessionId = SessionId(1);
const A: AbilityId = AbilityId(11);
const B: AbilityId = AbilityId(12);
const C: AbilityId = AbilityId(13);

#[derive(Default)]
struct Harness {
    oracles: Oracles,
    caster: RecordingCaster,
    target: RecordingTarget,
    notifier: RecordingNotifier,
}

impl Harness {
    /// A harness whose target creature has no activation chain of its own.
    fn new() -> Self {
        Self::with_creature(CreatureEntry::new(OBJECT_CREATURE))
    }

    fn with_creature(entry: CreatureEntry) -> Self {
        Self {
            oracles: Oracles {
                creatures: StaticCreatures::default().with(entry),
                ..Oracles::default()
            },
            ..Self::default()
        }
    }

    fn run<R>(&mut self, f: impl FnOnce(&mut InteractionContext<'_>) -> R) -> R {
        let mut ctx = InteractionContext {
            env: self.oracles.env(),
            caster: &mut self.caster,
            target: &mut self.target,
            notifier: &mut self.notifier,
        };
        f(&mut ctx)
    }
}

fn session() -> InteractionSession {
    InteractionSession::new(SESSION, PLAYER, OBJECT, OBJECT_CREATURE, 77)
}

fn chained_session() -> InteractionSession {
    let mut session = session();
    session.set_interaction_data(Some(
        InteractionEntry::new(InteractionId(3), InteractionKind::PressAndHold)
            .with_chain([A, B, C, AbilityId::NONE]),
    ));
    session
}

#[test]
fn chain_walks_backwards_to_success() {
    let mut harness = Harness::new();
    let mut session = chained_session();
    assert_eq!(session.chain(), &[A, B, C]);

    assert_eq!(harness.run(|ctx| session.start(ctx)), Ok(ChainStep::Continued(C)));
    assert_eq!(
        harness.run(|ctx| session.handle_success(C, ctx)),
        Ok(ChainStep::Continued(B))
    );
    assert_eq!(
        harness.run(|ctx| session.handle_success(B, ctx)),
        Ok(ChainStep::Continued(A))
    );
    assert!(harness.target.successes.is_empty());

    assert_eq!(
        harness.run(|ctx| session.handle_success(A, ctx)),
        Ok(ChainStep::Succeeded)
    );
    assert_eq!(harness.caster.abilities(), vec![C, B, A]);
    assert_eq!(session.state(), SessionState::Success);
    assert_eq!(harness.target.successes, vec![PLAYER]);
    assert_eq!(
        harness.notifier.sessions,
        vec![(
            PLAYER,
            Notification::InteractionResult {
                client_unique_id: 77,
                target: OBJECT,
                success: true,
            }
        )]
    );
}

#[test]
fn chain_casts_carry_the_session_continuation() {
    let mut harness = Harness::new();
    let mut session = chained_session();
    harness.run(|ctx| session.handle_success(C, ctx)).unwrap();

    let cast = harness.caster.casts[0];
    assert_eq!(cast.ability, B);
    assert_eq!(cast.parameters.primary_target, Some(OBJECT));
    assert_eq!(cast.parameters.flags, CastFlags::USER_INITIATED);
    assert_eq!(
        cast.parameters.completion,
        Some(CastCompletion::Interaction {
            owner: PLAYER,
            session: SESSION,
        })
    );
}

#[test]
fn unknown_completion_stops_silently() {
    let mut harness = Harness::new();
    let mut session = chained_session();

    assert_eq!(
        harness.run(|ctx| session.handle_success(AbilityId(99), ctx)),
        Ok(ChainStep::Stopped)
    );
    assert!(harness.caster.casts.is_empty());
    assert!(harness.target.successes.is_empty());
    assert!(harness.target.failures.is_empty());
    assert_eq!(session.state(), SessionState::Created);
}

#[test]
fn search_starts_from_the_end() {
    let mut harness = Harness::new();
    let mut session = session();
    session.set_interaction_data(Some(
        InteractionEntry::new(InteractionId(3), InteractionKind::Interaction)
            .with_chain([A, B, A, C]),
    ));

    assert_eq!(
        harness.run(|ctx| session.handle_success(A, ctx)),
        Ok(ChainStep::Continued(B))
    );
}

#[test]
fn creature_chain_is_used_without_interaction_data() {
    let creature = CreatureEntry::new(OBJECT_CREATURE)
        .with_activate_spells([A, B, AbilityId::NONE, AbilityId::NONE]);
    let mut harness = Harness::with_creature(creature);
    let mut session = session();

    assert_eq!(harness.run(|ctx| session.start(ctx)), Ok(ChainStep::Continued(B)));
    assert_eq!(
        harness.run(|ctx| session.handle_success(B, ctx)),
        Ok(ChainStep::Continued(A))
    );
    assert_eq!(
        harness.run(|ctx| session.handle_success(A, ctx)),
        Ok(ChainStep::Succeeded)
    );
}

#[test]
fn empty_chain_succeeds_on_start() {
    let mut harness = Harness::with_creature(CreatureEntry::new(OBJECT_CREATURE));
    let mut session = session();

    assert_eq!(harness.run(|ctx| session.start(ctx)), Ok(ChainStep::Succeeded));
    assert_eq!(harness.target.successes, vec![PLAYER]);
}

#[test]
fn missing_creature_entry_is_fatal() {
    let mut harness = Harness::default();
    let mut session = session();

    assert_eq!(
        harness.run(|ctx| session.handle_success(A, ctx)),
        Err(InteractionError::MissingCreatureEntry(OBJECT_CREATURE))
    );
}

#[test]
fn missing_creature_entry_is_fatal_with_attached_chain() {
    let mut harness = Harness::default();
    let mut session = chained_session();

    assert_eq!(
        harness.run(|ctx| session.handle_success(C, ctx)),
        Err(InteractionError::MissingCreatureEntry(OBJECT_CREATURE))
    );
    assert_eq!(
        harness.run(|ctx| session.start(ctx)),
        Err(InteractionError::MissingCreatureEntry(OBJECT_CREATURE))
    );
    assert!(harness.caster.casts.is_empty());
}

#[test]
fn attached_chain_takes_precedence_over_the_creature_chain() {
    let creature = CreatureEntry::new(OBJECT_CREATURE)
        .with_activate_spells([A, AbilityId::NONE, AbilityId::NONE, AbilityId::NONE]);
    let mut harness = Harness::with_creature(creature);
    let mut session = chained_session();

    assert_eq!(harness.run(|ctx| session.start(ctx)), Ok(ChainStep::Continued(C)));
}

#[test]
fn clearing_interaction_data_resets_kind_and_chain() {
    let mut session = chained_session();
    assert_eq!(session.kind(), InteractionKind::PressAndHold);

    session.set_interaction_data(None);
    assert_eq!(session.kind(), InteractionKind::Interaction);
    assert!(session.chain().is_empty());
    assert!(session.entry().is_none());
}

#[test]
fn outcome_hooks_fire_at_most_once() {
    let mut harness = Harness::new();
    let mut session = chained_session();
    session.trigger_ready();
    assert_eq!(session.state(), SessionState::Ready);

    assert!(harness.run(|ctx| session.trigger_fail(ctx)));
    assert!(!harness.run(|ctx| session.trigger_success(ctx)));
    assert!(!harness.run(|ctx| session.trigger_fail(ctx)));

    assert_eq!(session.state(), SessionState::Fail);
    assert_eq!(harness.target.failures, vec![PLAYER]);
    assert!(harness.target.successes.is_empty());
    assert_eq!(harness.notifier.sessions.len(), 1);

    assert_eq!(
        harness.run(|ctx| session.handle_success(A, ctx)),
        Ok(ChainStep::Stopped)
    );
}

#[test]
fn ready_does_not_end_the_session() {
    let mut harness = Harness::new();
    let mut session = chained_session();
    session.trigger_ready();

    assert_eq!(
        harness.run(|ctx| session.handle_success(A, ctx)),
        Ok(ChainStep::Succeeded)
    );
    assert_eq!(session.state(), SessionState::Success);
}
