use tracing::debug;

use super::InteractionError;
use crate::cast::{CastCompletion, CastFlags, CastParameters, CastRequest, SpellCaster};
use crate::env::{AbilityChain, BehaviorEnv, InteractionEntry, InteractionKind};
use crate::notify::{Notification, Notifier};
use crate::state::{AbilityId, CreatureId, EntityId, SessionId};

/// Lifecycle of an interaction session.
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
pub enum SessionState {
    #[default]
    Created,
    /// Advisory; the session keeps running.
    Ready,
    Success,
    Fail,
}

impl SessionState {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Fail)
    }
}

/// The world object a player is activating.
pub trait ActivationTarget {
    fn on_activate_success(&mut self, player: EntityId);

    fn on_activate_fail(&mut self, player: EntityId);
}

/// Result of feeding a completed cast into the session chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainStep {
    /// The first ability of the chain completed; the session succeeded.
    Succeeded,
    /// The given ability was cast as the next link.
    Continued(AbilityId),
    /// The completed ability is not part of the chain; nothing happened.
    Stopped,
}

/// Collaborators borrowed while a session reacts to an event.
pub struct InteractionContext<'a> {
    pub env: BehaviorEnv<'a>,
    pub caster: &'a mut dyn SpellCaster,
    pub target: &'a mut dyn ActivationTarget,
    pub notifier: &'a mut dyn Notifier,
}

/// A player's activation of a world object.
///
/// The session walks an ordered chain of abilities from the end towards the
/// front; each completion casts the previous link until the first one
/// completes.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionSession {
    id: SessionId,
    owner: EntityId,
    target: EntityId,
    target_creature: CreatureId,
    client_unique_id: u32,
    entry: Option<InteractionEntry>,
    kind: InteractionKind,
    chain: AbilityChain,
    state: SessionState,
}

impl InteractionSession {
    pub fn new(
        id: SessionId,
        owner: EntityId,
        target: EntityId,
        target_creature: CreatureId,
        client_unique_id: u32,
    ) -> Self {
        Self {
            id,
            owner,
            target,
            target_creature,
            client_unique_id,
            entry: None,
            kind: InteractionKind::Interaction,
            chain: AbilityChain::new(),
            state: SessionState::Created,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn owner(&self) -> EntityId {
        self.owner
    }

    pub fn target(&self) -> EntityId {
        self.target
    }

    pub fn target_creature(&self) -> CreatureId {
        self.target_creature
    }

    pub fn client_unique_id(&self) -> u32 {
        self.client_unique_id
    }

    pub fn entry(&self) -> Option<&InteractionEntry> {
        self.entry.as_ref()
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Chain attached through [`Self::set_interaction_data`].
    pub fn chain(&self) -> &[AbilityId] {
        &self.chain
    }

    /// Attaches (or with `None`, detaches) the interaction entry.
    ///
    /// Detaching resets the kind to a generic interaction and clears the chain.
    pub fn set_interaction_data(&mut self, entry: Option<InteractionEntry>) {
        match entry {
            Some(entry) => {
                self.kind = entry.kind;
                self.chain = entry.ability_chain();
                self.entry = Some(entry);
            }
            None => {
                self.kind = InteractionKind::Interaction;
                self.chain.clear();
                self.entry = None;
            }
        }
    }

    /// Marks the session ready. Has no effect on the outcome.
    pub fn trigger_ready(&mut self) {
        if self.state == SessionState::Created {
            self.state = SessionState::Ready;
        }
    }

    /// Ends the session successfully. Returns false if it had already ended.
    pub fn trigger_success(&mut self, ctx: &mut InteractionContext<'_>) -> bool {
        if !self.finish(SessionState::Success) {
            return false;
        }
        ctx.target.on_activate_success(self.owner);
        self.send_result(ctx, true);
        true
    }

    /// Ends the session as failed. Returns false if it had already ended.
    pub fn trigger_fail(&mut self, ctx: &mut InteractionContext<'_>) -> bool {
        if !self.finish(SessionState::Fail) {
            return false;
        }
        ctx.target.on_activate_fail(self.owner);
        self.send_result(ctx, false);
        true
    }

    /// Casts the last ability of the chain, or succeeds at once if the chain
    /// is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the target's creature entry is missing.
    pub fn start(
        &mut self,
        ctx: &mut InteractionContext<'_>,
    ) -> Result<ChainStep, InteractionError> {
        if self.state.is_terminal() {
            return Ok(ChainStep::Stopped);
        }
        let chain = self.resolve_chain(&ctx.env)?;
        match chain.last() {
            Some(&first) if !first.is_none() => {
                self.cast_link(first, ctx);
                Ok(ChainStep::Continued(first))
            }
            Some(_) => Ok(ChainStep::Stopped),
            None => {
                self.trigger_success(ctx);
                Ok(ChainStep::Succeeded)
            }
        }
    }

    /// Advances the chain after `completed` finished casting.
    ///
    /// The chain is searched from the end; a match at the front succeeds the
    /// session, a match elsewhere casts the preceding link, no match stops
    /// silently.
    ///
    /// # Errors
    ///
    /// Returns an error if the target's creature entry is missing.
    pub fn handle_success(
        &mut self,
        completed: AbilityId,
        ctx: &mut InteractionContext<'_>,
    ) -> Result<ChainStep, InteractionError> {
        if self.state.is_terminal() || completed.is_none() {
            return Ok(ChainStep::Stopped);
        }
        let chain = self.resolve_chain(&ctx.env)?;
        match chain.iter().rposition(|&id| id == completed) {
            Some(0) => {
                self.trigger_success(ctx);
                Ok(ChainStep::Succeeded)
            }
            Some(index) => {
                let next = chain[index - 1];
                if next.is_none() {
                    debug!(
                        target: "behavior::interaction",
                        session = %self.id,
                        "chain link is empty, stopping"
                    );
                    return Ok(ChainStep::Stopped);
                }
                self.cast_link(next, ctx);
                Ok(ChainStep::Continued(next))
            }
            None => {
                debug!(
                    target: "behavior::interaction",
                    session = %self.id,
                    ability = %completed,
                    "completed ability not in chain"
                );
                Ok(ChainStep::Stopped)
            }
        }
    }

    /// The target's creature entry must exist even when interaction data
    /// supplies the chain.
    fn resolve_chain(&self, env: &BehaviorEnv<'_>) -> Result<AbilityChain, InteractionError> {
        let creature = env
            .creatures()?
            .creature(self.target_creature)
            .ok_or(InteractionError::MissingCreatureEntry(self.target_creature))?;
        if self.chain.is_empty() {
            Ok(creature.activation_chain())
        } else {
            Ok(self.chain.clone())
        }
    }

    fn cast_link(&self, ability: AbilityId, ctx: &mut InteractionContext<'_>) {
        debug!(
            target: "behavior::interaction",
            session = %self.id,
            ability = %ability,
            "casting chain link"
        );
        ctx.caster.cast_spell(CastRequest::new(
            ability,
            CastParameters {
                primary_target: Some(self.target),
                completion: Some(CastCompletion::Interaction {
                    owner: self.owner,
                    session: self.id,
                }),
                flags: CastFlags::USER_INITIATED,
            },
        ));
    }

    fn finish(&mut self, state: SessionState) -> bool {
        if self.state.is_terminal() {
            debug!(
                target: "behavior::interaction",
                session = %self.id,
                current = %self.state,
                requested = %state,
                "session already resolved"
            );
            return false;
        }
        self.state = state;
        true
    }

    fn send_result(&self, ctx: &mut InteractionContext<'_>, success: bool) {
        ctx.notifier.send_to_session(
            self.owner,
            Notification::InteractionResult {
                client_unique_id: self.client_unique_id,
                target: self.target,
                success,
            },
        );
    }
}
