//! Ownership of live interaction sessions.
//!
//! Each player has at most one open session. Cast completions reach their
//! session by id through [`CastCompletion`], so a completion for a session
//! that was replaced, resolved or expired is dropped quietly.
use std::collections::HashMap;
use std::time::Duration;

use behavior_core::{
    AbilityId, BehaviorEnv, CastCompletion, ChainStep, CountdownTimer, CreatureId, EntityId,
    InteractionContext, InteractionEntry, InteractionId, InteractionSession, SessionId,
};
use tracing::debug;

use crate::error::{Result, RuntimeError};

#[derive(Debug)]
struct Tracked {
    session: InteractionSession,
    expiry: Option<CountdownTimer>,
}

#[derive(Debug)]
pub struct SessionManager {
    sessions: HashMap<EntityId, Tracked>,
    next_id: u32,
    timeout: Option<Duration>,
}

impl SessionManager {
    /// `timeout` of `None` keeps sessions open until they resolve.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            sessions: HashMap::new(),
            next_id: 1,
            timeout,
        }
    }

    /// Opens a session for `owner`, replacing and returning any session the
    /// player already had. Replaced sessions are dropped without firing
    /// target hooks.
    pub fn open(
        &mut self,
        owner: EntityId,
        target: EntityId,
        target_creature: CreatureId,
        client_unique_id: u32,
    ) -> (SessionId, Option<InteractionSession>) {
        let id = SessionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1).max(1);

        let tracked = Tracked {
            session: InteractionSession::new(id, owner, target, target_creature, client_unique_id),
            expiry: self.timeout.map(|t| CountdownTimer::new(t, true)),
        };
        let replaced = self.sessions.insert(owner, tracked).map(|t| t.session);
        debug!(
            target: "runtime::sessions",
            session = %id,
            owner = %owner,
            target_unit = %target,
            replaced = replaced.is_some(),
            "session opened"
        );
        (id, replaced)
    }

    pub fn get(&self, owner: EntityId) -> Option<&InteractionSession> {
        self.sessions.get(&owner).map(|t| &t.session)
    }

    pub fn set_interaction_data(
        &mut self,
        owner: EntityId,
        entry: Option<InteractionEntry>,
    ) -> Result<()> {
        self.session_mut(owner)?.set_interaction_data(entry);
        Ok(())
    }

    /// Attaches the interaction entry `id` looked up from the oracle.
    pub fn attach_interaction(
        &mut self,
        owner: EntityId,
        id: InteractionId,
        env: &BehaviorEnv<'_>,
    ) -> Result<()> {
        let entry = env
            .interactions()?
            .interaction(id)
            .ok_or(RuntimeError::UnknownInteraction(id))?;
        self.set_interaction_data(owner, Some(entry))
    }

    pub fn trigger_ready(&mut self, owner: EntityId) -> Result<()> {
        self.session_mut(owner)?.trigger_ready();
        Ok(())
    }

    /// Casts the first link of the owner's chain.
    pub fn start(
        &mut self,
        owner: EntityId,
        ctx: &mut InteractionContext<'_>,
    ) -> Result<ChainStep> {
        let step = self.session_mut(owner)?.start(ctx)?;
        self.retire_if_resolved(owner);
        Ok(step)
    }

    /// Routes a finished cast back to the session named by its continuation.
    pub fn complete_cast(
        &mut self,
        completed: AbilityId,
        completion: CastCompletion,
        ctx: &mut InteractionContext<'_>,
    ) -> Result<ChainStep> {
        let CastCompletion::Interaction { owner, session } = completion;
        let Some(tracked) = self
            .sessions
            .get_mut(&owner)
            .filter(|t| t.session.id() == session)
        else {
            debug!(
                target: "runtime::sessions",
                session = %session,
                owner = %owner,
                ability = %completed,
                "completion for a session that is no longer open"
            );
            return Ok(ChainStep::Stopped);
        };
        let step = tracked.session.handle_success(completed, ctx)?;
        self.retire_if_resolved(owner);
        Ok(step)
    }

    /// Ends the owner's session successfully. Returns false if it had
    /// already resolved.
    pub fn succeed(&mut self, owner: EntityId, ctx: &mut InteractionContext<'_>) -> Result<bool> {
        let fired = self.session_mut(owner)?.trigger_success(ctx);
        self.retire_if_resolved(owner);
        Ok(fired)
    }

    /// Ends the owner's session as failed. Returns false if it had already
    /// resolved.
    pub fn fail(&mut self, owner: EntityId, ctx: &mut InteractionContext<'_>) -> Result<bool> {
        let fired = self.session_mut(owner)?.trigger_fail(ctx);
        self.retire_if_resolved(owner);
        Ok(fired)
    }

    /// Drops the owner's session without firing target hooks.
    pub fn close(&mut self, owner: EntityId) -> Option<InteractionSession> {
        self.sessions.remove(&owner).map(|t| t.session)
    }

    /// Advances expiry timers and removes sessions that ran out of time.
    pub fn update(&mut self, delta: Duration) -> Vec<InteractionSession> {
        let mut expired_owners = Vec::new();
        for (owner, tracked) in &mut self.sessions {
            if let Some(expiry) = &mut tracked.expiry {
                expiry.update(delta);
                if expiry.has_elapsed() {
                    expired_owners.push(*owner);
                }
            }
        }

        expired_owners
            .into_iter()
            .filter_map(|owner| self.sessions.remove(&owner))
            .map(|tracked| {
                debug!(
                    target: "runtime::sessions",
                    session = %tracked.session.id(),
                    owner = %tracked.session.owner(),
                    "session expired"
                );
                tracked.session
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn session_mut(&mut self, owner: EntityId) -> Result<&mut InteractionSession> {
        self.sessions
            .get_mut(&owner)
            .map(|t| &mut t.session)
            .ok_or(RuntimeError::NoSession(owner))
    }

    fn retire_if_resolved(&mut self, owner: EntityId) {
        if self
            .sessions
            .get(&owner)
            .is_some_and(|t| t.session.state().is_terminal())
        {
            self.sessions.remove(&owner);
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: EntityId = EntityId(1);
    const CHEST: EntityId = EntityId(50);

    #[test]
    fn reopening_replaces_the_previous_session() {
        let mut sessions = SessionManager::default();
        let (first, replaced) = sessions.open(PLAYER, CHEST, CreatureId(2), 1);
        assert!(replaced.is_none());

        let (second, replaced) = sessions.open(PLAYER, CHEST, CreatureId(2), 2);
        assert_ne!(first, second);
        assert_eq!(replaced.map(|s| s.id()), Some(first));
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions.get(PLAYER).map(|s| s.client_unique_id()), Some(2));
    }

    #[test]
    fn sessions_expire_after_the_timeout() {
        let mut sessions = SessionManager::new(Some(Duration::from_millis(100)));
        sessions.open(PLAYER, CHEST, CreatureId(2), 1);

        assert!(sessions.update(Duration::from_millis(60)).is_empty());
        let expired = sessions.update(Duration::from_millis(40));
        assert_eq!(expired.len(), 1);
        assert!(sessions.is_empty());
    }

    #[test]
    fn no_timeout_keeps_sessions_open() {
        let mut sessions = SessionManager::new(None);
        sessions.open(PLAYER, CHEST, CreatureId(2), 1);
        assert!(sessions.update(Duration::from_secs(3600)).is_empty());
        assert_eq!(sessions.len(), 1);
    }

    #[test]
    fn missing_session_is_an_error() {
        let mut sessions = SessionManager::default();
        assert!(matches!(
            sessions.trigger_ready(PLAYER),
            Err(RuntimeError::NoSession(PLAYER))
        ));
    }
}
