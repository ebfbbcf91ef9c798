use tracing::trace;

use super::{
    Comparison, PrerequisiteError, PrerequisitePlayer, PrerequisiteRegistry, PrerequisiteType,
};
use crate::config::BehaviorConfig;
use crate::env::{BehaviorEnv, PrerequisiteCheck};
use crate::state::PrerequisiteId;

/// Evaluates named prerequisite rules against a player.
#[derive(Clone, Copy, Debug)]
pub struct PrerequisiteEngine<'a> {
    registry: &'a PrerequisiteRegistry,
    env: BehaviorEnv<'a>,
}

impl<'a> PrerequisiteEngine<'a> {
    pub fn new(registry: &'a PrerequisiteRegistry, env: BehaviorEnv<'a>) -> Self {
        Self { registry, env }
    }

    /// Engine backed by [`PrerequisiteRegistry::global`].
    pub fn with_global_registry(env: BehaviorEnv<'a>) -> Self {
        Self::new(PrerequisiteRegistry::global(), env)
    }

    pub fn env(&self) -> BehaviorEnv<'a> {
        self.env
    }

    /// Returns whether `player` satisfies `rule`.
    ///
    /// # Errors
    ///
    /// Returns an error when the rule or one of its checks cannot be
    /// interpreted: unknown rule id, unknown or unregistered rule type, rules
    /// nested deeper than [`BehaviorConfig::MAX_PREREQUISITE_DEPTH`], or a
    /// missing oracle.
    pub fn meets(
        &self,
        player: &dyn PrerequisitePlayer,
        rule: PrerequisiteId,
    ) -> Result<bool, PrerequisiteError> {
        self.evaluate(player, rule, 0)
    }

    fn evaluate(
        &self,
        player: &dyn PrerequisitePlayer,
        rule: PrerequisiteId,
        depth: usize,
    ) -> Result<bool, PrerequisiteError> {
        if depth >= BehaviorConfig::MAX_PREREQUISITE_DEPTH {
            return Err(PrerequisiteError::DepthExceeded {
                rule,
                limit: BehaviorConfig::MAX_PREREQUISITE_DEPTH,
            });
        }
        let entry = self
            .env
            .prerequisites()?
            .prerequisite(rule)
            .ok_or(PrerequisiteError::RuleNotFound(rule))?;

        let any = entry.evaluates_any();
        for check in &entry.checks {
            let passed = self.evaluate_check(player, check, depth)?;
            if passed == any {
                trace!(
                    target: "behavior::prerequisite",
                    rule = %rule,
                    player = %player.id(),
                    result = passed,
                    "rule decided early"
                );
                return Ok(passed);
            }
        }
        // Every check failed under EVALUATE_ANY, or every check passed
        // otherwise; an entry without checks passes.
        Ok(!any || entry.checks.is_empty())
    }

    fn evaluate_check(
        &self,
        player: &dyn PrerequisitePlayer,
        check: &PrerequisiteCheck,
        depth: usize,
    ) -> Result<bool, PrerequisiteError> {
        let kind = PrerequisiteType::from_repr(check.kind)
            .ok_or(PrerequisiteError::UnknownType(check.kind))?;
        let predicate = self
            .registry
            .get(kind)
            .ok_or(PrerequisiteError::UnregisteredType(kind))?;
        let ctx = CheckContext {
            engine: self,
            player,
            depth,
        };
        predicate(
            &ctx,
            Comparison::from_repr(check.comparison),
            check.value,
            check.object_id,
        )
    }
}

/// State handed to a predicate while it evaluates one check.
pub struct CheckContext<'c, 'a> {
    engine: &'c PrerequisiteEngine<'a>,
    pub player: &'c dyn PrerequisitePlayer,
    depth: usize,
}

impl<'a> CheckContext<'_, 'a> {
    pub fn env(&self) -> BehaviorEnv<'a> {
        self.engine.env
    }

    /// Evaluates another rule one level deeper.
    ///
    /// # Errors
    ///
    /// See [`PrerequisiteEngine::meets`].
    pub fn evaluate_nested(&self, rule: PrerequisiteId) -> Result<bool, PrerequisiteError> {
        self.engine.evaluate(self.player, rule, self.depth + 1)
    }
}
