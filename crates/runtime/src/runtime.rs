//! High-level runtime orchestrator.
//!
//! The runtime owns every AI-driven creature, the world directory their
//! controllers read, and the open interaction sessions. Hosts drive it with
//! [`Runtime::tick`] and feed it world events (damage, movement, threat, cast
//! completions) between ticks.

use std::collections::BTreeMap;
use std::time::Duration;

use behavior_content::{ContentBundle, ContentFactory};
use behavior_core::{
    ActivationTarget, BehaviorConfig, CastRequest, ChainStep, ControlledUnit, CreatureId,
    EntityId, InteractionContext, InteractionId, InteractionSession, Notifier, Position,
    PrerequisiteEngine, PrerequisiteId, PrerequisitePlayer, PrerequisiteRegistry, SessionId,
    SpellCaster, TickOutcome, UnitState,
};
use tracing::{debug, error, info};

use crate::config::RuntimeConfig;
use crate::creature::{Creature, UnitIo};
use crate::error::{Result, RuntimeError};
use crate::oracle::OracleManager;
use crate::sessions::SessionManager;
use crate::world::UnitDirectory;

/// Supplies per-unit side-effect collaborators during a tick.
pub trait UnitHost {
    fn bind(&mut self, unit: EntityId) -> UnitIo<'_>;
}

/// Collaborators for session operations.
pub struct SessionIo<'a> {
    pub caster: &'a mut dyn SpellCaster,
    pub target: &'a mut dyn ActivationTarget,
    pub notifier: &'a mut dyn Notifier,
}

/// What happened during one [`Runtime::tick`].
#[derive(Debug, Default)]
pub struct TickReport {
    pub outcomes: Vec<(EntityId, TickOutcome)>,
    /// Controllers whose update failed; the rest of the tick still ran.
    pub failures: Vec<RuntimeError>,
    pub expired_sessions: Vec<InteractionSession>,
}

impl TickReport {
    pub fn outcome(&self, unit: EntityId) -> Option<TickOutcome> {
        self.outcomes
            .iter()
            .find(|(id, _)| *id == unit)
            .map(|(_, outcome)| *outcome)
    }
}

/// Main runtime that drives unit behavior
pub struct Runtime {
    config: RuntimeConfig,
    behavior: BehaviorConfig,
    oracles: OracleManager,
    registry: &'static PrerequisiteRegistry,
    world: UnitDirectory,
    creatures: BTreeMap<EntityId, Creature>,
    sessions: SessionManager,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn behavior_config(&self) -> &BehaviorConfig {
        &self.behavior
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn world(&self) -> &UnitDirectory {
        &self.world
    }

    /// Units not driven by the runtime (players, pets) are placed here.
    pub fn world_mut(&mut self) -> &mut UnitDirectory {
        &mut self.world
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub fn creature(&self, id: EntityId) -> Option<&Creature> {
        self.creatures.get(&id)
    }

    pub fn creatures(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.values()
    }

    /// Starts driving `unit` with a controller built from its creature entry.
    pub fn spawn(&mut self, unit: UnitState) -> Result<()> {
        if self.creatures.contains_key(&unit.id) {
            return Err(RuntimeError::DuplicateUnit(unit.id));
        }
        let entry = self
            .oracles
            .as_behavior_env()
            .creatures()?
            .creature(unit.creature)
            .ok_or(RuntimeError::MissingCreatureEntry(unit.creature))?;

        debug!(
            target: "runtime",
            unit = %unit.id,
            creature = %unit.creature,
            "creature spawned"
        );
        self.world.sync(&unit);
        self.creatures
            .insert(unit.id, Creature::new(&self.behavior, &entry, unit));
        Ok(())
    }

    pub fn despawn(&mut self, id: EntityId) -> Option<Creature> {
        let creature = self.creatures.remove(&id)?;
        self.world.remove(id);
        Some(creature)
    }

    pub fn move_unit(&mut self, id: EntityId, position: Position) -> Result<()> {
        let creature = self.creature_mut(id)?;
        creature.unit_mut().position = position;
        let unit = creature.unit().clone();
        self.world.sync(&unit);
        Ok(())
    }

    pub fn set_casting(&mut self, id: EntityId, casting: bool) -> Result<()> {
        self.creature_mut(id)?.unit_mut().casting = casting;
        Ok(())
    }

    /// Applies damage and returns whether the unit is still alive.
    pub fn apply_damage(&mut self, id: EntityId, amount: u32) -> Result<bool> {
        let creature = self.creature_mut(id)?;
        let health = &mut creature.unit_mut().health;
        health.current = health.current.saturating_sub(amount);
        let unit = creature.unit().clone();
        self.world.sync(&unit);
        Ok(unit.is_alive())
    }

    pub fn add_threat(&mut self, id: EntityId, hostile: EntityId, amount: u64) -> Result<()> {
        let creature = self
            .creatures
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownUnit(id))?;
        creature.add_threat(hostile, amount, &self.world);
        Ok(())
    }

    pub fn remove_threat(&mut self, id: EntityId, hostile: EntityId) -> Result<bool> {
        let creature = self
            .creatures
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownUnit(id))?;
        Ok(creature.remove_threat(hostile, &self.world))
    }

    pub fn adjust_threat(&mut self, id: EntityId, hostile: EntityId, delta: i64) -> Result<bool> {
        let creature = self
            .creatures
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownUnit(id))?;
        Ok(creature.adjust_threat(hostile, delta, &self.world))
    }

    pub fn add_execution_delay(&mut self, id: EntityId, ms: u32) -> Result<()> {
        self.creature_mut(id)?.add_execution_delay(ms);
        Ok(())
    }

    /// Forces `id` out of combat. Returns false if it was not fighting.
    pub fn exit_combat(&mut self, id: EntityId, host: &mut dyn UnitHost) -> Result<bool> {
        let env = self.oracles.as_behavior_env();
        let creature = self
            .creatures
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownUnit(id))?;
        Ok(creature.exit_combat(&self.world, host.bind(id), env))
    }

    /// Advances every creature controller and session expiry by `delta`.
    ///
    /// A controller that fails is reported and skipped; it does not stop the
    /// others.
    pub fn tick(&mut self, delta: Duration, host: &mut dyn UnitHost) -> TickReport {
        let env = self.oracles.as_behavior_env();
        let mut report = TickReport::default();

        for (&id, creature) in &mut self.creatures {
            match creature.update(delta, &self.world, host.bind(id), env) {
                Ok(outcome) => report.outcomes.push((id, outcome)),
                Err(source) => {
                    error!(target: "runtime", unit = %id, error = %source, "AI update failed");
                    report.failures.push(RuntimeError::Ai { unit: id, source });
                }
            }
            self.world.sync(creature.unit());
        }

        report.expired_sessions = self.sessions.update(delta);
        report
    }

    /// Opens an interaction session between `owner` and the object `target`.
    ///
    /// Returns the new session id and the session it replaced, if any.
    pub fn open_session(
        &mut self,
        owner: EntityId,
        target: EntityId,
        target_creature: CreatureId,
        client_unique_id: u32,
    ) -> (SessionId, Option<InteractionSession>) {
        self.sessions
            .open(owner, target, target_creature, client_unique_id)
    }

    pub fn attach_interaction(&mut self, owner: EntityId, id: InteractionId) -> Result<()> {
        let env = self.oracles.as_behavior_env();
        self.sessions.attach_interaction(owner, id, &env)
    }

    pub fn trigger_session_ready(&mut self, owner: EntityId) -> Result<()> {
        self.sessions.trigger_ready(owner)
    }

    pub fn start_session(&mut self, owner: EntityId, io: SessionIo<'_>) -> Result<ChainStep> {
        let mut ctx = interaction_context(&self.oracles, io);
        self.sessions.start(owner, &mut ctx)
    }

    /// Feeds a completed cast back into the session chain it belongs to.
    ///
    /// Casts without an interaction continuation are ignored.
    pub fn complete_cast(&mut self, request: &CastRequest, io: SessionIo<'_>) -> Result<ChainStep> {
        let Some(completion) = request.parameters.completion else {
            return Ok(ChainStep::Stopped);
        };
        let mut ctx = interaction_context(&self.oracles, io);
        self.sessions
            .complete_cast(request.ability, completion, &mut ctx)
    }

    pub fn succeed_session(&mut self, owner: EntityId, io: SessionIo<'_>) -> Result<bool> {
        let mut ctx = interaction_context(&self.oracles, io);
        self.sessions.succeed(owner, &mut ctx)
    }

    pub fn fail_session(&mut self, owner: EntityId, io: SessionIo<'_>) -> Result<bool> {
        let mut ctx = interaction_context(&self.oracles, io);
        self.sessions.fail(owner, &mut ctx)
    }

    pub fn close_session(&mut self, owner: EntityId) -> Option<InteractionSession> {
        self.sessions.close(owner)
    }

    /// Returns whether `player` satisfies the prerequisite rule `rule`.
    pub fn meets_prerequisite(
        &self,
        player: &dyn PrerequisitePlayer,
        rule: PrerequisiteId,
    ) -> Result<bool> {
        let engine = PrerequisiteEngine::new(self.registry, self.oracles.as_behavior_env());
        Ok(engine.meets(player, rule)?)
    }

    fn creature_mut(&mut self, id: EntityId) -> Result<&mut Creature> {
        self.creatures
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownUnit(id))
    }
}

/// Builder for [`Runtime`] with flexible configuration.
#[derive(Default)]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    behavior: Option<BehaviorConfig>,
    content: Option<ContentBundle>,
    oracles: Option<OracleManager>,
    registry: Option<&'static PrerequisiteRegistry>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override engine tuning; defaults to the content's `behavior.toml`.
    pub fn behavior_config(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = Some(behavior);
        self
    }

    /// Use already loaded content.
    pub fn content(mut self, content: ContentBundle) -> Self {
        self.content = Some(content);
        self
    }

    /// Use the content shipped with `behavior-content`.
    pub fn bundled_content(self) -> Result<Self> {
        let factory = ContentFactory::bundled();
        let content = load_content(&factory)?;
        Ok(self.content(content))
    }

    /// Use prebuilt oracles instead of content; takes precedence over
    /// [`Self::content`].
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Use a custom rule registry instead of the standard one.
    pub fn registry(mut self, registry: &'static PrerequisiteRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the runtime.
    ///
    /// Content comes from, in order: explicit oracles, explicit content, or
    /// [`RuntimeConfig::content_dir`].
    pub fn build(self) -> Result<Runtime> {
        let content = match (self.content, &self.config.content_dir) {
            (Some(content), _) => Some(content),
            (None, Some(dir)) => Some(load_content(&ContentFactory::new(dir))?),
            (None, None) => None,
        };

        let (oracles, content_config) = match (self.oracles, content) {
            (Some(oracles), content) => (oracles, content.map(|c| c.config)),
            (None, Some(content)) => (OracleManager::from_content(&content), Some(content.config)),
            (None, None) => return Err(RuntimeError::MissingOracles),
        };
        let behavior = self.behavior.or(content_config).unwrap_or_default();
        let sessions = SessionManager::new(self.config.session_timeout());

        info!(
            target: "runtime",
            abilities = oracles.abilities().len(),
            creatures = oracles.creatures().len(),
            interactions = oracles.interactions().len(),
            prerequisites = oracles.prerequisites().len(),
            session_timeout_ms = self.config.session_timeout_ms,
            "runtime built"
        );

        Ok(Runtime {
            config: self.config,
            behavior,
            oracles,
            registry: self.registry.unwrap_or_else(PrerequisiteRegistry::global),
            world: UnitDirectory::new(),
            creatures: BTreeMap::new(),
            sessions,
        })
    }
}

fn interaction_context<'a, 'io: 'a>(
    oracles: &'a OracleManager,
    io: SessionIo<'io>,
) -> InteractionContext<'a> {
    InteractionContext {
        env: oracles.as_behavior_env(),
        caster: io.caster,
        target: io.target,
        notifier: io.notifier,
    }
}

fn load_content(factory: &ContentFactory) -> Result<ContentBundle> {
    factory
        .load_bundle()
        .map_err(|e| RuntimeError::Content {
            path: factory.data_dir().to_path_buf(),
            source: e.into(),
        })
}
