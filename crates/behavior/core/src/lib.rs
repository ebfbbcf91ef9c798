//! Real-time unit behavior for a simulated game world.
//!
//! The crate is pure and synchronous. Hosts drive it once per tick and supply
//! every side effect through collaborator traits: movement
//! ([`MovementController`]), ability casting ([`SpellCaster`]), outbound
//! messages ([`Notifier`]) and read-only static data ([`BehaviorEnv`]).
//!
//! Components, leaves first:
//! - [`timer`]: simulation-time countdowns
//! - [`threat`]: per-unit ranking of hostiles with observer callbacks
//! - [`ai`]: the combat state machine driving a unit
//! - [`interaction`]: player activation sessions walking an ability chain
//! - [`prerequisite`]: the rule engine gating player actions
pub mod ai;
pub mod cast;
pub mod config;
pub mod env;
pub mod error;
pub mod interaction;
pub mod notify;
pub mod prerequisite;
pub mod state;
pub mod threat;
pub mod timer;

pub use ai::{
    AiContext, AiController, AiError, AiProfile, AiState, MovementController, TickOutcome,
};
pub use cast::{CastCompletion, CastFlags, CastParameters, CastRequest, SpellCaster};
pub use config::BehaviorConfig;
pub use env::{
    AbilityChain, AbilityEntry, AbilityOracle, AccountCurrency, AccountOracle, BehaviorEnv,
    CreatureEntry, CreatureOracle, Env, InteractionEntry, InteractionKind, InteractionOracle,
    OracleError, PrerequisiteCheck, PrerequisiteEntry, PrerequisiteFlags, PrerequisiteOracle,
    SpecialAbility,
};
pub use error::{BehaviorError, ErrorSeverity};
pub use interaction::{
    ActivationTarget, ChainStep, InteractionContext, InteractionError, InteractionSession,
    SessionState,
};
pub use notify::{Notification, Notifier};
pub use prerequisite::{
    Comparison, PrerequisiteEngine, PrerequisiteError, PrerequisitePlayer, PrerequisiteRegistry,
    PrerequisiteType,
};
pub use state::{
    AbilityId, ControlledUnit, CreatureId, EntityId, InteractionId, Leash, Position,
    PrerequisiteId, ResourceMeter, SessionId, UnitState, UnitView,
};
pub use threat::{NullThreatObserver, ThreatEntry, ThreatObserver, ThreatTable};
pub use timer::CountdownTimer;
