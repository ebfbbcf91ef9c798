//! Runtime host for the unit behavior engine.
//!
//! This crate wires static content, oracle access, per-unit threat tables and
//! controllers, and interaction sessions into one synchronous [`Runtime`].
//! Hosts supply movement, casting and messaging through the collaborator
//! traits of `behavior-core` and drive everything with [`Runtime::tick`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`creature`] pairs a unit with its threat table and controller
//! - [`sessions`] owns open interaction sessions and their expiry
//! - [`oracle`] adapts loaded content to the core oracle traits
//! - [`config`] and [`logging`] cover process setup
pub mod config;
pub mod creature;
pub mod error;
pub mod logging;
pub mod oracle;
pub mod player;
pub mod runtime;
pub mod sessions;
pub mod world;

pub use config::{LoggingConfig, RuntimeConfig};
pub use creature::{Creature, UnitIo};
pub use error::{Result, RuntimeError};
pub use logging::init_tracing;
pub use oracle::{
    AbilityOracleImpl, AccountOracleImpl, CreatureOracleImpl, InteractionOracleImpl,
    OracleManager, PrerequisiteOracleImpl,
};
pub use player::PlayerFacts;
pub use runtime::{Runtime, RuntimeBuilder, SessionIo, TickReport, UnitHost};
pub use sessions::SessionManager;
pub use world::UnitDirectory;
