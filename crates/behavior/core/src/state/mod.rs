//! Identifiers and unit-level state shared by every component.
mod common;
mod unit;

pub use common::{
    AbilityId, CreatureId, EntityId, InteractionId, Position, PrerequisiteId, ResourceMeter,
    SessionId,
};
pub use unit::{ControlledUnit, Leash, UnitState, UnitView};
