//! Unit-facing contracts consumed by the behavior engine.
//!
//! Units themselves live outside this crate; the engine only sees them through
//! [`ControlledUnit`] (the unit an [`crate::AiController`] drives) and
//! [`UnitView`] (read-only queries about any other unit in the world).

use super::{CreatureId, EntityId, Position, ResourceMeter};

/// Anchor a unit returns to when it disengages from combat.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leash {
    /// Point the unit walks back to.
    pub anchor: Position,
    /// Heading restored once the anchor is reached.
    pub anchor_facing: f32,
    /// Maximum distance from the anchor the unit may chase before giving up.
    pub radius: f32,
}

impl Leash {
    pub const fn new(anchor: Position, anchor_facing: f32, radius: f32) -> Self {
        Self {
            anchor,
            anchor_facing,
            radius,
        }
    }

    /// Returns true if `position` lies outside the leash radius.
    pub fn is_exceeded_by(&self, position: &Position) -> bool {
        position.distance(&self.anchor) > self.radius
    }
}

/// The unit an AI controller drives.
///
/// The controller never owns the unit; it reads these facts and writes back
/// the few pieces of state it is responsible for (target, health restore).
pub trait ControlledUnit {
    fn id(&self) -> EntityId;

    fn position(&self) -> Position;

    fn is_alive(&self) -> bool;

    fn is_casting(&self) -> bool;

    fn leash(&self) -> Leash;

    /// Multiplier applied to the base pursuit speed (1.0 = unmodified).
    fn movement_speed_multiplier(&self) -> f32;

    fn set_target(&mut self, target: Option<EntityId>);

    fn restore_full_health(&mut self);
}

/// Read-only queries about other units in the world.
pub trait UnitView {
    fn is_alive(&self, id: EntityId) -> bool;

    fn position(&self, id: EntityId) -> Option<Position>;
}

/// Plain-data unit used by hosts and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitState {
    pub id: EntityId,
    pub creature: CreatureId,
    pub position: Position,
    pub facing: f32,
    pub health: ResourceMeter,
    pub casting: bool,
    pub leash: Leash,
    pub movement_speed_multiplier: f32,
    pub target: Option<EntityId>,
}

impl UnitState {
    /// Creates a unit at full health whose leash anchor is its spawn point.
    pub fn new(
        id: EntityId,
        creature: CreatureId,
        position: Position,
        max_health: u32,
        leash_radius: f32,
    ) -> Self {
        Self {
            id,
            creature,
            position,
            facing: 0.0,
            health: ResourceMeter::full(max_health),
            casting: false,
            leash: Leash::new(position, 0.0, leash_radius),
            movement_speed_multiplier: 1.0,
            target: None,
        }
    }

    #[must_use]
    pub fn with_facing(mut self, facing: f32) -> Self {
        self.facing = facing;
        self.leash.anchor_facing = facing;
        self
    }

    #[must_use]
    pub fn with_speed_multiplier(mut self, multiplier: f32) -> Self {
        self.movement_speed_multiplier = multiplier;
        self
    }
}

impl ControlledUnit for UnitState {
    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Position {
        self.position
    }

    fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    fn is_casting(&self) -> bool {
        self.casting
    }

    fn leash(&self) -> Leash {
        self.leash
    }

    fn movement_speed_multiplier(&self) -> f32 {
        self.movement_speed_multiplier
    }

    fn set_target(&mut self, target: Option<EntityId>) {
        self.target = target;
    }

    fn restore_full_health(&mut self) {
        self.health.refill();
    }
}
