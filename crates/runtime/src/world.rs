//! Positions and liveness of every unit the runtime knows about.
use std::collections::HashMap;

use behavior_core::{ControlledUnit, EntityId, Position, UnitState, UnitView};

#[derive(Clone, Copy, Debug, PartialEq)]
struct UnitRecord {
    position: Position,
    alive: bool,
}

/// World-wide [`UnitView`] shared by every controller during a tick.
///
/// Creatures are mirrored here by the runtime; other units (players, pets)
/// are placed by the host.
#[derive(Clone, Debug, Default)]
pub struct UnitDirectory {
    units: HashMap<EntityId, UnitRecord>,
}

impl UnitDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a live unit, or moves it if it is already known.
    pub fn place(&mut self, id: EntityId, position: Position) {
        self.units
            .entry(id)
            .and_modify(|r| r.position = position)
            .or_insert(UnitRecord {
                position,
                alive: true,
            });
    }

    /// Returns false if the unit is unknown.
    pub fn set_alive(&mut self, id: EntityId, alive: bool) -> bool {
        match self.units.get_mut(&id) {
            Some(record) => {
                record.alive = alive;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: EntityId) -> bool {
        self.units.remove(&id).is_some()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.units.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub(crate) fn sync(&mut self, unit: &UnitState) {
        self.units.insert(
            unit.id,
            UnitRecord {
                position: unit.position,
                alive: ControlledUnit::is_alive(unit),
            },
        );
    }
}

impl UnitView for UnitDirectory {
    fn is_alive(&self, id: EntityId) -> bool {
        self.units.get(&id).is_some_and(|r| r.alive)
    }

    fn position(&self, id: EntityId) -> Option<Position> {
        self.units.get(&id).map(|r| r.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_units_are_dead() {
        let world = UnitDirectory::new();
        assert!(!world.is_alive(EntityId(1)));
        assert_eq!(world.position(EntityId(1)), None);
    }

    #[test]
    fn placing_again_keeps_liveness() {
        let mut world = UnitDirectory::new();
        world.place(EntityId(1), Position::ORIGIN);
        assert!(world.set_alive(EntityId(1), false));

        world.place(EntityId(1), Position::new(1.0, 0.0, 0.0));
        assert!(!world.is_alive(EntityId(1)));
        assert_eq!(
            world.position(EntityId(1)),
            Some(Position::new(1.0, 0.0, 0.0))
        );
        assert!(!world.set_alive(EntityId(2), true));
    }
}
