use crate::state::{EntityId, Position};

/// Movement collaborator driven by the AI controller.
///
/// Path finding and spline interpolation happen behind this trait; the
/// controller only states intent.
pub trait MovementController {
    /// Follows `target` at `speed`, stopping once within `max_range`.
    fn chase(&mut self, target: EntityId, speed: f32, max_range: f32);

    /// Moves towards `point`; returns true once the point has been reached.
    fn move_to(&mut self, point: Position, speed: f32) -> bool;

    fn stop_current_path(&mut self);

    /// Turns to `rotation` (radians), snapping when `immediate` is set.
    fn set_facing(&mut self, rotation: f32, immediate: bool);

    /// Flushes queued movement commands to observers.
    fn broadcast_pending_commands(&mut self);
}
