//! Outbound notifications to observers and player sessions.

use crate::state::EntityId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
    /// The unit dropped out of combat and is heading back to its anchor.
    CombatExited { unit: EntityId },
    /// The unit reached its anchor after leaving combat.
    Evaded { unit: EntityId },
    /// Outcome of an interaction session, echoed with the client's id.
    InteractionResult {
        client_unique_id: u32,
        target: EntityId,
        success: bool,
    },
}

pub trait Notifier {
    /// Sends to every observer in range of `source`.
    fn broadcast_to_observers(&mut self, source: EntityId, notification: Notification);

    /// Sends to the session of `player` only.
    fn send_to_session(&mut self, player: EntityId, notification: Notification);
}
