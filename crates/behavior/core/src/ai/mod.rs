//! Per-unit combat state machine.
//!
//! Each tick the controller picks the highest live threat as its victim,
//! pursues it, and fires the creature's special ability and the alternating
//! auto-attacks on their cadences. When the threat table empties or the unit
//! strays past its leash radius, the controller clears the table and walks
//! back to the leash anchor before accepting new combat.
//!
//! Stages within one tick run in a fixed order and each may end the tick:
//! victim/leash check, movement, execution-delay gate, special ability,
//! auto-attack.
mod controller;
mod error;
mod movement;

pub use controller::{AiContext, AiController, AiProfile, AiState, TickOutcome};
pub use error::AiError;
pub use movement::MovementController;
