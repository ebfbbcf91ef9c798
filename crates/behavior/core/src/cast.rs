//! Ability cast requests issued to the spell collaborator.

use bitflags::bitflags;

use crate::state::{AbilityId, EntityId, SessionId};

bitflags! {
    /// Flags attached to a cast request.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CastFlags: u32 {
        /// Cast on behalf of another unit.
        const PROXY = 1 << 0;
        /// Cast originated from a player action rather than AI.
        const USER_INITIATED = 1 << 1;
    }
}

/// One-shot continuation handed back by the spell collaborator when the cast
/// completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastCompletion {
    /// Route the completion to an interaction session's chain.
    Interaction { owner: EntityId, session: SessionId },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastParameters {
    pub primary_target: Option<EntityId>,
    pub completion: Option<CastCompletion>,
    pub flags: CastFlags,
}

impl CastParameters {
    pub fn targeting(target: EntityId) -> Self {
        Self {
            primary_target: Some(target),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastRequest {
    pub ability: AbilityId,
    pub parameters: CastParameters,
}

impl CastRequest {
    pub const fn new(ability: AbilityId, parameters: CastParameters) -> Self {
        Self {
            ability,
            parameters,
        }
    }
}

/// Fire-and-forget ability casting.
///
/// Implementations resolve the cast elsewhere and report completion by handing
/// the request's [`CastParameters::completion`] back to its owner.
pub trait SpellCaster {
    fn cast_spell(&mut self, request: CastRequest);
}
