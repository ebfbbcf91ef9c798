//! Prerequisite rule table oracle.
//!
//! Entries keep their check fields as raw numbers exactly as authored; the
//! rule engine interprets them at evaluation time so that data referencing an
//! unknown rule type is reported as a configuration error instead of being
//! rejected at load.

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::BehaviorConfig;
use crate::state::PrerequisiteId;

bitflags! {
    /// Evaluation flags of a prerequisite entry.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct PrerequisiteFlags: u32 {
        /// Rule passes if any check passes (default: every check must pass).
        const EVALUATE_ANY = 1 << 0;
    }
}

/// One typed check of a prerequisite entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrerequisiteCheck {
    /// Raw rule-type identifier.
    pub kind: u32,
    /// Raw comparison operator.
    #[cfg_attr(feature = "serde", serde(default))]
    pub comparison: u32,
    /// Literal compared against the player fact.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: u32,
    /// Auxiliary object (quest id, achievement id, referenced rule id, ...).
    #[cfg_attr(feature = "serde", serde(default))]
    pub object_id: u32,
}

impl PrerequisiteCheck {
    pub const fn new(kind: u32, comparison: u32, value: u32, object_id: u32) -> Self {
        Self {
            kind,
            comparison,
            value,
            object_id,
        }
    }
}

pub type PrerequisiteChecks =
    ArrayVec<PrerequisiteCheck, { BehaviorConfig::MAX_PREREQUISITE_CHECKS }>;

/// A named, possibly composite, boolean condition.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrerequisiteEntry {
    pub id: PrerequisiteId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: PrerequisiteFlags,
    #[cfg_attr(feature = "serde", serde(default))]
    pub checks: PrerequisiteChecks,
}

impl PrerequisiteEntry {
    pub fn new(id: PrerequisiteId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: PrerequisiteFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Appends a check.
    ///
    /// # Panics
    ///
    /// Panics if the entry already holds
    /// [`BehaviorConfig::MAX_PREREQUISITE_CHECKS`] checks.
    #[must_use]
    pub fn with_check(mut self, check: PrerequisiteCheck) -> Self {
        self.checks.push(check);
        self
    }

    pub fn evaluates_any(&self) -> bool {
        self.flags.contains(PrerequisiteFlags::EVALUATE_ANY)
    }
}

/// Oracle providing prerequisite entries.
pub trait PrerequisiteOracle: Send + Sync {
    fn prerequisite(&self, id: PrerequisiteId) -> Option<PrerequisiteEntry>;
}
