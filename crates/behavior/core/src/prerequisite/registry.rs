use std::collections::HashMap;
use std::sync::OnceLock;

use super::{CheckContext, Comparison, PrerequisiteError, PrerequisiteType, checks};

/// Predicate evaluating one typed check: `(context, comparison, value, object_id)`.
pub type CheckFn =
    fn(&CheckContext<'_, '_>, Option<Comparison>, u32, u32) -> Result<bool, PrerequisiteError>;

/// Maps each rule type to exactly one predicate.
#[derive(Clone, Debug, Default)]
pub struct PrerequisiteRegistry {
    checks: HashMap<PrerequisiteType, CheckFn>,
}

impl PrerequisiteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in predicate bound.
    ///
    /// [`PrerequisiteType::Reputation`] is left unbound.
    pub fn standard() -> Self {
        let bindings: [(PrerequisiteType, CheckFn); 10] = [
            (PrerequisiteType::Level, checks::level),
            (PrerequisiteType::Race, checks::race),
            (PrerequisiteType::Class, checks::class),
            (PrerequisiteType::Faction, checks::faction),
            (PrerequisiteType::Quest, checks::quest),
            (PrerequisiteType::Achievement, checks::achievement),
            (PrerequisiteType::Prerequisite, checks::prerequisite),
            (PrerequisiteType::Spell, checks::spell),
            (PrerequisiteType::Path, checks::path),
            (PrerequisiteType::CosmicRewards, checks::cosmic_rewards),
        ];
        Self {
            checks: bindings.into_iter().collect(),
        }
    }

    /// Process-wide standard registry, built on first use.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<PrerequisiteRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::standard)
    }

    /// Binds `check` to `kind`.
    ///
    /// # Errors
    ///
    /// Returns `PrerequisiteError::DuplicateRegistration` if `kind` is already bound.
    pub fn register(
        &mut self,
        kind: PrerequisiteType,
        check: CheckFn,
    ) -> Result<(), PrerequisiteError> {
        if self.checks.contains_key(&kind) {
            return Err(PrerequisiteError::DuplicateRegistration(kind));
        }
        self.checks.insert(kind, check);
        Ok(())
    }

    pub fn get(&self, kind: PrerequisiteType) -> Option<CheckFn> {
        self.checks.get(&kind).copied()
    }

    pub fn contains(&self, kind: PrerequisiteType) -> bool {
        self.checks.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}
