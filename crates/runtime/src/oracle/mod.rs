//! Runtime wrappers around static behavior content.
//!
//! These implementations expose `behavior-core` oracle traits and bundle them
//! into an [`OracleManager`] so the runtime can build [`BehaviorEnv`]
//! snapshots on demand. Catalog data is immutable once loaded; only account
//! balances change at runtime.
mod abilities;
mod accounts;
mod creatures;
mod interactions;
mod prerequisites;

use std::sync::Arc;

use behavior_content::ContentBundle;
use behavior_core::{BehaviorEnv, Env};

pub use abilities::AbilityOracleImpl;
pub use accounts::AccountOracleImpl;
pub use creatures::CreatureOracleImpl;
pub use interactions::InteractionOracleImpl;
pub use prerequisites::PrerequisiteOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone, Default)]
pub struct OracleManager {
    pub(crate) abilities: Arc<AbilityOracleImpl>,
    pub(crate) creatures: Arc<CreatureOracleImpl>,
    pub(crate) interactions: Arc<InteractionOracleImpl>,
    pub(crate) prerequisites: Arc<PrerequisiteOracleImpl>,
    pub(crate) accounts: Arc<AccountOracleImpl>,
}

impl OracleManager {
    pub fn new(
        abilities: Arc<AbilityOracleImpl>,
        creatures: Arc<CreatureOracleImpl>,
        interactions: Arc<InteractionOracleImpl>,
        prerequisites: Arc<PrerequisiteOracleImpl>,
        accounts: Arc<AccountOracleImpl>,
    ) -> Self {
        Self {
            abilities,
            creatures,
            interactions,
            prerequisites,
            accounts,
        }
    }

    /// Builds every catalog oracle from loaded content, with empty balances.
    pub fn from_content(content: &ContentBundle) -> Self {
        Self::new(
            Arc::new(AbilityOracleImpl::from_entries(
                content.abilities.iter().copied(),
            )),
            Arc::new(CreatureOracleImpl::from_entries(
                content.creatures.iter().cloned(),
            )),
            Arc::new(InteractionOracleImpl::from_entries(
                content.interactions.iter().cloned(),
            )),
            Arc::new(PrerequisiteOracleImpl::from_entries(
                content.prerequisites.iter().cloned(),
            )),
            Arc::new(AccountOracleImpl::new()),
        )
    }

    /// Converts oracle manager into the environment behavior-core consumes
    pub fn as_behavior_env(&self) -> BehaviorEnv<'_> {
        Env::with_all(
            self.abilities.as_ref(),
            self.creatures.as_ref(),
            self.interactions.as_ref(),
            self.prerequisites.as_ref(),
            self.accounts.as_ref(),
        )
        .into_behavior_env()
    }

    pub fn abilities(&self) -> &AbilityOracleImpl {
        &self.abilities
    }

    pub fn creatures(&self) -> &CreatureOracleImpl {
        &self.creatures
    }

    pub fn interactions(&self) -> &InteractionOracleImpl {
        &self.interactions
    }

    pub fn prerequisites(&self) -> &PrerequisiteOracleImpl {
        &self.prerequisites
    }

    /// Live account balances; shared by every clone of this manager.
    pub fn accounts(&self) -> &AccountOracleImpl {
        &self.accounts
    }
}
