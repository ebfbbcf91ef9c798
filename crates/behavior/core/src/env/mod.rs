//! Traits describing read-only game data.
//!
//! Oracles expose the static ability, creature, interaction and prerequisite
//! tables plus the account currency lookup. The [`Env`] aggregate bundles them
//! so components can read everything they need without process-wide
//! singletons or hard coupling to concrete implementations.
mod abilities;
mod accounts;
mod creatures;
mod error;
mod interactions;
mod prerequisites;

pub use abilities::{AbilityChain, AbilityEntry, AbilityOracle, chain_from_slots};
pub use accounts::{AccountCurrency, AccountOracle};
pub use creatures::{CreatureEntry, CreatureOracle, SpecialAbility};
pub use error::OracleError;
pub use interactions::{InteractionEntry, InteractionKind, InteractionOracle};
pub use prerequisites::{
    PrerequisiteCheck, PrerequisiteChecks, PrerequisiteEntry, PrerequisiteFlags,
    PrerequisiteOracle,
};

/// Aggregates the read-only oracles required by the behavior components.
pub struct Env<'a, S, C, I, P, A>
where
    S: AbilityOracle + ?Sized,
    C: CreatureOracle + ?Sized,
    I: InteractionOracle + ?Sized,
    P: PrerequisiteOracle + ?Sized,
    A: AccountOracle + ?Sized,
{
    abilities: Option<&'a S>,
    creatures: Option<&'a C>,
    interactions: Option<&'a I>,
    prerequisites: Option<&'a P>,
    accounts: Option<&'a A>,
}

// Manual impls: derives would require the (unsized) oracle types themselves to
// be Clone/Debug.
impl<S, C, I, P, A> Clone for Env<'_, S, C, I, P, A>
where
    S: AbilityOracle + ?Sized,
    C: CreatureOracle + ?Sized,
    I: InteractionOracle + ?Sized,
    P: PrerequisiteOracle + ?Sized,
    A: AccountOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, C, I, P, A> Copy for Env<'_, S, C, I, P, A>
where
    S: AbilityOracle + ?Sized,
    C: CreatureOracle + ?Sized,
    I: InteractionOracle + ?Sized,
    P: PrerequisiteOracle + ?Sized,
    A: AccountOracle + ?Sized,
{
}

impl<S, C, I, P, A> std::fmt::Debug for Env<'_, S, C, I, P, A>
where
    S: AbilityOracle + ?Sized,
    C: CreatureOracle + ?Sized,
    I: InteractionOracle + ?Sized,
    P: PrerequisiteOracle + ?Sized,
    A: AccountOracle + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("abilities", &self.abilities.is_some())
            .field("creatures", &self.creatures.is_some())
            .field("interactions", &self.interactions.is_some())
            .field("prerequisites", &self.prerequisites.is_some())
            .field("accounts", &self.accounts.is_some())
            .finish()
    }
}

pub type BehaviorEnv<'a> = Env<
    'a,
    dyn AbilityOracle + 'a,
    dyn CreatureOracle + 'a,
    dyn InteractionOracle + 'a,
    dyn PrerequisiteOracle + 'a,
    dyn AccountOracle + 'a,
>;

impl<'a, S, C, I, P, A> Env<'a, S, C, I, P, A>
where
    S: AbilityOracle + ?Sized,
    C: CreatureOracle + ?Sized,
    I: InteractionOracle + ?Sized,
    P: PrerequisiteOracle + ?Sized,
    A: AccountOracle + ?Sized,
{
    pub fn new(
        abilities: Option<&'a S>,
        creatures: Option<&'a C>,
        interactions: Option<&'a I>,
        prerequisites: Option<&'a P>,
        accounts: Option<&'a A>,
    ) -> Self {
        Self {
            abilities,
            creatures,
            interactions,
            prerequisites,
            accounts,
        }
    }

    pub fn with_all(
        abilities: &'a S,
        creatures: &'a C,
        interactions: &'a I,
        prerequisites: &'a P,
        accounts: &'a A,
    ) -> Self {
        Self::new(
            Some(abilities),
            Some(creatures),
            Some(interactions),
            Some(prerequisites),
            Some(accounts),
        )
    }

    pub fn empty() -> Self {
        Self {
            abilities: None,
            creatures: None,
            interactions: None,
            prerequisites: None,
            accounts: None,
        }
    }

    /// Returns the AbilityOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::AbilitiesNotAvailable` if no ability oracle was provided.
    pub fn abilities(&self) -> Result<&'a S, OracleError> {
        self.abilities.ok_or(OracleError::AbilitiesNotAvailable)
    }

    /// Returns the CreatureOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CreaturesNotAvailable` if no creature oracle was provided.
    pub fn creatures(&self) -> Result<&'a C, OracleError> {
        self.creatures.ok_or(OracleError::CreaturesNotAvailable)
    }

    /// Returns the InteractionOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::InteractionsNotAvailable` if no interaction oracle was provided.
    pub fn interactions(&self) -> Result<&'a I, OracleError> {
        self.interactions
            .ok_or(OracleError::InteractionsNotAvailable)
    }

    /// Returns the PrerequisiteOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PrerequisitesNotAvailable` if no prerequisite oracle was provided.
    pub fn prerequisites(&self) -> Result<&'a P, OracleError> {
        self.prerequisites
            .ok_or(OracleError::PrerequisitesNotAvailable)
    }

    /// Returns the AccountOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::AccountsNotAvailable` if no account oracle was provided.
    pub fn accounts(&self) -> Result<&'a A, OracleError> {
        self.accounts.ok_or(OracleError::AccountsNotAvailable)
    }
}

impl<'a, S, C, I, P, A> Env<'a, S, C, I, P, A>
where
    S: AbilityOracle + 'a,
    C: CreatureOracle + 'a,
    I: InteractionOracle + 'a,
    P: PrerequisiteOracle + 'a,
    A: AccountOracle + 'a,
{
    /// Converts this environment into a trait-object based `BehaviorEnv`.
    pub fn into_behavior_env(self) -> BehaviorEnv<'a> {
        let abilities: Option<&'a dyn AbilityOracle> = self.abilities.map(|o| o as _);
        let creatures: Option<&'a dyn CreatureOracle> = self.creatures.map(|o| o as _);
        let interactions: Option<&'a dyn InteractionOracle> = self.interactions.map(|o| o as _);
        let prerequisites: Option<&'a dyn PrerequisiteOracle> =
            self.prerequisites.map(|o| o as _);
        let accounts: Option<&'a dyn AccountOracle> = self.accounts.map(|o| o as _);
        Env::new(abilities, creatures, interactions, prerequisites, accounts)
    }
}
