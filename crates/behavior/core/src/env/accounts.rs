//! Account currency oracle.

use crate::state::EntityId;

/// Account-wide currencies readable by prerequisite checks.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AccountCurrency {
    Omnibits,
    ServiceToken,
    CosmicReward,
}

/// Oracle answering account currency balances.
pub trait AccountOracle: Send + Sync {
    /// Balance of `currency` on the account that owns `player`.
    fn currency_amount(&self, player: EntityId, currency: AccountCurrency) -> u64;
}
