//! In-memory account balances.
//!
//! Unlike the catalog oracles, balances change while the runtime is live, so
//! the map sits behind a lock and is shared through the [`super::OracleManager`].
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use behavior_core::{AccountCurrency, AccountOracle, EntityId};

#[derive(Debug, Default)]
pub struct AccountOracleImpl {
    balances: RwLock<HashMap<(EntityId, AccountCurrency), u64>>,
}

impl AccountOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_balance(&self, player: EntityId, currency: AccountCurrency, amount: u64) {
        self.balances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((player, currency), amount);
    }

    /// Adds `amount` to a balance and returns the new total.
    pub fn deposit(&self, player: EntityId, currency: AccountCurrency, amount: u64) -> u64 {
        let mut balances = self
            .balances
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let balance = balances.entry((player, currency)).or_insert(0);
        *balance = balance.saturating_add(amount);
        *balance
    }
}

impl AccountOracle for AccountOracleImpl {
    fn currency_amount(&self, player: EntityId, currency: AccountCurrency) -> u64 {
        self.balances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(player, currency))
            .copied()
            .unwrap_or(0)
    }
}
