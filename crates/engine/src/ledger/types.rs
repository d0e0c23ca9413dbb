//! Ledger snapshot types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use splitledger_shared::types::{Money, UserId};

use crate::scope::Scope;

/// One minimized payment: `from` pays `to` the given positive amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// The paying user (a debtor).
    pub from: UserId,
    /// The receiving user (a creditor).
    pub to: UserId,
    /// The payment amount; always positive.
    pub amount: Money,
}

/// Lifecycle state of a scope's ledger.
///
/// Transitions (`Empty`, `Active`, `Settled`, back to `Active`) are driven
/// solely by delta application and there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerState {
    /// No delta has ever been applied.
    Empty,
    /// At least one nonzero balance remains.
    Active,
    /// All balances have cancelled out.
    Settled,
}

/// A read-only view of one scope's ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// The scope this ledger belongs to.
    pub scope: Scope,
    /// Cumulative signed balance per user; positive = owed to them.
    pub net_balances: BTreeMap<UserId, Money>,
    /// The transfer list that would zero all net balances.
    pub minimized_transactions: Vec<Transfer>,
    /// Lifecycle state.
    pub state: LedgerState,
}

impl LedgerSnapshot {
    /// The signed balance for one user, zero if absent.
    #[must_use]
    pub fn balance_of(&self, user: UserId) -> Money {
        self.net_balances.get(&user).copied().unwrap_or(Money::ZERO)
    }
}
