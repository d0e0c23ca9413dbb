//! The per-scope ledger aggregator.
//!
//! A `ScopeLedger` maintains one scope's running net-balance table by
//! folding balance deltas, and recomputes the minimized transfer list
//! wholesale after every fold. A fold is all-or-nothing: the new balance
//! table and transfer list are computed on the side and only committed
//! together once every invariant holds.

use std::collections::BTreeMap;

use splitledger_shared::EngineConfig;
use splitledger_shared::types::{Money, UserId};

use super::minimizer;
use super::types::{LedgerSnapshot, LedgerState, Transfer};
use crate::error::{EngineError, EngineResult};
use crate::expense::BalanceDelta;
use crate::scope::Scope;

/// One scope's mutable ledger state.
#[derive(Debug, Clone)]
pub struct ScopeLedger {
    scope: Scope,
    net_balances: BTreeMap<UserId, Money>,
    minimized_transactions: Vec<Transfer>,
    deltas_applied: u64,
}

impl ScopeLedger {
    /// Creates a fresh, empty ledger for a scope.
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            net_balances: BTreeMap::new(),
            minimized_transactions: Vec::new(),
            deltas_applied: 0,
        }
    }

    /// The scope this ledger belongs to.
    #[must_use]
    pub const fn scope(&self) -> Scope {
        self.scope
    }

    /// The current net-balance table.
    #[must_use]
    pub const fn net_balances(&self) -> &BTreeMap<UserId, Money> {
        &self.net_balances
    }

    /// The current minimized transfer list.
    #[must_use]
    pub fn minimized_transactions(&self) -> &[Transfer] {
        &self.minimized_transactions
    }

    /// Lifecycle state, derived from history and current balances.
    #[must_use]
    pub fn state(&self) -> LedgerState {
        if self.deltas_applied == 0 {
            LedgerState::Empty
        } else if self.net_balances.is_empty() {
            LedgerState::Settled
        } else {
            LedgerState::Active
        }
    }

    /// Folds one balance delta into the net-balance table.
    ///
    /// Each user's new balance is rounded to the configured scale, and
    /// balances below tolerance are pruned so rounding noise cannot
    /// accumulate. The minimized transfer list is then recomputed from
    /// scratch. Nothing is committed unless every step succeeds.
    ///
    /// # Errors
    ///
    /// Returns `LedgerCorruption` if the post-fold balances do not sum to
    /// zero within tolerance. Callers that derive deltas through the
    /// splitter or settlement constructors can never trigger this.
    pub fn apply_delta(&mut self, delta: &BalanceDelta, config: &EngineConfig) -> EngineResult<()> {
        let scale = config.rounding.scale;
        let tolerance = config.rounding.tolerance;

        let mut next = self.net_balances.clone();
        for (user, change) in delta {
            let balance = next.entry(*user).or_insert(Money::ZERO);
            *balance = (*balance + *change).rounded(scale);
        }
        next.retain(|_, balance| !balance.is_negligible(tolerance));

        let residual = next.values().sum::<Money>();
        if !residual.is_negligible(tolerance) {
            tracing::error!(
                scope = %self.scope,
                balances = ?next,
                residual = %residual,
                "balance fold broke the zero-sum invariant"
            );
            return Err(EngineError::LedgerCorruption {
                scope: self.scope,
                residual: residual.amount(),
            });
        }

        let minimized = minimizer::minimize(self.scope, &next, config)?;

        self.net_balances = next;
        self.minimized_transactions = minimized;
        self.deltas_applied += 1;

        tracing::debug!(
            scope = %self.scope,
            deltas_applied = self.deltas_applied,
            users = self.net_balances.len(),
            transfers = self.minimized_transactions.len(),
            "applied balance delta"
        );
        Ok(())
    }

    /// Reconstructs a scope's full state by folding its ordered delta
    /// history from scratch.
    ///
    /// Normal operation folds incrementally; replay exists for
    /// auditability and for hydrating a ledger from stored history.
    ///
    /// # Errors
    ///
    /// Returns the first error any fold produces.
    pub fn replay(scope: Scope, deltas: &[BalanceDelta], config: &EngineConfig) -> EngineResult<Self> {
        let mut ledger = Self::new(scope);
        for delta in deltas {
            ledger.apply_delta(delta, config)?;
        }
        Ok(ledger)
    }

    /// Produces a read-only snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            scope: self.scope,
            net_balances: self.net_balances.clone(),
            minimized_transactions: self.minimized_transactions.clone(),
            state: self.state(),
        }
    }
}
