//! The scope-keyed engine facade.
//!
//! `LedgerEngine` owns the live ledger of every scope and serializes
//! mutation per scope: each operation holds that scope's map entry
//! exclusively for exactly one fold-and-recompute cycle (no I/O inside).
//! Operations on different scopes proceed in parallel; there is no
//! global lock.
//!
//! Durable storage is the caller's concern: `hydrate` rebuilds a
//! scope from its stored delta history, and every operation returns the
//! snapshot the caller's transaction should persist.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use splitledger_shared::EngineConfig;
use splitledger_shared::types::{Money, UserId};

use crate::error::{EngineError, EngineResult};
use crate::expense::{BalanceDelta, Expense};
use crate::ledger::{LedgerSnapshot, ScopeLedger};
use crate::scope::Scope;
use crate::settlement::Settlement;

/// The ledger engine: per-scope balance state behind a concurrent map.
#[derive(Debug, Default)]
pub struct LedgerEngine {
    config: EngineConfig,
    scopes: DashMap<Scope, ScopeLedger>,
}

impl LedgerEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            scopes: DashMap::new(),
        }
    }

    /// Applies an expense to its scope's ledger, creating the ledger on
    /// first use, and returns the updated snapshot.
    ///
    /// # Errors
    ///
    /// Returns `LedgerCorruption` if the fold violates the zero-sum
    /// invariant; the ledger is left untouched in that case.
    pub fn apply_expense(&self, expense: &Expense) -> EngineResult<LedgerSnapshot> {
        self.fold(expense.scope, &expense.delta(), true)
    }

    /// Applies the negated delta of an existing expense, implementing
    /// edit/delete-by-inverse.
    ///
    /// # Errors
    ///
    /// Returns `ScopeNotFound` if the expense's scope has no ledger;
    /// there is nothing to reverse.
    pub fn reverse_expense(&self, expense: &Expense) -> EngineResult<LedgerSnapshot> {
        self.fold(expense.scope, &expense.delta().inverted(), false)
    }

    /// Records an executed payment and returns the updated snapshot.
    ///
    /// Recording a settlement in a scope with no prior history is not an
    /// error: a fresh zero-balance ledger is created first.
    ///
    /// # Errors
    ///
    /// Returns `LedgerCorruption` if the fold violates the zero-sum
    /// invariant.
    pub fn record_settlement(&self, settlement: &Settlement) -> EngineResult<LedgerSnapshot> {
        self.fold(settlement.scope, &settlement.delta(), true)
    }

    /// Returns the current snapshot of a scope's ledger.
    ///
    /// # Errors
    ///
    /// Returns `ScopeNotFound` if the scope has no history.
    pub fn get_ledger(&self, scope: Scope) -> EngineResult<LedgerSnapshot> {
        self.scopes
            .get(&scope)
            .map(|ledger| ledger.snapshot())
            .ok_or(EngineError::ScopeNotFound(scope))
    }

    /// The signed balance between two users in their personal scope,
    /// from `a`'s perspective: positive means `b` owes `a`.
    ///
    /// # Errors
    ///
    /// Returns `ScopeNotFound` if the two users have no personal history.
    pub fn get_balance_between(&self, a: UserId, b: UserId) -> EngineResult<Money> {
        let scope = Scope::personal(a, b);
        self.scopes
            .get(&scope)
            .map(|ledger| ledger.snapshot().balance_of(a))
            .ok_or(EngineError::ScopeNotFound(scope))
    }

    /// Rebuilds a scope from its ordered delta history, replacing any
    /// live state for that scope (the persistence adapter seam).
    ///
    /// # Errors
    ///
    /// Returns the first error the replayed history produces; on error
    /// the previous live state is kept.
    pub fn hydrate(&self, scope: Scope, deltas: &[BalanceDelta]) -> EngineResult<LedgerSnapshot> {
        let ledger = ScopeLedger::replay(scope, deltas, &self.config)?;
        let snapshot = ledger.snapshot();
        self.scopes.insert(scope, ledger);
        Ok(snapshot)
    }

    /// Folds one delta into a scope under that scope's exclusive entry.
    ///
    /// A fresh ledger is inserted only after its first fold succeeds, so
    /// a failed fold on an unknown scope leaves no trace of that scope.
    fn fold(
        &self,
        scope: Scope,
        delta: &BalanceDelta,
        create_if_missing: bool,
    ) -> EngineResult<LedgerSnapshot> {
        match self.scopes.entry(scope) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().apply_delta(delta, &self.config)?;
                Ok(entry.get().snapshot())
            }
            Entry::Vacant(entry) => {
                if !create_if_missing {
                    return Err(EngineError::ScopeNotFound(scope));
                }
                let mut ledger = ScopeLedger::new(scope);
                ledger.apply_delta(delta, &self.config)?;
                let snapshot = ledger.snapshot();
                entry.insert(ledger);
                Ok(snapshot)
            }
        }
    }
}
