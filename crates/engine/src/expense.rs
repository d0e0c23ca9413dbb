//! Expense records and balance deltas.
//!
//! Expenses are append-only: a record is created once and never mutated.
//! A logical edit is an inverse (negated) delta followed by a new expense;
//! a logical delete is the inverse delta alone. This keeps the ledger an
//! auditable, replayable stream of deltas.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use splitledger_shared::EngineConfig;
use splitledger_shared::types::{ExpenseId, Money, UserId};

use crate::error::EngineResult;
use crate::scope::Scope;
use crate::split::{ExpenseSplitter, Share, SplitRequest, SplitSpec, SplitType};

/// A shared expense, fully split into paid and owed lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier.
    pub id: ExpenseId,
    /// Human-readable description.
    pub description: String,
    /// Total amount; always positive.
    pub amount: Money,
    /// The split rule this expense was created with.
    pub split_type: SplitType,
    /// Who paid how much; sums to `amount`.
    pub paid_by: Vec<Share>,
    /// Who owes how much; sums to `amount`.
    pub owed_by: Vec<Share>,
    /// The ledger scope this expense belongs to.
    pub scope: Scope,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Creates an expense by splitting `total` across `participants`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if the total, payer contributions, or raw
    /// shares fail validation (see [`ExpenseSplitter::split`]).
    pub fn new(
        scope: Scope,
        description: impl Into<String>,
        total: Money,
        paid_by: Vec<Share>,
        participants: Vec<UserId>,
        spec: SplitSpec,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        let split_type = spec.split_type();
        let request = SplitRequest {
            total,
            paid_by,
            participants,
            spec,
        };
        let result = ExpenseSplitter::split(&request, config)?;

        Ok(Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount: total,
            split_type,
            paid_by: result.paid_by,
            owed_by: result.owed_by,
            scope,
            created_at: Utc::now(),
        })
    }

    /// Derives this expense's balance delta: paid − owed per user.
    #[must_use]
    pub fn delta(&self) -> BalanceDelta {
        BalanceDelta::from_shares(&self.paid_by, &self.owed_by)
    }
}

/// A signed per-user balance change derived from one expense or settlement.
///
/// Deltas derived from expenses sum to zero by construction (every
/// expense is self-balancing). Keyed by a `BTreeMap` so iteration order
/// is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceDelta(BTreeMap<UserId, Money>);

impl BalanceDelta {
    /// Builds a delta from paid and owed share lists:
    /// `balance = Σ paid − Σ owed` per user.
    #[must_use]
    pub fn from_shares(paid_by: &[Share], owed_by: &[Share]) -> Self {
        let mut changes = BTreeMap::new();
        for share in paid_by {
            *changes.entry(share.user).or_insert(Money::ZERO) += share.amount;
        }
        for share in owed_by {
            *changes.entry(share.user).or_insert(Money::ZERO) -= share.amount;
        }
        Self(changes)
    }

    /// Builds the delta of a payment: the payer is owed more, the payee less.
    #[must_use]
    pub fn payment(from: UserId, to: UserId, amount: Money) -> Self {
        let mut changes = BTreeMap::new();
        *changes.entry(from).or_insert(Money::ZERO) += amount;
        *changes.entry(to).or_insert(Money::ZERO) -= amount;
        Self(changes)
    }

    /// Returns the negated delta, used for expense edit/delete-by-inverse.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self(self.0.iter().map(|(user, amount)| (*user, -*amount)).collect())
    }

    /// The signed change for one user, zero if absent.
    #[must_use]
    pub fn change_for(&self, user: UserId) -> Money {
        self.0.get(&user).copied().unwrap_or(Money::ZERO)
    }

    /// Sum of all changes; zero for any well-formed delta.
    #[must_use]
    pub fn net(&self) -> Money {
        self.0.values().sum()
    }

    /// Iterates over (user, change) pairs in user order.
    pub fn iter(&self) -> impl Iterator<Item = (&UserId, &Money)> {
        self.0.iter()
    }

    /// Returns true if the delta touches no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a BalanceDelta {
    type Item = (&'a UserId, &'a Money);
    type IntoIter = std::collections::btree_map::Iter<'a, UserId, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
