//! Settlement records.
//!
//! A settlement is a real-world payment made outside the system that
//! offsets the two users' mutual balance. Records are created once and
//! never mutated; each one feeds a single balance delta into the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use splitledger_shared::types::{Money, SettlementId, UserId};

use crate::error::{EngineError, EngineResult};
use crate::expense::BalanceDelta;
use crate::scope::Scope;

/// A recorded payment from one user to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// Unique identifier.
    pub id: SettlementId,
    /// The paying user.
    pub from: UserId,
    /// The receiving user.
    pub to: UserId,
    /// Payment amount; always positive.
    pub amount: Money,
    /// The ledger scope the payment settles.
    pub scope: Scope,
    /// Optional payment method or note (e.g., "cash", "bank transfer").
    pub method: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Settlement {
    /// Creates a settlement record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for a non-positive amount and
    /// `SelfSettlement` when payer and payee are the same user.
    pub fn new(
        scope: Scope,
        from: UserId,
        to: UserId,
        amount: Money,
        method: Option<String>,
    ) -> EngineResult<Self> {
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount(amount));
        }
        if from == to {
            return Err(EngineError::SelfSettlement(from));
        }

        Ok(Self {
            id: SettlementId::new(),
            from,
            to,
            amount,
            scope,
            method,
            created_at: Utc::now(),
        })
    }

    /// Derives the balance delta: the payer paid, so is owed more
    /// (or owes less); the payee the opposite.
    #[must_use]
    pub fn delta(&self) -> BalanceDelta {
        BalanceDelta::payment(self.from, self.to, self.amount)
    }
}
