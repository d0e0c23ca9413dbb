//! Engine error types.
//!
//! Every engine operation validates its input fully before mutating any
//! state, so an error from this module always means nothing was applied.

use rust_decimal::Decimal;
use splitledger_shared::types::{Money, UserId};
use thiserror::Error;

use crate::scope::Scope;

/// Result type alias using `EngineError`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during ledger engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    // ========== Validation Errors ==========
    /// A money value was non-positive where a positive amount is required.
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(Money),

    /// Exact per-user shares do not sum to the expense total.
    #[error("Shares do not sum to the expense total. Expected: {expected}, got: {actual}")]
    SplitMismatch {
        /// The expense total the shares must add up to.
        expected: Money,
        /// The actual sum of the provided shares.
        actual: Money,
    },

    /// Per-user percentages do not sum to 100.
    #[error("Percentages must sum to 100, got {actual}")]
    PercentageMismatch {
        /// The actual sum of the provided percentages.
        actual: Decimal,
    },

    /// A per-user percentage was negative.
    #[error("Percentages must be non-negative, got {0}")]
    NegativePercentage(Decimal),

    /// The number of raw shares does not match the number of participants.
    #[error("Expected {expected} shares for {expected} participants, got {actual}")]
    ShareCountMismatch {
        /// Number of participants.
        expected: usize,
        /// Number of shares provided.
        actual: usize,
    },

    /// An expense was split across an empty participant list.
    #[error("Expense must have at least one participant")]
    NoParticipants,

    /// A settlement was recorded from a user to themselves.
    #[error("Settlement payer and payee must differ, got {0} for both")]
    SelfSettlement(UserId),

    // ========== Scope Errors ==========
    /// An operation referenced a scope with no prior history.
    #[error("No ledger exists for scope {0}")]
    ScopeNotFound(Scope),

    // ========== Invariant Violations ==========
    /// An internal zero-sum invariant was violated.
    ///
    /// This is not user-recoverable; it indicates a bug upstream
    /// (e.g., a caller bypassed the splitter).
    #[error("Ledger corruption in scope {scope}: balances sum to {residual}, expected 0")]
    LedgerCorruption {
        /// The scope whose invariant failed.
        scope: Scope,
        /// The nonzero residual that should have been zero.
        residual: Decimal,
    },
}

impl EngineError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::SplitMismatch { .. }
            | Self::PercentageMismatch { .. }
            | Self::NegativePercentage(_)
            | Self::ShareCountMismatch { .. } => "SPLIT_MISMATCH",
            Self::NoParticipants => "NO_PARTICIPANTS",
            Self::SelfSettlement(_) => "SELF_SETTLEMENT",
            Self::ScopeNotFound(_) => "SCOPE_NOT_FOUND",
            Self::LedgerCorruption { .. } => "LEDGER_CORRUPTION",
        }
    }

    /// Returns true if this error indicates an internal invariant violation
    /// rather than bad caller input.
    #[must_use]
    pub const fn is_corruption(&self) -> bool {
        matches!(self, Self::LedgerCorruption { .. })
    }
}
