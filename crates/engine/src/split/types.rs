//! Domain types for expense splitting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitledger_shared::types::{Money, UserId};

/// One (user, amount) element of a paid-by or owed-by list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// The participating user.
    pub user: UserId,
    /// The amount this user paid or owes.
    pub amount: Money,
}

impl Share {
    /// Creates a new share.
    #[must_use]
    pub const fn new(user: UserId, amount: Money) -> Self {
        Self { user, amount }
    }
}

/// How an expense is divided among its participants.
///
/// A closed set of variants: there is no string-keyed fallthrough, and
/// every split rule must be handled exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "shares")]
pub enum SplitSpec {
    /// Divide equally; the last participant absorbs the rounding remainder.
    Equal,
    /// Per-participant exact amounts, in participant order; must sum to the
    /// total within tolerance.
    Exact(Vec<Money>),
    /// Per-participant percentages, in participant order; must sum to 100
    /// within tolerance.
    Percentage(Vec<Decimal>),
}

impl SplitSpec {
    /// Returns the fieldless discriminant stored on expense records.
    #[must_use]
    pub const fn split_type(&self) -> SplitType {
        match self {
            Self::Equal => SplitType::Equal,
            Self::Exact(_) => SplitType::Exact,
            Self::Percentage(_) => SplitType::Percentage,
        }
    }
}

/// The split rule an expense was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    /// Divided equally among participants.
    Equal,
    /// Divided by exact per-user amounts.
    Exact,
    /// Divided by per-user percentages.
    Percentage,
}

/// Input to [`crate::split::ExpenseSplitter::split`].
#[derive(Debug, Clone)]
pub struct SplitRequest {
    /// Total expense amount; must be positive.
    pub total: Money,
    /// Who paid how much; contributions must sum to `total`.
    pub paid_by: Vec<Share>,
    /// Ordered list of users the expense is split across.
    pub participants: Vec<UserId>,
    /// The split rule and its raw per-participant values.
    pub spec: SplitSpec,
}

/// Output of a split: two lists that each sum exactly to the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    /// Per-user contributions (copied from the validated input).
    pub paid_by: Vec<Share>,
    /// Per-user owed shares derived from the split rule.
    pub owed_by: Vec<Share>,
}
