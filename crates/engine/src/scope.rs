//! Ledger scopes.
//!
//! A scope is the boundary within which balances are tracked and
//! zero-summed: a group, or a personal pairwise relation between two
//! users who transact 1:1 outside any group. Balances are never merged
//! across scopes.

use serde::{Deserialize, Serialize};
use splitledger_shared::types::{GroupId, UserId};

/// The boundary a ledger's balances live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// A shared group with any number of members.
    Group(GroupId),
    /// A pairwise relation between exactly two users.
    ///
    /// The pair is kept in canonical (sorted) order so that
    /// `Scope::personal(a, b) == Scope::personal(b, a)`.
    Personal(UserId, UserId),
}

impl Scope {
    /// Creates a group scope.
    #[must_use]
    pub const fn group(id: GroupId) -> Self {
        Self::Group(id)
    }

    /// Creates a personal scope for two users, canonicalizing the pair order.
    #[must_use]
    pub fn personal(a: UserId, b: UserId) -> Self {
        if a <= b {
            Self::Personal(a, b)
        } else {
            Self::Personal(b, a)
        }
    }

    /// Returns true for a personal (two-party) scope.
    #[must_use]
    pub const fn is_personal(&self) -> bool {
        matches!(self, Self::Personal(_, _))
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Group(id) => write!(f, "group/{id}"),
            Self::Personal(a, b) => write!(f, "personal/{a}:{b}"),
        }
    }
}
