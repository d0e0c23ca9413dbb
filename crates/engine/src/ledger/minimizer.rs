//! Debt minimization.
//!
//! Reduces a zero-sum set of net balances to a short list of settling
//! payments using greedy largest-first matching (the classic min-cash-flow
//! heuristic). The result is deterministic and reproducible, but not
//! guaranteed to be the theoretical minimum number of transfers. Finding
//! that minimum is NP-hard in general, so the greedy approximation is the
//! accepted trade-off.

use std::collections::BTreeMap;

use splitledger_shared::EngineConfig;
use splitledger_shared::types::{Money, UserId};

use super::types::Transfer;
use crate::error::{EngineError, EngineResult};
use crate::scope::Scope;

/// Computes the transfer list that zeroes the given net balances.
///
/// Debtors and creditors are sorted descending by magnitude (stable, so
/// equal magnitudes keep their balance-table order), then matched
/// largest-against-largest until both sides are exhausted.
///
/// # Errors
///
/// Returns `LedgerCorruption` if one side empties before the other, which
/// can only happen when the input balances do not sum to zero.
pub fn minimize(
    scope: Scope,
    balances: &BTreeMap<UserId, Money>,
    config: &EngineConfig,
) -> EngineResult<Vec<Transfer>> {
    let scale = config.rounding.scale;
    let tolerance = config.rounding.tolerance;

    // Partition into (user, remaining magnitude) lists. Entries already
    // below tolerance are rounding noise and take part in neither side.
    let mut debtors: Vec<(UserId, Money)> = Vec::new();
    let mut creditors: Vec<(UserId, Money)> = Vec::new();
    for (user, balance) in balances {
        if balance.is_negligible(tolerance) {
            continue;
        }
        if balance.is_negative() {
            debtors.push((*user, balance.abs()));
        } else {
            creditors.push((*user, *balance));
        }
    }

    // Stable descending sort: ties keep their original relative order.
    debtors.sort_by(|a, b| b.1.cmp(&a.1));
    creditors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut transfers = Vec::new();
    let mut d = 0;
    let mut c = 0;

    while d < debtors.len() && c < creditors.len() {
        let amount = debtors[d].1.min(creditors[c].1).rounded(scale);

        transfers.push(Transfer {
            from: debtors[d].0,
            to: creditors[c].0,
            amount,
        });

        debtors[d].1 -= amount;
        creditors[c].1 -= amount;
        if debtors[d].1.is_negligible(tolerance) {
            d += 1;
        }
        if creditors[c].1.is_negligible(tolerance) {
            c += 1;
        }
    }

    // Total debt equals total credit, so both lists must empty together.
    if d < debtors.len() || c < creditors.len() {
        let residual = balances.values().sum::<Money>().amount();
        tracing::error!(
            scope = %scope,
            ?balances,
            residual = %residual,
            "debt minimization left an unmatched side; balances are not zero-sum"
        );
        return Err(EngineError::LedgerCorruption { scope, residual });
    }

    Ok(transfers)
}
