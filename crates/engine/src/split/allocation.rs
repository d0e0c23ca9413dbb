//! Exact-sum amount allocation.
//!
//! These helpers divide an amount across recipients while guaranteeing
//! the shares sum EXACTLY to the original total (no cents lost or gained).
//! Any truncation remainder is assigned to the LAST share: ties are broken
//! by the final recipient, not distributed.

use rust_decimal::Decimal;
use splitledger_shared::types::Money;

/// Divides `total` into `count` shares that sum exactly to `total`.
///
/// Each share is truncated to `scale` decimal places and the last share
/// absorbs the remainder, so `divide_equally(10.00, 3)` yields
/// `[3.33, 3.33, 3.34]`.
#[must_use]
pub fn divide_equally(total: Money, count: usize, scale: u32) -> Vec<Money> {
    if count == 0 {
        return vec![];
    }

    let total = total.rounded(scale);
    if count == 1 {
        return vec![total];
    }

    let base = (total / Decimal::from(count as u64)).truncated(scale);
    let mut shares = vec![base; count - 1];
    shares.push(total - base * Decimal::from(count as u64 - 1));
    shares
}

/// Allocates `total` by per-recipient percentages, summing exactly to `total`.
///
/// All but the last share are rounded to `scale` places; the last share is
/// whatever remains, so the rounding remainder always lands on the final
/// recipient. Callers are responsible for validating that the percentages
/// sum to 100.
#[must_use]
pub fn allocate_by_percentages(total: Money, percentages: &[Decimal], scale: u32) -> Vec<Money> {
    if percentages.is_empty() {
        return vec![];
    }

    let total = total.rounded(scale);
    let hundred = Decimal::from(100);

    let mut shares: Vec<Money> = percentages
        .iter()
        .take(percentages.len() - 1)
        .map(|p| (total * (*p / hundred)).rounded(scale))
        .collect();

    let allocated: Money = shares.iter().sum();
    shares.push(total - allocated);
    shares
}

/// Rounds `amounts` to `scale` places while forcing the vector to sum
/// exactly to `total`.
///
/// Caller-provided amounts may carry sub-tolerance drift (extra decimal
/// places, or a sum a fraction of a cent off the total). All but the last
/// amount are rounded and the last is set to whatever remains, so the
/// output always sums exactly to `total`.
#[must_use]
pub fn normalize_to_total(total: Money, amounts: &[Money], scale: u32) -> Vec<Money> {
    if amounts.is_empty() {
        return vec![];
    }

    let total = total.rounded(scale);

    let mut normalized: Vec<Money> = amounts
        .iter()
        .take(amounts.len() - 1)
        .map(|a| a.rounded(scale))
        .collect();

    let allocated: Money = normalized.iter().sum();
    normalized.push(total - allocated);
    normalized
}
