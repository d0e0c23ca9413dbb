//! The expense splitter service.
//!
//! This service is a pure function: it validates a raw expense fully and
//! produces the paid-by / owed-by share lists, with no side effects. All
//! validation happens before anything is produced, so a failed split
//! never leaves partial state anywhere.

use splitledger_shared::EngineConfig;
use splitledger_shared::types::Money;

use super::allocation;
use super::types::{Share, SplitRequest, SplitResult, SplitSpec};
use crate::error::{EngineError, EngineResult};

/// Stateless expense splitting service.
pub struct ExpenseSplitter;

impl ExpenseSplitter {
    /// Splits an expense into per-user paid and owed share lists.
    ///
    /// Validation and split semantics:
    /// 1. The total must be positive.
    /// 2. There must be at least one participant.
    /// 3. Payer contributions must be positive and sum to the total
    ///    within tolerance.
    /// 4. `Equal` divides the total with the last participant absorbing
    ///    the rounding remainder; `Exact` shares must be non-negative and
    ///    sum to the total within tolerance; `Percentage` shares must be
    ///    non-negative and sum to 100 within tolerance, with the rounding
    ///    remainder assigned to the last participant.
    ///
    /// Caller-provided amounts (`paid_by` and `Exact` shares) are only
    /// tolerance-checked, so both lists are normalized: every amount is
    /// rounded to the configured scale and the last entry is set to
    /// whatever remains. On success both output lists sum EXACTLY to the
    /// total and the combined per-user balances (paid − owed) sum to zero.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if any validation step fails; nothing is
    /// mutated on failure.
    pub fn split(request: &SplitRequest, config: &EngineConfig) -> EngineResult<SplitResult> {
        let scale = config.rounding.scale;
        let tolerance = config.rounding.tolerance;

        if !request.total.is_positive() {
            return Err(EngineError::InvalidAmount(request.total));
        }
        if request.participants.is_empty() {
            return Err(EngineError::NoParticipants);
        }
        if request.paid_by.is_empty() {
            return Err(EngineError::NoParticipants);
        }

        for share in &request.paid_by {
            if !share.amount.is_positive() {
                return Err(EngineError::InvalidAmount(share.amount));
            }
        }
        let paid_total: Money = request.paid_by.iter().map(|s| s.amount).sum();
        if !(paid_total - request.total).is_negligible(tolerance) {
            return Err(EngineError::SplitMismatch {
                expected: request.total,
                actual: paid_total,
            });
        }

        let owed_amounts = Self::owed_amounts(request, scale, tolerance)?;

        let owed_by: Vec<Share> = request
            .participants
            .iter()
            .zip(owed_amounts)
            .map(|(user, amount)| Share::new(*user, amount))
            .collect();

        // Contributions passed the tolerance check but may still be a
        // fraction of a cent off; normalize them so both lists sum
        // exactly to the total.
        let paid_amounts: Vec<Money> = request.paid_by.iter().map(|s| s.amount).collect();
        let paid_by: Vec<Share> = request
            .paid_by
            .iter()
            .zip(allocation::normalize_to_total(
                request.total,
                &paid_amounts,
                scale,
            ))
            .map(|(share, amount)| Share::new(share.user, amount))
            .collect();

        let result = SplitResult { paid_by, owed_by };

        debug_assert!(
            (result.paid_by.iter().map(|s| s.amount).sum::<Money>()
                - result.owed_by.iter().map(|s| s.amount).sum::<Money>())
            .is_negligible(tolerance)
        );

        Ok(result)
    }

    /// Derives the per-participant owed amounts for the split rule.
    fn owed_amounts(
        request: &SplitRequest,
        scale: u32,
        tolerance: rust_decimal::Decimal,
    ) -> EngineResult<Vec<Money>> {
        let count = request.participants.len();

        match &request.spec {
            SplitSpec::Equal => Ok(allocation::divide_equally(request.total, count, scale)),

            SplitSpec::Exact(amounts) => {
                if amounts.len() != count {
                    return Err(EngineError::ShareCountMismatch {
                        expected: count,
                        actual: amounts.len(),
                    });
                }
                for amount in amounts {
                    if amount.is_negative() {
                        return Err(EngineError::InvalidAmount(*amount));
                    }
                }
                let sum: Money = amounts.iter().sum();
                if !(sum - request.total).is_negligible(tolerance) {
                    return Err(EngineError::SplitMismatch {
                        expected: request.total,
                        actual: sum,
                    });
                }
                Ok(allocation::normalize_to_total(request.total, amounts, scale))
            }

            SplitSpec::Percentage(percentages) => {
                if percentages.len() != count {
                    return Err(EngineError::ShareCountMismatch {
                        expected: count,
                        actual: percentages.len(),
                    });
                }
                for percentage in percentages {
                    if *percentage < rust_decimal::Decimal::ZERO {
                        return Err(EngineError::NegativePercentage(*percentage));
                    }
                }
                let sum: rust_decimal::Decimal = percentages.iter().sum();
                let hundred = rust_decimal::Decimal::from(100);
                if (sum - hundred).abs() >= tolerance {
                    return Err(EngineError::PercentageMismatch { actual: sum });
                }
                Ok(allocation::allocate_by_percentages(
                    request.total,
                    percentages,
                    scale,
                ))
            }
        }
    }
}
