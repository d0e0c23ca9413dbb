//! Property tests for the debt minimizer.

use std::collections::BTreeMap;

use proptest::prelude::*;
use rust_decimal::Decimal;
use splitledger_shared::EngineConfig;
use splitledger_shared::types::{GroupId, Money, UserId};

use super::minimizer::minimize;
use crate::scope::Scope;

/// Strategy for zero-sum balance tables: random cent values with the last
/// entry adjusted to cancel the rest.
fn zero_sum_balances() -> impl Strategy<Value = BTreeMap<UserId, Money>> {
    prop::collection::vec(-1_000_000i64..1_000_000, 2..=10).prop_map(|mut cents| {
        let sum: i64 = cents.iter().sum();
        if let Some(last) = cents.last_mut() {
            *last -= sum;
        }
        cents
            .into_iter()
            .map(|c| (UserId::new(), Money::from_minor_units(c)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Replaying the minimized transfers as payments zeroes every balance.
    #[test]
    fn prop_transfers_zero_all_balances(balances in zero_sum_balances()) {
        let config = EngineConfig::default();
        let scope = Scope::Group(GroupId::new());
        let transfers = minimize(scope, &balances, &config).unwrap();

        let mut remaining = balances;
        for transfer in &transfers {
            // The payer's debt shrinks toward zero, the payee's credit too.
            *remaining.entry(transfer.from).or_insert(Money::ZERO) += transfer.amount;
            *remaining.entry(transfer.to).or_insert(Money::ZERO) -= transfer.amount;
        }

        let tolerance = config.rounding.tolerance;
        prop_assert!(remaining.values().all(|b| b.is_negligible(tolerance)));
    }

    /// The same balance table always yields the same transfer list.
    #[test]
    fn prop_minimization_is_deterministic(balances in zero_sum_balances()) {
        let config = EngineConfig::default();
        let scope = Scope::Group(GroupId::new());

        let first = minimize(scope, &balances, &config).unwrap();
        let second = minimize(scope, &balances, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Every emitted transfer is strictly positive, and greedy matching
    /// never needs more than (participants − 1) transfers.
    #[test]
    fn prop_transfer_shape(balances in zero_sum_balances()) {
        let config = EngineConfig::default();
        let scope = Scope::Group(GroupId::new());
        let transfers = minimize(scope, &balances, &config).unwrap();

        prop_assert!(transfers.iter().all(|t| t.amount >= Money::new(Decimal::new(1, 2))));
        let nonzero = balances
            .values()
            .filter(|b| !b.is_negligible(config.rounding.tolerance))
            .count();
        prop_assert!(transfers.len() <= nonzero.saturating_sub(1));
    }
}
