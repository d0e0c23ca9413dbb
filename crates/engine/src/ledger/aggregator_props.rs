//! Property tests for the ledger aggregator.

use proptest::prelude::*;
use splitledger_shared::EngineConfig;
use splitledger_shared::types::{GroupId, Money, UserId};

use super::aggregator::ScopeLedger;
use crate::expense::BalanceDelta;
use crate::scope::Scope;

const POOL: usize = 6;

/// Strategy for a sequence of self-balancing payment deltas over a small
/// fixed user pool (indices into the pool plus a cent amount).
fn delta_script() -> impl Strategy<Value = Vec<(usize, usize, i64)>> {
    prop::collection::vec((0..POOL, 0..POOL, 1i64..100_000), 1..=25)
}

fn build_deltas(pool: &[UserId], script: &[(usize, usize, i64)]) -> Vec<BalanceDelta> {
    script
        .iter()
        .filter(|(from, to, _)| from != to)
        .map(|(from, to, cents)| {
            BalanceDelta::payment(pool[*from], pool[*to], Money::from_minor_units(*cents))
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// The net-balance table sums to zero after every fold.
    #[test]
    fn prop_zero_sum_holds_at_every_step(script in delta_script()) {
        let config = EngineConfig::default();
        let pool: Vec<UserId> = (0..POOL).map(|_| UserId::new()).collect();
        let mut ledger = ScopeLedger::new(Scope::Group(GroupId::new()));

        for delta in build_deltas(&pool, &script) {
            ledger.apply_delta(&delta, &config).unwrap();
            let sum: Money = ledger.net_balances().values().sum();
            prop_assert!(sum.is_negligible(config.rounding.tolerance));
        }
    }

    /// Applying a delta and then its exact inverse restores the prior
    /// balance table.
    #[test]
    fn prop_apply_then_inverse_is_identity(
        script in delta_script(),
        extra in (0..POOL, 0..POOL, 1i64..100_000),
    ) {
        let config = EngineConfig::default();
        let pool: Vec<UserId> = (0..POOL).map(|_| UserId::new()).collect();
        let mut ledger = ScopeLedger::new(Scope::Group(GroupId::new()));

        for delta in build_deltas(&pool, &script) {
            ledger.apply_delta(&delta, &config).unwrap();
        }
        let before = ledger.net_balances().clone();

        let (from, to, cents) = extra;
        prop_assume!(from != to);
        let delta = BalanceDelta::payment(pool[from], pool[to], Money::from_minor_units(cents));

        ledger.apply_delta(&delta, &config).unwrap();
        ledger.apply_delta(&delta.inverted(), &config).unwrap();

        prop_assert_eq!(ledger.net_balances(), &before);
    }

    /// Replaying the full history reproduces the incrementally folded state.
    #[test]
    fn prop_replay_equals_incremental(script in delta_script()) {
        let config = EngineConfig::default();
        let pool: Vec<UserId> = (0..POOL).map(|_| UserId::new()).collect();
        let scope = Scope::Group(GroupId::new());
        let deltas = build_deltas(&pool, &script);

        let mut incremental = ScopeLedger::new(scope);
        for delta in &deltas {
            incremental.apply_delta(delta, &config).unwrap();
        }
        let replayed = ScopeLedger::replay(scope, &deltas, &config).unwrap();

        prop_assert_eq!(replayed.snapshot(), incremental.snapshot());
    }
}
