//! Property tests for the expense splitter.

use proptest::prelude::*;
use rust_decimal::Decimal;
use splitledger_shared::EngineConfig;
use splitledger_shared::types::{Money, UserId};

use super::allocation;
use super::splitter::ExpenseSplitter;
use super::types::{Share, SplitRequest, SplitSpec};

/// Strategy for positive 2-dp totals up to 100,000.00.
fn total_strategy() -> impl Strategy<Value = Money> {
    (1i64..10_000_000).prop_map(Money::from_minor_units)
}

/// Strategy for participant counts.
fn count_strategy() -> impl Strategy<Value = usize> {
    1usize..=12
}

fn request(total: Money, count: usize, spec: SplitSpec) -> SplitRequest {
    let participants: Vec<UserId> = (0..count).map(|_| UserId::new()).collect();
    let payer = participants[0];
    SplitRequest {
        total,
        paid_by: vec![Share::new(payer, total)],
        participants,
        spec,
    }
}

/// Per-user paid − owed balances of a split result.
fn balances(result: &super::types::SplitResult) -> std::collections::BTreeMap<UserId, Money> {
    let mut map = std::collections::BTreeMap::new();
    for share in &result.paid_by {
        *map.entry(share.user).or_insert(Money::ZERO) += share.amount;
    }
    for share in &result.owed_by {
        *map.entry(share.user).or_insert(Money::ZERO) -= share.amount;
    }
    map
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Equal shares always sum exactly to the total, and only the last
    /// share may differ from the truncated base.
    #[test]
    fn prop_divide_equally_sums_exactly(total in total_strategy(), count in count_strategy()) {
        let shares = allocation::divide_equally(total, count, 2);

        prop_assert_eq!(shares.len(), count);
        prop_assert_eq!(shares.iter().sum::<Money>(), total);
        if count > 1 {
            let base = shares[0];
            prop_assert!(shares[..count - 1].iter().all(|s| *s == base));
        }
    }

    /// Splitting an expense always yields zero combined balances.
    #[test]
    fn prop_split_balances_sum_to_zero(total in total_strategy(), count in count_strategy()) {
        let result =
            ExpenseSplitter::split(&request(total, count, SplitSpec::Equal), &EngineConfig::default())
                .unwrap();

        let net: Money = balances(&result).values().sum();
        prop_assert!(net.is_negligible(Decimal::new(1, 2)));
    }

    /// Percentage allocation preserves the total for arbitrary weightings.
    #[test]
    fn prop_percentage_split_sums_exactly(
        total in total_strategy(),
        mut weights in prop::collection::vec(1u32..1000, 1..=10),
    ) {
        // Keep the largest weight last so the slack-absorbing final
        // percentage stays non-negative.
        weights.sort_unstable();

        let weight_sum: Decimal = weights.iter().map(|w| Decimal::from(*w)).sum();
        let hundred = Decimal::from(100);

        // Derive percentages that sum to exactly 100: round all but the
        // last, then let the last take up the slack.
        let mut percentages: Vec<Decimal> = weights
            .iter()
            .take(weights.len() - 1)
            .map(|w| (hundred * Decimal::from(*w) / weight_sum).round_dp(2))
            .collect();
        percentages.push(hundred - percentages.iter().copied().sum::<Decimal>());

        let result = ExpenseSplitter::split(
            &request(total, percentages.len(), SplitSpec::Percentage(percentages)),
            &EngineConfig::default(),
        )
        .unwrap();

        prop_assert_eq!(result.owed_by.iter().map(|s| s.amount).sum::<Money>(), total);
    }

    /// Exact splits accept any share vector summing to the total.
    #[test]
    fn prop_exact_split_round_trips(units in prop::collection::vec(0i64..1_000_000, 1..=10)) {
        prop_assume!(units.iter().sum::<i64>() > 0);

        let amounts: Vec<Money> = units.iter().map(|u| Money::from_minor_units(*u)).collect();
        let total: Money = amounts.iter().sum();

        let result = ExpenseSplitter::split(
            &request(total, amounts.len(), SplitSpec::Exact(amounts.clone())),
            &EngineConfig::default(),
        )
        .unwrap();

        let owed: Vec<Money> = result.owed_by.iter().map(|s| s.amount).collect();
        prop_assert_eq!(owed, amounts);
    }
}
