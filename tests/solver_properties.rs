use coin_dp::{min_coins, min_coins_many, solve, Denominations};
use proptest::prelude::*;

#[test]
fn concrete_scenarios() {
    assert_eq!(solve(&[1, 2, 5], 11).unwrap(), 3);
    assert_eq!(solve(&[2], 3).unwrap(), -1);
    assert_eq!(solve(&[1], 0).unwrap(), 0);
    assert_eq!(solve(&[1, 2, 5], 0).unwrap(), 0);
    assert_eq!(solve(&[3, 7], 5).unwrap(), -1);
}

#[test]
fn large_coins_only() {
    // Every coin exceeds the amount.
    assert_eq!(solve(&[100, 250], 99).unwrap(), -1);
    assert_eq!(solve(&[100, 250], 500).unwrap(), 2);
}

proptest! {
    #[test]
    fn no_coins_reach_only_zero(amount in 1i64..500) {
        prop_assert_eq!(solve(&[], amount).unwrap(), -1);
    }

    #[test]
    fn zero_amount_is_zero(values in prop::collection::vec(1i64..1_000, 0..8)) {
        prop_assert_eq!(solve(&values, 0).unwrap(), 0);
    }

    #[test]
    fn unit_coin_counts_amount(n in 0i64..2_000) {
        prop_assert_eq!(solve(&[1], n).unwrap(), n);
    }

    #[test]
    fn twos_follow_parity(n in 0i64..2_000) {
        let expected = if n % 2 == 0 { n / 2 } else { -1 };
        prop_assert_eq!(solve(&[2], n).unwrap(), expected);
    }

    #[test]
    fn superset_never_needs_more_coins(
        base in prop::collection::vec(1usize..40, 0..5),
        extra in prop::collection::vec(1usize..40, 1..4),
        amount in 0usize..300,
    ) {
        let subset = Denominations::new(base.clone()).unwrap();
        let mut all = base;
        all.extend(extra);
        let superset = Denominations::new(all).unwrap();

        match (min_coins(&subset, amount), min_coins(&superset, amount)) {
            (Some(sub), Some(sup)) => prop_assert!(sup <= sub),
            (Some(_), None) => prop_assert!(false, "superset lost a reachable amount"),
            _ => {}
        }
    }

    #[test]
    fn shared_table_matches_single_queries(
        values in prop::collection::vec(1usize..30, 0..5),
        amounts in prop::collection::vec(0usize..400, 0..10),
    ) {
        let coins = Denominations::new(values).unwrap();
        let shared = min_coins_many(&coins, &amounts);
        let single: Vec<_> = amounts.iter().map(|&a| min_coins(&coins, a)).collect();
        prop_assert_eq!(shared, single);
    }

    #[test]
    fn rejects_negative_amounts(
        values in prop::collection::vec(1i64..50, 0..5),
        amount in i64::MIN..0,
    ) {
        prop_assert!(solve(&values, amount).is_err());
    }

    #[test]
    fn rejects_non_positive_denominations(
        mut values in prop::collection::vec(1i64..50, 0..5),
        bad in -50i64..=0,
        at in 0usize..6,
    ) {
        let at = at.min(values.len());
        values.insert(at, bad);
        prop_assert!(solve(&values, 10).is_err());
    }
}
