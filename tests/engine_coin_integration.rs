use coin_dp::problems::coin_change::CoinChangeProblem;
use coin_dp::{make_change, CheckpointEngine, Denominations};
use std::collections::BTreeMap;

#[test]
fn coin_change_e2e() {
    let coins = Denominations::new(vec![1, 2, 5]).unwrap();
    let engine = CheckpointEngine::new(CoinChangeProblem::new(coins, 11));
    let (count, steps) = engine.run();
    assert_eq!(count, Some(3));
    let coins_used: Vec<_> = steps.iter().map(|s| s.coin).collect();
    assert_eq!(coins_used, vec![1, 5, 5]);
}

#[test]
fn make_change_tallies_denominations() {
    let coins: Denominations = "25,10,5,1".parse().unwrap();
    let change = make_change(&coins, 289).unwrap();
    // 11 quarters, 1 dime, 4 pennies.
    assert_eq!(change.count(), 16);
    assert_eq!(change.total(), 289);
    assert_eq!(change.tally(), BTreeMap::from([(1, 4), (10, 1), (25, 11)]));
}

#[test]
fn make_change_beats_greedy() {
    let coins = Denominations::new(vec![1, 15, 25]).unwrap();
    // Greedy: 25 + 5×1 = 6 coins. Optimal: 15 + 15 = 2 coins.
    let change = make_change(&coins, 30).unwrap();
    assert_eq!(change.coins(), &[15, 15]);
}

#[test]
fn infeasible_amounts_return_none() {
    let coins = Denominations::new(vec![4, 6]).unwrap();
    assert!(make_change(&coins, 7).is_none());
    assert!(make_change(&coins, 1_001).is_none());
    assert_eq!(make_change(&coins, 1_000).unwrap().total(), 1_000);
}
