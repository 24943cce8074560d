#![cfg(feature = "heavy")]
use coin_dp::{make_change, min_coins, Denominations};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn heavy_stress_large_amount() {
    let mut rng = StdRng::seed_from_u64(123);
    let mut values: Vec<usize> = (0..12).map(|_| rng.gen_range(2..500)).collect();
    values.push(1);
    let coins = Denominations::new(values).unwrap();
    let amount = 2_000_000;

    let expected = min_coins(&coins, amount);
    let change = make_change(&coins, amount).expect("unit coin makes every amount reachable");
    assert_eq!(Some(change.count()), expected);
    assert_eq!(change.total(), amount);
}
