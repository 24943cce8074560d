//! Example: fewest coins, and which coins, for a few amounts.
//!
//! Run with:
//! `cargo run --example make_change`

use coin_dp::{make_change, Denominations};

fn main() {
    // US coins plus a 15, which breaks the greedy strategy.
    let coins: Denominations = "1, 5, 10, 15, 25".parse().expect("valid denominations");

    for amount in [0, 11, 30, 289] {
        match make_change(&coins, amount) {
            Some(change) => {
                println!("{amount:>4}: {} coins = {change}", change.count());
                for (coin, n) in change.tally() {
                    println!("        {n} x {coin}");
                }
            }
            None => println!("{amount:>4}: impossible"),
        }
    }
}
