use std::num::NonZeroUsize;
use std::process::ExitCode;

use clap::Parser;
use coin_dp::denominations::checked_amount;
use coin_dp::logging::init_cli_logger;
use coin_dp::problems::coin_change::{Change, CoinChangeProblem};
use coin_dp::{try_min_coins_many, CoinError, Denominations, EngineBuilder, INFEASIBLE};

#[derive(Parser)]
#[command(name = "coin-change")]
#[command(about = "Fewest coins that sum exactly to an amount (-1 when impossible)")]
struct Args {
    /// Comma-separated coin denominations, e.g. 1,2,5
    #[arg(short, long, allow_hyphen_values = true)]
    coins: String,

    /// Target amount; repeat to answer several amounts with one table
    #[arg(short, long, required = true, allow_negative_numbers = true)]
    amount: Vec<i64>,

    /// Also print one optimal set of coins after each count
    #[arg(long)]
    show_change: bool,

    /// Layers per checkpoint block when reconstructing change (default: sqrt(amount))
    #[arg(long)]
    block_size: Option<NonZeroUsize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_cli_logger(args.verbose);

    match run(&args) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("coin-change: {err}");
            ExitCode::from(2)
        }
    }
}

/// Validate everything up front, then answer each amount in order.
fn run(args: &Args) -> Result<Vec<String>, CoinError> {
    let coins: Denominations = args.coins.parse()?;
    let amounts = args
        .amount
        .iter()
        .map(|&a| checked_amount(a))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(
        coins = ?coins.as_slice(),
        amounts = amounts.len(),
        "solving"
    );

    let counts = try_min_coins_many(&coins, &amounts)?;
    let lines = amounts
        .iter()
        .zip(counts)
        .map(|(&amount, count)| match count {
            None => INFEASIBLE.to_string(),
            Some(count) if args.show_change => {
                let change = reconstruct(&coins, amount, args.block_size);
                debug_assert_eq!(change.count(), count);
                format!("{count}\t{change}")
            }
            Some(count) => count.to_string(),
        })
        .collect();
    Ok(lines)
}

fn reconstruct(coins: &Denominations, amount: usize, block_size: Option<NonZeroUsize>) -> Change {
    let engine = EngineBuilder::new(CoinChangeProblem::new(coins.clone(), amount))
        .with_block_size_opt(block_size.map(NonZeroUsize::get))
        .build();
    let (_count, steps) = engine.run();
    Change::from_steps(&steps)
}
