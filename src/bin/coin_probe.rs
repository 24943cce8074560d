use std::collections::BTreeMap;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use coin_dp::logging::init_cli_logger;
use coin_dp::problems::coin_change::{CoinChangeProblem, CoinStep};
use coin_dp::{min_coins, CheckpointEngine, Denominations};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Run every solver path across growing amounts, check the engine against
/// the full table and report time and memory.
#[derive(Parser)]
#[command(name = "coin_probe")]
struct Options {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest amount to cross-check against an independent solver
    #[arg(long, default_value_t = 1 << 16)]
    verify_limit: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn write(self, measurements: &[Measurement]) {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

const AMOUNTS: &[usize] = &[1 << 10, 1 << 12, 1 << 14, 1 << 16, 1 << 18, 1 << 20];

/// Mixed set containing 1, so every amount is reachable.
const DENSE_COINS: &[usize] = &[1, 7, 13, 29, 97, 211];
/// No unit coin; small amounts and some residues are infeasible.
const SPARSE_COINS: &[usize] = &[37, 91, 203];

fn main() -> ExitCode {
    let options = Options::parse();
    init_cli_logger(options.verbose);

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/4] Full table (min_coins)...");
    measurements.extend(run_scenario(
        "full_table",
        DENSE_COINS,
        window_count,
        &options,
        &mut sys,
        |coins, amount| (min_coins(coins, amount), None),
    ));

    eprintln!("[2/4] Window sweep (count only)...");
    measurements.extend(run_scenario(
        "window_sweep",
        DENSE_COINS,
        min_coins,
        &options,
        &mut sys,
        |coins, amount| (window_count(coins, amount), None),
    ));

    eprintln!("[3/4] Checkpoint trace (dense coins)...");
    measurements.extend(run_scenario(
        "checkpoint_dense",
        DENSE_COINS,
        min_coins,
        &options,
        &mut sys,
        trace,
    ));

    eprintln!("[4/4] Checkpoint trace (sparse coins)...");
    measurements.extend(run_scenario(
        "checkpoint_sparse",
        SPARSE_COINS,
        min_coins,
        &options,
        &mut sys,
        trace,
    ));

    let failed = print_summary(&measurements, &options);
    options.format.write(&measurements);

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn window_count(coins: &Denominations, amount: usize) -> Option<usize> {
    CheckpointEngine::new(CoinChangeProblem::new(coins.clone(), amount)).cost()
}

fn trace(coins: &Denominations, amount: usize) -> (Option<usize>, Option<Vec<CoinStep>>) {
    let engine = CheckpointEngine::new(CoinChangeProblem::new(coins.clone(), amount));
    let (count, steps) = engine.run();
    (count, Some(steps))
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    amount: usize,
    count: Option<usize>,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_scenario<F>(
    scenario: &'static str,
    coin_values: &[usize],
    baseline: fn(&Denominations, usize) -> Option<usize>,
    options: &Options,
    sys: &mut System,
    compute: F,
) -> Vec<Measurement>
where
    F: Fn(&Denominations, usize) -> (Option<usize>, Option<Vec<CoinStep>>),
{
    let coins = match Denominations::new(coin_values.to_vec()) {
        Ok(coins) => coins,
        Err(err) => {
            eprintln!("      skipped: {err}");
            return Vec::new();
        }
    };
    let total = AMOUNTS.len();

    AMOUNTS
        .iter()
        .enumerate()
        .map(|(idx, &amount)| {
            eprint!("      [{}/{}] amount {}... ", idx + 1, total, amount);

            let before = rss_kib(sys);
            let start = Instant::now();
            let (count, steps) = compute(&coins, amount);
            let wall_s = start.elapsed().as_secs_f64();
            let rss_delta_kib = rss_kib(sys).saturating_sub(before);

            let (verification_status, verification_detail) = if amount <= options.verify_limit {
                verify(&coins, amount, baseline(&coins, amount), count, steps.as_deref())
            } else {
                (VerificationStatus::NotChecked, None)
            };

            eprintln!(
                "{} count={}, time={:.3}s, status={}",
                verification_status.icon(),
                count_label(count),
                wall_s,
                verification_status.label()
            );

            Measurement {
                scenario,
                amount,
                count,
                wall_s,
                rss_delta_kib,
                verification_status,
                verification_detail,
            }
        })
        .collect()
}

/// Compare against an independent solver and, when a path is present, check
/// that it is a valid change of the right size.
fn verify(
    coins: &Denominations,
    amount: usize,
    baseline: Option<usize>,
    count: Option<usize>,
    steps: Option<&[CoinStep]>,
) -> (VerificationStatus, Option<String>) {
    if baseline != count {
        return (
            VerificationStatus::Failed,
            Some(format!("expected {baseline:?}, got {count:?}")),
        );
    }
    if let Some(steps) = steps {
        let total: usize = steps.iter().map(|s| s.coin).sum();
        let expected_total = if count.is_some() { amount } else { 0 };
        if steps.len() != count.unwrap_or(0) || total != expected_total {
            return (
                VerificationStatus::Failed,
                Some(format!("path of {} coins sums to {total}", steps.len())),
            );
        }
        if let Some(bad) = steps.iter().find(|s| !coins.contains(s.coin)) {
            return (
                VerificationStatus::Failed,
                Some(format!("coin {} is not a denomination", bad.coin)),
            );
        }
    }
    (VerificationStatus::Passed, None)
}

/// Returns the number of failed verifications.
fn print_summary(measurements: &[Measurement], options: &Options) -> usize {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let passed = measurements
        .iter()
        .filter(|m| m.verification_status == VerificationStatus::Passed)
        .count();
    let failed: Vec<_> = measurements
        .iter()
        .filter(|m| m.verification_status == VerificationStatus::Failed)
        .collect();
    let not_checked = measurements.len() - passed - failed.len();

    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {passed}");
    eprintln!("  ✗ Failed: {}", failed.len());
    eprintln!(
        "  ○ Not checked (amount > {}): {not_checked}",
        options.verify_limit
    );

    for m in &failed {
        eprintln!(
            "  ✗ {} (amount={}): {}",
            m.scenario,
            m.amount,
            m.verification_detail.as_deref().unwrap_or("")
        );
    }

    let mut by_scenario: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    eprintln!();
    for (scenario, ms) in &by_scenario {
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!(
            "  {scenario}: runs={}, max_time={max_time:.3}s, max_rss_delta={max_mem} KiB",
            ms.len()
        );
    }
    eprintln!("{}", "=".repeat(80));

    failed.len()
}

fn count_label(count: Option<usize>) -> String {
    count.map_or_else(|| "-1".to_string(), |c| c.to_string())
}

fn write_csv(measurements: &[Measurement]) {
    println!("scenario,amount,count,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.amount,
            count_label(m.count),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .max()
        .unwrap_or(0)
        .max("scenario".len());

    println!(
        "{:<col1$}  {:>9}  {:>8}  {:>10}  {:>14}  {:>12}  detail",
        "scenario", "amount", "count", "wall_s", "rss_delta_kib", "status"
    );
    println!(
        "{:-<col1$}  {:-<9}  {:-<8}  {:-<10}  {:-<14}  {:-<12}  {:-<6}",
        "", "", "", "", "", "", ""
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>9}  {:>8}  {:>10.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.amount,
            count_label(m.count),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or("")
        );
    }
}

fn write_json(measurements: &[Measurement]) {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = match m.verification_detail.as_ref() {
            Some(d) => format!("\"{}\"", d.replace('"', "'")),
            None => "null".to_string(),
        };
        println!(
            "  {{\"scenario\":\"{}\",\"amount\":{},\"count\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.amount,
            count_label(m.count),
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |process| process.memory() / 1024)
}
