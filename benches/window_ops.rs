use coin_dp::problems::coin_change::CoinChangeProblem;
use coin_dp::{Denominations, LayeredProblem};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_window_ops(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let mut values: Vec<usize> = (0..16).map(|_| rng.gen_range(2..1_024)).collect();
    values.push(1);
    let coins = Denominations::new(values).expect("positive coins");
    let amount = 1 << 16;
    let problem = CoinChangeProblem::new(coins, amount);

    let block = 256;
    let start = amount - block;
    let mut frontier_start = problem.init_frontier();
    problem.advance_block(0, start, &mut frontier_start);
    let mut frontier_end = frontier_start.clone();
    problem.advance_block(start, amount, &mut frontier_end);
    let boundary = problem.terminal_boundary(&frontier_end);

    let mut group = c.benchmark_group("window_ops");
    group.bench_function("forward_step", |b| {
        b.iter_batched_ref(
            || frontier_start.clone(),
            |frontier| problem.forward_step(start, black_box(frontier)),
            criterion::BatchSize::SmallInput,
        )
    });
    group.bench_function("advance_block", |b| {
        b.iter_batched_ref(
            || frontier_start.clone(),
            |frontier| problem.advance_block(start, amount, black_box(frontier)),
            criterion::BatchSize::SmallInput,
        )
    });
    group.bench_function("trace_block", |b| {
        b.iter(|| {
            let traced =
                problem.trace_block(start, amount, black_box(&frontier_start), &boundary);
            black_box(traced);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_window_ops);
criterion_main!(benches);
