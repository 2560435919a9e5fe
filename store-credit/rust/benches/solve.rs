use std::fmt::Write;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use store_credit::{find_pair, run, Store};

const SIZE: usize = 1024 * 8;
const CASES: usize = 64;

fn random_values(rng: &mut SmallRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(1..=1_000_000)).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);

    let mut group = c.benchmark_group("Solve");
    group.throughput(Throughput::Elements(SIZE as u64));

    group.bench_function(&format!("find_pair unsolvable {}", SIZE), |b| {
        // Odd credit, even values, so every item is searched.
        let values = random_values(&mut rng, SIZE).into_iter().map(|v| v * 2).collect::<Vec<_>>();
        let store = Store::from_values(1, &values);
        b.iter(|| find_pair(black_box(&store)))
    });

    group.bench_function(&format!("find_pair solvable {}", SIZE), |b| {
        let values = random_values(&mut rng, SIZE);
        let store = Store::from_values(values[SIZE / 3] + values[SIZE / 2], &values);
        b.iter(|| find_pair(black_box(&store)))
    });

    group.finish();

    c.bench_function(&format!("run {} cases", CASES), |b| {
        let mut input = String::with_capacity(CASES * SIZE * 8);
        writeln!(input, "{CASES}").unwrap();
        for _ in 0..CASES {
            let values = random_values(&mut rng, SIZE);
            writeln!(input, "{}", values[0] + values[SIZE - 1]).unwrap();
            writeln!(input, "{SIZE}").unwrap();
            let line = values.iter().map(i64::to_string).collect::<Vec<_>>().join(" ");
            writeln!(input, "{line}").unwrap();
        }

        let mut output = Vec::with_capacity(CASES * 32);
        b.iter(|| {
            output.clear();
            run(black_box(input.as_bytes()), &mut output).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
