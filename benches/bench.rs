use std::{
    fs::File,
    io::{BufRead, BufReader},
    time::Duration,
};

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use medians::{median_of, median_of_sorted, RunningMedian};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut data = Vec::with_capacity(2000);
    let f = BufReader::new(File::open("./test_data/2000_values.txt").unwrap());

    for line in f.lines() {
        let v: f32 = line.unwrap().parse().unwrap();
        data.push(v);
    }

    let mut group = c.benchmark_group("benches");
    group
        .measurement_time(Duration::from_secs_f32(10.))
        .sample_size(1000);

    group.bench_function("running median", |b| {
        b.iter(|| {
            let mut running = RunningMedian::with_capacity(data.len());

            for v in data.iter() {
                running.push(*v);
            }

            let _median = running.median_or_default();
        })
    });

    group.bench_function("quickselect median", |b| {
        b.iter_batched_ref(
            || data.clone(),
            |batch| median_of(batch),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("full sort median", |b| {
        b.iter_batched_ref(
            || data.clone(),
            |batch| {
                batch.sort_by(f32::total_cmp);
                median_of_sorted(batch)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
