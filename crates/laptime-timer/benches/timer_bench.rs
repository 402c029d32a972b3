//! Benchmarks for laptime timer operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use laptime_timer::{Timer, TimerCollection};

fn bench_timer_run(c: &mut Criterion) {
    let mut timer = Timer::new("bench");

    c.bench_function("timer_start_lap_commit_stop", |b| {
        b.iter(|| {
            timer.start();
            let _ = timer.lap();
            let _ = timer.commit("checkpoint");
            timer.stop();
            black_box(timer.total_time())
        })
    });
}

fn bench_timer_lap(c: &mut Criterion) {
    let mut timer = Timer::new("bench");
    timer.start();

    c.bench_function("timer_lap", |b| {
        b.iter(|| {
            // Restart every 1024 laps to keep the history bounded
            if timer.laps().len() >= 1024 {
                timer.start();
            }
            black_box(timer.lap())
        })
    });
}

fn bench_average_lap(c: &mut Criterion) {
    let mut timer = Timer::new("bench");
    timer.start();
    for _ in 0..1000 {
        let _ = timer.lap();
    }

    c.bench_function("timer_average_lap_1000", |b| {
        b.iter(|| black_box(timer.average_lap()))
    });
}

fn bench_collection_queries(c: &mut Criterion) {
    let timers: TimerCollection = (0..1000)
        .map(|i| Timer::new(format!("worker-{}", i % 100)))
        .collect();

    c.bench_function("collection_filter_by_name", |b| {
        b.iter(|| black_box(timers.filter_by_name(black_box("worker-4"))))
    });

    c.bench_function("collection_get_first_by_name", |b| {
        b.iter(|| black_box(timers.get_first_by_name(black_box("worker-99"))))
    });
}

criterion_group!(
    benches,
    bench_timer_run,
    bench_timer_lap,
    bench_average_lap,
    bench_collection_queries
);
criterion_main!(benches);
