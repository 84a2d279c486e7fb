use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hora_dasha::{balance_fraction, build_periods, compute_dasha_timeline, nakshatra_index};
use hora_time::CivilTime;

fn primitives_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("primitives");
    group.bench_function("nakshatra_index", |b| {
        b.iter(|| nakshatra_index(black_box(lon)))
    });
    group.bench_function("balance_fraction", |b| {
        b.iter(|| balance_fraction(black_box(lon)))
    });
    group.finish();
}

fn timeline_bench(c: &mut Criterion) {
    let anchor = CivilTime::from_date(2000, 1, 1);

    let mut group = c.benchmark_group("timeline");
    group.bench_function("build_periods", |b| {
        b.iter(|| build_periods(black_box(3), black_box(0.42), black_box(2_451_545.0)))
    });
    group.bench_function("compute_dasha_timeline", |b| {
        b.iter(|| compute_dasha_timeline(black_box(anchor), black_box(123.456)))
    });
    group.finish();
}

criterion_group!(benches, primitives_bench, timeline_bench);
criterion_main!(benches);
