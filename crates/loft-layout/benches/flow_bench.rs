//! Benchmarks for the flow layout engine.
//!
//! Run with: cargo bench -p loft-layout --bench flow_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use loft_layout::{FixedItem, FloorFill, Flow, HAlign, MeasureSpec, Rect, VAlign};
use std::hint::black_box;

/// A strip of small chips with slightly varied sizes, so wraps land at
/// uneven spots like real content.
fn chip_row(count: usize) -> Vec<FixedItem> {
    (0..count)
        .map(|i| FixedItem::new(6 + (i % 7) as u16, 1 + (i % 3) as u16))
        .collect()
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow_measure");
    for count in [10usize, 100, 1000] {
        let items = chip_row(count);
        let refs: Vec<&FixedItem> = items.iter().collect();
        let flow = Flow::new();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                black_box(flow.measure(
                    black_box(&refs),
                    MeasureSpec::AtMost(120),
                    MeasureSpec::Unspecified,
                ))
            });
        });
    }
    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow_split");
    for count in [10usize, 100, 1000] {
        let items = chip_row(count);
        let refs: Vec<&FixedItem> = items.iter().collect();
        let flow = Flow::new();
        let area = Rect::new(0, 0, 120, 400);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(flow.split(area, black_box(&refs))));
        });
    }
    group.finish();
}

fn bench_wrap_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow_wrap_density");
    let items = vec![FixedItem::new(10, 1); 256];
    let refs: Vec<&FixedItem> = items.iter().collect();
    let flow = Flow::new();
    group.throughput(Throughput::Elements(items.len() as u64));
    group.bench_function("single_floor", |b| {
        b.iter(|| black_box(flow.split(Rect::new(0, 0, 4096, 100), black_box(&refs))));
    });
    group.bench_function("floor_per_child", |b| {
        b.iter(|| black_box(flow.split(Rect::new(0, 0, 10, 400), black_box(&refs))));
    });
    group.finish();
}

fn bench_fill_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow_fill");
    let items = chip_row(200);
    let refs: Vec<&FixedItem> = items.iter().collect();
    let area = Rect::new(0, 0, 120, 400);
    group.throughput(Throughput::Elements(items.len() as u64));
    group.bench_function("flush", |b| {
        let flow = Flow::new();
        b.iter(|| black_box(flow.split(area, black_box(&refs))));
    });
    group.bench_function("filled", |b| {
        let flow = Flow::new()
            .halign(HAlign::Fill)
            .valign(VAlign::Fill)
            .floor_fill(FloorFill::Even);
        b.iter(|| black_box(flow.split(area, black_box(&refs))));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_measure,
    bench_split,
    bench_wrap_density,
    bench_fill_distribution
);
criterion_main!(benches);
