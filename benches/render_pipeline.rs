use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use fractal_view::{RenderGrid, Viewport, render, render_serial};

fn bench_small_grid(c: &mut Criterion) {
    let viewport = Viewport::new(RenderGrid::new(320, 180).unwrap());
    let mut group = c.benchmark_group("render_320x180");

    group.bench_function("serial", |b| b.iter(|| render_serial(black_box(&viewport))));
    group.bench_function("rayon", |b| b.iter(|| render(black_box(&viewport))));

    group.finish();
}

fn bench_reference_grid(c: &mut Criterion) {
    let viewport = Viewport::new(RenderGrid::default());
    let mut group = c.benchmark_group("render_1920x1080");
    group.sample_size(10);

    group.bench_function("rayon", |b| b.iter(|| render(black_box(&viewport))));

    group.finish();
}

criterion_group!(benches, bench_small_grid, bench_reference_grid);
criterion_main!(benches);
