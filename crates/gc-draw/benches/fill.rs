use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use gc_draw::ShapePlotter;

fn hollow_scene() -> ShapePlotter {
    let mut plotter = ShapePlotter::with_size(256, 256, ' ');
    plotter.draw_circle(128, 128, 120, '#', false);
    plotter.draw_rectangle(40, 40, 216, 216, '#', false);
    plotter
}

fn bench_fills(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    group.bench_function("flood_fill", |b| {
        b.iter_batched(
            hollow_scene,
            |mut plotter| plotter.flood_fill(128, 128, '*'),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("scanline_fill", |b| {
        b.iter_batched(
            hollow_scene,
            |mut plotter| plotter.scanline_fill(128, 128, '*'),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_fills);
criterion_main!(benches);
