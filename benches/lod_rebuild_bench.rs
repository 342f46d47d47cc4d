use criterion::{Criterion, criterion_group, criterion_main};
use oscillo_rs::lod::{AxisLabelLod, GridLod, GridStyle, LabelStyle, ScaleStateMachine, ZoomTick};
use std::hint::black_box;

fn bench_grid_rebuild_dense(c: &mut Criterion) {
    let mut grid = GridLod::new(8_000).expect("valid grid");
    // Refine to minimum spacing for the worst-case line count.
    while grid.spacing() > 1 {
        grid.double_down();
    }

    c.bench_function("grid_rebuild_dense", |b| {
        b.iter(|| black_box(grid).build(black_box(GridStyle::default())))
    });
}

fn bench_label_rebuild_dense(c: &mut Criterion) {
    let labels = AxisLabelLod::new(2_000, 1, 1.0).expect("valid labels");

    c.bench_function("label_rebuild_dense", |b| {
        b.iter(|| black_box(labels).build(black_box(LabelStyle::default())))
    });
}

fn bench_scale_machine_tick_stream(c: &mut Criterion) {
    c.bench_function("scale_machine_tick_stream_10k", |b| {
        b.iter(|| {
            let mut machine = ScaleStateMachine::new();
            let mut transitions = 0usize;
            for index in 0..10_000 {
                let tick = if index % 3 == 0 {
                    ZoomTick::Out
                } else {
                    ZoomTick::In
                };
                if machine.apply_tick(black_box(tick)).is_some() {
                    transitions += 1;
                }
            }
            black_box(transitions)
        })
    });
}

criterion_group!(
    benches,
    bench_grid_rebuild_dense,
    bench_label_rebuild_dense,
    bench_scale_machine_tick_stream
);
criterion_main!(benches);
