use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flat_cube::core::{Cube, Palette, SimpleRng};
use flat_cube::engine::{scramble, CubeSession, RotationEngine};
use flat_cube::term::{CubeView, Viewport};
use flat_cube::types::{ColumnDirection, Orientation, RowDirection};

fn bench_rotate_row(c: &mut Criterion) {
    let mut cube = Cube::default();
    let mut engine = RotationEngine::new();
    let orientation = Orientation::default();

    c.bench_function("rotate_row_3x3", |b| {
        b.iter(|| {
            engine
                .rotate_row(&mut cube, orientation, black_box(1), RowDirection::Right)
                .ok();
        })
    });
}

fn bench_rotate_column(c: &mut Criterion) {
    let mut cube = Cube::create(16, 16, Palette::default()).unwrap();
    let mut engine = RotationEngine::new();
    let orientation = Orientation::default();

    c.bench_function("rotate_column_16x16", |b| {
        b.iter(|| {
            engine
                .rotate_column(&mut cube, orientation, black_box(7), ColumnDirection::Up)
                .ok();
        })
    });
}

fn bench_scramble(c: &mut Criterion) {
    let mut engine = RotationEngine::new();
    let orientation = Orientation::default();

    c.bench_function("scramble_25", |b| {
        b.iter(|| {
            let mut cube = Cube::default();
            let mut rng = SimpleRng::new(12345);
            scramble(&mut engine, &mut cube, orientation, &mut rng, 25).ok();
            cube
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session = CubeSession::default();
    let view = CubeView::default();

    c.bench_function("render_80x30", |b| {
        b.iter(|| view.render(black_box(&session), Viewport::new(80, 30)))
    });
}

criterion_group!(
    benches,
    bench_rotate_row,
    bench_rotate_column,
    bench_scramble,
    bench_render
);
criterion_main!(benches);
