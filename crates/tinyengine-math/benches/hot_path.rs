use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::f64::consts::PI;

use tinyengine_math::{Camera2d, Transform, Vec2};

fn benchmark_matrices(c: &mut Criterion) {
    let transform = Transform::from_parts(Vec2::new(120.0, -40.0), PI / 3.0, Vec2::new(2.0, 0.5));
    let camera = Camera2d::from_parts(Vec2::new(10.0, 5.0), 1.5, PI / 6.0);

    c.bench_function("transform_to_matrix", |b| {
        b.iter(|| black_box(black_box(&transform).to_matrix()))
    });

    c.bench_function("camera_view_projection", |b| {
        b.iter(|| black_box(black_box(&camera).view_projection_matrix(800.0, 600.0)))
    });

    c.bench_function("camera_screen_to_world", |b| {
        b.iter(|| {
            black_box(&camera).screen_to_world(black_box(Vec2::new(123.0, 456.0)), 800.0, 600.0)
        })
    });
}

fn benchmark_vertices(c: &mut Criterion) {
    let gpu = Transform::from_parts(Vec2::new(400.0, 300.0), 0.7, Vec2::splat(1.25))
        .to_matrix()
        .to_gpu_mat4();

    let mut vertices: Vec<f32> = (0..3000).map(|i| (i as f32 * 0.01).sin()).collect();

    c.bench_function("gpu_mat4_apply_1000_vertices", |b| {
        b.iter(|| {
            gpu.apply_to_vertices(black_box(&mut vertices));
        })
    });
}

criterion_group!(benches, benchmark_matrices, benchmark_vertices);
criterion_main!(benches);
