//! Hot-path benchmarks: matrix products, inverses, and the per-frame camera build
//!
//! Run with: cargo bench -p quickmath
//! Compare backends with: cargo bench -p quickmath --no-default-features

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quickmath::{Mat4, Quat, Vec3, Vec4};

fn model() -> Mat4 {
    Mat4::from_translation(Vec3::new(1.0, -2.0, 3.0))
        * Mat4::from_euler(Vec3::new(10.0, 20.0, 30.0))
        * Mat4::from_scale(Vec3::new(2.0, 0.5, 1.5))
}

fn bench_mat4(c: &mut Criterion) {
    let a = model();
    let b = Mat4::look_at(Vec3::new(0.0, 3.0, 8.0), Vec3::ZERO, Vec3::Y);
    let v = Vec4::new(1.0, 2.0, 3.0, 1.0);

    let mut group = c.benchmark_group(format!("mat4/{}", quickmath::BACKEND));
    group.bench_function("mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    group.bench_function("mul_vec4", |bench| bench.iter(|| black_box(a) * black_box(v)));
    group.bench_function("inverse", |bench| bench.iter(|| black_box(a).inverse()));
    group.bench_function("transpose", |bench| bench.iter(|| black_box(a).transpose()));
    group.finish();
}

fn bench_quat(c: &mut Criterion) {
    let a = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 30.0);
    let b = Quat::from_euler(Vec3::new(45.0, -10.0, 80.0));

    let mut group = c.benchmark_group("quat");
    group.bench_function("slerp", |bench| {
        bench.iter(|| black_box(a).slerp(black_box(b), black_box(0.3)))
    });
    group.bench_function("slerp_shortest", |bench| {
        bench.iter(|| black_box(a).slerp_shortest(black_box(b), black_box(0.3)))
    });
    group.bench_function("to_mat4", |bench| bench.iter(|| black_box(b).to_mat4()));
    group.finish();
}

fn bench_camera(c: &mut Criterion) {
    c.bench_function("view_projection", |bench| {
        bench.iter(|| {
            let view = Mat4::look_at(black_box(Vec3::new(4.0, 2.0, 6.0)), Vec3::ZERO, Vec3::Y);
            let proj = Mat4::perspective(black_box(60.0), 16.0 / 9.0, 0.1, 100.0);
            proj * view
        })
    });
}

criterion_group!(benches, bench_mat4, bench_quat, bench_camera);
criterion_main!(benches);
