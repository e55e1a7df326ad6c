use criterion::{black_box, criterion_group, criterion_main, Criterion};
use volren_lib::{
    color,
    ssao::SsaoKernel,
    transfer_function::{ControlPoint, TransferFunctionTable},
    TransferFunction,
};

fn full_transfer_function() -> TransferFunction {
    let points = (0..8)
        .map(|i| {
            let v = i as f32 / 7.0;
            ControlPoint::new(v, color::rgb(v, 1.0 - v, 0.5), (v * 3.0).sin().abs())
        })
        .collect();
    TransferFunction::from_points(points)
}

pub fn table_rebuild(c: &mut Criterion) {
    let default = TransferFunction::default();
    let full = full_transfer_function();

    c.bench_function("table default", |b| {
        b.iter(|| TransferFunctionTable::build(black_box(default.points())))
    });
    c.bench_function("table 8 points", |b| {
        b.iter(|| TransferFunctionTable::build(black_box(full.points())))
    });
}

pub fn kernel_regeneration(c: &mut Criterion) {
    let mut kernel = SsaoKernel::with_seed(0);

    c.bench_function("ssao kernel 64", |b| {
        b.iter(|| kernel.update_kernel(black_box(64)))
    });
    c.bench_function("ssao noise 16", |b| {
        b.iter(|| kernel.update_noise(black_box(16)))
    });
}

criterion_group! {
    name = tables;
    config = Criterion::default().significance_level(0.1).sample_size(50);
    targets = table_rebuild, kernel_regeneration
}

criterion_main!(tables);
