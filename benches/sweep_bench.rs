//! Benchmarks for full flux sweeps.
//!
//! Run with: `cargo bench --bench sweep_bench`
//!
//! Compares reconstruction orders on a hydro block and thread counts on a
//! magnetized block.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mhd_flux::types::{IB1, IB2, IB3, IDN, IPR, IVX, IVY};
use mhd_flux::{
    BlockField, BlockGeometry, Cartesian, FaceField, FluxBuffers, FluxCalculator, FluxConfig,
    FluxInput,
};

const NGHOST: usize = 3;

fn smooth_state(geometry: &BlockGeometry) -> (BlockField, BlockField, FaceField) {
    let [nk, nj, ni] = geometry.cell_shape();
    let w = BlockField::from_fn(5, nk, nj, ni, |k, j, i, s| {
        let x = 0.1 * (i + 2 * j + 3 * k) as f64;
        s[IDN] = 1.0 + 0.2 * x.sin();
        s[IVX] = 0.1 * x.cos();
        s[IVY] = 0.05;
        s[IPR] = 1.0;
    });
    let bcc = BlockField::from_fn(3, nk, nj, ni, |k, j, i, s| {
        let x = 0.1 * (i + j + k) as f64;
        s[IB1] = 0.3;
        s[IB2] = 0.1 * x.sin();
        s[IB3] = 0.1 * x.cos();
    });
    let mut b = FaceField::zeros(geometry);
    b.x1f.fill(0.3);
    (w, bcc, b)
}

fn setup(config: FluxConfig, n: usize) -> (FluxCalculator<Cartesian>, BlockGeometry) {
    let geometry = BlockGeometry::new(n, n, n, NGHOST).unwrap();
    let coords = Cartesian::uniform(&geometry, [(0.0, 1.0); 3]).unwrap();
    (FluxCalculator::new(config, geometry, coords).unwrap(), geometry)
}

/// Hydro sweeps at each reconstruction order.
fn bench_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("hydro_sweep_32cubed");
    for order in 1..=3u32 {
        let mut config = FluxConfig::default();
        config.reconstruction.order = order;
        let (calc, geometry) = setup(config, 32);
        let (w, _, _) = smooth_state(&geometry);
        let mut buffers = FluxBuffers::new(&geometry, &config.physics);

        group.bench_with_input(BenchmarkId::new("order", order), &order, |b, _| {
            b.iter(|| {
                calc.calculate_fluxes(black_box(&FluxInput::hydro(&w)), 1e-3, &mut buffers, None)
                    .unwrap()
            })
        });
    }
    group.finish();
}

/// Magnetized sweeps with increasing worker counts.
fn bench_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("mhd_sweep_32cubed");
    for threads in [1usize, 2, 4, 8] {
        let mut config = FluxConfig::default();
        config.physics.magnetic_fields = true;
        config.threads = threads;
        let (calc, geometry) = setup(config, 32);
        let (w, bcc, face) = smooth_state(&geometry);
        let mut buffers = FluxBuffers::new(&geometry, &config.physics);

        group.bench_with_input(BenchmarkId::new("threads", threads), &threads, |b, _| {
            b.iter(|| {
                calc.calculate_fluxes(
                    black_box(&FluxInput::mhd(&w, &bcc, &face)),
                    1e-3,
                    &mut buffers,
                    None,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_orders, bench_threads);
criterion_main!(benches);
