//! End-to-end sweeps through the public API.
//!
//! Covers the 1D uniform-gas scenario, untouched flat directions,
//! idempotence, and the ordering of the self-gravity hook.

use mhd_flux::types::{IB1, IB2, IB3, IDN, IEN, IM1, IM2, IM3, IPR, IVX, IVY, IVZ};
use mhd_flux::{
    BlockField, BlockGeometry, Cartesian, Direction, FaceField, FluxBuffers, FluxCalculator,
    FluxConfig, FluxInput, GravityFlux, RiemannSolverKind, SelfGravity,
};

const TOL: f64 = 1e-12;
const SENTINEL: f64 = 12345.0;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn uniform_gas(geometry: &BlockGeometry, rho: f64, p: f64) -> BlockField {
    let [nk, nj, ni] = geometry.cell_shape();
    BlockField::from_fn(5, nk, nj, ni, |_, _, _, s| {
        s[IDN] = rho;
        s[IPR] = p;
    })
}

fn calculator(config: FluxConfig, geometry: BlockGeometry) -> FluxCalculator<Cartesian> {
    let coords = Cartesian::uniform(&geometry, [(0.0, 1.0); 3]).unwrap();
    FluxCalculator::new(config, geometry, coords).unwrap()
}

#[test]
fn test_uniform_gas_at_rest_1d() {
    init_logging();
    let geometry = BlockGeometry::new(16, 1, 1, 3).unwrap();
    let w = uniform_gas(&geometry, 1.0, 1.0);

    for order in 1..=3 {
        for riemann in [RiemannSolverKind::Llf, RiemannSolverKind::Hlle, RiemannSolverKind::Hllc] {
            let mut config = FluxConfig::default();
            config.reconstruction.order = order;
            config.riemann = riemann;
            let calc = calculator(config, geometry);

            let mut buffers = FluxBuffers::new(&geometry, &config.physics);
            buffers.fill(SENTINEL);
            calc.calculate_fluxes(&FluxInput::hydro(&w), 0.01, &mut buffers, None)
                .unwrap();

            let flux = buffers.flux(Direction::X1);
            let faces = calc.bounds(Direction::X1).unwrap().i;
            for i in 0..flux.ni() {
                if faces.contains(i) {
                    assert!(flux.get(IDN, 0, 0, i).abs() < TOL);
                    assert!(flux.get(IM2, 0, 0, i).abs() < TOL);
                    assert!(flux.get(IM3, 0, 0, i).abs() < TOL);
                    assert!(flux.get(IEN, 0, 0, i).abs() < TOL);
                    // normal momentum flux is the uniform pressure
                    assert!((flux.get(IM1, 0, 0, i) - 1.0).abs() < TOL);
                } else {
                    assert_eq!(flux.get(IDN, 0, 0, i), SENTINEL, "face {i} outside sweep written");
                }
            }

            for dir in [Direction::X2, Direction::X3] {
                assert!(buffers.flux(dir).as_slice().iter().all(|&x| x == SENTINEL));
            }
            assert!(buffers.ct(Direction::X1).is_none());
        }
    }
}

#[test]
fn test_flat_directions_untouched_with_mhd() {
    let geometry = BlockGeometry::new(12, 12, 1, 2).unwrap();
    let mut config = FluxConfig::default();
    config.physics.magnetic_fields = true;
    let calc = calculator(config, geometry);

    let w = uniform_gas(&geometry, 1.0, 0.6);
    let [nk, nj, ni] = geometry.cell_shape();
    let bcc = BlockField::from_fn(3, nk, nj, ni, |_, _, _, s| {
        s[IB1] = 0.3;
        s[IB2] = -0.2;
    });
    let mut b = FaceField::zeros(&geometry);
    b.x1f.fill(0.3);
    b.x2f.fill(-0.2);

    let mut buffers = FluxBuffers::new(&geometry, &config.physics);
    buffers.fill(SENTINEL);
    calc.calculate_fluxes(&FluxInput::mhd(&w, &bcc, &b), 0.01, &mut buffers, None)
        .unwrap();

    let x3 = buffers.ct(Direction::X3).unwrap();
    assert!(buffers.flux(Direction::X3).as_slice().iter().all(|&x| x == SENTINEL));
    assert!(x3.ey.as_slice().iter().all(|&x| x == SENTINEL));
    assert!(x3.weight.as_slice().iter().all(|&x| x == SENTINEL));

    // static field: zero EMF, balanced weights on every swept face
    for dir in [Direction::X1, Direction::X2] {
        let bounds = calc.bounds(dir).unwrap();
        let ct = buffers.ct(dir).unwrap();
        for j in bounds.j {
            for i in bounds.i {
                assert!(ct.ey.get(0, 0, j, i).abs() < TOL);
                assert!(ct.ez.get(0, 0, j, i).abs() < TOL);
                assert_eq!(ct.weight.get(0, 0, j, i), 0.5);
            }
        }
    }
}

fn wavy_mhd_state(geometry: &BlockGeometry) -> (BlockField, BlockField, FaceField) {
    let [nk, nj, ni] = geometry.cell_shape();
    let phase = |k: usize, j: usize, i: usize| 0.7 * i as f64 + 0.4 * j as f64 + 0.3 * k as f64;
    let w = BlockField::from_fn(5, nk, nj, ni, |k, j, i, s| {
        let x = phase(k, j, i);
        s[IDN] = 1.0 + 0.3 * x.sin();
        s[IVX] = 0.2 * x.cos();
        s[IVY] = -0.1 * (2.0 * x).sin();
        s[IVZ] = 0.05;
        s[IPR] = 0.8 + 0.2 * x.cos();
    });
    let bcc = BlockField::from_fn(3, nk, nj, ni, |k, j, i, s| {
        let x = phase(k, j, i);
        s[IB1] = 0.5;
        s[IB2] = 0.2 * x.sin();
        s[IB3] = 0.1 * x.cos();
    });
    let mut b = FaceField::zeros(geometry);
    b.x1f.fill(0.5);
    (w, bcc, b)
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let geometry = BlockGeometry::new(8, 6, 4, 3).unwrap();
    let mut config = FluxConfig::default();
    config.reconstruction.order = 3;
    config.physics.magnetic_fields = true;
    config.threads = 4;
    let calc = calculator(config, geometry);
    let (w, bcc, b) = wavy_mhd_state(&geometry);
    let input = FluxInput::mhd(&w, &bcc, &b);

    let mut first = FluxBuffers::new(&geometry, &config.physics);
    let mut second = FluxBuffers::new(&geometry, &config.physics);
    second.fill(-1.0);
    calc.calculate_fluxes(&input, 0.005, &mut first, None).unwrap();
    calc.calculate_fluxes(&input, 0.005, &mut second, None).unwrap();
    calc.calculate_fluxes(&input, 0.005, &mut second, None).unwrap();

    // only swept faces are compared; the rest keep their initial fill
    for dir in Direction::ALL {
        let bounds = calc.bounds(dir).unwrap();
        let (f1, f2) = (first.flux(dir), second.flux(dir));
        let (c1, c2) = (first.ct(dir).unwrap(), second.ct(dir).unwrap());
        for k in bounds.k {
            for j in bounds.j {
                for i in bounds.i {
                    for v in 0..f1.nvar() {
                        assert_eq!(f1.get(v, k, j, i).to_bits(), f2.get(v, k, j, i).to_bits());
                    }
                    assert_eq!(c1.ey.get(0, k, j, i).to_bits(), c2.ey.get(0, k, j, i).to_bits());
                    assert_eq!(c1.ez.get(0, k, j, i).to_bits(), c2.ez.get(0, k, j, i).to_bits());
                    assert_eq!(c1.weight.get(0, k, j, i).to_bits(), c2.weight.get(0, k, j, i).to_bits());
                }
            }
        }
    }
}

#[test]
fn test_thread_count_does_not_change_results() {
    let geometry = BlockGeometry::new(8, 8, 4, 2).unwrap();
    let (w, bcc, b) = wavy_mhd_state(&geometry);
    let input = FluxInput::mhd(&w, &bcc, &b);

    let run = |threads: usize| {
        let mut config = FluxConfig::default();
        config.physics.magnetic_fields = true;
        config.threads = threads;
        let calc = calculator(config, geometry);
        let mut buffers = FluxBuffers::new(&geometry, &config.physics);
        calc.calculate_fluxes(&input, 0.002, &mut buffers, None).unwrap();
        buffers
    };
    assert_eq!(run(1), run(3));
}

#[test]
fn test_mhd_3d_outputs_are_finite_and_weights_bounded() {
    let geometry = BlockGeometry::new(8, 6, 4, 3).unwrap();
    let mut config = FluxConfig::default();
    config.physics.magnetic_fields = true;
    config.riemann = RiemannSolverKind::Llf;
    let calc = calculator(config, geometry);
    let (w, bcc, b) = wavy_mhd_state(&geometry);
    let mut buffers = FluxBuffers::new(&geometry, &config.physics);
    buffers.fill(0.25);
    calc.calculate_fluxes(&FluxInput::mhd(&w, &bcc, &b), 0.01, &mut buffers, None)
        .unwrap();

    for dir in Direction::ALL {
        assert!(buffers.flux(dir).all_finite());
        let ct = buffers.ct(dir).unwrap();
        assert!(ct.ey.all_finite() && ct.ez.all_finite());
        assert!(ct.weight.as_slice().iter().all(|w| (0.0..=1.0).contains(w)));
    }
}

#[test]
fn test_gravity_hook_runs_once_after_sweeps() {
    init_logging();
    let geometry = BlockGeometry::new(16, 1, 1, 2).unwrap();
    let mut config = FluxConfig::default();
    config.physics.self_gravity = SelfGravity::Multigrid;
    let calc = calculator(config, geometry);
    let w = uniform_gas(&geometry, 1.0, 2.0);

    let mut calls = 0;
    let mut seen = f64::NAN;
    let mut hook = |buffers: &mut FluxBuffers| {
        calls += 1;
        let flux = buffers.flux_mut(Direction::X1);
        seen = flux.get(IM1, 0, 0, 5);
        flux.set(IM1, 0, 0, 5, seen + 1.0);
    };

    let mut buffers = FluxBuffers::new(&geometry, &config.physics);
    calc.calculate_fluxes(
        &FluxInput::hydro(&w),
        0.01,
        &mut buffers,
        Some(&mut hook as &mut dyn GravityFlux),
    )
    .unwrap();

    assert_eq!(calls, 1);
    assert!((seen - 2.0).abs() < TOL, "hook saw unfinished flux {seen}");
    assert!((buffers.flux(Direction::X1).get(IM1, 0, 0, 5) - 3.0).abs() < TOL);
}

#[test]
fn test_gravity_hook_ignored_when_disabled() {
    let geometry = BlockGeometry::new(16, 1, 1, 2).unwrap();
    let config = FluxConfig::default();
    let calc = calculator(config, geometry);
    let w = uniform_gas(&geometry, 1.0, 1.0);

    let mut calls = 0;
    let mut hook = |_: &mut FluxBuffers| calls += 1;
    let mut buffers = FluxBuffers::new(&geometry, &config.physics);
    calc.calculate_fluxes(
        &FluxInput::hydro(&w),
        0.01,
        &mut buffers,
        Some(&mut hook as &mut dyn GravityFlux),
    )
    .unwrap();
    assert_eq!(calls, 0);
}
