//! Directional flux sweeps over one mesh block.
//!
//! For each axis with extent the calculator visits every face row of the
//! sweep bounds and runs, per row:
//!
//! 1. reconstruction of every active slot into left/right states
//! 2. the Riemann solve, writing fluxes and (with magnetic fields) EMFs
//! 3. the CT weights from the just-computed mass flux
//!
//! Rows are independent and are spread over a rayon pool owned by the
//! calculator. After all sweeps the self-gravity hook runs on the calling
//! thread.

use log::{debug, info, trace};
use rayon::prelude::*;

use super::bounds::{SweepBounds, sweep_bounds};
use super::buffers::{CtRow, FluxBuffers, FluxInput};
use super::ct_weight::fill_row_weights;
use super::scratch::{ScratchPool, SweepScratch};
use crate::config::FluxConfig;
use crate::error::{ConfigError, FluxError};
use crate::gravity::GravityFlux;
use crate::mesh::{BlockField, BlockGeometry, Coordinates};
use crate::reconstruct::{FaceRow, Reconstruct, Reconstructor};
use crate::riemann::{FluxRow, RiemannContext, RiemannSolver, RiemannSolverKind};
use crate::types::{Direction, IDN, IVX, IVY, IVZ, NFIELD, VariableLayout};

/// Source and target slots reconstructed by one sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SlotPlan {
    /// Slots of `W`, reconstructed into the same interface slot
    hydro: Vec<usize>,
    /// `(Bcc slot, interface slot)` for the two transverse field components
    field: Option<[(usize, usize); 2]>,
}

impl SlotPlan {
    fn new(dir: Direction, layout: &VariableLayout) -> Self {
        let mut hydro = vec![IDN, IVX, IVY, IVZ];
        hydro.extend(layout.energy());
        let field = layout.is_magnetic().then(|| {
            let (by, bz) = dir.transverse_field_slots();
            [(by, layout.iby()), (bz, layout.ibz())]
        });
        Self { hydro, field }
    }
}

/// Flux pipeline for one block configuration.
///
/// Built once per block; [`calculate_fluxes`](Self::calculate_fluxes) is then
/// called every stage of every step.
///
/// ```
/// use mhd_flux::{BlockField, BlockGeometry, Cartesian, FluxBuffers, FluxCalculator, FluxConfig, FluxInput};
///
/// let geometry = BlockGeometry::new(16, 1, 1, 2).unwrap();
/// let coords = Cartesian::uniform(&geometry, [(0.0, 1.0); 3]).unwrap();
/// let config = FluxConfig::default();
/// let calc = FluxCalculator::new(config, geometry, coords).unwrap();
///
/// let [nk, nj, ni] = geometry.cell_shape();
/// let w = BlockField::from_fn(5, nk, nj, ni, |_, _, _, s| {
///     s[0] = 1.0;
///     s[4] = 1.0;
/// });
/// let mut buffers = FluxBuffers::new(&geometry, &config.physics);
/// calc.calculate_fluxes(&FluxInput::hydro(&w), 1e-3, &mut buffers, None).unwrap();
/// ```
pub struct FluxCalculator<C: Coordinates> {
    config: FluxConfig,
    geometry: BlockGeometry,
    coordinates: C,
    reconstructor: Reconstructor,
    riemann: RiemannSolverKind,
    ctx: RiemannContext,
    plans: [SlotPlan; 3],
    bounds: [Option<SweepBounds>; 3],
    pool: rayon::ThreadPool,
    scratch: ScratchPool,
}

impl<C: Coordinates> FluxCalculator<C> {
    /// Validate the configuration against the block and set up workers.
    pub fn new(config: FluxConfig, geometry: BlockGeometry, coordinates: C) -> Result<Self, FluxError> {
        config.validate()?;
        let order = config.reconstruction_order()?;
        let reconstructor = Reconstructor::new(order, config.reconstruction.limiter);

        let ghosts = reconstructor.required_ghosts();
        if geometry.nghost() < ghosts {
            return Err(ConfigError::invalid(
                "nghost",
                geometry.nghost(),
                &format!("{} reconstruction needs at least {} ghost cells", reconstructor.name(), ghosts),
            )
            .into());
        }
        for dir in Direction::ALL {
            if coordinates.ncells(dir) != geometry.ncells(dir) {
                return Err(FluxError::ShapeMismatch {
                    what: "coordinates",
                    expected: format!("{} cells along {}", geometry.ncells(dir), dir),
                    actual: coordinates.ncells(dir).to_string(),
                });
            }
        }

        let physics = config.physics;
        let layout = physics.layout();
        let ctx = RiemannContext::new(layout, physics.eos);
        let plans = Direction::ALL.map(|dir| SlotPlan::new(dir, &layout));
        let bounds = Direction::ALL.map(|dir| sweep_bounds(dir, &geometry, physics.magnetic_fields));

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("mhd-flux-{i}"))
            .build()
            .map_err(|e| FluxError::ThreadPool(e.to_string()))?;
        let n_faces = geometry.ncells(Direction::X1) + 1;
        let scratch = ScratchPool::new(pool.current_num_threads(), n_faces, layout.nwave());

        info!(
            "flux calculator: {}D {} block, {} reconstruction ({}), {} solver, {} eos, magnetic={}, self_gravity={}, {} threads",
            geometry.dimensions(),
            coordinates.name(),
            reconstructor.name(),
            config.reconstruction.limiter.name(),
            config.riemann.name(),
            physics.eos.name(),
            physics.magnetic_fields,
            physics.self_gravity.name(),
            pool.current_num_threads(),
        );

        Ok(Self {
            config,
            geometry,
            coordinates,
            reconstructor,
            riemann: config.riemann,
            ctx,
            plans,
            bounds,
            pool,
            scratch,
        })
    }

    pub fn config(&self) -> &FluxConfig {
        &self.config
    }

    pub fn geometry(&self) -> &BlockGeometry {
        &self.geometry
    }

    pub fn coordinates(&self) -> &C {
        &self.coordinates
    }

    /// Variable layout of states and fluxes.
    pub fn layout(&self) -> VariableLayout {
        self.ctx.layout
    }

    /// Bounds of the sweep along `dir`, `None` if it is skipped.
    pub fn bounds(&self, dir: Direction) -> Option<SweepBounds> {
        self.bounds[dir.index()]
    }

    /// Number of worker threads.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Compute fluxes, EMFs and CT weights for every swept direction, then
    /// apply the self-gravity hook.
    ///
    /// All shapes are checked before anything is written. Non-finite
    /// results are not reported.
    pub fn calculate_fluxes(
        &self,
        input: &FluxInput<'_>,
        dt: f64,
        buffers: &mut FluxBuffers,
        gravity: Option<&mut dyn GravityFlux>,
    ) -> Result<(), FluxError> {
        self.check_input(input)?;
        self.check_buffers(buffers)?;
        let self_gravity = self.config.physics.self_gravity;
        if self_gravity.is_enabled() && gravity.is_none() {
            return Err(FluxError::MissingField("gravity flux hook"));
        }

        for dir in Direction::ALL {
            match self.bounds[dir.index()] {
                Some(bounds) => self.sweep(dir, bounds, input, dt, buffers),
                None => trace!("{dir} sweep skipped: single cell along axis"),
            }
        }

        if let Some(hook) = gravity.filter(|_| self_gravity.is_enabled()) {
            trace!("adding {} self-gravity flux", self_gravity.name());
            hook.add_gravity_flux(buffers);
        }
        Ok(())
    }

    fn sweep(&self, dir: Direction, bounds: SweepBounds, input: &FluxInput<'_>, dt: f64, buffers: &mut FluxBuffers) {
        debug!("sweep {bounds} ({} faces)", bounds.faces());

        let (flux, ct) = buffers.split_mut(dir);
        let nj = flux.nj();
        let plan = &self.plans[dir.index()];
        let visit = |r: usize, flux_row: &mut [f64], ct_row| {
            let (k, j) = (r / nj, r % nj);
            if bounds.contains_row(k, j) {
                let mut scratch = self.scratch.lock_current();
                self.sweep_row(dir, bounds, plan, input, dt, (k, j), flux_row, ct_row, &mut scratch);
            }
        };

        self.pool.install(|| match ct {
            Some(faces) => flux
                .par_rows_mut()
                .zip(faces.par_rows_mut())
                .enumerate()
                .for_each(|(r, (flux_row, ct_row))| visit(r, flux_row, Some(ct_row))),
            None => flux
                .par_rows_mut()
                .enumerate()
                .for_each(|(r, flux_row)| visit(r, flux_row, None)),
        });
    }

    #[allow(clippy::too_many_arguments)]
    fn sweep_row(
        &self,
        dir: Direction,
        bounds: SweepBounds,
        plan: &SlotPlan,
        input: &FluxInput<'_>,
        dt: f64,
        (k, j): (usize, usize),
        flux: &mut [f64],
        ct: Option<CtRow<'_>>,
        scratch: &mut SweepScratch,
    ) {
        let SweepScratch { states, dxw } = scratch;
        let row = FaceRow::new(k, j, bounds.i);

        for &slot in &plan.hydro {
            self.reconstructor.reconstruct(dir, row, input.w, slot, slot, states);
        }
        if let (Some(field), Some(bcc)) = (plan.field, input.bcc) {
            for (src, dst) in field {
                self.reconstructor.reconstruct(dir, row, bcc, src, dst, states);
            }
        }

        let bx = input.b.map(|b| b.component(dir).row(k, j));
        let (ey, ez, weight) = match ct {
            Some(CtRow { ey, ez, weight }) => (Some(ey), Some(ez), Some(weight)),
            None => (None, None, None),
        };
        self.riemann.solve(
            &self.ctx,
            dir,
            bounds.i,
            bx,
            states,
            FluxRow {
                flux: &mut *flux,
                ey,
                ez,
            },
        );

        if let Some(weight) = weight {
            self.coordinates.center_width(dir, k, j, bounds.i, dxw);
            fill_row_weights(dt, bounds.i, self.ctx.layout.nhydro(), flux, states, dxw, weight);
        }
    }

    fn check_input(&self, input: &FluxInput<'_>) -> Result<(), FluxError> {
        let [nk, nj, ni] = self.geometry.cell_shape();
        check_shape("w", input.w, [self.ctx.layout.nhydro(), nk, nj, ni])?;
        if !self.ctx.layout.is_magnetic() {
            return Ok(());
        }
        let bcc = input.bcc.ok_or(FluxError::MissingField("bcc"))?;
        check_shape("bcc", bcc, [NFIELD, nk, nj, ni])?;
        let b = input.b.ok_or(FluxError::MissingField("b"))?;
        for dir in Direction::ALL {
            let [fk, fj, fi] = self.geometry.face_shape(dir);
            check_shape(face_name(dir), b.component(dir), [1, fk, fj, fi])?;
        }
        Ok(())
    }

    fn check_buffers(&self, buffers: &FluxBuffers) -> Result<(), FluxError> {
        let nhydro = self.ctx.layout.nhydro();
        if buffers.is_magnetic() != self.ctx.layout.is_magnetic() {
            return Err(FluxError::ShapeMismatch {
                what: "ct buffers",
                expected: if self.ctx.layout.is_magnetic() { "allocated" } else { "absent" }.to_string(),
                actual: if buffers.is_magnetic() { "allocated" } else { "absent" }.to_string(),
            });
        }
        for dir in Direction::ALL {
            let [fk, fj, fi] = self.geometry.face_shape(dir);
            check_shape("flux", buffers.flux(dir), [nhydro, fk, fj, fi])?;
            if let Some(ct) = buffers.ct(dir) {
                for (what, field) in [("ey", &ct.ey), ("ez", &ct.ez), ("weight", &ct.weight)] {
                    check_shape(what, field, [1, fk, fj, fi])?;
                }
            }
        }
        Ok(())
    }
}

fn check_shape(what: &'static str, field: &BlockField, expected: [usize; 4]) -> Result<(), FluxError> {
    if field.has_shape(expected) {
        Ok(())
    } else {
        Err(FluxError::ShapeMismatch {
            what,
            expected: format!("{expected:?}"),
            actual: format!("{:?}", field.shape()),
        })
    }
}

fn face_name(dir: Direction) -> &'static str {
    match dir {
        Direction::X1 => "b.x1f",
        Direction::X2 => "b.x2f",
        Direction::X3 => "b.x3f",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EquationOfState;
    use crate::mesh::Cartesian;

    fn geometry_1d() -> BlockGeometry {
        BlockGeometry::new(16, 1, 1, 2).unwrap()
    }

    fn calculator(config: FluxConfig, geometry: BlockGeometry) -> Result<FluxCalculator<Cartesian>, FluxError> {
        let coords = Cartesian::uniform(&geometry, [(0.0, 1.0); 3]).unwrap();
        FluxCalculator::new(config, geometry, coords)
    }

    #[test]
    fn test_slot_plans() {
        let layout = VariableLayout::new(true, true);
        let plan = SlotPlan::new(Direction::X2, &layout);
        assert_eq!(plan.hydro, vec![IDN, IVX, IVY, IVZ, 4]);
        assert_eq!(plan.field, Some([(2, 5), (0, 6)]));
        let plan = SlotPlan::new(Direction::X1, &VariableLayout::new(false, false));
        assert_eq!(plan.hydro.len(), 4);
        assert!(plan.field.is_none());
    }

    #[test]
    fn test_ppm_needs_three_ghosts() {
        let mut config = FluxConfig::default();
        config.reconstruction.order = 3;
        let err = calculator(config, geometry_1d()).err().unwrap();
        assert!(matches!(err, FluxError::Config(ConfigError::InvalidValue { .. })));
        assert!(calculator(config, BlockGeometry::new(16, 1, 1, 3).unwrap()).is_ok());
    }

    #[test]
    fn test_invalid_order_fails_at_setup() {
        let mut config = FluxConfig::default();
        config.reconstruction.order = 7;
        assert!(matches!(calculator(config, geometry_1d()), Err(FluxError::Config(_))));
    }

    #[test]
    fn test_coordinates_must_match_block() {
        let other = BlockGeometry::new(8, 1, 1, 2).unwrap();
        let coords = Cartesian::uniform(&other, [(0.0, 1.0); 3]).unwrap();
        let result = FluxCalculator::new(FluxConfig::default(), geometry_1d(), coords);
        assert!(matches!(result, Err(FluxError::ShapeMismatch { what: "coordinates", .. })));
    }

    #[test]
    fn test_shape_mismatch_rejected_before_write() {
        let geometry = geometry_1d();
        let config = FluxConfig::default();
        let calc = calculator(config, geometry).unwrap();
        let w = BlockField::filled(5, 1, 1, 10, 1.0);
        let mut buffers = FluxBuffers::new(&geometry, &config.physics);
        buffers.fill(7.0);
        let err = calc
            .calculate_fluxes(&FluxInput::hydro(&w), 0.1, &mut buffers, None)
            .unwrap_err();
        assert!(matches!(err, FluxError::ShapeMismatch { what: "w", .. }));
        assert!(buffers.flux(Direction::X1).as_slice().iter().all(|&x| x == 7.0));
    }

    #[test]
    fn test_mhd_requires_field_inputs() {
        let geometry = geometry_1d();
        let mut config = FluxConfig::default();
        config.physics.magnetic_fields = true;
        let calc = calculator(config, geometry).unwrap();
        let [nk, nj, ni] = geometry.cell_shape();
        let w = BlockField::filled(5, nk, nj, ni, 1.0);
        let mut buffers = FluxBuffers::new(&geometry, &config.physics);
        let err = calc
            .calculate_fluxes(&FluxInput::hydro(&w), 0.1, &mut buffers, None)
            .unwrap_err();
        assert!(matches!(err, FluxError::MissingField("bcc")));
    }

    #[test]
    fn test_gravity_requires_hook() {
        let geometry = geometry_1d();
        let mut config = FluxConfig::default();
        config.physics.self_gravity = crate::gravity::SelfGravity::Fft;
        let calc = calculator(config, geometry).unwrap();
        let [nk, nj, ni] = geometry.cell_shape();
        let w = BlockField::filled(5, nk, nj, ni, 1.0);
        let mut buffers = FluxBuffers::new(&geometry, &config.physics);
        let err = calc
            .calculate_fluxes(&FluxInput::hydro(&w), 0.1, &mut buffers, None)
            .unwrap_err();
        assert!(matches!(err, FluxError::MissingField(_)));
    }

    #[test]
    fn test_isothermal_hydro_sweep() {
        let geometry = BlockGeometry::new(8, 8, 1, 2).unwrap();
        let mut config = FluxConfig::default();
        config.physics.eos = EquationOfState::Isothermal { sound_speed: 1.0 };
        config.threads = 2;
        let calc = calculator(config, geometry).unwrap();
        assert_eq!(calc.threads(), 2);
        let [nk, nj, ni] = geometry.cell_shape();
        let w = BlockField::from_fn(4, nk, nj, ni, |_, _, _, s| {
            s[IDN] = 2.0;
            s[IVX] = 0.5;
        });
        let mut buffers = FluxBuffers::new(&geometry, &config.physics);
        calc.calculate_fluxes(&FluxInput::hydro(&w), 0.1, &mut buffers, None).unwrap();
        let f1 = buffers.flux(Direction::X1);
        let f2 = buffers.flux(Direction::X2);
        // mass flux rho*vx through x1 faces, none through x2 faces
        assert!((f1.get(IDN, 0, 5, 6) - 1.0).abs() < 1e-12);
        assert!((f1.get(IVX, 0, 5, 6) - 2.5).abs() < 1e-12);
        assert!(f2.get(IDN, 0, 5, 6).abs() < 1e-12);
        assert!((f2.get(IVY, 0, 5, 6) - 2.0).abs() < 1e-12);
    }
}
