//! # mhd-flux
//!
//! Directional flux sweeps for finite-volume hydrodynamics and MHD on a
//! structured mesh block.
//!
//! One call to [`FluxCalculator::calculate_fluxes`] runs, for each axis
//! with more than one cell:
//! - slope-limited reconstruction of left/right interface states
//! - an approximate Riemann solve for the face fluxes and EMFs
//! - the upwind weights constrained transport uses to average EMFs
//!
//! and then hands the finished fluxes to an optional self-gravity hook.
//!
//! ```
//! use mhd_flux::{BlockField, BlockGeometry, Cartesian, Direction, FluxBuffers, FluxCalculator, FluxConfig, FluxInput};
//! use mhd_flux::types::{IDN, IPR};
//!
//! let geometry = BlockGeometry::new(32, 1, 1, 2)?;
//! let coords = Cartesian::uniform(&geometry, [(0.0, 1.0); 3])?;
//! let config = FluxConfig::default();
//! let calc = FluxCalculator::new(config, geometry, coords)?;
//!
//! let [nk, nj, ni] = geometry.cell_shape();
//! let w = BlockField::from_fn(5, nk, nj, ni, |_, _, i, s| {
//!     s[IDN] = 1.0;
//!     s[IPR] = if i < ni / 2 { 1.0 } else { 0.1 };
//! });
//! let mut buffers = FluxBuffers::new(&geometry, &config.physics);
//! calc.calculate_fluxes(&FluxInput::hydro(&w), 1e-3, &mut buffers, None)?;
//! assert!(buffers.flux(Direction::X1).get(IDN, 0, 0, ni / 2) > 0.0);
//! # Ok::<(), mhd_flux::FluxError>(())
//! ```

pub mod config;
pub mod error;
pub mod gravity;
pub mod mesh;
pub mod reconstruct;
pub mod riemann;
pub mod solver;
pub mod types;

pub use config::{EquationOfState, FluxConfig, PhysicsConfig, ReconstructionConfig};
pub use error::{ConfigError, FluxError};
pub use gravity::{GravityFlux, SelfGravity};
pub use mesh::{BlockField, BlockGeometry, Cartesian, Coordinates, Cylindrical, FaceField};
pub use reconstruct::{ReconstructionOrder, Reconstructor, SlopeLimiter};
pub use riemann::{RiemannSolver, RiemannSolverKind};
pub use solver::{CtFaces, FluxBuffers, FluxCalculator, FluxInput, SweepBounds, ct_weight, sweep_bounds};
pub use types::{Direction, Span, VariableLayout};
