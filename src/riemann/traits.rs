//! Trait definition for face-normal Riemann solvers.

use super::state::{FaceState, RiemannContext, Wave, scatter};
use crate::reconstruct::FaceStates;
use crate::types::{Direction, Span};

/// Output rows of one Riemann call.
///
/// `flux` is a row of the hydro flux array for this direction. `ey` and `ez`
/// are the matching electric-field rows, present only with magnetic fields.
pub struct FluxRow<'a> {
    pub flux: &'a mut [f64],
    pub ey: Option<&'a mut [f64]>,
    pub ez: Option<&'a mut [f64]>,
}

/// Approximate Riemann solver acting on a single face.
///
/// # Implementation Notes
///
/// - `l` and `r` are already rotated so that `vx` is normal to the face
/// - `bx` is the face-normal field, zero without magnetic fields
/// - Fluxes should be consistent: F*(q, q) = F(q)
/// - The method must not allocate
///
/// # Extending
///
/// To add a solver, implement `face_flux` and add a variant to
/// [`RiemannSolverKind`](super::RiemannSolverKind).
pub trait RiemannSolver: Send + Sync {
    /// Numerical flux across one face.
    fn face_flux(&self, l: &FaceState, r: &FaceState, bx: f64, ctx: &RiemannContext) -> Wave;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Solve every face of `span` and write the results into `out`.
    ///
    /// `bx` is the face-normal field row indexed like `states`.
    fn solve(
        &self,
        ctx: &RiemannContext,
        dir: Direction,
        span: Span,
        bx: Option<&[f64]>,
        states: &FaceStates,
        out: FluxRow<'_>,
    ) {
        let FluxRow { flux, mut ey, mut ez } = out;
        for i in span {
            let l = FaceState::gather(states.left_state(i), ctx, dir);
            let r = FaceState::gather(states.right_state(i), ctx, dir);
            let b = bx.map_or(0.0, |row| row[i]);
            let f = self.face_flux(&l, &r, b, ctx);
            scatter(&f, ctx, dir, i, flux, ey.as_deref_mut(), ez.as_deref_mut());
        }
    }
}
