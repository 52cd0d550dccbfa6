//! HLLE two-wave approximate Riemann solver.
//!
//! Wave-speed bounds follow Davis (1988), clipped so the upwind fluxes are
//! recovered for supersonic faces.

use super::state::{FaceState, RiemannContext, Wave};
use super::traits::RiemannSolver;

/// Harten-Lax-van Leer-Einfeldt flux.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hlle;

impl RiemannSolver for Hlle {
    #[inline]
    fn face_flux(&self, l: &FaceState, r: &FaceState, bx: f64, ctx: &RiemannContext) -> Wave {
        let eos = &ctx.eos;
        let (s_l, s_r) = wave_speeds(l, r, bx, ctx);
        let bp = s_r.max(0.0);
        let bm = s_l.min(0.0);

        let fl = l.flux(bx, eos);
        let fr = r.flux(bx, eos);
        let width = bp - bm;
        if width <= 0.0 {
            return 0.5 * (fl + fr);
        }
        let jump = r.conserved(bx, eos) - l.conserved(bx, eos);
        (1.0 / width) * (bp * fl - bm * fr + (bp * bm) * jump)
    }

    fn name(&self) -> &'static str {
        "hlle"
    }
}

/// Davis estimates of the slowest and fastest signal speeds.
#[inline]
pub(crate) fn wave_speeds(l: &FaceState, r: &FaceState, bx: f64, ctx: &RiemannContext) -> (f64, f64) {
    let cl = l.fast_speed(bx, &ctx.eos);
    let cr = r.fast_speed(bx, &ctx.eos);
    ((l.vx - cl).min(r.vx - cr), (l.vx + cl).max(r.vx + cr))
}
