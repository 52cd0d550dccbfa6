//! Local Lax-Friedrichs (Rusanov) flux.

use super::state::{FaceState, RiemannContext, Wave};
use super::traits::RiemannSolver;

/// Rusanov flux with the largest local fast speed as dissipation.
///
/// F* = ½(F_L + F_R) - ½ s_max (U_R - U_L),  s_max = max(|v_L| + c_L, |v_R| + c_R)
#[derive(Clone, Copy, Debug, Default)]
pub struct LaxFriedrichs;

impl RiemannSolver for LaxFriedrichs {
    #[inline]
    fn face_flux(&self, l: &FaceState, r: &FaceState, bx: f64, ctx: &RiemannContext) -> Wave {
        let eos = &ctx.eos;
        let s_max = (l.vx.abs() + l.fast_speed(bx, eos)).max(r.vx.abs() + r.fast_speed(bx, eos));
        let flux_mean = 0.5 * (l.flux(bx, eos) + r.flux(bx, eos));
        flux_mean - (0.5 * s_max) * (r.conserved(bx, eos) - l.conserved(bx, eos))
    }

    fn name(&self) -> &'static str {
        "llf"
    }
}
