//! HLLC three-wave solver for adiabatic hydrodynamics (Toro, Spruce & Speares 1994).
//!
//! Restores the contact wave that HLLE smears. Only valid without magnetic
//! fields and with an adiabatic equation of state; the combination is checked
//! at setup by [`RiemannSolverKind::check_physics`](super::RiemannSolverKind::check_physics).

use super::hlle::wave_speeds;
use super::state::{FaceState, RiemannContext, Wave};
use super::traits::RiemannSolver;

/// Harten-Lax-van Leer-Contact flux.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hllc;

impl RiemannSolver for Hllc {
    #[inline]
    fn face_flux(&self, l: &FaceState, r: &FaceState, bx: f64, ctx: &RiemannContext) -> Wave {
        let eos = &ctx.eos;
        let (s_l, s_r) = wave_speeds(l, r, bx, ctx);

        if s_l >= 0.0 {
            return l.flux(bx, eos);
        }
        if s_r <= 0.0 {
            return r.flux(bx, eos);
        }

        let ml = l.rho * (s_l - l.vx);
        let mr = r.rho * (s_r - r.vx);
        let s_star = (r.p - l.p + ml * l.vx - mr * r.vx) / (ml - mr);

        if s_star >= 0.0 {
            let ul = l.conserved(bx, eos);
            l.flux(bx, eos) + s_l * (star_state(l, &ul, s_l, s_star) - ul)
        } else {
            let ur = r.conserved(bx, eos);
            r.flux(bx, eos) + s_r * (star_state(r, &ur, s_r, s_star) - ur)
        }
    }

    fn name(&self) -> &'static str {
        "hllc"
    }
}

/// Conserved state between the contact and the outer wave `s`.
#[inline]
fn star_state(q: &FaceState, u: &Wave, s: f64, s_star: f64) -> Wave {
    let factor = q.rho * (s - q.vx) / (s - s_star);
    let specific_energy =
        u.0[Wave::E] / q.rho + (s_star - q.vx) * (s_star + q.p / (q.rho * (s - q.vx)));
    Wave([
        factor,
        factor * s_star,
        factor * q.vy,
        factor * q.vz,
        factor * specific_energy,
        0.0,
        0.0,
    ])
}
