//! Upwind weights for constrained-transport EMF averaging.
//!
//! The field update blends donor-cell and arithmetic EMF estimates at cell
//! edges (Gardiner & Stone 2005). The blend at each face is set by the sign
//! and size of the mass flux through it:
//!
//! w = 0.5 + clip(K dt F_ρ / (dx (ρ_L + ρ_R)), -0.5, 0.5)
//!
//! so that `w` lies in `[0, 1]` and a face with no mass flux gets `0.5`.

use crate::reconstruct::FaceStates;
use crate::types::{IDN, Span};

/// Scale `K` applied to the normalised mass flux before clipping.
pub const V_OVER_C_SCALE: f64 = 1024.0;

/// Weight for a single face.
///
/// The clip is `min(0.5, ·)` followed by `max(-0.5, ·)`; a NaN ratio
/// therefore gives 1.0.
#[inline]
pub fn ct_weight(dt: f64, mass_flux: f64, dx: f64, rho_l: f64, rho_r: f64) -> f64 {
    let v_over_c = V_OVER_C_SCALE * dt * mass_flux / (dx * (rho_l + rho_r));
    0.5 + v_over_c.min(0.5).max(-0.5)
}

/// Fill the weights of one face row.
///
/// `flux` holds `nhydro` slots per face; `states` the reconstructed
/// densities; `dxw` the cell widths along the sweep.
pub fn fill_row_weights(
    dt: f64,
    span: Span,
    nhydro: usize,
    flux: &[f64],
    states: &FaceStates,
    dxw: &[f64],
    weight: &mut [f64],
) {
    for i in span {
        weight[i] = ct_weight(
            dt,
            flux[i * nhydro + IDN],
            dxw[i],
            states.left(i, IDN),
            states.right(i, IDN),
        );
    }
}
