//! Second-order piecewise-linear reconstruction.
//!
//! Each cell carries a limited linear profile `q_m + (x - x_m) δq_m / Δx`,
//! evaluated at its two faces:
//!
//! wl[i] = q[i-1] + δq[i-1] / 2,   wr[i] = q[i] - δq[i] / 2
//!
//! with `δq_m = limiter(q_m - q_{m-1}, q_{m+1} - q_m)`.
//! Differences are taken in index space, so spacing is assumed uniform.

use super::limiter::SlopeLimiter;
use super::traits::{FaceRow, FaceStates, Reconstruct};
use crate::mesh::BlockField;
use crate::types::Direction;

/// Piecewise-linear (PLM) reconstruction with a selectable slope limiter.
#[derive(Clone, Copy, Debug, Default)]
pub struct PiecewiseLinear {
    /// Limiter applied to one-sided differences
    pub limiter: SlopeLimiter,
}

impl PiecewiseLinear {
    /// Create a PLM reconstructor with the given limiter.
    pub fn new(limiter: SlopeLimiter) -> Self {
        Self { limiter }
    }
}

impl Reconstruct for PiecewiseLinear {
    fn reconstruct(
        &self,
        dir: Direction,
        row: FaceRow,
        src: &BlockField,
        src_slot: usize,
        dst_slot: usize,
        states: &mut FaceStates,
    ) {
        for i in row.span {
            let qmm = row.cell(src, dir, src_slot, i, -2);
            let qm = row.cell(src, dir, src_slot, i, -1);
            let q = row.cell(src, dir, src_slot, i, 0);
            let qp = row.cell(src, dir, src_slot, i, 1);

            let dq_below = self.limiter.slope(qm - qmm, q - qm);
            let dq_above = self.limiter.slope(q - qm, qp - q);

            states.set(i, dst_slot, qm + 0.5 * dq_below, q - 0.5 * dq_above);
        }
    }

    fn name(&self) -> &'static str {
        "plm"
    }

    fn required_ghosts(&self) -> usize {
        2
    }
}
