//! Third-order piecewise-parabolic reconstruction (Colella & Woodward 1984).
//!
//! Interface values are built from a fourth-order interpolant with
//! monotonized-central slopes, then each cell's parabola is constrained so
//! it introduces no new extrema. The interpolant assumes uniform spacing
//! along the sweep.

use super::limiter::SlopeLimiter;
use super::traits::{FaceRow, FaceStates, Reconstruct};
use crate::mesh::BlockField;
use crate::types::Direction;

/// Piecewise-parabolic (PPM) reconstruction.
#[derive(Clone, Copy, Debug, Default)]
pub struct PiecewiseParabolic;

impl Reconstruct for PiecewiseParabolic {
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
            let mut q = [0.0; 6];
            for (n, value) in q.iter_mut().enumerate() {
                *value = row.cell(src, dir, src_slot, i, n as isize - 3);
            }

            let face_below = interface(q[0], q[1], q[2], q[3]);
            let face = interface(q[1], q[2], q[3], q[4]);
            let face_above = interface(q[2], q[3], q[4], q[5]);

            let (_, right_of_below) = constrain(face_below, q[2], face);
            let (left_of_above, _) = constrain(face, q[3], face_above);

            states.set(i, dst_slot, right_of_below, left_of_above);
        }
    }

    fn name(&self) -> &'static str {
        "ppm"
    }

    fn required_ghosts(&self) -> usize {
        3
    }
}

/// Interface value between `q0` and `qp`.
#[inline]
fn interface(qm: f64, q0: f64, qp: f64, qpp: f64) -> f64 {
    let mc = SlopeLimiter::MonotonizedCentral;
    let dq0 = mc.slope(q0 - qm, qp - q0);
    let dqp = mc.slope(qp - q0, qpp - qp);
    0.5 * (q0 + qp) - (dqp - dq0) / 6.0
}

/// Monotonicity constraint on the edge values `(ql, qr)` of a cell with mean `q`.
#[inline]
fn constrain(ql: f64, q: f64, qr: f64) -> (f64, f64) {
    if (qr - q) * (q - ql) <= 0.0 {
        return (q, q);
    }
    let dq = qr - ql;
    let curvature = dq * (q - 0.5 * (ql + qr));
    let bound = dq * dq / 6.0;
    if curvature > bound {
        (3.0 * q - 2.0 * qr, qr)
    } else if curvature < -bound {
        (ql, 3.0 * q - 2.0 * ql)
    } else {
        (ql, qr)
    }
}
