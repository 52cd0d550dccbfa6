//! First-order donor-cell reconstruction.

use super::traits::{FaceRow, FaceStates, Reconstruct};
use crate::mesh::BlockField;
use crate::types::Direction;

/// Piecewise-constant states: each face sees the unmodified cell values on
/// either side.
///
/// `wl[i] = q[i-1]` and `wr[i] = q[i]` along the sweep direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct DonorCell;

impl Reconstruct for DonorCell {
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
            let below = row.cell(src, dir, src_slot, i, -1);
            let above = row.cell(src, dir, src_slot, i, 0);
            states.set(i, dst_slot, below, above);
        }
    }

    fn name(&self) -> &'static str {
        "donor_cell"
    }

    fn required_ghosts(&self) -> usize {
        1
    }
}
