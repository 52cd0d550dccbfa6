//! Interface-state reconstruction.
//!
//! Converts cell-centred primitive variables into left/right states at the
//! faces of one row.
//!
//! - [`DonorCell`]: first order, piecewise constant
//! - [`PiecewiseLinear`]: second order, limited linear profiles
//! - [`PiecewiseParabolic`]: third order, limited parabolic profiles
//! - [`Reconstructor`]: enum dispatch over the three schemes

mod donor_cell;
mod limiter;
mod plm;
mod ppm;
mod traits;

pub use donor_cell::DonorCell;
pub use limiter::SlopeLimiter;
pub use plm::PiecewiseLinear;
pub use ppm::PiecewiseParabolic;
pub use traits::{FaceRow, FaceStates, Reconstruct};

use crate::mesh::BlockField;
use crate::types::Direction;
use crate::error::ConfigError;

/// Spatial order of the reconstruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconstructionOrder {
    First,
    Second,
    Third,
}

impl TryFrom<u32> for ReconstructionOrder {
    type Error = ConfigError;

    fn try_from(order: u32) -> Result<Self, Self::Error> {
        match order {
            1 => Ok(ReconstructionOrder::First),
            2 => Ok(ReconstructionOrder::Second),
            3 => Ok(ReconstructionOrder::Third),
            other => Err(ConfigError::invalid(
                "reconstruction.order",
                other,
                "must be 1 (donor cell), 2 (PLM) or 3 (PPM)",
            )),
        }
    }
}

/// Reconstruction scheme selected at setup.
#[derive(Clone, Copy, Debug)]
pub enum Reconstructor {
    DonorCell(DonorCell),
    Linear(PiecewiseLinear),
    Parabolic(PiecewiseParabolic),
}

impl Reconstructor {
    /// Scheme for the given order. `limiter` only affects second order.
    pub fn new(order: ReconstructionOrder, limiter: SlopeLimiter) -> Self {
        match order {
            ReconstructionOrder::First => Reconstructor::DonorCell(DonorCell),
            ReconstructionOrder::Second => Reconstructor::Linear(PiecewiseLinear::new(limiter)),
            ReconstructionOrder::Third => Reconstructor::Parabolic(PiecewiseParabolic),
        }
    }

    /// Order of the selected scheme.
    pub fn order(&self) -> ReconstructionOrder {
        match self {
            Reconstructor::DonorCell(_) => ReconstructionOrder::First,
            Reconstructor::Linear(_) => ReconstructionOrder::Second,
            Reconstructor::Parabolic(_) => ReconstructionOrder::Third,
        }
    }
}

impl Reconstruct for Reconstructor {
    #[inline]
    fn reconstruct(
        &self,
        dir: Direction,
        row: FaceRow,
        src: &BlockField,
        src_slot: usize,
        dst_slot: usize,
        states: &mut FaceStates,
    ) {
        match self {
            Reconstructor::DonorCell(r) => r.reconstruct(dir, row, src, src_slot, dst_slot, states),
            Reconstructor::Linear(r) => r.reconstruct(dir, row, src, src_slot, dst_slot, states),
            Reconstructor::Parabolic(r) => r.reconstruct(dir, row, src, src_slot, dst_slot, states),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Reconstructor::DonorCell(r) => r.name(),
            Reconstructor::Linear(r) => r.name(),
            Reconstructor::Parabolic(r) => r.name(),
        }
    }

    fn required_ghosts(&self) -> usize {
        match self {
            Reconstructor::DonorCell(r) => r.required_ghosts(),
            Reconstructor::Linear(r) => r.required_ghosts(),
            Reconstructor::Parabolic(r) => r.required_ghosts(),
        }
    }
}
