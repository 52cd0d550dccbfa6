//! Directional flux sweeps.
//!
//! - [`sweep_bounds`]: active index ranges per direction
//! - [`ct_weight`]: upwind weights for CT EMF averaging
//! - [`FluxBuffers`] / [`FluxInput`]: caller-owned arrays
//! - [`FluxCalculator`]: the parallel sweep orchestrator

mod bounds;
mod buffers;
mod calculator;
pub mod ct_weight;
mod scratch;

pub use bounds::{SweepBounds, sweep_bounds};
pub use buffers::{CtFaces, FluxBuffers, FluxInput};
pub use calculator::FluxCalculator;
pub use ct_weight::{V_OVER_C_SCALE, ct_weight};
pub use scratch::{ScratchPool, SweepScratch};
