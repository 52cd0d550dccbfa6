//! Self-gravity flux hook.
//!
//! Self-gravity adds a momentum and energy flux correction into the same
//! buffers the directional sweeps fill. The potential solver is external;
//! the pipeline only decides whether to call the hook and when.

use serde::{Deserialize, Serialize};

use crate::solver::FluxBuffers;

/// Self-gravity mode of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfGravity {
    /// No self-gravity
    #[default]
    Disabled,
    /// Potential from an FFT Poisson solver
    Fft,
    /// Potential from a multigrid Poisson solver
    Multigrid,
}

impl SelfGravity {
    /// Whether the gravity flux hook must run after the sweeps.
    #[inline]
    pub fn is_enabled(self) -> bool {
        !matches!(self, SelfGravity::Disabled)
    }

    /// Name used in configuration files and logs.
    pub fn name(self) -> &'static str {
        match self {
            SelfGravity::Disabled => "disabled",
            SelfGravity::Fft => "fft",
            SelfGravity::Multigrid => "multigrid",
        }
    }
}

/// Adds the gravitational flux contribution to finished directional fluxes.
///
/// Called once per [`calculate_fluxes`](crate::FluxCalculator::calculate_fluxes)
/// after all three sweeps, on the calling thread. Both FFT and multigrid
/// gravity go through the same hook.
pub trait GravityFlux {
    /// Add the correction in place.
    fn add_gravity_flux(&mut self, buffers: &mut FluxBuffers);
}

impl<F> GravityFlux for F
where
    F: FnMut(&mut FluxBuffers),
{
    fn add_gravity_flux(&mut self, buffers: &mut FluxBuffers) {
        self(buffers)
    }
}
