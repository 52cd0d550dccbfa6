//! Approximate Riemann solvers for (M)HD face fluxes.
//!
//! - [`LaxFriedrichs`]: Rusanov flux, most diffusive and most robust
//! - [`Hlle`]: two-wave HLL with Davis speed bounds
//! - [`Hllc`]: three-wave HLL with a contact, adiabatic hydro only
//! - [`RiemannSolverKind`]: enum dispatch and configuration name

mod hllc;
mod hlle;
mod llf;
mod state;
mod traits;

pub use hllc::Hllc;
pub use hlle::Hlle;
pub use llf::LaxFriedrichs;
pub use state::{FaceState, RiemannContext, Wave, scatter};
pub use traits::{FluxRow, RiemannSolver};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::EquationOfState;
use crate::error::ConfigError;

/// Riemann solver selected at setup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiemannSolverKind {
    /// Local Lax-Friedrichs
    Llf,
    /// HLLE
    #[default]
    Hlle,
    /// HLLC (adiabatic hydrodynamics)
    Hllc,
}

impl RiemannSolverKind {
    /// Reject solver/physics combinations the solver cannot handle.
    pub fn check_physics(self, eos: &EquationOfState, magnetic: bool) -> Result<(), ConfigError> {
        if self == RiemannSolverKind::Hllc {
            if magnetic {
                return Err(ConfigError::InconsistentPhysics(
                    "hllc solver does not support magnetic fields".to_string(),
                ));
            }
            if !eos.is_non_barotropic() {
                return Err(ConfigError::InconsistentPhysics(
                    "hllc solver requires an adiabatic equation of state".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl FromStr for RiemannSolverKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "llf" | "rusanov" => Ok(RiemannSolverKind::Llf),
            "hlle" | "hll" => Ok(RiemannSolverKind::Hlle),
            "hllc" => Ok(RiemannSolverKind::Hllc),
            _ => Err(ConfigError::UnknownVariant {
                enum_type: "riemann solver",
                variant: s.to_owned(),
            }),
        }
    }
}

impl RiemannSolver for RiemannSolverKind {
    #[inline]
    fn face_flux(&self, l: &FaceState, r: &FaceState, bx: f64, ctx: &RiemannContext) -> Wave {
        match self {
            RiemannSolverKind::Llf => LaxFriedrichs.face_flux(l, r, bx, ctx),
            RiemannSolverKind::Hlle => Hlle.face_flux(l, r, bx, ctx),
            RiemannSolverKind::Hllc => Hllc.face_flux(l, r, bx, ctx),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            RiemannSolverKind::Llf => LaxFriedrichs.name(),
            RiemannSolverKind::Hlle => Hlle.name(),
            RiemannSolverKind::Hllc => Hllc.name(),
        }
    }
}
