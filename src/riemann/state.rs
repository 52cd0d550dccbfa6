//! Rotated face states and the ideal-MHD physical flux.
//!
//! Interface states arrive in the storage frame (velocity slots ordered
//! x1, x2, x3). Solvers work in a frame rotated so that `vx` is normal to
//! the face; [`FaceState::gather`] and [`scatter`] do the permutation.
//!
//! Conserved and flux vectors use the fixed ordering
//! `[D, Mx, My, Mz, E, By, Bz]`. The energy entry is zero for an isothermal
//! equation of state and the field entries are zero without magnetic fields.

use std::ops::{Add, Mul, Sub};

use crate::config::EquationOfState;
use crate::types::{Direction, IDN, IEN, VariableLayout};

/// Parameters shared by every face of a sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiemannContext {
    /// Slot layout of states and fluxes
    pub layout: VariableLayout,
    /// Equation of state closing the system
    pub eos: EquationOfState,
}

impl RiemannContext {
    /// Create a context. The layout must agree with the equation of state.
    pub fn new(layout: VariableLayout, eos: EquationOfState) -> Self {
        debug_assert_eq!(layout.is_non_barotropic(), eos.is_non_barotropic());
        Self { layout, eos }
    }
}

// =============================================================================
// Wave Vector
// =============================================================================

/// Conserved or flux vector in the rotated frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Wave(pub [f64; 7]);

impl Wave {
    pub const D: usize = 0;
    pub const MX: usize = 1;
    pub const MY: usize = 2;
    pub const MZ: usize = 3;
    pub const E: usize = 4;
    pub const BY: usize = 5;
    pub const BZ: usize = 6;
}

impl Add for Wave {
    type Output = Wave;

    #[inline]
    fn add(self, rhs: Wave) -> Wave {
        Wave(std::array::from_fn(|n| self.0[n] + rhs.0[n]))
    }
}

impl Sub for Wave {
    type Output = Wave;

    #[inline]
    fn sub(self, rhs: Wave) -> Wave {
        Wave(std::array::from_fn(|n| self.0[n] - rhs.0[n]))
    }
}

impl Mul<Wave> for f64 {
    type Output = Wave;

    #[inline]
    fn mul(self, rhs: Wave) -> Wave {
        Wave(rhs.0.map(|x| self * x))
    }
}

// =============================================================================
// Face State
// =============================================================================

/// Primitive state on one side of a face, in the rotated frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceState {
    pub rho: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    /// Gas pressure; `a²ρ` for an isothermal equation of state
    pub p: f64,
    pub by: f64,
    pub bz: f64,
}

impl FaceState {
    /// Read one face's slots from storage order into the frame of `dir`.
    #[inline]
    pub fn gather(w: &[f64], ctx: &RiemannContext, dir: Direction) -> Self {
        let (ivx, ivy, ivz) = dir.velocity_slots();
        let rho = w[IDN];
        let p = match ctx.eos {
            EquationOfState::Adiabatic { .. } => w[IEN],
            EquationOfState::Isothermal { sound_speed } => sound_speed * sound_speed * rho,
        };
        let (by, bz) = if ctx.layout.is_magnetic() {
            (w[ctx.layout.iby()], w[ctx.layout.ibz()])
        } else {
            (0.0, 0.0)
        };
        Self {
            rho,
            vx: w[ivx],
            vy: w[ivy],
            vz: w[ivz],
            p,
            by,
            bz,
        }
    }

    /// Magnetic pressure `B²/2`.
    #[inline]
    fn magnetic_pressure(&self, bx: f64) -> f64 {
        0.5 * (bx * bx + self.by * self.by + self.bz * self.bz)
    }

    /// Total energy density, zero for an isothermal equation of state.
    #[inline]
    pub fn energy(&self, bx: f64, eos: &EquationOfState) -> f64 {
        match eos {
            EquationOfState::Adiabatic { gamma } => {
                let kinetic = 0.5 * self.rho * (self.vx * self.vx + self.vy * self.vy + self.vz * self.vz);
                self.p / (gamma - 1.0) + kinetic + self.magnetic_pressure(bx)
            }
            EquationOfState::Isothermal { .. } => 0.0,
        }
    }

    /// Conserved vector `U`.
    #[inline]
    pub fn conserved(&self, bx: f64, eos: &EquationOfState) -> Wave {
        Wave([
            self.rho,
            self.rho * self.vx,
            self.rho * self.vy,
            self.rho * self.vz,
            self.energy(bx, eos),
            self.by,
            self.bz,
        ])
    }

    /// Physical flux `F(U)` normal to the face.
    #[inline]
    pub fn flux(&self, bx: f64, eos: &EquationOfState) -> Wave {
        let pt = self.p + self.magnetic_pressure(bx);
        let mx = self.rho * self.vx;
        let energy_flux = match eos {
            EquationOfState::Adiabatic { .. } => {
                let v_dot_b = self.vx * bx + self.vy * self.by + self.vz * self.bz;
                (self.energy(bx, eos) + pt) * self.vx - bx * v_dot_b
            }
            EquationOfState::Isothermal { .. } => 0.0,
        };
        Wave([
            mx,
            mx * self.vx + pt - bx * bx,
            mx * self.vy - bx * self.by,
            mx * self.vz - bx * self.bz,
            energy_flux,
            self.by * self.vx - bx * self.vy,
            self.bz * self.vx - bx * self.vz,
        ])
    }

    /// Square of the gas sound speed.
    #[inline]
    pub fn sound_speed_sq(&self, eos: &EquationOfState) -> f64 {
        match eos {
            EquationOfState::Adiabatic { gamma } => gamma * self.p / self.rho,
            EquationOfState::Isothermal { sound_speed } => sound_speed * sound_speed,
        }
    }

    /// Fast magnetosonic speed normal to the face.
    ///
    /// Reduces to the sound speed when `B = 0`.
    #[inline]
    pub fn fast_speed(&self, bx: f64, eos: &EquationOfState) -> f64 {
        let a2 = self.sound_speed_sq(eos);
        let b2 = (bx * bx + self.by * self.by + self.bz * self.bz) / self.rho;
        let sum = a2 + b2;
        let disc = (sum * sum - 4.0 * a2 * bx * bx / self.rho).max(0.0);
        (0.5 * (sum + disc.sqrt())).sqrt()
    }
}

/// Write one face flux from the rotated frame back into storage slots.
///
/// `flux` holds the `nhydro` hydro slots of face `i`; the field entries go
/// to `ey[i] = -F(By)` and `ez[i] = F(Bz)` when those rows are present.
#[inline]
pub fn scatter(
    f: &Wave,
    ctx: &RiemannContext,
    dir: Direction,
    i: usize,
    flux: &mut [f64],
    ey: Option<&mut [f64]>,
    ez: Option<&mut [f64]>,
) {
    let (ivx, ivy, ivz) = dir.velocity_slots();
    let nhydro = ctx.layout.nhydro();
    let cell = &mut flux[i * nhydro..(i + 1) * nhydro];
    cell[IDN] = f.0[Wave::D];
    cell[ivx] = f.0[Wave::MX];
    cell[ivy] = f.0[Wave::MY];
    cell[ivz] = f.0[Wave::MZ];
    if let Some(ien) = ctx.layout.energy() {
        cell[ien] = f.0[Wave::E];
    }
    if let Some(ey) = ey {
        ey[i] = -f.0[Wave::BY];
    }
    if let Some(ez) = ez {
        ez[i] = f.0[Wave::BZ];
    }
}
