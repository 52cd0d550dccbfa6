//! Variable slot indices and the per-run slot layout.
//!
//! Primitive cell data `W` stores density, velocity and (for a
//! non-barotropic equation of state) pressure. Interface states and fluxes
//! use the same hydro slots followed by two transverse magnetic slots when
//! magnetic fields are enabled.

/// Density slot.
pub const IDN: usize = 0;
/// Velocity slots, x1/x2/x3.
pub const IVX: usize = 1;
pub const IVY: usize = 2;
pub const IVZ: usize = 3;
/// Pressure slot (non-barotropic EOS only).
pub const IPR: usize = 4;

/// Momentum slots of a flux; share their index with the velocity slots.
pub const IM1: usize = IVX;
pub const IM2: usize = IVY;
pub const IM3: usize = IVZ;
/// Energy slot of a flux; shares its index with pressure.
pub const IEN: usize = IPR;

/// Cell-centred magnetic field components.
pub const IB1: usize = 0;
pub const IB2: usize = 1;
pub const IB3: usize = 2;

/// Number of cell-centred magnetic components.
pub const NFIELD: usize = 3;

/// Slot layout fixed for a whole run.
///
/// ```
/// use mhd_flux::types::VariableLayout;
///
/// let layout = VariableLayout::new(true, true);
/// assert_eq!(layout.nhydro(), 5);
/// assert_eq!(layout.nwave(), 7);
/// assert_eq!(layout.iby(), 5);
/// assert_eq!(layout.ibz(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariableLayout {
    non_barotropic: bool,
    magnetic: bool,
}

impl VariableLayout {
    /// Create a layout for the given physics.
    #[inline]
    pub const fn new(non_barotropic: bool, magnetic: bool) -> Self {
        Self {
            non_barotropic,
            magnetic,
        }
    }

    /// Number of hydro slots (4 isothermal, 5 adiabatic).
    #[inline]
    pub const fn nhydro(&self) -> usize {
        if self.non_barotropic { 5 } else { 4 }
    }

    /// Number of interface/flux slots.
    #[inline]
    pub const fn nwave(&self) -> usize {
        if self.magnetic {
            self.nhydro() + 2
        } else {
            self.nhydro()
        }
    }

    /// Interface slot for the first transverse field component.
    #[inline]
    pub const fn iby(&self) -> usize {
        self.nhydro()
    }

    /// Interface slot for the second transverse field component.
    #[inline]
    pub const fn ibz(&self) -> usize {
        self.nhydro() + 1
    }

    /// Energy slot, if the equation of state carries one.
    #[inline]
    pub const fn energy(&self) -> Option<usize> {
        if self.non_barotropic { Some(IEN) } else { None }
    }

    /// Whether the equation of state is non-barotropic.
    #[inline]
    pub const fn is_non_barotropic(&self) -> bool {
        self.non_barotropic
    }

    /// Whether magnetic fields are enabled.
    #[inline]
    pub const fn is_magnetic(&self) -> bool {
        self.magnetic
    }
}
