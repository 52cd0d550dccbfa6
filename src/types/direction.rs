//! Sweep directions and their cyclic slot permutations.

use std::fmt;

use super::layout::{IB1, IB2, IB3, IVX, IVY, IVZ};

/// One of the three coordinate axes of a mesh block.
///
/// A direction names both an axis of the block and the sweep that solves
/// 1D Riemann problems across faces normal to that axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// The i-axis (x1)
    X1,
    /// The j-axis (x2)
    X2,
    /// The k-axis (x3)
    X3,
}

impl Direction {
    /// All directions in sweep order.
    pub const ALL: [Direction; 3] = [Direction::X1, Direction::X2, Direction::X3];

    /// Zero-based axis index.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::X1 => 0,
            Direction::X2 => 1,
            Direction::X3 => 2,
        }
    }

    /// Short name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::X1 => "x1",
            Direction::X2 => "x2",
            Direction::X3 => "x3",
        }
    }

    /// Velocity slots `(ivx, ivy, ivz)` rotated so that `ivx` is normal to the face.
    ///
    /// ```
    /// use mhd_flux::types::{Direction, IVX, IVY, IVZ};
    ///
    /// assert_eq!(Direction::X2.velocity_slots(), (IVY, IVZ, IVX));
    /// ```
    #[inline]
    pub const fn velocity_slots(self) -> (usize, usize, usize) {
        match self {
            Direction::X1 => (IVX, IVY, IVZ),
            Direction::X2 => (IVY, IVZ, IVX),
            Direction::X3 => (IVZ, IVX, IVY),
        }
    }

    /// Cell-centred field slots reconstructed into the `IBY` and `IBZ` interface slots.
    #[inline]
    pub const fn transverse_field_slots(self) -> (usize, usize) {
        match self {
            Direction::X1 => (IB2, IB3),
            Direction::X2 => (IB3, IB1),
            Direction::X3 => (IB1, IB2),
        }
    }

    /// Electric-field components carried by the `(ey, ez)` outputs of this sweep.
    ///
    /// Solvers write `ey = -flux(IBY)` and `ez = flux(IBZ)`, which along x1 are
    /// `E3` and `E2`, along x2 `E1` and `E3`, and along x3 `E2` and `E1`.
    #[inline]
    pub const fn emf_components(self) -> (Direction, Direction) {
        match self {
            Direction::X1 => (Direction::X3, Direction::X2),
            Direction::X2 => (Direction::X1, Direction::X3),
            Direction::X3 => (Direction::X2, Direction::X1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_slots_are_cyclic() {
        for dir in Direction::ALL {
            let (a, b, c) = dir.velocity_slots();
            let mut slots = [a, b, c];
            slots.sort_unstable();
            assert_eq!(slots, [IVX, IVY, IVZ]);
            assert_eq!(a, IVX + dir.index());
        }
    }

    #[test]
    fn test_field_slots_follow_velocity_rotation() {
        for dir in Direction::ALL {
            let (_, ivy, ivz) = dir.velocity_slots();
            let (by, bz) = dir.transverse_field_slots();
            assert_eq!(by, ivy - IVX);
            assert_eq!(bz, ivz - IVX);
        }
    }

    #[test]
    fn test_emf_components_are_transverse() {
        for dir in Direction::ALL {
            let (ey, ez) = dir.emf_components();
            assert_ne!(ey, dir);
            assert_ne!(ez, dir);
            assert_ne!(ey, ez);
        }
    }
}
