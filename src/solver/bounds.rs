//! Active index ranges of the directional sweeps.
//!
//! The swept axis always covers its interior faces `s..=e+1`. Transverse
//! axes cover the interior cells, and with magnetic fields grow by one ghost
//! cell each side wherever the axis has extent, so the CT weights and EMFs
//! exist on the rows the field update averages over.

use std::fmt;

use crate::mesh::BlockGeometry;
use crate::types::{Direction, Span};

/// Index ranges visited by one sweep.
///
/// The span along the sweep direction is a face range; the other two are
/// cell ranges of the face rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepBounds {
    pub dir: Direction,
    pub k: Span,
    pub j: Span,
    pub i: Span,
}

impl SweepBounds {
    /// Whether face row `(k, j)` is visited.
    #[inline]
    pub fn contains_row(&self, k: usize, j: usize) -> bool {
        self.k.contains(k) && self.j.contains(j)
    }

    /// Number of face rows visited.
    #[inline]
    pub fn rows(&self) -> usize {
        self.k.len() * self.j.len()
    }

    /// Number of faces visited.
    #[inline]
    pub fn faces(&self) -> usize {
        self.rows() * self.i.len()
    }
}

impl fmt::Display for SweepBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: k {} j {} i {}", self.dir, self.k, self.j, self.i)
    }
}

/// Index ranges of the sweep along `dir`, or `None` when the axis has a
/// single cell and is not swept.
///
/// ```
/// use mhd_flux::mesh::BlockGeometry;
/// use mhd_flux::solver::sweep_bounds;
/// use mhd_flux::types::{Direction, Span};
///
/// let block = BlockGeometry::new(8, 8, 1, 2).unwrap();
/// let b = sweep_bounds(Direction::X1, &block, true).unwrap();
/// assert_eq!(b.i, Span::new(2, 10));
/// assert_eq!(b.j, Span::new(1, 10));
/// assert_eq!(b.k, Span::single(0));
/// assert!(sweep_bounds(Direction::X3, &block, true).is_none());
/// ```
pub fn sweep_bounds(dir: Direction, geometry: &BlockGeometry, magnetic: bool) -> Option<SweepBounds> {
    if !geometry.is_active(dir) {
        return None;
    }
    let range = |axis: Direction| {
        let interior = geometry.interior(axis);
        if axis == dir {
            interior.faces()
        } else if magnetic && geometry.is_active(axis) {
            interior.extend(1)
        } else {
            interior
        }
    };
    Some(SweepBounds {
        dir,
        k: range(Direction::X3),
        j: range(Direction::X2),
        i: range(Direction::X1),
    })
}
