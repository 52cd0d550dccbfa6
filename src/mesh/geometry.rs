//! Index bounds of a logically-Cartesian mesh block.

use crate::error::ConfigError;
use crate::types::{Direction, Span};

/// Interior size and ghost width of one mesh block.
///
/// The i-axis always carries `nghost` ghost layers on each side. The j and k
/// axes carry ghost layers only when they have more than one interior cell;
/// an axis with a single cell has `js = je = 0` (or `ks = ke = 0`) and is
/// never swept.
///
/// ```
/// use mhd_flux::mesh::BlockGeometry;
/// use mhd_flux::types::{Direction, Span};
///
/// let block = BlockGeometry::new(16, 8, 1, 2).unwrap();
/// assert_eq!(block.interior(Direction::X1), Span::new(2, 17));
/// assert_eq!(block.interior(Direction::X2), Span::new(2, 9));
/// assert_eq!(block.interior(Direction::X3), Span::single(0));
/// assert_eq!(block.ncells(Direction::X1), 20);
/// assert_eq!(block.dimensions(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockGeometry {
    nx: [usize; 3],
    nghost: usize,
}

impl BlockGeometry {
    /// Create block geometry from interior cell counts and ghost width.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if any count is zero, if the ghost
    /// width is zero, or if x3 has extent while x2 does not.
    pub fn new(nx1: usize, nx2: usize, nx3: usize, nghost: usize) -> Result<Self, ConfigError> {
        for (key, n) in [("nx1", nx1), ("nx2", nx2), ("nx3", nx3)] {
            if n == 0 {
                return Err(ConfigError::invalid(key, n, "must be at least 1"));
            }
        }
        if nghost == 0 {
            return Err(ConfigError::invalid("nghost", nghost, "must be at least 1"));
        }
        if nx3 > 1 && nx2 == 1 {
            return Err(ConfigError::invalid(
                "nx3",
                nx3,
                "a block with extent in x3 must also have extent in x2",
            ));
        }
        Ok(Self {
            nx: [nx1, nx2, nx3],
            nghost,
        })
    }

    /// Interior cell count along `dir`.
    #[inline]
    pub fn nx(&self, dir: Direction) -> usize {
        self.nx[dir.index()]
    }

    /// Ghost width.
    #[inline]
    pub fn nghost(&self) -> usize {
        self.nghost
    }

    /// Whether the axis has ghost layers and is swept.
    ///
    /// x1 is always active; x2 and x3 only with more than one interior cell.
    #[inline]
    pub fn is_active(&self, dir: Direction) -> bool {
        match dir {
            Direction::X1 => true,
            Direction::X2 | Direction::X3 => self.nx(dir) > 1,
        }
    }

    /// Number of spatial dimensions with extent.
    pub fn dimensions(&self) -> usize {
        1 + usize::from(self.is_active(Direction::X2)) + usize::from(self.is_active(Direction::X3))
    }

    /// Total cells along `dir`, including ghost layers.
    #[inline]
    pub fn ncells(&self, dir: Direction) -> usize {
        if self.is_active(dir) {
            self.nx(dir) + 2 * self.nghost
        } else {
            1
        }
    }

    /// Interior cell range along `dir` (`is..=ie` and friends).
    #[inline]
    pub fn interior(&self, dir: Direction) -> Span {
        let lo = if self.is_active(dir) { self.nghost } else { 0 };
        Span {
            lo,
            hi: lo + self.nx(dir) - 1,
        }
    }

    /// Shape `[nk, nj, ni]` of cell-centred arrays.
    #[inline]
    pub fn cell_shape(&self) -> [usize; 3] {
        [
            self.ncells(Direction::X3),
            self.ncells(Direction::X2),
            self.ncells(Direction::X1),
        ]
    }

    /// Shape `[nk, nj, ni]` of arrays on faces normal to `dir`.
    #[inline]
    pub fn face_shape(&self, dir: Direction) -> [usize; 3] {
        let [nk, nj, ni] = self.cell_shape();
        match dir {
            Direction::X1 => [nk, nj, ni + 1],
            Direction::X2 => [nk, nj + 1, ni],
            Direction::X3 => [nk + 1, nj, ni],
        }
    }
}
