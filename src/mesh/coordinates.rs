//! Cell widths along each sweep direction.
//!
//! The CT weight at a face scales the mass flux by the local cell width,
//! so the sweep asks the coordinate system for one row of widths at a time.

use crate::error::ConfigError;
use crate::mesh::BlockGeometry;
use crate::types::{Direction, Span};

/// Geometry collaborator used by the sweeps.
///
/// # Implementation Notes
///
/// - `dxw` is indexed by absolute i; only entries in `span` are written
/// - For an x1 row `(k, j)` the width belongs to cell `i` (the cell above face `i`)
/// - For an x2 row `k, j` is the face index and the width belongs to cell `j`
/// - For an x3 row `k` is the face index and the width belongs to cell `k`
pub trait Coordinates: Send + Sync {
    /// Fill `dxw[span]` with cell widths along `dir` for row `(k, j)`.
    fn center_width(&self, dir: Direction, k: usize, j: usize, span: Span, dxw: &mut [f64]);

    /// Number of cells (including ghosts) the coordinates cover along `dir`.
    fn ncells(&self, dir: Direction) -> usize;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Face positions along the three axes, ghost layers included.
#[derive(Clone, Debug, PartialEq)]
struct FacePositions {
    faces: [Vec<f64>; 3],
}

impl FacePositions {
    fn uniform(geometry: &BlockGeometry, extents: [(f64, f64); 3]) -> Result<Self, ConfigError> {
        let mut faces: [Vec<f64>; 3] = Default::default();
        for dir in Direction::ALL {
            let (min, max) = extents[dir.index()];
            if !(max > min) {
                return Err(ConfigError::invalid(
                    &format!("{}_extent", dir.name()),
                    format!("({}, {})", min, max),
                    "upper edge must exceed lower edge",
                ));
            }
            let lo = geometry.interior(dir).lo as f64;
            let dx = (max - min) / geometry.nx(dir) as f64;
            faces[dir.index()] = (0..=geometry.ncells(dir))
                .map(|n| min + (n as f64 - lo) * dx)
                .collect();
        }
        Ok(Self { faces })
    }

    fn from_faces(x1f: Vec<f64>, x2f: Vec<f64>, x3f: Vec<f64>) -> Result<Self, ConfigError> {
        let faces = [x1f, x2f, x3f];
        for dir in Direction::ALL {
            let f = &faces[dir.index()];
            let key = format!("{}_faces", dir.name());
            if f.len() < 2 {
                return Err(ConfigError::invalid(&key, f.len(), "need at least two faces"));
            }
            if f.windows(2).any(|w| !(w[1] > w[0])) {
                return Err(ConfigError::invalid(&key, "non-increasing", "faces must increase"));
            }
        }
        Ok(Self { faces })
    }

    #[inline]
    fn width(&self, dir: Direction, n: usize) -> f64 {
        let f = &self.faces[dir.index()];
        f[n + 1] - f[n]
    }

    #[inline]
    fn ncells(&self, dir: Direction) -> usize {
        self.faces[dir.index()].len() - 1
    }
}

/// Cartesian coordinates with (possibly non-uniform) face spacing.
///
/// ```
/// use mhd_flux::mesh::{BlockGeometry, Cartesian, Coordinates};
/// use mhd_flux::types::{Direction, Span};
///
/// let block = BlockGeometry::new(4, 1, 1, 2).unwrap();
/// let coords = Cartesian::uniform(&block, [(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)]).unwrap();
/// let mut dxw = vec![0.0; 9];
/// coords.center_width(Direction::X1, 0, 0, Span::new(2, 6), &mut dxw);
/// assert!((dxw[3] - 0.25).abs() < 1e-14);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Cartesian {
    positions: FacePositions,
}

impl Cartesian {
    /// Uniform spacing over `extents[axis] = (min, max)` of the interior.
    pub fn uniform(geometry: &BlockGeometry, extents: [(f64, f64); 3]) -> Result<Self, ConfigError> {
        Ok(Self {
            positions: FacePositions::uniform(geometry, extents)?,
        })
    }

    /// Explicit face positions, ghost faces included.
    pub fn from_faces(x1f: Vec<f64>, x2f: Vec<f64>, x3f: Vec<f64>) -> Result<Self, ConfigError> {
        Ok(Self {
            positions: FacePositions::from_faces(x1f, x2f, x3f)?,
        })
    }

    /// Face positions along `dir`.
    pub fn faces(&self, dir: Direction) -> &[f64] {
        &self.positions.faces[dir.index()]
    }
}

impl Coordinates for Cartesian {
    fn center_width(&self, dir: Direction, k: usize, j: usize, span: Span, dxw: &mut [f64]) {
        match dir {
            Direction::X1 => {
                for i in span {
                    dxw[i] = self.positions.width(Direction::X1, i);
                }
            }
            Direction::X2 => dxw[span.lo..=span.hi].fill(self.positions.width(Direction::X2, j)),
            Direction::X3 => dxw[span.lo..=span.hi].fill(self.positions.width(Direction::X3, k)),
        }
    }

    fn ncells(&self, dir: Direction) -> usize {
        self.positions.ncells(dir)
    }

    fn name(&self) -> &'static str {
        "cartesian"
    }
}

/// Cylindrical coordinates: x1 = R, x2 = φ, x3 = z.
///
/// The azimuthal width is the arc length `R·Δφ` at the volume-weighted
/// radius of each cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Cylindrical {
    positions: FacePositions,
    x1v: Vec<f64>,
}

impl Cylindrical {
    /// Uniform spacing in (R, φ, z) over the interior.
    ///
    /// When the interior starts on the axis the ghost cells below it take
    /// the radii of their mirror images.
    pub fn uniform(geometry: &BlockGeometry, extents: [(f64, f64); 3]) -> Result<Self, ConfigError> {
        Self::with_positions(FacePositions::uniform(geometry, extents)?)
    }

    /// Explicit face positions, ghost faces included.
    pub fn from_faces(x1f: Vec<f64>, x2f: Vec<f64>, x3f: Vec<f64>) -> Result<Self, ConfigError> {
        Self::with_positions(FacePositions::from_faces(x1f, x2f, x3f)?)
    }

    fn with_positions(positions: FacePositions) -> Result<Self, ConfigError> {
        let x1v = positions.faces[0]
            .windows(2)
            .map(|w| {
                let (ri, ro) = match (w[0], w[1]) {
                    (ri, ro) if ri >= 0.0 => (ri, ro),
                    (ri, ro) if ro <= 0.0 => (-ro, -ri),
                    (ri, ro) => {
                        return Err(ConfigError::invalid(
                            "x1_faces",
                            format!("({}, {})", ri, ro),
                            "radial cell must not straddle the axis",
                        ));
                    }
                };
                Ok((2.0 / 3.0) * (ro.powi(3) - ri.powi(3)) / (ro.powi(2) - ri.powi(2)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { positions, x1v })
    }

    /// Volume-weighted radius of radial cell `i`.
    pub fn x1v(&self, i: usize) -> f64 {
        self.x1v[i]
    }
}

impl Coordinates for Cylindrical {
    fn center_width(&self, dir: Direction, k: usize, j: usize, span: Span, dxw: &mut [f64]) {
        match dir {
            Direction::X1 => {
                for i in span {
                    dxw[i] = self.positions.width(Direction::X1, i);
                }
            }
            Direction::X2 => {
                let dphi = self.positions.width(Direction::X2, j);
                for i in span {
                    dxw[i] = self.x1v[i] * dphi;
                }
            }
            Direction::X3 => dxw[span.lo..=span.hi].fill(self.positions.width(Direction::X3, k)),
        }
    }

    fn ncells(&self, dir: Direction) -> usize {
        self.positions.ncells(dir)
    }

    fn name(&self) -> &'static str {
        "cylindrical"
    }
}
