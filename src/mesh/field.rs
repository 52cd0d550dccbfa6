//! Dense storage for cell- and face-centred block data.

use rayon::prelude::*;

use super::BlockGeometry;
use crate::types::Direction;

/// Four-index array of `nvar` values at every point of an `(nk, nj, ni)` grid.
///
/// Values are cell-interleaved: the `nvar` slots of one point are adjacent,
/// and one `(k, j)` row of `ni * nvar` values is contiguous. A row is the
/// unit of parallel work in the flux sweeps.
///
/// ```
/// use mhd_flux::mesh::BlockField;
///
/// let mut w = BlockField::zeros(2, 1, 3, 4);
/// w.set(1, 0, 2, 3, 7.5);
/// assert_eq!(w.get(1, 0, 2, 3), 7.5);
/// assert_eq!(w.row(0, 2).len(), 4 * 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BlockField {
    nvar: usize,
    nk: usize,
    nj: usize,
    ni: usize,
    data: Vec<f64>,
}

impl BlockField {
    /// Create a zero-filled array.
    pub fn zeros(nvar: usize, nk: usize, nj: usize, ni: usize) -> Self {
        Self::filled(nvar, nk, nj, ni, 0.0)
    }

    /// Create an array with every entry set to `value`.
    pub fn filled(nvar: usize, nk: usize, nj: usize, ni: usize, value: f64) -> Self {
        Self {
            nvar,
            nk,
            nj,
            ni,
            data: vec![value; nvar * nk * nj * ni],
        }
    }

    /// Create an array whose point values are set by a closure.
    ///
    /// The closure receives `(k, j, i)` and the `nvar` slots at that point.
    pub fn from_fn<F>(nvar: usize, nk: usize, nj: usize, ni: usize, f: F) -> Self
    where
        F: Fn(usize, usize, usize, &mut [f64]),
    {
        let mut field = Self::zeros(nvar, nk, nj, ni);
        if nvar == 0 {
            return field;
        }
        for (n, slots) in field.data.chunks_exact_mut(nvar).enumerate() {
            let i = n % ni;
            let j = (n / ni) % nj;
            let k = n / (ni * nj);
            f(k, j, i, slots);
        }
        field
    }

    /// Number of slots per point.
    #[inline]
    pub fn nvar(&self) -> usize {
        self.nvar
    }

    /// Extent along k.
    #[inline]
    pub fn nk(&self) -> usize {
        self.nk
    }

    /// Extent along j.
    #[inline]
    pub fn nj(&self) -> usize {
        self.nj
    }

    /// Extent along i.
    #[inline]
    pub fn ni(&self) -> usize {
        self.ni
    }

    /// Shape as `[nvar, nk, nj, ni]`.
    #[inline]
    pub fn shape(&self) -> [usize; 4] {
        [self.nvar, self.nk, self.nj, self.ni]
    }

    /// Number of values in a `(k, j)` row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.ni * self.nvar
    }

    #[inline]
    fn offset(&self, v: usize, k: usize, j: usize, i: usize) -> usize {
        debug_assert!(v < self.nvar && k < self.nk && j < self.nj && i < self.ni);
        ((k * self.nj + j) * self.ni + i) * self.nvar + v
    }

    /// Value of slot `v` at `(k, j, i)`.
    #[inline]
    pub fn get(&self, v: usize, k: usize, j: usize, i: usize) -> f64 {
        self.data[self.offset(v, k, j, i)]
    }

    /// Set slot `v` at `(k, j, i)`.
    #[inline]
    pub fn set(&mut self, v: usize, k: usize, j: usize, i: usize, value: f64) {
        let n = self.offset(v, k, j, i);
        self.data[n] = value;
    }

    /// All slots at one point.
    #[inline]
    pub fn point(&self, k: usize, j: usize, i: usize) -> &[f64] {
        let n = self.offset(0, k, j, i);
        &self.data[n..n + self.nvar]
    }

    /// The contiguous `(k, j)` row.
    #[inline]
    pub fn row(&self, k: usize, j: usize) -> &[f64] {
        let n = self.offset(0, k, j, 0);
        &self.data[n..n + self.row_len()]
    }

    /// Indexed parallel iterator over every `(k, j)` row in storage order.
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, f64> {
        let len = self.row_len().max(1);
        self.data.par_chunks_exact_mut(len)
    }

    /// Raw storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Set every entry to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Maximum absolute value (NaN entries are ignored).
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
    }

    /// Whether every entry is finite.
    pub fn all_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }

    /// Whether this array has the given shape.
    #[inline]
    pub fn has_shape(&self, shape: [usize; 4]) -> bool {
        self.shape() == shape
    }
}

/// Face-centred scalar data, one array per direction.
///
/// `x1f` has one more entry than the cell grid along i, `x2f` along j and
/// `x3f` along k.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceField {
    pub x1f: BlockField,
    pub x2f: BlockField,
    pub x3f: BlockField,
}

impl FaceField {
    /// Build from three face arrays.
    pub fn new(x1f: BlockField, x2f: BlockField, x3f: BlockField) -> Self {
        Self { x1f, x2f, x3f }
    }

    /// Zero face field sized for `geometry`.
    pub fn zeros(geometry: &BlockGeometry) -> Self {
        let face = |dir: Direction| {
            let [nk, nj, ni] = geometry.face_shape(dir);
            BlockField::zeros(1, nk, nj, ni)
        };
        Self::new(face(Direction::X1), face(Direction::X2), face(Direction::X3))
    }

    /// The array normal to `dir`.
    #[inline]
    pub fn component(&self, dir: Direction) -> &BlockField {
        match dir {
            Direction::X1 => &self.x1f,
            Direction::X2 => &self.x2f,
            Direction::X3 => &self.x3f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_indexing() {
        let f = BlockField::from_fn(2, 2, 3, 4, |k, j, i, s| {
            s[0] = (100 * k + 10 * j + i) as f64;
            s[1] = -1.0;
        });
        assert_eq!(f.get(0, 1, 2, 3), 123.0);
        assert_eq!(f.get(0, 0, 1, 0), 10.0);
        assert_eq!(f.get(1, 1, 1, 1), -1.0);
        assert_eq!(f.point(1, 2, 3), &[123.0, -1.0]);
    }

    #[test]
    fn test_rows_are_contiguous() {
        let f = BlockField::from_fn(1, 2, 2, 3, |k, j, i, s| s[0] = (100 * k + 10 * j + i) as f64);
        assert_eq!(f.row(1, 0), &[100.0, 101.0, 102.0]);
        assert_eq!(f.row(0, 1), &[10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_par_rows_mut_cover_storage_order() {
        let mut f = BlockField::zeros(3, 2, 4, 5);
        assert_eq!(f.par_rows_mut().len(), 8);
        f.par_rows_mut().enumerate().for_each(|(r, row)| {
            assert_eq!(row.len(), 15);
            row.fill(r as f64);
        });
        assert_eq!(f.get(2, 1, 3, 4), 7.0);
        assert_eq!(f.get(0, 0, 1, 0), 1.0);
    }

    #[test]
    fn test_max_abs_and_finite() {
        let mut f = BlockField::filled(1, 1, 1, 3, -2.0);
        assert_eq!(f.max_abs(), 2.0);
        assert!(f.all_finite());
        f.set(0, 0, 0, 1, f64::NAN);
        assert!(!f.all_finite());
    }
}
