//! Trait definitions for interface-state reconstruction.

use crate::mesh::BlockField;
use crate::types::{Direction, Span};

/// One row of faces handed to a reconstruction or Riemann call.
///
/// The row is always laid out along i. For an x1 sweep `(k, j)` is a cell
/// row and `span` covers faces `is..=ie+1`; for an x2 sweep `j` is the face
/// index, and for an x3 sweep `k` is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceRow {
    pub k: usize,
    pub j: usize,
    pub span: Span,
}

impl FaceRow {
    /// Create a face row.
    #[inline]
    pub fn new(k: usize, j: usize, span: Span) -> Self {
        Self { k, j, span }
    }

    /// Value of `slot` in the cell at signed `offset` along `dir` from the
    /// cell above face `i` of this row.
    ///
    /// Offset `-1` is the cell below the face, `0` the cell above it.
    #[inline]
    pub fn cell(&self, src: &BlockField, dir: Direction, slot: usize, i: usize, offset: isize) -> f64 {
        match dir {
            Direction::X1 => src.get(slot, self.k, self.j, shift(i, offset)),
            Direction::X2 => src.get(slot, self.k, shift(self.j, offset), i),
            Direction::X3 => src.get(slot, shift(self.k, offset), self.j, i),
        }
    }
}

#[inline]
fn shift(index: usize, offset: isize) -> usize {
    index.wrapping_add_signed(offset)
}

/// Left/right interface states for one face row.
///
/// Storage is indexed by absolute i with the `nwave` slots of one face
/// adjacent, and is reused across slots, rows and directions. Entries
/// outside the span of the last call are stale.
#[derive(Clone, Debug)]
pub struct FaceStates {
    nwave: usize,
    wl: Vec<f64>,
    wr: Vec<f64>,
}

impl FaceStates {
    /// Allocate states for faces `0..n_faces`.
    pub fn new(n_faces: usize, nwave: usize) -> Self {
        Self {
            nwave,
            wl: vec![0.0; n_faces * nwave],
            wr: vec![0.0; n_faces * nwave],
        }
    }

    /// Number of slots per face.
    #[inline]
    pub fn nwave(&self) -> usize {
        self.nwave
    }

    /// Number of faces the buffers can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        if self.nwave == 0 { 0 } else { self.wl.len() / self.nwave }
    }

    /// Store the left and right value of `slot` at face `i`.
    #[inline]
    pub fn set(&mut self, i: usize, slot: usize, left: f64, right: f64) {
        let n = i * self.nwave + slot;
        self.wl[n] = left;
        self.wr[n] = right;
    }

    /// Left value of `slot` at face `i`.
    #[inline]
    pub fn left(&self, i: usize, slot: usize) -> f64 {
        self.wl[i * self.nwave + slot]
    }

    /// Right value of `slot` at face `i`.
    #[inline]
    pub fn right(&self, i: usize, slot: usize) -> f64 {
        self.wr[i * self.nwave + slot]
    }

    /// All left slots at face `i`.
    #[inline]
    pub fn left_state(&self, i: usize) -> &[f64] {
        &self.wl[i * self.nwave..(i + 1) * self.nwave]
    }

    /// All right slots at face `i`.
    #[inline]
    pub fn right_state(&self, i: usize) -> &[f64] {
        &self.wr[i * self.nwave..(i + 1) * self.nwave]
    }
}

/// Reconstruction of left/right face states from cell-centred data.
///
/// # Implementation Notes
///
/// - One call fills a single slot over every face of a row
/// - Calls for different slots share the same `states` buffer
/// - Face `i` along `dir` lies between cell `i-1` (left state) and cell `i` (right state)
/// - The method must not allocate
/// - Schemes see only cell indices: PLM and PPM assume uniform spacing along
///   `dir`, so on non-uniform [`Cartesian`](crate::mesh::Cartesian) faces or in
///   [`Cylindrical`](crate::mesh::Cylindrical) coordinates they are not
///   geometry-corrected
///
/// # Extending
///
/// To add a scheme, implement `Reconstruct` and add a variant to
/// [`Reconstructor`](super::Reconstructor).
pub trait Reconstruct: Send + Sync {
    /// Fill `states` for `dst_slot` from `src_slot` of `src` over the faces of `row`.
    fn reconstruct(
        &self,
        dir: Direction,
        row: FaceRow,
        src: &BlockField,
        src_slot: usize,
        dst_slot: usize,
        states: &mut FaceStates,
    );

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Ghost layers the stencil reaches beyond the swept face range.
    fn required_ghosts(&self) -> usize;
}
