//! Caller-owned inputs and outputs of a flux calculation.

use rayon::prelude::*;

use crate::config::PhysicsConfig;
use crate::mesh::{BlockField, BlockGeometry, FaceField};
use crate::types::Direction;

/// Borrowed input state for one call.
#[derive(Clone, Copy, Debug)]
pub struct FluxInput<'a> {
    /// Cell-centred primitive variables (`nhydro` slots)
    pub w: &'a BlockField,
    /// Cell-centred magnetic field (3 slots), magnetized runs only
    pub bcc: Option<&'a BlockField>,
    /// Face-centred magnetic field, magnetized runs only
    pub b: Option<&'a FaceField>,
}

impl<'a> FluxInput<'a> {
    /// Input for a run without magnetic fields.
    pub fn hydro(w: &'a BlockField) -> Self {
        Self { w, bcc: None, b: None }
    }

    /// Input for a magnetized run.
    pub fn mhd(w: &'a BlockField, bcc: &'a BlockField, b: &'a FaceField) -> Self {
        Self {
            w,
            bcc: Some(bcc),
            b: Some(b),
        }
    }
}

/// Per-direction outputs consumed by constrained transport.
///
/// All three arrays have the face shape of their direction and one slot.
/// `ey` and `ez` hold the EMF components given by
/// [`Direction::emf_components`].
#[derive(Clone, Debug, PartialEq)]
pub struct CtFaces {
    pub ey: BlockField,
    pub ez: BlockField,
    pub weight: BlockField,
}

impl CtFaces {
    fn new(geometry: &BlockGeometry, dir: Direction) -> Self {
        let [nk, nj, ni] = geometry.face_shape(dir);
        Self {
            ey: BlockField::zeros(1, nk, nj, ni),
            ez: BlockField::zeros(1, nk, nj, ni),
            weight: BlockField::zeros(1, nk, nj, ni),
        }
    }

    /// Mutable `(ey, ez, weight)` rows in storage order.
    pub(crate) fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = CtRow<'_>> {
        self.ey
            .par_rows_mut()
            .zip(self.ez.par_rows_mut())
            .zip(self.weight.par_rows_mut())
            .map(|((ey, ez), weight)| CtRow { ey, ez, weight })
    }

    pub fn fill(&mut self, value: f64) {
        self.ey.fill(value);
        self.ez.fill(value);
        self.weight.fill(value);
    }
}

/// One row of [`CtFaces`].
pub(crate) struct CtRow<'a> {
    pub ey: &'a mut [f64],
    pub ez: &'a mut [f64],
    pub weight: &'a mut [f64],
}

/// Flux, EMF and weight arrays of one block, allocated once and overwritten
/// by every call.
///
/// Arrays exist for all three directions even when an axis is flat; a
/// skipped direction is left as it was.
#[derive(Clone, Debug, PartialEq)]
pub struct FluxBuffers {
    flux: [BlockField; 3],
    ct: Option<[CtFaces; 3]>,
}

impl FluxBuffers {
    /// Zeroed buffers for `geometry` and the enabled physics.
    pub fn new(geometry: &BlockGeometry, physics: &PhysicsConfig) -> Self {
        let nhydro = physics.layout().nhydro();
        let flux = Direction::ALL.map(|dir| {
            let [nk, nj, ni] = geometry.face_shape(dir);
            BlockField::zeros(nhydro, nk, nj, ni)
        });
        let ct = physics
            .magnetic_fields
            .then(|| Direction::ALL.map(|dir| CtFaces::new(geometry, dir)));
        Self { flux, ct }
    }

    /// Hydro fluxes through faces normal to `dir`.
    #[inline]
    pub fn flux(&self, dir: Direction) -> &BlockField {
        &self.flux[dir.index()]
    }

    #[inline]
    pub fn flux_mut(&mut self, dir: Direction) -> &mut BlockField {
        &mut self.flux[dir.index()]
    }

    /// CT outputs of the sweep along `dir`, magnetized runs only.
    #[inline]
    pub fn ct(&self, dir: Direction) -> Option<&CtFaces> {
        self.ct.as_ref().map(|ct| &ct[dir.index()])
    }

    #[inline]
    pub fn ct_mut(&mut self, dir: Direction) -> Option<&mut CtFaces> {
        self.ct.as_mut().map(|ct| &mut ct[dir.index()])
    }

    /// Whether EMF and weight arrays are allocated.
    #[inline]
    pub fn is_magnetic(&self) -> bool {
        self.ct.is_some()
    }

    /// Set every array to `value`.
    pub fn fill(&mut self, value: f64) {
        for flux in &mut self.flux {
            flux.fill(value);
        }
        if let Some(ct) = self.ct.as_mut() {
            for faces in ct.iter_mut() {
                faces.fill(value);
            }
        }
    }

    /// Both output groups of one direction, borrowed together.
    #[inline]
    pub(crate) fn split_mut(&mut self, dir: Direction) -> (&mut BlockField, Option<&mut CtFaces>) {
        let d = dir.index();
        (&mut self.flux[d], self.ct.as_mut().map(|ct| &mut ct[d]))
    }
}
