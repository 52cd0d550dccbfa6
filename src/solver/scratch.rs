//! Per-worker scratch arenas.

use parking_lot::{Mutex, MutexGuard};

use crate::reconstruct::FaceStates;

/// Buffers one worker reuses for every face row it processes.
#[derive(Debug)]
pub struct SweepScratch {
    /// Left/right interface states of the current row
    pub states: FaceStates,
    /// Cell widths along the sweep for the current row
    pub dxw: Vec<f64>,
}

impl SweepScratch {
    /// Scratch for rows of up to `n_faces` faces.
    pub fn new(n_faces: usize, nwave: usize) -> Self {
        Self {
            states: FaceStates::new(n_faces, nwave),
            dxw: vec![0.0; n_faces],
        }
    }
}

/// One arena per pool worker, sized once when the pool is created.
///
/// Workers pick their arena by rayon thread index, so locks are only
/// contended if work runs outside the owning pool.
#[derive(Debug)]
pub struct ScratchPool {
    arenas: Vec<Mutex<SweepScratch>>,
}

impl ScratchPool {
    pub fn new(workers: usize, n_faces: usize, nwave: usize) -> Self {
        let arenas = (0..workers.max(1))
            .map(|_| Mutex::new(SweepScratch::new(n_faces, nwave)))
            .collect();
        Self { arenas }
    }

    /// Number of arenas.
    #[inline]
    pub fn len(&self) -> usize {
        self.arenas.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arenas.is_empty()
    }

    /// Lock the arena belonging to the calling worker.
    #[inline]
    pub fn lock_current(&self) -> MutexGuard<'_, SweepScratch> {
        let index = rayon::current_thread_index().unwrap_or(0) % self.arenas.len();
        self.arenas[index].lock()
    }
}
