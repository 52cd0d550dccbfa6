//! Block storage and geometry collaborators.
//!
//! - [`BlockField`]: cell- or face-centred 4-index arrays
//! - [`FaceField`]: one face array per direction
//! - [`BlockGeometry`]: interior bounds and ghost layers
//! - [`Coordinates`]: per-row cell widths ([`Cartesian`], [`Cylindrical`])

mod coordinates;
mod field;
mod geometry;

pub use coordinates::{Cartesian, Coordinates, Cylindrical};
pub use field::{BlockField, FaceField};
pub use geometry::BlockGeometry;
