//! Small index and layout types shared by every stage of the pipeline.
//!
//! - [`Direction`]: sweep axis plus its cyclic slot permutations
//! - [`Span`]: inclusive index range
//! - [`VariableLayout`]: which slots a run carries

mod direction;
mod layout;
mod span;

pub use direction::Direction;
pub use layout::{
    IB1, IB2, IB3, IDN, IEN, IM1, IM2, IM3, IPR, IVX, IVY, IVZ, NFIELD, VariableLayout,
};
pub use span::Span;
