//! Cube face orientations under quarter turns about the X and Y axes.
//!
//! An [`Orientation`] tracks which face label occupies each of the six fixed
//! slots of a cube. [`FaceTable`] precomputes all sixteen combinations of
//! X and Y turns together with their inverses.

pub mod face;
pub mod orientation;
pub mod rotation;
pub mod table;

pub use face::Face;
pub use orientation::Orientation;
pub use rotation::{Rotate90, RotationError};
pub use table::{render_faces, FaceTable, Notation};
