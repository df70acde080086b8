//! Peak alignment for cyclic time series.
//!
//! Rotates a series so its maximum sits at index 0, making periodic series
//! comparable independent of phase, and undoes that rotation. Lossless: no
//! arithmetic is performed on the samples.

mod error;
mod rotate;

pub use error::AlignError;
pub use rotate::{INVALID_INDEX, Rotation, rotate_to_max, unrotate};

/// A time-domain sample.
pub type Value = f64;
