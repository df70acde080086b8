//! Discrete Cosine Transforms over real-valued sample vectors.
//!
//! Pure math library with no I/O. Provides unnormalized DCT types I-IV built
//! on explicit basis matrices, the dense matrix primitives they run on, a
//! memoized identity-matrix cache, and cooperative cancellation.

mod cancel;
mod dct;
mod error;
mod identity;
mod kind;
mod matrix;

pub use cancel::CancellationToken;
pub use dct::{Dct, dct, dct1, dct2, dct3, dct4, idct};
pub use error::{DctError, MatrixError};
pub use identity::{IdentityCache, identity};
pub use kind::DctKind;
pub use matrix::Matrix;

/// A time-domain sample.
pub type Value = f64;

/// A frequency-domain coefficient.
pub type FValue = f64;
