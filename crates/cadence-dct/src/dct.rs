//! DCT kernels.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::cancel::{self, CancellationToken};
use crate::error::DctError;
use crate::kind::DctKind;
use crate::matrix::Matrix;
use crate::{FValue, Value};

/// Immutable DCT configuration. Thread-safe and copyable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dct {
    kind: DctKind,
}

impl Dct {
    /// Create a transform of the given kind.
    #[must_use]
    pub fn new(kind: DctKind) -> Self {
        Self { kind }
    }

    /// Create the default forward transform (DCT-II).
    #[must_use]
    pub fn forward() -> Self {
        Self::new(DctKind::II)
    }

    /// Create the default inverse transform (DCT-III).
    #[must_use]
    pub fn inverse() -> Self {
        Self::new(DctKind::III)
    }

    /// Return the DCT variant.
    #[must_use]
    pub fn kind(&self) -> DctKind {
        self.kind
    }

    /// Transform a sample vector into its cosine coefficients.
    ///
    /// Builds the `n x n` basis in sample-major orientation and multiplies the
    /// input, as a `1 x n` row, against it. Sequences of length 0 or 1 yield an
    /// empty result. `cancel` is polled before building the basis and around
    /// the multiplication.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DctError::Cancelled`] | `cancel` was signalled before the result was ready |
    /// | [`DctError::Matrix`] | Basis construction or multiplication failed |
    #[instrument(skip(self, cancel, values), fields(kind = %self.kind, n = values.len()))]
    pub fn transform(
        &self,
        cancel: Option<&CancellationToken>,
        values: &[Value],
    ) -> Result<Vec<FValue>, DctError> {
        let n = values.len();
        if n <= 1 {
            return Ok(Vec::new());
        }

        checkpoint(cancel, "before basis")?;
        let basis = self.kind.sample_major(n)?;

        checkpoint(cancel, "before multiply")?;
        let coefficients = Matrix::row_vector(values)?.multiply(&basis)?;

        checkpoint(cancel, "after multiply")?;
        Ok(coefficients.into_inner())
    }

    /// Transform many sample vectors in parallel, preserving input order.
    ///
    /// Each series is handled exactly as by [`transform`](Self::transform).
    ///
    /// # Errors
    ///
    /// Returns the first [`DctError`] encountered, including cancellation.
    #[instrument(skip(self, cancel, series), fields(kind = %self.kind, n_series = series.len()))]
    pub fn transform_batch(
        &self,
        cancel: Option<&CancellationToken>,
        series: &[Vec<Value>],
    ) -> Result<Vec<Vec<FValue>>, DctError> {
        series
            .par_iter()
            .map(|s| self.transform(cancel, s))
            .collect()
    }
}

fn checkpoint(cancel: Option<&CancellationToken>, stage: &'static str) -> Result<(), DctError> {
    if cancel::is_cancelled(cancel) {
        debug!(stage, "transform cancelled");
        return Err(DctError::Cancelled);
    }
    Ok(())
}

/// DCT type I.
///
/// # Errors
///
/// See [`Dct::transform`].
pub fn dct1(cancel: Option<&CancellationToken>, values: &[Value]) -> Result<Vec<FValue>, DctError> {
    Dct::new(DctKind::I).transform(cancel, values)
}

/// DCT type II, the default forward DCT.
///
/// # Errors
///
/// See [`Dct::transform`].
pub fn dct2(cancel: Option<&CancellationToken>, values: &[Value]) -> Result<Vec<FValue>, DctError> {
    Dct::new(DctKind::II).transform(cancel, values)
}

/// DCT type III, the default inverse DCT.
///
/// # Errors
///
/// See [`Dct::transform`].
pub fn dct3(cancel: Option<&CancellationToken>, values: &[Value]) -> Result<Vec<FValue>, DctError> {
    Dct::new(DctKind::III).transform(cancel, values)
}

/// DCT type IV.
///
/// # Errors
///
/// See [`Dct::transform`].
pub fn dct4(cancel: Option<&CancellationToken>, values: &[Value]) -> Result<Vec<FValue>, DctError> {
    Dct::new(DctKind::IV).transform(cancel, values)
}

/// Default forward DCT. Alias for [`dct2`].
///
/// # Errors
///
/// See [`Dct::transform`].
pub fn dct(cancel: Option<&CancellationToken>, values: &[Value]) -> Result<Vec<FValue>, DctError> {
    dct2(cancel, values)
}

/// Default inverse DCT. Alias for [`dct3`].
///
/// # Errors
///
/// See [`Dct::transform`].
pub fn idct(cancel: Option<&CancellationToken>, values: &[FValue]) -> Result<Vec<Value>, DctError> {
    dct3(cancel, values)
}
