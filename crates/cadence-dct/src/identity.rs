//! Memoized identity matrices.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Cache of `n x n` identity matrices keyed by dimension.
///
/// Entries are built lazily on first request and never evicted. Returned
/// matrices are shared through [`Arc`] and are read-only; concurrent first
/// requests for the same `n` observe a single fully built entry.
#[derive(Debug, Default)]
pub struct IdentityCache {
    entries: RwLock<HashMap<usize, Arc<Matrix>>>,
}

impl IdentityCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the process-wide cache used by [`identity`].
    pub fn shared() -> &'static IdentityCache {
        static SHARED: OnceLock<IdentityCache> = OnceLock::new();
        SHARED.get_or_init(IdentityCache::new)
    }

    /// Return the `n x n` identity matrix, building and caching it on first request.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MatrixError::Empty`] | `n` is zero |
    pub fn get(&self, n: usize) -> Result<Arc<Matrix>, MatrixError> {
        if n == 0 {
            return Err(MatrixError::Empty);
        }

        // Entries are inserted whole under the write lock, so a poisoned map
        // is still consistent and safe to keep using.
        if let Some(m) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&n)
        {
            return Ok(Arc::clone(m));
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(m) = entries.get(&n) {
            return Ok(Arc::clone(m));
        }
        let m = Arc::new(build_identity(n)?);
        entries.insert(n, Arc::clone(&m));
        debug!(n, cached = entries.len(), "identity matrix cached");
        Ok(m)
    }

    /// Return true if an identity matrix of dimension `n` has been cached.
    #[must_use]
    pub fn contains(&self, n: usize) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&n)
    }

    /// Return the number of cached dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Return true if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Return the `n x n` identity matrix from the process-wide cache.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MatrixError::Empty`] | `n` is zero |
pub fn identity(n: usize) -> Result<Arc<Matrix>, MatrixError> {
    IdentityCache::shared().get(n)
}

fn build_identity(n: usize) -> Result<Matrix, MatrixError> {
    Matrix::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
}
