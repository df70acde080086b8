//! Cooperative cancellation for transform kernels.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Token for cooperative cancellation of a transform.
///
/// Clone it to share between threads. Call [`cancel`](Self::cancel) from one
/// thread; kernels poll [`is_cancelled`](Self::is_cancelled) at coarse
/// checkpoints and return [`DctError::Cancelled`](crate::DctError::Cancelled).
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation to every clone of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Return true once cancellation has been signalled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Return true if an optional token has been cancelled.
pub(crate) fn is_cancelled(token: Option<&CancellationToken>) -> bool {
    token.is_some_and(CancellationToken::is_cancelled)
}
