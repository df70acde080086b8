//! Rotation to, and back from, the series maximum.

use tracing::instrument;

use crate::Value;
use crate::error::AlignError;

/// Reserved index meaning "no position". Never a valid index into a series.
pub const INVALID_INDEX: usize = usize::MAX;

/// Find the first maximum of `values` and rotate it to the front.
///
/// Returns the index the maximum occupied and a fresh vector
/// `values[peak..] ++ values[..peak]`. Only a strictly greater value replaces
/// the current maximum, so ties resolve to the earliest position and NaN is
/// never selected unless it comes first. An empty input yields
/// `(INVALID_INDEX, vec![])`.
#[must_use]
pub fn rotate_to_max(values: &[Value]) -> (usize, Vec<Value>) {
    let Some(peak) = argmax(values) else {
        return (INVALID_INDEX, Vec::new());
    };
    (peak, splice(peak, values))
}

/// Undo [`rotate_to_max`], given the index the maximum originally occupied.
///
/// Returns a fresh vector `rotated[n - peak..] ++ rotated[..n - peak]`.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`AlignError::EmptySeries`] | `rotated` is empty |
/// | [`AlignError::InvalidIndex`] | `peak` is [`INVALID_INDEX`] |
/// | [`AlignError::IndexOutOfRange`] | `peak >= rotated.len()` |
pub fn unrotate(peak: usize, rotated: &[Value]) -> Result<Vec<Value>, AlignError> {
    let n = rotated.len();
    if n == 0 {
        return Err(AlignError::EmptySeries);
    }
    if peak == INVALID_INDEX {
        return Err(AlignError::InvalidIndex);
    }
    if peak >= n {
        return Err(AlignError::IndexOutOfRange { index: peak, len: n });
    }
    Ok(splice(n - peak, rotated))
}

/// Return a fresh `values[split..] ++ values[..split]`.
fn splice(split: usize, values: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(values.len());
    out.extend_from_slice(&values[split..]);
    out.extend_from_slice(&values[..split]);
    out
}

fn argmax(values: &[Value]) -> Option<usize> {
    let (first, rest) = values.split_first()?;
    let mut best = (0, *first);
    for (i, &v) in rest.iter().enumerate() {
        if v > best.1 {
            best = (i + 1, v);
        }
    }
    Some(best.0)
}

/// A series rotated so its maximum sits at index 0, paired with the index
/// the maximum came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    peak: usize,
    values: Vec<Value>,
}

impl Rotation {
    /// Rotate `values` to its first maximum. Returns `None` for an empty input.
    #[must_use]
    #[instrument(skip(values), fields(n = values.len()))]
    pub fn to_max(values: &[Value]) -> Option<Self> {
        match rotate_to_max(values) {
            (INVALID_INDEX, _) => None,
            (peak, values) => Some(Self { peak, values }),
        }
    }

    /// Return the index the maximum occupied in the original series.
    #[must_use]
    pub fn peak(&self) -> usize {
        self.peak
    }

    /// Borrow the rotated values.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consume and return the rotated values.
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Restore the original ordering.
    #[must_use]
    pub fn unrotate(&self) -> Vec<Value> {
        splice(self.values.len() - self.peak, &self.values)
    }
}
