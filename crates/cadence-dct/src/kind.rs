//! DCT variants and their basis matrices.

use std::f64::consts::PI;
use std::fmt;

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// One of the four standard DCT variants.
///
/// All bases are unnormalized: no `1/N` or orthonormal scaling is applied,
/// and the DCT-I boundary samples carry weight 1 rather than 0.5. Applying a
/// kind followed by its [`inverse`](Self::inverse) therefore scales the input
/// by [`inverse_scale`](Self::inverse_scale).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DctKind {
    /// DCT-I, defined for `n >= 2`.
    I,
    /// DCT-II, the default forward transform.
    #[default]
    II,
    /// DCT-III, the default inverse transform.
    III,
    /// DCT-IV.
    IV,
}

impl DctKind {
    /// Return the kind that undoes this one up to [`inverse_scale`](Self::inverse_scale).
    ///
    /// II and III invert each other; I and IV are their own inverses.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::I => Self::I,
            Self::II => Self::III,
            Self::III => Self::II,
            Self::IV => Self::IV,
        }
    }

    /// Return the factor by which `inverse(forward(x))` scales `x` for length `n`.
    ///
    /// `2(n-1)` for DCT-I, `2n` for the others.
    #[must_use]
    pub fn inverse_scale(self, n: usize) -> f64 {
        match self {
            Self::I => 2.0 * n.saturating_sub(1) as f64,
            Self::II | Self::III | Self::IV => 2.0 * n as f64,
        }
    }

    /// Build the `n x n` basis matrix for this kind.
    ///
    /// Row `k` is the `k`-th cosine basis vector sampled at every input
    /// position, so a transform computes `y[k] = sum_j x[j] * B[k][j]`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MatrixError::Empty`] | `n` is zero |
    pub fn basis(self, n: usize) -> Result<Matrix, MatrixError> {
        Matrix::from_fn(n, n, |k, j| self.coefficient(n, k, j))
    }

    /// Build the transpose of [`basis`](Self::basis): row `j` holds the weight
    /// of input sample `j` in every output coefficient, so a `1 x n` input row
    /// times this matrix yields the transform directly.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MatrixError::Empty`] | `n` is zero |
    pub(crate) fn sample_major(self, n: usize) -> Result<Matrix, MatrixError> {
        Matrix::from_fn(n, n, |j, k| self.coefficient(n, k, j))
    }

    /// Weight of input sample `j` in output coefficient `k` for length `n`.
    fn coefficient(self, n: usize, k: usize, j: usize) -> f64 {
        let nf = n as f64;
        match self {
            Self::I => {
                if j == 0 {
                    1.0
                } else if j == n - 1 {
                    if k % 2 == 0 { 1.0 } else { -1.0 }
                } else {
                    2.0 * (PI * (k * j) as f64 / (nf - 1.0)).cos()
                }
            }
            Self::II => 2.0 * (PI * (k * (2 * j + 1)) as f64 / (2.0 * nf)).cos(),
            Self::III => {
                if j == 0 {
                    1.0
                } else {
                    2.0 * (PI * (j * (2 * k + 1)) as f64 / (2.0 * nf)).cos()
                }
            }
            Self::IV => 2.0 * (PI * ((2 * k + 1) * (2 * j + 1)) as f64 / (4.0 * nf)).cos(),
        }
    }
}

impl fmt::Display for DctKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::I => "DCT-I",
            Self::II => "DCT-II",
            Self::III => "DCT-III",
            Self::IV => "DCT-IV",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DctKind; 4] = [DctKind::I, DctKind::II, DctKind::III, DctKind::IV];

    #[test]
    fn default_is_type_ii() {
        assert_eq!(DctKind::default(), DctKind::II);
    }

    #[test]
    fn inverse_pairs() {
        assert_eq!(DctKind::II.inverse(), DctKind::III);
        assert_eq!(DctKind::III.inverse(), DctKind::II);
        assert_eq!(DctKind::I.inverse(), DctKind::I);
        assert_eq!(DctKind::IV.inverse(), DctKind::IV);
    }

    #[test]
    fn inverse_scale_values() {
        assert_eq!(DctKind::I.inverse_scale(4), 6.0);
        assert_eq!(DctKind::II.inverse_scale(4), 8.0);
        assert_eq!(DctKind::IV.inverse_scale(5), 10.0);
    }

    #[test]
    fn basis_is_square() {
        for kind in ALL {
            let b = kind.basis(5).unwrap();
            assert!(b.is_square(), "{kind} basis not square");
            assert_eq!(b.rows(), 5);
        }
    }

    #[test]
    fn basis_rejects_zero() {
        for kind in ALL {
            assert_eq!(kind.basis(0), Err(MatrixError::Empty));
        }
    }

    #[test]
    fn dct1_boundary_columns_unscaled() {
        let b = DctKind::I.basis(4).unwrap();
        for k in 0..4 {
            assert_eq!(b[(k, 0)], 1.0);
            let expected = if k % 2 == 0 { 1.0 } else { -1.0 };
            assert_eq!(b[(k, 3)], expected);
        }
    }

    #[test]
    fn dct2_first_row_is_constant() {
        let b = DctKind::II.basis(6).unwrap();
        assert!(b.row(0).iter().all(|&v| (v - 2.0).abs() < 1e-12));
    }

    #[test]
    fn dct3_is_dct2_transpose_with_halved_dc() {
        let b2 = DctKind::II.basis(5).unwrap().transpose();
        let b3 = DctKind::III.basis(5).unwrap();
        for k in 0..5 {
            assert_eq!(b3[(k, 0)], 1.0);
            for j in 1..5 {
                assert!((b3[(k, j)] - b2[(k, j)]).abs() < 1e-12, "entry ({k}, {j})");
            }
        }
    }

    #[test]
    fn sample_major_is_basis_transpose() {
        for kind in ALL {
            for n in [1usize, 2, 5, 8] {
                let b = kind.basis(n).unwrap();
                assert_eq!(kind.sample_major(n).unwrap(), b.transpose(), "{kind} n={n}");
            }
        }
        assert_eq!(DctKind::II.sample_major(0), Err(MatrixError::Empty));
    }

    #[test]
    fn dct4_basis_is_symmetric() {
        let b = DctKind::IV.basis(6).unwrap();
        assert_eq!(b.transpose(), b);
    }

    #[test]
    fn display_names() {
        assert_eq!(DctKind::I.to_string(), "DCT-I");
        assert_eq!(DctKind::IV.to_string(), "DCT-IV");
    }
}
