//! Dense row-major matrix with transpose and multiply.

use std::ops::Index;

use crate::error::MatrixError;

/// Dense matrix of `f64` stored as a row-major flat vector.
///
/// Always has at least one row and one column: the empty matrix is not
/// representable, so every constructor that could produce one fails with
/// [`MatrixError::Empty`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from a list of equal-length rows.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MatrixError::Empty`] | `rows` is empty or its first row is empty |
    /// | [`MatrixError::Ragged`] | Any row differs in length from the first |
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(MatrixError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(MatrixError::Ragged {
                row,
                expected: n_cols,
                got: r.len(),
            });
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Build a `1 x n` matrix holding `values` as its single row.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MatrixError::Empty`] | `values` is empty |
    pub fn row_vector(values: &[f64]) -> Result<Self, MatrixError> {
        if values.is_empty() {
            return Err(MatrixError::Empty);
        }
        Ok(Self {
            rows: 1,
            cols: values.len(),
            data: values.to_vec(),
        })
    }

    /// Build a `rows x cols` matrix whose entry `(i, j)` is `f(i, j)`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MatrixError::Empty`] | `rows` or `cols` is zero |
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self, MatrixError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::Empty);
        }
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// Return the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return true if the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Borrow row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row index {i} out of bounds for matrix with {} rows", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    /// Return the transpose as a new matrix. The input is left untouched.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Return the matrix product `self * rhs`.
    ///
    /// Uses the standard contract `self.cols() == rhs.rows()`; entry `(i, j)`
    /// of the result is `sum_k self[(i, k)] * rhs[(k, j)]`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MatrixError::DimensionMismatch`] | `self.cols() != rhs.rows()` |
    pub fn multiply(&self, rhs: &Matrix) -> Result<Self, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                left_cols: self.cols,
                right_rows: rhs.rows,
            });
        }
        let mut data = vec![0.0_f64; self.rows * rhs.cols];
        // i-k-j order keeps both inner reads contiguous.
        for i in 0..self.rows {
            let out = &mut data[i * rhs.cols..(i + 1) * rhs.cols];
            for (k, &a) in self.row(i).iter().enumerate() {
                if a == 0.0 {
                    continue;
                }
                for (o, &b) in out.iter_mut().zip(rhs.row(k)) {
                    *o += a * b;
                }
            }
        }
        Ok(Self {
            rows: self.rows,
            cols: rhs.cols,
            data,
        })
    }

    /// Consume the matrix and return its rows as nested vectors.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.data.chunks_exact(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// Consume the matrix and return its row-major storage.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.rows, "row index {i} out of bounds for matrix with {} rows", self.rows);
        assert!(j < self.cols, "column index {j} out of bounds for matrix with {} columns", self.cols);
        &self.data[i * self.cols + j]
    }
}
