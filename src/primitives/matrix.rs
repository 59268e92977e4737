//! Dense row-major grid backing the user-by-title rating table.

use serde::{Deserialize, Serialize};

use super::Vector;

/// A 2D matrix (row-major storage).
///
/// The rating grid stores cells as `Option<f32>` so that a user who never
/// rated a title is distinguishable from one who rated it zero.
///
/// # Examples
///
/// ```
/// use afinidad::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![Some(5.0_f32), None, Some(4.0), Some(1.0)])
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.get(0, 1), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Builds a matrix over `data` laid out row by row.
    ///
    /// # Errors
    ///
    /// Returns an error when `data.len()` is not `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, &'static str> {
        if data.len() != rows * cols {
            return Err("Data length does not match rows * cols");
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix with every cell set to `value`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// The shape as `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Reads the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.offset(row, col)]
    }

    /// Writes the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.offset(row, col);
        self.data[idx] = value;
    }

    /// Copies row `row_idx` out as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row_idx` is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        assert!(
            row_idx < self.rows,
            "row {row_idx} out of bounds ({} rows)",
            self.rows
        );
        let start = row_idx * self.cols;
        Vector::from_slice(&self.data[start..start + self.cols])
    }

    /// Copies column `col_idx` out as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col_idx` is out of bounds.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector<T> {
        assert!(
            col_idx < self.cols,
            "column {col_idx} out of bounds ({} columns)",
            self.cols
        );
        let cells = self.data.iter().skip(col_idx).step_by(self.cols);
        Vector::from_vec(cells.copied().collect())
    }

    /// The backing storage in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for a {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
