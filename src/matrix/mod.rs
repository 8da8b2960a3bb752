mod io;
mod ops;

use alloc::vec;
use core::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::traits::Scalar;
use crate::vector::{check_size, Vector};
use crate::MAX_MATRIX_SIZE;

/// Square heap-allocated matrix.
///
/// Owns a `Vector` of `dim` row vectors, each of length `dim`. The
/// dimension is fixed at construction and checked against
/// [`MAX_MATRIX_SIZE`]. Rows are contiguous, so `m[i]` is the slice of
/// row `i` and `m[i][j]` (or `m[(i, j)]`) reads a single element.
///
/// # Examples
///
/// ```
/// use dynla::Matrix;
///
/// let mut m = Matrix::<i32>::new(3).unwrap();
/// m[1][2] = 5;
/// assert_eq!(m.dim(), 3);
/// assert_eq!(*m.at(1, 2).unwrap(), 5);
/// assert_eq!(m[(1, 2)], 5);
/// assert!(m.at(3, 0).is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    rows: Vector<Vector<T>>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create a zero-filled `dim x dim` matrix.
    ///
    /// Fails with [`Error::InvalidSize`] when `dim` is zero or above
    /// [`MAX_MATRIX_SIZE`].
    ///
    /// ```
    /// use dynla::{Error, Matrix, MAX_MATRIX_SIZE};
    /// let m = Matrix::<f64>::new(2).unwrap();
    /// assert_eq!(m[1], [0.0, 0.0]);
    /// assert!(matches!(
    ///     Matrix::<f64>::new(MAX_MATRIX_SIZE + 1),
    ///     Err(Error::InvalidSize { .. })
    /// ));
    /// ```
    pub fn new(dim: usize) -> Result<Self> {
        check_size(dim, MAX_MATRIX_SIZE)?;
        let rows = (0..dim)
            .map(|_| Vector::from_boxed(vec![T::zero(); dim].into_boxed_slice()))
            .collect();
        Ok(Self {
            rows: Vector::from_boxed(rows),
        })
    }

    /// Create a `dim x dim` identity matrix.
    ///
    /// ```
    /// use dynla::Matrix;
    /// let id = Matrix::<i32>::identity(3).unwrap();
    /// assert_eq!(id[0], [1, 0, 0]);
    /// assert_eq!(id[2], [0, 0, 1]);
    /// ```
    pub fn identity(dim: usize) -> Result<Self> {
        Self::from_fn(dim, |i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T> Matrix<T> {
    /// Create a matrix by calling `f(row, col)` for each element, row by row.
    ///
    /// ```
    /// use dynla::Matrix;
    /// let m = Matrix::from_fn(2, |i, j| 10 * i + j).unwrap();
    /// assert_eq!(m[1], [10, 11]);
    /// ```
    pub fn from_fn(dim: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        check_size(dim, MAX_MATRIX_SIZE)?;
        let rows = (0..dim)
            .map(|i| Vector::from_boxed((0..dim).map(|j| f(i, j)).collect()))
            .collect();
        Ok(Self {
            rows: Vector::from_boxed(rows),
        })
    }

    /// Wrap rows already known to be square.
    pub(crate) fn from_rows_unchecked(rows: Vector<Vector<T>>) -> Self {
        Self { rows }
    }
}

impl<T: Default> Default for Matrix<T> {
    /// A 1x1 matrix holding the default value.
    fn default() -> Self {
        Self {
            rows: Vector::default(),
        }
    }
}

// ── Size, move and swap ─────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows, equal to the number of columns.
    #[inline]
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    /// Move the rows out, leaving `self` as an empty moved-from matrix.
    pub fn take(&mut self) -> Self {
        Self {
            rows: self.rows.take(),
        }
    }

    /// Exchange contents with `other` in constant time.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.rows.swap(&mut other.rows);
    }

    /// The nested row representation.
    #[inline]
    pub fn rows(&self) -> &Vector<Vector<T>> {
        &self.rows
    }

    /// Consume the matrix, handing back its rows without copying.
    pub fn into_rows(self) -> Vector<Vector<T>> {
        self.rows
    }

    /// Iterate over the row vectors.
    #[inline]
    pub fn iter_rows(&self) -> core::slice::Iter<'_, Vector<T>> {
        self.rows.iter()
    }
}

// ── Access ──────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    #[inline]
    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        let len = self.dim();
        for index in [row, col] {
            if index >= len {
                return Err(Error::IndexOutOfRange { index, len });
            }
        }
        Ok(())
    }

    /// Checked access to `M[row, col]`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when either index is `>= dim()`.
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.check_index(row, col)?;
        Ok(&self.rows[row][col])
    }

    /// Checked mutable access to `M[row, col]`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.check_index(row, col)?;
        Ok(&mut self.rows[row][col])
    }

    /// Checked access to row `i` as a vector.
    ///
    /// ```
    /// use dynla::Matrix;
    /// let m = Matrix::from_fn(2, |i, j| i + j).unwrap();
    /// assert_eq!(m.row(1).unwrap().as_slice(), &[1, 2]);
    /// assert!(m.row(2).is_err());
    /// ```
    pub fn row(&self, i: usize) -> Result<&Vector<T>> {
        self.rows.at(i)
    }
}

// ── Clone ───────────────────────────────────────────────────────────

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }

    /// Reuses row storage when the dimensions agree.
    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    #[inline]
    fn index(&self, row: usize) -> &[T] {
        self.rows[row].as_slice()
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        self.rows[row].as_mut_slice()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

// ── Conversions: Matrix ↔ Vector<Vector<T>> ─────────────────────────

impl<T> TryFrom<Vector<Vector<T>>> for Matrix<T> {
    type Error = Error;

    /// Adopt nested rows as a matrix.
    ///
    /// Fails with [`Error::InvalidSize`] when the row count is outside
    /// `1..=MAX_MATRIX_SIZE` and with [`Error::SizeMismatch`] when any row's
    /// length differs from the row count.
    ///
    /// ```
    /// use dynla::{Error, Matrix, Vector};
    /// let row = |xs: &[i32]| Vector::from_slice(xs).unwrap();
    ///
    /// let square = Vector::from_vec(vec![row(&[1, 2]), row(&[3, 4])]).unwrap();
    /// let m = Matrix::try_from(square).unwrap();
    /// assert_eq!(m[(1, 0)], 3);
    ///
    /// let jagged = Vector::from_vec(vec![row(&[1, 2]), row(&[3])]).unwrap();
    /// assert_eq!(
    ///     Matrix::try_from(jagged).unwrap_err(),
    ///     Error::SizeMismatch { expected: 2, found: 1 }
    /// );
    /// ```
    fn try_from(rows: Vector<Vector<T>>) -> Result<Self> {
        let dim = rows.len();
        check_size(dim, MAX_MATRIX_SIZE)?;
        if let Some(bad) = rows.iter().find(|r| r.len() != dim) {
            tracing::debug!(dim, row_len = bad.len(), "rejected jagged rows");
            return Err(Error::SizeMismatch {
                expected: dim,
                found: bad.len(),
            });
        }
        Ok(Self { rows })
    }
}

impl<T> From<Matrix<T>> for Vector<Vector<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.rows
    }
}
