use alloc::boxed::Box;
use alloc::vec;
use core::ops::{Add, Mul, MulAssign, Sub};

use crate::error::{Error, Result};
use crate::traits::Scalar;
use crate::vector::Vector;

use super::Matrix;

impl<T> Matrix<T> {
    #[inline]
    fn check_same_dim(&self, found: usize) -> Result<()> {
        if self.dim() != found {
            return Err(Error::SizeMismatch {
                expected: self.dim(),
                found,
            });
        }
        Ok(())
    }
}

impl<T: Scalar> Matrix<T> {
    fn zip_rows(
        &self,
        rhs: &Self,
        f: impl Fn(&Vector<T>, &Vector<T>) -> Result<Vector<T>>,
    ) -> Result<Self> {
        self.check_same_dim(rhs.dim())?;
        let rows = self
            .rows
            .iter()
            .zip(rhs.rows.iter())
            .map(|(a, b)| f(a, b))
            .collect::<Result<Box<[_]>>>()?;
        Ok(Matrix::from_rows_unchecked(Vector::from_boxed(rows)))
    }

    /// Matrix–vector product `y[i] = row_i · v`.
    ///
    /// Fails with [`Error::SizeMismatch`] unless `v.len() == dim()`.
    ///
    /// ```
    /// use dynla::{Matrix, Vector};
    /// let m = Matrix::from_fn(2, |i, j| (i * 2 + j + 1) as i32).unwrap(); // [[1,2],[3,4]]
    /// let v = Vector::from_slice(&[1, -1]).unwrap();
    /// assert_eq!(m.mul_vector(&v).unwrap().as_slice(), &[-1, -1]);
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(dim = self.dim()))]
    pub fn mul_vector(&self, v: &Vector<T>) -> Result<Vector<T>> {
        self.check_same_dim(v.len())?;
        let data = self
            .rows
            .iter()
            .map(|row| row.dot(v))
            .collect::<Result<Box<[T]>>>()?;
        Ok(Vector::from_boxed(data))
    }

    /// Matrix product, accumulated row by row in i–k–j order so the inner
    /// loop walks contiguous rows of both the result and `rhs`.
    ///
    /// Fails with [`Error::SizeMismatch`] when the dimensions differ.
    ///
    /// ```
    /// use dynla::Matrix;
    /// let a = Matrix::from_fn(2, |i, j| (i * 2 + j + 1) as i32).unwrap(); // [[1,2],[3,4]]
    /// let b = Matrix::from_fn(2, |i, j| (i * 2 + j + 5) as i32).unwrap(); // [[5,6],[7,8]]
    /// let c = a.mul_matrix(&b).unwrap();
    /// assert_eq!(c[0], [19, 22]);
    /// assert_eq!(c[1], [43, 50]);
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(dim = self.dim()))]
    pub fn mul_matrix(&self, rhs: &Self) -> Result<Self> {
        self.check_same_dim(rhs.dim())?;
        let n = self.dim();
        let rows = self
            .rows
            .iter()
            .map(|lhs_row| {
                let mut acc = vec![T::zero(); n];
                for (a_ik, rhs_row) in lhs_row.iter().zip(rhs.rows.iter()) {
                    for (c_ij, &b_kj) in acc.iter_mut().zip(rhs_row.iter()) {
                        *c_ij = *c_ij + *a_ik * b_kj;
                    }
                }
                Vector::from_boxed(acc.into_boxed_slice())
            })
            .collect();
        Ok(Matrix::from_rows_unchecked(Vector::from_boxed(rows)))
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        Matrix::from_rows_unchecked(self.rows.map(|row| row * rhs))
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, rhs: T) -> Matrix<T> {
        self *= rhs;
        self
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for row in self.rows.iter_mut() {
            *row *= rhs;
        }
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Operator forms: every ownership combination forwards to `&a ⊕ &b` ─

macro_rules! forward_owned_binop {
    ($Trait:ident, $method:ident, $Rhs:ident, $Output:ty) => {
        impl<T: Scalar> $Trait<$Rhs<T>> for Matrix<T> {
            type Output = $Output;

            fn $method(self, rhs: $Rhs<T>) -> $Output {
                (&self).$method(&rhs)
            }
        }

        impl<T: Scalar> $Trait<&$Rhs<T>> for Matrix<T> {
            type Output = $Output;

            fn $method(self, rhs: &$Rhs<T>) -> $Output {
                (&self).$method(rhs)
            }
        }

        impl<T: Scalar> $Trait<$Rhs<T>> for &Matrix<T> {
            type Output = $Output;

            fn $method(self, rhs: $Rhs<T>) -> $Output {
                self.$method(&rhs)
            }
        }
    };
}

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_rows(rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_rows(rhs, |a, b| a - b)
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.mul_matrix(rhs)
    }
}

impl<T: Scalar> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Result<Vector<T>>;

    fn mul(self, rhs: &Vector<T>) -> Result<Vector<T>> {
        self.mul_vector(rhs)
    }
}

forward_owned_binop!(Add, add, Matrix, Result<Matrix<T>>);
forward_owned_binop!(Sub, sub, Matrix, Result<Matrix<T>>);
forward_owned_binop!(Mul, mul, Matrix, Result<Matrix<T>>);
forward_owned_binop!(Mul, mul, Vector, Result<Vector<T>>);

#[cfg(test)]
mod tests {
    use super::*;

    /// Row-major `dim x dim` matrix from a flat slice.
    fn mat(dim: usize, values: &[i64]) -> Matrix<i64> {
        assert_eq!(values.len(), dim * dim);
        Matrix::from_fn(dim, |i, j| values[i * dim + j]).unwrap()
    }

    fn vecn(values: &[i64]) -> Vector<i64> {
        Vector::from_slice(values).unwrap()
    }

    #[test]
    fn multiply_two_by_two() {
        let a = mat(2, &[1, 2, 3, 4]);
        let b = mat(2, &[5, 6, 7, 8]);
        assert_eq!((&a * &b).unwrap(), mat(2, &[19, 22, 43, 50]));
        assert_eq!(a, mat(2, &[1, 2, 3, 4]));
    }

    #[test]
    fn multiply_by_identity() {
        let a = mat(3, &[2, -1, 0, 4, 5, 6, -7, 8, 9]);
        let id = Matrix::<i64>::identity(3).unwrap();
        assert_eq!((&a * &id).unwrap(), a);
        assert_eq!((id * &a).unwrap(), a);
    }

    #[test]
    fn multiply_non_commutative() {
        let a = mat(2, &[0, 1, 0, 0]);
        let b = mat(2, &[0, 0, 1, 0]);
        assert_eq!((&a * &b).unwrap(), mat(2, &[1, 0, 0, 0]));
        assert_eq!((&b * &a).unwrap(), mat(2, &[0, 0, 0, 1]));
    }

    #[test]
    fn multiply_mismatched_fails() {
        let a = Matrix::<i64>::new(2).unwrap();
        let b = Matrix::<i64>::new(3).unwrap();
        assert_eq!(
            (a * b).unwrap_err(),
            Error::SizeMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn matrix_vector() {
        let a = mat(3, &[1, 0, 2, 0, 1, 0, 3, 0, 1]);
        let v = vecn(&[1, 2, 3]);
        assert_eq!((&a * &v).unwrap(), vecn(&[7, 2, 6]));
    }

    #[test]
    fn matrix_vector_mismatched_fails() {
        let a = Matrix::<i64>::new(3).unwrap();
        assert_eq!(
            (&a * vecn(&[1, 2])).unwrap_err(),
            Error::SizeMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn add_and_sub() {
        let a = mat(2, &[1, 2, 3, 4]);
        let b = mat(2, &[10, 20, 30, 40]);
        assert_eq!((&a + &b).unwrap(), mat(2, &[11, 22, 33, 44]));
        assert_eq!((&b - &a).unwrap(), mat(2, &[9, 18, 27, 36]));
        assert_eq!((a.clone() - a).unwrap(), Matrix::new(2).unwrap());
    }

    #[test]
    fn add_mismatched_fails() {
        let a = Matrix::<i64>::new(2).unwrap();
        let b = Matrix::<i64>::new(4).unwrap();
        assert!(matches!(&a + &b, Err(Error::SizeMismatch { .. })));
        assert!(matches!(a - b, Err(Error::SizeMismatch { .. })));
    }

    #[test]
    fn scalar_multiply() {
        let a = mat(2, &[1, -2, 3, 0]);
        assert_eq!(&a * 3, mat(2, &[3, -6, 9, 0]));
        assert_eq!(2 * &a, mat(2, &[2, -4, 6, 0]));

        let mut b = a.clone();
        b *= -1;
        assert_eq!(b, mat(2, &[-1, 2, -3, 0]));
        assert_eq!(a * 0, Matrix::new(2).unwrap());
    }

    #[test]
    fn float_product() {
        let a = Matrix::from_fn(2, |i, j| (i + j) as f64 * 0.5).unwrap();
        let c = (&a * &a).unwrap();
        assert_eq!(c[0], [0.25, 0.5]);
        assert_eq!(c[1], [0.5, 1.25]);
    }
}
