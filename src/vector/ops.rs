use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::{Error, Result};
use crate::traits::Scalar;

use super::Vector;

impl<T> Vector<T> {
    #[inline]
    fn check_same_len(&self, rhs: &Self) -> Result<()> {
        if self.len() != rhs.len() {
            return Err(Error::SizeMismatch {
                expected: self.len(),
                found: rhs.len(),
            });
        }
        Ok(())
    }
}

impl<T: Scalar> Vector<T> {
    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        self.check_same_len(rhs)?;
        let data = self
            .iter()
            .zip(rhs.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Vector::from_boxed(data))
    }

    /// Dot product, accumulated in `T` starting from zero.
    ///
    /// Fails with [`Error::SizeMismatch`] when the lengths differ. The `*`
    /// operator between two vectors does the same thing.
    ///
    /// ```
    /// use dynla::Vector;
    /// let a = Vector::from_slice(&[1, 2, 3]).unwrap();
    /// let b = Vector::from_slice(&[4, 5, 6]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap(), 32);
    /// assert_eq!((&a * &b).unwrap(), 32);
    /// ```
    pub fn dot(&self, rhs: &Self) -> Result<T> {
        self.check_same_len(rhs)?;
        Ok(self
            .iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }
}

// ── Scalar operations: vector ⊕ scalar ──────────────────────────────

macro_rules! impl_scalar_op {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign:ident, $op:tt) => {
        impl<T: Scalar> $Trait<T> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: T) -> Vector<T> {
                self.map(|&x| x $op rhs)
            }
        }

        impl<T: Scalar> $Trait<T> for Vector<T> {
            type Output = Vector<T>;

            fn $method(mut self, rhs: T) -> Vector<T> {
                self.$assign(rhs);
                self
            }
        }

        impl<T: Scalar> $AssignTrait<T> for Vector<T> {
            fn $assign(&mut self, rhs: T) {
                for x in self.iter_mut() {
                    *x = *x $op rhs;
                }
            }
        }
    };
}

impl_scalar_op!(Add, add, AddAssign, add_assign, +);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign, -);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, *);

// ── scalar * vector (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }

            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: &Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Elementwise operations: vector ⊕ vector ─────────────────────────

macro_rules! impl_elementwise_op {
    ($Trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $Trait<&Vector<T>> for &Vector<T> {
            type Output = Result<Vector<T>>;

            fn $method(self, rhs: &Vector<T>) -> Result<Vector<T>> {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }

        impl<T: Scalar> $Trait<Vector<T>> for Vector<T> {
            type Output = Result<Vector<T>>;

            fn $method(self, rhs: Vector<T>) -> Result<Vector<T>> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Scalar> $Trait<&Vector<T>> for Vector<T> {
            type Output = Result<Vector<T>>;

            fn $method(self, rhs: &Vector<T>) -> Result<Vector<T>> {
                (&self).$method(rhs)
            }
        }

        impl<T: Scalar> $Trait<Vector<T>> for &Vector<T> {
            type Output = Result<Vector<T>>;

            fn $method(self, rhs: Vector<T>) -> Result<Vector<T>> {
                self.$method(&rhs)
            }
        }
    };
}

impl_elementwise_op!(Add, add, +);
impl_elementwise_op!(Sub, sub, -);

// ── Dot product: vector * vector ────────────────────────────────────

impl<T: Scalar> Mul<&Vector<T>> for &Vector<T> {
    type Output = Result<T>;

    fn mul(self, rhs: &Vector<T>) -> Result<T> {
        self.dot(rhs)
    }
}

impl<T: Scalar> Mul<Vector<T>> for Vector<T> {
    type Output = Result<T>;

    fn mul(self, rhs: Vector<T>) -> Result<T> {
        self.dot(&rhs)
    }
}

impl<T: Scalar> Mul<&Vector<T>> for Vector<T> {
    type Output = Result<T>;

    fn mul(self, rhs: &Vector<T>) -> Result<T> {
        self.dot(rhs)
    }
}

impl<T: Scalar> Mul<Vector<T>> for &Vector<T> {
    type Output = Result<T>;

    fn mul(self, rhs: Vector<T>) -> Result<T> {
        self.dot(&rhs)
    }
}
