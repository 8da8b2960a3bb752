use core::fmt::Debug;
use num_traits::{Num, One, Zero};

/// Trait for types that can be used as vector and matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, all integer types and, with the `complex`
/// feature, `Complex<f32>` / `Complex<f64>`.
///
/// Only arithmetic needs `Scalar`. Storage, indexing, equality and the
/// move/swap primitives work for any element type, which is what lets a
/// [`Matrix`](crate::Matrix) keep its rows in a `Vector<Vector<T>>`.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}
