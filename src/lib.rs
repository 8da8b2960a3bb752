//! # dynla
//!
//! Heap-backed, fixed-length numeric containers: a one-dimensional
//! [`Vector<T>`] and a square [`Matrix<T>`] built from row vectors. Every
//! operation that can fail returns a [`Result`] carrying a typed [`Error`].
//!
//! ## Quick start
//!
//! ```
//! use dynla::{Matrix, Vector};
//!
//! let a = Matrix::from_fn(2, |i, j| (i * 2 + j + 1) as i64).unwrap(); // [[1,2],[3,4]]
//! let b = Matrix::from_fn(2, |i, j| (i * 2 + j + 5) as i64).unwrap(); // [[5,6],[7,8]]
//! let c = (&a * &b).unwrap();
//! assert_eq!(c[0], [19, 22]);
//! assert_eq!(c[1], [43, 50]);
//!
//! let v = Vector::from_slice(&[1_i64, 1]).unwrap();
//! let y = (&a * &v).unwrap();
//! assert_eq!(y.as_slice(), &[3, 7]);
//! ```
//!
//! ## Modules
//!
//! - [`vector`]: `Vector<T>`, owned boxed-slice storage whose length is fixed
//!   at construction. Checked (`at`) and panicking (`v[i]`) access, scalar and
//!   elementwise arithmetic, dot product, move-out (`take`) and `swap`.
//!
//! - [`matrix`]: `Matrix<T>`, a square matrix that owns a
//!   `Vector<Vector<T>>` of rows. 2-D checked access, scalar, matrix–vector
//!   and matrix–matrix algebra, lossless conversion to and from the nested
//!   row form.
//!
//! - [`error`]: [`Error`] (`InvalidSize`, `IndexOutOfRange`,
//!   `SizeMismatch`) and [`ReadError`] for text input.
//!
//! - [`traits`]: the [`Scalar`] element trait used by all arithmetic.
//!
//! ## Size limits
//!
//! | Container | Minimum | Maximum               |
//! |-----------|---------|-----------------------|
//! | `Vector`  | 1       | [`MAX_VECTOR_SIZE`]   |
//! | `Matrix`  | 1       | [`MAX_MATRIX_SIZE`]   |
//!
//! ## Cargo features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `std`     | yes     | `read_from` over `std::io::BufRead`, `std::error::Error` impls |
//! | `complex` | no      | `Complex<f32>` / `Complex<f64>` aliases via `num-complex` |
//! | `all`     | no      | `std` + `complex` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod aliases;
pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;

pub use aliases::*;
pub use error::{Error, ReadError, Result};
pub use matrix::Matrix;
pub use traits::Scalar;
pub use vector::Vector;

#[cfg(feature = "complex")]
pub use num_complex::Complex;

/// Largest length a [`Vector`] may be constructed with.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest dimension a [`Matrix`] may be constructed with.
pub const MAX_MATRIX_SIZE: usize = 10_000;
