//! Pre-defined type aliases for common `Vector` and `Matrix` element types.

use crate::{Matrix, Vector};

// ── Vector scalar aliases ───────────────────────────────────────────

/// Vector with `f32` elements.
pub type Vectorf32 = Vector<f32>;
/// Vector with `f64` elements.
pub type Vectorf64 = Vector<f64>;
/// Vector with `i32` elements.
pub type Vectori32 = Vector<i32>;
/// Vector with `i64` elements.
pub type Vectori64 = Vector<i64>;
/// Vector with `u32` elements.
pub type Vectoru32 = Vector<u32>;
/// Vector with `u64` elements.
pub type Vectoru64 = Vector<u64>;

// ── Matrix scalar aliases ───────────────────────────────────────────

/// Square matrix with `f32` elements.
pub type Matrixf32 = Matrix<f32>;
/// Square matrix with `f64` elements.
pub type Matrixf64 = Matrix<f64>;
/// Square matrix with `i32` elements.
pub type Matrixi32 = Matrix<i32>;
/// Square matrix with `i64` elements.
pub type Matrixi64 = Matrix<i64>;
/// Square matrix with `u32` elements.
pub type Matrixu32 = Matrix<u32>;
/// Square matrix with `u64` elements.
pub type Matrixu64 = Matrix<u64>;

// ── Complex aliases (behind `complex` feature) ──────────────────────

/// Vector with `Complex<f32>` elements.
#[cfg(feature = "complex")]
pub type Vectorz32 = Vector<num_complex::Complex<f32>>;
/// Vector with `Complex<f64>` elements.
#[cfg(feature = "complex")]
pub type Vectorz64 = Vector<num_complex::Complex<f64>>;

/// Square matrix with `Complex<f32>` elements.
#[cfg(feature = "complex")]
pub type Matrixz32 = Matrix<num_complex::Complex<f32>>;
/// Square matrix with `Complex<f64>` elements.
#[cfg(feature = "complex")]
pub type Matrixz64 = Matrix<num_complex::Complex<f64>>;
