mod io;
mod ops;
mod slice;

#[cfg(feature = "std")]
pub(crate) use io::parse_reader;
pub(crate) use io::parse_tokens;

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::traits::Scalar;
use crate::MAX_VECTOR_SIZE;

/// Reject a length or dimension outside `1..=max`.
pub(crate) fn check_size(requested: usize, max: usize) -> Result<()> {
    if requested == 0 || requested > max {
        tracing::debug!(requested, max, "rejected container size");
        return Err(Error::InvalidSize { requested, max });
    }
    Ok(())
}

/// Fixed-length heap-allocated vector.
///
/// Owns a boxed slice whose length is set at construction and never changes
/// afterwards. Construction validates the length against
/// [`MAX_VECTOR_SIZE`]; cloning deep-copies into fresh storage; moving is a
/// pointer move. [`take`](Vector::take) moves the storage out explicitly and
/// leaves an empty, moved-from vector behind.
///
/// # Examples
///
/// ```
/// use dynla::Vector;
///
/// let mut v = Vector::<i32>::new(3).unwrap();
/// v[1] = 4;
/// assert_eq!(v.len(), 3);
/// assert_eq!(*v.at(1).unwrap(), 4);
/// assert!(v.at(3).is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Vector<T> {
    data: Box<[T]>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Create a zero-filled vector of length `len`.
    ///
    /// Fails with [`Error::InvalidSize`] when `len` is zero or above
    /// [`MAX_VECTOR_SIZE`].
    ///
    /// ```
    /// use dynla::{Error, Vector, MAX_VECTOR_SIZE};
    /// let v = Vector::<f64>::new(4).unwrap();
    /// assert_eq!(v.as_slice(), &[0.0; 4]);
    /// assert!(matches!(
    ///     Vector::<f64>::new(MAX_VECTOR_SIZE + 1),
    ///     Err(Error::InvalidSize { .. })
    /// ));
    /// ```
    pub fn new(len: usize) -> Result<Self> {
        check_size(len, MAX_VECTOR_SIZE)?;
        Ok(Self {
            data: vec![T::zero(); len].into_boxed_slice(),
        })
    }
}

impl<T> Vector<T> {
    /// Create a vector by calling `f(i)` for each index.
    ///
    /// ```
    /// use dynla::Vector;
    /// let v = Vector::from_fn(4, |i| i * i).unwrap();
    /// assert_eq!(v.as_slice(), &[0, 1, 4, 9]);
    /// ```
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Result<Self> {
        check_size(len, MAX_VECTOR_SIZE)?;
        Ok(Self {
            data: (0..len).map(f).collect(),
        })
    }

    /// Take ownership of `data` without copying.
    ///
    /// ```
    /// use dynla::Vector;
    /// let v = Vector::from_vec(vec![1, 2, 3]).unwrap();
    /// assert_eq!(v[2], 3);
    /// assert!(Vector::<i32>::from_vec(Vec::new()).is_err());
    /// ```
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        check_size(data.len(), MAX_VECTOR_SIZE)?;
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Result vector of a length-preserving operation. Skips the size check,
    /// so a moved-from operand yields a moved-from result.
    pub(crate) fn from_boxed(data: Box<[T]>) -> Self {
        Self { data }
    }
}

impl<T: Clone> Vector<T> {
    /// Copy the elements of `buffer` into newly owned storage.
    ///
    /// ```
    /// use dynla::Vector;
    /// let buf = [1.5, 2.5, 3.5];
    /// let v = Vector::from_slice(&buf).unwrap();
    /// assert_eq!(v.len(), 3);
    /// assert_eq!(v[0], 1.5);
    /// ```
    pub fn from_slice(buffer: &[T]) -> Result<Self> {
        check_size(buffer.len(), MAX_VECTOR_SIZE)?;
        Ok(Self {
            data: buffer.into(),
        })
    }
}

impl<T: Default> Default for Vector<T> {
    /// A single default-valued element.
    fn default() -> Self {
        Self {
            data: Box::new([T::default()]),
        }
    }
}

// ── Size, move and swap ─────────────────────────────────────────────

impl<T> Vector<T> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` only for a moved-from vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Move the storage out, leaving `self` empty.
    ///
    /// The moved-from vector has length 0 and owns no storage. It can be
    /// dropped or overwritten; checked access on it always fails.
    ///
    /// ```
    /// use dynla::Vector;
    /// let mut a = Vector::from_slice(&[1, 2, 3]).unwrap();
    /// let b = a.take();
    /// assert_eq!(b.len(), 3);
    /// assert_eq!(a.len(), 0);
    /// assert!(a.at(0).is_err());
    /// ```
    pub fn take(&mut self) -> Self {
        Self {
            data: core::mem::take(&mut self.data),
        }
    }

    /// Exchange storage and length with `other` in constant time.
    ///
    /// ```
    /// use dynla::Vector;
    /// let mut a = Vector::from_slice(&[1, 2]).unwrap();
    /// let mut b = Vector::from_slice(&[7, 8, 9]).unwrap();
    /// a.swap(&mut b);
    /// assert_eq!(a.as_slice(), &[7, 8, 9]);
    /// assert_eq!(b.as_slice(), &[1, 2]);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.data, &mut other.data);
    }

    /// Consume the vector, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }
}

// ── Access ──────────────────────────────────────────────────────────

impl<T> Vector<T> {
    /// Checked access.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index >= len()`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.data
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Checked mutable access.
    ///
    /// ```
    /// use dynla::Vector;
    /// let mut v = Vector::<i32>::new(2).unwrap();
    /// *v.at_mut(1).unwrap() = 9;
    /// assert_eq!(v[1], 9);
    /// assert!(v.at_mut(2).is_err());
    /// ```
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.data
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Element at `index`, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable element at `index`, or `None` when out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Apply `f` to every element, producing a vector of the same length.
    ///
    /// ```
    /// use dynla::Vector;
    /// let v = Vector::from_slice(&[1, 2, 3]).unwrap();
    /// let halves = v.map(|&x| x as f64 / 2.0);
    /// assert_eq!(halves.as_slice(), &[0.5, 1.0, 1.5]);
    /// ```
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Vector<U> {
        Vector {
            data: self.data.iter().map(f).collect(),
        }
    }
}

// ── Clone ───────────────────────────────────────────────────────────

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }

    /// Copy-assignment: reuses the existing storage when the lengths agree,
    /// reallocates to `source.len()` otherwise.
    fn clone_from(&mut self, source: &Self) {
        if self.len() == source.len() {
            self.data.clone_from_slice(&source.data);
        } else {
            self.data = source.data.clone();
        }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T> TryFrom<Vec<T>> for Vector<T> {
    type Error = Error;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Self::from_vec(data)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.into_vec()
    }
}
