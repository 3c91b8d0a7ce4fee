//! DynamicArray - An owning, contiguous, resizable sequence.
//!
//! # Design
//!
//! - Storage is a boxed slice (`Box<[T]>`): its length is both the number of
//!   elements and the size of the allocation, so no spare capacity is ever kept
//! - `push` reallocates to exactly one more element on every call, making a
//!   fill of `n` elements O(n²)
//! - `reserve` grows the array *and* its size; new slots hold `T::default()`
//! - `Clone` is a deep copy
//!
//! # Examples
//!
//! ```
//! use vecbits::DynamicArray;
//!
//! let mut arr = DynamicArray::new();
//! arr.push(5u8);
//! arr.push(10);
//! assert_eq!(arr.len(), 2);
//! assert_eq!(arr[1], 10);
//! assert_eq!(arr.capacity(), arr.len());
//! ```

use crate::error::{Result, VecbitsError};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Owning, contiguous, resizable sequence of `T` with no spare capacity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DynamicArray<T> {
    /// Element storage; `data.len()` is the size
    data: Box<[T]>,
}

impl<T> DynamicArray<T> {
    /// Create an empty array. No storage is allocated.
    pub fn new() -> Self {
        Self {
            data: Vec::new().into_boxed_slice(),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the current allocation holds.
    ///
    /// Always equal to [`len`](Self::len).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to element `i`.
    ///
    /// The caller must guarantee `i < len()`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    #[inline]
    pub fn get(&self, i: usize) -> &T {
        debug_assert!(i < self.len(), "index {} out of bounds (length: {})", i, self.len());
        &self.data[i]
    }

    /// Get a mutable reference to element `i`.
    ///
    /// The caller must guarantee `i < len()`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len(), "index {} out of bounds (length: {})", i, self.len());
        &mut self.data[i]
    }

    /// Checked variant of [`get`](Self::get).
    pub fn try_get(&self, i: usize) -> Result<&T> {
        self.data.get(i).ok_or(VecbitsError::IndexOutOfBounds {
            index: i,
            length: self.len(),
        })
    }

    /// Append `value`, reallocating to exactly `len() + 1` elements.
    ///
    /// Existing elements are moved into the new buffer, so each call is O(len).
    pub fn push(&mut self, value: T) {
        let mut grown = std::mem::take(&mut self.data).into_vec();
        grown.reserve_exact(1);
        grown.push(value);
        self.data = grown.into_boxed_slice();
    }

    /// Elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the array and return its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Estimate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.capacity() * std::mem::size_of::<T>()
    }
}

impl<T: Default> DynamicArray<T> {
    /// Create an array of `n` elements.
    ///
    /// Every slot holds `T::default()`, but callers must treat the contents as
    /// unspecified and write each slot before reading it.
    pub fn with_len(n: usize) -> Self {
        let mut data = Vec::with_capacity(n);
        data.resize_with(n, T::default);
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// Grow the array to `new_size` elements.
    ///
    /// If `new_size > len()`, the buffer is reallocated to exactly `new_size`
    /// elements, existing elements are kept in order, the new slots hold
    /// `T::default()`, and the size becomes `new_size`. Otherwise this is a
    /// no-op.
    pub fn reserve(&mut self, new_size: usize) {
        if new_size <= self.len() {
            return;
        }
        let mut grown = std::mem::take(&mut self.data).into_vec();
        grown.reserve_exact(new_size - grown.len());
        grown.resize_with(new_size, T::default);
        self.data = grown.into_boxed_slice();
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Create an array holding a copy of `values`.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.into(),
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            data: values.into_boxed_slice(),
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<T>>().into()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        self.get(i)
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        self.get_mut(i)
    }
}
