//! FixedArray: a fixed-size array with bounds-checked element access.
//!
//! `FixedArray<T, N>` owns exactly `N` elements of `T`, stored inline and
//! contiguously. Every element is initialized at construction, the length never
//! changes, and every indexed access checks the index against `N`:
//!
//! - [`get`](FixedArray::get), [`get_mut`](FixedArray::get_mut) and
//!   [`set`](FixedArray::set) return [`OutOfRange`] for `index >= N`
//! - `arr[i]` performs the same check and panics with the same message
//! - [`as_slice`](FixedArray::as_slice) and [`as_ptr`](FixedArray::as_ptr)
//!   expose the backing storage for bulk copies and FFI
//!
//! # Example
//!
//! ```
//! use dsa_fixed_array::{FixedArray, OutOfRange};
//!
//! let mut arr: FixedArray<i32, 5> = FixedArray::new();
//! for i in 0..arr.size() {
//!     arr.set(i, i as i32 * 10).unwrap();
//! }
//! assert_eq!(arr.as_slice(), &[0, 10, 20, 30, 40]);
//!
//! let err = arr.set(5, 100).unwrap_err();
//! assert_eq!(err, OutOfRange { index: 5, len: 5 });
//! assert_eq!(arr.as_slice(), &[0, 10, 20, 30, 40]);
//! ```
//!
//! # Memory Layout
//!
//! The container is `#[repr(transparent)]` over `[T; N]`: same size, same
//! alignment, no header.
//!
//! # Gotchas
//!
//! - **Raw pointers are unchecked**: [`as_ptr`](FixedArray::as_ptr) and
//!   [`as_mut_ptr`](FixedArray::as_mut_ptr) carry no length and no lifetime.
//!   They dangle once the array is moved or dropped, and reading past `N`
//!   elements is undefined behavior. Prefer the slice accessors.
//! - **No growth**: there is no push/pop. Use `Vec` if the length must change.

#![no_std]

mod error;

use core::{
    fmt,
    ops::{Index, IndexMut},
};

pub use error::OutOfRange;

/// A fixed-size, bounds-checked array of `N` elements of type `T`.
///
/// See [crate-level docs](crate) for examples.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct FixedArray<T, const N: usize> {
    data: [T; N],
}

static_assertions::assert_eq_size!(FixedArray<u8, 3>, [u8; 3]);
static_assertions::assert_eq_size!(FixedArray<u64, 16>, [u64; 16]);
static_assertions::assert_eq_size!(FixedArray<u32, 0>, [u32; 0]);
static_assertions::assert_eq_align!(FixedArray<u64, 2>, u64);

impl<T: Default, const N: usize> FixedArray<T, N> {
    /// Creates an array with every element set to `T::default()`.
    ///
    /// ```
    /// use dsa_fixed_array::FixedArray;
    ///
    /// let arr: FixedArray<u32, 3> = FixedArray::new();
    /// assert_eq!(arr.as_slice(), &[0, 0, 0]);
    /// ```
    pub fn new() -> Self {
        Self {
            data: core::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Number of elements, fixed at compile time.
    pub const SIZE: usize = N;

    /// Returns the number of elements, which is always `N`.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= N`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        self.data.get(index).ok_or_else(|| out_of_range(index, N))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= N`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.data.get_mut(index).ok_or_else(|| out_of_range(index, N))
    }

    /// Replaces the element at `index` with `value`.
    ///
    /// On failure nothing is written and `value` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= N`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Borrows the backing storage as a slice of length `N`.
    #[inline(always)]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns a raw pointer to the first element.
    ///
    /// The pointer is valid for reads of `N` elements for as long as the array
    /// is neither moved nor dropped. No bounds are checked through it.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns a raw mutable pointer to the first element.
    ///
    /// Same validity rules as [`as_ptr`](Self::as_ptr), and the caller must not
    /// create overlapping references while writing through it.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Consumes the container and returns the underlying array.
    #[inline(always)]
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

#[cold]
fn out_of_range(index: usize, len: usize) -> OutOfRange {
    tracing::debug!(index, len, "Rejected out-of-range access");
    OutOfRange { index, len }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.data, f)
    }
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
