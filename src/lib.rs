//! dsa-handbook - Data structures, one small crate at a time
//!
//! # Overview
//!
//! This crate re-exports the handbook's data structures behind a single
//! dependency. Each structure lives in its own support crate so it can be read
//! (and depended on) in isolation.
//!
//! | Type | Crate | Summary |
//! |------|-------|---------|
//! | [`FixedArray`] | `dsa-fixed-array` | `N` elements inline, every index checked |
//!
//! # Quick Start
//!
//! ```
//! use dsa_handbook::{FixedArray, OutOfRange};
//!
//! // Five zeroed integers, stored inline
//! let mut arr: FixedArray<i32, 5> = FixedArray::new();
//! assert_eq!(arr.size(), 5);
//!
//! // Checked writes and reads
//! for i in 0..arr.size() {
//!     arr.set(i, i as i32 * 10)?;
//! }
//! assert_eq!(*arr.get(4)?, 40);
//!
//! // Index 5 is past the end: nothing is written
//! match arr.set(5, 100) {
//!     Err(OutOfRange { index, len }) => assert_eq!((index, len), (5, 5)),
//!     Ok(()) => unreachable!(),
//! }
//! # Ok::<(), OutOfRange>(())
//! ```
//!
//! # Raw Buffers
//!
//! [`FixedArray::as_slice`] and [`FixedArray::as_mut_slice`] lend out the whole
//! backing store. [`FixedArray::as_ptr`] exists for FFI and is unchecked: the
//! pointer dangles once the array is moved or dropped.

pub use dsa_fixed_array::{FixedArray, OutOfRange};
