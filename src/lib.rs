//! Array element access with negative indices
//!
//! The [`at()`](fn@at) function returns the element of a container at a given index, where
//! negative indices count from the end of the container. Out-of-bounds indices
//! give `None` instead of panicking.
//!
//! Containers expose their elements either directly as a slice or through an
//! [Accessor](traits::Accessor), see [ArrayAccess](traits::ArrayAccess). Both
//! read strategies are supported by [`at()`](fn@at):
//!
//! ```
//! use array_at::at;
//! use array_at::array::{to_accessor_array, Buffer, Complex128Array};
//! use array_at::types::c64;
//!
//! let x = vec![1, 2, 3, 4, 5, 6];
//! assert_eq!(at(&x, -1), Some(6));
//!
//! let y = Buffer::<i32>::from([1, 2, 3, 4, 5, 6]);
//! assert_eq!(at(&y, -6), Some(1));
//!
//! let z = Complex128Array::from_interleaved(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(at(&z, 1), Some(c64::new(3.0, 4.0)));
//!
//! let w = to_accessor_array(&x);
//! assert_eq!(at(&w, 40), None);
//! ```
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod array;
pub mod at;
pub mod traits;
pub mod types;

pub use at::{at, resolve_index, AtExt};
