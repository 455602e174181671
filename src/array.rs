//! Containers that expose their elements through [ArrayAccess](crate::traits::ArrayAccess)
//!
//! Plain Rust sequences (slices, arrays, vectors) are read directly. Containers
//! whose storage cannot hand out element references, such as the interleaved
//! [ComplexBuffer], are read through an [Accessor](crate::traits::Accessor).
mod accessor_array;
mod buffer;
mod complex;
mod mapped;
mod sequence;

pub use accessor_array::{to_accessor_array, AccessorArray};
pub use buffer::Buffer;
pub use complex::{Complex128Array, Complex64Array, ComplexBuffer};
pub use mapped::MappedArray;
