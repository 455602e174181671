//! Fixed-width numeric buffer
use num::Zero;

use crate::traits::{Access, ArrayAccess};
use crate::types::{DType, DataType};

/// A contiguous buffer of fixed-width numbers.
///
/// The element type is known at compile time and additionally available as a
/// [DType] tag at runtime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Buffer<T: DataType> {
    data: Box<[T]>,
}

impl<T: DataType> Buffer<T> {
    /// Create a buffer from a vector of values.
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// Create a buffer of `len` zeros.
    pub fn zeros(len: usize) -> Self
    where
        T: Zero,
    {
        Self::new(vec![T::zero(); len])
    }

    /// The data type of the elements
    pub fn dtype(&self) -> DType {
        T::D
    }

    /// The number of elements
    pub fn len(&self) -> usize {
        <[T]>::len(&self.data)
    }

    /// Return true if the buffer has no elements
    pub fn is_empty(&self) -> bool {
        <[T]>::is_empty(&self.data)
    }

    /// The size of the buffer in bytes
    pub fn nbytes(&self) -> usize {
        self.len() * T::SIZE
    }

    /// The elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements as a mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate through the elements
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: DataType> From<Vec<T>> for Buffer<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: DataType> From<&[T]> for Buffer<T> {
    fn from(data: &[T]) -> Self {
        Self::new(data.to_vec())
    }
}

impl<T: DataType, const N: usize> From<[T; N]> for Buffer<T> {
    fn from(data: [T; N]) -> Self {
        Self::new(data.to_vec())
    }
}

impl<T: DataType> FromIterator<T> for Buffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: DataType> AsRef<[T]> for Buffer<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: DataType> AsMut<[T]> for Buffer<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: DataType> ArrayAccess for Buffer<T> {
    type Item = T;

    fn access(&self) -> Access<'_, T> {
        Access::Direct(&self.data)
    }
}
