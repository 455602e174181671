//! Lazily transformed view of a container
use std::marker::PhantomData;

use crate::traits::{Access, Accessor, ArrayAccess};

/// A view that applies a function to each element of a container when it is read.
///
/// No transformed values are stored, so the view can only be read through the
/// [Accessor] protocol.
pub struct MappedArray<A: ArrayAccess, F, U> {
    data: A,
    f: F,
    _marker: PhantomData<fn() -> U>,
}

impl<A, F, U> MappedArray<A, F, U>
where
    A: ArrayAccess,
    F: Fn(A::Item) -> U,
{
    /// Create a view of `data` that maps every element through `f`.
    ///
    /// ```
    /// use array_at::{at, array::MappedArray};
    ///
    /// let x = MappedArray::new(vec![1, 2, 3], |v: i32| v * 10);
    /// assert_eq!(at(&x, -1), Some(30));
    /// ```
    pub fn new(data: A, f: F) -> Self {
        Self {
            data,
            f,
            _marker: PhantomData,
        }
    }

    /// The underlying container
    pub fn inner(&self) -> &A {
        &self.data
    }
}

impl<A: ArrayAccess + std::fmt::Debug, F, U> std::fmt::Debug for MappedArray<A, F, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedArray")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<A, F, U> Accessor<U> for MappedArray<A, F, U>
where
    A: ArrayAccess,
    A::Item: Clone,
    F: Fn(A::Item) -> U,
{
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> U {
        let value = match self.data.access() {
            Access::Direct(data) => data[index].clone(),
            Access::Accessor(accessor) => accessor.get(index),
        };
        (self.f)(value)
    }
}

impl<A, F, U> ArrayAccess for MappedArray<A, F, U>
where
    A: ArrayAccess,
    A::Item: Clone,
    F: Fn(A::Item) -> U,
{
    type Item = U;

    fn access(&self) -> Access<'_, U> {
        Access::Accessor(self)
    }
}
