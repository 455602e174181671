//! Accessor wrapper around other containers
use crate::traits::{Access, Accessor, AccessorMut, ArrayAccess};

/// Exposes a container only through the [Accessor] protocol.
///
/// The wrapper does not copy the data. It is useful to hand a plain sequence to
/// code written against accessors, and to check that such code behaves the same
/// for both read strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorArray<A: ArrayAccess> {
    data: A,
}

/// Wrap `data` in an [AccessorArray].
///
/// ```
/// use array_at::{at, array::to_accessor_array};
///
/// let x = to_accessor_array(vec![1, 2, 3, 4, 5, 6]);
/// assert_eq!(at(&x, -6), Some(1));
/// assert_eq!(at(&x, -40), None);
/// ```
pub fn to_accessor_array<A: ArrayAccess>(data: A) -> AccessorArray<A> {
    AccessorArray::new(data)
}

impl<A: ArrayAccess> AccessorArray<A> {
    /// Create a new wrapper.
    pub fn new(data: A) -> Self {
        Self { data }
    }

    /// The wrapped container
    pub fn inner(&self) -> &A {
        &self.data
    }

    /// Consume the wrapper and return the wrapped container.
    pub fn into_inner(self) -> A {
        self.data
    }
}

impl<A: ArrayAccess> Accessor<A::Item> for AccessorArray<A>
where
    A::Item: Clone,
{
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> A::Item {
        match self.data.access() {
            Access::Direct(data) => data[index].clone(),
            Access::Accessor(accessor) => accessor.get(index),
        }
    }
}

impl<A: ArrayAccess> AccessorMut<A::Item> for AccessorArray<A>
where
    A: AsMut<[A::Item]>,
    A::Item: Clone,
{
    fn set(&mut self, index: usize, value: A::Item) {
        self.data.as_mut()[index] = value;
    }
}

impl<A: ArrayAccess> ArrayAccess for AccessorArray<A>
where
    A::Item: Clone,
{
    type Item = A::Item;

    fn access(&self) -> Access<'_, A::Item> {
        Access::Accessor(self)
    }
}
