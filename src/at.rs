//! Element lookup with negative indices
use crate::traits::{Access, Accessor, ArrayAccess};

/// Turn a possibly negative index into a position in a container of length `len`.
///
/// Non-negative indices count from the start, negative indices count from the
/// end so that `-1` is the last element. Returns `None` if the index does not
/// refer to an element. Every `(len, index)` pair is handled without overflow.
pub fn resolve_index(len: usize, index: isize) -> Option<usize> {
    let position = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index.unsigned_abs()
    };
    if position < len {
        Some(position)
    } else {
        None
    }
}

/// Return the element of `x` at `index`, or `None` if `index` is out of bounds.
///
/// Negative indices count from the end: `-1` is the last element and `-len` the
/// first. Elements of containers with direct access are cloned, containers
/// with an accessor are read through [Accessor::get](crate::traits::Accessor::get).
///
/// ```
/// use array_at::at;
/// use array_at::array::ComplexBuffer;
/// use array_at::types::c64;
///
/// let x = vec![1, 2, 3, 4, 5, 6];
/// assert_eq!(at(&x, 1), Some(2));
/// assert_eq!(at(&x, -1), Some(6));
/// assert_eq!(at(&x, 10), None);
///
/// let z = ComplexBuffer::from_interleaved(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(at(&z, -1), Some(c64::new(3.0, 4.0)));
/// ```
pub fn at<A>(x: &A, index: isize) -> Option<A::Item>
where
    A: ArrayAccess + ?Sized,
    A::Item: Clone,
{
    match x.access() {
        Access::Direct(data) => resolve_index(<[A::Item]>::len(data), index).map(|i| data[i].clone()),
        Access::Accessor(accessor) => resolve_index(Accessor::len(accessor), index).map(|i| accessor.get(i)),
    }
}

/// Method form of [`at()`](fn@at) for every [ArrayAccess] type.
pub trait AtExt: ArrayAccess {
    /// Return the element at `index`, counting from the end if `index` is negative.
    fn at(&self, index: isize) -> Option<Self::Item>
    where
        Self::Item: Clone,
    {
        at(self, index)
    }
}

impl<A: ArrayAccess + ?Sized> AtExt for A {}
