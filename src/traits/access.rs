//! Capability tags used to pick how elements are read
use super::accessor::Accessor;

/// The way a container exposes its elements.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum AccessKind {
    /// Elements are stored contiguously and can be read by position.
    Direct,
    /// Elements can only be read through an [Accessor].
    Accessor,
}

/// A read-only view of a container, tagged with the way its elements are read.
pub enum Access<'a, T> {
    /// Contiguous storage
    Direct(&'a [T]),
    /// Storage behind an element getter
    Accessor(&'a dyn Accessor<T>),
}

impl<T> Access<'_, T> {
    /// The number of elements
    pub fn len(&self) -> usize {
        match *self {
            Access::Direct(data) => <[T]>::len(data),
            Access::Accessor(accessor) => Accessor::len(accessor),
        }
    }

    /// Return true if there are no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The capability tag of this view
    pub fn kind(&self) -> AccessKind {
        match self {
            Access::Direct(_) => AccessKind::Direct,
            Access::Accessor(_) => AccessKind::Accessor,
        }
    }
}

impl<T> Clone for Access<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Access<'_, T> {}

impl<T> std::fmt::Debug for Access<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Access")
            .field("kind", &self.kind())
            .field("len", &self.len())
            .finish()
    }
}

/// A finite, ordered container whose elements can be read by position.
///
/// Every implementation commits to one read strategy by returning the matching
/// [Access] variant. The strategy is a property of the type, so callers never
/// have to probe for it.
pub trait ArrayAccess {
    /// The element type
    type Item;

    /// Get a view of the elements, tagged with how they are read.
    fn access(&self) -> Access<'_, Self::Item>;

    /// The number of elements
    fn len(&self) -> usize {
        self.access().len()
    }

    /// Return true if there are no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The capability tag of this container
    fn access_kind(&self) -> AccessKind {
        self.access().kind()
    }
}

/// Return true if the elements of `x` are read through an [Accessor].
pub fn has_accessors<A: ArrayAccess + ?Sized>(x: &A) -> bool {
    x.access_kind() == AccessKind::Accessor
}

impl<A: ArrayAccess + ?Sized> ArrayAccess for &A {
    type Item = A::Item;

    fn access(&self) -> Access<'_, Self::Item> {
        (**self).access()
    }
}

impl<A: ArrayAccess + ?Sized> ArrayAccess for &mut A {
    type Item = A::Item;

    fn access(&self) -> Access<'_, Self::Item> {
        (**self).access()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::array::{to_accessor_array, Buffer, Complex128Array};
    use std::collections::VecDeque;

    #[test]
    fn test_direct_view_len() {
        let v = vec![1, 2, 3];
        let view = v.access();

        assert_eq!(view.len(), 3);
        assert!(!view.is_empty());
        assert_eq!(view.kind(), AccessKind::Direct);
        assert_eq!(Access::Direct(&v[..0]).len(), 0);
    }

    #[test]
    fn test_accessor_view_len() {
        let z = Complex128Array::zeros(4);
        let view = z.access();

        assert_eq!(view.len(), 4);
        assert_eq!(view.kind(), AccessKind::Accessor);
        assert!(Complex128Array::zeros(0).access().is_empty());
    }

    #[test]
    fn test_array_access_len_direct() {
        let v = vec![1, 2, 3];
        let a = [1.0, 2.0];
        let b = Buffer::<u16>::zeros(5);

        assert_eq!(ArrayAccess::len(&v), 3);
        assert_eq!(ArrayAccess::len(&a), 2);
        assert_eq!(ArrayAccess::len(&a[..]), 2);
        assert_eq!(ArrayAccess::len(&b), 5);
        assert_eq!(ArrayAccess::len(&&v), 3);
        assert!(!ArrayAccess::is_empty(&v));
        assert!(ArrayAccess::is_empty(&Vec::<i32>::new()));
        assert!(!has_accessors(&v));
    }

    #[test]
    fn test_array_access_len_wrapped() {
        let v = vec![1, 2, 3, 4, 5, 6];
        let x = to_accessor_array(&v);
        let d = VecDeque::from(vec![1, 2]);

        assert_eq!(ArrayAccess::len(&x), 6);
        assert_eq!(Accessor::len(&x), 6);
        assert_eq!(ArrayAccess::len(&d), 2);
        assert!(has_accessors(&x));
        assert_eq!(format!("{:?}", x.access()), "Access { kind: Accessor, len: 6 }");
    }
}
