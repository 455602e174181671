//! Element access through explicit get and set operations

/// Read access to the elements of a container through an explicit getter.
///
/// Containers implement this when their storage layout does not allow handing
/// out a reference to an element, e.g. because each element is assembled from
/// several stored components.
pub trait Accessor<T> {
    /// The number of elements
    fn len(&self) -> usize;

    /// Return true if there are no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the element at `index`.
    ///
    /// `index` must be smaller than [Accessor::len]. Implementations may panic
    /// otherwise.
    fn get(&self, index: usize) -> T;
}

/// Write access to the elements of a container through an explicit setter.
pub trait AccessorMut<T>: Accessor<T> {
    /// Set the element at `index`.
    ///
    /// `index` must be smaller than [Accessor::len]. Implementations may panic
    /// otherwise.
    fn set(&mut self, index: usize, value: T);
}
