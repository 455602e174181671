//! Element access for standard library sequences
use std::collections::VecDeque;

use crate::traits::{Access, Accessor, ArrayAccess};

impl<T> ArrayAccess for [T] {
    type Item = T;

    fn access(&self) -> Access<'_, T> {
        Access::Direct(self)
    }
}

impl<T, const N: usize> ArrayAccess for [T; N] {
    type Item = T;

    fn access(&self) -> Access<'_, T> {
        Access::Direct(self.as_slice())
    }
}

impl<T> ArrayAccess for Vec<T> {
    type Item = T;

    fn access(&self) -> Access<'_, T> {
        Access::Direct(self.as_slice())
    }
}

impl<T> ArrayAccess for Box<[T]> {
    type Item = T;

    fn access(&self) -> Access<'_, T> {
        Access::Direct(self)
    }
}

// A ring buffer is not contiguous in general, so it is read element by element.
impl<T: Clone> Accessor<T> for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> ArrayAccess for VecDeque<T> {
    type Item = T;

    fn access(&self) -> Access<'_, T> {
        Access::Accessor(self)
    }
}
