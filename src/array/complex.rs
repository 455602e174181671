//! Complex buffer with interleaved storage
use itertools::Itertools;
use num::complex::Complex;

use crate::traits::{Access, Accessor, AccessorMut, ArrayAccess};
use crate::types::{DType, DataType, Error, RealScalar, Result};

/// A buffer of complex numbers.
///
/// The values are stored interleaved as `[re_0, im_0, re_1, im_1, ...]`, which is
/// the layout expected by most numerical libraries. Because a single element
/// spans two stored components, elements are read and written through the
/// [Accessor] and [AccessorMut] traits rather than by reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexBuffer<T: RealScalar> {
    data: Vec<T>,
}

/// Buffer of complex numbers with 64 bit float components.
pub type Complex128Array = ComplexBuffer<f64>;

/// Buffer of complex numbers with 32 bit float components.
pub type Complex64Array = ComplexBuffer<f32>;

impl<T: RealScalar> ComplexBuffer<T> {
    /// Create a buffer from interleaved real and imaginary components.
    ///
    /// Fails if `data` has an odd number of components.
    pub fn from_interleaved(data: Vec<T>) -> Result<Self> {
        if data.len() % 2 != 0 {
            log::debug!(
                "Rejecting interleaved complex data with {} components",
                data.len()
            );
            return Err(Error::InterleavedLength(data.len()));
        }
        Ok(Self { data })
    }

    /// Create a buffer from separate real and imaginary parts.
    ///
    /// Fails if the parts have different lengths.
    pub fn from_parts(real: &[T], imag: &[T]) -> Result<Self> {
        if real.len() != imag.len() {
            log::debug!(
                "Rejecting complex parts of lengths {} and {}",
                real.len(),
                imag.len()
            );
            return Err(Error::LengthMismatch {
                real: real.len(),
                imag: imag.len(),
            });
        }
        Ok(Self {
            data: itertools::interleave(real.iter().copied(), imag.iter().copied()).collect(),
        })
    }

    /// Create a buffer of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![T::zero(); 2 * len],
        }
    }

    /// The number of complex values
    pub fn len(&self) -> usize {
        self.data.len() / 2
    }

    /// Return true if the buffer has no values
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The data type of the elements
    pub fn dtype(&self) -> DType
    where
        Complex<T>: DataType,
    {
        <Complex<T> as DataType>::D
    }

    /// The interleaved components
    pub fn as_interleaved(&self) -> &[T] {
        &self.data
    }

    /// Consume the buffer and return the interleaved components.
    pub fn into_interleaved(self) -> Vec<T> {
        self.data
    }

    /// Iterate through the complex values
    pub fn iter(&self) -> impl Iterator<Item = Complex<T>> + '_ {
        self.data
            .iter()
            .tuples()
            .map(|(re, im)| Complex::new(*re, *im))
    }
}

impl<T: RealScalar> From<&[Complex<T>]> for ComplexBuffer<T> {
    fn from(values: &[Complex<T>]) -> Self {
        Self {
            data: values.iter().flat_map(|z| [z.re, z.im]).collect(),
        }
    }
}

impl<T: RealScalar> From<Vec<Complex<T>>> for ComplexBuffer<T> {
    fn from(values: Vec<Complex<T>>) -> Self {
        Self::from(values.as_slice())
    }
}

impl<T: RealScalar> FromIterator<Complex<T>> for ComplexBuffer<T> {
    fn from_iter<I: IntoIterator<Item = Complex<T>>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().flat_map(|z| [z.re, z.im]).collect(),
        }
    }
}

impl<T: RealScalar> Accessor<Complex<T>> for ComplexBuffer<T> {
    fn len(&self) -> usize {
        self.data.len() / 2
    }

    fn get(&self, index: usize) -> Complex<T> {
        Complex::new(self.data[2 * index], self.data[2 * index + 1])
    }
}

impl<T: RealScalar> AccessorMut<Complex<T>> for ComplexBuffer<T> {
    fn set(&mut self, index: usize, value: Complex<T>) {
        self.data[2 * index] = value.re;
        self.data[2 * index + 1] = value.im;
    }
}

impl<T: RealScalar> ArrayAccess for ComplexBuffer<T> {
    type Item = Complex<T>;

    fn access(&self) -> Access<'_, Complex<T>> {
        Access::Accessor(self)
    }
}
