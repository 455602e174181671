//! Scalar, data type and error definitions
use std::mem::size_of;

pub use cauchy::{c32, c64};

/// Real scalar types that can form the components of a complex value.
///
/// For now we simply derive from the `cauchy::Scalar` type.
pub trait RealScalar: num::Float + cauchy::Scalar<Real = Self> {}

impl<T: num::Float + cauchy::Scalar<Real = T>> RealScalar for T {}

/// Generic error type
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// An interleaved complex buffer needs one real and one imaginary component per value.
    #[error("Interleaved complex data must have an even number of components, got {0}")]
    InterleavedLength(usize),
    /// Real and imaginary parts were given with different lengths.
    #[error("Real part has {real} components but imaginary part has {imag}")]
    LengthMismatch {
        /// Number of real components
        real: usize,
        /// Number of imaginary components
        imag: usize,
    },
}

/// Result Type
pub type Result<T> = std::result::Result<T, Error>;

/// Specification of data types
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum DType {
    /// 32 bit float
    Float32 = 0,
    /// 64 bit float
    Float64 = 1,
    /// 8 bit signed integer
    Int8 = 2,
    /// 16 bit signed integer
    Int16 = 3,
    /// 32 bit signed integer
    Int32 = 4,
    /// 64 bit signed integer
    Int64 = 5,
    /// 8 bit unsigned integer
    Unsigned8 = 6,
    /// 16 bit unsigned integer
    Unsigned16 = 7,
    /// 32 bit unsigned integer
    Unsigned32 = 8,
    /// 64 bit unsigned integer
    Unsigned64 = 9,
    /// Machine dependent signed integer
    Isize = 10,
    /// Machine dependent indexing type
    Usize = 11,
    /// Complex number with 32 bit float components
    Complex64 = 12,
    /// Complex number with 64 bit float components
    Complex128 = 13,
}

impl DType {
    /// Return true if values of this type have a real and an imaginary component.
    pub fn is_complex(&self) -> bool {
        matches!(self, DType::Complex64 | DType::Complex128)
    }

    /// Return true for floating point types, including complex ones.
    pub fn is_floating_point(&self) -> bool {
        matches!(
            self,
            DType::Float32 | DType::Float64 | DType::Complex64 | DType::Complex128
        )
    }
}

/// A type with a fixed width and a [DType] tag.
pub trait DataType: Copy + 'static {
    /// The tag of this type
    const D: DType;
    /// The size of one value in bytes
    const SIZE: usize = size_of::<Self>();
}

macro_rules! impl_data_type {
    ($($dtype:ident => $variant:ident),+) => {
        $(
            impl DataType for $dtype {
                const D: DType = DType::$variant;
            }
        )+
    };
}

impl_data_type!(
    f32 => Float32,
    f64 => Float64,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Unsigned8,
    u16 => Unsigned16,
    u32 => Unsigned32,
    u64 => Unsigned64,
    isize => Isize,
    usize => Usize,
    c32 => Complex64,
    c64 => Complex128
);

/// Get the tag of a data type
pub fn get_dtype<T: DataType>() -> DType {
    T::D
}

/// Get the size in bytes of a data type
pub fn get_size<T: DataType>() -> usize {
    T::SIZE
}

/// Get the size in bytes of one value of the given type
pub fn get_itemsize(dtype: DType) -> usize {
    match dtype {
        DType::Float32 => get_size::<f32>(),
        DType::Float64 => get_size::<f64>(),
        DType::Int8 => get_size::<i8>(),
        DType::Int16 => get_size::<i16>(),
        DType::Int32 => get_size::<i32>(),
        DType::Int64 => get_size::<i64>(),
        DType::Unsigned8 => get_size::<u8>(),
        DType::Unsigned16 => get_size::<u16>(),
        DType::Unsigned32 => get_size::<u32>(),
        DType::Unsigned64 => get_size::<u64>(),
        DType::Isize => get_size::<isize>(),
        DType::Usize => get_size::<usize>(),
        DType::Complex64 => get_size::<c32>(),
        DType::Complex128 => get_size::<c64>(),
    }
}
