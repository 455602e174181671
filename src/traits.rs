//! Trait definitions
mod access;
mod accessor;

pub use access::{has_accessors, Access, AccessKind, ArrayAccess};
pub use accessor::{Accessor, AccessorMut};
