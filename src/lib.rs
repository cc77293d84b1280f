//! # Affine3x4 - 3x4 matrix storage
//!
//! Storage for 3-row by 4-column floating point matrices, the affine
//! part of a 4x4 transform without its homogeneous row. The raw
//! components stay crate-private; callers use either the read-only
//! [`ConstMatrix3x4`] or the mutable [`Matrix3x4`].
//!
//! ```rust
//! use affine3x4::{AnyMatrix3x4, Matrix3x4f, SerializationConfig};
//!
//! # fn main() -> Result<(), affine3x4::MatrixError> {
//! let mut m = Matrix3x4f::identity();
//! m.set(0, 3, 10.0)?; // x translation
//!
//! let config = SerializationConfig::default();
//! let bytes = affine3x4::encode(&m, &config)?;
//! let back: Matrix3x4f = affine3x4::decode(&bytes, &config)?;
//! assert_eq!(back.get(0, 3)?, 10.0);
//! # Ok(())
//! # }
//! ```

pub mod numerics;

pub use numerics::error::MatrixError;
pub use numerics::serialization::{
    decode, encode, ByteOrder, IntegerEncoding, SerializationConfig, SERIAL_VERSION_UID,
};
pub use numerics::types::matrix::{
    AnyMatrix3x4, ConstMatrix3x4, ConstMatrix3x4d, ConstMatrix3x4f, Matrix3x4, Matrix3x4d,
    Matrix3x4f,
};
pub use numerics::types::traits::FloatingPoint;
pub use numerics::types::vector::Vector3;

/// Version information for the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
