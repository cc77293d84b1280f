// src/numerics/serialization.rs
// Binary encoding of 3x4 matrices through bincode's serde bridge.
//
// Layout: a u64 serial version tag, then the twelve components in
// column-major order.

use bincode::config::{self, Config};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::matrix::{AnyMatrix3x4, Matrix3x4, ProtectedMatrix3x4};
use crate::numerics::types::traits::FloatingPoint;

/// Tag written ahead of every encoded matrix.
pub const SERIAL_VERSION_UID: u64 = 8104346712419693669;

/// How integers (the version tag) are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerEncoding {
    Varint,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

/// Configuration for matrix encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializationConfig {
    pub integer_encoding: IntegerEncoding,
    pub byte_order: ByteOrder,
    /// Reject input with bytes left over after the matrix
    pub reject_trailing_bytes: bool,
}

impl Default for SerializationConfig {
    fn default() -> Self {
        Self::compact()
    }
}

impl SerializationConfig {
    /// Variable-width integers, little endian. Same as bincode's standard config.
    pub fn compact() -> Self {
        Self {
            integer_encoding: IntegerEncoding::Varint,
            byte_order: ByteOrder::Little,
            reject_trailing_bytes: true,
        }
    }

    /// Fixed-width integers, so every f32 matrix encodes to 8 + 12 * 4 bytes.
    pub fn fixed_width() -> Self {
        Self {
            integer_encoding: IntegerEncoding::Fixed,
            ..Self::compact()
        }
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn allow_trailing_bytes(mut self) -> Self {
        self.reject_trailing_bytes = false;
        self
    }

    fn encode_value<S: Serialize>(&self, value: &S) -> Result<Vec<u8>> {
        let base = config::standard();
        match (self.integer_encoding, self.byte_order) {
            (IntegerEncoding::Varint, ByteOrder::Little) => encode_with(value, base),
            (IntegerEncoding::Fixed, ByteOrder::Little) => {
                encode_with(value, base.with_fixed_int_encoding())
            }
            (IntegerEncoding::Varint, ByteOrder::Big) => encode_with(value, base.with_big_endian()),
            (IntegerEncoding::Fixed, ByteOrder::Big) => {
                encode_with(value, base.with_big_endian().with_fixed_int_encoding())
            }
        }
    }

    fn decode_value<D: DeserializeOwned>(&self, bytes: &[u8]) -> Result<(D, usize)> {
        let base = config::standard();
        match (self.integer_encoding, self.byte_order) {
            (IntegerEncoding::Varint, ByteOrder::Little) => decode_with(bytes, base),
            (IntegerEncoding::Fixed, ByteOrder::Little) => {
                decode_with(bytes, base.with_fixed_int_encoding())
            }
            (IntegerEncoding::Varint, ByteOrder::Big) => decode_with(bytes, base.with_big_endian()),
            (IntegerEncoding::Fixed, ByteOrder::Big) => {
                decode_with(bytes, base.with_big_endian().with_fixed_int_encoding())
            }
        }
    }
}

fn encode_with<S: Serialize, C: Config>(value: &S, config: C) -> Result<Vec<u8>> {
    bincode::serde::encode_to_vec(value, config).map_err(|e| MatrixError::Encode(e.to_string()))
}

fn decode_with<D: DeserializeOwned, C: Config>(bytes: &[u8], config: C) -> Result<(D, usize)> {
    bincode::serde::decode_from_slice(bytes, config).map_err(|e| MatrixError::Decode(e.to_string()))
}

/// Encode any 3x4 matrix face.
pub fn encode<T, M>(matrix: &M, config: &SerializationConfig) -> Result<Vec<u8>>
where
    T: FloatingPoint + Serialize,
    M: AnyMatrix3x4<T>,
{
    let storage = ProtectedMatrix3x4::from_column_major(matrix.to_column_major());
    let bytes = config.encode_value(&(SERIAL_VERSION_UID, storage))?;
    debug!(len = bytes.len(), ?config, "encoded 3x4 matrix");
    Ok(bytes)
}

/// Decode a matrix written by [`encode`] with the same configuration.
///
/// The version tag is checked before the components are read.
pub fn decode<T>(bytes: &[u8], config: &SerializationConfig) -> Result<Matrix3x4<T>>
where
    T: FloatingPoint + DeserializeOwned,
{
    let (found, tag_len): (u64, usize) = config.decode_value(bytes)?;
    if found != SERIAL_VERSION_UID {
        warn!(found, expected = SERIAL_VERSION_UID, "rejecting matrix with unknown serial version");
        return Err(MatrixError::VersionMismatch {
            expected: SERIAL_VERSION_UID,
            found,
        });
    }

    let payload = &bytes[tag_len..];
    let (storage, read): (ProtectedMatrix3x4<T>, usize) = config.decode_value(payload)?;
    let remaining = payload.len() - read;
    if remaining > 0 {
        if config.reject_trailing_bytes {
            return Err(MatrixError::TrailingBytes(remaining));
        }
        debug!(remaining, "ignoring trailing bytes after matrix payload");
    }

    debug!(len = tag_len + read, "decoded 3x4 matrix");
    Ok(Matrix3x4::from_storage(storage))
}
