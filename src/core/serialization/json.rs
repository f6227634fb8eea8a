/*!
 * JSON Serialization
 * Workload parsing with SIMD acceleration for large payloads, pretty output for results
 */

use crate::core::limits::JSON_SIMD_THRESHOLD as SIMD_THRESHOLD;
use serde::{de::DeserializeOwned, Serialize};

/// Result type for JSON operations
pub type JsonResult<T> = Result<T, JsonError>;

/// JSON operation errors
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Serialize to compact JSON string
#[inline]
pub fn to_string<T: Serialize>(value: &T) -> JsonResult<String> {
    serde_json::to_string(value).map_err(|e| JsonError::Serialization(e.to_string()))
}

/// Serialize to pretty-printed JSON string
#[inline]
pub fn to_string_pretty<T: Serialize>(value: &T) -> JsonResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| JsonError::Serialization(e.to_string()))
}

/// Deserialize from JSON bytes with automatic optimization
///
/// Uses SIMD-JSON for large payloads, serde_json for small ones.
#[inline]
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> JsonResult<T> {
    if would_use_simd(bytes.len()) {
        from_slice_simd(bytes)
    } else {
        from_slice_std(bytes)
    }
}

/// Deserialize from JSON bytes using SIMD acceleration
///
/// simd-json parses in place, so the input is copied first.
#[inline]
pub fn from_slice_simd<T: DeserializeOwned>(bytes: &[u8]) -> JsonResult<T> {
    let mut mutable_bytes = bytes.to_vec();
    simd_json::from_slice(&mut mutable_bytes).map_err(|e| JsonError::Deserialization(e.to_string()))
}

/// Deserialize from JSON bytes using standard serde_json
#[inline]
pub fn from_slice_std<T: DeserializeOwned>(bytes: &[u8]) -> JsonResult<T> {
    serde_json::from_slice(bytes).map_err(|e| JsonError::Deserialization(e.to_string()))
}

/// Check if a payload would use SIMD
#[inline]
pub const fn would_use_simd(size: usize) -> bool {
    size > SIMD_THRESHOLD
}
