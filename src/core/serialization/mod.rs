/*!
 * Serialization Utilities
 *
 * - JSON with SIMD optimization for large workload files
 * - Serde helpers for optional field skipping
 */

pub mod json;
pub mod serde;

pub use json::{from_slice as from_json, to_string_pretty as to_json_pretty, JsonError};
pub use self::serde::{is_false, skip_serializing_none};
