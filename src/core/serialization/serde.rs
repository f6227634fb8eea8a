/*!
 * Serde Helper Functions
 *
 * Skip predicate and re-exports used by the simulator's data types.
 *
 * ```ignore
 * use serde_with::skip_serializing_none;
 *
 * #[skip_serializing_none]
 * #[derive(Serialize, Deserialize)]
 * struct Process {
 *     completion_time: Option<u64>,
 *
 *     #[serde(skip_serializing_if = "is_false", default)]
 *     force_completed: bool,
 * }
 * ```
 */

pub use serde_with::skip_serializing_none;

/// Skip serializing flags that are unset
#[inline]
pub const fn is_false(value: &bool) -> bool {
    !*value
}
