/*!
 * Data Structures
 *
 * Specialized data structures shared across the simulator:
 * - Inline strings for process ids, names and error details
 */

mod inline_string;

pub use inline_string::InlineString;
