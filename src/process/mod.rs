/*!
 * Process Module
 * Process definitions, per-run records and workload files
 */

pub mod types;
pub mod workload;

// Re-export for convenience
pub use types::{Process, ProcessDefinition, ProcessState, QueueLevel};
pub use workload::Workload;
