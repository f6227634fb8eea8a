/*!
 * Scheduler Module
 * Algorithm selection, ready queues and per-algorithm policies
 */

pub mod policies;
pub mod queues;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use policies::for_algorithm;
pub use queues::{ProcessIndex, ReadyQueues};
pub use traits::SchedulingPolicy;
pub use types::{Algorithm, TimeQuantum};
