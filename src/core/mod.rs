/*!
 * Core Module
 * Fundamental simulator types, configuration and error handling
 */

pub mod config;
pub mod data_structures;
pub mod errors;
pub mod limits;
pub mod serialization;
pub mod types;

// Re-export for convenience
pub use config::SimulationConfig;
pub use data_structures::InlineString;
pub use errors::*;
pub use types::*;
