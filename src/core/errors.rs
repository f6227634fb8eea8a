/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 *
 * The simulation engine itself never fails; these errors cover the surfaces
 * around it: algorithm parsing, workload loading and validation, and
 * configuration.
 */

use crate::core::data_structures::InlineString;
use crate::core::serialization::JsonError;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulator errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Unknown scheduling algorithm '{0}'")]
    #[diagnostic(
        code(scheduler::unknown_algorithm),
        help("Use one of: fcfs, sjf_np, sjf_p, priority_np, priority_p, rr, hrrn, mqs.")
    )]
    UnknownAlgorithm(InlineString),

    #[error("Invalid process '{id}': {reason}")]
    #[diagnostic(
        code(workload::invalid_process),
        help("Every process needs a non-empty id and a burst time of at least 1.")
    )]
    InvalidProcess { id: InlineString, reason: InlineString },

    #[error("Duplicate process id '{0}'")]
    #[diagnostic(
        code(workload::duplicate_id),
        help("Process ids must be unique within a workload.")
    )]
    DuplicateProcessId(InlineString),

    #[error("Workload error: {0}")]
    #[diagnostic(
        code(workload::unreadable),
        help("Check that the workload file exists and contains valid JSON.")
    )]
    Workload(InlineString),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(config::invalid),
        help("Review the SIM_* environment variables.")
    )]
    Configuration(InlineString),
}

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        SimulationError::Workload(err.to_string().into())
    }
}

impl From<JsonError> for SimulationError {
    fn from(err: JsonError) -> Self {
        SimulationError::Workload(err.to_string().into())
    }
}
