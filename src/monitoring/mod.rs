/*!
 * Monitoring
 * Structured tracing for simulation runs
 */

mod tracer;

pub use tracer::{generate_run_id, init_tracing, SimulationSpan, ENV_TRACE_JSON};
