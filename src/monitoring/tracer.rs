/*!
 * Tracing
 * Structured logging for simulation runs using the tracing crate
 *
 * Features:
 * - Run ID generation for correlating the events of one run
 * - JSON-formatted logs for structured parsing
 * - One span per run with outcome fields recorded on close
 */

use std::time::Instant;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

pub const ENV_TRACE_JSON: &str = "SIM_TRACE_JSON";

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SIM_TRACE_JSON: Enable JSON output (default: false)
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let initialized = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
            .is_ok()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
            .is_ok()
    };

    if initialized {
        debug!(json = use_json, "Tracing initialized");
    }
}

/// Generate a unique ID for one simulation run
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one simulation run
///
/// Outcome fields are recorded before the span closes; the elapsed wall
/// time is logged on drop.
pub struct SimulationSpan {
    span: tracing::Span,
    start: Instant,
    run_id: String,
}

impl SimulationSpan {
    pub fn new(algorithm: &str, processes: usize) -> Self {
        let run_id = generate_run_id();
        let span = span!(
            Level::INFO,
            "simulation",
            run_id = %run_id,
            algorithm = algorithm,
            processes = processes,
            total_time = tracing::field::Empty,
            events = tracing::field::Empty,
            outcome = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            run_id,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Enter the span for the duration of the returned guard
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Record how the run ended
    pub fn record_outcome(&self, outcome: &str, total_time: u64, events: usize) {
        self.span.record("outcome", outcome);
        self.span.record("total_time", total_time);
        self.span.record("events", events);
    }
}

impl Drop for SimulationSpan {
    fn drop(&mut self) {
        let _entered = self.span.enter();
        info!(
            run_id = %self.run_id,
            elapsed_us = self.start.elapsed().as_micros() as u64,
            "Simulation run finished"
        );
    }
}
