/*!
 * Metrics Module
 * Post-run performance figures
 */

mod calculator;

pub use calculator::{calculate, OverallMetrics};
