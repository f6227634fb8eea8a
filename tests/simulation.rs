/*!
 * Simulation tests entry point
 */

#[path = "simulation/log_test.rs"]
mod log_test;

#[path = "simulation/metrics_test.rs"]
mod metrics_test;

#[path = "simulation/watchdog_test.rs"]
mod watchdog_test;
