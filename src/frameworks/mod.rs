// Frameworks layer: runtime configuration and the telemetry runner.

pub mod config;
pub mod runner;
