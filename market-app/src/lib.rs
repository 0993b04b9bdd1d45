//! Binary wiring: configuration and telemetry shared by the three services.

pub mod config;
pub mod telemetry;
