pub mod catalog;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod telemetry;
pub mod types;
