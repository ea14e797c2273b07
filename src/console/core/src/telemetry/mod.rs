//! Telemetry: structured logging and metrics.
//!
//! - **Logging**: `tracing-subscriber` with JSON, pretty or compact output
//! - **Metrics**: counters through the `metrics` facade; installing an
//!   exporter is left to the embedding application
//!
//! # Example
//!
//! ```rust,no_run
//! use tiffin_console_core::telemetry::{init_logging, LoggingConfig};
//!
//! init_logging(&LoggingConfig::default()).expect("Failed to initialize logging");
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_logging, LogFormat, LoggingConfig};
