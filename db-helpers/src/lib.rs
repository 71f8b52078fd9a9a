//! HTTP service helpers: uniform JSON error responses and pollable metric
//! sources.

pub mod config;
pub mod error_response;
pub mod handlers;
pub mod logger;
pub mod metrics;
pub mod metrics_sender;
pub mod state;

pub use error_response::{ErrorBody, ErrorResponse, Severity};
pub use logger::{Logger, TracingLogger};
pub use metrics::{uptime_source, MetricSource, Reading};
pub use metrics_sender::{CounterRegistry, MetricsSender};
