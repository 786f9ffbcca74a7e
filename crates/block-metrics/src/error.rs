//! Error type for metric construction.

use thiserror::Error;

/// Errors raised while creating and registering the metric sinks.
///
/// Construction is the only fallible path in this crate: a sink that fails
/// to register would silently corrupt every later observation, so the fault
/// propagates to the caller instead of being swallowed. Recording itself is
/// infallible.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A metric could not be created or registered.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}
