//! Shared application state for the API server

use crate::aggregator::RollingWindowAggregator;

/// Shared application state
///
/// Read-only after startup: every request recomputes from its own inputs.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Aggregator shared by all requests
    pub aggregator: RollingWindowAggregator,
    /// Seed used when a synthetic-data request does not name one
    pub default_seed: u64,
}

impl AppState {
    /// Creates a new application state
    pub fn new(aggregator: RollingWindowAggregator, default_seed: u64) -> Self {
        AppState {
            aggregator,
            default_seed,
        }
    }
}
