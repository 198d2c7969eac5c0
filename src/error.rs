/// Errors reported by the rolling window aggregator and its helpers.
///
/// Only configuration problems are errors. Degenerate data (empty series,
/// single-point groups, tied times) has defined results instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The window or generator configuration was rejected before any work began
    InvalidConfiguration(String),
}

impl WindowError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        WindowError::InvalidConfiguration(msg.into())
    }
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
