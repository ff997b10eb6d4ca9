use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// Hormone readings broke ordering or range rules
    #[error("Invalid hormone series: {0}")]
    InvalidSeries(String),

    /// Stored cycle position cannot produce a summary
    #[error("Invalid cycle anchor: {0}")]
    InvalidAnchor(String),

    /// Insight outside the allowed score range
    #[error("Invalid insight: {0}")]
    InvalidInsight(String),

    /// Error reported by a data provider
    #[error("Data source error: {0}")]
    DataSource(String),
}

impl ComputeError {
    /// Short headline for the failure, suitable for showing to the user.
    pub fn headline(&self) -> &'static str {
        match self {
            ComputeError::InvalidSeries(_) => "Hormone readings look inconsistent",
            ComputeError::InvalidAnchor(_) => "Cycle details need attention",
            ComputeError::InvalidInsight(_) => "Insight could not be shown",
            ComputeError::DataSource(_) => "Your cycle data is unavailable",
        }
    }

    /// Whether reloading could help. Provider failures may be transient,
    /// validation failures repeat until the data changes.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ComputeError::DataSource(_))
    }

    /// Detail text without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            ComputeError::InvalidSeries(detail)
            | ComputeError::InvalidAnchor(detail)
            | ComputeError::InvalidInsight(detail)
            | ComputeError::DataSource(detail) => detail,
        }
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
