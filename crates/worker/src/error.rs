use payroll_core::error::CoreError;

/// Anything that can abort a solve run.
///
/// There is no partial-result recovery: the first error from any worker is
/// returned as-is and the rest of the run is abandoned.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The store could not be opened or queried (missing file, missing
    /// table, unreadable database).
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    /// A domain error: missing employee, invalid input, or LP failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A worker task panicked or was cancelled before reporting back.
    #[error("Worker failed: {0}")]
    Worker(String),
}

impl From<tokio::task::JoinError> for RunError {
    fn from(err: tokio::task::JoinError) -> Self {
        RunError::Worker(err.to_string())
    }
}
