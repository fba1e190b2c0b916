//! Error types for submission

/// Failure reported by a submission endpoint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The endpoint answered and refused the payload
    #[error("{0}")]
    Rejected(String),
    /// The submission task ended without reporting an outcome
    #[error("submission task ended unexpectedly")]
    Interrupted,
}

/// Invalid executor transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutorError {
    #[error("a submission is already in flight")]
    Busy,
    #[error("cannot reset while a submission is in flight")]
    InFlight,
}
