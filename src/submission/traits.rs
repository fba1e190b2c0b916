//! Trait abstraction for the submission endpoint to enable mocking in tests

use super::SubmissionError;
use crate::state::FormValues;
use async_trait::async_trait;

/// Remote endpoint that accepts an assessment payload
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionEndpoint: Send + Sync {
    /// Submit a payload; `simulate_error` asks the endpoint to fail on purpose
    async fn submit(&self, payload: &FormValues, simulate_error: bool)
        -> Result<(), SubmissionError>;
}
