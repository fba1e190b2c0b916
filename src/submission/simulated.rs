//! Simulated submission endpoint
//!
//! Stands in for a real transport: logs the payload, waits a fixed delay, then
//! resolves or rejects depending on the `simulate_error` flag.

use super::{SubmissionEndpoint, SubmissionError};
use crate::state::FormValues;
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated network latency
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Message returned when a failure is requested
pub const SIMULATED_API_ERROR: &str = "There was an API error of the most grievous kind!";

/// Endpoint that never leaves the process
#[derive(Debug, Clone)]
pub struct SimulatedEndpoint {
    delay: Duration,
}

impl SimulatedEndpoint {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl SubmissionEndpoint for SimulatedEndpoint {
    async fn submit(
        &self,
        payload: &FormValues,
        simulate_error: bool,
    ) -> Result<(), SubmissionError> {
        match serde_json::to_string(payload) {
            Ok(json) => tracing::info!(payload = %json, "Submitting assessment"),
            Err(e) => tracing::warn!("Could not serialize payload for logging: {e}"),
        }

        tokio::time::sleep(self.delay).await;

        if simulate_error {
            Err(SubmissionError::Rejected(SIMULATED_API_ERROR.to_string()))
        } else {
            Ok(())
        }
    }
}
