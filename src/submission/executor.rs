//! Submission executor
//!
//! Owns the submission lifecycle (Idle -> Pending -> Succeeded | Failed -> Idle) and
//! runs at most one endpoint call at a time on the tokio runtime. The spawned task
//! reports back over a oneshot channel; callers observe completion with [`poll`] from
//! the event loop or [`wait`] when they can afford to block on it.
//!
//! [`poll`]: SubmissionExecutor::poll
//! [`wait`]: SubmissionExecutor::wait

use super::{ExecutorError, SubmissionEndpoint, SubmissionError};
use crate::state::FormValues;
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use uuid::Uuid;

/// Submission state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionLifecycle {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(SubmissionError),
}

impl SubmissionLifecycle {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }
}

/// Outcome of a finished submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Carries the snapshot that was submitted
    Succeeded(FormValues),
    Failed(SubmissionError),
}

struct InFlight {
    id: Uuid,
    values: FormValues,
    outcome: oneshot::Receiver<Result<(), SubmissionError>>,
}

pub struct SubmissionExecutor {
    endpoint: Arc<dyn SubmissionEndpoint>,
    lifecycle: SubmissionLifecycle,
    in_flight: Option<InFlight>,
}

impl SubmissionExecutor {
    pub fn new(endpoint: Arc<dyn SubmissionEndpoint>) -> Self {
        Self {
            endpoint,
            lifecycle: SubmissionLifecycle::Idle,
            in_flight: None,
        }
    }

    pub fn lifecycle(&self) -> &SubmissionLifecycle {
        &self.lifecycle
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.lifecycle, SubmissionLifecycle::Pending)
    }

    /// Id of the submission currently in flight
    pub fn in_flight_id(&self) -> Option<Uuid> {
        self.in_flight.as_ref().map(|f| f.id)
    }

    /// Start a submission with a snapshot of `values`.
    ///
    /// Must be called from within a tokio runtime. Rejected while another
    /// submission is pending.
    pub fn submit(&mut self, values: FormValues, simulate_error: bool) -> Result<Uuid, ExecutorError> {
        if self.is_pending() {
            tracing::warn!("Submission rejected: another submission is in flight");
            return Err(ExecutorError::Busy);
        }

        let id = Uuid::new_v4();
        let (tx, rx) = oneshot::channel();
        let endpoint = Arc::clone(&self.endpoint);
        let payload = values.clone();

        tokio::spawn(async move {
            let outcome = endpoint.submit(&payload, simulate_error).await;
            // The executor may have been dropped; nobody is left to tell
            let _ = tx.send(outcome);
        });

        tracing::info!(%id, simulate_error, "Submission pending");
        self.in_flight = Some(InFlight {
            id,
            values,
            outcome: rx,
        });
        self.lifecycle = SubmissionLifecycle::Pending;
        Ok(id)
    }

    /// Non-blocking check for a finished submission
    pub fn poll(&mut self) -> Option<Completion> {
        let in_flight = self.in_flight.as_mut()?;
        let outcome = match in_flight.outcome.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(SubmissionError::Interrupted),
        };
        self.finish(outcome)
    }

    /// Wait for the in-flight submission, if any, to finish
    pub async fn wait(&mut self) -> Option<Completion> {
        let in_flight = self.in_flight.as_mut()?;
        let outcome = (&mut in_flight.outcome)
            .await
            .unwrap_or(Err(SubmissionError::Interrupted));
        self.finish(outcome)
    }

    fn finish(&mut self, outcome: Result<(), SubmissionError>) -> Option<Completion> {
        let in_flight = self.in_flight.take()?;
        match outcome {
            Ok(()) => {
                tracing::info!(id = %in_flight.id, "Submission succeeded");
                self.lifecycle = SubmissionLifecycle::Succeeded;
                Some(Completion::Succeeded(in_flight.values))
            }
            Err(error) => {
                tracing::warn!(id = %in_flight.id, "Submission failed: {error}");
                self.lifecycle = SubmissionLifecycle::Failed(error.clone());
                Some(Completion::Failed(error))
            }
        }
    }

    /// Return to Idle. An in-flight submission cannot be reset.
    pub fn reset(&mut self) -> Result<(), ExecutorError> {
        if self.is_pending() {
            return Err(ExecutorError::InFlight);
        }
        if self.lifecycle != SubmissionLifecycle::Idle {
            tracing::debug!("Submission lifecycle reset to idle");
        }
        self.lifecycle = SubmissionLifecycle::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Series;
    use crate::submission::MockSubmissionEndpoint;
    use pretty_assertions::assert_eq;

    fn continuum_values(simulate_error: bool) -> FormValues {
        FormValues {
            name: "Q".to_string(),
            email: "q@continuum.org".to_string(),
            favorite_series: Series::Voyager,
            will_proceed: false,
            simulate_error,
        }
    }

    fn succeeding_endpoint(times: usize) -> Arc<dyn SubmissionEndpoint> {
        let mut mock = MockSubmissionEndpoint::new();
        mock.expect_submit().times(times).returning(|_, _| Ok(()));
        Arc::new(mock)
    }

    #[test]
    fn test_starts_idle() {
        let executor = SubmissionExecutor::new(succeeding_endpoint(0));
        assert_eq!(executor.lifecycle(), &SubmissionLifecycle::Idle);
        assert!(executor.in_flight_id().is_none());
    }

    #[tokio::test]
    async fn test_submit_moves_to_pending_then_succeeded() {
        let mut executor = SubmissionExecutor::new(succeeding_endpoint(1));
        let values = continuum_values(false);

        let id = executor.submit(values.clone(), false).unwrap();
        assert_eq!(executor.lifecycle(), &SubmissionLifecycle::Pending);
        assert_eq!(executor.in_flight_id(), Some(id));

        let completion = executor.wait().await;
        assert_eq!(completion, Some(Completion::Succeeded(values)));
        assert_eq!(executor.lifecycle(), &SubmissionLifecycle::Succeeded);
        assert!(executor.in_flight_id().is_none());
    }

    #[tokio::test]
    async fn test_failure_carries_endpoint_error() {
        let mut mock = MockSubmissionEndpoint::new();
        mock.expect_submit()
            .withf(|payload, simulate_error| payload.name == "Q" && *simulate_error)
            .times(1)
            .returning(|_, _| Err(SubmissionError::Rejected("nope".to_string())));
        let mut executor = SubmissionExecutor::new(Arc::new(mock));

        executor.submit(continuum_values(true), true).unwrap();
        let completion = executor.wait().await;

        let error = SubmissionError::Rejected("nope".to_string());
        assert_eq!(completion, Some(Completion::Failed(error.clone())));
        assert_eq!(executor.lifecycle(), &SubmissionLifecycle::Failed(error));
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_rejected() {
        let mut executor = SubmissionExecutor::new(succeeding_endpoint(1));

        let first = executor.submit(continuum_values(false), false).unwrap();
        let second = executor.submit(continuum_values(false), false);

        assert_eq!(second, Err(ExecutorError::Busy));
        assert_eq!(executor.lifecycle(), &SubmissionLifecycle::Pending);
        assert_eq!(executor.in_flight_id(), Some(first));

        executor.wait().await;
    }

    #[tokio::test]
    async fn test_poll_is_empty_until_task_reports() {
        let mut executor = SubmissionExecutor::new(succeeding_endpoint(1));
        assert!(executor.poll().is_none());

        executor.submit(continuum_values(false), false).unwrap();
        // The spawned task has not run yet on the current-thread runtime
        assert!(executor.poll().is_none());
        assert!(executor.is_pending());

        let mut completion = None;
        for _ in 0..100 {
            tokio::task::yield_now().await;
            completion = executor.poll();
            if completion.is_some() {
                break;
            }
        }
        assert_eq!(
            completion,
            Some(Completion::Succeeded(continuum_values(false)))
        );
    }

    #[tokio::test]
    async fn test_reset_refused_while_pending() {
        let mut executor = SubmissionExecutor::new(succeeding_endpoint(1));
        executor.submit(continuum_values(false), false).unwrap();

        assert_eq!(executor.reset(), Err(ExecutorError::InFlight));
        assert!(executor.is_pending());

        executor.wait().await;
        assert_eq!(executor.reset(), Ok(()));
        assert_eq!(executor.lifecycle(), &SubmissionLifecycle::Idle);
    }

    #[tokio::test]
    async fn test_submit_allowed_from_terminal_state() {
        let mut executor = SubmissionExecutor::new(succeeding_endpoint(2));
        executor.submit(continuum_values(false), false).unwrap();
        executor.wait().await;
        assert!(executor.lifecycle().is_terminal());

        executor.submit(continuum_values(false), false).unwrap();
        assert!(executor.is_pending());
        executor.wait().await;
    }

    #[tokio::test]
    async fn test_dead_task_resolves_to_interrupted() {
        struct PanickingEndpoint;

        #[async_trait::async_trait]
        impl SubmissionEndpoint for PanickingEndpoint {
            async fn submit(&self, _: &FormValues, _: bool) -> Result<(), SubmissionError> {
                panic!("endpoint exploded");
            }
        }

        let mut executor = SubmissionExecutor::new(Arc::new(PanickingEndpoint));

        executor.submit(continuum_values(false), false).unwrap();
        let completion = executor.wait().await;

        assert_eq!(
            completion,
            Some(Completion::Failed(SubmissionError::Interrupted))
        );
    }

    #[tokio::test]
    async fn test_wait_without_submission_returns_none() {
        let mut executor = SubmissionExecutor::new(succeeding_endpoint(0));
        assert!(executor.wait().await.is_none());
    }
}
