//! Submission layer: the endpoint seam and the executor state machine

mod error;
mod executor;
mod simulated;
mod traits;

pub use error::*;
pub use executor::*;
pub use simulated::*;
pub use traits::SubmissionEndpoint;

#[cfg(test)]
pub use traits::MockSubmissionEndpoint;
