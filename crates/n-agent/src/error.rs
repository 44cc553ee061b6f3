//! Errors raised at the agent boundary.

use std::io;

/// Why a request to the agent runner failed before producing an outcome.
///
/// An agent that ran but failed is not an error here; it is
/// [`TaskOutcome::Failed`](crate::TaskOutcome::Failed).
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// The runner refused or could not accept the prompt.
    #[error("could not submit task: {0}")]
    Submit(String),

    /// `wait` was given a handle the runner never issued, or one already
    /// consumed.
    #[error("unknown task handle `{0}`")]
    UnknownHandle(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
