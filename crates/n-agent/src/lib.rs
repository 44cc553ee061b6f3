//! # n-agent — Coding-agent boundary
//!
//! The palette generator runs inside a toolchain that can also hand tasks
//! to an external coding agent. This crate only describes that seam: a
//! runner accepts a prompt, later yields a [`TaskOutcome`], and a completed
//! task reports the files it touched. No concrete runner lives here.
//!
//! ```text
//! prompt ──submit──▶ Handle ──wait──▶ TaskOutcome
//!                                       ├─ Completed(TaskResult { changes, .. })
//!                                       ├─ NotInstalled
//!                                       ├─ LoginRequired
//!                                       └─ Failed(reason)
//! ```

pub mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use error::AgentError;

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

/// An opaque capability that runs prompts to completion.
pub trait AgentRunner {
    /// Identifies one submitted task.
    type Handle;

    /// Start a task. Returns as soon as the runner has accepted it.
    ///
    /// # Errors
    ///
    /// [`AgentError::Submit`] if the runner cannot accept the prompt.
    fn submit(&mut self, prompt: &str) -> Result<Self::Handle, AgentError>;

    /// Block until the task behind `handle` finishes.
    ///
    /// # Errors
    ///
    /// [`AgentError::UnknownHandle`] for a handle this runner never issued.
    fn wait(&mut self, handle: Self::Handle) -> Result<TaskOutcome, AgentError>;

    /// Submit and wait in one call.
    ///
    /// # Errors
    ///
    /// Whatever [`submit`](Self::submit) or [`wait`](Self::wait) return.
    fn run(&mut self, prompt: &str) -> Result<TaskOutcome, AgentError> {
        let handle = self.submit(prompt)?;
        self.wait(handle)
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// How a task ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskOutcome {
    Completed(TaskResult),
    /// The agent binary is not available on this machine.
    NotInstalled,
    /// The agent is installed but has no valid session.
    LoginRequired,
    Failed(String),
}

impl TaskOutcome {
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// What a completed task did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
    pub elapsed: Duration,
    /// Tokens consumed, when the agent reports them.
    pub tokens: Option<u64>,
    pub changes: Vec<FileChange>,
}

impl TaskResult {
    /// Paths of every file the task touched, in report order.
    pub fn changed_paths(&self) -> impl Iterator<Item = &Path> {
        self.changes.iter().map(|c| c.absolute_path.as_path())
    }
}

/// One file touched by a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub absolute_path: PathBuf,
    /// `None` when the task created the file.
    pub original_content: Option<String>,
    /// `None` when the task deleted the file.
    pub final_content: Option<String>,
    pub unified_diff: String,
}

impl FileChange {
    /// File name with extension, e.g. `colors.css`.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.absolute_path.file_name().and_then(|n| n.to_str())
    }

    #[must_use]
    pub const fn is_created(&self) -> bool {
        self.original_content.is_none()
    }

    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.final_content.is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
