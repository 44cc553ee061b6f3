// SPDX-License-Identifier: MIT

use thiserror::Error;

/// A color string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("malformed color `{value}`: {reason}")]
    Malformed { value: String, reason: &'static str },
}

impl ColorError {
    pub(crate) fn malformed(value: &str, reason: &'static str) -> Self {
        Self::Malformed {
            value: value.to_owned(),
            reason,
        }
    }

    /// Human-readable reason, without the offending value.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Malformed { reason, .. } => reason,
        }
    }
}
