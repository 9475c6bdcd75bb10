//! Error types raised by the engine.
//!
//! [`CheckFailure`] is the only error a check produces on purpose. Anything
//! else coming out of a predicate is a [`CheckError::Defect`]: a bug in the
//! check itself, which the executor never reinterprets.

use assay_message::FluentMessage;
use thiserror::Error;

/// A failed check, carrying the fully rendered diagnostic.
///
/// `Display` writes the message verbatim, with no prefix or suffix.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
#[error("{message}")]
pub struct CheckFailure {
    message: String,
}

impl CheckFailure {
    pub fn new(message: impl Into<String>) -> Self {
        CheckFailure {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<FluentMessage> for CheckFailure {
    fn from(message: FluentMessage) -> Self {
        CheckFailure::new(message)
    }
}

/// Outcome of a check that did not pass.
#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum CheckError {
    /// The check ran and its expectation did not hold.
    #[error(transparent)]
    Failed(#[from] CheckFailure),

    /// The check could not be evaluated at all.
    ///
    /// Never swallowed by negation: `.not()` inverts the verdict of a
    /// check, not the fact that no verdict was reached.
    #[error("check `{check}` could not be evaluated: {reason}")]
    Defect { check: &'static str, reason: String },
}

impl CheckError {
    /// Create a failure from a rendered message.
    #[cold]
    pub fn failed(message: impl Into<String>) -> Self {
        CheckError::Failed(CheckFailure::new(message))
    }

    /// Create a defect for the named check.
    #[cold]
    pub fn defect(check: &'static str, reason: impl Into<String>) -> Self {
        CheckError::Defect {
            check,
            reason: reason.into(),
        }
    }

    /// Check if this is an ordinary check failure (vs. a defect).
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckError::Failed(_))
    }

    /// The failure, if this is one.
    pub fn as_failure(&self) -> Option<&CheckFailure> {
        match self {
            CheckError::Failed(failure) => Some(failure),
            CheckError::Defect { .. } => None,
        }
    }
}

impl From<FluentMessage> for CheckError {
    fn from(message: FluentMessage) -> Self {
        CheckError::Failed(message.into())
    }
}
