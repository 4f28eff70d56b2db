//! Status and notice message types for operation feedback.

use std::fmt;

/// Severity of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// The operation was applied
    Success,
    /// The operation was not applied, but nothing went wrong
    Notice,
}

/// Wrapper type for displaying short operation messages.
///
/// These stand in for the transient notifications of a graphical client.
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    /// Create a new non-fatal notice.
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Notice,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            StatusKind::Success => "Success:",
            StatusKind::Notice => "Notice:",
        };
        writeln!(f, "{label} {}", self.message)
    }
}
