//! Task status enumeration.

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task has not been completed yet
    #[default]
    Pending,

    /// Task has been completed
    Completed,
}

impl TaskStatus {
    /// Wire representation, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    /// The opposite status; toggling is binary.
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    /// Whether the task still needs to be done.
    pub fn is_pending(self) -> bool {
        self == TaskStatus::Pending
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use learnify_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(TaskStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "✓ Completed",
            TaskStatus::Pending => "○ Pending",
        }
    }
}
