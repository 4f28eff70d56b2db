//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{
    models::{Task, UserProfile},
    viewer::ToggleOutcome,
};

/// Wrapper type for displaying the result of a task toggle.
///
/// A gated toggle is shown as a notice rather than an error: the user only
/// needs to finish earlier days first.
#[derive(Debug)]
pub struct ToggleResult {
    pub day_label: String,
    pub task: Task,
    pub outcome: ToggleOutcome,
}

impl ToggleResult {
    /// Whether the toggle was applied.
    pub fn is_saved(&self) -> bool {
        matches!(self.outcome, ToggleOutcome::Saved(_))
    }
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            ToggleOutcome::Saved(status) => {
                writeln!(f, "Task marked as {status}")?;
                writeln!(f)?;
                writeln!(f, "{}", self.day_label)?;
                writeln!(f)?;
                write!(f, "{}", self.task)
            }
            ToggleOutcome::Blocked(gating) => writeln!(f, "Notice: {gating}"),
        }
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can track and display specific changes made during the update.
#[derive(Debug)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Course plan updated successfully!")?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<UserProfile> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Profile updated successfully!")?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}
