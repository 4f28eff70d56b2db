//! Parameter structures for Learnify operations
//!
//! These structures are shared by every interface (currently the CLI) and
//! carry no framework-specific derives. Interface layers define their own
//! argument types and convert them into these with `From` implementations:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│    Session      │
//! │  (clap derives) │    │ (minimal deps)  │    │    handlers     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Positions typed by users are 1-based; the conversion to the engine's
//! 0-based indices happens in [`TaskPosition::resolve`], which also rejects
//! positions that do not exist in the plan.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    error::{LearnifyError, Result},
    models::{CoursePlan, ProfileUpdate, TaskEdit, UserProfile},
};

/// Parameters for operations requiring just a course ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseId {
    /// The ID of the course
    pub id: String,
}

/// A task addressed by course and 1-based day/task positions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPosition {
    /// The ID of the course
    pub course_id: String,
    /// Day position, starting at 1
    pub day: usize,
    /// Task position within the day, starting at 1
    pub task: usize,
}

impl TaskPosition {
    /// Converts the position to 0-based `(day_index, task_index)`.
    ///
    /// # Errors
    ///
    /// Returns `LearnifyError::InvalidInput` when the position does not exist
    /// in `plan`.
    pub fn resolve(&self, plan: &CoursePlan) -> Result<(usize, usize)> {
        let days = plan.study_plan.len();
        if self.day == 0 || self.day > days {
            return Err(LearnifyError::invalid_input("day")
                .with_reason(format!("must be between 1 and {days}, got {}", self.day)));
        }

        let day_index = self.day - 1;
        let tasks = plan.study_plan[day_index].tasks.len();
        if self.task == 0 || self.task > tasks {
            return Err(LearnifyError::invalid_input("task").with_reason(format!(
                "day {} has {tasks} task(s), got {}",
                self.day, self.task
            )));
        }

        Ok((day_index, self.task - 1))
    }
}

/// Parameters for editing a task's content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditTask {
    /// Which task to edit
    #[serde(flatten)]
    pub position: TaskPosition,
    /// New title, used verbatim
    pub title: Option<String>,
    /// New description, used verbatim
    pub description: Option<String>,
    /// New resources as newline-separated text
    pub resources: Option<String>,
}

impl EditTask {
    /// The edits to apply, in title, description, resources order.
    ///
    /// # Errors
    ///
    /// Returns `LearnifyError::InvalidInput` when no field is given.
    pub fn edits(&self) -> Result<Vec<TaskEdit>> {
        let edits: Vec<TaskEdit> = [
            self.title.clone().map(TaskEdit::Title),
            self.description.clone().map(TaskEdit::Description),
            self.resources.clone().map(TaskEdit::ResourceUrls),
        ]
        .into_iter()
        .flatten()
        .collect();

        if edits.is_empty() {
            return Err(LearnifyError::invalid_input("edit")
                .with_reason("provide at least one of title, description or resources"));
        }
        Ok(edits)
    }
}

/// Parameters for updating the user profile. Unset fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New display name
    pub name: Option<String>,
    /// New biography
    pub bio: Option<String>,
    /// New profile picture URL
    pub picture_url: Option<String>,
}

impl UpdateProfile {
    /// Merges the requested changes into the current profile.
    ///
    /// # Errors
    ///
    /// Returns `LearnifyError::InvalidInput` when no field is given.
    pub fn apply(&self, current: &UserProfile) -> Result<ProfileUpdate> {
        if self.name.is_none() && self.bio.is_none() && self.picture_url.is_none() {
            return Err(LearnifyError::invalid_input("profile")
                .with_reason("provide at least one of name, bio or picture URL"));
        }

        let mut update = ProfileUpdate::from(current);
        if let Some(name) = &self.name {
            update.name.clone_from(name);
        }
        if let Some(bio) = &self.bio {
            update.bio.clone_from(bio);
        }
        if let Some(url) = &self.picture_url {
            update.profile.clone_from(url);
        }
        Ok(update)
    }
}

/// Parameters for uploading a profile picture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadPicture {
    /// Image file to upload
    pub path: PathBuf,
}

/// Parameters for storing credentials in the session store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Login {
    /// Bearer token issued by the backend
    pub token: String,
    /// API base URL to remember alongside the token
    pub api_url: Option<String>,
}
