//! Course handler operations that return display wrapper types for the Session.

use log::info;

use super::Session;
use crate::{
    display::{CourseSummaries, ToggleResult, UpdateResult},
    error::Result,
    gateway::{CoursePersistenceGateway, HttpGateway},
    models::{CoursePlan, Task},
    params::{CourseId, EditTask, TaskPosition},
    viewer::CourseSession,
};

impl Session {
    /// Handle listing the current user's courses.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use learnify_core::SessionBuilder;
    /// # async {
    /// let session = SessionBuilder::new().build().await?;
    /// let courses = session.list_courses().await?;
    /// println!("{courses}");
    /// # Result::<(), learnify_core::LearnifyError>::Ok(())
    /// # };
    /// ```
    pub async fn list_courses(&self) -> Result<CourseSummaries> {
        let courses = self.gateway()?.list_courses().await?;
        Ok(CourseSummaries(courses))
    }

    /// Handle showing a complete course plan.
    ///
    /// # Errors
    ///
    /// Returns `LearnifyError::CourseNotFound` when the API has no course with
    /// the given ID.
    pub async fn show_course(&self, params: &CourseId) -> Result<CoursePlan> {
        self.gateway()?.fetch_course(&params.id).await
    }

    /// Starts a viewing session on a course.
    ///
    /// The returned [`CourseSession`] keeps the engine and the gateway
    /// together for callers that issue several operations on the same plan.
    pub async fn open_course(&self, params: &CourseId) -> Result<CourseSession<HttpGateway>> {
        CourseSession::open(self.gateway()?, params.id.clone()).await
    }

    /// Handle toggling a task's completion status.
    ///
    /// A toggle blocked by day gating is not an error: the returned
    /// [`ToggleResult`] carries the gating notice and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `LearnifyError::InvalidInput` when the position does not exist
    /// and `LearnifyError::Persistence` when the write is rejected.
    pub async fn toggle_task(&self, params: &TaskPosition) -> Result<ToggleResult> {
        let mut course = self.open_course(&course_id(params)).await?;
        let (day_index, task_index) = params.resolve(course.plan())?;

        let outcome = course.toggle_task(day_index, task_index).await?;
        let plan = course.plan();
        Ok(ToggleResult {
            day_label: plan.day(day_index).day.clone(),
            task: plan.task(day_index, task_index).clone(),
            outcome,
        })
    }

    /// Handle editing a task's title, description or resources.
    ///
    /// All requested fields are applied to the plan and persisted with a
    /// single whole-document write.
    pub async fn edit_task(&self, params: &EditTask) -> Result<UpdateResult<Task>> {
        let edits = params.edits()?;
        let mut course = self.open_course(&course_id(&params.position)).await?;
        let (day_index, task_index) = params.position.resolve(course.plan())?;

        for edit in &edits {
            course.edit_task(day_index, task_index, edit);
        }
        course.save().await?;
        info!(
            "Edited task {} of day {} in course {}",
            params.position.task,
            params.position.day,
            course.course_id()
        );

        let changes = edits
            .iter()
            .map(|edit| format!("Updated {}", edit.field()))
            .collect();
        Ok(UpdateResult::with_changes(
            course.plan().task(day_index, task_index).clone(),
            changes,
        ))
    }
}

fn course_id(position: &TaskPosition) -> CourseId {
    CourseId {
        id: position.course_id.clone(),
    }
}
