//! Content edits for course plan tasks.

use crate::models::{requests::parse_resource_urls, CoursePlan, TaskEdit};

impl CoursePlan {
    /// Returns a copy of the plan with one task field replaced.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn edited(&self, day_index: usize, task_index: usize, edit: &TaskEdit) -> CoursePlan {
        let mut next = self.clone();
        let task = next.task_mut(day_index, task_index);
        match edit {
            TaskEdit::Title(title) => task.title.clone_from(title),
            TaskEdit::Description(description) => task.description.clone_from(description),
            TaskEdit::ResourceUrls(raw) => task.resource_urls = parse_resource_urls(raw),
        }
        next
    }
}
