//! Day gating and status toggling for course plans.

use super::GatingError;
use crate::models::{CoursePlan, TaskStatus};

impl CoursePlan {
    /// Checks that every task in every day before `day_index` is completed.
    ///
    /// Tasks within the same day are independent of each other, so only
    /// strictly earlier days are inspected.
    pub fn check_gate(&self, day_index: usize) -> Result<(), GatingError> {
        match self.study_plan[..day_index.min(self.study_plan.len())]
            .iter()
            .position(|day| !day.is_complete())
        {
            Some(blocking_day) => Err(GatingError::PreviousDayIncomplete { blocking_day }),
            None => Ok(()),
        }
    }

    /// Returns a copy of the plan with one task's status flipped.
    ///
    /// The plan itself is left untouched, so a rejected toggle can never leave
    /// a half-applied change behind.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn toggled(
        &self,
        day_index: usize,
        task_index: usize,
    ) -> Result<(CoursePlan, TaskStatus), GatingError> {
        let current = self.task(day_index, task_index).status;
        self.check_gate(day_index)?;

        let mut next = self.clone();
        let status = current.toggled();
        next.task_mut(day_index, task_index).status = status;
        Ok((next, status))
    }
}
