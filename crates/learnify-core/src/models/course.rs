//! Course plan model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{date, TaskStatus};

/// The full multi-day study schedule for one course enrollment.
///
/// `study_plan` is ordered by day sequence. The position in that sequence is
/// authoritative for gating; the `day` label of each entry is only displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CoursePlan {
    /// Unique identifier of the course
    pub id: String,

    /// Owning user reference
    #[serde(default)]
    pub user_id: String,

    /// Subject the user wants to learn
    pub name: String,

    /// Number of days in the plan, equal to `study_plan.len()`
    pub number_of_days: u32,

    /// First day of the course
    #[serde(with = "date::start_date")]
    pub start_date: Date,

    /// Learning style tags chosen when the course was requested
    pub preferred_learning_style: Vec<String>,

    /// Ordered day plans
    pub study_plan: Vec<DayPlan>,
}

/// One day's ordered set of tasks within a [`CoursePlan`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayPlan {
    /// Display label, e.g. "Day 1"
    pub day: String,

    /// Tasks for the day in display order
    pub tasks: Vec<Task>,
}

/// A single learning activity with resources and a completion status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Short title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Links to learning resources, in display order
    #[serde(default)]
    pub resource_urls: Vec<String>,

    /// Completion status
    #[serde(default)]
    pub status: TaskStatus,
}

impl CoursePlan {
    /// Returns the task at the given zero-based position.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range. Callers validate positions
    /// coming from user input before they reach the plan.
    pub fn task(&self, day_index: usize, task_index: usize) -> &Task {
        let day = self.day(day_index);
        assert!(
            task_index < day.tasks.len(),
            "task index {task_index} out of range for day {day_index} with {} tasks",
            day.tasks.len()
        );
        &day.tasks[task_index]
    }

    /// Returns the day plan at the given zero-based position.
    ///
    /// # Panics
    ///
    /// Panics if `day_index` is out of range.
    pub fn day(&self, day_index: usize) -> &DayPlan {
        assert!(
            day_index < self.study_plan.len(),
            "day index {day_index} out of range for a plan with {} days",
            self.study_plan.len()
        );
        &self.study_plan[day_index]
    }

    /// Mutable access used by the engine after it cloned a snapshot.
    pub(crate) fn task_mut(&mut self, day_index: usize, task_index: usize) -> &mut Task {
        // Bounds are asserted with readable messages before indexing.
        let _ = self.task(day_index, task_index);
        &mut self.study_plan[day_index].tasks[task_index]
    }

    /// Total number of tasks across all days.
    pub fn task_count(&self) -> usize {
        self.study_plan.iter().map(|day| day.tasks.len()).sum()
    }

    /// Number of completed tasks across all days.
    pub fn completed_count(&self) -> usize {
        self.study_plan
            .iter()
            .flat_map(|day| &day.tasks)
            .filter(|task| task.status == TaskStatus::Completed)
            .count()
    }
}

impl DayPlan {
    /// Whether every task of the day is completed. Empty days count as done.
    pub fn is_complete(&self) -> bool {
        self.tasks.iter().all(|task| !task.status.is_pending())
    }
}
