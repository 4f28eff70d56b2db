//! Course summary and progress types.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{date, CoursePlan};

/// Summary of a course as returned by the course listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    /// Course ID
    pub id: String,
    /// Course name
    pub name: String,
    /// First day of the course
    #[serde(with = "date::start_date")]
    pub start_date: Date,
    /// Number of days in the plan
    pub number_of_days: u32,
    /// Learning style tags
    #[serde(default)]
    pub preferred_learning_style: Vec<String>,
    /// Completion percentage computed by the backend (0-100)
    #[serde(default)]
    pub progress: f64,
}

/// Completion statistics derived locally from a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Total number of tasks
    pub total_tasks: usize,
    /// Number of completed tasks
    pub completed_tasks: usize,
    /// Zero-based index of the first day with pending tasks, if any
    pub current_day: Option<usize>,
}

impl Progress {
    /// Rounded completion percentage. A plan without tasks is 0% complete.
    pub fn percent(&self) -> u32 {
        if self.total_tasks == 0 {
            return 0;
        }
        let ratio = self.completed_tasks as f64 / self.total_tasks as f64;
        (ratio * 100.0).round() as u32
    }

    /// Whether every task of the plan is completed.
    pub fn is_finished(&self) -> bool {
        self.current_day.is_none()
    }
}

impl From<&CoursePlan> for Progress {
    fn from(plan: &CoursePlan) -> Self {
        Self {
            total_tasks: plan.task_count(),
            completed_tasks: plan.completed_count(),
            current_day: plan.study_plan.iter().position(|day| !day.is_complete()),
        }
    }
}
