//! Study-plan progression engine.
//!
//! The [`PlanProgressionEngine`] holds the one mutable snapshot of a
//! [`CoursePlan`] for a viewing session and applies validated mutations to it:
//!
//! - **Toggling** flips a task between pending and completed. A toggle is
//!   rejected with [`GatingError::PreviousDayIncomplete`] while any task of a
//!   strictly earlier day is still pending. Tasks within a day are
//!   independent.
//! - **Editing** replaces a task's title, description or resource list and is
//!   never gated.
//!
//! Every mutation builds a new plan value and swaps it in, so a rejected
//! mutation leaves the snapshot exactly as it was. The engine also remembers
//! the last durable snapshot (the one matching the backend) so that a failed
//! persistence can be rolled back.
//!
//! ```text
//!   load(plan) ──▶ durable == current
//!        │
//!   toggle/edit ──▶ current changes, durable kept
//!        │
//!   persist ok  ──▶ commit()    (durable = current)
//!   persist err ──▶ rollback()  (current = durable)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use learnify_core::{engine::PlanProgressionEngine, models::TaskStatus};
//! # use learnify_core::models::{CoursePlan, DayPlan, Task};
//! # fn task(title: &str) -> Task {
//! #     Task { title: title.into(), description: String::new(),
//! #            resource_urls: vec![], status: TaskStatus::Pending }
//! # }
//! # let plan = CoursePlan {
//! #     id: "c1".into(), user_id: "u1".into(), name: "Rust".into(),
//! #     number_of_days: 2, start_date: "2024-03-01".parse().unwrap(),
//! #     preferred_learning_style: vec!["visual".into()],
//! #     study_plan: vec![
//! #         DayPlan { day: "Day 1".into(), tasks: vec![task("a")] },
//! #         DayPlan { day: "Day 2".into(), tasks: vec![task("b")] },
//! #     ],
//! # };
//!
//! let mut engine = PlanProgressionEngine::new(plan);
//! assert!(engine.toggle_task(1, 0).is_err());
//! assert_eq!(engine.toggle_task(0, 0), Ok(TaskStatus::Completed));
//! assert_eq!(engine.toggle_task(1, 0), Ok(TaskStatus::Completed));
//! ```

use std::mem;

use log::debug;
use thiserror::Error;

use crate::models::{CoursePlan, TaskEdit, TaskStatus};

mod edits;
mod gating;

#[cfg(test)]
mod tests;
#[cfg(test)]
mod tests_proptest;

/// The only domain error of the progression model.
///
/// It is always recoverable: the rejected toggle simply does not apply.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatingError {
    /// A task in an earlier day is still pending
    #[error("Please complete previous days' tasks first")]
    PreviousDayIncomplete {
        /// Zero-based index of the first earlier day with a pending task
        blocking_day: usize,
    },
}

/// Holds one course plan snapshot and applies validated mutations.
#[derive(Debug, Clone)]
pub struct PlanProgressionEngine {
    current: CoursePlan,
    durable: CoursePlan,
    previous: Option<CoursePlan>,
}

impl PlanProgressionEngine {
    /// Creates an engine around a freshly fetched plan.
    pub fn new(plan: CoursePlan) -> Self {
        Self {
            durable: plan.clone(),
            current: plan,
            previous: None,
        }
    }

    /// Replaces the held snapshot wholesale.
    ///
    /// The loaded plan is assumed to match the backend and becomes the
    /// rollback point.
    pub fn load(&mut self, plan: CoursePlan) {
        debug!("Loading course plan {}", plan.id);
        self.durable = plan.clone();
        self.current = plan;
        self.previous = None;
    }

    /// Flips the status of one task and returns the new status.
    ///
    /// Fails without touching the snapshot when a task of an earlier day is
    /// still pending.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn toggle_task(
        &mut self,
        day_index: usize,
        task_index: usize,
    ) -> Result<TaskStatus, GatingError> {
        let (next, status) = self.current.toggled(day_index, task_index)?;
        debug!("Task ({day_index}, {task_index}) is now {}", status.as_str());
        self.previous = Some(mem::replace(&mut self.current, next));
        Ok(status)
    }

    /// Replaces one field of a task.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn edit_task(&mut self, day_index: usize, task_index: usize, edit: &TaskEdit) {
        let next = self.current.edited(day_index, task_index, edit);
        debug!("Edited {} of task ({day_index}, {task_index})", edit.field());
        self.previous = Some(mem::replace(&mut self.current, next));
    }

    /// The current plan, for persistence and display.
    pub fn snapshot(&self) -> &CoursePlan {
        &self.current
    }

    /// The last plan known to match the backend.
    pub fn durable(&self) -> &CoursePlan {
        &self.durable
    }

    /// Whether the snapshot holds changes that were not persisted yet.
    pub fn is_dirty(&self) -> bool {
        self.current != self.durable
    }

    /// Marks the current snapshot as persisted.
    pub fn commit(&mut self) {
        self.durable = self.current.clone();
        self.previous = None;
    }

    /// Undoes the most recent mutation. Returns `false` if there is none.
    pub fn revert_last(&mut self) -> bool {
        match self.previous.take() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Discards every change since the last load or commit.
    pub fn rollback(&mut self) {
        self.current = self.durable.clone();
        self.previous = None;
    }
}
