//! Viewing sessions over a single course plan.
//!
//! A [`CourseSession`] ties a [`PlanProgressionEngine`] to a
//! [`CoursePersistenceGateway`]. Toggles are persisted immediately as whole
//! documents; edits are staged locally until [`CourseSession::save`]. When a
//! write fails the engine is rolled back to the last durable plan and the
//! rejected snapshot is parked as *pending*, so the caller decides whether to
//! [`retry_pending`](CourseSession::retry_pending) or
//! [`discard_pending`](CourseSession::discard_pending). Nothing is retried
//! automatically.

use log::{info, warn};

use crate::{
    engine::{GatingError, PlanProgressionEngine},
    error::{LearnifyError, Result},
    gateway::CoursePersistenceGateway,
    models::{CoursePlan, TaskEdit, TaskStatus},
};


/// Outcome of a toggle that did not fail at the transport level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The toggle was applied and persisted; carries the new status
    Saved(TaskStatus),
    /// The toggle was rejected by day gating; nothing was sent
    Blocked(GatingError),
}

/// One viewing session: a fetched plan, its engine and the gateway.
pub struct CourseSession<G> {
    gateway: G,
    course_id: String,
    engine: PlanProgressionEngine,
    pending: Option<CoursePlan>,
}

impl<G: CoursePersistenceGateway> CourseSession<G> {
    /// Fetches the course and starts a session on it.
    pub async fn open(gateway: G, course_id: impl Into<String>) -> Result<Self> {
        let course_id = course_id.into();
        let plan = gateway.fetch_course(&course_id).await?;
        info!("Opened course {course_id} ({} days)", plan.study_plan.len());

        Ok(Self {
            gateway,
            course_id,
            engine: PlanProgressionEngine::new(plan),
            pending: None,
        })
    }

    /// The ID of the course being viewed.
    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    /// The current plan snapshot.
    pub fn plan(&self) -> &CoursePlan {
        self.engine.snapshot()
    }

    /// Read access to the underlying engine.
    pub fn engine(&self) -> &PlanProgressionEngine {
        &self.engine
    }

    /// The snapshot rejected by the last failed write, if any.
    pub fn pending(&self) -> Option<&CoursePlan> {
        self.pending.as_ref()
    }

    /// Toggles a task and persists the resulting plan.
    ///
    /// A gated toggle returns [`ToggleOutcome::Blocked`] without touching the
    /// network. A failed write rolls the plan back and returns
    /// [`LearnifyError::Persistence`].
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub async fn toggle_task(
        &mut self,
        day_index: usize,
        task_index: usize,
    ) -> Result<ToggleOutcome> {
        let status = match self.engine.toggle_task(day_index, task_index) {
            Ok(status) => status,
            Err(gating) => {
                info!("Toggle of task ({day_index}, {task_index}) blocked: {gating}");
                return Ok(ToggleOutcome::Blocked(gating));
            }
        };

        self.persist_current("Failed to update task status").await?;
        Ok(ToggleOutcome::Saved(status))
    }

    /// Applies an edit locally. Call [`save`](Self::save) to persist it.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn edit_task(&mut self, day_index: usize, task_index: usize, edit: &TaskEdit) {
        self.engine.edit_task(day_index, task_index, edit);
    }

    /// Persists staged edits. Does nothing when there are none.
    pub async fn save(&mut self) -> Result<()> {
        if !self.engine.is_dirty() {
            return Ok(());
        }
        self.persist_current("Failed to update course plan").await
    }

    /// Re-sends the snapshot rejected by the last failed write.
    ///
    /// Returns `false` when there is nothing pending. On success the snapshot
    /// becomes the durable plan; on failure it stays pending.
    ///
    /// # Errors
    ///
    /// Returns `LearnifyError::InvalidInput` while edits are staged, since the
    /// pending snapshot would replace them. Save or roll back those edits, or
    /// call `discard_pending`, first.
    pub async fn retry_pending(&mut self) -> Result<bool> {
        if self.pending.is_some() && self.engine.is_dirty() {
            return Err(LearnifyError::invalid_input("pending")
                .with_reason("save or discard staged edits before retrying"));
        }
        let Some(plan) = self.pending.take() else {
            return Ok(false);
        };

        match self.gateway.persist_course(&plan).await {
            Ok(()) => {
                info!("Persisted pending snapshot of course {}", self.course_id);
                self.engine.load(plan);
                Ok(true)
            }
            Err(e) => {
                warn!("Retry for course {} failed: {e}", self.course_id);
                self.pending = Some(plan);
                Err(LearnifyError::persistence("Failed to update course plan").with_source(e))
            }
        }
    }

    /// Drops the snapshot rejected by the last failed write.
    pub fn discard_pending(&mut self) -> Option<CoursePlan> {
        self.pending.take()
    }

    /// Fetches the plan again and replaces the snapshot.
    pub async fn reload(&mut self) -> Result<()> {
        let plan = self.gateway.fetch_course(&self.course_id).await?;
        self.engine.load(plan);
        self.pending = None;
        Ok(())
    }

    async fn persist_current(&mut self, message: &str) -> Result<()> {
        let snapshot = self.engine.snapshot().clone();
        match self.gateway.persist_course(&snapshot).await {
            Ok(()) => {
                self.engine.commit();
                self.pending = None;
                Ok(())
            }
            Err(e) => {
                warn!("{message} for course {}: {e}", self.course_id);
                self.engine.rollback();
                self.pending = Some(snapshot);
                Err(LearnifyError::persistence(message).with_source(e))
            }
        }
    }
}
