//! Core library for the Learnify study-plan client.
//!
//! A course is a multi-day study plan: an ordered list of days, each with an
//! ordered list of tasks. This crate models those plans, enforces the
//! progression rule that a task can only be toggled once every earlier day is
//! complete, and persists plans through the course REST API.
//!
//! # Architecture
//!
//! - **Engine** ([`engine`]): pure, synchronous plan transitions and day gating
//! - **Gateway** ([`gateway`]): whole-document reads and writes over HTTP
//! - **Viewer** ([`viewer`]): one viewing session tying the two together,
//!   including rollback when a write fails
//! - **Session** ([`session`]): credentials, the local session store and the
//!   handlers used by interfaces
//! - **Display** ([`display`]): markdown formatting for terminal rendering
//!
//! # Quick Start
//!
//! ```rust
//! use learnify_core::{models::CoursePlan, PlanProgressionEngine};
//!
//! let plan: CoursePlan = serde_json::from_str(r#"{
//!     "id": "c1", "name": "Rust", "numberOfDays": 2, "startDate": "2024-03-01",
//!     "preferredLearningStyle": [],
//!     "studyPlan": [
//!         { "day": "Day 1", "tasks": [{ "title": "a", "description": "" }] },
//!         { "day": "Day 2", "tasks": [{ "title": "b", "description": "" }] }
//!     ]
//! }"#).unwrap();
//!
//! let mut engine = PlanProgressionEngine::new(plan);
//! assert!(engine.toggle_task(1, 0).is_err());
//! engine.toggle_task(0, 0).unwrap();
//! engine.toggle_task(1, 0).unwrap();
//! ```

pub mod display;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod models;
pub mod params;
pub mod session;
pub mod store;
pub mod viewer;

// Re-export commonly used types
pub use display::{CourseSummaries, OperationStatus, ToggleResult, UpdateResult};
pub use engine::{GatingError, PlanProgressionEngine};
pub use error::{LearnifyError, Result};
pub use gateway::{CoursePersistenceGateway, HttpGateway, ProfileGateway};
pub use models::{
    CoursePlan, CourseSummary, DayPlan, Progress, ProfileUpdate, Task, TaskEdit, TaskStatus,
    UserProfile,
};
pub use params::{CourseId, EditTask, Login, TaskPosition, UpdateProfile, UploadPicture};
pub use session::{Session, SessionBuilder, SessionContext};
pub use store::SessionStore;
pub use viewer::{CourseSession, ToggleOutcome};
