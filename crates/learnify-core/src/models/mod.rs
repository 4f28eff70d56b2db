//! Data models for course plans, course summaries and user profiles.
//!
//! These types mirror the JSON documents exchanged with the course API
//! (camelCase field names on the wire). Display implementations live in
//! [`crate::display::models`]; the rules that change a plan (gating, toggling
//! and editing) live in [`crate::engine`].
//!
//! Plans are plain value records: every mutation produces a new
//! [`CoursePlan`], so two snapshots can be compared with `==`.
//!
//! # Examples
//!
//! ```rust
//! use learnify_core::models::CoursePlan;
//!
//! let json = r#"{
//!     "id": "c1",
//!     "userId": "u1",
//!     "name": "Rust Basics",
//!     "numberOfDays": 1,
//!     "startDate": "2024-03-01",
//!     "preferredLearningStyle": ["visual"],
//!     "studyPlan": [
//!         { "day": "Day 1", "tasks": [
//!             { "title": "Install", "description": "Install rustup",
//!               "resourceUrls": [], "status": "pending" }
//!         ] }
//!     ]
//! }"#;
//!
//! let plan: CoursePlan = serde_json::from_str(json).unwrap();
//! assert_eq!(plan.study_plan[0].tasks[0].title, "Install");
//! ```

pub mod course;
pub mod date;
pub mod profile;
pub mod requests;
pub mod status;
pub mod summary;

#[cfg(test)]
mod tests;

pub use course::{CoursePlan, DayPlan, Task};
pub use profile::{ProfileUpdate, UserProfile};
pub use requests::TaskEdit;
pub use status::TaskStatus;
pub use summary::{CourseSummary, Progress};
