//! Display formatting for domain models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]) and
//! format as markdown, which the CLI renders on the terminal. Collections and
//! operation outcomes get small wrapper types so the same data can be shown
//! differently depending on context.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │ (CoursePlan,..) │───▶│ Result Types    │───▶│   Output        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (CourseSummaries)
//! - [`results`]: Operation result types (ToggleResult, UpdateResult)
//! - [`status`]: Status and notice messages (OperationStatus)
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use learnify_core::display::OperationStatus;
//!
//! let notice = OperationStatus::notice("Please complete previous days' tasks first");
//! assert_eq!(notice.to_string(), "Notice: Please complete previous days' tasks first\n");
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::CourseSummaries;
pub use results::{ToggleResult, UpdateResult};
pub use status::OperationStatus;
