//! Remote persistence for course plans and profiles.
//!
//! The progression engine never talks to the network. Callers hand it a
//! plan fetched through a [`CoursePersistenceGateway`] and write the engine's
//! snapshot back through the same gateway. [`HttpGateway`] is the production
//! implementation backed by the course REST API; tests substitute in-memory
//! gateways.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{CoursePlan, CourseSummary, ProfileUpdate, UserProfile},
};

pub mod http;

pub use http::HttpGateway;

/// Fetches and persists whole course plan documents.
#[async_trait]
pub trait CoursePersistenceGateway: Send + Sync {
    /// Fetch a course plan by ID.
    async fn fetch_course(&self, id: &str) -> Result<CoursePlan>;

    /// Replace the stored course plan with `plan` (whole-document write).
    async fn persist_course(&self, plan: &CoursePlan) -> Result<()>;

    /// List the current user's courses.
    async fn list_courses(&self) -> Result<Vec<CourseSummary>>;
}

/// Reads and updates the current user's profile.
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    /// Fetch the profile of the authenticated user.
    async fn fetch_profile(&self) -> Result<UserProfile>;

    /// Update name, bio and picture URL.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<()>;

    /// Upload a profile picture and return its public URL.
    async fn upload_picture(&self, file_name: &str, bytes: Vec<u8>) -> Result<String>;
}

#[async_trait]
impl<G: CoursePersistenceGateway + ?Sized> CoursePersistenceGateway for &G {
    async fn fetch_course(&self, id: &str) -> Result<CoursePlan> {
        (**self).fetch_course(id).await
    }

    async fn persist_course(&self, plan: &CoursePlan) -> Result<()> {
        (**self).persist_course(plan).await
    }

    async fn list_courses(&self) -> Result<Vec<CourseSummary>> {
        (**self).list_courses().await
    }
}
