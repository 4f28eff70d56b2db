//! High-level client API for courses and profiles.
//!
//! A [`Session`] is the central coordinator between interfaces (the CLI) and
//! the rest of the library. It owns the resolved [`SessionContext`] and the
//! location of the local session store, and builds gateways from that
//! context explicitly. Nothing below this layer reads global state.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │  CourseSession  │    │   HttpGateway   │
//! │ (course_handlers│───▶│  + engine       │───▶│  (REST API)     │
//! │  profile_...)   │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  SessionStore   │  token, API URL
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use learnify_core::{params::CourseId, SessionBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = SessionBuilder::new()
//!     .with_api_url(Some("http://localhost:8081/api"))
//!     .build()
//!     .await?;
//!
//! let courses = session.list_courses().await?;
//! for course in courses.iter() {
//!     println!("{}", course.name);
//! }
//!
//! let plan = session.show_course(&CourseId { id: "c1".to_string() }).await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    error::{LearnifyError, Result},
    gateway::HttpGateway,
    store::SessionStore,
};

pub mod builder;
pub mod course_handlers;
pub mod profile_handlers;
pub mod store_ops;


pub use builder::SessionBuilder;

/// Default API base URL of a locally running backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8081/api";

/// Explicit identity and endpoint for talking to the course API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Base URL that endpoint paths are appended to
    pub api_url: String,
    /// Bearer token, if the user is logged in
    pub token: Option<String>,
}

impl SessionContext {
    /// Creates an unauthenticated context for the given API.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token: None,
        }
    }

    /// Sets the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Whether a bearer token is available.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Main client interface.
pub struct Session {
    pub(crate) store_path: PathBuf,
    pub(crate) context: SessionContext,
}

impl Session {
    /// Creates a session from an already resolved context.
    pub(crate) fn new(store_path: PathBuf, context: SessionContext) -> Self {
        Self {
            store_path,
            context,
        }
    }

    /// The resolved API URL and token.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Location of the local session store.
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Builds an HTTP gateway from the session context.
    pub fn gateway(&self) -> Result<HttpGateway> {
        HttpGateway::new(&self.context)
    }

    /// Runs a blocking closure against the session store.
    pub(crate) async fn with_store<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&SessionStore) -> Result<T> + Send + 'static,
    {
        let store_path = self.store_path.clone();
        task::spawn_blocking(move || {
            let store = SessionStore::open(&store_path)?;
            f(&store)
        })
        .await
        .map_err(LearnifyError::join)?
    }
}
