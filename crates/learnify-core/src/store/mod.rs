//! Local session store backed by SQLite.
//!
//! This is the client's equivalent of a browser's `localStorage`: a small
//! key/value table that keeps the bearer token and the API URL between
//! invocations. Nothing in the progression engine reads it; the session
//! layer turns its contents into an explicit
//! [`SessionContext`](crate::session::SessionContext).

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod kv_queries;
pub mod migrations;

/// Key under which the bearer token is stored.
pub const TOKEN_KEY: &str = "token";

/// Key under which the API base URL is stored.
pub const API_URL_KEY: &str = "api_url";

/// Session store connection and operations handler.
pub struct SessionStore {
    connection: Connection,
}

impl SessionStore {
    /// Opens (or creates) the store and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).db_context("Failed to open session store connection")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }
}
