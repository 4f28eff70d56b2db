//! Builder for creating and configuring Session instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::{Session, SessionContext, DEFAULT_API_URL};
use crate::{
    error::{LearnifyError, Result},
    store::{SessionStore, API_URL_KEY, TOKEN_KEY},
};

/// Builder for creating and configuring Session instances.
///
/// Values given to the builder (usually from flags or environment variables)
/// take precedence over values saved in the session store, which in turn
/// take precedence over the defaults.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    store_path: Option<PathBuf>,
    api_url: Option<String>,
    token: Option<String>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom session store file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/learnify/session.db` or
    /// `~/.local/share/learnify/session.db`
    pub fn with_store_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.store_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the API base URL.
    pub fn with_api_url(mut self, api_url: Option<impl Into<String>>) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = Some(api_url.into());
        }
        self
    }

    /// Overrides the bearer token.
    pub fn with_token(mut self, token: Option<impl Into<String>>) -> Self {
        if let Some(token) = token {
            self.token = Some(token.into());
        }
        self
    }

    /// Builds the configured session.
    ///
    /// # Errors
    ///
    /// Returns `LearnifyError::FileSystem` if the store directory cannot be
    /// created. Returns `LearnifyError::Database` if the store cannot be
    /// opened.
    pub async fn build(self) -> Result<Session> {
        let store_path = match self.store_path {
            Some(path) => path,
            None => Self::default_store_path()?,
        };

        if let Some(parent) = store_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| LearnifyError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let path = store_path.clone();
        let (stored_url, stored_token) = task::spawn_blocking(move || {
            let store = SessionStore::open(&path)?;
            Ok::<_, LearnifyError>((store.get(API_URL_KEY)?, store.get(TOKEN_KEY)?))
        })
        .await
        .map_err(LearnifyError::join)??;

        let api_url = self
            .api_url
            .or(stored_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let token = self.token.or(stored_token);
        debug!(
            "Session uses {api_url} ({})",
            if token.is_some() { "authenticated" } else { "anonymous" }
        );

        Ok(Session::new(store_path, SessionContext { api_url, token }))
    }

    /// Returns the default store path following XDG Base Directory
    /// specification.
    fn default_store_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("learnify")
            .place_data_file("session.db")
            .map_err(|e| LearnifyError::XdgDirectory(e.to_string()))
    }
}
