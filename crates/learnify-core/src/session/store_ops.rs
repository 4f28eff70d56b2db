//! Credential operations backed by the session store.

use log::info;

use super::Session;
use crate::{
    error::{LearnifyError, Result},
    params::Login,
    store::{API_URL_KEY, TOKEN_KEY},
};

impl Session {
    /// Stores a bearer token (and optionally an API URL) for later runs.
    ///
    /// The session context is updated as well, so calls made on this session
    /// afterwards use the new credentials.
    ///
    /// # Errors
    ///
    /// Returns `LearnifyError::InvalidInput` if the token is blank.
    pub async fn login(&mut self, params: &Login) -> Result<()> {
        let token = params.token.trim().to_string();
        if token.is_empty() {
            return Err(LearnifyError::invalid_input("token").with_reason("must not be empty"));
        }
        let api_url = params
            .api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from);

        let stored_token = token.clone();
        let stored_url = api_url.clone();
        self.with_store(move |store| {
            store.set(TOKEN_KEY, &stored_token)?;
            if let Some(url) = &stored_url {
                store.set(API_URL_KEY, url)?;
            }
            Ok(())
        })
        .await?;

        if let Some(url) = api_url {
            self.context.api_url = url;
        }
        self.context.token = Some(token);
        info!("Stored credentials for {}", self.context.api_url);
        Ok(())
    }

    /// Removes the stored token.
    ///
    /// Returns `false` when no token was stored. The stored API URL is kept.
    pub async fn logout(&mut self) -> Result<bool> {
        let removed = self.with_store(|store| store.remove(TOKEN_KEY)).await?;
        self.context.token = None;
        Ok(removed)
    }
}
