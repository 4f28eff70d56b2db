//! Profile handler operations for the Session.

use log::info;
use tokio::task;

use super::Session;
use crate::{
    display::UpdateResult,
    error::{LearnifyError, Result},
    gateway::ProfileGateway,
    models::UserProfile,
    params::{UpdateProfile, UploadPicture},
};

impl Session {
    /// Handle showing the authenticated user's profile.
    pub async fn show_profile(&self) -> Result<UserProfile> {
        self.gateway()?.fetch_profile().await
    }

    /// Handle updating name, bio or picture URL.
    ///
    /// Unset fields keep their current value, so the profile is fetched first
    /// and the merged values are sent back.
    pub async fn update_profile(
        &self,
        params: &UpdateProfile,
    ) -> Result<UpdateResult<UserProfile>> {
        let gateway = self.gateway()?;
        let current = gateway.fetch_profile().await?;
        let update = params.apply(&current)?;

        gateway.update_profile(&update).await?;

        let mut changes = Vec::new();
        if params.name.is_some() {
            changes.push("Updated name".to_string());
        }
        if params.bio.is_some() {
            changes.push("Updated bio".to_string());
        }
        if params.picture_url.is_some() {
            changes.push("Updated picture".to_string());
        }

        let profile = UserProfile {
            name: update.name,
            bio: update.bio,
            profile: update.profile,
            ..current
        };
        Ok(UpdateResult::with_changes(profile, changes))
    }

    /// Handle uploading a new profile picture.
    ///
    /// The file is uploaded first; the URL returned by the API is then stored
    /// on the profile.
    ///
    /// # Errors
    ///
    /// Returns `LearnifyError::FileSystem` when the file cannot be read.
    pub async fn upload_picture(
        &self,
        params: &UploadPicture,
    ) -> Result<UpdateResult<UserProfile>> {
        let path = params.path.clone();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| LearnifyError::invalid_input("path").with_reason("must name a file"))?;

        let bytes = task::spawn_blocking(move || {
            std::fs::read(&path).map_err(|e| LearnifyError::FileSystem { path, source: e })
        })
        .await
        .map_err(LearnifyError::join)??;

        let gateway = self.gateway()?;
        let url = gateway.upload_picture(&file_name, bytes).await?;
        info!("Uploaded {file_name} to {url}");

        self.update_profile(&UpdateProfile {
            picture_url: Some(url),
            ..UpdateProfile::default()
        })
        .await
    }
}
