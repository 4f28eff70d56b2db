//! User profile model.

use serde::{Deserialize, Serialize};

/// Profile of the authenticated user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Account email, read-only from the client's point of view
    #[serde(default)]
    pub email: String,
    /// Short biography
    #[serde(default)]
    pub bio: String,
    /// URL of the profile picture
    #[serde(default)]
    pub profile: String,
}

/// Body sent when updating a profile. The email cannot be changed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub bio: String,
    pub profile: String,
}

impl From<&UserProfile> for ProfileUpdate {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            bio: profile.bio.clone(),
            profile: profile.profile.clone(),
        }
    }
}
