use crate::domain::user::Profile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl ProfileDto {
    pub fn from_profile(profile: Profile) -> Self {
        Self {
            username: profile.username.into(),
            bio: profile.bio,
            image: profile.image,
        }
    }
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self::from_profile(profile)
    }
}
