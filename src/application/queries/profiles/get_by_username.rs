use super::ProfileQueryService;
use crate::{
    application::{
        dto::ProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Profile, Username},
};

pub struct GetProfileQuery {
    pub username: String,
}

impl ProfileQueryService {
    pub async fn view_profile_by_username(&self, username: &str) -> ApplicationResult<Profile> {
        // blank names are never stored
        let Ok(username) = Username::new(username) else {
            return Err(ApplicationError::not_found(format!(
                "profile '{username}' not found"
            )));
        };
        self.user_repo
            .find_by_username(&username)
            .await?
            .map(|user| user.profile())
            .ok_or_else(|| ApplicationError::not_found(format!("profile '{username}' not found")))
    }

    pub async fn get_profile(&self, query: GetProfileQuery) -> ApplicationResult<ProfileDto> {
        self.view_profile_by_username(&query.username)
            .await
            .map(ProfileDto::from_profile)
    }
}
