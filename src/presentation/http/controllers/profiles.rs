// src/presentation/http/controllers/profiles.rs
use crate::application::{dto::ProfileDto, queries::profiles::GetProfileQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiPath;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub profile: ProfileDto,
}

#[utoipa::path(
    get,
    path = "/profiles/{username}",
    params(("username" = String, Path, description = "Registered username")),
    responses(
        (status = 200, description = "Public profile.", body = ProfileResponse),
        (status = 400, description = "Malformed username.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Profiles"
)]
pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    ApiPath(username): ApiPath<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .profile_queries
        .get_profile(GetProfileQuery { username })
        .await
        .into_http()
        .map(|profile| Json(ProfileResponse { profile }))
}
