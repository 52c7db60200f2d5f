// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Caller with a verified bearer token. Rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Caller that may be anonymous. A present but invalid token still rejects.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

impl MaybeAuthenticated {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.0.as_ref()
    }
}

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;
    Ok(app_state)
}

async fn authenticate_bearer(
    app_state: &HttpState,
    bearer: &Authorization<Bearer>,
) -> Result<AuthenticatedUser, HttpError> {
    app_state
        .services
        .token_manager()
        .authenticate(bearer.token())
        .await
        .map_err(|err| {
            tracing::debug!(error = %err, "bearer token rejected");
            HttpError::from_error(ApplicationError::unauthorized("invalid or expired token"))
        })
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        authenticate_bearer(&app_state, &header).await.map(Self)
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;

        match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => authenticate_bearer(&app_state, &header)
                .await
                .map(|user| Self(Some(user))),
            None => Ok(Self(None)),
        }
    }
}

/// `axum::Json` whose rejections are rendered as [`ErrorResponse`](super::error::ErrorResponse).
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` whose rejections are rendered as [`ErrorResponse`](super::error::ErrorResponse).
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct ApiPath<T>(pub T);
