// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use async_trait::async_trait;

#[async_trait]
pub trait TokenManager: Send + Sync {
    /// Mint a token for `subject`. Used by operator tooling and tests; the
    /// service itself has no login flow.
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
