// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use folio_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use folio_core::domain::user::UserId;

/// テスト用トークン定数
pub const ALICE_TOKEN: &str = "alice-token";
pub const BOB_TOKEN: &str = "bob-token";
pub const CAROL_TOKEN: &str = "carol-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

fn user(id: i64, username: &str) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!("{}-token", subject.username),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ALICE_TOKEN => Ok(user(1, "alice")),
            BOB_TOKEN => Ok(user(2, "bob")),
            CAROL_TOKEN => Ok(user(3, "carol")),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
