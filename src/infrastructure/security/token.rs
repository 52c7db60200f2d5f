// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

use super::claims::parse_claims;

const TOKEN_CODE: &str = r#"
    user({uid}, {uname});
    issued_at({issued});
    expires_at({exp});
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
"#;

/// Issues and verifies Ed25519-signed biscuit bearer tokens.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn build_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> HashMap<String, Term> {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.user_id).into());
    params.insert("uname".to_string(), subject.username.clone().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());
    params
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .map(|ttl| ttl.num_seconds())
        .unwrap_or(i64::MAX)
        .max(0)
}

fn build_and_serialize_biscuit(
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(TOKEN_CODE, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let params = build_params(&subject, issued_at, expires_at);
        let token = build_and_serialize_biscuit(params, self.root.as_ref())?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        // Token checks carry the validity window; the authorizer only supplies time.
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let (facts, _, _, _) = authorizer.dump();
        parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    const TEST_KEY: &str = "4f3c1b7e9a2d5c8f0e1a3b6d9c2f5e8a1b4d7c0f3e6a9b2c5d8f1e4a7b0c3d6e";

    fn manager(ttl: Duration) -> BiscuitTokenManager {
        BiscuitTokenManager::new(TEST_KEY, ttl).unwrap()
    }

    fn subject() -> TokenSubject {
        TokenSubject {
            user_id: UserId::new(42).unwrap(),
            username: "jake".into(),
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates_as_subject() {
        let tokens = manager(Duration::from_secs(600));
        let issued = tokens.issue(subject()).await.unwrap();
        assert_eq!(issued.expires_in, 600);

        let user = tokens.authenticate(&issued.token).await.unwrap();
        assert_eq!(user.id, UserId::new(42).unwrap());
        assert_eq!(user.username, "jake");
    }

    #[tokio::test]
    async fn garbage_token_is_unauthorized() {
        let tokens = manager(Duration::from_secs(600));
        let err = tokens.authenticate("not-a-token").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn token_from_other_key_is_rejected() {
        let other = BiscuitTokenManager::new(
            "0a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f9",
            Duration::from_secs(600),
        )
        .unwrap();
        let issued = other.issue(subject()).await.unwrap();

        let err = manager(Duration::from_secs(600))
            .authenticate(&issued.token)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[test]
    fn malformed_key_is_rejected() {
        assert!(BiscuitTokenManager::new("zz", Duration::from_secs(1)).is_err());
    }
}
