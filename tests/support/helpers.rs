// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use folio_core::application::{
    commands::articles::ArticleCommandService,
    ports::{ClockPort, SlugGeneratorPort, TokenManagerPort},
    services::ApplicationServices,
};
use folio_core::domain::article::{
    ArticleReadRepository, ArticleWriteRepository, CommentDeletionPolicy,
    services::ArticleSlugService,
};
use folio_core::domain::import::ImportRepository;
use folio_core::domain::user::UserRepository;
use folio_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::builders::{import, user};
use super::mocks::{DummyClock, DummySlug, DummyTokenManager, InMemoryArticles, InMemoryImports, InMemoryUsers};

/// Backing stores shared between a router and the assertions of a test.
#[derive(Clone)]
pub struct TestStores {
    pub users: Arc<InMemoryUsers>,
    pub articles: Arc<InMemoryArticles>,
    pub imports: Arc<InMemoryImports>,
}

impl TestStores {
    /// alice (1), bob (2) and carol (3); alice owns pending import 1 and
    /// consumed import 3, bob owns pending import 2.
    pub fn seeded() -> Self {
        let imports = Arc::new(InMemoryImports::with_imports([
            import(1, 1, false),
            import(2, 2, false),
            import(3, 1, true),
        ]));
        Self {
            users: Arc::new(InMemoryUsers::with_users([
                user(1, "alice"),
                user(2, "bob"),
                user(3, "carol"),
            ])),
            articles: Arc::new(InMemoryArticles::linked_to(Arc::clone(&imports))),
            imports,
        }
    }

    pub fn services(&self, policy: CommentDeletionPolicy) -> ApplicationServices {
        self.services_reading_from(policy, self.articles.clone())
    }

    /// Like [`TestStores::services`] but articles are loaded from `article_read`.
    pub fn services_reading_from(
        &self,
        policy: CommentDeletionPolicy,
        article_read: Arc<dyn ArticleReadRepository>,
    ) -> ApplicationServices {
        let user_repo: Arc<dyn UserRepository> = self.users.clone();
        let article_write: Arc<dyn ArticleWriteRepository> = self.articles.clone();
        let import_repo: Arc<dyn ImportRepository> = self.imports.clone();
        let token_manager: Arc<TokenManagerPort> = Arc::new(DummyTokenManager);
        let clock: Arc<ClockPort> = Arc::new(DummyClock);
        let slugger: Arc<SlugGeneratorPort> = Arc::new(DummySlug);

        ApplicationServices::new(
            user_repo,
            article_write,
            article_read,
            import_repo,
            token_manager,
            clock,
            slugger,
            policy,
        )
    }

    pub fn article_commands(&self, policy: CommentDeletionPolicy) -> ArticleCommandService {
        self.article_commands_with(policy, self.articles.clone(), self.imports.clone())
    }

    /// Command service whose loads and import lookups can be swapped out,
    /// e.g. for stale copies; writes still land in `self.articles`.
    pub fn article_commands_with(
        &self,
        policy: CommentDeletionPolicy,
        article_read: Arc<dyn ArticleReadRepository>,
        import_repo: Arc<dyn ImportRepository>,
    ) -> ArticleCommandService {
        let clock: Arc<ClockPort> = Arc::new(DummyClock);
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read),
            Arc::new(DummySlug),
            Arc::clone(&clock),
        ));
        ArticleCommandService::new(
            self.articles.clone(),
            article_read,
            self.users.clone(),
            import_repo,
            slug_service,
            clock,
            policy,
        )
    }

    pub fn router(&self, policy: CommentDeletionPolicy) -> axum::Router {
        build_router(HttpState::new(self.services(policy)))
    }

    pub fn router_reading_from(&self, article_read: Arc<dyn ArticleReadRepository>) -> axum::Router {
        build_router(HttpState::new(
            self.services_reading_from(CommentDeletionPolicy::Strict, article_read),
        ))
    }
}

pub fn make_test_router() -> (axum::Router, TestStores) {
    let stores = TestStores::seeded();
    (stores.router(CommentDeletionPolicy::Strict), stores)
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: axum::response::Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
