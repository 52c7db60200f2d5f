// src/presentation/http/routes.rs
use crate::presentation::http::middleware::rate_limit::{RateLimitSettings, rate_limit_layer};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, comments, profiles},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Knobs for the outer middleware stack.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Exact origins allowed by CORS. Empty allows any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitSettings>,
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with(state, RouterOptions::default())
}

pub fn build_router_with(state: HttpState, options: RouterOptions) -> Router {
    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/profiles/{username}", get(profiles::get_profile))
        .route("/articles", post(articles::create_article))
        .route(
            "/articles/{slug}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/articles/{slug}/favorite",
            post(articles::favorite_article).delete(articles::unfavorite_article),
        )
        .route(
            "/articles/{slug}/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route(
            "/articles/{slug}/comments/{id}",
            delete(comments::delete_comment),
        );

    let router = match options.rate_limit.and_then(rate_limit_layer) {
        Some(layer) => router.layer(layer),
        None => {
            if options.rate_limit.is_some() {
                tracing::warn!("rate limit settings rejected; serving without rate limiting");
            }
            router
        }
    };

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
