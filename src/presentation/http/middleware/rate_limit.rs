// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client token bucket keyed on the forwarded or peer IP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    /// Milliseconds between refills of one request slot.
    pub replenish_interval_ms: u64,
    pub burst_size: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            replenish_interval_ms: 100,
            burst_size: 20,
        }
    }
}

/// Returns `None` when the settings cannot form a valid quota.
pub fn rate_limit_layer(settings: RateLimitSettings) -> Option<RateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(settings.replenish_interval_ms);
    builder.burst_size(settings.burst_size);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
