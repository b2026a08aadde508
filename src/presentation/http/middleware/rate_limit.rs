// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

const REQUESTS_PER_SECOND: u64 = 10;
const BURST_SIZE: u32 = 20;

type IpRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter shared by every router built in this process.
///
/// Returns `None` only if the limiter parameters are rejected, in which case the
/// router is served without rate limiting.
pub fn rate_limit_layer() -> Option<IpRateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<IpRateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REQUESTS_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            let Some(config) = builder.key_extractor(SmartIpKeyExtractor).finish() else {
                tracing::error!("invalid rate limit configuration; limiter disabled");
                return None;
            };

            Some(GovernorLayer::new(config))
        })
        .clone()
}
