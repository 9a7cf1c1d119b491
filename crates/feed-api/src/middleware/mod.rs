//! Middleware stack for the API server
//!
//! Request ids, tracing, timeout, CORS and global rate limiting.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    http::{header, HeaderValue, Method, Request},
    response::{IntoResponse, Response},
    BoxError, Router,
};
use feed_common::{AppError, CorsConfig, RateLimitConfig};
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorError, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::response::ApiError;
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware settings taken from configuration
#[derive(Debug, Clone)]
pub struct MiddlewareSettings<'a> {
    pub rate_limit: &'a RateLimitConfig,
    pub cors: &'a CorsConfig,
    pub is_production: bool,
    pub request_timeout: Duration,
}

/// Apply the middleware stack to the router
///
/// Request order: rate limit, request id, trace, timeout, CORS, handler.
pub fn apply_middleware(
    router: Router<AppState>,
    settings: &MiddlewareSettings<'_>,
) -> Result<Router<AppState>, AppError> {
    if settings.rate_limit.requests_per_second == 0 || settings.rate_limit.burst == 0 {
        return Err(AppError::Config(
            "rate limit and burst must both be greater than zero".to_string(),
        ));
    }

    // One bucket for the whole server
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .period(replenish_interval(settings.rate_limit))
            .burst_size(settings.rate_limit.burst)
            .error_handler(rate_limit_response)
            .key_extractor(GlobalKeyExtractor)
            .finish()
            .ok_or_else(|| AppError::Config("invalid rate limiter configuration".to_string()))?,
    );

    // Layers wrap outward: the last one added sees the request first
    let router = router
        .layer(cors_layer(settings.cors, settings.is_production))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(timeout_response))
                .timeout(settings.request_timeout),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    header::HeaderName::from_static(REQUEST_ID_HEADER),
                    MakeRequestUuid,
                ))
                .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
                    REQUEST_ID_HEADER,
                ))),
        )
        .layer(GovernorLayer {
            config: governor_conf,
        });

    Ok(router)
}

/// Interval after which one request is returned to the bucket
fn replenish_interval(rate_limit: &RateLimitConfig) -> Duration {
    Duration::from_secs(1) / rate_limit.requests_per_second.max(1)
}

/// Render a limiter refusal in the API error envelope
fn rate_limit_response(err: GovernorError) -> Response<Body> {
    match err {
        GovernorError::TooManyRequests { wait_time, .. } => {
            let mut response = ApiError::from(AppError::RateLimitExceeded {
                retry_after_secs: wait_time,
            })
            .into_response();
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(wait_time));
            response
        }
        other => ApiError::from(AppError::internal(other)).into_response(),
    }
}

/// Render a middleware failure, in practice the request timeout
async fn timeout_response(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("Request timed out");
        ApiError::from(AppError::RequestTimeout)
    } else {
        ApiError::from(AppError::internal(anyhow::anyhow!("{err}")))
    }
}

/// Create CORS layer from configuration
fn cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    if !config.allowed_origins.is_empty() {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                origin.parse::<HeaderValue>().ok().or_else(|| {
                    tracing::warn!(%origin, "Ignoring invalid CORS origin");
                    None
                })
            })
            .collect();

        tracing::info!(count = origins.len(), "CORS: allowing configured origins");
        base_layer.allow_origin(AllowOrigin::list(origins))
    } else if is_production {
        tracing::warn!("CORS: no allowed origins configured; cross-origin browser requests are blocked");
        base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
    } else {
        tracing::warn!("CORS: allowing any origin (development mode)");
        base_layer.allow_origin(Any)
    }
}
