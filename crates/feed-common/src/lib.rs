//! # feed-common
//!
//! Shared utilities including configuration, error handling, access-token
//! verification, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, TokenVerifier, AUTHENTICATED_AUDIENCE};
pub use config::{
    AppConfig, AppSettings, BackendConfig, ConfigError, CorsConfig, Environment, RateLimitConfig,
    ServerConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
