//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BackendConfig, ConfigError, CorsConfig, Environment, RateLimitConfig,
    ServerConfig,
};
