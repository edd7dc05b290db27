//! Configuration structs

mod app_config;

pub use app_config::{
    resolve_jwt_secret, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig,
    Environment, JwtConfig, RateLimitConfig, ServerConfig,
};
