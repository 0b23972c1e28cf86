//! Shared configuration and domain reference data for fintel.

pub mod app_config;
pub mod config;
pub mod entities;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use entities::KOREAN_FINANCIAL_ENTITIES;
