//! 配置模块

pub mod config;
pub mod loader;

pub use config::AppConfig;
pub use loader::ConfigLoader;
