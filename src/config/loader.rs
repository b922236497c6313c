use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 合并顺序（后者覆盖前者）：
    /// 1. 开发环境默认值
    /// 2. ./config.toml
    /// 3. AUTHENTICA_ 前缀环境变量（层级用双下划线分隔）
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        let figment = Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("AUTHENTICA_").split("__"));

        figment.extract()
    }

    /// 验证配置
    ///
    /// Gemini API 密钥缺失时直接拒绝启动，避免运行期所有摘要调用静默降级。
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.providers.gemini.api_key.trim().is_empty() {
            return Err(ConfigValidationError::MissingGeminiApiKey);
        }

        if config.verification.paper_limit == 0 {
            return Err(ConfigValidationError::InvalidPaperLimit);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("Gemini API 密钥未配置（AUTHENTICA_PROVIDERS__GEMINI__API_KEY）")]
    MissingGeminiApiKey,

    #[error("论文检索数量上限无效，必须大于 0")]
    InvalidPaperLimit,
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}
