use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite 数据库文件路径
    pub path: PathBuf,
    /// 连接池最大大小
    pub max_connections: u32,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
}

/// 论文检索源配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchProviderConfig {
    /// 提供方 API 根地址
    pub base_url: String,
    /// 请求超时（秒）
    pub timeout: u64,
}

/// 文本生成（Gemini）配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeminiConfig {
    /// API 根地址
    pub base_url: String,
    /// 模型名称
    pub model: String,
    /// API 密钥，无默认值，缺失时启动失败
    pub api_key: String,
    /// 请求超时（秒）
    pub timeout: u64,
}

/// 外部服务配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProvidersConfig {
    /// 主检索源：Semantic Scholar
    pub semantic_scholar: SearchProviderConfig,
    /// 备用检索源：CrossRef
    pub crossref: SearchProviderConfig,
    /// 文本生成：Gemini
    pub gemini: GeminiConfig,
}

/// 验证流程配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VerificationConfig {
    /// 单次验证检索的论文总数上限
    pub paper_limit: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 数据库配置
    pub database: DatabaseConfig,
    /// 服务器配置
    pub server: ServerConfig,
    /// 外部服务配置
    pub providers: ProvidersConfig,
    /// 验证流程配置
    pub verification: VerificationConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    ///
    /// Gemini API 密钥没有默认值，必须从配置文件或环境变量注入。
    pub fn development() -> Self {
        Self {
            database: DatabaseConfig {
                path: PathBuf::from("./queries.db"),
                max_connections: 5,
            },
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 5000,
            },
            providers: ProvidersConfig {
                semantic_scholar: SearchProviderConfig {
                    base_url: "https://api.semanticscholar.org".into(),
                    timeout: 10,
                },
                crossref: SearchProviderConfig {
                    base_url: "https://api.crossref.org".into(),
                    timeout: 10,
                },
                gemini: GeminiConfig {
                    base_url: "https://generativelanguage.googleapis.com".into(),
                    model: "gemini-2.5-flash".into(),
                    api_key: String::new(),
                    timeout: 10,
                },
            },
            verification: VerificationConfig { paper_limit: 20 },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
            },
            app_name: "authentica".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config
    }
}
