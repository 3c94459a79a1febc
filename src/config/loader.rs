//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `DATABASE_URL` / `PORT` 环境变量
//! 2. `HOLONET_` 前缀环境变量
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `DATABASE_URL=sqlite:/var/lib/holonet.db?mode=rwc`
/// - `PORT=8080`
/// - `HOLONET_SERVER__HOST=127.0.0.1`
/// - `HOLONET_AUTH__DEFAULT_USER_ID=2`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    build_config(
        config_path,
        std::env::var("DATABASE_URL").ok(),
        std::env::var("PORT").ok(),
    )
}

fn build_config(
    config_path: Option<&Path>,
    database_url: Option<String>,
    port: Option<String>,
) -> Result<AppConfig, ConfigError> {
    // 1. 默认值（最低优先级）
    let mut builder = Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("database.url", "sqlite:/tmp/test.db?mode=rwc")?
        .set_default("database.max_connections", 5)?
        .set_default("auth.default_user_id", 1)?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量，层级分隔符 __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix("HOLONET")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 部署平台约定的变量
    builder = builder
        .set_override_option("database.url", database_url)?
        .set_override_option("server.port", port)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 只编译了 SQLite 驱动
    if !config.database.url.starts_with("sqlite:") {
        return Err(ConfigError::ValidationError(format!(
            "Unsupported database URL (expected sqlite:...): {}",
            config.database.url
        )));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max_connections cannot be 0".to_string(),
        ));
    }

    if config.auth.default_user_id < 1 {
        return Err(ConfigError::ValidationError(
            "Default user id must be positive".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Database: {}", config.database.url);
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Acting User: {}", config.auth.default_user_id);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
