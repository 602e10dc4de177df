//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::observability::ObservabilityConfig;

/// 徽章报告配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// 统计快照文件路径，`-` 表示从标准输入读取
    pub stats_path: Option<String>,
    /// 是否输出格式化（缩进）的 JSON
    pub pretty: bool,
    /// 默认输出视图：all / badges / earned / summary / grouped / next
    pub view: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            stats_path: None,
            pretty: true,
            view: "all".to_string(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub observability: ObservabilityConfig,
    pub report: ReportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "badge-engine".to_string(),
            environment: "development".to_string(),
            observability: ObservabilityConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. config/default.toml（默认配置）
    /// 2. config/{environment}.toml（环境特定配置）
    /// 3. config/{service_name}.toml（服务特定配置）
    /// 4. 环境变量（BADGE_ 前缀，嵌套用双下划线，如 BADGE_REPORT__STATS_PATH -> report.stats_path）
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("BADGE_ENV").unwrap_or_else(|_| "development".to_string());
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        Self::load_from(Path::new(&config_dir), service_name, &env)
    }

    /// 从指定目录加载配置
    pub fn load_from(config_dir: &Path, service_name: &str, env: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // 默认配置
            .set_default("service_name", service_name)?
            .set_default("environment", env)?
            // 加载默认配置文件
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // 加载环境特定配置
            .add_source(File::from(config_dir.join(format!("{}.toml", env))).required(false))
            // 加载服务特定配置（如 badge-engine.toml）
            .add_source(
                File::from(config_dir.join(format!("{}.toml", service_name))).required(false),
            )
            // 环境变量覆盖
            .add_source(
                Environment::with_prefix("BADGE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.service_name, "badge-engine");
        assert_eq!(config.report.view, "all");
        assert!(config.report.pretty);
        assert!(config.report.stats_path.is_none());
        assert!(!config.is_production());
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let dir = std::env::temp_dir().join("badge-config-missing-dir");
        let config = AppConfig::load_from(&dir, "badge-report", "test").unwrap();

        assert_eq!(config.service_name, "badge-report");
        assert_eq!(config.environment, "test");
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.report.view, "all");
    }

    #[test]
    fn test_service_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("badge-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("default.toml"),
            "[report]\nview = \"summary\"\npretty = true\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("badge-report.toml"),
            "[report]\npretty = false\nstats_path = \"stats.json\"\n\n[observability]\nlog_format = \"json\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&dir, "badge-report", "production").unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(config.is_production());
        assert_eq!(config.report.view, "summary");
        assert!(!config.report.pretty);
        assert_eq!(config.report.stats_path.as_deref(), Some("stats.json"));
        assert_eq!(config.observability.log_format, "json");
    }
}
