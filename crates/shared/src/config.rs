//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::observability::ObservabilityConfig;

/// 默认单次调用生成的记录数量
pub const DEFAULT_RECORD_COUNT: usize = 10_000;

/// 单次调用允许的最大记录数量
pub const DEFAULT_MAX_RECORD_COUNT: usize = 1_000_000;

/// 交易记录生成配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// 单次调用生成的记录数量，调用事件中的 num_records 可覆盖
    pub record_count: usize,
    /// 单次调用记录数量上限，超过时拒绝调用
    pub max_record_count: usize,
    /// 交易时间最多回溯的天数（含边界）
    pub max_days_back: u32,
    pub min_quantity: u32,
    pub max_quantity: u32,
    /// 顾客姓名、邮箱使用的 fake 区域设置
    pub locale: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            max_record_count: DEFAULT_MAX_RECORD_COUNT,
            max_days_back: 100,
            min_quantity: 1,
            max_quantity: 3,
            locale: "en".to_string(),
        }
    }
}

/// 参考数据文件配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReferenceDataConfig {
    pub stores_path: String,
    pub products_path: String,
}

impl Default for ReferenceDataConfig {
    fn default() -> Self {
        Self {
            stores_path: "stores.json".to_string(),
            products_path: "products.json".to_string(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub generator: GenerationConfig,
    pub reference_data: ReferenceDataConfig,
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "sales-generator".to_string(),
            environment: "development".to_string(),
            generator: GenerationConfig::default(),
            reference_data: ReferenceDataConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. 内置默认值
    /// 2. config/default.toml（默认配置）
    /// 3. config/{environment}.toml（环境特定配置）
    /// 4. 环境变量（SALES__ 前缀，如 SALES__GENERATOR__RECORD_COUNT -> generator.record_count）
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        // .env 文件不存在时忽略
        let _ = dotenvy::dotenv();

        let env = std::env::var("SALES_ENV").unwrap_or_else(|_| "development".to_string());
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        Self::load_from(service_name, &env, Path::new(&config_dir))
    }

    /// 从指定目录加载配置
    pub fn load_from(service_name: &str, env: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", env))).required(false))
            // 嵌套字段名本身含下划线，因此层级分隔符使用双下划线
            .add_source(
                Environment::with_prefix("SALES")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.generator.record_count, 10_000);
        assert_eq!(config.generator.max_days_back, 100);
        assert_eq!(config.generator.min_quantity, 1);
        assert_eq!(config.generator.max_quantity, 3);
        assert_eq!(config.reference_data.stores_path, "stores.json");
        assert_eq!(config.reference_data.products_path, "products.json");
        assert_eq!(config.generator.max_record_count, 1_000_000);
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from("sales-generator", "test", dir.path()).unwrap();

        assert_eq!(config.service_name, "sales-generator");
        assert_eq!(config.environment, "test");
        assert_eq!(config.generator.locale, "en");
    }

    #[test]
    fn test_environment_file_overrides_default_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[generator]\nrecord_count = 500\nlocale = \"fr_fr\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("staging.toml"),
            "[generator]\nrecord_count = 42\nmax_record_count = 100\n\n[reference_data]\nstores_path = \"data/stores.json\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from("sales-generator", "staging", dir.path()).unwrap();

        assert_eq!(config.generator.record_count, 42);
        assert_eq!(config.generator.max_record_count, 100);
        assert_eq!(config.generator.locale, "fr_fr");
        // 未覆盖的字段保留默认值
        assert_eq!(config.generator.max_days_back, 100);
        assert_eq!(config.reference_data.stores_path, "data/stores.json");
        assert_eq!(config.reference_data.products_path, "products.json");
    }
}
