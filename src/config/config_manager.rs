// ==========================================
// V-Replenishment 补货清单生成器 - 配置管理器
// ==========================================
// 职责: 配置加载、查询
// 存储: JSON 配置文件（缺失时使用默认值）
// ==========================================

use crate::config::replenish_config_trait::ReplenishConfigReader;
use crate::domain::types::SkuNormalization;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::LogicalField;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const SKU_NORMALIZATION: &str = "sku_normalization";
    pub const EXTRA_ALIASES: &str = "extra_aliases";
    pub const LOCALE: &str = "locale";
    pub const STORE_NAME: &str = "store_name";
}

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

// ==========================================
// ReplenishConfig - 配置内容
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplenishConfig {
    pub sku_normalization: SkuNormalization,
    pub extra_aliases: HashMap<LogicalField, Vec<String>>,
    pub locale: String,
    pub store_name: String,
}

impl Default for ReplenishConfig {
    fn default() -> Self {
        Self {
            sku_normalization: SkuNormalization::Trim,
            extra_aliases: HashMap::new(),
            locale: "zh-CN".to_string(),
            store_name: String::new(),
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: ReplenishConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用已有配置创建
    pub fn new(config: ReplenishConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// 默认配置文件路径: <config_dir>/v-replenishment/config.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("v-replenishment").join("config.json"))
    }

    /// 从配置文件加载
    ///
    /// # 返回
    /// - 文件不存在: 默认配置
    /// - 读取失败: ConfigReadError
    /// - 内容非法: ConfigValueError
    pub fn load<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "配置文件不存在,使用默认配置");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = Self::parse(&raw)?;
        info!(
            path = %path.display(),
            sku_normalization = %config.sku_normalization,
            locale = %config.locale,
            "配置加载完成"
        );

        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 解析并校验配置内容
    pub fn parse(raw: &str) -> ImportResult<ReplenishConfig> {
        let config: ReplenishConfig = serde_json::from_str(raw)?;

        if !SUPPORTED_LOCALES.contains(&config.locale.as_str()) {
            return Err(ImportError::ConfigValueError {
                key: config_keys::LOCALE.to_string(),
                value: config.locale.clone(),
                message: format!("仅支持 {}", SUPPORTED_LOCALES.join(" / ")),
            });
        }

        Ok(config)
    }

    pub fn config(&self) -> &ReplenishConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    /// 覆盖语言（命令行参数优先于配置文件）
    pub fn set_locale(&mut self, locale: &str) -> ImportResult<()> {
        if !SUPPORTED_LOCALES.contains(&locale) {
            return Err(ImportError::ConfigValueError {
                key: config_keys::LOCALE.to_string(),
                value: locale.to_string(),
                message: format!("仅支持 {}", SUPPORTED_LOCALES.join(" / ")),
            });
        }
        self.config.locale = locale.to_string();
        Ok(())
    }
}

impl ReplenishConfigReader for ConfigManager {
    fn sku_normalization(&self) -> SkuNormalization {
        self.config.sku_normalization
    }

    fn extra_aliases(&self) -> HashMap<LogicalField, Vec<String>> {
        self.config.extra_aliases.clone()
    }

    fn store_name(&self) -> String {
        self.config.store_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_uses_defaults() {
        let manager = ConfigManager::load("/definitely/not/here/config.json").unwrap();
        assert_eq!(manager.config(), &ReplenishConfig::default());
        assert!(manager.source().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
                "{}": "TRIM_UPPERCASE",
                "{}": {{ "ARRIVAL_BARCODE": ["EAN"] }},
                "{}": "北京三里屯"
            }}"#,
            config_keys::SKU_NORMALIZATION,
            config_keys::EXTRA_ALIASES,
            config_keys::STORE_NAME
        )
        .unwrap();

        let manager = ConfigManager::load(file.path()).unwrap();
        assert_eq!(manager.sku_normalization(), SkuNormalization::TrimUppercase);
        assert_eq!(
            manager.extra_aliases().get(&LogicalField::ArrivalBarcode),
            Some(&vec!["EAN".to_string()])
        );
        assert_eq!(manager.store_name(), "北京三里屯");
        assert_eq!(manager.locale(), "zh-CN");
        assert_eq!(manager.source(), Some(file.path()));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{ not json").unwrap();
        let result = ConfigManager::load(file.path());
        assert!(matches!(result, Err(ImportError::ConfigValueError { .. })));
    }

    #[test]
    fn test_unsupported_locale_rejected() {
        let result = ConfigManager::parse(r#"{ "locale": "fr" }"#);
        assert!(matches!(
            result,
            Err(ImportError::ConfigValueError { ref key, .. }) if key == config_keys::LOCALE
        ));

        let mut manager = ConfigManager::default();
        assert!(manager.set_locale("de").is_err());
        assert!(manager.set_locale("en").is_ok());
        assert_eq!(manager.locale(), "en");
    }
}
