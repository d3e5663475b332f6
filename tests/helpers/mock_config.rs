// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use std::collections::HashMap;
use v_replenishment::config::ReplenishConfigReader;
use v_replenishment::importer::LogicalField;
use v_replenishment::SkuNormalization;

/// Mock 配置结构
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    pub sku_normalization: SkuNormalization,
    pub extra_aliases: HashMap<LogicalField, Vec<String>>,
    pub store_name: String,
}

impl MockConfig {
    /// 大小写不敏感的 SKU 匹配
    pub fn uppercase() -> Self {
        Self {
            sku_normalization: SkuNormalization::TrimUppercase,
            ..Self::default()
        }
    }

    pub fn with_alias(mut self, field: LogicalField, alias: &str) -> Self {
        self.extra_aliases
            .entry(field)
            .or_default()
            .push(alias.to_string());
        self
    }

    pub fn with_store(mut self, name: &str) -> Self {
        self.store_name = name.to_string();
        self
    }
}

impl ReplenishConfigReader for MockConfig {
    fn sku_normalization(&self) -> SkuNormalization {
        self.sku_normalization
    }

    fn extra_aliases(&self) -> HashMap<LogicalField, Vec<String>> {
        self.extra_aliases.clone()
    }

    fn store_name(&self) -> String {
        self.store_name.clone()
    }
}
