// ==========================================
// V-Replenishment 补货清单生成器 - 配置读取 Trait
// ==========================================
// 职责: 定义对账引擎所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::domain::types::SkuNormalization;
use crate::importer::field_mapper::LogicalField;
use std::collections::HashMap;

// ==========================================
// ReplenishConfigReader Trait
// ==========================================
// 实现者: ConfigManager（JSON 配置文件）
pub trait ReplenishConfigReader: Send + Sync {
    /// SKU 标准化方式
    ///
    /// # 默认值
    /// - TRIM（仅去空白,大小写敏感）
    fn sku_normalization(&self) -> SkuNormalization;

    /// 自定义表头别名（追加在内置别名之后）
    ///
    /// # 默认值
    /// - 空
    fn extra_aliases(&self) -> HashMap<LogicalField, Vec<String>>;

    /// 门店名称（清单抬头）
    ///
    /// # 默认值
    /// - 空字符串
    fn store_name(&self) -> String;
}
