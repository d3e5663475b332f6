// ==========================================
// V-Replenishment 补货清单生成器 - 字段映射器
// ==========================================
// 职责: 逻辑字段 → 表头别名表 + 按别名优先级取值
// 红线: 别名只在别名表中维护,调用处不得内联特殊处理
// ==========================================

use crate::domain::record::RawRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// LogicalField - 逻辑字段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogicalField {
    // ===== 库存表 =====
    InventorySku,
    InventoryStock,
    InventoryProductName,
    InventoryBrand,
    InventoryCategory,
    InventoryRetailPrice,

    // ===== 到货表 =====
    ArrivalBarcode,
    ArrivalOrderQty,
    ArrivalGender,
    ArrivalItemNumber,
    ArrivalProductName,
    ArrivalColor,
    ArrivalSize,
    ArrivalBrand,
    ArrivalCategory,
    ArrivalRetailPrice,
    ArrivalBatchNumber,
}

impl LogicalField {
    pub const ALL: [LogicalField; 17] = [
        LogicalField::InventorySku,
        LogicalField::InventoryStock,
        LogicalField::InventoryProductName,
        LogicalField::InventoryBrand,
        LogicalField::InventoryCategory,
        LogicalField::InventoryRetailPrice,
        LogicalField::ArrivalBarcode,
        LogicalField::ArrivalOrderQty,
        LogicalField::ArrivalGender,
        LogicalField::ArrivalItemNumber,
        LogicalField::ArrivalProductName,
        LogicalField::ArrivalColor,
        LogicalField::ArrivalSize,
        LogicalField::ArrivalBrand,
        LogicalField::ArrivalCategory,
        LogicalField::ArrivalRetailPrice,
        LogicalField::ArrivalBatchNumber,
    ];

    /// 内置别名（按优先级排列）
    fn builtin_aliases(&self) -> &'static [&'static str] {
        match self {
            LogicalField::InventorySku => &["规格编码", "SKU", "Barcode", "商品编码"],
            LogicalField::InventoryStock => &["总库存", "可用库存", "库存数", "库存数量", "Stock"],
            LogicalField::InventoryProductName => &["商品名称", "产品名称", "Product name"],
            LogicalField::InventoryBrand => &["商品品牌", "品牌", "Brand"],
            LogicalField::InventoryCategory => &["商品分类", "分类", "Category"],
            LogicalField::InventoryRetailPrice => &["零售价", "价格", "Price", "MSRP"],
            LogicalField::ArrivalBarcode => &["Barcode", "SKU", "规格编码", "条码"],
            LogicalField::ArrivalOrderQty => &["Order Qty", "到货数量", "数量", "Qty"],
            LogicalField::ArrivalGender => &["ProductGender", "性别", "Gender"],
            LogicalField::ArrivalItemNumber => &["Item Number", "款号", "货号"],
            LogicalField::ArrivalProductName => &["Product name", "商品名称", "产品名称"],
            LogicalField::ArrivalColor => &["Color", "颜色", "colour"],
            LogicalField::ArrivalSize => &["Size", "尺码", "规格"],
            LogicalField::ArrivalBrand => &["Brand", "品牌", "商品品牌"],
            LogicalField::ArrivalCategory => &["Category", "分类", "商品分类"],
            LogicalField::ArrivalRetailPrice => &["Retail Price", "MSRP", "零售价"],
            LogicalField::ArrivalBatchNumber => &["Order #", "Order No", "Batch", "批次"],
        }
    }
}

// ==========================================
// AliasTable - 别名表
// ==========================================
#[derive(Debug, Clone)]
pub struct AliasTable {
    groups: HashMap<LogicalField, Vec<String>>,
}

impl Default for AliasTable {
    fn default() -> Self {
        let groups = LogicalField::ALL
            .iter()
            .map(|field| {
                let aliases = field
                    .builtin_aliases()
                    .iter()
                    .map(|a| a.to_string())
                    .collect();
                (*field, aliases)
            })
            .collect();
        Self { groups }
    }
}

impl AliasTable {
    /// 追加自定义别名（排在内置别名之后,重复项忽略）
    pub fn with_extra(mut self, extra: &HashMap<LogicalField, Vec<String>>) -> Self {
        for (field, aliases) in extra {
            let group = self.groups.entry(*field).or_default();
            for alias in aliases {
                let alias = alias.trim();
                if !alias.is_empty() && !group.iter().any(|a| a == alias) {
                    group.push(alias.to_string());
                }
            }
        }
        self
    }

    pub fn aliases(&self, field: LogicalField) -> &[String] {
        self.groups.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ==========================================
// 字段解析
// ==========================================

/// 按别名顺序取第一个非空值;全部缺失时返回空字符串
///
/// 仅含空白的单元格同样视为空,继续尝试下一个别名
/// （不同于"字符串化后非空即命中"的字面规则: `{Barcode: "   ", SKU: "N9"}` 解析为 "N9"）
pub fn resolve<S: AsRef<str>>(record: &RawRecord, aliases: &[S]) -> String {
    aliases
        .iter()
        .filter_map(|alias| record.get(alias.as_ref()))
        .find(|cell| !cell.is_blank())
        .map(|cell| cell.as_text().trim().to_string())
        .unwrap_or_default()
}

// ==========================================
// FieldMapper - 字段映射器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct FieldMapper {
    table: AliasTable,
}

impl FieldMapper {
    pub fn new(table: AliasTable) -> Self {
        Self { table }
    }

    pub fn alias_table(&self) -> &AliasTable {
        &self.table
    }

    /// 提取逻辑字段值（缺失为空字符串）
    pub fn get_string(&self, record: &RawRecord, field: LogicalField) -> String {
        resolve(record, self.table.aliases(field))
    }

    /// 到货表优先,为空时回落到库存表值
    pub fn get_with_fallback(
        &self,
        record: &RawRecord,
        field: LogicalField,
        fallback: Option<&str>,
    ) -> String {
        let value = self.get_string(record, field);
        if value.is_empty() {
            fallback.unwrap_or_default().to_string()
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::CellValue;

    #[test]
    fn test_resolve_first_present_alias() {
        let record = RawRecord::new()
            .with("SKU", "B-2")
            .with("规格编码", "A-1");
        assert_eq!(resolve(&record, &["规格编码", "SKU"]), "A-1");
        assert_eq!(resolve(&record, &["SKU", "规格编码"]), "B-2");
    }

    #[test]
    fn test_resolve_skips_blank_values() {
        let record = RawRecord::new()
            .with("Barcode", "")
            .with("SKU", CellValue::Blank)
            .with("条码", "  X9  ");
        assert_eq!(resolve(&record, &["Barcode", "SKU", "条码"]), "X9");
    }

    #[test]
    fn test_resolve_whitespace_only_falls_through() {
        let record = RawRecord::new().with("Barcode", "   ").with("SKU", "N9");
        assert_eq!(resolve(&record, &["Barcode", "SKU"]), "N9");
    }

    #[test]
    fn test_resolve_missing_is_empty() {
        let record = RawRecord::new().with("Other", "value");
        assert_eq!(resolve(&record, &["Barcode"]), "");
        assert_eq!(resolve::<&str>(&record, &[]), "");
    }

    #[test]
    fn test_resolve_coerces_numbers() {
        let record = RawRecord::new().with("Order Qty", 3.0);
        assert_eq!(resolve(&record, &["Order Qty"]), "3");
    }

    #[test]
    fn test_extra_aliases_appended_after_builtins() {
        let mut extra = HashMap::new();
        extra.insert(
            LogicalField::ArrivalBarcode,
            vec!["EAN".to_string(), "SKU".to_string(), " ".to_string()],
        );
        let table = AliasTable::default().with_extra(&extra);
        let aliases = table.aliases(LogicalField::ArrivalBarcode);
        assert_eq!(aliases.last().map(String::as_str), Some("EAN"));
        assert_eq!(aliases.iter().filter(|a| *a == "SKU").count(), 1);
    }

    #[test]
    fn test_fallback_only_when_arrival_empty() {
        let mapper = FieldMapper::default();
        let record = RawRecord::new().with("Product name", "Arrival Tee");
        assert_eq!(
            mapper.get_with_fallback(&record, LogicalField::ArrivalProductName, Some("Inventory Tee")),
            "Arrival Tee"
        );
        assert_eq!(
            mapper.get_with_fallback(&record, LogicalField::ArrivalBrand, Some("Acme")),
            "Acme"
        );
        assert_eq!(
            mapper.get_with_fallback(&record, LogicalField::ArrivalColor, None),
            ""
        );
    }
}
