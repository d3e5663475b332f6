// ==========================================
// V-Replenishment 补货清单生成器 - 库存索引
// ==========================================
// 职责: 标准化 SKU → 库存条目 的只读查找表
// 生命周期: 每次加载库存表时重建,单次对账期间不可变
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 库存条目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub stock_quantity: f64,
    pub product_name: String,
    pub brand: String,
    pub category: String,
    pub retail_price: String,
}

/// 库存索引（键: 标准化 SKU）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryIndex {
    entries: HashMap<String, InventoryEntry>,
}

impl InventoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入条目;重复 SKU 后写覆盖
    pub(crate) fn upsert(&mut self, sku: String, entry: InventoryEntry) {
        self.entries.insert(sku, entry);
    }

    pub fn get(&self, sku: &str) -> Option<&InventoryEntry> {
        self.entries.get(sku)
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.entries.contains_key(sku)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
