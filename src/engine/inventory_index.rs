// ==========================================
// V-Replenishment 补货清单生成器 - 库存索引构建器
// ==========================================
// 输入: 库存表 RawRecord 序列
// 输出: InventoryIndex（SKU → 库存数量 + 商品信息）
// ==========================================

use crate::domain::inventory::{InventoryEntry, InventoryIndex};
use crate::domain::record::RawRecord;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::field_mapper::{FieldMapper, LogicalField};
use tracing::{debug, info};

pub struct InventoryIndexBuilder<'a> {
    mapper: &'a FieldMapper,
    cleaner: DataCleaner,
}

impl<'a> InventoryIndexBuilder<'a> {
    pub fn new(mapper: &'a FieldMapper, cleaner: DataCleaner) -> Self {
        Self { mapper, cleaner }
    }

    /// 构建库存索引
    ///
    /// - SKU 为空的行跳过
    /// - 库存无法解析时记为 0
    /// - 重复 SKU 后写覆盖
    pub fn build(&self, records: &[RawRecord]) -> InventoryIndex {
        let mut index = InventoryIndex::new();
        let mut skipped = 0usize;

        for (row_idx, record) in records.iter().enumerate() {
            let sku = self
                .cleaner
                .normalize_sku(&self.mapper.get_string(record, LogicalField::InventorySku));
            if sku.is_empty() {
                debug!(row = row_idx + 1, "库存行缺少 SKU,已跳过");
                skipped += 1;
                continue;
            }

            let entry = InventoryEntry {
                stock_quantity: self
                    .cleaner
                    .parse_stock(&self.mapper.get_string(record, LogicalField::InventoryStock)),
                product_name: self
                    .mapper
                    .get_string(record, LogicalField::InventoryProductName),
                brand: self.mapper.get_string(record, LogicalField::InventoryBrand),
                category: self.mapper.get_string(record, LogicalField::InventoryCategory),
                retail_price: self
                    .mapper
                    .get_string(record, LogicalField::InventoryRetailPrice),
            };

            index.upsert(sku, entry);
        }

        info!(skus = index.len(), rows = records.len(), skipped, "库存映射创建完成");
        index
    }
}
