// ==========================================
// V-Replenishment 补货清单生成器 - 对账引擎
// ==========================================
// 职责: 到货行 × 库存索引 → 补货条目
// 输入: 到货表 RawRecord 序列 + InventoryIndex
// 输出: 补货清单（未排序）+ 对账计数
// 红线: 只纳入新品或库存恰好为 0 的商品
// ==========================================

use crate::domain::inventory::{InventoryEntry, InventoryIndex};
use crate::domain::record::RawRecord;
use crate::domain::replenishment::{ItemDetails, ReconcileCounters, ReplenishmentItem};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::field_mapper::{FieldMapper, LogicalField};
use tracing::{debug, info};

/// 对账结果
#[derive(Debug, Clone, Default)]
pub struct ReconcileOutcome {
    pub items: Vec<ReplenishmentItem>,
    pub counters: ReconcileCounters,
}

pub struct ReconciliationEngine<'a> {
    mapper: &'a FieldMapper,
    cleaner: DataCleaner,
}

impl<'a> ReconciliationEngine<'a> {
    pub fn new(mapper: &'a FieldMapper, cleaner: DataCleaner) -> Self {
        Self { mapper, cleaner }
    }

    /// 逐行对账
    ///
    /// 1. 条码为空 → 跳过
    /// 2. 到货数量 <= 0（含无法解析）→ 跳过
    /// 3. 库存 > 0 → 按业务规则排除
    /// 4. 其余行生成补货条目
    pub fn reconcile(&self, arrivals: &[RawRecord], index: &InventoryIndex) -> ReconcileOutcome {
        let mut outcome = ReconcileOutcome::default();

        for (row_idx, record) in arrivals.iter().enumerate() {
            let row = row_idx + 1;

            let sku = self
                .cleaner
                .normalize_sku(&self.mapper.get_string(record, LogicalField::ArrivalBarcode));
            if sku.is_empty() {
                debug!(row, "到货行缺少条码,已跳过");
                outcome.counters.skipped_missing_sku += 1;
                continue;
            }

            let order_quantity = self
                .cleaner
                .parse_quantity(&self.mapper.get_string(record, LogicalField::ArrivalOrderQty));
            if order_quantity <= 0 {
                debug!(row, sku = %sku, order_quantity, "到货数量 <= 0,已跳过");
                outcome.counters.skipped_non_positive_qty += 1;
                continue;
            }

            let entry = index.get(&sku);
            let is_new = entry.is_none();
            let current_stock = entry.map(|e| e.stock_quantity).unwrap_or(0.0);

            if !is_new && current_stock != 0.0 {
                outcome.counters.excluded_in_stock += 1;
                continue;
            }

            if is_new {
                outcome.counters.new_count += 1;
            }
            if current_stock == 0.0 {
                outcome.counters.zero_stock_count += 1;
            }

            let details = self.resolve_details(record, entry);

            outcome.items.push(ReplenishmentItem::new(
                sku,
                order_quantity,
                current_stock,
                is_new,
                details,
            ));
        }

        info!(
            total = outcome.items.len(),
            new_products = outcome.counters.new_count,
            zero_stock = outcome.counters.zero_stock_count,
            "补货清单生成完成"
        );
        outcome
    }

    /// 解析描述性字段: 到货表优先,为空时回落到库存表（名称/品牌/分类/零售价）
    fn resolve_details(&self, record: &RawRecord, inventory: Option<&InventoryEntry>) -> ItemDetails {
        let name = inventory.map(|e| e.product_name.as_str());
        let brand = inventory.map(|e| e.brand.as_str());
        let category = inventory.map(|e| e.category.as_str());
        let price = inventory.map(|e| e.retail_price.as_str());

        ItemDetails {
            gender: self.mapper.get_string(record, LogicalField::ArrivalGender),
            item_number: self.mapper.get_string(record, LogicalField::ArrivalItemNumber),
            product_name: self
                .mapper
                .get_with_fallback(record, LogicalField::ArrivalProductName, name),
            color: self.mapper.get_string(record, LogicalField::ArrivalColor),
            size: self.mapper.get_string(record, LogicalField::ArrivalSize),
            brand: self
                .mapper
                .get_with_fallback(record, LogicalField::ArrivalBrand, brand),
            category: self
                .mapper
                .get_with_fallback(record, LogicalField::ArrivalCategory, category),
            retail_price: self
                .mapper
                .get_with_fallback(record, LogicalField::ArrivalRetailPrice, price),
            batch_number: self.mapper.get_string(record, LogicalField::ArrivalBatchNumber),
        }
    }
}
