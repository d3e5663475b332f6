// ==========================================
// V-Replenishment 补货清单生成器 - 引擎编排器
// ==========================================
// 用途: 协调格式校验 → 库存索引 → 对账 → 排序 的执行顺序
// 红线: 只处理完整加载的数据集;单线程同步执行
// ==========================================

use crate::config::ReplenishConfigReader;
use crate::domain::inventory::InventoryIndex;
use crate::domain::record::RawRecord;
use crate::domain::replenishment::{ReconcileCounters, ReplenishmentItem, ReplenishmentStats};
use crate::domain::types::DatasetKind;
use crate::engine::inventory_index::InventoryIndexBuilder;
use crate::engine::priority::PrioritySorter;
use crate::engine::reconciler::ReconciliationEngine;
use crate::engine::search::{self, ReplenishmentView};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::{AliasTable, FieldMapper};
use crate::importer::format_validator::FormatValidator;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

// ==========================================
// ReplenishmentRun - 单次对账结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct ReplenishmentRun {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub store_name: String,
    /// 库存索引中的 SKU 数
    pub inventory_size: usize,
    /// 标准清单（已排序）
    pub items: Vec<ReplenishmentItem>,
    pub counters: ReconcileCounters,
}

impl ReplenishmentRun {
    /// 标准清单统计
    pub fn stats(&self) -> ReplenishmentStats {
        ReplenishmentStats::from_items(&self.items)
    }

    /// 按关键字派生视图
    pub fn search(&self, query: &str) -> ReplenishmentView<'_> {
        search::filter(&self.items, query)
    }

    /// 批次号: 标准顺序下第一个非空批次
    pub fn batch_number(&self) -> Option<&str> {
        self.items
            .iter()
            .map(|item| item.details.batch_number.as_str())
            .find(|batch| !batch.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ==========================================
// ReplenishmentOrchestrator - 引擎编排器
// ==========================================
pub struct ReplenishmentOrchestrator<C>
where
    C: ReplenishConfigReader,
{
    config: Arc<C>,
    mapper: FieldMapper,
    cleaner: DataCleaner,
    sorter: PrioritySorter,
}

impl<C> ReplenishmentOrchestrator<C>
where
    C: ReplenishConfigReader,
{
    /// 创建新的编排器实例
    ///
    /// 别名表与 SKU 标准化方式在创建时从配置读取
    pub fn new(config: Arc<C>) -> Self {
        let table = AliasTable::default().with_extra(&config.extra_aliases());
        Self {
            mapper: FieldMapper::new(table),
            cleaner: DataCleaner::new(config.sku_normalization()),
            sorter: PrioritySorter::new(),
            config,
        }
    }

    /// 校验单个数据集格式
    pub fn validate(&self, kind: DatasetKind, records: &[RawRecord]) -> ImportResult<()> {
        FormatValidator::new(self.mapper.alias_table()).validate(kind, records)
    }

    /// 构建库存索引
    pub fn build_index(&self, inventory: &[RawRecord]) -> InventoryIndex {
        InventoryIndexBuilder::new(&self.mapper, self.cleaner).build(inventory)
    }

    /// 基于已构建的库存索引对账并排序
    pub fn reconcile(&self, arrival: &[RawRecord], index: &InventoryIndex) -> ReplenishmentRun {
        // ==========================================
        // 步骤1: 对账
        // ==========================================
        debug!("步骤1: 到货数据对账");
        let outcome = ReconciliationEngine::new(&self.mapper, self.cleaner).reconcile(arrival, index);
        let mut items = outcome.items;

        // ==========================================
        // 步骤2: 排序（新品优先,然后按库存从低到高）
        // ==========================================
        debug!("步骤2: 补货清单排序");
        self.sorter.sort(&mut items);

        ReplenishmentRun {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            store_name: self.config.store_name(),
            inventory_size: index.len(),
            items,
            counters: outcome.counters,
        }
    }

    /// 执行完整流程
    ///
    /// # 返回
    /// - Ok(ReplenishmentRun): 排序后的标准清单（可能为空）
    /// - Err(InvalidDatasetFormat): 列出所有格式无效的数据集
    pub fn run(&self, inventory: &[RawRecord], arrival: &[RawRecord]) -> ImportResult<ReplenishmentRun> {
        info!(
            inventory_rows = inventory.len(),
            arrival_rows = arrival.len(),
            "开始生成补货清单"
        );

        FormatValidator::new(self.mapper.alias_table()).validate_pair(inventory, arrival)?;

        let index = self.build_index(inventory);
        let run = self.reconcile(arrival, &index);

        info!(
            run_id = %run.run_id,
            total = run.items.len(),
            "补货清单生成结束"
        );
        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigManager, ReplenishConfig};
    use crate::domain::types::SkuNormalization;

    fn orchestrator(config: ReplenishConfig) -> ReplenishmentOrchestrator<ConfigManager> {
        ReplenishmentOrchestrator::new(Arc::new(ConfigManager::new(config)))
    }

    #[test]
    fn test_run_sorts_new_first() {
        let inventory = vec![
            RawRecord::new().with("SKU", "A1").with("总库存", "0"),
            RawRecord::new().with("SKU", "A2").with("总库存", "5"),
        ];
        let arrival = vec![
            RawRecord::new().with("Barcode", "A1").with("Qty", "3"),
            RawRecord::new().with("Barcode", "A2").with("Qty", "2"),
            RawRecord::new().with("Barcode", "A3").with("Qty", "1"),
        ];

        let run = orchestrator(ReplenishConfig::default())
            .run(&inventory, &arrival)
            .unwrap();
        let skus: Vec<&str> = run.items.iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(skus, vec!["A3", "A1"]);
        assert_eq!(run.inventory_size, 2);
    }

    #[test]
    fn test_uppercase_normalization_from_config() {
        let config = ReplenishConfig {
            sku_normalization: SkuNormalization::TrimUppercase,
            ..Default::default()
        };
        let inventory = vec![RawRecord::new().with("SKU", "ab1").with("总库存", "4")];
        let arrival = vec![RawRecord::new().with("Barcode", "AB1").with("Qty", "1")];

        let run = orchestrator(config).run(&inventory, &arrival).unwrap();
        // 大写匹配后库存 > 0,被排除
        assert!(run.is_empty());
        assert_eq!(run.counters.excluded_in_stock, 1);
    }

    #[test]
    fn test_batch_number_first_non_empty() {
        let arrival = vec![
            RawRecord::new().with("Barcode", "N1").with("Qty", "1"),
            RawRecord::new().with("Barcode", "N2").with("Qty", "1").with("Batch", "B-42"),
        ];
        let inventory = vec![RawRecord::new().with("SKU", "X").with("总库存", "1")];

        let run = orchestrator(ReplenishConfig::default())
            .run(&inventory, &arrival)
            .unwrap();
        assert_eq!(run.batch_number(), Some("B-42"));
    }
}
