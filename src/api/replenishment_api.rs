// ==========================================
// V-Replenishment 补货清单生成器 - 补货清单 API
// ==========================================
// 职责: 数据集加载与校验、生成补货清单、搜索过滤、统计
// 状态: 每个 API 实例持有一次会话（库存索引 / 到货数据 / 清单 / 当前查询）
// ==========================================

use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::config::ReplenishConfigReader;
use crate::domain::inventory::InventoryIndex;
use crate::domain::record::RawRecord;
use crate::domain::replenishment::ReplenishmentStats;
use crate::domain::types::DatasetKind;
use crate::engine::orchestrator::{ReplenishmentOrchestrator, ReplenishmentRun};
use crate::engine::search::ReplenishmentView;
use crate::importer::file_parser::UniversalFileParser;

// ==========================================
// ReplenishmentApi - 补货清单 API
// ==========================================

/// 补货清单API
///
/// 职责：
/// 1. 数据集加载（加载时即做格式校验,失败的数据集会被清空）
/// 2. 生成标准清单（库存索引随库存表加载构建,更换库存表时重建）
/// 3. 搜索过滤（视图统计随查询重算）
pub struct ReplenishmentApi<C>
where
    C: ReplenishConfigReader,
{
    orchestrator: ReplenishmentOrchestrator<C>,
    inventory_index: Option<InventoryIndex>,
    arrival: Option<Vec<RawRecord>>,
    run: Option<ReplenishmentRun>,
    query: String,
}

impl<C> ReplenishmentApi<C>
where
    C: ReplenishConfigReader,
{
    pub fn new(config: Arc<C>) -> Self {
        Self {
            orchestrator: ReplenishmentOrchestrator::new(config),
            inventory_index: None,
            arrival: None,
            run: None,
            query: String::new(),
        }
    }

    // ==========================================
    // 数据集加载
    // ==========================================

    /// 加载库存表
    ///
    /// # 返回
    /// - Ok(usize): 库存索引中的 SKU 数
    /// - Err(InvalidDatasetFormat): 格式无效,库存表被清空
    pub fn load_inventory(&mut self, records: Vec<RawRecord>) -> ApiResult<usize> {
        self.run = None;

        if let Err(e) = self.orchestrator.validate(DatasetKind::Inventory, &records) {
            self.inventory_index = None;
            return Err(e.into());
        }

        info!(rows = records.len(), "库存数据加载");
        let index = self.orchestrator.build_index(&records);
        let size = index.len();
        self.inventory_index = Some(index);
        Ok(size)
    }

    /// 加载到货表
    ///
    /// # 返回
    /// - Ok(usize): 到货行数
    /// - Err(InvalidDatasetFormat): 格式无效,到货表被清空
    pub fn load_arrival(&mut self, records: Vec<RawRecord>) -> ApiResult<usize> {
        self.run = None;

        if let Err(e) = self.orchestrator.validate(DatasetKind::Arrival, &records) {
            self.arrival = None;
            return Err(e.into());
        }

        info!(rows = records.len(), "到货数据加载");
        let rows = records.len();
        self.arrival = Some(records);
        Ok(rows)
    }

    /// 从文件加载数据集（.xlsx / .xls / .csv）
    pub fn load_file<P: AsRef<Path>>(&mut self, kind: DatasetKind, path: P) -> ApiResult<usize> {
        let path = path.as_ref();
        let records = match UniversalFileParser.parse(path) {
            Ok(records) => records,
            Err(e) => {
                warn!(dataset = %kind, path = %path.display(), error = %e, "文件读取失败");
                match kind {
                    DatasetKind::Inventory => self.inventory_index = None,
                    DatasetKind::Arrival => self.arrival = None,
                }
                self.run = None;
                return Err(e.into());
            }
        };

        match kind {
            DatasetKind::Inventory => self.load_inventory(records),
            DatasetKind::Arrival => self.load_arrival(records),
        }
    }

    /// 两个数据集均已加载
    pub fn is_ready(&self) -> bool {
        self.inventory_index.is_some() && self.arrival.is_some()
    }

    // ==========================================
    // 生成清单
    // ==========================================

    /// 生成补货清单（重置当前查询）
    pub fn process(&mut self) -> ApiResult<&ReplenishmentRun> {
        let index = self
            .inventory_index
            .as_ref()
            .ok_or(ApiError::DatasetNotLoaded(DatasetKind::Inventory))?;
        let arrival = self
            .arrival
            .as_ref()
            .ok_or(ApiError::DatasetNotLoaded(DatasetKind::Arrival))?;

        let run = self.orchestrator.reconcile(arrival, index);
        self.query.clear();
        Ok(self.run.insert(run))
    }

    pub fn run(&self) -> Option<&ReplenishmentRun> {
        self.run.as_ref()
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 设置查询并返回过滤视图
    pub fn search(&mut self, query: &str) -> ApiResult<ReplenishmentView<'_>> {
        self.set_query(query)?;
        self.current_view()
    }

    /// 仅设置查询（视图通过 current_view 读取）
    pub fn set_query(&mut self, query: &str) -> ApiResult<()> {
        if self.run.is_none() {
            return Err(ApiError::NotProcessed);
        }
        self.query = query.to_string();
        Ok(())
    }

    /// 当前查询下的视图
    pub fn current_view(&self) -> ApiResult<ReplenishmentView<'_>> {
        let run = self.run.as_ref().ok_or(ApiError::NotProcessed)?;
        Ok(run.search(&self.query))
    }

    /// 标准清单统计
    pub fn canonical_stats(&self) -> ApiResult<ReplenishmentStats> {
        let run = self.run.as_ref().ok_or(ApiError::NotProcessed)?;
        Ok(run.stats())
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}
