// ==========================================
// V-Replenishment 补货清单生成器 - 引擎层
// ==========================================
// 职责: 库存索引 → 对账 → 优先级排序 → 搜索投影 → 汇总统计
// 红线: 纯计算,不返回错误（格式校验除外）
// ==========================================

pub mod inventory_index;
pub mod orchestrator;
pub mod priority;
pub mod reconciler;
pub mod search;
pub mod stats;

// 重导出核心引擎
pub use inventory_index::InventoryIndexBuilder;
pub use orchestrator::{ReplenishmentOrchestrator, ReplenishmentRun};
pub use priority::{assign_priority, PrioritySorter};
pub use reconciler::{ReconcileOutcome, ReconciliationEngine};
pub use search::ReplenishmentView;
