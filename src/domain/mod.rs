// ==========================================
// V-Replenishment 补货清单生成器 - 领域模型层
// ==========================================
// 职责: 定义原始记录、库存索引、补货条目与类型
// 红线: 不含文件读取逻辑,不含引擎逻辑
// ==========================================

pub mod inventory;
pub mod record;
pub mod replenishment;
pub mod types;

// 重导出核心类型
pub use inventory::{InventoryEntry, InventoryIndex};
pub use record::{CellValue, RawRecord};
pub use replenishment::{ItemDetails, ReconcileCounters, ReplenishmentItem, ReplenishmentStats};
pub use types::{DatasetKind, Priority, ReplenishStatus, SkuNormalization};
