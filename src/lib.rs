// ==========================================
// V-Replenishment 门店智能补货清单生成器 - 核心库
// ==========================================
// 输入: 门店库存表 + 到货表（Excel / CSV）
// 输出: 按优先级排序的补货清单（支持搜索过滤与统计）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 对账/排序/搜索/统计
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DatasetKind, Priority, ReplenishStatus, SkuNormalization};

// 领域实体
pub use domain::{
    CellValue, InventoryEntry, InventoryIndex, ItemDetails, RawRecord, ReconcileCounters,
    ReplenishmentItem, ReplenishmentStats,
};

// 引擎
pub use engine::{
    InventoryIndexBuilder, PrioritySorter, ReconciliationEngine, ReplenishmentOrchestrator,
    ReplenishmentRun, ReplenishmentView,
};

// 配置
pub use config::{ConfigManager, ReplenishConfig, ReplenishConfigReader};

// API
pub use api::{ApiError, ApiResult, ReplenishmentApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "门店智能补货清单生成器";
