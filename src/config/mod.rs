// ==========================================
// V-Replenishment 补货清单生成器 - 配置层
// ==========================================
// 职责: SKU 标准化方式、表头别名扩展、语言、门店名称
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod replenish_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager, ReplenishConfig};
pub use replenish_config_trait::ReplenishConfigReader;
