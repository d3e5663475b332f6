// ==========================================
// V-Replenishment 补货清单生成器 - API 层
// ==========================================
// 职责: 面向渲染/导出等外部调用方的业务接口
// ==========================================

pub mod error;
pub mod replenishment_api;

pub use error::{ApiError, ApiResult};
pub use replenishment_api::ReplenishmentApi;
