// ==========================================
// V-Replenishment 补货清单生成器 - 补货清单实体
// ==========================================
// 职责: 补货条目 / 对账计数 / 汇总统计
// 红线: 清单中的条目必须是新品或库存恰好为 0
// ==========================================

use crate::domain::types::{Priority, ReplenishStatus};
use crate::engine::priority::assign_priority;
use serde::{Deserialize, Serialize};

// ==========================================
// ItemDetails - 描述性字段
// ==========================================
// 到货表优先,缺失时回落到库存表信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub gender: String,
    pub item_number: String,
    pub product_name: String,
    pub color: String,
    pub size: String,
    pub brand: String,
    pub category: String,
    pub retail_price: String,
    pub batch_number: String,
}

// ==========================================
// ReplenishmentItem - 补货条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplenishmentItem {
    pub sku: String,
    status: ReplenishStatus,
    pub order_quantity: i64,
    pub current_stock: f64,
    #[serde(flatten)]
    pub details: ItemDetails,
    priority: Priority,
}

impl ReplenishmentItem {
    /// 创建补货条目
    ///
    /// status 与 priority 由 is_new / current_stock 派生,不可单独指定
    pub fn new(
        sku: impl Into<String>,
        order_quantity: i64,
        current_stock: f64,
        is_new: bool,
        details: ItemDetails,
    ) -> Self {
        Self {
            sku: sku.into(),
            status: ReplenishStatus::from_is_new(is_new),
            order_quantity,
            current_stock,
            details,
            priority: assign_priority(is_new, current_stock),
        }
    }

    pub fn status(&self) -> ReplenishStatus {
        self.status
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_new(&self) -> bool {
        self.status == ReplenishStatus::New
    }

    pub fn is_zero_stock(&self) -> bool {
        self.current_stock == 0.0
    }
}

// ==========================================
// ReconcileCounters - 对账过程计数
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileCounters {
    pub new_count: usize,
    pub zero_stock_count: usize,
    /// 缺少条码被跳过的行数
    pub skipped_missing_sku: usize,
    /// 数量 <= 0（含无法解析）被跳过的行数
    pub skipped_non_positive_qty: usize,
    /// 库存 > 0 被业务规则排除的行数
    pub excluded_in_stock: usize,
}

// ==========================================
// ReplenishmentStats - 汇总统计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplenishmentStats {
    pub total: usize,
    pub new_items: usize,
    pub zero_stock_items: usize,
    pub total_order_qty: i64,
}
