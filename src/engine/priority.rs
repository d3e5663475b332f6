// ==========================================
// V-Replenishment 补货清单生成器 - 优先级与排序引擎
// ==========================================
// 职责: 优先级判定 + 补货清单全序排序
// 输入: 对账产出的补货条目（无序）
// 输出: 排序后的补货清单（稳定排序）
// ==========================================

use crate::domain::replenishment::ReplenishmentItem;
use crate::domain::types::Priority;
use std::cmp::Ordering;

/// 优先级判定
///
/// - 新品 → HIGH
/// - 已有商品且库存为 0 → MEDIUM
/// - 其余 → LOW（当前纳入规则下不可达）
pub fn assign_priority(is_new: bool, current_stock: f64) -> Priority {
    if is_new {
        Priority::High
    } else if current_stock == 0.0 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

// ==========================================
// PrioritySorter - 补货清单排序引擎
// ==========================================
pub struct PrioritySorter {
    // 无状态引擎,不需要注入依赖
}

impl PrioritySorter {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 原地排序补货清单（稳定排序,相等元素保持原相对顺序）
    ///
    /// 排序键:
    /// 1) 新品优先
    /// 2) 库存为 0 优先
    /// 3) current_stock 升序
    pub fn sort(&self, items: &mut [ReplenishmentItem]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    // ==========================================
    // 比较方法
    // ==========================================

    /// 比较两个条目
    ///
    /// Ordering::Less 表示 a 排在 b 之前
    pub fn compare(&self, a: &ReplenishmentItem, b: &ReplenishmentItem) -> Ordering {
        // 1. 新品优先
        match b.is_new().cmp(&a.is_new()) {
            Ordering::Equal => {}
            other => return other,
        }

        // 2. 库存为 0 优先
        match b.is_zero_stock().cmp(&a.is_zero_stock()) {
            Ordering::Equal => {}
            other => return other,
        }

        // 3. 库存升序（NaN 视为相等）
        a.current_stock
            .partial_cmp(&b.current_stock)
            .unwrap_or(Ordering::Equal)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for PrioritySorter {
    fn default() -> Self {
        Self::new()
    }
}
