// ==========================================
// V-Replenishment 补货清单生成器 - 汇总统计
// ==========================================
// 职责: 对任意清单视图做纯归约（总数/新品数/零库存数/总到货数量）
// ==========================================

use crate::domain::replenishment::{ReplenishmentItem, ReplenishmentStats};

impl ReplenishmentStats {
    /// 从条目序列计算统计（不保留任何状态）
    ///
    /// 总到货数量饱和累加,不会溢出
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a ReplenishmentItem>,
    {
        items
            .into_iter()
            .fold(ReplenishmentStats::default(), |mut stats, item| {
                stats.total += 1;
                if item.is_new() {
                    stats.new_items += 1;
                }
                if item.is_zero_stock() {
                    stats.zero_stock_items += 1;
                }
                stats.total_order_qty = stats
                    .total_order_qty
                    .saturating_add(item.order_quantity);
                stats
            })
    }
}
