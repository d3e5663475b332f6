// ==========================================
// V-Replenishment 补货清单生成器 - 搜索投影
// ==========================================
// 职责: 按关键字从标准清单派生只读视图,并重算视图统计
// 红线: 过滤不改变顺序,不修改源条目
// ==========================================

use crate::domain::replenishment::{ReplenishmentItem, ReplenishmentStats};
use serde::Serialize;
use tracing::debug;

/// 清单视图（引用标准清单中的条目）
#[derive(Debug, Clone, Serialize)]
pub struct ReplenishmentView<'a> {
    pub query: String,
    pub items: Vec<&'a ReplenishmentItem>,
    pub stats: ReplenishmentStats,
}

impl<'a> ReplenishmentView<'a> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 标准化查询词（去首尾空白 + 小写）
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// 条目是否匹配（款号/名称/颜色/品牌/分类 任一包含关键字）
///
/// needle 必须已标准化
pub fn matches(item: &ReplenishmentItem, needle: &str) -> bool {
    let d = &item.details;
    [
        &d.item_number,
        &d.product_name,
        &d.color,
        &d.brand,
        &d.category,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// 从标准清单派生视图
///
/// 空查询返回完整清单（原顺序）
pub fn filter<'a>(items: &'a [ReplenishmentItem], query: &str) -> ReplenishmentView<'a> {
    let needle = normalize_query(query);

    let visible: Vec<&ReplenishmentItem> = if needle.is_empty() {
        items.iter().collect()
    } else {
        items.iter().filter(|item| matches(item, &needle)).collect()
    };

    let stats = ReplenishmentStats::from_items(visible.iter().copied());
    debug!(query = %needle, visible = visible.len(), total = items.len(), "搜索过滤完成");

    ReplenishmentView {
        query: needle,
        items: visible,
        stats,
    }
}
