// ==========================================
// V-Replenishment 补货清单生成器 - 领域类型定义
// ==========================================
// 职责: 补货状态 / 优先级 / 数据集类型 / SKU 标准化方式
// ==========================================

use crate::i18n::t;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 补货状态 (Replenish Status)
// ==========================================
// NEW: 库存表中不存在的 SKU
// REPLENISH: 库存表中存在且库存为 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplenishStatus {
    New,       // 新品
    Replenish, // 补货
}

impl ReplenishStatus {
    pub fn from_is_new(is_new: bool) -> Self {
        if is_new {
            ReplenishStatus::New
        } else {
            ReplenishStatus::Replenish
        }
    }

    /// 本地化显示标签（NEW / 补货）
    pub fn label(&self) -> String {
        match self {
            ReplenishStatus::New => t("status.new"),
            ReplenishStatus::Replenish => t("status.replenish"),
        }
    }
}

impl fmt::Display for ReplenishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplenishStatus::New => write!(f, "NEW"),
            ReplenishStatus::Replenish => write!(f, "REPLENISH"),
        }
    }
}

// ==========================================
// 补货优先级 (Priority)
// ==========================================
// 派生字段,不可单独设置
// 红线: 等级制,不是评分制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,   // 高: 新品
    Medium, // 中: 已有商品,库存为 0
    Low,    // 低: 其余情况
}

impl Priority {
    /// 本地化显示标签（高 / 中 / 低）
    pub fn label(&self) -> String {
        match self {
            Priority::High => t("priority.high"),
            Priority::Medium => t("priority.medium"),
            Priority::Low => t("priority.low"),
        }
    }

    /// 清单备注（新品首次到货 / 库存为0需优先补货 / 库存不足需补货）
    pub fn remark(&self) -> String {
        match self {
            Priority::High => t("remark.first_arrival"),
            Priority::Medium => t("remark.zero_stock"),
            Priority::Low => t("remark.low_stock"),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "HIGH"),
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::Low => write!(f, "LOW"),
        }
    }
}

// ==========================================
// 数据集类型 (Dataset Kind)
// ==========================================
// 用于按数据集报告格式错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatasetKind {
    Inventory, // 库存表
    Arrival,   // 到货表
}

impl DatasetKind {
    pub fn label(&self) -> String {
        match self {
            DatasetKind::Inventory => t("dataset.inventory"),
            DatasetKind::Arrival => t("dataset.arrival"),
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::Inventory => write!(f, "INVENTORY"),
            DatasetKind::Arrival => write!(f, "ARRIVAL"),
        }
    }
}

// ==========================================
// SKU 标准化方式
// ==========================================
// 默认仅去除首尾空白,大小写敏感
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkuNormalization {
    #[default]
    Trim,
    TrimUppercase,
}

impl fmt::Display for SkuNormalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkuNormalization::Trim => write!(f, "TRIM"),
            SkuNormalization::TrimUppercase => write!(f, "TRIM_UPPERCASE"),
        }
    }
}
