// ==========================================
// V-Replenishment 补货清单生成器 - 数据清洗器
// ==========================================
// 职责: SKU 标准化 / 数值转换（库存: 浮点, 数量: 整数）
// 红线: 转换失败一律回落到 0,从不报错
// ==========================================

use crate::domain::types::SkuNormalization;
use std::num::IntErrorKind;

#[derive(Debug, Clone, Copy, Default)]
pub struct DataCleaner {
    sku_normalization: SkuNormalization,
}

impl DataCleaner {
    pub fn new(sku_normalization: SkuNormalization) -> Self {
        Self { sku_normalization }
    }

    /// 标准化 SKU（库存表与到货表共用同一规则）
    pub fn normalize_sku(&self, value: &str) -> String {
        let trimmed = value.trim();
        match self.sku_normalization {
            SkuNormalization::Trim => trimmed.to_string(),
            SkuNormalization::TrimUppercase => trimmed.to_uppercase(),
        }
    }

    /// 解析库存数量（浮点）
    ///
    /// 取字符串开头的数字部分（"12.5件" → 12.5）;无法解析或非有限值 → 0
    pub fn parse_stock(&self, value: &str) -> f64 {
        let prefix = numeric_prefix(value.trim(), true);
        match prefix.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => 0.0,
        }
    }

    /// 解析到货数量（整数）
    ///
    /// 取字符串开头的整数部分（"3.7" → 3, "12 pcs" → 12）;无法解析 → 0
    ///
    /// 超出 i64 范围的整数饱和到 i64::MAX / i64::MIN
    pub fn parse_quantity(&self, value: &str) -> i64 {
        match numeric_prefix(value.trim(), false).parse::<i64>() {
            Ok(v) => v,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 0,
            },
        }
    }
}

/// 截取开头的数字前缀（可带符号,allow_fraction 时允许小数与指数）
fn numeric_prefix(value: &str, allow_fraction: bool) -> &str {
    let bytes = value.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;

    if allow_fraction {
        if end < bytes.len() && bytes[end] == b'.' {
            let frac_start = end + 1;
            let mut frac_end = frac_start;
            while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            if frac_end > frac_start || has_digits {
                has_digits = has_digits || frac_end > frac_start;
                end = frac_end;
            }
        }
        // 指数部分必须完整才接受
        if has_digits && end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
                exp_end += 1;
            }
            let exp_digits_start = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits_start {
                end = exp_end;
            }
        }
    }

    if has_digits {
        &value[..end]
    } else {
        ""
    }
}
