// ==========================================
// V-Replenishment 补货清单生成器 - 数据集格式校验器
// ==========================================
// 职责: 对账前的最低限度结构校验（表头是否可识别）
// 规则: 至少一行的某个表头包含任一关键字段组的别名
// ==========================================

use crate::domain::record::RawRecord;
use crate::domain::types::DatasetKind;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{AliasTable, LogicalField};
use tracing::warn;

/// 库存表关键字段组: SKU / 商品名称 / 库存
const INVENTORY_KEY_GROUPS: [LogicalField; 3] = [
    LogicalField::InventorySku,
    LogicalField::InventoryProductName,
    LogicalField::InventoryStock,
];

/// 到货表关键字段组: 条码 / 款号 / 商品名称 / 到货数量
const ARRIVAL_KEY_GROUPS: [LogicalField; 4] = [
    LogicalField::ArrivalBarcode,
    LogicalField::ArrivalItemNumber,
    LogicalField::ArrivalProductName,
    LogicalField::ArrivalOrderQty,
];

pub struct FormatValidator<'a> {
    table: &'a AliasTable,
}

impl<'a> FormatValidator<'a> {
    pub fn new(table: &'a AliasTable) -> Self {
        Self { table }
    }

    /// 判断数据集表头是否可识别
    ///
    /// 空数据集视为无效
    pub fn is_valid(&self, kind: DatasetKind, records: &[RawRecord]) -> bool {
        let groups: &[LogicalField] = match kind {
            DatasetKind::Inventory => &INVENTORY_KEY_GROUPS,
            DatasetKind::Arrival => &ARRIVAL_KEY_GROUPS,
        };

        records.iter().any(|record| {
            record.headers().any(|header| {
                groups.iter().any(|field| {
                    self.table
                        .aliases(*field)
                        .iter()
                        .any(|alias| header.contains(alias.as_str()))
                })
            })
        })
    }

    /// 校验单个数据集
    pub fn validate(&self, kind: DatasetKind, records: &[RawRecord]) -> ImportResult<()> {
        if self.is_valid(kind, records) {
            Ok(())
        } else {
            warn!(dataset = %kind, rows = records.len(), "数据集格式无效");
            Err(ImportError::InvalidDatasetFormat {
                datasets: vec![kind],
            })
        }
    }

    /// 同时校验两个数据集,失败时列出所有无效的数据集
    pub fn validate_pair(
        &self,
        inventory: &[RawRecord],
        arrival: &[RawRecord],
    ) -> ImportResult<()> {
        let datasets: Vec<DatasetKind> = [
            (DatasetKind::Inventory, inventory),
            (DatasetKind::Arrival, arrival),
        ]
        .into_iter()
        .filter(|(kind, records)| !self.is_valid(*kind, records))
        .map(|(kind, _)| kind)
        .collect();

        if datasets.is_empty() {
            Ok(())
        } else {
            warn!(?datasets, "数据集格式无效");
            Err(ImportError::InvalidDatasetFormat { datasets })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator_table() -> AliasTable {
        AliasTable::default()
    }

    #[test]
    fn test_inventory_header_substring_match() {
        let table = validator_table();
        let validator = FormatValidator::new(&table);
        let records = vec![RawRecord::new().with("总库存(件)", "3")];
        assert!(validator.is_valid(DatasetKind::Inventory, &records));
    }

    #[test]
    fn test_empty_dataset_is_invalid() {
        let table = validator_table();
        let validator = FormatValidator::new(&table);
        assert!(!validator.is_valid(DatasetKind::Arrival, &[]));
    }

    #[test]
    fn test_arrival_with_unrelated_headers_is_invalid() {
        let table = validator_table();
        let validator = FormatValidator::new(&table);
        let records = vec![RawRecord::new().with("备注", "x").with("日期", "2024-01-01")];
        let err = validator.validate(DatasetKind::Arrival, &records).unwrap_err();
        assert_eq!(err.invalid_datasets(), &[DatasetKind::Arrival]);
    }

    #[test]
    fn test_validate_pair_reports_each_failing_dataset() {
        let table = validator_table();
        let validator = FormatValidator::new(&table);
        let bad = vec![RawRecord::new().with("foo", "bar")];
        let good_arrival = vec![RawRecord::new().with("Barcode", "A1")];

        let err = validator.validate_pair(&bad, &bad).unwrap_err();
        assert_eq!(
            err.invalid_datasets(),
            &[DatasetKind::Inventory, DatasetKind::Arrival]
        );

        let err = validator.validate_pair(&bad, &good_arrival).unwrap_err();
        assert_eq!(err.invalid_datasets(), &[DatasetKind::Inventory]);
    }

    #[test]
    fn test_any_row_may_carry_recognised_header() {
        let table = validator_table();
        let validator = FormatValidator::new(&table);
        let records = vec![
            RawRecord::new().with("foo", "bar"),
            RawRecord::new().with("Item Number", "ST-01"),
        ];
        assert!(validator.is_valid(DatasetKind::Arrival, &records));
    }
}
