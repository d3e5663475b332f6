// ==========================================
// 对账引擎集成测试
// ==========================================
// 测试目标: 库存索引 → 对账 → 排序 的完整流程
// ==========================================

mod helpers;

use helpers::mock_config::MockConfig;
use std::sync::Arc;
use test_helpers::{arrival_row, inventory_row, sample_arrival, sample_inventory};
use v_replenishment::importer::{ImportError, LogicalField};
use v_replenishment::{
    logging, DatasetKind, Priority, RawRecord, ReplenishStatus, ReplenishmentOrchestrator,
};

fn orchestrator(config: MockConfig) -> ReplenishmentOrchestrator<MockConfig> {
    ReplenishmentOrchestrator::new(Arc::new(config))
}

fn skus(items: &[v_replenishment::ReplenishmentItem]) -> Vec<&str> {
    items.iter().map(|i| i.sku.as_str()).collect()
}

#[test]
fn test_standard_scenario() {
    logging::init_test();

    let run = orchestrator(MockConfig::default())
        .run(&sample_inventory(), &sample_arrival())
        .unwrap();

    assert_eq!(skus(&run.items), vec!["A3", "A1"]);

    let a3 = &run.items[0];
    assert_eq!(a3.status(), ReplenishStatus::New);
    assert_eq!(a3.priority(), Priority::High);
    assert_eq!(a3.current_stock, 0.0);
    assert_eq!(a3.order_quantity, 1);
    assert_eq!(a3.details.color, "Blue");

    let a1 = &run.items[1];
    assert_eq!(a1.status(), ReplenishStatus::Replenish);
    assert_eq!(a1.priority(), Priority::Medium);
    assert_eq!(a1.order_quantity, 3);

    assert_eq!(run.counters.new_count, 1);
    assert_eq!(run.counters.zero_stock_count, 2);
    assert_eq!(run.counters.excluded_in_stock, 1);

    let stats = run.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.new_items, 1);
    assert_eq!(stats.zero_stock_items, 2);
    assert_eq!(stats.total_order_qty, 4);
}

#[test]
fn test_unparsable_and_non_positive_quantity_dropped() {
    let arrival = vec![
        arrival_row("A3", "S-300", "Sock", "Blue", "abc"),
        arrival_row("A4", "S-400", "Sock", "Green", "0"),
        arrival_row("A5", "S-500", "Sock", "Grey", "-2"),
        arrival_row("A6", "S-600", "Sock", "White", "2"),
    ];

    let run = orchestrator(MockConfig::default())
        .run(&sample_inventory(), &arrival)
        .unwrap();

    assert_eq!(skus(&run.items), vec!["A6"]);
    assert_eq!(run.counters.skipped_non_positive_qty, 3);
}

#[test]
fn test_huge_quantities_kept_and_total_saturates() {
    let arrival = vec![
        arrival_row("N1", "X-1", "Tent", "Green", "9000000000000000000"),
        arrival_row("N2", "X-2", "Tent", "Green", "9000000000000000000"),
        arrival_row("N3", "X-3", "Tent", "Green", "99999999999999999999"),
    ];

    let run = orchestrator(MockConfig::default())
        .run(&sample_inventory(), &arrival)
        .unwrap();

    assert_eq!(run.items.len(), 3);
    assert_eq!(run.counters.skipped_non_positive_qty, 0);
    assert_eq!(run.items[2].order_quantity, i64::MAX);

    let canonical = run.stats();
    assert_eq!(canonical.total_order_qty, i64::MAX);
    let view = run.search("x-1");
    assert!(view.stats.total_order_qty <= canonical.total_order_qty);
}

#[test]
fn test_missing_barcode_skipped() {
    let arrival = vec![
        arrival_row("", "S-300", "Sock", "Blue", "1"),
        arrival_row("   ", "S-301", "Sock", "Blue", "1"),
        arrival_row("A3", "S-302", "Sock", "Blue", "1"),
    ];

    let run = orchestrator(MockConfig::default())
        .run(&sample_inventory(), &arrival)
        .unwrap();

    assert_eq!(skus(&run.items), vec!["A3"]);
    assert_eq!(run.counters.skipped_missing_sku, 2);
}

#[test]
fn test_whitespace_barcode_falls_through_to_next_alias() {
    let arrival = vec![RawRecord::new()
        .with("Barcode", "   ")
        .with("SKU", "N9")
        .with("Order Qty", "1")];

    let run = orchestrator(MockConfig::default())
        .run(&sample_inventory(), &arrival)
        .unwrap();

    assert_eq!(skus(&run.items), vec!["N9"]);
    assert_eq!(run.counters.skipped_missing_sku, 0);
}

#[test]
fn test_missing_stock_field_counts_as_zero() {
    let inventory = vec![RawRecord::new().with("规格编码", "A1").with("商品名称", "Tee")];
    let arrival = vec![arrival_row("A1", "T-100", "Tee", "Red", "4")];

    let run = orchestrator(MockConfig::default())
        .run(&inventory, &arrival)
        .unwrap();

    assert_eq!(run.items.len(), 1);
    assert_eq!(run.items[0].status(), ReplenishStatus::Replenish);
    assert_eq!(run.items[0].current_stock, 0.0);
}

#[test]
fn test_negative_stock_is_excluded() {
    let inventory = vec![inventory_row("A1", "Tee", "-2")];
    let arrival = vec![arrival_row("A1", "T-100", "Tee", "Red", "4")];

    let run = orchestrator(MockConfig::default())
        .run(&inventory, &arrival)
        .unwrap();

    assert!(run.is_empty());
    assert_eq!(run.counters.excluded_in_stock, 1);
}

#[test]
fn test_duplicate_arrival_rows_kept() {
    let arrival = vec![
        arrival_row("A3", "S-300", "Sock", "Blue", "1"),
        arrival_row("A3", "S-300", "Sock", "Blue", "2"),
    ];

    let run = orchestrator(MockConfig::default())
        .run(&sample_inventory(), &arrival)
        .unwrap();

    assert_eq!(run.items.len(), 2);
    assert_eq!(run.stats().total_order_qty, 3);
    // 稳定排序: 保持到货表顺序
    assert_eq!(run.items[0].order_quantity, 1);
    assert_eq!(run.items[1].order_quantity, 2);
}

#[test]
fn test_product_name_falls_back_to_inventory() {
    let arrival = vec![RawRecord::new().with("Barcode", "A1").with("Order Qty", "1")];

    let run = orchestrator(MockConfig::default())
        .run(&sample_inventory(), &arrival)
        .unwrap();

    assert_eq!(run.items[0].details.product_name, "Tee");
}

#[test]
fn test_sku_case_sensitivity_follows_config() {
    let inventory = vec![inventory_row("a1", "Tee", "0")];
    let arrival = vec![arrival_row("A1", "T-100", "Tee", "Red", "1")];

    let run = orchestrator(MockConfig::default())
        .run(&inventory, &arrival)
        .unwrap();
    assert_eq!(run.items[0].status(), ReplenishStatus::New);

    let run = orchestrator(MockConfig::uppercase())
        .run(&inventory, &arrival)
        .unwrap();
    assert_eq!(run.items[0].status(), ReplenishStatus::Replenish);
}

#[test]
fn test_extra_alias_recognized() {
    let config = MockConfig::default().with_alias(LogicalField::ArrivalOrderQty, "件数");
    let arrival = vec![RawRecord::new().with("Barcode", "A9").with("件数", "6")];

    let run = orchestrator(config).run(&sample_inventory(), &arrival).unwrap();

    assert_eq!(run.items.len(), 1);
    assert_eq!(run.items[0].order_quantity, 6);
}

#[test]
fn test_invalid_datasets_reported_together() {
    let junk = vec![RawRecord::new().with("备注", "x")];

    let err = orchestrator(MockConfig::default())
        .run(&junk, &junk)
        .unwrap_err();

    assert_eq!(
        err.invalid_datasets(),
        &[DatasetKind::Inventory, DatasetKind::Arrival]
    );
    assert!(matches!(err, ImportError::InvalidDatasetFormat { .. }));
}

#[test]
fn test_empty_result_is_valid() {
    let arrival = vec![arrival_row("A2", "C-200", "Cap", "Black", "2")];

    let run = orchestrator(MockConfig::default().with_store("三里屯店"))
        .run(&sample_inventory(), &arrival)
        .unwrap();

    assert!(run.is_empty());
    assert_eq!(run.store_name, "三里屯店");
    assert_eq!(run.stats().total, 0);
}
